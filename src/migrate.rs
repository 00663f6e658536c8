// src/migrate.rs
//! Encrypt legacy plaintext in place
//!
//! Values that already look encrypted are never touched, so a migration can
//! be re-run (or resumed after a crash) without writing anything twice.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::codec::EnvelopeCodec;
use crate::enums::{Scheme, TokenKind};
use crate::error::Result;
use crate::token::is_probably_encrypted;

/// Owner (user) id the persistence layer scopes entries by
pub type OwnerId = i64;

/// Entries written before per-user scoping have no owner; `None` selects them
pub type OwnerScope = Option<OwnerId>;

/// One stored content value and the record it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContent {
    pub id: i64,
    pub content: String,
}

/// Boundary with the persistence layer. The store owns the transaction:
/// `commit_contents` writes the whole batch or nothing.
pub trait EntryStore {
    fn load_contents(&mut self, owner: OwnerScope) -> Result<Vec<StoredContent>>;

    fn commit_contents(&mut self, owner: OwnerScope, updates: &[StoredContent]) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub scanned: usize,
    pub updated: usize,
    pub skipped: usize,
    /// Scheme new tokens were sealed with; `None` when nothing is configured
    pub scheme: Option<Scheme>,
}

/// How many stored values are in each form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentCensus {
    pub plaintext: usize,
    pub aead: usize,
    pub legacy: usize,
    pub taken_at: Option<DateTime<Utc>>,
}

impl ContentCensus {
    pub fn total(&self) -> usize {
        self.plaintext + self.aead + self.legacy
    }
}

/// Re-encrypt every value that is not probably-encrypted, in place.
///
/// With no scheme configured this is a no-op that reports zero updates.
pub fn migrate_contents<'a, I>(codec: &EnvelopeCodec, contents: I) -> MigrationReport
where
    I: IntoIterator<Item = &'a mut String>,
{
    let scheme = codec.active_scheme();
    let mut report = MigrationReport {
        scheme,
        ..MigrationReport::default()
    };

    for content in contents {
        report.scanned += 1;
        match scheme.and_then(|_| reencrypt(codec, content)) {
            Some(token) => {
                *content = token;
                report.updated += 1;
            }
            None => report.skipped += 1,
        }
    }
    report
}

/// Migrate all entries of one owner (or the unowned ones) with a single
/// batched commit
pub fn migrate_owner<S>(
    codec: &EnvelopeCodec,
    store: &mut S,
    owner: OwnerScope,
) -> Result<MigrationReport>
where
    S: EntryStore + ?Sized,
{
    let started = Instant::now();
    let mut rows = store.load_contents(owner)?;
    let before: Vec<String> = rows.iter().map(|r| r.content.clone()).collect();

    let report = migrate_contents(codec, rows.iter_mut().map(|r| &mut r.content));

    let updates: Vec<StoredContent> = rows
        .into_iter()
        .zip(before)
        .filter(|(row, old)| row.content != *old)
        .map(|(row, _)| row)
        .collect();

    if !updates.is_empty() {
        store.commit_contents(owner, &updates)?;
    }

    info!(
        owner = ?owner,
        scanned = report.scanned,
        updated = report.updated,
        skipped = report.skipped,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "migration finished"
    );
    Ok(report)
}

/// Classify stored values without decrypting anything. Values too short to
/// be a token count as plaintext, matching what a migration would encrypt.
pub fn census<'a, I>(values: I) -> ContentCensus
where
    I: IntoIterator<Item = &'a str>,
{
    let mut census = ContentCensus {
        taken_at: Some(Utc::now()),
        ..ContentCensus::default()
    };
    for value in values {
        if !is_probably_encrypted(value) {
            census.plaintext += 1;
            continue;
        }
        match TokenKind::classify(value) {
            TokenKind::Plaintext => census.plaintext += 1,
            TokenKind::Aead => census.aead += 1,
            TokenKind::Legacy => census.legacy += 1,
        }
    }
    census
}

fn reencrypt(codec: &EnvelopeCodec, content: &str) -> Option<String> {
    if codec.is_probably_encrypted(content) {
        return None;
    }
    let token = codec.encrypt_text(&codec.decrypt_text(content));
    (token != content).then_some(token)
}
