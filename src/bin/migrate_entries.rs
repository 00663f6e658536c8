// src/bin/migrate_entries.rs
//! Encrypt plaintext journal entries still sitting in the database

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use journal_envelope::config;
use journal_envelope::db::{open_entry_db, SqliteEntryStore};
use journal_envelope::migrate::{
    census, migrate_owner, EntryStore, MigrationReport, OwnerId, OwnerScope,
};
use journal_envelope::EnvelopeCodec;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "migrate-entries", version, about)]
struct Args {
    /// SQLite journal database (defaults to the configured path)
    #[arg(long, env = "JOURNAL_DB_PATH")]
    db: Option<PathBuf>,

    /// TOML config file
    #[arg(long, env = "JOURNAL_ENVELOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Only migrate entries of this user
    #[arg(long, conflicts_with = "all")]
    owner: Option<OwnerId>,

    /// Migrate entries of every user, including entries that have none
    #[arg(long)]
    all: bool,

    /// Count plaintext and encrypted entries without writing
    #[arg(long)]
    dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let conf = match &args.config {
        Some(path) => config::load_from(path, |name| std::env::var(name).ok()),
        None => config::load(),
    }
    .context("Failed to load configuration")?;

    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&conf.paths.journal_db));
    let conn = open_entry_db(&db_path)
        .with_context(|| format!("Failed to open journal database {}", db_path.display()))?;
    let mut store = SqliteEntryStore::new(conn);

    let owners = match (args.owner, args.all) {
        (Some(owner), _) => vec![Some(owner)],
        (None, true) => store.owners()?,
        (None, false) => bail!("pass --owner <ID> or --all"),
    };

    let codec = EnvelopeCodec::new(conf.keys);
    match codec.active_scheme() {
        Some(scheme) => info!(%scheme, "encrypting with"),
        None => warn!("no encryption key configured, nothing will be written"),
    }

    if args.dry_run {
        let mut contents = Vec::new();
        for owner in &owners {
            contents.extend(store.load_contents(*owner)?.into_iter().map(|r| r.content));
        }
        let counts = census(contents.iter().map(String::as_str));
        if args.json {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        } else {
            println!(
                "{} entries: {} plaintext, {} enc1, {} legacy",
                counts.total(),
                counts.plaintext,
                counts.aead,
                counts.legacy
            );
        }
        return Ok(());
    }

    let mut total = MigrationReport {
        scheme: codec.active_scheme(),
        ..MigrationReport::default()
    };
    for owner in owners {
        let report = migrate_owner(&codec, &mut store, owner)
            .with_context(|| format!("Migration failed for {}", describe(owner)))?;
        total.scanned += report.scanned;
        total.updated += report.updated;
        total.skipped += report.skipped;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&total)?);
    } else {
        println!(
            "Scanned {} entries, encrypted {}, left {} untouched",
            total.scanned, total.updated, total.skipped
        );
    }
    Ok(())
}

fn describe(owner: OwnerScope) -> String {
    match owner {
        Some(id) => format!("user {id}"),
        None => "entries without a user".into(),
    }
}
