// tests/config_tests.rs
mod common;

use std::collections::HashMap;
use std::fs;

use journal_envelope::config::{self, apply_env_overrides, Config};
use journal_envelope::consts::DEFAULT_JOURNAL_DB;
use journal_envelope::EnvelopeError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn parses_full_toml() {
    let conf = Config::from_toml_str(
        r#"
        [keys]
        aead_key = "correct horse battery staple"
        salt = "my salt!"
        legacy_key = "grateful-passphrase"

        [paths]
        journal_db = "/var/lib/journal/journal.db"
        "#,
    )
    .unwrap();

    assert_eq!(conf.keys.aead_key(), Some("correct horse battery staple"));
    assert_eq!(conf.keys.salt(), Some("my salt!"));
    assert_eq!(conf.keys.fallback_secret(), None);
    assert_eq!(conf.keys.legacy_key(), Some("grateful-passphrase"));
    assert_eq!(conf.paths.journal_db, "/var/lib/journal/journal.db");
}

#[test]
fn missing_sections_use_defaults() {
    let conf = Config::from_toml_str("").unwrap();
    assert_eq!(conf.keys.aead_key(), None);
    assert_eq!(conf.paths.journal_db, DEFAULT_JOURNAL_DB);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = Config::from_toml_str("[keys\naead_key = ").unwrap_err();
    assert!(matches!(err, EnvelopeError::Config(_)));
}

#[test]
fn environment_overrides_file_values() {
    let mut conf = Config::from_toml_str("[keys]\naead_key = \"from-file\"\n").unwrap();
    apply_env_overrides(
        &mut conf,
        lookup(&[
            ("JOURNAL_KEY", "from-env"),
            ("JOURNAL_SALT", "c2FsdHNhbHQ="),
            ("JOURNAL_DB_PATH", "/tmp/other.db"),
        ]),
    );
    assert_eq!(conf.keys.aead_key(), Some("from-env"));
    assert_eq!(conf.keys.salt(), Some("c2FsdHNhbHQ="));
    assert_eq!(conf.paths.journal_db, "/tmp/other.db");
}

#[test]
fn journal_enc_key_feeds_both_schemes() {
    let mut conf = Config::default();
    apply_env_overrides(&mut conf, lookup(&[("JOURNAL_ENC_KEY", "shared")]));
    assert_eq!(conf.keys.aead_key(), Some("shared"));
    assert_eq!(conf.keys.legacy_key(), Some("shared"));
}

#[test]
fn primary_variables_win_over_aliases() {
    let mut conf = Config::default();
    apply_env_overrides(
        &mut conf,
        lookup(&[
            ("JOURNAL_KEY", "aead"),
            ("JOURNAL_ENC_KEY", "legacy"),
            ("JWT_SECRET", "jwt"),
        ]),
    );
    assert_eq!(conf.keys.aead_key(), Some("aead"));
    assert_eq!(conf.keys.legacy_key(), Some("legacy"));
    assert_eq!(conf.keys.fallback_secret(), Some("jwt"));
}

#[test]
fn jwt_secret_alone_salts_and_keys_legacy() {
    let mut conf = Config::default();
    apply_env_overrides(&mut conf, lookup(&[("JWT_SECRET", "jwt")]));
    assert_eq!(conf.keys.aead_key(), None);
    assert_eq!(conf.keys.fallback_secret(), Some("jwt"));
    assert_eq!(conf.keys.legacy_key(), Some("jwt"));
}

#[test]
fn empty_variables_are_ignored() {
    let mut conf = Config::from_toml_str("[keys]\naead_key = \"from-file\"\n").unwrap();
    apply_env_overrides(
        &mut conf,
        lookup(&[("JOURNAL_KEY", ""), ("JOURNAL_DB_PATH", "")]),
    );
    assert_eq!(conf.keys.aead_key(), Some("from-file"));
    assert_eq!(conf.paths.journal_db, DEFAULT_JOURNAL_DB);
}

#[test]
fn load_from_missing_file_falls_back_to_defaults() {
    common::setup();
    let dir = tempfile::tempdir().unwrap();
    let conf = config::load_from(
        &dir.path().join("nope.toml"),
        lookup(&[("JOURNAL_KEY", "env-only")]),
    )
    .unwrap();
    assert_eq!(conf.keys.aead_key(), Some("env-only"));
    assert_eq!(conf.paths.journal_db, DEFAULT_JOURNAL_DB);
}

#[test]
fn load_from_reads_file_then_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal-envelope.toml");
    fs::write(
        &path,
        "[keys]\naead_key = \"file-key\"\nsalt = \"file-salt\"\n",
    )
    .unwrap();

    let conf = config::load_from(&path, lookup(&[("JOURNAL_SALT", "env-salt")])).unwrap();
    assert_eq!(conf.keys.aead_key(), Some("file-key"));
    assert_eq!(conf.keys.salt(), Some("env-salt"));
}

#[test]
fn debug_output_redacts_secrets() {
    let conf = Config::from_toml_str(
        "[keys]\naead_key = \"hunter2-passphrase\"\nsalt = \"pepper\"\n",
    )
    .unwrap();
    let printed = format!("{:?}", conf.keys);
    assert!(printed.contains("[REDACTED]"));
    assert!(!printed.contains("hunter2"));
    assert!(!printed.contains("pepper"));
}
