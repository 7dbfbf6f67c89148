//! Test utilities and shared fixtures for the Phrasebook workspace.
//!
//! Enabled for dependent crates through the `testing` feature.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write a pack file named `<locale>.<extension>` into `dir`.
pub fn write_pack_file(dir: &Path, locale: &str, extension: &str, contents: &str) -> PathBuf {
    let path = dir.join(format!("{locale}.{extension}"));
    std::fs::write(&path, contents).expect("Failed to write pack file");
    path
}

/// Locale pack fixtures modelled on a hosting control panel.
pub mod pack_fixtures {
    /// English default pack, JSON encoded.
    pub const ENGLISH_JSON: &str = r#"{
    "yes": "Yes",
    "no": "No",
    "Log in": "Log in",
    "Welcome": "Welcome",
    "LOGGED_IN_AS": "Logged in as %s",
    "USER_CREATED_OK": "User <a href=\"/edit/user/?user=%s\"><b>%s</b></a> has been created successfully.",
    "DNS_RECORD_CREATED_OK": "Record <b>%s.%s</b> has been created successfully.",
    "SERVICE_ACTION_FAILED": "\"%s\" \"%s\" failed",
    "GREETINGS": "Welcome,\n",
    "ACCOUNT_READY": "Your account has been created and ready to use.\n\nhttps://%s/login/\nUsername: %s\nPassword: %s\n\n--\nControl Panel\n",
    "RESET_NOTICE": "",
    "DISK_USAGE": "Disk usage: 100%% of %s",
    "account": ["1 account", "%s accounts"],
    "domain": ["1 domain", "%s domains"],
    "month": ["1 month", "%s months"]
}"#;

    /// Partial German pack, JSON encoded. Lacks `Welcome`, `month` and `DISK_USAGE`.
    pub const GERMAN_JSON: &str = r#"{
    "yes": "Ja",
    "no": "Nein",
    "Log in": "Anmelden",
    "LOGGED_IN_AS": "Angemeldet als %s",
    "USER_CREATED_OK": "Benutzer <a href=\"/edit/user/?user=%s\"><b>%s</b></a> wurde erfolgreich angelegt.",
    "DNS_RECORD_CREATED_OK": "Eintrag <b>%s.%s</b> wurde erfolgreich angelegt.",
    "SERVICE_ACTION_FAILED": "\"%s\" \"%s\" fehlgeschlagen",
    "GREETINGS": "Hallo,\n",
    "ACCOUNT_READY": "Ihr Account wurde erfolgreich erstellt.\n\nhttps://%s/login/\nBenutzername: %s\nPasswort: %s\n\n--\nControl Panel\n",
    "RESET_NOTICE": "",
    "account": ["1 Konto", "%s Konten"],
    "domain": ["1 Domäne", "%s Domänen"]
}"#;

    /// French pack, TOML encoded, used for loader tests.
    pub const FRENCH_TOML: &str = r#"
yes = "Oui"
no = "Non"
LOGGED_IN_AS = "Connecté en tant que %s"
account = ["%s compte", "%s comptes"]
"#;
}
