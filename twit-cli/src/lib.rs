//! Connection test for the TWiT.tv API.
//!
//! Resolves the credentials file, builds a client and prints a short
//! report of shows and live streams.

pub mod report;

use std::path::{Path, PathBuf};

/// Environment variable naming the credentials file.
pub const CREDENTIALS_ENV: &str = "TWIT_CREDENTIALS_FILE";

const CREDENTIALS_CANDIDATES: [&str; 2] = ["credentials.yml", "../credentials.yml"];

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Pick the credentials file.
/// Priority: explicit argument > TWIT_CREDENTIALS_FILE > first existing candidate.
pub fn resolve_credentials_path(arg: Option<String>) -> PathBuf {
    if let Some(path) = arg.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(CREDENTIALS_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    first_existing(Path::new("."), &CREDENTIALS_CANDIDATES)
}

/// First candidate under `base` that exists, or the last candidate if none do.
fn first_existing(base: &Path, candidates: &[&str]) -> PathBuf {
    candidates
        .iter()
        .map(|c| base.join(c))
        .find(|p| p.exists())
        .unwrap_or_else(|| base.join(candidates[candidates.len() - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_argument_wins() {
        let path = resolve_credentials_path(Some("/etc/twit/credentials.yml".into()));
        assert_eq!(path, PathBuf::from("/etc/twit/credentials.yml"));
    }

    #[test]
    fn first_existing_prefers_earlier_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/credentials.yml"), "").unwrap();
        std::fs::write(dir.path().join("credentials.yml"), "").unwrap();

        let base = dir.path().join("sub");
        assert_eq!(
            first_existing(&base, &CREDENTIALS_CANDIDATES),
            base.join("credentials.yml")
        );
    }

    #[test]
    fn first_existing_falls_back_to_parent_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("credentials.yml"), "").unwrap();

        let base = dir.path().join("sub");
        let found = first_existing(&base, &CREDENTIALS_CANDIDATES);
        assert_eq!(found, base.join("../credentials.yml"));
        assert!(found.exists());
    }

    #[test]
    fn first_existing_defaults_to_last_candidate() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            first_existing(dir.path(), &CREDENTIALS_CANDIDATES),
            dir.path().join("../credentials.yml")
        );
    }
}
