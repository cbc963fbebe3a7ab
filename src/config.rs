use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "PawCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overrides where reference data (breed groups) is loaded from.
pub const RESOURCES_DIR_ENV: &str = "PAWCARE_RESOURCES_DIR";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,pawcare_health=debug"
    } else {
        "info"
    }
}

/// Reference data directory: `$PAWCARE_RESOURCES_DIR` if set, else the
/// crate's bundled `resources/`.
pub fn resources_dir() -> PathBuf {
    std::env::var_os(RESOURCES_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"))
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_tracing() {
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!("{} health engine v{}", APP_NAME, APP_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_pawcare() {
        assert_eq!(APP_NAME, "PawCare");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.6.0");
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(default_log_filter()).is_ok());
    }

    #[test]
    fn init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn bundled_resources_dir_exists() {
        if std::env::var_os(RESOURCES_DIR_ENV).is_none() {
            assert!(resources_dir().join("breed_groups.json").exists());
        }
    }
}
