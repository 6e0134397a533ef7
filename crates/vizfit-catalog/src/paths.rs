//! Catalog directory resolution.

use std::path::PathBuf;

/// Environment variable selecting a chart catalog directory.
pub const CATALOG_ENV_VAR: &str = "VIZFIT_CATALOG_DIR";

/// Catalog directory named by `VIZFIT_CATALOG_DIR`, if set and non-empty.
pub fn catalog_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
