//! Ontology source path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the ontology term-set location.
pub const ONTOLOGY_ENV_VAR: &str = "SDRF_ONTOLOGY_PATH";

/// Resolve where ontology term sets are loaded from.
///
/// Resolution order:
/// 1. `SDRF_ONTOLOGY_PATH` environment variable (when set and non-empty)
/// 2. `configured`, usually from the command line or settings file
///
/// Returns `None` when neither is available; callers then run with an empty
/// registry and every ontology-backed column reports as unsupported.
pub fn resolve_ontology_path(configured: Option<&Path>) -> Option<PathBuf> {
    resolve_with(std::env::var_os(ONTOLOGY_ENV_VAR).map(PathBuf::from), configured)
}

fn resolve_with(from_env: Option<PathBuf>, configured: Option<&Path>) -> Option<PathBuf> {
    from_env
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| configured.map(Path::to_path_buf))
}
