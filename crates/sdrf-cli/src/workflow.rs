//! Non-interactive driver for a matching session.
//!
//! The `map` command replays a list of pairs and skips against a
//! [`MatchSession`], then writes the merged table.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace, warn};

use sdrf_ingest::{read_local_table, read_sdrf_template};
use sdrf_map::{
    MatchRecord, MatchSession, RejectedTargetPolicy, RowCountMismatch, TargetChoice,
};
use sdrf_output::{DEFAULT_OUTPUT_NAME, write_sdrf_tsv};
use sdrf_standards::{
    ColumnCategory, OntologyRegistry, TEMPLATE_COLUMNS, category_of, ontology_key,
    resolve_ontology_path,
};
use sdrf_validate::ValueValidator;

use crate::logging::redact_value;
use crate::settings::Settings;

/// One `LOCAL=TARGET` pair given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSpec {
    pub local: String,
    pub target: String,
}

impl FromStr for PairSpec {
    type Err = String;

    /// Splits on the last `=`, so local names may contain `=`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((local, target)) = s.rsplit_once('=') else {
            return Err(format!("expected LOCAL=TARGET, got '{s}'"));
        };
        let (local, target) = (local.trim(), target.trim());
        if local.is_empty() || target.is_empty() {
            return Err(format!("expected LOCAL=TARGET, got '{s}'"));
        }
        Ok(Self {
            local: local.to_string(),
            target: target.to_string(),
        })
    }
}

impl fmt::Display for PairSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.local, self.target)
    }
}

/// Inputs of one `map` run, after CLI parsing.
#[derive(Debug, Clone, Default)]
pub struct MapRequest {
    pub local: PathBuf,
    pub template: PathBuf,
    /// Overrides the environment and settings.
    pub ontology: Option<PathBuf>,
    /// Restrict local candidates.
    pub select: Vec<String>,
    /// Restrict target candidates.
    pub targets: Vec<String>,
    pub pairs: Vec<PairSpec>,
    pub skips: Vec<String>,
    pub release_rejected: bool,
    /// Overrides the settings' missing-value token.
    pub missing_value: Option<String>,
    pub output: Option<PathBuf>,
}

/// Outcome of a `map` run.
#[derive(Debug, Clone)]
pub struct MapReport {
    pub records: Vec<MatchRecord>,
    pub row_mismatch: Option<RowCountMismatch>,
    /// Local columns neither paired nor skipped.
    pub unmatched_locals: Vec<String>,
    pub output: PathBuf,
    pub rows: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl MapReport {
    pub fn has_rejections(&self) -> bool {
        self.rejected > 0
    }
}

/// One row of the `columns` overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub category: ColumnCategory,
    /// Term-set key, for ontology-backed columns.
    pub ontology_key: Option<String>,
    pub has_terms: bool,
}

/// Load the ontology registry from the first configured location.
///
/// Without any location the registry is empty, so ontology columns report
/// as unsupported.
pub fn load_registry(explicit: Option<&Path>, settings: &Settings) -> Result<OntologyRegistry> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => resolve_ontology_path(settings.ontology.path.as_deref()),
    };
    let Some(path) = path else {
        warn!("no ontology path configured, ontology columns cannot be validated");
        return Ok(OntologyRegistry::new());
    };
    let registry = OntologyRegistry::load(&path)
        .with_context(|| format!("load ontology terms from {}", path.display()))?;
    info!(path = %path.display(), term_sets = registry.len(), "loaded ontology terms");
    Ok(registry)
}

/// Describe every canonical SDRF column against `registry`.
pub fn column_overview(registry: &OntologyRegistry) -> Vec<ColumnInfo> {
    TEMPLATE_COLUMNS
        .iter()
        .map(|&name| {
            let category = category_of(name);
            let key = category.uses_ontology().then(|| ontology_key(name));
            ColumnInfo {
                name,
                category,
                has_terms: key.is_some() && registry.has_terms_for(name),
                ontology_key: key,
            }
        })
        .collect()
}

/// Run one `map` request end to end.
pub fn execute_map(request: &MapRequest, settings: &Settings) -> Result<MapReport> {
    let span = info_span!("map", local = %request.local.display());
    let _guard = span.enter();

    let registry = load_registry(request.ontology.as_deref(), settings)?;
    let local = read_local_table(&request.local)
        .with_context(|| format!("load local table {}", request.local.display()))?;
    let template = read_sdrf_template(&request.template)
        .with_context(|| format!("load SDRF template {}", request.template.display()))?;

    let mut options = settings.match_options();
    if request.release_rejected {
        options.rejected_targets = RejectedTargetPolicy::Release;
    }
    let validator = ValueValidator::new(&registry).with_normalizer(settings.normalizer());
    let mut builder = MatchSession::builder(local, template, validator).options(options);
    if !request.select.is_empty() {
        builder = builder.local_columns(request.select.iter().cloned());
    }
    if !request.targets.is_empty() {
        builder = builder.target_columns(request.targets.iter().cloned());
    }
    let mut session = builder.start().context("start matching session")?;

    for pair in &request.pairs {
        apply_pair(&mut session, pair).with_context(|| format!("pair {pair}"))?;
    }
    for local in &request.skips {
        session
            .select_local(local)
            .and_then(|_| session.skip())
            .with_context(|| format!("skip {local}"))?;
    }

    let unmatched_locals = session.pool().locals().to_vec();
    if !unmatched_locals.is_empty() {
        info!(count = unmatched_locals.len(), "local columns left unmatched");
    }
    let result = session.finish();

    let mut tsv_options = settings.tsv_options();
    if let Some(token) = &request.missing_value {
        tsv_options.missing_value.clone_from(token);
    }
    let output = request
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME));
    let output = write_sdrf_tsv(&result.table, &output, &tsv_options)
        .with_context(|| format!("write {}", output.display()))?;

    Ok(MapReport {
        rows: result.table.height(),
        accepted: result.accepted_count(),
        rejected: result.rejected_count(),
        records: result.records,
        row_mismatch: result.row_mismatch,
        unmatched_locals,
        output,
    })
}

fn apply_pair(session: &mut MatchSession<'_>, pair: &PairSpec) -> Result<()> {
    session.select_local(&pair.local)?;
    session.select_target(TargetChoice::Column(pair.target.clone()))?;
    let step = session.confirm()?;
    if let Some(record) = &step.record {
        for value in record.diagnostic.offending_values() {
            trace!(
                local = %record.local,
                target_column = %pair.target,
                value = redact_value(value),
                "offending value"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_spec_splits_on_last_equals() {
        let pair: PairSpec = "a=b=characteristics[organism]".parse().unwrap();
        assert_eq!(pair.local, "a=b");
        assert_eq!(pair.target, "characteristics[organism]");
        assert_eq!(pair.to_string(), "a=b=characteristics[organism]");
    }

    #[test]
    fn pair_spec_rejects_missing_parts() {
        assert!("Species".parse::<PairSpec>().is_err());
        assert!("=characteristics[organism]".parse::<PairSpec>().is_err());
        assert!("Species=".parse::<PairSpec>().is_err());
    }

    #[test]
    fn overview_flags_term_sets() {
        let registry =
            OntologyRegistry::new().with_terms("all_organism_elements", ["Homo sapiens"]);
        let overview = column_overview(&registry);
        assert_eq!(overview.len(), TEMPLATE_COLUMNS.len());

        let organism = overview
            .iter()
            .find(|info| info.name == "characteristics[organism]")
            .unwrap();
        assert_eq!(organism.category, ColumnCategory::Organism);
        assert_eq!(organism.ontology_key.as_deref(), Some("all_organism_elements"));
        assert!(organism.has_terms);

        let source = overview.iter().find(|info| info.name == "source name").unwrap();
        assert_eq!(source.ontology_key, None);
        assert!(!source.has_terms);
    }
}
