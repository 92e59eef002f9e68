//! SDRF TSV writer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use sdrf_common::column_values;

use crate::error::{OutputError, Result};

/// File name used when the caller gives no output path.
pub const DEFAULT_OUTPUT_NAME: &str = "intermediate_SDRF.sdrf.tsv";

/// Options for SDRF export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsvOptions {
    /// Text written for missing cells.
    pub missing_value: String,
}

impl TsvOptions {
    /// Options writing `token` for missing cells.
    pub fn with_missing_value(token: impl Into<String>) -> Self {
        Self {
            missing_value: token.into(),
        }
    }
}

/// Write `df` as an SDRF TSV file, creating parent directories as needed.
///
/// Columns keep the order they have in the table.
pub fn write_sdrf_tsv(df: &DataFrame, path: &Path, options: &TsvOptions) -> Result<PathBuf> {
    ensure_parent_dir(path)?;
    let file = fs::File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    write_sdrf_to(df, file, options).map_err(|err| match err {
        OutputError::Serialize(source) => OutputError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote SDRF file"
    );
    Ok(path.to_path_buf())
}

/// Write `df` as tab-separated text to any writer.
pub fn write_sdrf_to<W: Write>(df: &DataFrame, writer: W, options: &TsvOptions) -> Result<()> {
    let columns: Vec<Vec<Option<String>>> = df
        .get_column_names()
        .into_iter()
        .map(|name| column_values(df, name))
        .collect::<std::result::Result<_, _>>()?;

    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    out.write_record(df.get_column_names().iter().map(|name| name.as_str()))
        .map_err(OutputError::Serialize)?;
    for row in 0..df.height() {
        let record = columns.iter().map(|values| {
            values[row]
                .as_deref()
                .unwrap_or(options.missing_value.as_str())
        });
        out.write_record(record).map_err(OutputError::Serialize)?;
    }
    out.flush()
        .map_err(|e| OutputError::Serialize(e.into()))?;
    Ok(())
}

/// Render `df` as SDRF TSV text.
pub fn render_sdrf_tsv(df: &DataFrame, options: &TsvOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_sdrf_to(df, &mut buffer, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;

    fn merged() -> DataFrame {
        df!(
            "source name" => &["sample 1", "sample 2"],
            "characteristics[organism]" => &[Some("Mus musculus"), None],
            "comment[label]" => &[Some("label free sample"), Some("TMT126")],
        )
        .unwrap()
    }

    #[test]
    fn renders_header_and_rows() {
        let text = render_sdrf_tsv(&merged(), &TsvOptions::default()).unwrap();
        insta::assert_snapshot!(text, @r"
        source name	characteristics[organism]	comment[label]
        sample 1	Mus musculus	label free sample
        sample 2		TMT126
        ");
    }

    #[test]
    fn missing_token_is_configurable() {
        let text =
            render_sdrf_tsv(&merged(), &TsvOptions::with_missing_value("not available")).unwrap();
        let second = text.lines().nth(2).unwrap();
        assert_eq!(second, "sample 2\tnot available\tTMT126");
    }
}
