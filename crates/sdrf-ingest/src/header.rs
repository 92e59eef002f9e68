//! Header normalization.

use std::collections::HashSet;

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Makes header names usable as column names.
///
/// Blank headers become `Unnamed: <index>`. Repeated names get a `.1`,
/// `.2`, ... suffix in order of appearance so no column is dropped.
///
/// ```
/// use sdrf_ingest::unique_headers;
///
/// let headers = unique_headers(vec!["id".into(), "".into(), "id".into()]);
/// assert_eq!(headers, vec!["id", "Unnamed: 1", "id.1"]);
/// ```
pub fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut headers = Vec::with_capacity(raw.len());

    for (idx, value) in raw.into_iter().enumerate() {
        let mut name = normalize_header(&value);
        if name.is_empty() {
            name = format!("Unnamed: {idx}");
        }
        if seen.contains(&name) {
            let mut suffix = 1usize;
            while seen.contains(&format!("{name}.{suffix}")) {
                suffix += 1;
            }
            name = format!("{name}.{suffix}");
        }
        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}
