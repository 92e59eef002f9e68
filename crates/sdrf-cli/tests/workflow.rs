//! End-to-end runs of the `map` workflow against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use sdrf_cli::settings::Settings;
use sdrf_cli::workflow::{MapRequest, PairSpec, execute_map};
use sdrf_validate::Diagnostic;

struct Fixture {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::write(
            root.join("samples.csv"),
            "Sample,Species,Gender\nS1,human,M\nS2,mouse,Unknown\n",
        )
        .unwrap();
        fs::write(
            root.join("template.sdrf.tsv"),
            "source name\tcharacteristics[organism]\tcharacteristics[sex]\n\
             sample 1\t\t\n\
             sample 2\t\t\n",
        )
        .unwrap();
        fs::write(
            root.join("terms.json"),
            r#"{"all_organism_elements": ["Homo sapiens", "Mus musculus"]}"#,
        )
        .unwrap();
        Self { _dir: dir, root }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn request(&self, pairs: &[&str]) -> MapRequest {
        MapRequest {
            local: self.path("samples.csv"),
            template: self.path("template.sdrf.tsv"),
            ontology: Some(self.path("terms.json")),
            pairs: pairs.iter().map(|p| p.parse::<PairSpec>().unwrap()).collect(),
            output: Some(self.path("out/intermediate_SDRF.sdrf.tsv")),
            ..MapRequest::default()
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn accepted_organism_is_written_and_rejected_sex_is_not() {
    let fixture = Fixture::new();
    let mut request = fixture.request(&[
        "Species=characteristics[organism]",
        "Gender=characteristics[sex]",
    ]);
    request.skips = vec!["Sample".to_string()];

    let report = execute_map(&request, &Settings::default()).unwrap();

    assert_eq!(report.accepted, 1);
    assert_eq!(report.rejected, 1);
    assert!(report.has_rejections());
    assert!(report.unmatched_locals.is_empty());
    assert_eq!(report.row_mismatch, None);
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records[2].diagnostic, Diagnostic::Skipped);
    assert_eq!(
        report.records[1].diagnostic.offending_values(),
        &["Unknown".to_string()]
    );

    assert_eq!(
        read(&report.output),
        "source name\tcharacteristics[organism]\tcharacteristics[sex]\n\
         sample 1\tHomo sapiens\t\n\
         sample 2\tMus musculus\t\n"
    );
}

#[test]
fn missing_value_token_and_release_policy() {
    let fixture = Fixture::new();
    let mut request = fixture.request(&["Gender=characteristics[sex]"]);
    request.release_rejected = true;
    request.missing_value = Some("not available".to_string());

    let report = execute_map(&request, &Settings::default()).unwrap();

    assert_eq!(report.rejected, 1);
    assert_eq!(report.unmatched_locals, vec!["Sample", "Species"]);
    let content = read(&report.output);
    assert_eq!(
        content.lines().nth(1),
        Some("sample 1\tnot available\tnot available")
    );
}

#[test]
fn extra_aliases_from_settings_are_used() {
    let fixture = Fixture::new();
    fs::write(fixture.path("samples.csv"), "Species\nman\nmouse\n").unwrap();
    let mut settings = Settings::default();
    settings
        .organism
        .extra_aliases
        .insert("Homo sapiens".to_string(), vec!["man".to_string()]);

    let report = execute_map(
        &fixture.request(&["Species=characteristics[organism]"]),
        &settings,
    )
    .unwrap();

    assert_eq!(report.accepted, 1);
    assert!(!report.has_rejections());
    assert!(read(&report.output).contains("sample 1\tHomo sapiens\t"));
}

#[test]
fn unknown_local_column_fails_with_context() {
    let fixture = Fixture::new();
    let request = fixture.request(&["Strain=characteristics[organism]"]);

    let err = execute_map(&request, &Settings::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("pair Strain=characteristics[organism]"), "{message}");
    assert!(!fixture.path("out/intermediate_SDRF.sdrf.tsv").exists());
}

#[test]
fn row_mismatch_is_reported() {
    let fixture = Fixture::new();
    fs::write(fixture.path("samples.csv"), "Species\nhuman\nhuman\nmouse\n").unwrap();

    let report = execute_map(
        &fixture.request(&["Species=characteristics[organism]"]),
        &Settings::default(),
    )
    .unwrap();

    let mismatch = report.row_mismatch.unwrap();
    assert_eq!((mismatch.local_rows, mismatch.target_rows), (3, 2));
    assert_eq!(report.rows, 2);
}

#[test]
fn blank_local_row_keeps_later_samples_aligned() {
    let fixture = Fixture::new();
    fs::write(fixture.path("samples.csv"), "Species,Sex\nmouse,M\n,\nhuman,F\n").unwrap();
    fs::write(
        fixture.path("template.sdrf.tsv"),
        "source name\tcharacteristics[organism]\n\
         sample 1\t\n\
         sample 2\t\n\
         sample 3\t\n",
    )
    .unwrap();

    let report = execute_map(
        &fixture.request(&["Species=characteristics[organism]"]),
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(report.row_mismatch, None);
    assert_eq!(
        read(&report.output),
        "source name\tcharacteristics[organism]\n\
         sample 1\tMus musculus\n\
         sample 2\t\n\
         sample 3\tHomo sapiens\n"
    );
}
