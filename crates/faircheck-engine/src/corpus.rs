//! Corpus loading
//!
//! Reads the statute and precedent-case collections from JSON-array files.
//! Any failure — missing file, I/O error, invalid JSON, wrong shape —
//! degrades to an empty collection instead of an error, so the review flow
//! stays usable (law/case-free) when a corpus is absent.

use faircheck_domain::{CaseRecord, Corpus, StatuteRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// File name of the statute collection inside the data directory
pub const STATUTES_FILE: &str = "laws.json";

/// File name of the precedent-case collection inside the data directory
pub const CASES_FILE: &str = "cases.json";

/// Load a JSON array of records, yielding an empty Vec on any failure.
fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Could not read corpus file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(records) => records,
        Err(e) => {
            warn!("Could not parse corpus file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Load the statute collection from `path`.
pub fn load_statutes(path: impl AsRef<Path>) -> Vec<StatuteRecord> {
    load_records(path.as_ref())
}

/// Load the precedent-case collection from `path`.
pub fn load_cases(path: impl AsRef<Path>) -> Vec<CaseRecord> {
    load_records(path.as_ref())
}

/// Load both collections from their conventional file names under
/// `data_dir`.
pub fn load_corpus(data_dir: impl AsRef<Path>) -> Corpus {
    let data_dir = data_dir.as_ref();
    let statutes = load_statutes(data_dir.join(STATUTES_FILE));
    let cases = load_cases(data_dir.join(CASES_FILE));
    info!(
        "Loaded corpus from {}: {} statute(s), {} case(s)",
        data_dir.display(),
        statutes.len(),
        cases.len()
    );
    Corpus::new(statutes, cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let statutes = load_statutes("/nonexistent/laws.json");
        assert!(statutes.is_empty());

        let cases = load_cases("/nonexistent/cases.json");
        assert!(cases.is_empty());
    }

    #[test]
    fn test_invalid_json_yields_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "laws.json", "{ not json");
        assert!(load_statutes(&path).is_empty());
    }

    #[test]
    fn test_wrong_shape_yields_empty() {
        let dir = TempDir::new().unwrap();
        // An object where an array is expected
        let path = write_file(&dir, "laws.json", r#"{"title": "x", "text": "y"}"#);
        assert!(load_statutes(&path).is_empty());

        // An array whose entries miss required fields
        let path = write_file(&dir, "cases.json", r#"[{"title": "x"}]"#);
        assert!(load_cases(&path).is_empty());
    }

    #[test]
    fn test_valid_statutes_load_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "laws.json",
            r#"[
                {"title": "독점규제법 제3조", "text": "시장지배적 지위의 남용을 금지한다"},
                {"title": "독점규제법 제5조", "text": "부당한 공동행위를 금지한다", "source": "law.go.kr"}
            ]"#,
        );

        let statutes = load_statutes(&path);
        assert_eq!(statutes.len(), 2);
        assert_eq!(statutes[0].title, "독점규제법 제3조");
        assert_eq!(statutes[1].extra["source"], "law.go.kr");
    }

    #[test]
    fn test_load_corpus_with_partial_data_dir() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            CASES_FILE,
            r#"[{"title": "사례 1", "summary": "표시광고 관련 분쟁", "outcome": "경고", "tags": ["표시광고"]}]"#,
        );
        // laws.json intentionally absent

        let corpus = load_corpus(dir.path());
        assert!(corpus.statutes.is_empty());
        assert_eq!(corpus.cases.len(), 1);
        assert_eq!(corpus.cases[0].tags, vec!["표시광고".to_string()]);
    }
}
