use serde::{Deserialize, Serialize};

use crate::errors::SummarizeError;

/// Structured summary produced by the model for one document.
///
/// Persisted verbatim as pretty-printed JSON; no schema versioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub bullets: Vec<String>,
    pub tldr: String,
}

/// Location of an object in blob storage: the bucket (container) plus the
/// object key inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobPath {
    pub container: String,
    pub key: String,
}

impl BlobPath {
    /// Parse a full slash-delimited path of the form `<container>/<key>`.
    ///
    /// A path with no separator, an empty container, an empty key, or a key
    /// ending in `/` (a folder marker, no filename to summarize) is rejected
    /// and aborts the invocation.
    pub fn parse(full_path: &str) -> Result<Self, SummarizeError> {
        let (container, key) = full_path
            .split_once('/')
            .ok_or_else(|| SummarizeError::InvalidPath(full_path.to_string()))?;
        if container.is_empty() || key.is_empty() || key.ends_with('/') {
            return Err(SummarizeError::InvalidPath(full_path.to_string()));
        }
        Ok(Self {
            container: container.to_string(),
            key: key.to_string(),
        })
    }

    /// Last segment of the key, e.g. `report.pdf` for `docs/2024/report.pdf`.
    #[must_use]
    pub fn filename(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// Key of the summary object inside the same container.
    #[must_use]
    pub fn output_key(&self, prefix: &str) -> String {
        format!("{}/{}.json", prefix, self.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_container_and_key() {
        let path = BlobPath::parse("docs/report.pdf").unwrap();
        assert_eq!(path.container, "docs");
        assert_eq!(path.key, "report.pdf");
        assert_eq!(path.filename(), "report.pdf");
        assert_eq!(path.output_key("summary"), "summary/report.pdf.json");
    }

    #[test]
    fn keeps_nested_key_but_derives_filename_from_last_segment() {
        let path = BlobPath::parse("uploads/2024/q3/notes.txt").unwrap();
        assert_eq!(path.container, "uploads");
        assert_eq!(path.key, "2024/q3/notes.txt");
        assert_eq!(path.filename(), "notes.txt");
        assert_eq!(path.output_key("summary"), "summary/notes.txt.json");
    }

    #[test]
    fn rejects_path_without_separator() {
        assert!(matches!(
            BlobPath::parse("report.pdf"),
            Err(SummarizeError::InvalidPath(_))
        ));
    }

    #[test]
    fn rejects_empty_segments_and_folder_markers() {
        assert!(BlobPath::parse("").is_err());
        assert!(BlobPath::parse("/report.pdf").is_err());
        assert!(BlobPath::parse("docs/").is_err());
        assert!(BlobPath::parse("docs/archive/").is_err());
    }

    #[test]
    fn summary_round_trips_through_json() {
        let summary = Summary {
            bullets: vec!["a".to_string(), "b".to_string()],
            tldr: "t".to_string(),
        };
        let json = serde_json::to_string_pretty(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
