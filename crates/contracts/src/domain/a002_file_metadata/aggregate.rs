use crate::domain::common::AggregateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for FileId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(FileId::new)
    }
}

/// A row of the file sidebar. Display-only; labels are preformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: FileId,
    pub name: String,
    pub size_label: String,
    pub type_label: String,
    pub date: NaiveDate,
}

impl FileMetadata {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        size_label: impl Into<String>,
        type_label: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: FileId::new(id),
            name: name.into(),
            size_label: size_label.into(),
            type_label: type_label.into(),
            date,
        }
    }
}

/// The fixed sample listing, every entry dated `today`
pub fn sample_files(today: NaiveDate) -> Vec<FileMetadata> {
    vec![
        FileMetadata::new(1, "Document.pdf", "2.4 MB", "PDF", today),
        FileMetadata::new(2, "Image.jpg", "1.2 MB", "Image", today),
        FileMetadata::new(3, "Spreadsheet.xlsx", "3.1 MB", "Excel", today),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_files() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let files = sample_files(today);

        assert_eq!(files.len(), 3);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Document.pdf", "Image.jpg", "Spreadsheet.xlsx"]);
        assert_eq!(files[0].size_label, "2.4 MB");
        assert_eq!(files[2].type_label, "Excel");
        assert!(files.iter().all(|f| f.date == today));
    }

    #[test]
    fn test_ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let files = sample_files(today);
        let mut ids: Vec<String> = files.iter().map(|f| f.id.as_string()).collect();
        ids.dedup();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
