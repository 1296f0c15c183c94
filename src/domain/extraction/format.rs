use serde::Serialize;

/// File formats the extractor understands, selected by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Txt,
    Pdf,
    Docx,
    Json,
    Csv,
    Xlsx,
}

impl FileFormat {
    /// Select the format from a filename extension. Legacy `.xls` workbooks
    /// go through the same spreadsheet reader as `.xlsx`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(FileFormat::Txt),
            "pdf" => Some(FileFormat::Pdf),
            "docx" => Some(FileFormat::Docx),
            "json" => Some(FileFormat::Json),
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xls" => Some(FileFormat::Xlsx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Txt => "txt",
            FileFormat::Pdf => "pdf",
            FileFormat::Docx => "docx",
            FileFormat::Json => "json",
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename_known_extensions() {
        assert_eq!(FileFormat::from_filename("a.txt"), Some(FileFormat::Txt));
        assert_eq!(FileFormat::from_filename("a.PDF"), Some(FileFormat::Pdf));
        assert_eq!(FileFormat::from_filename("report.docx"), Some(FileFormat::Docx));
        assert_eq!(FileFormat::from_filename("data.json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_filename("rows.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_filename("book.xlsx"), Some(FileFormat::Xlsx));
        assert_eq!(FileFormat::from_filename("old.xls"), Some(FileFormat::Xlsx));
    }

    #[test]
    fn test_from_filename_unknown_extension() {
        assert_eq!(FileFormat::from_filename("image.png"), None);
        assert_eq!(FileFormat::from_filename("noext"), None);
    }

    #[test]
    fn test_from_filename_uses_last_extension() {
        assert_eq!(FileFormat::from_filename("archive.tar.csv"), Some(FileFormat::Csv));
    }
}
