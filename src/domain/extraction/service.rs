use std::io::{Cursor, Read};

use calamine::{open_workbook_auto_from_rs, Data, Reader as SpreadsheetReader};
use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;

use super::error::ExtractError;
use super::format::FileFormat;

/// Extract plain text from raw file bytes.
///
/// Pure transformation, no side effects. Structured formats are flattened
/// into a single text blob in their native iteration order (row-major for
/// tabular data, key-insertion order for JSON).
pub fn extract(bytes: &[u8], format: FileFormat) -> Result<String, ExtractError> {
    let text = match format {
        FileFormat::Txt => extract_txt(bytes),
        FileFormat::Pdf => extract_pdf(bytes)?,
        FileFormat::Docx => extract_docx(bytes)?,
        FileFormat::Json => extract_json(bytes)?,
        FileFormat::Csv => extract_csv(bytes)?,
        FileFormat::Xlsx => extract_xlsx(bytes)?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ExtractError::Parse("no text content found".to_string()));
    }

    tracing::debug!(
        format = %format,
        size_bytes = bytes.len(),
        char_count = text.len(),
        "Text extracted from file"
    );

    Ok(text)
}

fn extract_txt(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExtractError::Parse(format!("invalid PDF: {}", e)))?;

    let mut pages = Vec::new();
    for (page_number, _) in doc.get_pages() {
        let page_text = doc
            .extract_text(&[page_number])
            .map_err(|e| ExtractError::Parse(format!("PDF page {}: {}", page_number, e)))?;
        if !page_text.trim().is_empty() {
            pages.push(page_text.trim().to_string());
        }
    }

    Ok(pages.join("\n\n"))
}

/// DOCX is a zip container; the document body lives in word/document.xml.
/// Text runs are `w:t` elements, paragraphs are `w:p`.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Parse(format!("invalid DOCX container: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(format!("missing document body: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Parse(format!("unreadable document body: {}", e)))?;

    let mut reader = XmlReader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Ok(Event::Text(t)) if in_text_run => {
                let chunk = t
                    .unescape()
                    .map_err(|e| ExtractError::Parse(format!("malformed document XML: {}", e)))?;
                current.push_str(&chunk);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => {
                if !current.trim().is_empty() {
                    paragraphs.push(current.trim().to_string());
                }
                current.clear();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::Parse(format!("malformed document XML: {}", e)));
            }
        }
    }

    if !current.trim().is_empty() {
        paragraphs.push(current.trim().to_string());
    }

    Ok(paragraphs.join("\n\n"))
}

fn extract_json(bytes: &[u8]) -> Result<String, ExtractError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ExtractError::Parse(format!("invalid JSON: {}", e)))?;

    let mut texts = Vec::new();
    collect_json_strings(&value, &mut texts);

    Ok(texts.join("\n"))
}

/// Walk the JSON tree collecting every string value, preserving the
/// document's own field order.
fn collect_json_strings(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(s) => {
            if !s.trim().is_empty() {
                out.push(s.clone());
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_json_strings(item, out);
            }
        }
        serde_json::Value::Object(map) => {
            for (_, nested) in map {
                collect_json_strings(nested, out);
            }
        }
        _ => {}
    }
}

fn extract_csv(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Parse(format!("invalid CSV: {}", e)))?;
        let row = record
            .iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect::<Vec<_>>()
            .join(" | ");
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows.join("\n"))
}

fn extract_xlsx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ExtractError::Parse(format!("invalid workbook: {}", e)))?;

    let mut parts = Vec::new();
    for sheet_name in workbook.sheet_names().to_owned() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ExtractError::Parse(format!("sheet '{}': {}", sheet_name, e)))?;

        parts.push(format!("=== {} ===", sheet_name));
        for row in range.rows() {
            let row_text = row
                .iter()
                .filter(|cell| !matches!(cell, Data::Empty))
                .map(|cell| cell.to_string().trim().to_string())
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join(" | ");
            if !row_text.is_empty() {
                parts.push(row_text);
            }
        }
    }

    // A workbook with sheets but no cell content should fail as empty,
    // not return bare sheet headers.
    if parts.iter().all(|p| p.starts_with("=== ")) {
        return Ok(String::new());
    }

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract_txt() {
        let text = extract(b"  Hello world  \n", FileFormat::Txt).unwrap();
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn test_extract_txt_empty_fails() {
        let err = extract(b"   \n ", FileFormat::Txt).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_json_flattens_strings_in_order() {
        let json = br#"{"title": "First", "nested": {"body": "Second"}, "tags": ["Third", 42, true]}"#;
        let text = extract(json, FileFormat::Json).unwrap();
        assert_eq!(text, "First\nSecond\nThird");
    }

    #[test]
    fn test_extract_json_invalid_fails() {
        let err = extract(b"{not json", FileFormat::Json).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_json_without_strings_fails() {
        let err = extract(b"[1, 2, 3]", FileFormat::Json).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_csv_rows_and_cells() {
        let csv = b"name,greeting\nworld,hello\n,\n";
        let text = extract(csv, FileFormat::Csv).unwrap();
        assert_eq!(text, "name | greeting\nworld | hello");
    }

    #[test]
    fn test_extract_docx_paragraphs() {
        let docx = build_test_docx(&["Hello world", "Second paragraph"]);
        let text = extract(&docx, FileFormat::Docx).unwrap();
        assert_eq!(text, "Hello world\n\nSecond paragraph");
    }

    #[test]
    fn test_extract_docx_garbage_fails() {
        let err = extract(b"definitely not a zip", FileFormat::Docx).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_pdf_garbage_fails() {
        let err = extract(b"%PDF-oops", FileFormat::Pdf).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_xlsx_garbage_fails() {
        let err = extract(b"not a workbook", FileFormat::Xlsx).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    /// Build a minimal DOCX (zip with word/document.xml) in memory.
    fn build_test_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
        );
        for p in paragraphs {
            body.push_str(&format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p));
        }
        body.push_str("</w:body></w:document>");

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }
}
