#![allow(dead_code)]

use cheatsheet::SheetGenerator;
use cheatsheet::parser::parse_str;
use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::fmt::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const BASIC_SHEET: &str = r#"
title: "Test Cheat Sheet"
config:
  columns: 3
  font_size: 8
sections:
  Edit:
    "Ctrl+C": "Copy"
    "Ctrl+V": "Paste"
    "Ctrl+Z": "Undo"
  File:
    "Ctrl+S": "Save"
    "Ctrl+O": "Open"
"#;

pub const SUBSECTION_SHEET: &str = r#"
title: "Editor"
sections:
  Navigation:
    Cursor:
      "Home": "Line start"
      "End": "Line end"
    Search:
      "Ctrl+F": "Find"
      "F3": "Find next"
    "Ctrl+G": "Go to line"
"#;

/// A definition with `sections` sections of `per_section` entries each.
pub fn large_sheet(sections: usize, per_section: usize) -> String {
    let mut yaml = String::from("title: \"Large Sheet\"\nsections:\n");
    for s in 0..sections {
        let _ = writeln!(yaml, "  \"Section {}\":", s);
        for e in 0..per_section {
            let _ = writeln!(yaml, "    \"Ctrl+{}-{}\": \"Action {} of section {}\"", s, e, e, s);
        }
    }
    yaml
}

/// Writes `contents` to `name` inside a fresh temporary directory.
pub fn write_sheet(name: &str, contents: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok((dir, path))
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The raw content streams of every page, concatenated.
    pub fn content_text(&self) -> String {
        let mut text = String::new();
        for page_id in self.doc.get_pages().values() {
            if let Ok(content) = self.doc.get_page_content(*page_id) {
                text.push_str(&String::from_utf8_lossy(&content));
                text.push('\n');
            }
        }
        text
    }

    /// Every string drawn with `Tj`, paired with the font resource selected for it.
    pub fn drawn_strings(&self) -> Result<Vec<(String, Vec<u8>)>, Box<dyn std::error::Error>> {
        let mut drawn = Vec::new();
        for page_id in self.doc.get_pages().values() {
            let content = Content::decode(&self.doc.get_page_content(*page_id)?)?;
            let mut font = String::new();
            for op in &content.operations {
                match op.operator.as_str() {
                    "Tf" => font = String::from_utf8_lossy(op.operands[0].as_name()?).into_owned(),
                    "Tj" => drawn.push((font.clone(), op.operands[0].as_str()?.to_vec())),
                    _ => {}
                }
            }
        }
        Ok(drawn)
    }

    pub fn title(&self) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let title = self.doc.get_dictionary(info).ok()?.get(b"Title").ok()?;
        title.as_str().ok().map(|t| String::from_utf8_lossy(t).into_owned())
    }
}

/// Parses `yaml` and renders it to an in-memory PDF.
pub fn generate_pdf_from_yaml(yaml: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let generator = SheetGenerator::new(parse_str(yaml)?);
    let mut bytes = Vec::new();
    generator.render_to(&mut bytes)?;
    GeneratedPdf::from_bytes(bytes)
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let content = $pdf.content_text();
        assert!(
            content.contains($text),
            "Expected PDF to contain '{}', but it was not found",
            $text
        );
    };
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, found {}",
            $count,
            $pdf.page_count()
        );
    };
}
