//! PDF text extraction and cleanup.
//!
//! Extracted text is reshaped into the plain format both display variants
//! consume: recognized section headers get underlined with `=`, bullet
//! markers are normalized to `•`.

use std::path::Path;

use crate::errors::AppError;

/// Section titles recognized as headers, matched case-insensitively at the
/// start of a line.
const SECTION_HEADERS: [&str; 10] = [
    "WORK EXPERIENCE",
    "PROFESSIONAL EXPERIENCE",
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "ACHIEVEMENTS",
    "SUMMARY",
    "OBJECTIVE",
];

/// Lines shorter than this that are all uppercase are treated as headers.
const MAX_HEADER_LEN: usize = 50;

/// Extracts and cleans the text of a PDF on disk.
pub fn parse_pdf(path: &Path) -> Result<String, AppError> {
    let text = pdf_extract::extract_text(path).map_err(|e| AppError::Pdf(e.to_string()))?;
    Ok(format!("\n{}\n", clean_text(&text).trim()))
}

/// Cleans and structures extracted text line by line.
pub fn clean_text(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if is_section_header(line) {
            out.push(String::new());
            out.push(line.to_string());
            out.push("=".repeat(line.chars().count()));
        } else if let Some(body) = strip_bullet_marker(line) {
            out.push(format!("• {body}"));
        } else if is_numbered(line) {
            out.push(format!("• {line}"));
        } else if is_probable_header(line) {
            out.push(String::new());
            out.push(line.to_string());
        } else {
            out.push(line.to_string());
        }
    }

    out.join("\n")
}

fn is_section_header(line: &str) -> bool {
    let upper = line.to_uppercase();
    SECTION_HEADERS.iter().any(|header| {
        match upper.strip_prefix(header) {
            // Exact title, or a title followed by punctuation/whitespace
            // ("EXPERIENCE:", "SKILLS Summary").
            Some(rest) => rest.is_empty() || rest.starts_with([':', ' ', '\t']),
            None => false,
        }
    })
}

/// Short all-uppercase lines are likely headers the known list misses.
fn is_probable_header(line: &str) -> bool {
    line.chars().count() < MAX_HEADER_LEN
        && line.chars().any(|c| c.is_alphabetic())
        && line == line.to_uppercase()
}

fn strip_bullet_marker(line: &str) -> Option<&str> {
    if line.starts_with(['•', '-', '●']) {
        Some(line.trim_start_matches(['•', '-', '●', ' ']))
    } else {
        None
    }
}

/// `1.`-style numbered lines are normalized into bullets too.
fn is_numbered(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}
