#![allow(dead_code)]

use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeMap;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Extract text from a single page (1-based)
pub fn extract_page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

/// Extract the BaseFont names of every font the pages reference
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Ok(page) = doc.get_dictionary(page_id) else { continue };
        let Ok(resources) = page.get(b"Resources").and_then(|r| resolve_dict(doc, r)) else {
            continue;
        };
        let Ok(font_dict) = resources.get(b"Font").and_then(|f| resolve_dict(doc, f)) else {
            continue;
        };
        for (_name, font) in font_dict.iter() {
            if let Ok(font) = resolve_dict(doc, font) {
                if let Ok(base_font) = font.get(b"BaseFont").and_then(Object::as_name) {
                    fonts.insert(String::from_utf8_lossy(base_font).to_string());
                }
            }
        }
    }
    fonts.into_iter().collect()
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> lopdf::Result<&'a lopdf::Dictionary> {
    match object {
        Object::Reference(id) => doc.get_dictionary(*id),
        other => other.as_dict(),
    }
}

/// A link annotation found on a page
#[derive(Debug, Clone)]
pub struct LinkAnnotation {
    pub page: u32,
    pub rect: Option<[f32; 4]>,
    pub uri: Option<String>,
}

/// Collect every link annotation in page order
pub fn extract_link_annotations(doc: &LopdfDocument) -> Vec<LinkAnnotation> {
    let mut annotations = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        let Ok(page) = doc.get_dictionary(page_id) else { continue };
        let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
            continue;
        };
        for annot in annots {
            let Ok(annot) = resolve_dict(doc, annot) else { continue };
            let is_link = annot
                .get(b"Subtype")
                .and_then(Object::as_name)
                .map(|s| s == b"Link")
                .unwrap_or(false);
            if !is_link {
                continue;
            }
            let uri = annot
                .get(b"A")
                .and_then(|a| resolve_dict(doc, a))
                .and_then(|a| a.get(b"URI"))
                .and_then(Object::as_str)
                .map(|s| String::from_utf8_lossy(s).to_string())
                .ok();
            let rect = annot.get(b"Rect").and_then(Object::as_array).ok().and_then(|arr| {
                if arr.len() < 4 {
                    return None;
                }
                Some([
                    arr[0].as_float().unwrap_or(0.0),
                    arr[1].as_float().unwrap_or(0.0),
                    arr[2].as_float().unwrap_or(0.0),
                    arr[3].as_float().unwrap_or(0.0),
                ])
            });
            annotations.push(LinkAnnotation { page: page_num, rect, uri });
        }
    }
    annotations
}

/// The URIs of every link annotation, in page order
pub fn extract_link_uris(doc: &LopdfDocument) -> Vec<String> {
    extract_link_annotations(doc).into_iter().filter_map(|a| a.uri).collect()
}

/// Read the document information dictionary as strings
pub fn info_entries(doc: &LopdfDocument) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let Ok(info) = doc.trailer.get(b"Info").and_then(|i| resolve_dict(doc, i)) else {
        return entries;
    };
    for (key, value) in info.iter() {
        if let Ok(text) = lopdf::decode_text_string(value) {
            entries.insert(String::from_utf8_lossy(key).to_string(), text);
        }
    }
    entries
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").and_then(Object::as_array).ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!((w - $width).abs() < 1.0, "Page {} width expected ~{}, got {}", $page, $width, w);
        assert!((h - $height).abs() < 1.0, "Page {} height expected ~{}, got {}", $page, $height, h);
    };
}
