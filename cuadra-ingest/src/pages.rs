//! Page handling for layout-extracted statement text.

/// `pdftotext -layout` separates pages with a form feed.
const PAGE_BREAK: char = '\u{c}';

/// Split raw extracted text into per-page strings, document order.
///
/// Extractors also terminate the final page with a form feed; the empty
/// trailing piece that produces is dropped.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Drop the cover and back pages. In this statement family they carry
/// marketing and legal text, never transaction sections. Documents with
/// two or fewer pages have no interior.
pub fn interior_pages(mut pages: Vec<String>) -> Vec<String> {
    if pages.len() <= 2 {
        return Vec::new();
    }
    pages.pop();
    pages.remove(0);
    pages
}
