use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

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

/// MediaBox of the first page, in points.
pub fn first_page_media_box(doc: &LopdfDocument) -> Vec<f32> {
    let Some((_, page_id)) = doc.get_pages().into_iter().next() else {
        return Vec::new();
    };
    doc.get_dictionary(page_id)
        .and_then(|page| page.get(b"MediaBox"))
        .and_then(|value| value.as_array())
        .map(|values| values.iter().filter_map(|v| v.as_float().ok()).collect())
        .unwrap_or_default()
}

/// Number of image XObjects anywhere in the file.
pub fn count_image_xobjects(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .count()
}

/// Operators of the first page's content stream, in order.
pub fn page_operators(doc: &LopdfDocument) -> Vec<String> {
    let Some((_, page_id)) = doc.get_pages().into_iter().next() else {
        return Vec::new();
    };
    doc.get_page_content(page_id)
        .ok()
        .and_then(|data| Content::decode(&data).ok())
        .map(|content| content.operations.into_iter().map(|op| op.operator).collect())
        .unwrap_or_default()
}

pub fn assert_contains_all(text: &str, expected: &[&str]) {
    for needle in expected {
        assert!(text.contains(needle), "expected PDF text to contain {:?}\n---\n{}", needle, text);
    }
}
