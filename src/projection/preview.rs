//! `image_preview` synthesis

/// Width and height, in pixels, of every preview thumbnail.
pub const PREVIEW_SIZE: u32 = 100;

/// Render the `<img>` thumbnail served alongside each item's `image` URL.
///
/// Returns an empty string when there is no image.
pub fn image_preview(image: &str) -> String {
    if image.is_empty() {
        return String::new();
    }

    format!(
        r#"<img src="{}" width="{size}" height="{size}" />"#,
        escape_attribute(image),
        size = PREVIEW_SIZE
    )
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
