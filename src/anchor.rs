/// Extracts the element id an in-page link points at.
///
/// Bare (`#`) and empty links are left to the browser, as are links that do
/// not start with a fragment marker.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Document offset to scroll to so the target sits just below the fixed header.
pub fn scroll_offset(target_top_in_viewport: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top_in_viewport + scroll_y - header_height
}
