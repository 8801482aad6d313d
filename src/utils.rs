use crate::render::OutputFormat;

/// Convert a string to a sanitized filename
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("http://", "").replace("https://", "");
    name = name.replace(['/', ':', '?', '&', '=', '#', '%'], "_");
    let name = name.trim_end_matches('_');

    // Limit filename length
    name.chars().take(100).collect()
}

/// Default file name for a saved report of the given page
pub fn report_file_name(url: &str, format: OutputFormat) -> String {
    let stem = sanitize_filename(url);
    let stem = if stem.is_empty() { "page_report" } else { &stem };
    format!("{}.{}", stem, format.extension())
}
