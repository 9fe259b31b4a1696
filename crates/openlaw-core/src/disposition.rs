//! Suggested filename extraction from `content-disposition`.

/// Name used when the server does not suggest one.
pub const DEFAULT_DOWNLOAD_NAME: &str = "unknown";

/// Returns the suggested filename from an optional `content-disposition`
/// value, falling back to [`DEFAULT_DOWNLOAD_NAME`].
pub fn suggested_filename(header: Option<&str>) -> String {
    header
        .and_then(parse_filename)
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
}

/// Extract the `filename` parameter from a `content-disposition` value.
///
/// Accepts both `filename="report.pdf"` and `filename=report.json`. A bare
/// value runs up to the next `;`. The extended `filename*=` form is not
/// matched.
pub fn parse_filename(value: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `value`.
    let start = value.to_ascii_lowercase().find("filename=")? + "filename=".len();
    let rest = value[start..].trim_start();

    let name = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        &quoted[..end]
    } else {
        rest.split(';').next().unwrap_or_default().trim()
    };

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
