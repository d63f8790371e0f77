//! Version extraction heuristics. Each one scans the cleaned header fields and
//! returns a major.minor string, or an empty string when nothing usable is found.

/// Apple platforms whose verbose name the normalizer collapses to `OS`.
const APPLE_OS_NAMES: [&str; 3] = ["iOS", "iPadOS", "macOS"];

pub(crate) fn is_apple_os(os_name: &str) -> bool {
    APPLE_OS_NAMES.contains(&os_name)
}

/// Keep at most the first two dot-separated segments, dropping patch/build
/// detail (`100.0.4896.75` → `100.0`).
fn truncate_major_minor(ver: &str) -> &str {
    match ver.match_indices('.').nth(1) {
        Some((idx, _)) => &ver[..idx],
        None => ver,
    }
}

/// Version from a `name/version` field such as `Chrome/100.0.4896.75`.
///
/// Uses the first field containing `name` that also carries a slash.
pub fn client_version(fields: &[String], name: &str) -> String {
    fields
        .iter()
        .filter(|f| f.contains(name))
        .find_map(|f| f.split_once('/'))
        .map(|(_, ver)| truncate_major_minor(ver).to_string())
        .unwrap_or_default()
}

/// Version from a `Version/x.y.z` field. Safari reports a fixed build number
/// after its own name and the real version here.
pub fn version(fields: &[String]) -> String {
    fields
        .iter()
        .find(|f| f.starts_with("Version/") && f.len() > 8)
        .and_then(|f| f.split_once('/'))
        .map(|(_, ver)| truncate_major_minor(ver).to_string())
        .unwrap_or_default()
}

/// Release version from an `rv:x.y` field (Gecko and Trident), verbatim.
pub fn release_version(fields: &[String]) -> String {
    fields
        .iter()
        .find(|f| f.starts_with("rv:") && f.len() > 3)
        .and_then(|f| f.split_once(':'))
        .map(|(_, ver)| ver.to_string())
        .unwrap_or_default()
}

/// Operating system version, usually the field right after the OS name.
pub fn os_version(fields: &[String], os_name: &str) -> String {
    if os_name.is_empty() {
        return String::new();
    }
    let marker = if is_apple_os(os_name) { "OS" } else { os_name };
    fields
        .windows(2)
        .find(|pair| pair[0] == marker)
        .map(|pair| major_minor_version(&pair[1]))
        .unwrap_or_default()
}

/// Normalize a purely numeric version to major.minor.
///
/// Anything other than digits, `.` and `_` yields an empty string. Apple
/// separates segments with `_` (`10_15_7`), everyone else with `.`.
pub fn major_minor_version(ver: &str) -> String {
    if ver.is_empty() || !ver.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '_') {
        return String::new();
    }
    let sep = if ver.contains('_') { '_' } else { '.' };
    let mut segments = ver.split(sep);
    match (segments.next(), segments.next()) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        (Some(major), None) => major.to_string(),
        _ => ver.to_string(),
    }
}
