use std::path::PathBuf;

/// Lexically normalize a `/`-separated path.
///
/// Mirrors what the host framework's tooling does with generated paths:
///
/// - `\` is treated as a separator and rewritten to `/`
/// - repeated separators collapse, `.` segments vanish
/// - `..` removes the preceding segment when there is one; leading `..`
///   segments of a relative path are kept
/// - no trailing separator
///
/// The filesystem is never consulted, so symlinks are not resolved.
pub fn normalize(path: &str) -> PathBuf {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    // `/..` is still `/`
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => PathBuf::from(format!("/{joined}")),
        (false, true) => PathBuf::from("."),
        (false, false) => PathBuf::from(joined),
    }
}
