/// Separator-independent path text, used as the comparison key for every
/// path read from a log or found on disk.
pub fn to_posix(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let rooted = unified.starts_with('/');

    let parts: Vec<&str> = unified
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Last component of the normalised path.
pub fn file_name(path: &str) -> String {
    let posix = to_posix(path);
    match posix.rsplit_once('/') {
        Some((_, name)) => name.to_string(),
        None if posix == "." => String::new(),
        None => posix,
    }
}

/// Everything before the last component, `.` when there is none.
pub fn parent_dir(path: &str) -> String {
    let posix = to_posix(path);
    match posix.rsplit_once('/') {
        Some(("", _)) => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
        None => ".".to_string(),
    }
}
