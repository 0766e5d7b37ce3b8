// Turning `file:` URLs back into local paths.
use std::path::PathBuf;

/// Decodes a `file:` URL into a local path, e.g. `file:/file%20with%20whitespace`
/// becomes `/file with whitespace`.
///
/// Returns `None` for other schemes, for URLs naming a remote host, and for
/// escapes that do not decode to UTF-8.
pub fn local_path_from_file_url(url: &str) -> Option<PathBuf> {
    let url = url.trim();
    let (scheme, mut rest) = url.split_once(':')?;
    if !scheme.eq_ignore_ascii_case("file") {
        return None;
    }
    if let Some(end) = rest.find(['?', '#']) {
        rest = &rest[..end];
    }
    if let Some(after) = rest.strip_prefix("//") {
        let (authority, path) = match after.find('/') {
            Some(slash) => after.split_at(slash),
            None => (after, ""),
        };
        if !authority.is_empty() && !authority.eq_ignore_ascii_case("localhost") {
            return None;
        }
        rest = path;
    }
    if rest.is_empty() {
        return None;
    }

    let decoded = urlencoding::decode(rest).ok()?;
    Some(to_local(&decoded))
}

#[cfg(not(windows))]
fn to_local(path: &str) -> PathBuf {
    PathBuf::from(path)
}

// `/C:/dir` -> `C:\dir`
#[cfg(windows)]
fn to_local(path: &str) -> PathBuf {
    let bytes = path.as_bytes();
    let path = if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        &path[1..]
    } else {
        path
    };
    PathBuf::from(path.replace('/', "\\"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;

    #[test]
    fn test_file_with_whitespace() {
        let path = local_path_from_file_url("file:/file%20with%20whitespace").unwrap();
        assert_eq!(path.to_string_lossy(), format!("{}file with whitespace", MAIN_SEPARATOR));
    }

    #[cfg(unix)]
    #[test]
    fn test_authority_forms() {
        assert_eq!(local_path_from_file_url("file:///tmp/a%2Bb").unwrap(), PathBuf::from("/tmp/a+b"));
        assert_eq!(
            local_path_from_file_url("FILE://localhost/tmp/x%C3%A9").unwrap(),
            PathBuf::from("/tmp/xé")
        );
        assert_eq!(local_path_from_file_url("file:/tmp/report.txt?v=2#top").unwrap(), PathBuf::from("/tmp/report.txt"));
    }

    #[test]
    fn test_plus_is_not_a_space_in_paths() {
        let path = local_path_from_file_url("file:/a+b").unwrap();
        assert!(path.to_string_lossy().ends_with("a+b"));
    }

    #[test]
    fn test_rejects_non_local_urls() {
        assert_eq!(local_path_from_file_url("http://example.com/file"), None);
        assert_eq!(local_path_from_file_url("file://server/share/file"), None);
        assert_eq!(local_path_from_file_url("no scheme at all"), None);
        assert_eq!(local_path_from_file_url("file://localhost"), None);
        assert_eq!(local_path_from_file_url("file:/%FF%FE"), None);
    }
}
