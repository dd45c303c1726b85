use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Join the non-empty entries of `parts` with `sep`, keeping their raw bytes.
pub fn join_non_empty<'a, I>(parts: I, sep: &str) -> OsString
where
    I: IntoIterator<Item = &'a OsStr>,
{
    let mut joined = OsString::new();
    for part in parts.into_iter().filter(|part| !part.is_empty()) {
        if !joined.is_empty() {
            joined.push(sep);
        }
        joined.push(part);
    }
    joined
}

pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base {
        if let Ok(relative) = path.strip_prefix(base) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_non_empty(["a", "", "b", ""].map(OsStr::new), ","), "a,b");
        assert_eq!(join_non_empty(["", ""].map(OsStr::new), ","), "");
        assert_eq!(join_non_empty(Vec::<&OsStr>::new(), ","), "");
    }

    #[test]
    fn display_path_strips_base_when_possible() {
        let base = Path::new("/work");
        assert_eq!(display_path(Path::new("/work/hive-ext/one"), Some(base)), "hive-ext/one");
        assert_eq!(display_path(Path::new("/elsewhere/x"), Some(base)), "/elsewhere/x");
        assert_eq!(display_path(Path::new("/work/x"), None), "/work/x");
    }
}
