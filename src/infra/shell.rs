use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Locates `command` on `PATH`, then in the usual npm install locations.
///
/// `mmdc` is distributed through npm, so a project-local `node_modules/.bin`
/// and the global npm prefix are searched even when they are not on `PATH`.
pub fn find_bin(command: &str) -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(env_path) = std::env::var_os("PATH") {
        push_unique_paths(&mut dirs, std::env::split_paths(&env_path));
    }
    push_unique_paths(&mut dirs, npm_search_paths());
    find_bin_in(command, &dirs)
}

/// Locates `command` in `dirs`. A command containing a path separator is
/// returned as-is when it names an existing file.
pub fn find_bin_in(command: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let path = Path::new(command);
    if path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }

    let candidate_names = candidate_names(command);
    for dir in dirs {
        for name in &candidate_names {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    None
}

fn npm_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("node_modules").join(".bin"));
    }

    if let Some(prefix) = std::env::var_os("NPM_CONFIG_PREFIX") {
        paths.push(PathBuf::from(prefix).join("bin"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            paths.push(PathBuf::from(appdata).join("npm"));
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        if let Some(home) = home::home_dir() {
            paths.push(home.join(".npm-global").join("bin"));
            paths.push(home.join(".local").join("bin"));
        }
        paths.push(PathBuf::from("/usr/local/bin"));
        #[cfg(target_os = "macos")]
        paths.push(PathBuf::from("/opt/homebrew/bin"));
    }

    paths
}

fn candidate_names(command: &str) -> Vec<OsString> {
    #[cfg(target_os = "windows")]
    {
        let mut names = vec![OsString::from(command)];
        if Path::new(command).extension().is_none() {
            let exts =
                std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
            for ext in exts.split(';') {
                let ext = ext.trim();
                if ext.is_empty() {
                    continue;
                }
                names.push(OsString::from(format!("{command}{ext}")));
            }
        }
        names
    }
    #[cfg(not(target_os = "windows"))]
    {
        vec![OsString::from(command)]
    }
}

fn push_unique_paths<I>(dest: &mut Vec<PathBuf>, paths: I)
where
    I: IntoIterator<Item = PathBuf>,
{
    for path in paths {
        if !dest.iter().any(|existing| existing == &path) {
            dest.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bin_missing() {
        assert!(find_bin("non_existent_binary_12345").is_none());
    }

    #[test]
    fn test_find_bin_in_extra_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("mmdc");
        std::fs::write(&bin, "#!/bin/sh\n").unwrap();

        let found = find_bin_in("mmdc", &[PathBuf::from("/nope"), dir.path().to_path_buf()]);
        assert_eq!(found, Some(bin.clone()));

        let explicit = find_bin_in(bin.to_str().unwrap(), &[]);
        assert_eq!(explicit, Some(bin));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        assert!(find_bin_in("/definitely/not/here/mmdc", &[]).is_none());
    }

    #[test]
    fn test_candidate_names() {
        let names = candidate_names("mmdc");
        assert!(names.contains(&OsString::from("mmdc")));
    }

    #[test]
    fn test_push_unique_paths() {
        let mut dest = vec![PathBuf::from("/a")];
        let paths = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        push_unique_paths(&mut dest, paths);
        assert_eq!(dest.len(), 2);
        assert_eq!(dest[1], PathBuf::from("/b"));
    }
}
