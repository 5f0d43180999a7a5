//! Enforces the one-to-one mapping between src modules and unit test files

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files carry no testable logic
    fn is_organizational(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    fn rust_paths_under(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = match path.strip_prefix(base) {
                Ok(stripped) => stripped.to_string_lossy().to_string(),
                Err(error) => {
                    return Err(io::Error::other(format!(
                        "path escaped its base directory: {error}"
                    )));
                }
            };

            if path.is_dir() {
                paths.insert(relative);
                paths.extend(rust_paths_under(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(paths)
    }

    // Tests every src module has a unit test counterpart under tests/unit
    // Verified by deleting one unit test file
    #[test]
    fn test_every_src_file_has_a_unit_test() {
        let src_paths = rust_paths_under(Path::new("src"), Path::new("src"))
            .unwrap_or_default();
        assert!(!src_paths.is_empty(), "src directory must be readable");
        let test_paths = rust_paths_under(Path::new("tests/unit"), Path::new("tests/unit"))
            .unwrap_or_default();

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path))
            .filter(|path| !test_paths.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests every unit test file mirrors an existing src module
    // Verified by adding a unit test file with no counterpart
    #[test]
    fn test_every_unit_test_mirrors_a_src_file() {
        let src_paths = rust_paths_under(Path::new("src"), Path::new("src"))
            .unwrap_or_default();
        let test_paths = rust_paths_under(Path::new("tests/unit"), Path::new("tests/unit"))
            .unwrap_or_default();

        let orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !is_organizational(path))
            .filter(|path| !src_paths.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files with no src counterpart:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests every test file actually contains test functions
    // Verified by emptying one test file
    #[test]
    fn test_every_test_file_contains_tests() {
        let test_paths = rust_paths_under(Path::new("tests"), Path::new("tests"))
            .unwrap_or_default();
        assert!(!test_paths.is_empty(), "tests directory must be readable");

        let mut empty_files = Vec::new();
        for relative in &test_paths {
            if is_organizational(relative) || relative.ends_with("main.rs") {
                continue;
            }
            let full = Path::new("tests").join(relative);
            if !full.is_file() {
                continue;
            }
            let content = fs::read_to_string(&full).unwrap_or_default();
            if !content.contains("#[test]") {
                empty_files.push(format!("  - tests/{relative}"));
            }
        }

        assert!(
            empty_files.is_empty(),
            "test files without any #[test] functions:\n{}",
            empty_files.join("\n")
        );
    }
}
