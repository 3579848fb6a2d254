//! Structural checks keeping `tests/unit` a file-for-file mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Relative paths of every `.rs` file and directory under `base`
    fn relative_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn tree(root: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Err(error) = relative_paths(Path::new(root), Path::new(root), &mut paths) {
            unreachable!("Failed to scan {root}: {error}");
        }
        paths
    }

    fn is_module_file(path: &str) -> bool {
        path == "lib.rs" || path == "main.rs" || path == "mod.rs" || path.ends_with("/mod.rs")
    }

    // Tests every source file has a unit test file at the same path
    // Verified by adding an empty source module
    #[test]
    fn test_src_files_have_unit_tests() {
        let units = tree(UNIT_DIR);
        let missing: Vec<String> = tree(SRC_DIR)
            .into_iter()
            .filter(|path| !is_module_file(path) && !units.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by deleting a source module
    #[test]
    fn test_unit_tests_have_src_counterparts() {
        let sources = tree(SRC_DIR);
        let orphaned: Vec<String> = tree(UNIT_DIR)
            .into_iter()
            .filter(|path| !is_module_file(path) && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests each unit test file is declared by its directory's mod.rs
    // Verified by removing a module declaration
    #[test]
    fn test_unit_files_are_declared() {
        let mut undeclared = Vec::new();

        for path in tree(UNIT_DIR) {
            let file = Path::new(&path);
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if is_module_file(&path) {
                continue;
            }

            let parent = file.parent().unwrap_or_else(|| Path::new(""));
            let module_file = Path::new(UNIT_DIR).join(parent).join("mod.rs");
            let declared = fs::read_to_string(&module_file)
                .is_ok_and(|content| content.contains(&format!("mod {stem};")));

            if !declared {
                undeclared.push(format!("  - tests/unit/{path}"));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files not declared in their mod.rs:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every non-module test file contains at least one test
    // Verified by adding a test file with only helpers
    #[test]
    fn test_test_files_contain_tests() {
        let mut empty = Vec::new();

        for path in tree("tests") {
            let file_name = Path::new(&path)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            if !path.ends_with(".rs") || file_name == "mod.rs" {
                continue;
            }

            let content = fs::read_to_string(Path::new("tests").join(&path)).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - tests/{path}"));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
