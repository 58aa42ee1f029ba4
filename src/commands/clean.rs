//! Clean command implementation

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::debug;
use walkdir::WalkDir;

use crate::build::ProjectLayout;
use crate::error::BuildfrontError;
use crate::utils::terminal::{format_size, print_success};

/// Recursively remove the build output directory.
///
/// The directory is not checked for existence first: removing a missing
/// build directory fails like any other removal error.
pub fn execute(layout: &ProjectLayout) -> Result<()> {
    let size = get_dir_size(&layout.build_dir);
    debug!("Removing {} ({} bytes)", layout.build_dir.display(), size);

    fs::remove_dir_all(&layout.build_dir).map_err(|source| BuildfrontError::Clean {
        path: layout.build_dir.clone(),
        source,
    })?;

    print_success(&format!(
        "Removed {} ({})",
        layout.build_dir_display(),
        format_size(size)
    ));

    Ok(())
}

/// Total size of the files under `path`; unreadable entries count as zero
fn get_dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_nested_contents() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        let nested = layout.build_dir.join("CMakeFiles").join("demo.dir");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("main.o"), vec![0u8; 2048]).unwrap();
        fs::write(temp_dir.path().join("CMakeLists.txt"), "project(demo)").unwrap();

        execute(&layout).unwrap();

        assert!(!layout.build_dir.exists());
        assert!(temp_dir.path().join("CMakeLists.txt").exists());
    }

    #[test]
    fn test_clean_missing_build_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());

        let err = execute(&layout).unwrap_err();

        match err.downcast_ref::<BuildfrontError>() {
            Some(BuildfrontError::Clean { path, source }) => {
                assert_eq!(path, &layout.build_dir);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!layout.build_dir.exists());
    }

    #[test]
    fn test_dir_size() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("a.bin"), vec![0u8; 100]).unwrap();
        fs::write(temp_dir.path().join("sub").join("b.bin"), vec![0u8; 24]).unwrap();

        assert_eq!(get_dir_size(temp_dir.path()), 124);
        assert_eq!(get_dir_size(&temp_dir.path().join("missing")), 0);
    }
}
