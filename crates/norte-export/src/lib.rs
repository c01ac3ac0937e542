//! Packaging for generated projects: a downloadable ZIP bundle or a plain
//! directory on disk.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Component, Path};

use norte_codegen::GeneratedProject;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Packaging failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsafe project path: {0}")]
    UnsafePath(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Bundle a generated project into an in-memory ZIP archive.
///
/// Every entry is placed under `root_name/`, so the archive unpacks into a
/// single directory.
pub fn archive(project: &GeneratedProject, root_name: &str) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in &project.files {
        check_relative(path)?;
        writer.start_file(format!("{root_name}/{path}"), options)?;
        writer.write_all(content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Write a generated project into `dir`, creating subdirectories as needed.
pub fn write_to_dir(project: &GeneratedProject, dir: &Path) -> Result<()> {
    for (path, content) in &project.files {
        check_relative(path)?;
        let target = dir.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)?;
    }
    Ok(())
}

/// Project paths are emitter-controlled, but a spec edited by hand could
/// smuggle in an absolute path or `..`; refuse to write those.
fn check_relative(path: &str) -> Result<()> {
    let ok = Path::new(path)
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if ok {
        Ok(())
    } else {
        Err(ExportError::UnsafePath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use norte_core::Stack;
    use norte_interpreter::build_spec_from_prompt;
    use std::io::Read;

    fn sample_project() -> GeneratedProject {
        let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
        norte_codegen::emit(&spec).unwrap()
    }

    #[test]
    fn archive_is_a_zip_with_rooted_entries() {
        let project = sample_project();
        let bytes = archive(&project, "produtos").unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");

        let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), project.len());
        let mut entry = zip.by_name("produtos/package.json").unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        assert!(content.contains("produtos-react"));
    }

    #[test]
    fn write_to_dir_creates_nested_files() {
        let project = sample_project();
        let dir = tempfile::tempdir().unwrap();
        write_to_dir(&project, dir.path()).unwrap();

        let app = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();
        assert_eq!(Some(app.as_str()), project.file("src/App.tsx"));
        assert!(dir.path().join("index.html").exists());
    }

    #[test]
    fn traversal_paths_are_rejected() {
        let mut project = GeneratedProject::new();
        project.insert("../escape.txt", "nope");
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            write_to_dir(&project, dir.path()),
            Err(ExportError::UnsafePath(_))
        ));
        assert!(matches!(
            archive(&project, "x"),
            Err(ExportError::UnsafePath(_))
        ));
    }
}
