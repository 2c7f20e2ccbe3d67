use std::fs::File;
use std::path::Path;

use tracing::{error, info};

use crate::archive::errors::ArchiveError;
use crate::archive::operations::{ReferencedIds, referenced_ids};

/// List every entry name in the tar archive at `path`.
///
/// The archive is opened read-only; entry contents are skipped, not
/// extracted.
pub fn entry_names(path: &Path) -> Result<Vec<String>, ArchiveError> {
    let read_failed = |message: String| ArchiveError::ReadFailed {
        path: path.display().to_string(),
        message,
    };

    let file = File::open(path).map_err(|e| {
        error!(
            event = "core.archive.open_failed",
            path = %path.display(),
            error = %e
        );
        ArchiveError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let mut archive = tar::Archive::new(file);
    let entries = archive.entries().map_err(|e| read_failed(e.to_string()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| read_failed(e.to_string()))?;
        names.push(String::from_utf8_lossy(&entry.path_bytes()).into_owned());
    }

    Ok(names)
}

/// Read the resource ids an export references.
pub fn scan_archive(path: &Path) -> Result<ReferencedIds, ArchiveError> {
    info!(event = "core.archive.scan_started", path = %path.display());

    let names = entry_names(path)?;
    let ids = referenced_ids(&names);

    info!(
        event = "core.archive.scan_completed",
        entries = names.len(),
        referenced = ids.len()
    );

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_archive(path: &Path, names: &[&str]) {
        let file = File::create(path).unwrap();
        let mut builder = tar::Builder::new(file);
        for name in names {
            let data = b"data";
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, &data[..]).unwrap();
        }
        builder.finish().unwrap();
    }

    #[test]
    fn test_scan_archive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("export.jex");
        write_archive(
            &path,
            &[
                "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.md",
                "resources/bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb.png",
                "resources/cccccccccccccccccccccccccccccccc.pdf",
            ],
        );

        let ids = scan_archive(&path).unwrap();

        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            vec![
                "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
                "cccccccccccccccccccccccccccccccc".to_string(),
            ]
        );
    }

    #[test]
    fn test_entry_names_preserves_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("export.jex");
        write_archive(&path, &["b.md", "a.md"]);

        assert_eq!(entry_names(&path).unwrap(), vec!["b.md", "a.md"]);
    }

    #[test]
    fn test_missing_archive_is_open_failed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = scan_archive(&temp_dir.path().join("missing.jex")).unwrap_err();
        assert!(matches!(err, ArchiveError::OpenFailed { .. }));
    }
}
