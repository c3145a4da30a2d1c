//! Artifact archive extraction.
//!
//! TeamCity serves the archived artifacts endpoint as a ZIP stream. The
//! archive is unpacked with the `zip` crate, which rejects entries escaping
//! the destination directory. Extraction is CPU and disk bound, so it runs
//! on the blocking pool.

use std::path::Path;

use crate::error::{Result, UploaderError};

/// Extract a ZIP archive into `dest`, creating the directory if needed.
pub async fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dest).await?;

    let archive = archive.to_path_buf();
    let dest = dest.to_path_buf();
    tokio::task::spawn_blocking(move || extract_sync(&archive, &dest))
        .await
        .map_err(|e| UploaderError::Io(std::io::Error::other(e)))?
}

fn extract_sync(archive: &Path, dest: &Path) -> Result<()> {
    let file = std::fs::File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file).map_err(|source| UploaderError::Extraction {
        archive: archive.to_path_buf(),
        source,
    })?;

    zip.extract(dest).map_err(|source| UploaderError::Extraction {
        archive: archive.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_archive(path: &Path) {
        let file = std::fs::File::create(path).expect("create archive");
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer.start_file("manifest.json", options).expect("start file");
        writer.write_all(b"{\"bundles\": 2}").expect("write entry");

        writer.add_directory("bundles/", options).expect("add dir");
        writer
            .start_file("bundles/environment.bundle", options)
            .expect("start nested file");
        writer.write_all(&[7u8; 128]).expect("write nested entry");

        writer.finish().expect("finish archive");
    }

    #[tokio::test]
    async fn extracts_files_and_nested_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let archive = dir.path().join("archive-win.zip");
        build_archive(&archive);

        let dest = dir.path().join("AssetBundles").join("Windows");
        extract_zip(&archive, &dest).await.expect("extract");

        let manifest = std::fs::read_to_string(dest.join("manifest.json")).expect("manifest");
        assert_eq!(manifest, "{\"bundles\": 2}");
        let bundle = std::fs::metadata(dest.join("bundles/environment.bundle")).expect("bundle");
        assert_eq!(bundle.len(), 128);
    }

    #[tokio::test]
    async fn malformed_archive_is_an_extraction_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let archive = dir.path().join("archive-win.zip");
        std::fs::write(&archive, b"definitely not a zip").expect("write junk");

        let dest = dir.path().join("out");
        let err = extract_zip(&archive, &dest).await.unwrap_err();
        assert!(matches!(err, UploaderError::Extraction { .. }));
    }

    #[tokio::test]
    async fn missing_archive_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = extract_zip(&dir.path().join("nope.zip"), &dir.path().join("out"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploaderError::Io(_)));
    }
}
