//! Persisting uploaded video files to disk.
//!
//! Stored filenames are UUID v4 keys with the client's extension appended.
//! The client-supplied filename itself is never used, so uploads cannot
//! collide with or overwrite each other and path traversal via the filename is
//! impossible.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Store persisting upload payloads under the configured directory.
///
/// The directory is also served statically at `/public`, so the relative path
/// this store returns is directly fetchable by clients.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Creates an upload store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it doesn't exist yet.
    pub async fn ensure_dir(&self) -> Result<(), std::io::Error> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Writes an upload to disk under a freshly generated key.
    ///
    /// # Arguments
    /// - `original_name` - Client filename, used only to carry over the extension
    /// - `data` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - The public-relative path of the stored file (`public/{key}`)
    /// - `Err(std::io::Error)` - Write failed
    pub async fn save(
        &self,
        original_name: Option<&str>,
        data: &[u8],
    ) -> Result<String, std::io::Error> {
        let key = Uuid::new_v4();

        let extension = original_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str());

        let file_name = match extension {
            Some(ext) => format!("{}.{}", key, ext),
            None => key.to_string(),
        };

        tokio::fs::write(self.dir.join(&file_name), data).await?;

        Ok(format!("public/{}", file_name))
    }
}
