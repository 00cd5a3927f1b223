use crate::{CrawlerError, Storage};
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Overwrite,
    Append,
}

/// Writes `Page_<N>/<name>` files under `root`.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        FsStorage { root: root.into() }
    }

    pub fn page_dir(&self, page: u32) -> PathBuf {
        self.root.join(format!("Page_{}", page))
    }
}

fn fs_error(path: &Path) -> impl FnOnce(std::io::Error) -> CrawlerError {
    let path = path.to_path_buf();
    move |source| CrawlerError::FilesystemError { path, source }
}

#[async_trait::async_trait]
impl Storage for FsStorage {
    async fn ensure_page_dir(&self, page: u32) -> Result<PathBuf, CrawlerError> {
        let dir = self.page_dir(page);
        fs::create_dir_all(&dir).await.map_err(fs_error(&dir))?;
        debug!("Page directory ready: {}", dir.display());
        Ok(dir)
    }

    async fn save(
        &self,
        content: &str,
        file_name: &str,
        mode: WriteMode,
        dir: &Path,
    ) -> Result<PathBuf, CrawlerError> {
        let path = dir.join(file_name);

        let mut options = fs::OpenOptions::new();
        match mode {
            WriteMode::Overwrite => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };

        let mut file = options.open(&path).await.map_err(fs_error(&path))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(fs_error(&path))?;
        file.flush().await.map_err(fs_error(&path))?;

        info!("Content saved. {}", path.display());
        Ok(path)
    }
}
