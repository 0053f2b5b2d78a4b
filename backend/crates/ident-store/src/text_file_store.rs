//! One-file-per-record storage.
//!
//! Every record lives in `<data_dir>/<id>.<extension>` as a single line
//! produced by the configured [`LineFormat`]. There is no locking: concurrent
//! writers to the same id race and the last one wins.

use crate::{DataContext, Result, StoreError};

use ident_config::{DEFAULT_DATA_DIRECTORY, StoreConfig};
use ident_core::{LineFormat, Record};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TextFileStore {
    data_dir: PathBuf,
    extension: String,
    format: LineFormat,
    overwrite_on_create: bool,
}

impl TextFileStore {
    /// Store rooted at `data_dir` with default settings.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let defaults = StoreConfig::default();
        Self {
            data_dir: data_dir.into(),
            extension: defaults.extension,
            format: defaults.format,
            overwrite_on_create: defaults.overwrite_on_create,
        }
    }

    /// Store under `DataStore/` next to the running executable.
    pub fn with_default_location() -> Result<Self> {
        Ok(Self::new(Self::base_dir()?.join(DEFAULT_DATA_DIRECTORY)))
    }

    /// Store described by the `[store]` config section.
    ///
    /// The section is validated first. A relative `data_dir` is resolved
    /// against the executable's directory.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        config.validate().map_err(|e| StoreError::config(e))?;

        let data_dir = match &config.data_dir {
            Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => Self::base_dir()?.join(dir),
            None => Self::base_dir()?.join(DEFAULT_DATA_DIRECTORY),
        };

        Ok(Self {
            data_dir,
            extension: config.extension.clone(),
            format: config.format,
            overwrite_on_create: config.overwrite_on_create,
        })
    }

    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    /// Use `extension` (one leading dot allowed) for record files.
    pub fn with_extension(mut self, extension: &str) -> Result<Self> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        StoreConfig::validate_extension(extension).map_err(|e| StoreError::config(e))?;

        self.extension = extension.to_string();
        Ok(self)
    }

    pub fn with_overwrite_on_create(mut self, overwrite: bool) -> Self {
        self.overwrite_on_create = overwrite;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Path a record with `id` is stored at, whether or not it exists.
    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", id.hyphenated(), self.extension))
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        let path = self.path_for(id);
        fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::io(path, e))
    }

    /// Remove the record stored under `id`, if any.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.ensure_directory().await?;

        let path = self.path_for(id);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Deleted record {id} at {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Delete of absent record {id} ignored");
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete record {id}: {e}");
                Err(StoreError::io(path, e))
            }
        }
    }

    fn base_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| StoreError::data_dir(format!("cannot locate executable: {e}")))?;

        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| StoreError::data_dir("executable has no parent directory"))
    }

    async fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StoreError::io(&self.data_dir, e))
    }

    fn is_record_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// Read and decode one record file; `None` when the file is gone.
    async fn read_record<T: Record>(&self, path: &Path) -> Result<Option<T>> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let text = String::from_utf8(bytes).map_err(|_| StoreError::utf8(path))?;

        self.format
            .decode::<T>(&text)
            .map(Some)
            .map_err(|e| StoreError::decode(path, e))
    }

    async fn write_new<T: Record>(&self, item: &T) -> Result<()> {
        let id = item.id();
        let path = self.path_for(id);
        let line = self.format.encode(item);

        let mut options = OpenOptions::new();
        options.write(true);
        if self.overwrite_on_create {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let file = options.open(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                StoreError::already_exists(id, &path)
            } else {
                StoreError::io(&path, e)
            }
        })?;

        write_or_discard(file, &path, &line).await
    }
}

/// Write `line` through `file`; on failure remove `path` so no partial
/// record is left behind.
pub(crate) async fn write_or_discard<W>(mut file: W, path: &Path, line: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match file.write_all(line.as_bytes()).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    drop(file);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path).await
            && cleanup.kind() != ErrorKind::NotFound
        {
            warn!("Failed to remove partial record {}: {cleanup}", path.display());
        }
        return Err(StoreError::io(path, e));
    }

    Ok(())
}

#[async_trait]
impl DataContext for TextFileStore {
    async fn create<T: Record>(&self, item: &T) -> Result<()> {
        self.ensure_directory().await?;

        match self.write_new(item).await {
            Ok(()) => {
                debug!("Created record {}", item.id());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to create record {}: {e}", item.id());
                Err(e)
            }
        }
    }

    async fn delete<T: Record>(&self, item: &T) -> Result<()> {
        self.delete_by_id(item.id()).await
    }

    async fn get_by_id<T: Record>(&self, id: Uuid) -> Result<Option<T>> {
        self.ensure_directory().await?;

        let record = self.read_record(&self.path_for(id)).await?;
        if record.is_none() {
            debug!("Record {id} not found");
        }
        Ok(record)
    }

    async fn get_all<T: Record>(&self) -> Result<Vec<T>> {
        self.ensure_directory().await?;

        let mut entries = fs::read_dir(&self.data_dir)
            .await
            .map_err(|e| StoreError::io(&self.data_dir, e))?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&self.data_dir, e))?
        {
            let path = entry.path();
            if !self.is_record_file(&path) {
                continue;
            }

            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(StoreError::io(&path, e)),
            };
            if !file_type.is_file() {
                continue;
            }

            // Deleted between listing and reading
            if let Some(record) = self.read_record(&path).await? {
                records.push(record);
            }
        }

        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.data_dir.display()
        );
        Ok(records)
    }

    async fn update<T: Record>(&self, item: &T) -> Result<()> {
        self.ensure_directory().await?;

        let id = item.id();
        if !self.exists(id).await? {
            return self.create(item).await;
        }

        let path = self.path_for(id);
        let line = self.format.encode(item);
        fs::write(&path, line).await.map_err(|e| {
            warn!("Failed to update record {id}: {e}");
            StoreError::io(&path, e)
        })?;

        debug!("Updated record {id}");
        Ok(())
    }
}
