use std::collections::BTreeMap;
use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub(super) type Entries = BTreeMap<String, String>;

/// Session storage persisted as a single JSON object on disk
///
/// Every operation rewrites the whole file under one async lock, so entries
/// survive a restart of the client. A missing file is an empty session; an
/// unreadable one is logged and treated as empty.
pub struct FileStorage {
    pub path: PathBuf,
    pub(super) lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Caller must hold `lock`
    pub(super) async fn read_entries(&self) -> Result<Entries, Box<dyn Error + Send + Sync>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "session file is malformed, starting empty");
                Ok(Entries::new())
            }
        }
    }

    /// Caller must hold `lock`
    pub(super) async fn write_entries(&self, entries: &Entries) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}
