use crate::error::{I18nError, I18nErrorExt};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Key-value persistence for system parameters.
///
/// Keys are the `glossa.sys.*` constants of `glossa_domain::constants`. An absent key and
/// an empty value are equivalent to callers.
pub trait ParameterStore: Send + Sync + Debug {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// [`I18nError::Io`] or [`I18nError::Serde`] when a backing file cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), I18nError>;

    /// # Errors
    /// Same as [`ParameterStore::set`].
    fn remove(&self, key: &str) -> Result<(), I18nError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParameterStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError> {
        self.values.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), I18nError> {
        self.values.write().remove(key);
        Ok(())
    }
}

/// Parameters kept in a JSON object on disk.
///
/// The whole file is loaded on [`FileStore::open`] and rewritten on every mutation through a
/// temporary sibling file that is synced and renamed over the target.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
    tmp_counter: AtomicU64,
}

impl FileStore {
    /// Opens the store at `path`; a missing file is an empty store.
    ///
    /// # Errors
    /// [`I18nError::Io`] when the file exists but cannot be read, [`I18nError::Serde`] when
    /// it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, I18nError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .context(format!("Malformed parameter file: {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Parameter file absent, starting empty");
                BTreeMap::new()
            }
            Err(err) => {
                return Err(I18nError::Io {
                    source: err,
                    context: Some(format!("Failed to read {}", path.display()).into()),
                });
            }
        };
        info!(path = %path.display(), count = values.len(), "Loaded system parameters");
        purge_tmp(&path);

        Ok(Self { path, values: RwLock::new(values), tmp_counter: AtomicU64::new(1) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), I18nError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(values).context("Failed to encode parameters")?;
        let counter = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let mut temp = self.path.clone().into_os_string();
        temp.push(format!("{TMP_MARKER}{counter}"));
        let temp = PathBuf::from(temp);

        {
            let mut file = create_tmp(&temp)
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(&data).context("Write failed")?;
            file.sync_all().context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &self.path) {
            if err.kind() != std::io::ErrorKind::AlreadyExists {
                let _ = fs::remove_file(&temp);
                return Err(I18nError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), self.path.display())
                            .into(),
                    ),
                });
            }
            fs::remove_file(&self.path)
                .context(format!("Failed to replace {}", self.path.display()))?;
            fs::rename(&temp, &self.path).context(format!(
                "Atomic swap failed: {} -> {}",
                temp.display(),
                self.path.display()
            ))?;
        }
        Ok(())
    }
}

const TMP_MARKER: &str = ".tmp.";

/// Creates `temp`, replacing a leftover of an earlier process with the same name.
fn create_tmp(temp: &Path) -> std::io::Result<fs::File> {
    let open = || fs::OpenOptions::new().create_new(true).write(true).open(temp);
    match open() {
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            warn!(path = %temp.display(), "Replacing stale temp file");
            fs::remove_file(temp)?;
            open()
        }
        result => result,
    }
}

/// Removes `<file>.tmp.*` siblings left behind by interrupted writes.
fn purge_tmp(path: &Path) {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name().and_then(|n| n.to_str())) else {
        return;
    };
    let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let prefix = format!("{name}{TMP_MARKER}");
    let mut removed = 0_usize;
    for entry in entries.flatten() {
        let is_tmp = entry.file_name().to_str().is_some_and(|n| n.starts_with(&prefix));
        if !is_tmp || !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }
        match fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(err) => warn!(path = %entry.path().display(), %err, "Failed to remove temp file"),
        }
    }
    if removed > 0 {
        info!(removed, "Cleaned up temporary parameter files");
    }
}

impl ParameterStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError> {
        let mut values = self.values.write();
        let previous = values.insert(key.to_owned(), value.to_owned());
        if let Err(err) = self.persist(&values) {
            match previous {
                Some(previous) => values.insert(key.to_owned(), previous),
                None => values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), I18nError> {
        let mut values = self.values.write();
        let Some(previous) = values.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.persist(&values) {
            values.insert(key.to_owned(), previous);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("params.json");

        let store = FileStore::open(&path).unwrap();
        store.set("glossa.sys.language", "en-Latn-US").unwrap();
        store.set("glossa.sys.locale", "en-US").unwrap();
        store.remove("glossa.sys.locale").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("glossa.sys.language").as_deref(), Some("en-Latn-US"));
        assert_eq!(reopened.get("glossa.sys.locale"), None);

        let leftovers = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn stale_temp_files_do_not_block_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        let stale = dir.path().join("params.json.tmp.1");
        let unrelated = dir.path().join("other.json.tmp.1");
        fs::write(&stale, "{").unwrap();
        fs::write(&unrelated, "{").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(!stale.exists());
        assert!(unrelated.exists());

        fs::write(&stale, "{").unwrap();
        store.set("glossa.sys.locale", "en-GB").unwrap();
        assert!(!stale.exists());
        assert_eq!(FileStore::open(&path).unwrap().get("glossa.sys.locale").as_deref(), Some("en-GB"));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(FileStore::open(&path), Err(I18nError::Serde { .. })));

        fs::write(&path, "  \n").unwrap();
        assert_eq!(FileStore::open(&path).unwrap().get("x"), None);
    }
}
