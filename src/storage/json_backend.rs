use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::ledger::Transaction;

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const STORE_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-backed storage keeping the whole collection as one JSON array,
/// rewritten in full after every mutation.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    store_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            store_file: root.join(STORE_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn store_path(&self) -> &Path {
        &self.store_file
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Vec<Transaction> {
        if !self.store_file.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&self.store_file) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(
                    path = %self.store_file.display(),
                    %err,
                    "could not read transaction store; starting empty"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %self.store_file.display(),
                    %err,
                    "transaction store is not valid JSON; starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = tmp_path(&self.store_file);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.store_file)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
