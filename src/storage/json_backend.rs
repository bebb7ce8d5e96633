use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::Result,
    utils::{app_data_dir, ensure_dir},
};

use super::{Snapshot, SnapshotBackend};

const STATE_FILE: &str = "budget_state.json";
const TMP_SUFFIX: &str = "tmp";

/// File-backed snapshot storage keyed by a single fixed file name.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    state_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        Ok(Self {
            state_file: base.join(STATE_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn path(&self) -> &Path {
        &self.state_file
    }
}

impl SnapshotBackend for JsonStorage {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.state_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.state_file)?;
        match serde_json::from_str::<serde_json::Value>(&data) {
            Ok(value) => Ok(Some(Snapshot::from_value(value))),
            Err(err) => {
                tracing::warn!(
                    path = %self.state_file.display(),
                    %err,
                    "stored snapshot is malformed; falling back to defaults"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = tmp_path(&self.state_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.state_file)?;
        Ok(())
    }
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
