use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use readerspace_data::{Ledger, Load, Member, Save, StorageError};

/// The ledger persisted as a JSON document mapping
/// member codes to member records.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Use the ledger at path. The file does not need to exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write an empty ledger unless one exists.
    /// Returns true if the file was created.
    pub fn init(&self) -> Result<bool, StorageError> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&Ledger::new())?;
        Ok(true)
    }

    /// Open a ledger file in the temp dir. It is removed
    /// when the handle is dropped.
    pub fn open_test() -> (TestHandle, LedgerFile) {
        let path = std::env::temp_dir().join(format!(
            "readerspace_test_{}.json",
            rand::random::<u64>()
        ));
        let handle = TestHandle { path: path.clone() };
        (handle, LedgerFile::open(path))
    }

    // The temporary file must live in the same directory,
    // otherwise the rename is not atomic.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ledger".to_string());
        self.path.with_file_name(format!(
            ".{}.{:016x}.tmp",
            name,
            rand::random::<u64>()
        ))
    }

    fn write_replace(&self, tmp: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = File::create(tmp)?;
        file.write_all(data)?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        fs::rename(tmp, &self.path)
    }
}

impl Load<Ledger> for LedgerFile {
    fn load(&self) -> Result<Ledger, StorageError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ledger found, starting empty");
                return Ok(Ledger::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records: BTreeMap<String, Member> = serde_json::from_slice(&data)
            .map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let ledger = Ledger::from_records(records)?;

        debug!(path = %self.path.display(), members = ledger.len(), "ledger loaded");
        Ok(ledger)
    }
}

impl Save<Ledger> for LedgerFile {
    /// Write the ledger to a temporary file and move it over the
    /// previous state, so a failed write never leaves a partial file.
    fn save(&self, ledger: &Ledger) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(ledger)
            .map_err(|source| StorageError::Encode { source })?;

        let tmp = self.temp_path();
        if let Err(source) = self.write_replace(&tmp, &data) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), members = ledger.len(), "ledger saved");
        Ok(())
    }
}

/// Removes a test ledger file on drop.
pub struct TestHandle {
    path: PathBuf,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
