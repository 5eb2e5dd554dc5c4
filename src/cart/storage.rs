use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A key/value slot store in the manner of browser local storage: string
/// values under string keys, no transactions, last write wins.
pub trait CartStorage {
    fn read(&self, slot: &str) -> io::Result<Option<String>>;
    fn write(&mut self, slot: &str, value: &str) -> io::Result<()>;
    /// Removing an absent slot is not an error.
    fn remove(&mut self, slot: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_slot(slot: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.slots.insert(slot.to_string(), value.to_string());
        storage
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, value: &str) -> io::Result<()> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> io::Result<()> {
        self.slots.remove(slot);
        Ok(())
    }
}

/// One file per slot, `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, slot: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(slot), value)
    }

    fn remove(&mut self, slot: &str) -> io::Result<()> {
        match fs::remove_file(self.path(slot)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
