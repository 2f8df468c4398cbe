use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

#[derive(Debug)]
pub struct TempFileManager {
    base_dir: TempDir,
}

impl TempFileManager {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            base_dir: tempfile::Builder::new().prefix("showdown-cli").tempdir()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.base_dir.path().join(name)
    }

    pub fn create_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }
}
