use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sqlts.toml";

/// A `sqlts.toml` file with both raw content and parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Load the config for a run.
    ///
    /// An explicit path must exist. Without one, `sqlts.toml` in `dir` is
    /// used when present and defaults apply otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            return Self::open(path).map(Some);
        }

        let default = dir.join(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            return Self::open(default).map(Some);
        }
        Ok(None)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sqlts.toml");
        fs::write(&path, "camel_case = true\n").unwrap();

        let file = ConfigFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.content(), "camel_case = true\n");
        assert!(file.config().camel_case);
    }

    #[test]
    fn test_open_missing_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_discover_default_file() {
        let temp = TempDir::new().unwrap();
        assert!(ConfigFile::discover(None, temp.path()).unwrap().is_none());

        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "partitions = true\n").unwrap();
        let file = ConfigFile::discover(None, temp.path()).unwrap().unwrap();
        assert!(file.into_config().partitions);
    }

    #[test]
    fn test_discover_explicit_missing_fails() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("custom.toml");
        assert!(ConfigFile::discover(Some(&explicit), temp.path()).is_err());
    }
}
