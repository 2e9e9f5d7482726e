use crate::ExtractorError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where pages come from. Extraction never fetches on its own.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ExtractorError>;
}

/// Cache-only source backed by a directory of saved pages.
///
/// The directory holds an `index.json` mapping each URL to a file name
/// relative to the directory. URLs missing from the index are reported as
/// [`ExtractorError::NotCached`].
pub struct FixtureSource {
    dir: PathBuf,
    index: HashMap<String, String>,
}

impl FixtureSource {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<FixtureSource, ExtractorError> {
        let dir = dir.as_ref().to_path_buf();
        let raw = fs::read_to_string(dir.join("index.json"))?;
        let index: HashMap<String, String> = serde_json::from_str(&raw)?;
        debug!("Fixture index {} has {} pages", dir.display(), index.len());

        Ok(FixtureSource { dir, index })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl PageSource for FixtureSource {
    fn fetch(&self, url: &str) -> Result<String, ExtractorError> {
        let file = self
            .index
            .get(url)
            .ok_or_else(|| ExtractorError::NotCached(url.to_string()))?;
        debug!("Visit {} ({})", url, file);
        Ok(fs::read_to_string(self.dir.join(file))?)
    }
}
