//! Class name to mapping file resolution.
//!
//! A class `App\Entity\Article` lives in `App.Entity.Article<ext>` inside one
//! of the configured directories. Directories are searched in order and the
//! first hit wins.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::DocumentError;

#[derive(Debug, Clone)]
pub struct FileLocator {
    paths: Vec<PathBuf>,
    extension: String,
}

impl FileLocator {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            paths,
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name a class is expected under.
    #[must_use]
    pub fn file_name_for(&self, class_name: &str) -> String {
        format!(
            "{}{}",
            class_name.trim_start_matches('\\').replace('\\', "."),
            self.extension
        )
    }

    /// Locate the mapping file of `class_name`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MappingNotFound`] when no directory holds it.
    pub fn find_mapping_file(&self, class_name: &str) -> Result<PathBuf, DocumentError> {
        let file_name = self.file_name_for(class_name);
        self.paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| DocumentError::MappingNotFound {
                class: class_name.to_string(),
                file_name,
            })
    }

    /// Every mapping file in the configured directories, in directory order
    /// and sorted by file name within a directory.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] when a directory cannot be listed.
    pub fn mapping_files(&self) -> Result<Vec<PathBuf>, DocumentError> {
        let mut files = Vec::new();
        for dir in &self.paths {
            let entries = std::fs::read_dir(dir).map_err(|source| DocumentError::Io {
                path: dir.clone(),
                source,
            })?;

            let mut found = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|source| DocumentError::Io {
                    path: dir.clone(),
                    source,
                })?;
                let path = entry.path();
                if path.is_file() && self.class_name_of(&path).is_some() {
                    found.push(path);
                }
            }
            found.sort();
            files.extend(found);
        }
        Ok(files)
    }

    /// Class names implied by the mapping file names. A class mapped in
    /// several directories is listed once.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] when a directory cannot be listed.
    pub fn all_class_names(&self) -> Result<Vec<String>, DocumentError> {
        let mut names: Vec<String> = self
            .mapping_files()?
            .iter()
            .filter_map(|path| self.class_name_of(path))
            .collect();
        let mut seen = HashSet::new();
        names.retain(|name| seen.insert(name.clone()));
        Ok(names)
    }

    fn class_name_of(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;
        let stem = file_name.strip_suffix(self.extension.as_str())?;
        (!stem.is_empty()).then(|| stem.replace('.', "\\"))
    }
}
