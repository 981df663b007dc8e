use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::CourseRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read course catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("course catalog {path} is not a JSON list of courses: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only list of courses used to ground replies.
///
/// Loaded once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<CourseRecord>,
}

impl CourseCatalog {
    /// Load the catalog from a JSON file. A missing file gives an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("⚠️  Course catalog {} not found, answering without facts", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let courses: Vec<CourseRecord> = serde_json::from_str(raw)?;
        Ok(Self { courses })
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
