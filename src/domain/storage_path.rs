use std::fmt;

use super::asset::SanitizedFilename;

const UPLOADS_PREFIX: &str = "uploads";

/// Location of an object inside the blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn upload(filename: &SanitizedFilename) -> Self {
        Self(format!("{}/{}", UPLOADS_PREFIX, filename.as_str()))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
