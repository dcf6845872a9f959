//! Image variables.

use super::{Key, VariableType};
use crate::error::Result;
use crate::model::Resource;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where an image variable's bytes come from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Bytes held in memory
    Embedded(Resource),
    /// A file read when the image is rendered
    File(PathBuf),
}

/// An image bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageVariable {
    key: String,
    source: ImageSource,
    /// Rendered width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Rendered height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageVariable {
    /// Create an image variable from embedded bytes.
    pub fn embedded(key: impl Into<String>, resource: Resource) -> Self {
        Self::new(key, ImageSource::Embedded(resource))
    }

    /// Create an image variable referring to a file.
    pub fn file(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(key, ImageSource::File(path.into()))
    }

    /// Create an image variable from any source.
    pub fn new(key: impl Into<String>, source: ImageSource) -> Self {
        Self {
            key: key.into(),
            source,
            width: None,
            height: None,
        }
    }

    /// Set rendered dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Key of the image.
    pub fn key(&self) -> Key {
        Key::new(self.key.clone(), VariableType::Image)
    }

    /// Placeholder name of the image.
    pub fn name(&self) -> &str {
        &self.key
    }

    /// Image source.
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Load the image bytes, reading the file for file sources.
    pub fn load(&self) -> Result<Resource> {
        match &self.source {
            ImageSource::Embedded(resource) => Ok(resource.clone()),
            ImageSource::File(path) => {
                let data = fs::read(path)?;
                let mut resource = Resource::from_bytes(data);
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    resource = resource.with_filename(name);
                }
                Ok(resource)
            }
        }
    }

    /// Path of a file source.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ImageSource::File(path) => Some(path),
            ImageSource::Embedded(_) => None,
        }
    }
}
