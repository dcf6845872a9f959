//! Image bytes for image variables.

use serde::{Deserialize, Serialize};

/// Image bytes with their MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Raw bytes
    #[serde(default)]
    pub data: Vec<u8>,

    /// MIME type, e.g. "image/png"
    pub mime_type: String,

    /// File name the bytes were read from
    #[serde(default)]
    pub filename: Option<String>,
}

impl Resource {
    /// Create a resource with an explicit MIME type.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            filename: None,
        }
    }

    /// Create a resource, sniffing the MIME type from the leading bytes.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let mime_type = Self::sniff_mime_type(&data).unwrap_or("application/octet-stream");
        Self::new(data, mime_type)
    }

    /// Create a PNG resource.
    pub fn png(data: Vec<u8>) -> Self {
        Self::new(data, "image/png")
    }

    /// Record the file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// MIME type of JPEG, PNG or GIF data.
    pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
        match data {
            [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
            [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
            [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
            _ => None,
        }
    }
}
