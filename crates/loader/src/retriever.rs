use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("unsupported resource scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("invalid file URI '{0}'")]
    InvalidUri(String),

    #[error("resource '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fetches the raw bytes behind a resource name.
pub trait Retriever {
    fn get(&self, resource: &str) -> Result<Vec<u8>, RetrievalError>;
}

/// Decodes `%XX` escapes. Returns `None` for a malformed escape or non UTF-8 result.
fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// Reads resources from the local filesystem.
///
/// Accepts plain paths and absolute `file://` URIs. A URI's authority must be empty
/// (`file:///abs/path`) or `localhost`, and its path is percent-decoded. Plain paths are used
/// as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileRetriever;

impl FileRetriever {
    fn path(resource: &str) -> Result<PathBuf, RetrievalError> {
        let rest = match resource.split_once("://") {
            None => return Ok(PathBuf::from(resource)),
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("file") => rest,
            Some((scheme, _)) => {
                return Err(RetrievalError::UnsupportedScheme(scheme.to_string()))
            }
        };
        let invalid = || RetrievalError::InvalidUri(resource.to_string());
        let path = match rest.find('/') {
            Some(0) => rest,
            Some(i) if rest[..i].eq_ignore_ascii_case("localhost") => &rest[i..],
            _ => return Err(invalid()),
        };
        percent_decode(path).map(PathBuf::from).ok_or_else(invalid)
    }
}

impl Retriever for FileRetriever {
    fn get(&self, resource: &str) -> Result<Vec<u8>, RetrievalError> {
        let path = Self::path(resource)?;
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RetrievalError::NotFound(resource.to_string()),
            _ => RetrievalError::Io(e),
        })
    }
}

/// Serves resources from memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryRetriever {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, resource: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.resources.insert(resource.into(), data.into());
    }
}

impl Retriever for MemoryRetriever {
    fn get(&self, resource: &str) -> Result<Vec<u8>, RetrievalError> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| RetrievalError::NotFound(resource.to_string()))
    }
}
