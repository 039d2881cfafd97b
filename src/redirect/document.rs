//! The YAML mapping document:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A missing field reads as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathUrlPair {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
#[error("malformed url mapping document: {0}")]
pub struct DocumentError(#[from] serde_yaml::Error);

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read url mapping file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse url mapping file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

pub fn parse(yaml: &[u8]) -> Result<Vec<PathUrlPair>, DocumentError> {
    // serde_yaml rejects a document with no nodes at all
    if yaml.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_slice(yaml)?)
}

pub async fn load(path: &Path) -> Result<Vec<PathUrlPair>, LoadError> {
    let yaml = fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse(&yaml).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })
}
