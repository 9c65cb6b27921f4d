use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, DeserializeOwned};

#[derive(Debug)]
pub enum LoadError {
    Open {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    Empty {
        path: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed opening {}: {}", path, source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed parsing YAML for {}: {}", path, source)
            }
            Self::Empty { path } => write!(f, "no YAML document found in {}", path),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Parse exactly the first document of a (possibly multi-document) YAML file.
///
/// No schema validation happens beyond what serde needs; a structurally valid
/// document with missing keys fails here with the serde error naming the key.
pub fn load_first_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: display.clone(),
        source,
    })?;

    let mut documents = serde_yaml::Deserializer::from_str(&raw);
    let Some(first) = documents.next() else {
        return Err(LoadError::Empty { path: display });
    };
    T::deserialize(first).map_err(|source| LoadError::Parse {
        path: display,
        source,
    })
}
