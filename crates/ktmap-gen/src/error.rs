use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GenError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> GenError + '_ {
        move |source| GenError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
