use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod coexpr;
pub mod groups;
pub mod reader;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {msg}", path.display())]
    Format {
        path: PathBuf,
        line: usize,
        msg: String,
    },
}

impl InputError {
    pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> InputError + '_ {
        move |source| InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn format(path: &Path, line: usize, msg: impl Into<String>) -> InputError {
        InputError::Format {
            path: path.to_path_buf(),
            line,
            msg: msg.into(),
        }
    }
}
