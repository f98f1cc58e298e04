//! Errors reported by `ckshow`.

use std::io;

use cktools_args::ArgError;

use crate::reader::ReadError;

/// Everything that can stop a `ckshow` run.
#[derive(Debug, thiserror::Error)]
pub enum CkShowError {
    /// The command line could not be interpreted.
    #[error(transparent)]
    Usage(#[from] ArgError),

    /// No checkpoint was given.
    #[error("No file provided. Please specify a .safetensors or .gguf file.")]
    NoFile,

    /// The checkpoint could not be read.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// `--name` asked for a key the checkpoint does not have.
    #[error("The metadata entry '{0}' was not found.")]
    MissingMetadata(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CkShowError {
    /// Remediation tips printed under the error message.
    pub fn hints(&self) -> Vec<String> {
        match self {
            CkShowError::Usage(ArgError::TooManyPositionals(_)) => {
                vec!["You can only specify one file.".to_string()]
            }
            CkShowError::Usage(_) => {
                vec!["Try `ckshow --help` for more information.".to_string()]
            }
            CkShowError::NoFile => {
                vec!["To get help on how to use this tool, run: ckshow --help".to_string()]
            }
            CkShowError::MissingMetadata(_) => {
                vec!["Run `ckshow --metadata <file>` to list the available keys.".to_string()]
            }
            _ => Vec::new(),
        }
    }

    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CkShowError::Usage(_) => 2,
            _ => 1,
        }
    }

    /// True when the output sink was closed (e.g. `ckshow file | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CkShowError::Io(err) => err.kind() == io::ErrorKind::BrokenPipe,
            CkShowError::Json(err) => err.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
            CkShowError::Csv(err) => {
                matches!(err.kind(), csv::ErrorKind::Io(inner) if inner.kind() == io::ErrorKind::BrokenPipe)
            }
            _ => false,
        }
    }
}
