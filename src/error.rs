use thiserror::Error;

use std::io;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to parse command line options: {args}")]
    Parse { args: String },
    #[error("min value of frames is {min}. got={got}")]
    FramesTooSmall { min: i64, got: i64 },
    #[error("max value of frames is {max}. got={got}")]
    FramesTooLarge { max: i64, got: i64 },
    #[error("min value of fps is {min}. got={got}")]
    FpsTooSmall { min: i64, got: i64 },
    #[error("max value of fps is {max}. got={got}")]
    FpsTooLarge { max: i64, got: i64 },
    #[error("could not read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to write frame: {0}")]
    Write(#[from] io::Error),
}

impl AppError {
    /// Returns `true` for errors caused by bad command line usage. These are
    /// reported alongside the help text.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            AppError::Parse { .. }
                | AppError::FramesTooSmall { .. }
                | AppError::FramesTooLarge { .. }
                | AppError::FpsTooSmall { .. }
                | AppError::FpsTooLarge { .. }
        )
    }
}
