use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unrecognized command \"{0}\".")]
    UnknownCommand(String),

    #[error("Required parameter \"{parameter}\" is missing.")]
    MissingParameter { command: String, parameter: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Render error: {0}")]
    Render(#[from] tinge::RenderError),

    /// A fault raised by a handler body, passed through untouched.
    #[error(transparent)]
    Handler(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
