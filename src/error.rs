use std::path::PathBuf;

use thiserror::Error;

pub type Result<A> = std::result::Result<A, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Encountered io error: `{0}`")]
    Io(std::io::Error),
    #[error("Abort, `{0}` is not a valid directory.")]
    InvalidWorkDir(PathBuf),
    #[error("Unable to read template `{0}`: `{1}`")]
    ReadTemplate(PathBuf, std::io::Error),
    #[error("Unable to write `{0}`: `{1}`")]
    WriteFile(PathBuf, std::io::Error),
    #[error("No author config at `{0}`")]
    MissingAuthorConfig(PathBuf),
    #[error("Bad configuration: `{0}`")]
    Config(Box<figment::Error>),
    #[error("Template uses `{0}` but no value was given for it")]
    MissingPlaceholder(String),
    #[error("Invalid placeholder in template: line {line}, col {col}")]
    InvalidPlaceholder { line: usize, col: usize },
    #[error("Unable to locate the directory of the running executable")]
    NoInstallDir,
    #[error("Input closed before an answer was given")]
    NoAnswer,
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<figment::Error> for Error {
    fn from(value: figment::Error) -> Self {
        Self::Config(Box::new(value))
    }
}
