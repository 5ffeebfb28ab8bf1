//! Error types for package generation

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("{0}")]
    Validation(String),

    #[error("package already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("rendered content is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl PackageError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PackageError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PackageError>;
