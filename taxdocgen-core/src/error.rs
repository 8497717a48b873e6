use thiserror::Error;

/// Errors surfaced while rendering fixtures.
///
/// There is deliberately no recovery path: the generator is an offline
/// developer tool, so the first failure aborts the whole run.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error: FixtureError = io_error.into();
        assert!(matches!(error, FixtureError::Io(_)));
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let error: FixtureError = IoError::new(ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(error.to_string(), "IO error: denied");
    }
}
