use relay_domain::DomainError;
use thiserror::Error;

/// Every way a transcription request can end without a transcript. The
/// display text of each variant is exactly what clients receive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("No audio file provided")]
    MissingFile,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Language not specified")]
    MissingLanguage,

    #[error("{0}")]
    TranscriptionService(String),

    #[error("No transcription available")]
    EmptyTranscription,
}

impl ApplicationError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApplicationError::MissingFile
                | ApplicationError::EmptyFilename
                | ApplicationError::MissingLanguage
        )
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        ApplicationError::TranscriptionService(error.to_string())
    }
}
