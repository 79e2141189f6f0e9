use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use relay_domain::{
    RecognitionConfig, SpeechRecognitionPort, TranscriptionRequest, TranscriptionResult,
};

use crate::{ApplicationError, AudioUpload, TranscribeResponse, TranscribeUploadRequest};

#[async_trait]
pub trait TranscribeUseCase: Send + Sync {
    async fn transcribe(
        &self,
        request: TranscribeUploadRequest,
    ) -> Result<TranscribeResponse, ApplicationError>;
}

pub struct TranscribeUseCaseImpl {
    recognizer: Arc<dyn SpeechRecognitionPort>,
}

impl TranscribeUseCaseImpl {
    pub fn new(recognizer: Arc<dyn SpeechRecognitionPort>) -> Self {
        Self { recognizer }
    }
}

#[async_trait]
impl TranscribeUseCase for TranscribeUseCaseImpl {
    async fn transcribe(
        &self,
        request: TranscribeUploadRequest,
    ) -> Result<TranscribeResponse, ApplicationError> {
        let request = validate_upload(request)?;
        let request_id = Uuid::new_v4();
        let config = RecognitionConfig::from(&request);

        tracing::debug!(
            %request_id,
            audio_bytes = request.audio.len(),
            language_code = %config.language_code,
            recognizer = self.recognizer.name(),
            "calling speech recognizer"
        );

        let segments = match self.recognizer.recognize(&request.audio, &config).await {
            Ok(segments) => segments,
            Err(error) => {
                tracing::error!(%request_id, error = %error, "error during transcription");
                return Err(error.into());
            }
        };

        let result = TranscriptionResult::from_segments(&segments);
        if result.is_empty() {
            tracing::debug!(
                %request_id,
                segment_count = result.segment_count,
                "no transcription available"
            );
            return Err(ApplicationError::EmptyTranscription);
        }

        tracing::debug!(
            %request_id,
            segment_count = result.segment_count,
            transcript_chars = result.text.chars().count(),
            "transcription successful"
        );

        Ok(TranscribeResponse {
            transcription: result.text,
        })
    }
}

/// Applies the upload checks in client-visible order: file, filename, language.
fn validate_upload(
    request: TranscribeUploadRequest,
) -> Result<TranscriptionRequest, ApplicationError> {
    let TranscribeUploadRequest {
        audio_file,
        language,
    } = request;

    let Some(AudioUpload { file_name, content }) = audio_file else {
        tracing::debug!("no audio file provided");
        return Err(ApplicationError::MissingFile);
    };
    if file_name.as_deref().map_or(true, str::is_empty) {
        tracing::debug!("no selected file");
        return Err(ApplicationError::EmptyFilename);
    }
    let language_code = match language {
        Some(language) if !language.is_empty() => language,
        _ => {
            tracing::debug!("language not specified");
            return Err(ApplicationError::MissingLanguage);
        }
    };

    Ok(TranscriptionRequest {
        audio: content,
        language_code,
    })
}
