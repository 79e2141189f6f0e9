use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::Json,
};

use relay_application::{AudioUpload, TranscribeResponse, TranscribeUploadRequest};

use crate::{error::HttpError, AppState};

pub const AUDIO_FILE_FIELD: &str = "audio_file";
pub const LANGUAGE_FIELD: &str = "language";

pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<TranscribeResponse>), HttpError> {
    let upload = match multipart {
        Ok(multipart) => read_upload(multipart).await.inspect_err(|error| {
            tracing::debug!(?error, "unreadable multipart body");
        })?,
        // Anything that is not a multipart form carries no fields at all.
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "request is not a multipart form");
            TranscribeUploadRequest::default()
        }
    };

    tracing::info!(
        has_audio_file = upload.audio_file.is_some(),
        audio_bytes = upload
            .audio_file
            .as_ref()
            .map_or(0, |file| file.content.len()),
        language = upload.language.as_deref().unwrap_or(""),
        "received transcription request"
    );

    match state.usecase.transcribe(upload).await {
        Ok(response) => {
            tracing::info!("transcription request completed");
            Ok((StatusCode::OK, Json(response)))
        }
        Err(error) => {
            let error = HttpError::from(error);
            tracing::info!(status = error.status().as_u16(), "transcription request failed");
            Err(error)
        }
    }
}

/// Collects the first `audio_file` and `language` parts; other parts are
/// skipped.
async fn read_upload(mut multipart: Multipart) -> Result<TranscribeUploadRequest, HttpError> {
    let mut upload = TranscribeUploadRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(AUDIO_FILE_FIELD) if upload.audio_file.is_none() => {
                let file_name = field.file_name().map(str::to_string);
                let content = field.bytes().await?.to_vec();
                upload.audio_file = Some(AudioUpload { file_name, content });
            }
            Some(LANGUAGE_FIELD) if upload.language.is_none() => {
                upload.language = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(upload)
}
