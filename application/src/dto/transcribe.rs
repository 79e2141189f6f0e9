use serde::Serialize;

/// The `audio_file` part of an upload, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioUpload {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

impl AudioUpload {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            content,
        }
    }
}

/// Raw form fields, before any validation. Both are optional here so the
/// use case decides which failure a client sees first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscribeUploadRequest {
    pub audio_file: Option<AudioUpload>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}
