use serde::{Deserialize, Serialize};

pub const DEFAULT_RECOGNITION_MODEL: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// Uncompressed 16-bit signed little-endian samples.
    Linear16,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub language_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub enable_automatic_punctuation: bool,
    pub language_code: String,
    pub model: String,
}

impl RecognitionConfig {
    pub fn for_language(language_code: impl Into<String>) -> Self {
        Self {
            encoding: AudioEncoding::Linear16,
            enable_automatic_punctuation: true,
            language_code: language_code.into(),
            model: DEFAULT_RECOGNITION_MODEL.to_string(),
        }
    }
}

impl From<&TranscriptionRequest> for RecognitionConfig {
    fn from(request: &TranscriptionRequest) -> Self {
        Self::for_language(request.language_code.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAlternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechAlternative>,
}

impl RecognitionResult {
    pub fn from_transcripts<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alternatives: transcripts
                .into_iter()
                .map(|transcript| SpeechAlternative {
                    transcript: transcript.into(),
                    confidence: None,
                })
                .collect(),
        }
    }

    pub fn top_transcript(&self) -> Option<&str> {
        self.alternatives
            .first()
            .map(|alternative| alternative.transcript.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
    pub segment_count: usize,
}

impl TranscriptionResult {
    /// Joins the top alternative of every segment with no separator.
    /// Segments without alternatives contribute nothing.
    pub fn from_segments(segments: &[RecognitionResult]) -> Self {
        let text = segments
            .iter()
            .filter_map(RecognitionResult::top_transcript)
            .collect::<String>();
        Self {
            text,
            segment_count: segments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
