use serde::{Deserialize, Serialize};

use relay_domain::{RecognitionConfig, RecognitionResult, SpeechAlternative};

#[derive(Debug, Serialize)]
pub struct RecognizeRequest<'a> {
    pub config: WireRecognitionConfig<'a>,
    pub audio: WireAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecognitionConfig<'a> {
    pub encoding: &'static str,
    pub language_code: &'a str,
    pub enable_automatic_punctuation: bool,
    pub model: &'a str,
}

impl<'a> From<&'a RecognitionConfig> for WireRecognitionConfig<'a> {
    fn from(config: &'a RecognitionConfig) -> Self {
        Self {
            encoding: config.encoding.as_str(),
            language_code: &config.language_code,
            enable_automatic_punctuation: config.enable_automatic_punctuation,
            model: &config.model,
        }
    }
}

/// Inline audio, base64 encoded as the REST surface requires.
#[derive(Debug, Serialize)]
pub struct WireAudio {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<WireResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireResult {
    #[serde(default)]
    pub alternatives: Vec<WireAlternative>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl From<WireResult> for RecognitionResult {
    fn from(result: WireResult) -> Self {
        RecognitionResult {
            alternatives: result
                .alternatives
                .into_iter()
                .map(|alternative| SpeechAlternative {
                    transcript: alternative.transcript,
                    confidence: alternative.confidence,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
