use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{StatusCode, Url};

use relay_domain::{DomainError, RecognitionConfig, RecognitionResult, SpeechRecognitionPort};

pub mod protocol;

use protocol::{
    ErrorEnvelope, RecognizeRequest, RecognizeResponse, WireAudio, WireRecognitionConfig,
};

const RECOGNIZE_PATH: &str = "/v1/speech:recognize";

#[derive(Debug, Clone)]
pub struct GoogleSpeechAdapterConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

/// Cloud Speech-to-Text v1 synchronous recognition over REST.
pub struct GoogleSpeechAdapter {
    config: GoogleSpeechAdapterConfig,
    recognize_url: Url,
    client: reqwest::Client,
}

impl GoogleSpeechAdapter {
    pub fn new(config: GoogleSpeechAdapterConfig) -> Result<Self, DomainError> {
        let recognize_url = build_recognize_url(&config)?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                DomainError::internal_error(&format!("failed to build http client: {err}"))
            })?;

        if config.api_key.is_none() && config.access_token.is_none() {
            tracing::warn!(
                endpoint = %config.endpoint,
                "no speech credentials configured; requests will be sent unauthenticated"
            );
        }

        Ok(Self {
            config,
            recognize_url,
            client,
        })
    }

    pub fn recognize_url(&self) -> &Url {
        &self.recognize_url
    }
}

#[async_trait]
impl SpeechRecognitionPort for GoogleSpeechAdapter {
    fn name(&self) -> &'static str {
        "google-speech"
    }

    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, DomainError> {
        let body = RecognizeRequest {
            config: WireRecognitionConfig::from(config),
            audio: WireAudio {
                content: STANDARD.encode(audio),
            },
        };

        let mut request = self.client.post(self.recognize_url.clone()).json(&body);
        if let Some(token) = self.config.access_token.as_deref() {
            request = request.bearer_auth(token);
        }

        tracing::debug!(
            audio_bytes = audio.len(),
            language_code = %config.language_code,
            "sending recognize request"
        );

        let response = request
            .send()
            .await
            .map_err(|err| DomainError::recognition(err.to_string()))?;
        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| DomainError::recognition(err.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "speech service rejected request");
            return Err(upstream_error(status, &payload));
        }

        let parsed: RecognizeResponse = serde_json::from_str(&payload).map_err(|err| {
            DomainError::recognition(format!("invalid speech service response: {err}"))
        })?;

        tracing::debug!(
            segment_count = parsed.results.len(),
            "recognize request completed"
        );

        Ok(parsed.results.into_iter().map(RecognitionResult::from).collect())
    }
}

fn build_recognize_url(config: &GoogleSpeechAdapterConfig) -> Result<Url, DomainError> {
    let base = config.endpoint.trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}{RECOGNIZE_PATH}")).map_err(|err| {
        DomainError::internal_error(&format!(
            "invalid speech endpoint `{}`: {err}",
            config.endpoint
        ))
    })?;
    // Bearer tokens take precedence; the key is only sent when no token is set.
    if config.access_token.is_none() {
        if let Some(key) = config.api_key.as_deref() {
            url.query_pairs_mut().append_pair("key", key);
        }
    }
    Ok(url)
}

fn upstream_error(status: StatusCode, payload: &str) -> DomainError {
    match serde_json::from_str::<ErrorEnvelope>(payload) {
        Ok(envelope) => DomainError::recognition(envelope.error.message),
        Err(_) => DomainError::recognition(format!(
            "speech service returned {}: {}",
            status.as_u16(),
            payload.trim()
        )),
    }
}
