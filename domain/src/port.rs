use async_trait::async_trait;

use crate::{DomainError, RecognitionConfig, RecognitionResult};

/// Narrow contract over a third-party speech recognizer.
///
/// Implementations must be safe to share across concurrent requests; the
/// composition root builds one instance and hands it out behind an `Arc`.
#[async_trait]
pub trait SpeechRecognitionPort: Send + Sync {
    fn name(&self) -> &'static str;

    /// Recognizes `audio` in one shot. Result segments come back in the order
    /// the service produced them, each with its alternatives ranked best first.
    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<RecognitionResult>, DomainError>;
}
