use std::{future::Future, sync::Arc, time::Duration};

use anyhow::{anyhow, Error};
use axum::Router;
use tokio::net::TcpListener;

use relay_application::{TranscribeUseCase, TranscribeUseCaseImpl};
use relay_configuration::{AppConfig, ServerConfig};
use relay_domain::SpeechRecognitionPort;
use relay_http_server::{build_router, run_server, AppState};
use relay_infra_speech_google::{GoogleSpeechAdapter, GoogleSpeechAdapterConfig};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config)?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    /// Builds the process-wide speech client once and wires it into the
    /// request pipeline.
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let speech = &config.service.speech;
        tracing::info!(
            endpoint = %speech.endpoint,
            api_key_configured = speech.api_key.is_some(),
            access_token_configured = speech.access_token.is_some(),
            request_timeout_secs = speech.request_timeout_secs,
            max_upload_bytes = config.service.http.max_upload_bytes,
            "initializing transcription relay"
        );

        let recognizer: Arc<dyn SpeechRecognitionPort> =
            Arc::new(GoogleSpeechAdapter::new(GoogleSpeechAdapterConfig {
                endpoint: speech.endpoint.clone(),
                api_key: speech.api_key.clone(),
                access_token: speech.access_token.clone(),
                request_timeout: Duration::from_secs(speech.request_timeout_secs),
            })?);

        Ok(Self::with_recognizer(config, recognizer))
    }

    pub fn with_recognizer(config: AppConfig, recognizer: Arc<dyn SpeechRecognitionPort>) -> Self {
        let usecase: Arc<dyn TranscribeUseCase> = Arc::new(TranscribeUseCaseImpl::new(recognizer));
        let state = AppState::new(usecase, config.service.http.max_upload_bytes);
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        self.run_until(server_config, shutdown_signal()).await
    }

    pub async fn run_until<F>(self, server_config: ServerConfig, shutdown: F) -> Result<(), Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let bind_addr = server_config.bind_address();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|err| anyhow!("bind to {bind_addr} failed: {err}"))?;

        run_server(listener, self.router(), shutdown)
            .await
            .map_err(|err| anyhow!("http server failed: {err}"))
    }
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to listen for shutdown signal"),
    }
}
