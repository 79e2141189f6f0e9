use std::{future::Future, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

use relay_application::TranscribeUseCase;

pub mod error;
pub mod handlers;

pub use error::{error_mapper, HttpError};
pub use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn TranscribeUseCase>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(usecase: Arc<dyn TranscribeUseCase>, max_upload_bytes: usize) -> Self {
        Self {
            usecase,
            max_upload_bytes,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Raw PCM uploads are large; the default 2 MiB body limit is too small.
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route(
            "/",
            get(transcribe).post(transcribe).layer(body_limit.clone()),
        )
        .route("/transcribe", post(transcribe).layer(body_limit))
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn run_server<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "transcription relay listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
