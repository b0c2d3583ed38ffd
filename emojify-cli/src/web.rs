//! Web form in front of the emojifier.

use std::{net::SocketAddr, sync::Arc};

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use emojify::Emojifier;
use serde::Deserialize;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub struct AppState {
    pub emojifier: Emojifier,
}

type SharedState = Arc<AppState>;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate<'a> {
    emoji_text: &'a str,
}

#[derive(Deserialize)]
struct ConvertForm {
    text: String,
}

#[derive(Debug)]
struct WebError(askama::Error);

impl From<askama::Error> for WebError {
    fn from(value: askama::Error) -> Self {
        Self(value)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "failed to render template");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/convert", post(convert))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(addr: SocketAddr, emojifier: Emojifier) -> anyhow::Result<()> {
    let state = Arc::new(AppState { emojifier });

    info!(%addr, "Binding HTTP listener");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn home() -> Result<Html<String>, WebError> {
    Ok(Html(IndexTemplate.render()?))
}

async fn convert(
    State(state): State<SharedState>,
    Form(form): Form<ConvertForm>,
) -> Result<Html<String>, WebError> {
    let emoji_text = state.emojifier.convert(&form.text);
    Ok(Html(
        ResultTemplate {
            emoji_text: &emoji_text,
        }
        .render()?,
    ))
}
