//! HTTP routes for the weather front-end.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;
use weather_core::{UnitSystem, WeatherClient, normalize};

use crate::render;

/// Application state shared across handlers.
pub struct AppState {
    pub client: WeatherClient,
}

/// Fields submitted by the search form. Nothing else is read from the
/// request.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub units: Option<String>,
}

/// Run the HTTP server.
pub async fn serve(addr: SocketAddr, client: WeatherClient) -> Result<()> {
    let state = Arc::new(AppState { client });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(search))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(render::page("", UnitSystem::default(), None))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let units = UnitSystem::from_form(form.units.as_deref());

    let reply = state.client.fetch(&form.city, units).await;
    let record = normalize(&reply, units);

    Html(render::page(&form.city, units, Some(&record)))
}
