use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coursedeck_builder::{GrapesHost, HttpFetcher, Sessions, TemplateRegistry};
use coursedeck_common::Config;
use coursedeck_sites::{FileKv, SiteStore};

mod auth;
mod components;
mod demo;
mod pages;
mod rest;
mod templates;

pub struct AppState {
    pub config: Config,
    pub store: SiteStore,
    pub registry: TemplateRegistry,
    pub fetcher: HttpFetcher,
    pub editor: GrapesHost,
    pub sessions: Arc<Sessions>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("coursedeck=info".parse()?))
        .init();

    let config = Config::from_env();

    let kv = Arc::new(FileKv::new(&config.data_dir));
    let store = SiteStore::load(kv);

    let host = config.web_host.clone();
    let port = config.web_port;
    let templates_dir = config.templates_dir.clone();

    let state = Arc::new(AppState {
        config,
        store,
        registry: TemplateRegistry::builtin(),
        fetcher: HttpFetcher::new(),
        editor: GrapesHost,
        sessions: Arc::new(Sessions::new()),
    });

    let app = Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        // Auth
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", post(pages::logout))
        // Dashboard sections (Dioxus SSR)
        .route("/dashboard", get(pages::home_page))
        .route("/dashboard/courses", get(pages::courses_page))
        .route(
            "/dashboard/websites",
            get(pages::websites_page).post(pages::create_site),
        )
        .route("/dashboard/websites/{id}/delete", post(pages::delete_site))
        .route("/dashboard/users", get(pages::users_page))
        .route("/dashboard/communication", get(pages::communication_page))
        .route("/dashboard/search", get(pages::search_page))
        .route("/dashboard/settings", get(pages::settings_page))
        // Site builder
        .route("/builder/{site_id}", get(pages::builder_page))
        // REST API
        .route("/api/sites", get(rest::api_sites))
        .route("/api/builder/{site_id}/select", post(rest::select_element))
        .route("/api/builder/{site_id}/deselect", post(rest::deselect_element))
        .route("/api/builder/{site_id}/elements", post(rest::add_element))
        .route(
            "/api/builder/{site_id}/elements/{element_id}",
            post(rest::update_element),
        )
        .route(
            "/api/builder/{site_id}/elements/{element_id}/delete",
            post(rest::delete_element),
        )
        // Template asset bundles; also the origin the markup fetch reads from
        .nest_service("/templates", ServeDir::new(templates_dir))
        .with_state(state)
        // No caching: responses carry session cookies
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{host}:{port}");
    info!("CourseDeck console starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
