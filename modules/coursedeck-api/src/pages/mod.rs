use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};
use uuid::Uuid;

use coursedeck_builder::{
    host::EditorConfig, markup::load_template_markup, CanvasAssets, EditorHost,
};

use crate::auth::{self, AdminSession};
use crate::components::{
    render_builder, render_builder_loading, render_communication, render_courses, render_home,
    render_login, render_search, render_settings, render_users, render_websites, site_to_view,
    template_to_view, BuilderView, SiteCardView, TemplateOptionView,
};
use crate::demo;
use crate::AppState;

/// CSS selector the editor binds to on the builder page.
const CANVAS_CONTAINER: &str = "#builder-canvas";

// --- Auth pages (no AdminSession required) ---

pub async fn login_page() -> impl IntoResponse {
    Html(render_login(None))
}

#[derive(serde::Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    let username = form.username.trim();

    let authorized = username == state.config.admin_username
        && auth::constant_time_eq(
            form.password.as_bytes(),
            state.config.admin_password.as_bytes(),
        );

    if !authorized {
        warn!(username, "Rejected login attempt");
        return Html(render_login(Some("Invalid username or password.".to_string())))
            .into_response();
    }

    let secret = auth::session_secret(&state.config);
    let cookie = auth::session_cookie(username, secret);
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header("location", "/dashboard")
        .header("set-cookie", cookie)
        .body(axum::body::Body::empty())
        .unwrap()
}

pub async fn logout() -> Response {
    let cookie = auth::clear_session_cookie();
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header("location", "/login")
        .header("set-cookie", cookie)
        .body(axum::body::Body::empty())
        .unwrap()
}

// --- Dashboard sections (AdminSession required) ---

pub async fn home_page(_session: AdminSession) -> impl IntoResponse {
    Html(render_home(demo::dashboard_stats()))
}

pub async fn courses_page(_session: AdminSession) -> impl IntoResponse {
    Html(render_courses(demo::courses()))
}

pub async fn users_page(_session: AdminSession) -> impl IntoResponse {
    Html(render_users(demo::students()))
}

#[derive(serde::Deserialize)]
pub struct CommunicationQuery {
    #[serde(default = "default_tab")]
    pub tab: String,
}

fn default_tab() -> String {
    "messages".to_string()
}

pub async fn communication_page(
    _session: AdminSession,
    Query(params): Query<CommunicationQuery>,
) -> impl IntoResponse {
    let tab = match params.tab.as_str() {
        "announcements" => "announcements".to_string(),
        "campaigns" => "campaigns".to_string(),
        _ => "messages".to_string(),
    };
    Html(render_communication(
        tab,
        demo::messages(),
        demo::announcements(),
        demo::campaigns(),
    ))
}

pub async fn search_page(_session: AdminSession) -> impl IntoResponse {
    Html(render_search(demo::popular_searches(), demo::search_categories()))
}

pub async fn settings_page(_session: AdminSession) -> impl IntoResponse {
    Html(render_settings(demo::profile()))
}

// --- Websites ---

#[derive(serde::Deserialize)]
pub struct WebsitesQuery {
    pub error: Option<String>,
    pub notice: Option<String>,
}

fn error_text(code: &str) -> Option<String> {
    match code {
        "validation" => Some("Please select a template and enter a site name.".to_string()),
        _ => None,
    }
}

fn notice_text(code: &str) -> Option<String> {
    match code {
        "deleted" => Some("Site deleted successfully.".to_string()),
        _ => None,
    }
}

pub async fn websites_page(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Query(params): Query<WebsitesQuery>,
) -> impl IntoResponse {
    let sites: Vec<SiteCardView> = state.store.list().await.iter().map(site_to_view).collect();
    let templates: Vec<TemplateOptionView> =
        state.registry.all().iter().map(template_to_view).collect();

    let error = params.error.as_deref().and_then(error_text);
    let notice = params.notice.as_deref().and_then(notice_text);

    Html(render_websites(sites, templates, error, notice))
}

#[derive(serde::Deserialize)]
pub struct CreateSiteForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub template_id: String,
}

pub async fn create_site(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<CreateSiteForm>,
) -> impl IntoResponse {
    let name = form.name.trim();

    let template = match state.registry.get(form.template_id.trim()) {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Site creation without a valid template");
            return Redirect::to("/dashboard/websites?error=validation");
        }
    };

    match state.store.create(name, template).await {
        Ok(site) => {
            info!(site = %site.id, template = template.id.as_str(), "Site created");
            Redirect::to(&format!("/builder/{}", site.id))
        }
        Err(e) => {
            warn!(error = %e, "Site creation rejected");
            Redirect::to("/dashboard/websites?error=validation")
        }
    }
}

pub async fn delete_site(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Ok(uuid) = Uuid::parse_str(&id) else {
        return Redirect::to("/dashboard/websites");
    };
    state.store.delete(uuid).await;
    info!(site = %uuid, "Site deleted");
    Redirect::to("/dashboard/websites?notice=deleted")
}

// --- Builder ---

pub async fn builder_page(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(site_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&site_id) {
        Ok(u) => u,
        Err(_) => return (StatusCode::BAD_REQUEST, Html("Invalid site ID".to_string())),
    };

    let site = match state.store.get(uuid).await {
        Some(s) => s,
        None => return (StatusCode::NOT_FOUND, Html("Site not found".to_string())),
    };

    let view = BuilderView {
        site_id: site.id.to_string(),
        site_name: site.name.clone(),
        derived_url: site.derived_url.clone(),
        page_name: "Home".to_string(),
    };

    // One editor instance per site: while another request is still
    // initializing, show the loading state instead of starting a second one.
    let Some(guard) = state.sessions.begin_init(uuid) else {
        return (StatusCode::OK, Html(render_builder_loading(view)));
    };

    let markup = match load_template_markup(
        &state.fetcher,
        &state.config.template_base_url,
        &site.template_asset_root_path,
        "index.html",
    )
    .await
    {
        Ok(markup) => markup,
        Err(e) => {
            warn!(error = %e, site = %uuid, "Failed to load template markup");
            drop(guard);
            return (StatusCode::OK, Html(render_builder_loading(view)));
        }
    };

    let config = EditorConfig {
        container: CANVAS_CONTAINER.to_string(),
        height: "100vh".to_string(),
        canvas: CanvasAssets::for_template(&site.template_asset_root_path),
        session_endpoint: format!("/api/builder/{uuid}"),
    };

    let handle = match state.editor.attach(&config, &markup) {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, site = %uuid, "Editor attach failed");
            drop(guard);
            return (StatusCode::OK, Html(render_builder_loading(view)));
        }
    };
    guard.ready();

    let selected = state
        .sessions
        .with(uuid, |session| session.selected().cloned())
        .flatten();

    let (library_css, library_js) = state.editor.library_tags();
    (
        StatusCode::OK,
        Html(render_builder(
            view,
            library_css.to_string(),
            library_js.to_string(),
            handle.boot_script,
            selected,
        )),
    )
}

#[cfg(test)]
mod tests {
    use coursedeck_builder::session::{ElementCapabilities, SelectedElement};

    use crate::components::{
        render_builder, render_builder_loading, render_communication, render_login,
        render_websites, BuilderView, SiteCardView, TemplateOptionView,
    };
    use crate::demo;

    fn site_view(name: &str, status_label: &str) -> SiteCardView {
        SiteCardView {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            name: name.to_string(),
            url: "my-site.example.com".to_string(),
            status_label: status_label.to_string(),
            status_class: "bg-yellow-100 text-yellow-800".to_string(),
            last_edited: "2025-01-15".to_string(),
            template_name: "eLearning Pro".to_string(),
        }
    }

    fn template_view() -> TemplateOptionView {
        TemplateOptionView {
            id: "elearning-1".to_string(),
            name: "eLearning Pro".to_string(),
            category: "Education".to_string(),
            description: "Professional eLearning template".to_string(),
        }
    }

    fn builder_view() -> BuilderView {
        BuilderView {
            site_id: "00000000-0000-0000-0000-000000000001".to_string(),
            site_name: "My Site".to_string(),
            derived_url: "my-site.example.com".to_string(),
            page_name: "Home".to_string(),
        }
    }

    #[test]
    fn websites_page_lists_sites_and_templates() {
        let html = render_websites(
            vec![site_view("My Site", "draft")],
            vec![template_view()],
            None,
            None,
        );
        assert!(html.contains("My Site"));
        assert!(html.contains("draft"));
        assert!(html.contains("bg-yellow-100"), "draft badge class");
        assert!(html.contains("eLearning Pro — Education"), "template option");
        assert!(html.contains("/builder/00000000-0000-0000-0000-000000000001"));
    }

    #[test]
    fn websites_page_shows_error_banner() {
        let html = render_websites(
            vec![],
            vec![template_view()],
            Some("Please select a template and enter a site name.".to_string()),
            None,
        );
        assert!(html.contains("Please select a template"));
        assert!(html.contains("bg-red-50"));
    }

    #[test]
    fn login_page_shows_error() {
        let html = render_login(Some("Invalid username or password.".to_string()));
        assert!(html.contains("Invalid username or password."));
    }

    #[test]
    fn builder_loading_shows_spinner() {
        let html = render_builder_loading(builder_view());
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("grapesjs.init"));
    }

    #[test]
    fn builder_page_embeds_boot_script_and_inspector() {
        let selected = SelectedElement {
            id: "hero-section-1".to_string(),
            element_type: "Hero Section".to_string(),
            capabilities: ElementCapabilities {
                overlay: true,
                opacity: 50,
                caption: false,
                popup: false,
            },
        };
        let html = render_builder(
            builder_view(),
            "https://unpkg.com/grapesjs/dist/css/grapes.min.css".to_string(),
            "https://unpkg.com/grapesjs".to_string(),
            "grapesjs.init({\"storageManager\":false});".to_string(),
            Some(selected),
        );
        assert!(html.contains("builder-canvas"));
        assert!(html.contains("storageManager"));
        assert!(html.contains("Properties"), "inspector panel");
        assert!(html.contains("Hero Section"));
        assert!(html.contains("50%"), "opacity value");
    }

    #[test]
    fn builder_page_without_selection_hides_inspector() {
        let html = render_builder(
            builder_view(),
            "css".to_string(),
            "js".to_string(),
            "boot();".to_string(),
            None,
        );
        assert!(!html.contains("Properties"));
    }

    #[test]
    fn communication_renders_requested_tab() {
        let html = render_communication(
            "campaigns".to_string(),
            demo::messages(),
            demo::announcements(),
            demo::campaigns(),
        );
        assert!(html.contains("January enrollment push"));
        assert!(html.contains("border-teal-600"), "active tab styling");
    }
}
