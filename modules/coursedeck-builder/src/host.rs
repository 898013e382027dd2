use serde::Serialize;

use coursedeck_common::CourseDeckError;

const GRAPES_JS: &str = "https://unpkg.com/grapesjs@0.21.13/dist/grapes.min.js";
const GRAPES_CSS: &str = "https://unpkg.com/grapesjs@0.21.13/dist/css/grapes.min.css";

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.10.0/css/all.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.4.1/font/bootstrap-icons.css";
const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.4.1.min.js";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.0.0/dist/js/bootstrap.bundle.min.js";

/// Ordered stylesheet and script URL lists injected into the editing
/// canvas's document before the initial markup is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasAssets {
    pub styles: Vec<String>,
    pub scripts: Vec<String>,
}

impl CanvasAssets {
    /// Canvas injection lists for a template rooted at `asset_root`: shared
    /// CDN assets first, then the template's own stylesheet and script.
    pub fn for_template(asset_root: &str) -> Self {
        Self {
            styles: vec![
                FONT_AWESOME_CSS.to_string(),
                BOOTSTRAP_ICONS_CSS.to_string(),
                format!("{asset_root}css/bootstrap.min.css"),
                format!("{asset_root}css/style.css"),
            ],
            scripts: vec![
                JQUERY_JS.to_string(),
                BOOTSTRAP_JS.to_string(),
                format!("{asset_root}js/main.js"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorConfig {
    /// CSS selector of the DOM container the editor binds to.
    pub container: String,
    pub height: String,
    pub canvas: CanvasAssets,
    /// Base path of the session endpoints selection events post to.
    /// Not part of the editor's own init payload.
    #[serde(skip)]
    pub session_endpoint: String,
}

/// A bound editor instance: the container it attached to plus the boot
/// script that brings it up in the page.
#[derive(Debug, Clone)]
pub struct EditorHandle {
    pub container: String,
    pub boot_script: String,
}

/// Seam over the embedded visual editor. Implementations must disable
/// host-managed storage and inject the canvas asset lists before setting
/// the initial markup.
pub trait EditorHost: Send + Sync {
    /// `(stylesheet href, script src)` for the editor library itself.
    fn library_tags(&self) -> (&'static str, &'static str);

    fn attach(
        &self,
        config: &EditorConfig,
        initial_markup: &str,
    ) -> Result<EditorHandle, CourseDeckError>;
}

/// GrapesJS-backed editor host.
pub struct GrapesHost;

impl EditorHost for GrapesHost {
    fn library_tags(&self) -> (&'static str, &'static str) {
        (GRAPES_CSS, GRAPES_JS)
    }

    fn attach(
        &self,
        config: &EditorConfig,
        initial_markup: &str,
    ) -> Result<EditorHandle, CourseDeckError> {
        if config.container.trim().is_empty() {
            return Err(CourseDeckError::Editor(
                "editor container selector is missing".to_string(),
            ));
        }

        let init = serde_json::json!({
            "container": config.container,
            "height": config.height,
            "width": "auto",
            "storageManager": false,
            "canvas": {
                "styles": config.canvas.styles,
                "scripts": config.canvas.scripts,
            },
        });

        // JSON string literals double as JS string literals.
        let markup = serde_json::to_string(initial_markup)
            .map_err(|e| CourseDeckError::Editor(format!("markup encoding failed: {e}")))?;
        let endpoint = serde_json::to_string(&config.session_endpoint)
            .map_err(|e| CourseDeckError::Editor(format!("endpoint encoding failed: {e}")))?;

        let boot_script = format!(
            r#"const editor = grapesjs.init({init});
editor.setComponents({markup});
const sessionEndpoint = {endpoint};
editor.on('component:selected', (model) => {{
  fetch(sessionEndpoint + '/select', {{
    method: 'POST',
    headers: {{ 'Content-Type': 'application/json' }},
    body: JSON.stringify({{
      id: model.getId(),
      element_type: model.get('tagName') || 'section',
      overlay: true,
      opacity: 50,
      caption: false,
      popup: false
    }})
  }});
}});
editor.on('component:deselected', () => {{
  fetch(sessionEndpoint + '/deselect', {{ method: 'POST' }});
}});"#
        );

        Ok(EditorHandle {
            container: config.container.clone(),
            boot_script,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EditorConfig {
        EditorConfig {
            container: "#builder-canvas".to_string(),
            height: "100vh".to_string(),
            canvas: CanvasAssets::for_template("/templates/x/"),
            session_endpoint: "/api/builder/00000000-0000-0000-0000-000000000001".to_string(),
        }
    }

    #[test]
    fn canvas_assets_order_shared_then_template() {
        let assets = CanvasAssets::for_template("/tpl/");
        assert_eq!(assets.styles.len(), 4);
        assert_eq!(assets.styles[2], "/tpl/css/bootstrap.min.css");
        assert_eq!(assets.styles[3], "/tpl/css/style.css");
        assert_eq!(assets.scripts.len(), 3);
        assert_eq!(assets.scripts[2], "/tpl/js/main.js");
    }

    #[test]
    fn attach_disables_storage_and_sets_markup() {
        let handle = GrapesHost.attach(&config(), "<p>hello</p>").unwrap();
        assert_eq!(handle.container, "#builder-canvas");
        assert!(handle.boot_script.contains(r#""storageManager":false"#));
        assert!(handle.boot_script.contains(r#"setComponents("<p>hello</p>")"#));
        assert!(handle.boot_script.contains("/templates/x/css/style.css"));
        assert!(handle.boot_script.contains("component:selected"));
    }

    #[test]
    fn attach_escapes_markup_for_script_context() {
        let handle = GrapesHost
            .attach(&config(), "<script>\"quoted\"</script>")
            .unwrap();
        assert!(handle.boot_script.contains(r#"\"quoted\""#));
    }

    #[test]
    fn attach_missing_container_is_an_error() {
        let mut cfg = config();
        cfg.container = "  ".to_string();
        let err = GrapesHost.attach(&cfg, "<p></p>").unwrap_err();
        assert!(matches!(err, CourseDeckError::Editor(_)));
    }
}
