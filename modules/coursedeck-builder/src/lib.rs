pub mod fetch;
pub mod host;
pub mod markup;
pub mod registry;
pub mod session;

pub use fetch::{Fetcher, HttpFetcher};
pub use host::{CanvasAssets, EditorConfig, EditorHandle, EditorHost, GrapesHost};
pub use markup::load_template_markup;
pub use registry::TemplateRegistry;
pub use session::{BuilderSession, EditorState, InitGuard, SelectedElement, Sessions};
