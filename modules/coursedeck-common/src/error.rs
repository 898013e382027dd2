use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseDeckError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
