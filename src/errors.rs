use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Form input rejected; one message per offending field.
    Validation(Vec<String>),
    NotFound { entity: &'static str, id: String },
    Template(askama::Error),
    Io(std::io::Error),
}

impl PartialEq for AppError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AppError::Validation(a), AppError::Validation(b)) => a == b,
            (
                AppError::NotFound { entity: ae, id: ai },
                AppError::NotFound { entity: be, id: bi },
            ) => ae == be && ai == bi,
            // askama::Error and io::Error carry no notion of equality.
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors.join("; ")),
            AppError::NotFound { entity, id } => write!(f, "{entity} {id} not found"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

/// Render a template to markup, logging the failure before converting it.
pub fn render<T: Template>(tmpl: &T) -> Result<String, AppError> {
    tmpl.render().map_err(|e| {
        log::error!("Template render failed: {e}");
        AppError::Template(e)
    })
}
