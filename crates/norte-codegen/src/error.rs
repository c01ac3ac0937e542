//! Error types for project emission.

use thiserror::Error;

/// Result type alias for emitter operations.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors that can occur while emitting a project tree.
///
/// Derivations from the spec itself never fail; these errors only surface
/// from the templating layer.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Shell template failed to render.
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Shell template failed to compile.
    #[error("invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON serialization of template data failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
