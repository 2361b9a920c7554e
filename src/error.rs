use thiserror::Error;

/// Errors surfaced by the render engine.
///
/// The engine is total over well-typed records: unknown template ids fall
/// back to the default design, malformed dates pass through unchanged and
/// empty sections are omitted. The only inhabited failure path is an
/// internal handlebars error, which the static template bodies and total
/// helper set do not trigger in practice.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),
}
