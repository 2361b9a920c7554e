//! The render engine: resolves a template id, binds the helper set and
//! projects a [`ResumeRecord`] into a complete HTML document string.

use crate::error::RenderError;
use crate::helpers;
use crate::model::ResumeRecord;
use crate::templates::{self, DEFAULT_TEMPLATE_ID, TEMPLATE_IDS};
use handlebars::Handlebars;
use log::{debug, error};
use std::sync::OnceLock;

/// A configured template engine with the three resume templates compiled
/// and the shared helper set registered.
///
/// Construction compiles every template body once; rendering afterwards
/// is a pure function of the record and template id with no I/O and no
/// shared mutable state, so a single instance can serve concurrent reads.
pub struct ResumeRenderer {
    engine: Handlebars<'static>,
}

impl ResumeRenderer {
    pub fn new() -> Self {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(false);
        // Output is HTML, so the default escaping stays on; field values
        // are user-supplied text.
        helpers::register_all(&mut engine);
        for (id, body) in templates::REGISTRY {
            if let Err(e) = engine.register_template_string(id, body) {
                // Bodies are compiled-in constants; a failure here is a
                // template bug and shows up in the registry tests.
                error!("failed to compile built-in template '{}': {}", id, e);
            }
        }
        ResumeRenderer { engine }
    }

    /// Renders `record` with the given template, producing a complete,
    /// self-contained HTML document.
    ///
    /// Unknown template ids are not an error: they resolve to the
    /// default `ats-simple` design so persisted records always render.
    pub fn render(
        &self,
        record: &ResumeRecord,
        template_id: &str,
    ) -> Result<String, RenderError> {
        let resolved = if templates::body_for(template_id).is_some() {
            template_id
        } else {
            debug!(
                "unknown template id '{}', falling back to '{}'",
                template_id, DEFAULT_TEMPLATE_ID
            );
            DEFAULT_TEMPLATE_ID
        };
        Ok(self.engine.render(resolved, record)?)
    }

    /// The template identifiers this renderer knows, in stable order.
    pub fn template_ids(&self) -> &'static [&'static str] {
        &TEMPLATE_IDS
    }
}

impl Default for ResumeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn shared() -> &'static ResumeRenderer {
    static RENDERER: OnceLock<ResumeRenderer> = OnceLock::new();
    RENDERER.get_or_init(ResumeRenderer::new)
}

/// Renders with a process-wide shared renderer, compiling the templates
/// on first use. Equivalent to [`ResumeRenderer::render`].
pub fn render_resume(record: &ResumeRecord, template_id: &str) -> Result<String, RenderError> {
    shared().render(record, template_id)
}

/// The known template identifiers, stable within a process lifetime.
pub fn available_template_ids() -> &'static [&'static str] {
    &TEMPLATE_IDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_templates_compile() {
        let renderer = ResumeRenderer::new();
        for id in renderer.template_ids() {
            assert!(renderer.engine.has_template(id), "template '{id}' not compiled");
        }
    }

    #[test]
    fn empty_record_renders_on_every_template() {
        let renderer = ResumeRenderer::new();
        let record = ResumeRecord::default();
        for id in renderer.template_ids() {
            let html = renderer.render(&record, id).unwrap();
            assert!(html.contains("<!DOCTYPE html>"));
            assert!(html.contains("</html>"));
        }
    }

    #[test]
    fn template_id_order_is_stable() {
        assert_eq!(
            available_template_ids(),
            &["ats-simple", "professional", "modern"]
        );
    }
}
