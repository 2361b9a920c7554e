//! Template definitions and the fixed template registry.
//!
//! The three identifiers registered here are persisted on resume records
//! by the backend, which maps them to its own copy of the same designs
//! for PDF generation. Renaming or removing one is a breaking change for
//! stored data.

mod ats_simple;
mod modern;
mod professional;

/// Unknown template identifiers resolve to this design.
pub const DEFAULT_TEMPLATE_ID: &str = "ats-simple";

/// Registry of template identifier to template body, in stable order.
pub(crate) const REGISTRY: [(&str, &str); 3] = [
    ("ats-simple", ats_simple::BODY),
    ("professional", professional::BODY),
    ("modern", modern::BODY),
];

/// The known template identifiers, stable for the process lifetime.
pub const TEMPLATE_IDS: [&str; 3] = [REGISTRY[0].0, REGISTRY[1].0, REGISTRY[2].0];

pub(crate) fn body_for(template_id: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(id, _)| *id == template_id)
        .map(|(_, body)| *body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_known_ids() {
        for id in TEMPLATE_IDS {
            assert!(body_for(id).is_some(), "missing body for {id}");
        }
        assert!(body_for("nonexistent").is_none());
    }

    #[test]
    fn default_id_is_registered() {
        assert!(body_for(DEFAULT_TEMPLATE_ID).is_some());
    }

    #[test]
    fn bodies_are_complete_documents() {
        for (id, body) in REGISTRY {
            assert!(body.contains("<!DOCTYPE html>"), "{id} missing doctype");
            assert!(body.contains("</html>"), "{id} not closed");
            assert!(body.contains("<style>"), "{id} missing inline styles");
        }
    }
}
