//! Resume template rendering engine.
//!
//! Takes a structured [`ResumeRecord`] and deterministically renders it
//! into a self-contained HTML document through one of three fixed visual
//! templates. The output feeds an interactive preview surface (loaded as
//! iframe content) and doubles as the visual contract a server-side PDF
//! generator must match, so both sides consume this one implementation
//! instead of maintaining drifting copies.
//!
//! ## Key pieces
//!
//! - **Data model** ([`model`]): the canonical resume representation with
//!   its camelCase wire names and deprecated-alias handling.
//! - **Templates** ([`templates`]): three complete HTML documents with
//!   embedded placeholders, registered under the fixed ids `ats-simple`,
//!   `professional` and `modern`.
//! - **Helpers**: `formatDate`, `join`, `hasItems` and `ifCond`, shared
//!   by every template and total over malformed input.
//! - **Engine** ([`ResumeRenderer`]): compiles the templates once and
//!   renders records without I/O, validation or mutation. Unknown
//!   template ids fall back to the default design.
//!
//! ```
//! use resume_render::{ResumeRecord, render_resume};
//!
//! let record = ResumeRecord {
//!     full_name: "Jane Doe".into(),
//!     email: "jane@x.com".into(),
//!     ..Default::default()
//! };
//! let html = render_resume(&record, "modern").unwrap();
//! assert!(html.contains("Jane Doe"));
//! ```

pub mod error;
mod helpers;
pub mod model;
pub mod templates;
mod renderer;

pub use error::RenderError;
pub use model::{
    CertificationItem, EducationItem, ExperienceItem, ProjectItem, ResumeRecord, SkillsData,
};
pub use renderer::{available_template_ids, render_resume, ResumeRenderer};
pub use templates::{DEFAULT_TEMPLATE_ID, TEMPLATE_IDS};
