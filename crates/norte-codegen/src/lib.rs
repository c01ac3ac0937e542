//! Multi-target project emission for Norte screen specifications.
//!
//! Given a [`norte_core::ScreenSpec`], each emitter renders a complete,
//! runnable project skeleton for one front-end stack: React/TypeScript,
//! Vue 3, a static Bootstrap page, or Angular. The emitters are independent
//! string renderers, but they all consume the shared derivations in
//! [`directive`] and the theme stylesheets in [`theme`], so the four outputs
//! keep identical CRUD semantics and comparable visuals.
//!
//! # Example
//!
//! ```
//! use norte_codegen::emit;
//! use norte_interpreter::build_spec_from_prompt;
//! use norte_core::Stack;
//!
//! let spec = build_spec_from_prompt("CRUD de produtos", Stack::React);
//! let project = emit(&spec).unwrap();
//! assert!(project.file("src/App.tsx").is_some());
//! ```

pub mod directive;
pub mod error;
pub mod generators;
pub mod templates;
pub mod theme;

pub use directive::{
    column_bindings, compile_rules, seed_rows, widget_for, SampleRow, ValidationRule,
    WidgetDirective,
};
pub use error::{EmitError, Result};
pub use generators::{
    emit, emitter_for, project_slug, AngularEmitter, BootstrapEmitter, Emitter, GeneratedProject,
    ReactEmitter, VueEmitter,
};
pub use templates::TemplateEngine;
pub use theme::{palette, stylesheet, Palette};
