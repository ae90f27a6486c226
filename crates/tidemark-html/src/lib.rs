//! HTML attribute conformance checking for Tidemark.
//!
//! # Scope
//!
//! This crate implements:
//! - **Version algebra** ([`VersionMask`], [`HtmlVersion`])
//!   - Named sets of HTML 2.0, 3.2, 4.01, XHTML and vendor dialects
//!   - Narrowing by intersection only
//!
//! - **Descriptor tables** ([`Dictionary`])
//!   - One [`AttributeDescriptor`] per attribute name, one
//!     [`ElementDescriptor`] per element name
//!   - Case-insensitive lookup, identity by [`AttrId`] / [`TagId`]
//!
//! - **Validation** ([`Validator`])
//!   - Value checkers ([`ValueValidator`]) and element checkers
//!     ([`ElementValidator`])
//!   - Repeated attribute detection
//!   - In-place repair: URL backslashes, inferred `type`, fallback `alt`,
//!     XHTML attribute values
//!
//! - **Reporting** ([`Diagnostic`], [`ConformanceReport`])
//!
//! # Not Implemented
//!
//! - Tokenizing and tree building (input is an existing [`tidemark_dom::DomTree`])
//! - Content-model and nesting checks
//! - Pretty printing (the `literal` / `nowrap` hints are carried only)

/// Attribute descriptors and value checkers.
pub mod attrs;
/// Per-attribute dispatch shared by all checkers.
pub mod check;
/// Diagnostic taxonomy and sinks.
pub mod diagnostics;
/// Combined descriptor tables.
pub mod dictionary;
/// Host repair hooks.
pub mod hooks;
/// Content model and accessibility flag sets.
pub mod model;
/// End-of-run report.
pub mod report;
/// Options and per-document state.
pub mod state;
/// Element descriptors and element checkers.
pub mod tags;
/// Tree-walking driver.
pub mod validate;
/// HTML version sets.
pub mod version;

pub use attrs::{AttrId, AttributeDescriptor, AttributeTable, ValueValidator};
pub use check::{CheckContext, OwnerTag, SeenAttributes};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
pub use dictionary::Dictionary;
pub use hooks::{IdRepair, NameToId, NoIdRepair};
pub use model::{AccessibilityDefects, ContentModel};
pub use report::ConformanceReport;
pub use state::{ConformanceOptions, DocumentConformanceState};
pub use tags::{ContentParser, ElementDescriptor, ElementValidator, TagId, TagTable};
pub use validate::Validator;
pub use version::{HtmlVersion, VersionMask};
