//! Diagnostics raised while validating attributes.
//!
//! Nothing the validator finds in a document is a Rust error. Every anomaly
//! becomes a [`Diagnostic`] handed to a [`DiagnosticSink`], and the pass
//! always runs to completion.

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};
use tidemark_dom::AttributeOccurrence;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Summary notes.
    Info,
    /// Defects that are repaired, tolerated, or vendor-specific.
    Warning,
    /// Values that no version of HTML accepts.
    Error,
}

/// The fixed diagnostic taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
pub enum DiagnosticKind {
    /// Attribute present with no value where one is required.
    MissingAttributeValue,
    /// A required attribute is absent.
    MissingAttribute,
    /// Value outside the legal set; left unchanged.
    BadAttributeValue,
    /// Value only legal in vendor-proprietary HTML.
    ProprietaryAttributeValue,
    /// Name not in the attribute table.
    UnknownAttribute,
    /// Name repeated on one element.
    RepeatedAttribute,
    /// XML-only attribute used outside XML mode.
    XmlAttributeMisuse,
    /// `ismap` without `usemap`.
    MissingImagemap,
    /// A table without `summary` was seen.
    MissingSummary,
    /// An image without `alt` was seen.
    MissingImageAlt,
    /// An image-map area without `alt` was seen.
    MissingLinkAlt,
}

impl DiagnosticKind {
    /// Severity class of the kind.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::BadAttributeValue | Self::MissingAttributeValue | Self::XmlAttributeMisuse => {
                Severity::Error
            }
            Self::MissingAttribute
            | Self::ProprietaryAttributeValue
            | Self::UnknownAttribute
            | Self::RepeatedAttribute
            | Self::MissingImagemap => Severity::Warning,
            Self::MissingSummary | Self::MissingImageAlt | Self::MissingLinkAlt => Severity::Info,
        }
    }
}

/// One reported defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity class, derived from `kind`.
    pub severity: Severity,
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Tag name of the element involved.
    pub element: String,
    /// Attribute name, when one is involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Offending value, when one is involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Diagnostic {
    /// A diagnostic about an element as a whole.
    #[must_use]
    pub fn new(kind: DiagnosticKind, element: &str) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            element: element.to_string(),
            attribute: None,
            value: None,
        }
    }

    /// A diagnostic about a named attribute with no occurrence to point at
    /// (e.g. a required attribute that is absent).
    #[must_use]
    pub fn for_name(kind: DiagnosticKind, element: &str, attribute: &str) -> Self {
        Self {
            attribute: Some(attribute.to_string()),
            ..Self::new(kind, element)
        }
    }

    /// A diagnostic about a concrete occurrence.
    #[must_use]
    pub fn for_occurrence(kind: DiagnosticKind, element: &str, attr: &AttributeOccurrence) -> Self {
        Self {
            attribute: Some(attr.name.clone()),
            value: attr.value.clone(),
            ..Self::new(kind, element)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element = &self.element;
        let attribute = self.attribute.as_deref().unwrap_or("");
        let value = self.value.as_deref().unwrap_or("");
        match self.kind {
            DiagnosticKind::MissingAttributeValue => {
                write!(f, "<{element}> attribute \"{attribute}\" lacks value")
            }
            DiagnosticKind::MissingAttribute => {
                write!(f, "<{element}> lacks \"{attribute}\" attribute")
            }
            DiagnosticKind::BadAttributeValue => {
                write!(
                    f,
                    "<{element}> attribute \"{attribute}\" has invalid value \"{value}\""
                )
            }
            DiagnosticKind::ProprietaryAttributeValue if self.value.is_some() => {
                write!(
                    f,
                    "<{element}> proprietary attribute value \"{attribute}\"=\"{value}\""
                )
            }
            DiagnosticKind::ProprietaryAttributeValue => {
                write!(f, "<{element}> proprietary attribute \"{attribute}\"")
            }
            DiagnosticKind::UnknownAttribute => {
                write!(f, "<{element}> unknown attribute \"{attribute}\"")
            }
            DiagnosticKind::RepeatedAttribute => {
                write!(f, "<{element}> repeated attribute \"{attribute}\"")
            }
            DiagnosticKind::XmlAttributeMisuse => {
                write!(
                    f,
                    "<{element}> has XML attribute \"{attribute}\" outside XML mode"
                )
            }
            DiagnosticKind::MissingImagemap => {
                write!(f, "<{element}> should use client-side image map")
            }
            DiagnosticKind::MissingSummary => f.write_str(
                "The table summary attribute should be used to describe the table \
                 structure for non-visual browsers.",
            ),
            DiagnosticKind::MissingImageAlt => f.write_str(
                "The alt attribute should be used to give a short description of an \
                 image; longer descriptions should be given with the longdesc attribute.",
            ),
            DiagnosticKind::MissingLinkAlt => f.write_str(
                "The alt attribute should be used to give a short description of each \
                 area of a client-side image map.",
            ),
        }
    }
}

/// Receiver for diagnostics raised during a pass.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
