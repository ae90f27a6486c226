//! End-of-run summary.

use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::AccessibilityDefects;
use crate::state::DocumentConformanceState;
use crate::version::{HtmlVersion, VersionMask};

/// Defect bit, summary kind, element the summary is attributed to.
/// `MISSING_IMAGE_MAP` has no row: the img check already warns about it.
const DEFECT_NOTES: [(AccessibilityDefects, DiagnosticKind, &str); 3] = [
    (AccessibilityDefects::MISSING_SUMMARY, DiagnosticKind::MissingSummary, "table"),
    (AccessibilityDefects::MISSING_IMAGE_ALT, DiagnosticKind::MissingImageAlt, "img"),
    (AccessibilityDefects::MISSING_LINK_ALT, DiagnosticKind::MissingLinkAlt, "area"),
];

/// Standard variants in the order a document is reported as conforming to.
const PREFERENCE: [HtmlVersion; 6] = [
    HtmlVersion::Html20,
    HtmlVersion::Html32,
    HtmlVersion::Html40Strict,
    HtmlVersion::Html40Loose,
    HtmlVersion::Frameset,
    HtmlVersion::Xhtml11,
];

/// What a finished validation pass concluded about a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    /// Final version mask.
    #[serde(skip)]
    pub versions: VersionMask,
    /// Accessibility defects seen during the pass.
    #[serde(skip)]
    pub defects: AccessibilityDefects,
    /// Whether `<html>` carried `xmlns`.
    pub is_xhtml: bool,
    /// Versions still in the final mask, in bit order.
    pub claimable: Vec<HtmlVersion>,
}

impl ConformanceReport {
    /// Summarize `state` after the last element was validated.
    #[must_use]
    pub fn from_state(state: &DocumentConformanceState) -> Self {
        let versions = state.versions();
        Self {
            versions,
            defects: state.defects(),
            is_xhtml: state.is_xhtml(),
            claimable: versions.versions().collect(),
        }
    }

    /// The oldest standard variant the document still conforms to, if any.
    #[must_use]
    pub fn likely_version(&self) -> Option<HtmlVersion> {
        if self.is_xhtml && self.versions.permits(HtmlVersion::Xhtml11) {
            return Some(HtmlVersion::Xhtml11);
        }
        PREFERENCE
            .into_iter()
            .find(|&version| self.versions.permits(version))
    }

    /// Human-readable names of [`ConformanceReport::claimable`].
    #[must_use]
    pub fn claimable_names(&self) -> Vec<String> {
        self.claimable.iter().map(ToString::to_string).collect()
    }

    /// One summary diagnostic per recorded defect the element checks did
    /// not already report.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        DEFECT_NOTES
            .iter()
            .filter(|(defect, _, _)| self.defects.contains(*defect))
            .map(|&(_, kind, element)| Diagnostic::new(kind, element))
            .collect()
    }
}
