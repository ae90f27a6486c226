//! Per-document configuration and the conformance state threaded through a
//! validation pass.

use serde::{Deserialize, Serialize};

use crate::model::AccessibilityDefects;
use crate::version::{HtmlVersion, VersionMask};

/// Options consumed by the validators.
///
/// Deserializes from a partial JSON object; missing fields take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConformanceOptions {
    /// Rewrite `\` to `/` in URL-valued attributes.
    pub normalize_url_backslashes: bool,
    /// Input is treated as generic XML: unknown attributes are not reported.
    pub xml_tags: bool,
    /// Output will be XHTML: bare attributes may get values.
    pub xml_output: bool,
    /// Inserted as `alt` on images that have none.
    pub fallback_alt_text: Option<String>,
    /// Doctype the document declares (or is forced to). `None` means not
    /// known.
    pub doctype: Option<HtmlVersion>,
}

impl ConformanceOptions {
    /// Enable backslash normalization in URLs.
    #[must_use]
    pub const fn with_url_backslash_fix(mut self) -> Self {
        self.normalize_url_backslashes = true;
        self
    }

    /// Enable XML tags mode.
    #[must_use]
    pub const fn with_xml_tags(mut self) -> Self {
        self.xml_tags = true;
        self
    }

    /// Enable XML output mode.
    #[must_use]
    pub const fn with_xml_output(mut self) -> Self {
        self.xml_output = true;
        self
    }

    /// Set the fallback `alt` text.
    #[must_use]
    pub fn with_fallback_alt_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_alt_text = Some(text.into());
        self
    }

    /// Set the declared doctype.
    #[must_use]
    pub const fn with_doctype(mut self, doctype: HtmlVersion) -> Self {
        self.doctype = Some(doctype);
        self
    }

    /// Whether either XML mode is active.
    #[must_use]
    pub const fn xml_mode(&self) -> bool {
        self.xml_tags || self.xml_output
    }
}

/// State of one validation run over one document.
///
/// The version mask can only be narrowed and defects can only be added; the
/// fields are private so nothing else can widen them.
#[derive(Debug, Clone)]
pub struct DocumentConformanceState {
    versions: VersionMask,
    defects: AccessibilityDefects,
    is_xhtml: bool,
    options: ConformanceOptions,
}

impl DocumentConformanceState {
    /// Fresh state: every version still possible, no defects.
    #[must_use]
    pub const fn new(options: ConformanceOptions) -> Self {
        Self {
            versions: VersionMask::EVERYTHING,
            defects: AccessibilityDefects::NONE,
            is_xhtml: false,
            options,
        }
    }

    /// Versions the document can still claim.
    #[must_use]
    pub const fn versions(&self) -> VersionMask {
        self.versions
    }

    /// Intersect the running version mask with `allowed`.
    pub const fn narrow(&mut self, allowed: VersionMask) {
        self.versions = self.versions.narrowed(allowed);
    }

    /// Accessibility defects seen so far.
    #[must_use]
    pub const fn defects(&self) -> AccessibilityDefects {
        self.defects
    }

    /// Record an accessibility defect.
    pub const fn flag_defect(&mut self, defect: AccessibilityDefects) {
        self.defects = self.defects.with(defect);
    }

    /// Whether an `xmlns` on `<html>` marked the document as XHTML.
    #[must_use]
    pub const fn is_xhtml(&self) -> bool {
        self.is_xhtml
    }

    /// Mark the document as XHTML.
    pub const fn mark_xhtml(&mut self) {
        self.is_xhtml = true;
    }

    /// The run's options.
    #[must_use]
    pub const fn options(&self) -> &ConformanceOptions {
        &self.options
    }
}

impl Default for DocumentConformanceState {
    fn default() -> Self {
        Self::new(ConformanceOptions::default())
    }
}
