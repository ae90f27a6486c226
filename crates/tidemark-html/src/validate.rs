//! The validation driver.
//!
//! Walks a [`DomTree`] in document order and runs each element's
//! [`ElementValidator`] against it.

use tidemark_common::warning::warn_once;
use tidemark_dom::{DomTree, ElementData, NodeId};

use crate::check::CheckContext;
use crate::diagnostics::DiagnosticSink;
use crate::dictionary::Dictionary;
use crate::hooks::{IdRepair, NameToId};
use crate::state::DocumentConformanceState;
use crate::tags::ElementValidator;

/// Runs attribute conformance checks over whole documents or single
/// elements.
///
/// # Example
///
/// ```
/// use tidemark_dom::{AttributeOccurrence, DomTree, ElementData, NodeId};
/// use tidemark_html::{ConformanceOptions, Diagnostic, Dictionary, DocumentConformanceState, Validator};
///
/// let mut tree = DomTree::new();
/// let img = ElementData::with_attrs("img", vec![AttributeOccurrence::new("src", "a.png")]);
/// let _ = tree.append_element(NodeId::ROOT, img)?;
///
/// let mut state = DocumentConformanceState::new(ConformanceOptions::default());
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// Validator::new(Dictionary::shared()).validate_tree(&mut tree, &mut state, &mut diagnostics);
/// assert_eq!(diagnostics.len(), 1); // missing alt
/// # Ok::<(), tidemark_dom::TreeError>(())
/// ```
pub struct Validator<'a> {
    dictionary: &'a Dictionary,
    id_repair: &'a dyn IdRepair,
}

impl<'a> Validator<'a> {
    /// A validator over `dictionary` with the default [`NameToId`] id repair.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            id_repair: &NameToId,
        }
    }

    /// Replace the id repair hook used for `a` and `map`.
    #[must_use]
    pub fn with_id_repair(mut self, id_repair: &'a dyn IdRepair) -> Self {
        self.id_repair = id_repair;
        self
    }

    /// The dictionary this validator resolves names against.
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Validate every element of `tree` in document order.
    ///
    /// Attribute lists may be repaired in place. Diagnostics go to `sink`;
    /// version narrowing and defects accumulate in `state`.
    pub fn validate_tree(
        &self,
        tree: &mut DomTree,
        state: &mut DocumentConformanceState,
        sink: &mut dyn DiagnosticSink,
    ) {
        for id in tree.elements_in_document_order(NodeId::ROOT) {
            if let Some(element) = tree.as_element_mut(id) {
                self.validate_element(element, state, sink);
            }
        }
    }

    /// Validate one element.
    pub fn validate_element(
        &self,
        element: &mut ElementData,
        state: &mut DocumentConformanceState,
        sink: &mut dyn DiagnosticSink,
    ) {
        let descriptor = self.dictionary.tags.find(&element.tag_name);
        let checker = match descriptor {
            Some(descriptor) => descriptor.checker,
            None => {
                warn_once(
                    "Validator",
                    &format!("unknown element <{}>, checking attributes only", element.tag_name),
                );
                ElementValidator::Default
            }
        };

        let mut cx = CheckContext {
            dictionary: self.dictionary,
            state,
            sink,
            id_repair: self.id_repair,
        };
        checker.check(&mut cx, element, descriptor);
    }
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}
