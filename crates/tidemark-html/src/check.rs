//! Per-attribute dispatch and duplicate detection.
//!
//! [`CheckContext`] bundles what every checker needs: the shared dictionary,
//! the document's conformance state, the diagnostic sink and the host's id
//! repair hook. Element validators drive it one attribute at a time.

use std::collections::HashSet;

use tidemark_dom::AttributeOccurrence;

use crate::attrs::{AttrId, AttributeDescriptor};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::dictionary::Dictionary;
use crate::hooks::IdRepair;
use crate::model::ContentModel;
use crate::state::DocumentConformanceState;
use crate::tags::{ElementDescriptor, TagId};
use crate::version::VersionMask;

/// The element an attribute belongs to, as seen by checkers.
#[derive(Debug, Clone, Copy)]
pub struct OwnerTag<'e> {
    /// Tag name as written.
    pub name: &'e str,
    /// Dictionary entry, `None` for elements the dictionary does not know.
    pub descriptor: Option<&'e ElementDescriptor>,
}

impl<'e> OwnerTag<'e> {
    /// Bind a tag name to its (possibly absent) descriptor.
    #[must_use]
    pub const fn new(name: &'e str, descriptor: Option<&'e ElementDescriptor>) -> Self {
        Self { name, descriptor }
    }

    /// Identity of the element, if known.
    #[must_use]
    pub fn tag(self) -> Option<TagId> {
        self.descriptor.map(|d| d.id)
    }

    /// Whether the element is `tag`.
    #[must_use]
    pub fn is(self, tag: TagId) -> bool {
        self.tag() == Some(tag)
    }

    /// Whether the element's content model has `flag`.
    #[must_use]
    pub fn has_model(self, flag: ContentModel) -> bool {
        self.descriptor.is_some_and(|d| d.model.has_model(flag))
    }

    /// Image-like elements treat `align` as positional.
    #[must_use]
    pub fn is_image_like(self) -> bool {
        self.has_model(ContentModel::IMG)
    }
}

/// Attributes a pass over one element resolved to known descriptors.
#[derive(Debug, Default)]
pub struct SeenAttributes(HashSet<AttrId>);

impl SeenAttributes {
    /// Whether an occurrence of `id` was seen.
    #[must_use]
    pub fn has(&self, id: AttrId) -> bool {
        self.0.contains(&id)
    }

    fn record(&mut self, id: AttrId) {
        let _ = self.0.insert(id);
    }
}

/// Everything a checker may read or mutate besides the element itself.
pub struct CheckContext<'a> {
    /// Shared descriptor tables.
    pub dictionary: &'a Dictionary,
    /// The document's running conformance state.
    pub state: &'a mut DocumentConformanceState,
    /// Where diagnostics go.
    pub sink: &'a mut dyn DiagnosticSink,
    /// Host hook that assigns or normalizes element ids.
    pub id_repair: &'a dyn IdRepair,
}

impl<'a> CheckContext<'a> {
    /// Report `kind` against a concrete occurrence.
    pub fn report(&mut self, kind: DiagnosticKind, owner: OwnerTag<'_>, attr: &AttributeOccurrence) {
        self.sink
            .report(Diagnostic::for_occurrence(kind, owner.name, attr));
    }

    /// Report that the required attribute `name` is absent.
    pub fn report_missing(&mut self, owner: OwnerTag<'_>, name: &str) {
        self.sink.report(Diagnostic::for_name(
            DiagnosticKind::MissingAttribute,
            owner.name,
            name,
        ));
    }

    /// Report `kind` against the element as a whole.
    pub fn report_element(&mut self, kind: DiagnosticKind, owner: OwnerTag<'_>) {
        self.sink.report(Diagnostic::new(kind, owner.name));
    }

    /// Check the occurrence at `index`: duplicates first (unless it carries a
    /// template fragment), then name, version and value.
    ///
    /// Returns the resolved descriptor so callers can test which attribute
    /// it was.
    pub fn check_attribute(
        &mut self,
        owner: OwnerTag<'_>,
        attrs: &mut [AttributeOccurrence],
        index: usize,
    ) -> Option<&'a AttributeDescriptor> {
        if !attrs[index].has_fragment() {
            self.check_uniqueness(owner, attrs, index);
        }
        self.check_attribute_value(owner, &mut attrs[index])
    }

    /// Name, version and value checks for one occurrence, without the
    /// duplicate scan.
    pub fn check_attribute_value(
        &mut self,
        owner: OwnerTag<'_>,
        attr: &mut AttributeOccurrence,
    ) -> Option<&'a AttributeDescriptor> {
        let dictionary = self.dictionary;
        let Some(descriptor) = dictionary.attributes.find(&attr.name) else {
            let excused = self.state.options().xml_tags
                || owner.descriptor.is_none()
                || attr.has_fragment()
                || owner.has_model(ContentModel::PROPRIETARY);
            if !excused {
                self.report(DiagnosticKind::UnknownAttribute, owner, attr);
            }
            return None;
        };

        if descriptor.id == AttrId::Title && (owner.is(TagId::A) || owner.is(TagId::Link)) {
            // `title` on links has been legal since HTML 2.0.
            self.state.narrow(VersionMask::ALL);
        } else if descriptor.versions.intersects(VersionMask::XML) {
            if !self.state.options().xml_mode() {
                self.report(DiagnosticKind::XmlAttributeMisuse, owner, attr);
            }
        } else {
            self.state.narrow(descriptor.versions);
        }

        if let Some(checker) = descriptor.checker {
            checker.check(self, owner, attr);
        }
        Some(descriptor)
    }

    /// Report the occurrence at `index` once if a later occurrence on the
    /// same element has the same name. Occurrences carrying a template
    /// fragment are not counted. Nothing is removed.
    pub fn check_uniqueness(
        &mut self,
        owner: OwnerTag<'_>,
        attrs: &[AttributeOccurrence],
        index: usize,
    ) {
        let Some((attr, rest)) = attrs[index..].split_first() else {
            return;
        };
        let duplicate = rest
            .iter()
            .find(|other| !other.has_fragment() && other.is_named(&attr.name));
        if let Some(duplicate) = duplicate {
            self.report(DiagnosticKind::RepeatedAttribute, owner, duplicate);
        }
    }

    /// Run [`CheckContext::check_uniqueness`] for every occurrence on the
    /// element.
    pub fn check_all_unique(&mut self, owner: OwnerTag<'_>, attrs: &[AttributeOccurrence]) {
        for (index, attr) in attrs.iter().enumerate() {
            if !attr.has_fragment() {
                self.check_uniqueness(owner, attrs, index);
            }
        }
    }

    /// Run [`CheckContext::check_attribute_value`] over every occurrence,
    /// except those resolving to `skip`, and collect what was seen.
    pub fn check_attributes(
        &mut self,
        owner: OwnerTag<'_>,
        attrs: &mut [AttributeOccurrence],
        skip: Option<AttrId>,
    ) -> SeenAttributes {
        let dictionary = self.dictionary;
        let mut seen = SeenAttributes::default();
        for attr in attrs.iter_mut() {
            if let Some(skip) = skip
                && dictionary
                    .attributes
                    .find(&attr.name)
                    .is_some_and(|d| d.id == skip)
            {
                seen.record(skip);
                continue;
            }
            if let Some(descriptor) = self.check_attribute_value(owner, attr) {
                seen.record(descriptor.id);
            }
        }
        seen
    }
}
