//! Host-supplied repair hooks.

use tidemark_dom::ElementData;

use crate::attrs::AttrId;
use crate::check::{CheckContext, OwnerTag};
use crate::diagnostics::DiagnosticKind;

/// Assigns or normalizes the `id` of anchors and image maps.
///
/// Called by the `a` and `map` validators after their attributes have been
/// checked. Implementations may append occurrences, set values and raise
/// diagnostics, but must not remove occurrences.
pub trait IdRepair {
    /// Repair the id of `element`.
    fn repair_id(&self, cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, element: &mut ElementData);
}

/// Default id repair: keeps `id` and `name` in agreement.
///
/// - `name` without `id` gets a copied `id` when XHTML output is requested,
///   since XHTML identifies fragments by `id`. The inserted `id` narrows
///   the version mask like a parsed one would.
/// - `id` and `name` with different values get a `BadAttributeValue` on the
///   `id` occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameToId;

impl IdRepair for NameToId {
    fn repair_id(&self, cx: &mut CheckContext<'_>, owner: OwnerTag<'_>, element: &mut ElementData) {
        let Some(name) = element.get_attribute_node("name").and_then(|a| a.value.clone()) else {
            return;
        };
        match element.get_attribute_node("id") {
            None => {
                if cx.state.options().xml_output {
                    element.set_attribute("id", &name);
                    cx.state.narrow(cx.dictionary.attributes.get(AttrId::Id).versions);
                }
            }
            Some(id) if id.value.as_deref() != Some(name.as_str()) => {
                cx.report(DiagnosticKind::BadAttributeValue, owner, id);
            }
            Some(_) => {}
        }
    }
}

/// Id repair that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdRepair;

impl IdRepair for NoIdRepair {
    fn repair_id(&self, _: &mut CheckContext<'_>, _: OwnerTag<'_>, _: &mut ElementData) {}
}
