//! Plain serde form of a tree, used to hand documents across process
//! boundaries as JSON.

use serde::{Deserialize, Serialize};

use crate::{AttributeOccurrence, DomTree, ElementData, NodeId, NodeType};

/// A node and its subtree in owned, serializable form.
///
/// ```json
/// {"type": "element", "tag": "img", "attributes": [{"name": "src", "value": "a.png"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SerializedNode {
    /// An element with its ordered attributes and children.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes in source order.
        #[serde(default)]
        attributes: Vec<AttributeOccurrence>,
        /// Child nodes in document order.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<SerializedNode>,
    },
    /// Character data.
    Text {
        /// The text.
        content: String,
    },
    /// A comment.
    Comment {
        /// The comment body.
        content: String,
    },
}

impl DomTree {
    /// Build a tree whose document node has `nodes` as its children.
    #[must_use]
    pub fn from_serialized(nodes: &[SerializedNode]) -> Self {
        let mut tree = Self::new();
        for node in nodes {
            tree.insert_serialized(NodeId::ROOT, node);
        }
        tree
    }

    fn insert_serialized(&mut self, parent: NodeId, node: &SerializedNode) {
        let node_type = match node {
            SerializedNode::Element {
                tag, attributes, ..
            } => NodeType::Element(ElementData::with_attrs(tag.clone(), attributes.clone())),
            SerializedNode::Text { content } => NodeType::Text(content.clone()),
            SerializedNode::Comment { content } => NodeType::Comment(content.clone()),
        };
        let id = self.alloc(node_type);
        self.link(parent, id);
        if let SerializedNode::Element { children, .. } = node {
            for child in children {
                self.insert_serialized(id, child);
            }
        }
    }

    /// The document's children in serializable form.
    #[must_use]
    pub fn to_serialized(&self) -> Vec<SerializedNode> {
        self.children(NodeId::ROOT)
            .iter()
            .filter_map(|&id| self.serialize_node(id))
            .collect()
    }

    fn serialize_node(&self, id: NodeId) -> Option<SerializedNode> {
        let node = self.get(id)?;
        Some(match &node.node_type {
            NodeType::Document => return None,
            NodeType::Element(data) => SerializedNode::Element {
                tag: data.tag_name.clone(),
                attributes: data.attrs.clone(),
                children: node
                    .children
                    .iter()
                    .filter_map(|&child| self.serialize_node(child))
                    .collect(),
            },
            NodeType::Text(content) => SerializedNode::Text {
                content: content.clone(),
            },
            NodeType::Comment(content) => SerializedNode::Comment {
                content: content.clone(),
            },
        })
    }
}
