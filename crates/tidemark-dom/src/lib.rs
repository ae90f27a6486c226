//! Document tree for the Tidemark conformance checker.
//!
//! This crate provides an arena-based tree of elements, each owning an
//! ordered list of [`AttributeOccurrence`]s. It is the hand-off point between
//! whatever builds the tree (a tokenizer, a JSON loader) and the validator in
//! `tidemark-html`.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues.

mod attribute;
mod serialize;

pub use attribute::{AttributeOccurrence, ElementData, EmbeddedFragment, FragmentLanguage};
pub use serialize::SerializedNode;

use thiserror::Error;

/// Errors from addressing nodes in a [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id does not name a node in this tree.
    #[error("node {0:?} does not exist")]
    NoSuchNode(NodeId),
    /// The node exists but is not an element.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}

/// A type-safe index into the tree.
///
/// `NodeId` provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// This node stores indices for parent/child/sibling relationships,
/// enabling O(1) traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,
    /// Parent node, `None` for the document and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Next sibling under the same parent.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling under the same parent.
    pub prev_sibling: Option<NodeId>,
}

/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The document node at [`NodeId::ROOT`].
    Document,
    /// An element with its attribute list.
    Element(ElementData),
    /// Character data.
    Text(String),
    /// A comment.
    Comment(String),
}

/// Arena-based document tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
                next_sibling: None,
                prev_sibling: None,
            }],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree, the document included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`, updating all relationships.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoSuchNode`] if either id is not in this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        self.link(parent, child);
        Ok(())
    }

    /// Allocate an element and append it under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoSuchNode`] if `parent` is not in this tree;
    /// nothing is allocated then.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        element: ElementData,
    ) -> Result<NodeId, TreeError> {
        self.check_exists(parent)?;
        let id = self.alloc(NodeType::Element(element));
        self.link(parent, id);
        Ok(id)
    }

    fn check_exists(&self, id: NodeId) -> Result<(), TreeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::NoSuchNode(id))
        }
    }

    /// Both ids must already be in the tree.
    fn link(&mut self, parent: NodeId, child: NodeId) {
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Like [`DomTree::as_element_mut`], distinguishing a missing node from a
    /// non-element one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NoSuchNode`] or [`TreeError::NotAnElement`].
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, TreeError> {
        match self.get_mut(id) {
            None => Err(TreeError::NoSuchNode(id)),
            Some(Node {
                node_type: NodeType::Element(data),
                ..
            }) => Ok(data),
            Some(_) => Err(TreeError::NotAnElement(id)),
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// The first element child of the document, usually `<html>`.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// All element nodes under `from` (inclusive) in document order, i.e. a
    /// pre-order depth-first walk.
    #[must_use]
    pub fn elements_in_document_order(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if self.as_element(id).is_some() {
                out.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
