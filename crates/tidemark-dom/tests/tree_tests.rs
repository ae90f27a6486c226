//! Tests for tree construction, traversal order, and the JSON form.

use tidemark_dom::{
    AttributeOccurrence, DomTree, ElementData, NodeId, NodeType, SerializedNode, TreeError,
};

/// Helper to append an element with the given attributes under `parent`.
fn element(tree: &mut DomTree, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let attrs = attrs
        .iter()
        .map(|(name, value)| AttributeOccurrence::new(*name, *value))
        .collect();
    tree.append_element(parent, ElementData::with_attrs(tag, attrs))
        .expect("parent exists")
}

fn tag_names(tree: &DomTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| tree.as_element(id))
        .map(|e| e.tag_name.clone())
        .collect()
}

#[test]
fn test_new_tree_has_only_document() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
    assert_eq!(tree.document_element(), None);
}

#[test]
fn test_append_sets_sibling_links() {
    let mut tree = DomTree::new();
    let html = element(&mut tree, NodeId::ROOT, "html", &[]);
    let head = element(&mut tree, html, "head", &[]);
    let body = element(&mut tree, html, "body", &[]);

    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.next_sibling(head), Some(body));
    assert_eq!(tree.prev_sibling(body), Some(head));
    assert_eq!(tree.children(html), &[head, body]);
}

#[test]
fn test_document_order_is_preorder() {
    let mut tree = DomTree::new();
    let html = element(&mut tree, NodeId::ROOT, "html", &[]);
    let body = element(&mut tree, html, "body", &[]);
    let table = element(&mut tree, body, "table", &[]);
    let _caption = element(&mut tree, table, "caption", &[]);
    let text = tree.alloc(NodeType::Text("between".to_string()));
    tree.append_child(body, text).expect("both nodes exist");
    let _img = element(&mut tree, body, "img", &[("src", "a.png")]);

    let order = tree.elements_in_document_order(NodeId::ROOT);
    assert_eq!(
        tag_names(&tree, &order),
        vec!["html", "body", "table", "caption", "img"]
    );
}

#[test]
fn test_element_mut_errors() {
    let mut tree = DomTree::new();
    let text = tree.alloc(NodeType::Text("x".to_string()));
    tree.append_child(NodeId::ROOT, text).expect("both nodes exist");

    assert_eq!(
        tree.element_mut(NodeId::ROOT).err(),
        Some(TreeError::NotAnElement(NodeId::ROOT))
    );
    assert_eq!(
        tree.element_mut(NodeId(42)).err(),
        Some(TreeError::NoSuchNode(NodeId(42)))
    );
}

#[test]
fn test_append_to_missing_node_is_an_error() {
    let mut tree = DomTree::new();
    let text = tree.alloc(NodeType::Text("x".to_string()));

    assert_eq!(
        tree.append_child(NodeId(42), text),
        Err(TreeError::NoSuchNode(NodeId(42)))
    );
    assert_eq!(
        tree.append_child(NodeId::ROOT, NodeId(43)),
        Err(TreeError::NoSuchNode(NodeId(43)))
    );
    assert_eq!(
        tree.append_element(NodeId(42), ElementData::new("p")),
        Err(TreeError::NoSuchNode(NodeId(42)))
    );
    // Nothing was linked or allocated by the failed calls.
    assert!(tree.children(NodeId::ROOT).is_empty());
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_json_round_trip_keeps_attribute_order_and_bare_values() {
    let json = r#"[
        {"type": "element", "tag": "td", "attributes": [
            {"name": "nowrap"},
            {"name": "width", "value": "10", "delimiter": "'"},
            {"name": "width", "value": "20"}
        ], "children": [{"type": "text", "content": "cell"}]}
    ]"#;
    let nodes: Vec<SerializedNode> = serde_json::from_str(json).expect("valid json");
    let tree = DomTree::from_serialized(&nodes);

    let td = tree.document_element().expect("td element");
    let data = tree.as_element(td).expect("element data");
    assert_eq!(data.attrs.len(), 3);
    assert_eq!(data.attrs[0].value, None);
    assert_eq!(data.attrs[1].delimiter, '\'');
    assert_eq!(data.attrs[2].value.as_deref(), Some("20"));
    assert_eq!(tree.as_text(tree.children(td)[0]), Some("cell"));

    assert_eq!(tree.to_serialized(), nodes);
}
