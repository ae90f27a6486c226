//! Reading documents and option files.

use std::fs;
use std::path::{Path, PathBuf};

use tidemark_dom::{DomTree, SerializedNode};
use tidemark_html::ConformanceOptions;

/// Why an input could not be turned into something the validator accepts.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The text is not the expected JSON shape.
    #[error("{origin} is not valid {what} JSON: {source}")]
    Json {
        /// Where the text came from.
        origin: String,
        /// What was expected.
        what: &'static str,
        /// Parser failure.
        source: serde_json::Error,
    },
    /// Neither a file nor `--json` was given.
    #[error("no input: pass a FILE or --json '<tree>'")]
    NoInput,
}

/// A document ready for validation.
#[derive(Debug)]
pub struct LoadedTree {
    /// The tree.
    pub tree: DomTree,
    /// Display name of the input.
    pub origin: String,
}

/// Parse a serialized tree: a JSON array of top-level nodes, or a single
/// node object.
pub fn parse_tree(json: &str, origin: &str) -> Result<LoadedTree, LoadError> {
    let nodes = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<SerializedNode>>(json)
    } else {
        serde_json::from_str::<SerializedNode>(json).map(|node| vec![node])
    };
    let nodes = nodes.map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        what: "document tree",
        source,
    })?;
    Ok(LoadedTree {
        tree: DomTree::from_serialized(&nodes),
        origin: origin.to_string(),
    })
}

/// Load a tree from `path`, or from the inline `json` when given.
pub fn load_tree(path: Option<&Path>, json: Option<&str>) -> Result<LoadedTree, LoadError> {
    if let Some(json) = json {
        return parse_tree(json, "--json");
    }
    let path = path.ok_or(LoadError::NoInput)?;
    let text = read(path)?;
    parse_tree(&text, &path.display().to_string())
}

/// Load options from a JSON file. Missing fields keep their defaults.
pub fn load_options(path: &Path) -> Result<ConformanceOptions, LoadError> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        origin: path.display().to_string(),
        what: "options",
        source,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_and_single_node() {
        let array = r#"[{"type": "element", "tag": "p"}, {"type": "text", "content": "x"}]"#;
        let loaded = parse_tree(array, "test").map(|l| l.tree.children(tidemark_dom::NodeId::ROOT).len());
        assert_eq!(loaded.ok(), Some(2));

        let single = r#"{"type": "element", "tag": "html", "children": [{"type": "element", "tag": "body"}]}"#;
        let loaded = parse_tree(single, "test").map(|l| l.tree.document_element());
        assert!(matches!(loaded, Ok(Some(_))));
    }

    #[test]
    fn test_bad_json_names_origin() {
        let err = parse_tree("{", "page.json").err().map(|e| e.to_string());
        assert!(err.is_some_and(|msg| msg.starts_with("page.json is not valid document tree JSON")));
    }

    #[test]
    fn test_missing_input() {
        assert!(matches!(load_tree(None, None), Err(LoadError::NoInput)));
    }

    #[test]
    fn test_partial_options() {
        let options: ConformanceOptions =
            serde_json::from_str(r#"{"xml_output": true, "doctype": "html32"}"#).unwrap_or_default();
        assert!(options.xml_output);
        assert!(!options.xml_tags);
        assert_eq!(options.doctype, Some(tidemark_html::HtmlVersion::Html32));
    }
}
