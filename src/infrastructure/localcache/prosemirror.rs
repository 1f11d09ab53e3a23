//! Converts ProseMirror JSON documents to plain text.

use serde::Deserialize;
use serde_json::Value;

/// A node in ProseMirror's JSON document model
#[derive(Debug, Default, Deserialize)]
struct Node {
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    content: Vec<Node>,
}

/// Recursively flattens a ProseMirror document into plain text.
///
/// Notes content is cosmetic; a null, empty, or malformed tree degrades to
/// an empty string rather than failing the caller.
pub fn plain_text(raw: &Value) -> String {
    if raw.is_null() {
        return String::new();
    }

    let doc: Node = match serde_json::from_value(raw.clone()) {
        Ok(doc) => doc,
        Err(_) => return String::new(),
    };

    let mut out = String::new();
    render_node(&mut out, &doc, 0);
    out.trim().to_string()
}

fn render_node(out: &mut String, node: &Node, list_depth: usize) {
    match node.node_type.as_str() {
        "text" => out.push_str(&node.text),

        "hardBreak" => out.push('\n'),

        "paragraph" | "heading" => {
            render_children(out, node, list_depth);
            out.push('\n');
        }

        // Ordering is not preserved visually; both list kinds render as "-"
        "bulletList" | "orderedList" => render_children(out, node, list_depth + 1),

        "listItem" => {
            out.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
            out.push_str("- ");
            render_children(out, node, list_depth);
        }

        // Unknown nodes: recurse into children silently.
        _ => render_children(out, node, list_depth),
    }
}

fn render_children(out: &mut String, node: &Node, list_depth: usize) {
    for child in &node.content {
        render_node(out, child, list_depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_paragraph() {
        let doc = json!({"type":"doc","content":[
            {"type":"paragraph","content":[{"type":"text","text":"Hello world"}]}
        ]});
        assert_eq!(plain_text(&doc), "Hello world");
    }

    #[test]
    fn test_heading_and_paragraph() {
        let doc = json!({"type":"doc","content":[
            {"type":"heading","content":[{"type":"text","text":"Title"}]},
            {"type":"paragraph","content":[{"type":"text","text":"Body text"}]}
        ]});
        assert_eq!(plain_text(&doc), "Title\nBody text");
    }

    #[test]
    fn test_bullet_list() {
        let doc = json!({"type":"doc","content":[
            {"type":"bulletList","content":[
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"First"}]}]},
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"Second"}]}]}
            ]}
        ]});
        assert_eq!(plain_text(&doc), "- First\n- Second");
    }

    #[test]
    fn test_hard_break() {
        let doc = json!({"type":"doc","content":[
            {"type":"paragraph","content":[
                {"type":"text","text":"Line 1"},
                {"type":"hardBreak"},
                {"type":"text","text":"Line 2"}
            ]}
        ]});
        assert_eq!(plain_text(&doc), "Line 1\nLine 2");
    }

    #[test]
    fn test_nested_list_indents() {
        let doc = json!({"type":"doc","content":[
            {"type":"bulletList","content":[
                {"type":"listItem","content":[
                    {"type":"paragraph","content":[{"type":"text","text":"Outer"}]},
                    {"type":"bulletList","content":[
                        {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"Inner"}]}]}
                    ]}
                ]}
            ]}
        ]});
        assert_eq!(plain_text(&doc), "- Outer\n  - Inner");
    }

    #[test]
    fn test_ordered_list_renders_as_bullets() {
        let doc = json!({"type":"doc","content":[
            {"type":"orderedList","content":[
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"Step 1"}]}]},
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"Step 2"}]}]}
            ]}
        ]});
        assert_eq!(plain_text(&doc), "- Step 1\n- Step 2");
    }

    #[test]
    fn test_unknown_node_recurses_into_children() {
        let doc = json!({"type":"doc","content":[
            {"type":"customBlock","content":[
                {"type":"paragraph","content":[{"type":"text","text":"Nested in unknown"}]}
            ]}
        ]});
        assert_eq!(plain_text(&doc), "Nested in unknown");
    }

    #[test]
    fn test_multiple_paragraphs() {
        let doc = json!({"type":"doc","content":[
            {"type":"paragraph","content":[{"type":"text","text":"Para 1"}]},
            {"type":"paragraph","content":[{"type":"text","text":"Para 2"}]}
        ]});
        assert_eq!(plain_text(&doc), "Para 1\nPara 2");
    }

    #[test]
    fn test_empty_doc() {
        let doc = json!({"type":"doc","content":[]});
        assert_eq!(plain_text(&doc), "");
    }

    #[test]
    fn test_null_input() {
        assert_eq!(plain_text(&Value::Null), "");
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(plain_text(&json!("not an object")), "");
        assert_eq!(plain_text(&json!(42)), "");
    }
}
