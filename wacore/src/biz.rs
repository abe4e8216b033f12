//! Shape checks for templated interactive/business payloads carried next to
//! the ciphertext of a message stanza.

use wacore_binary::node::{Node, NodeContent};

/// True when any node in `content` looks like a native-flow, buttons, list,
/// HSM or business-bot payload. Non-list content never matches.
pub fn is_biz_content(content: Option<&NodeContent>) -> bool {
    match content {
        Some(NodeContent::Nodes(nodes)) => nodes.iter().any(is_biz_node),
        _ => false,
    }
}

fn is_biz_node(item: &Node) -> bool {
    let first_child = item.get_all_children().first();
    let first_grandchild = first_child.and_then(|c| c.get_all_children().first());

    first_grandchild.is_some_and(|n| n.tag == "native_flow")
        || first_child.is_some_and(|n| matches!(n.tag.as_str(), "interactive" | "buttons" | "list"))
        || matches!(item.tag.as_str(), "hsm" | "biz")
        || (item.tag == "bot" && item.attrs.get("biz_bot") == Some("1"))
}
