//! Human-readable rendering of binary nodes, for logs and debugging only.

use std::fmt::{self, Write as _};
use wacore_binary::node::{Node, NodeContent};

/// Renders a node as a tab-indented pseudo-XML tree. Byte content is shown as hex.
pub struct DisplayableNode<'a>(pub &'a Node);

impl fmt::Display for DisplayableNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

/// Renders bare content (bytes, text or a node list) the way it would appear
/// inside a node at the top level.
pub fn render_content(content: &NodeContent) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    write_content(&mut out, content, 0).ok();
    out
}

fn has_renderable_content(content: Option<&NodeContent>) -> bool {
    match content {
        Some(NodeContent::Nodes(nodes)) => !nodes.is_empty(),
        Some(NodeContent::Bytes(bytes)) => !bytes.is_empty(),
        Some(NodeContent::String(s)) => !s.is_empty(),
        None => false,
    }
}

fn write_indent(out: &mut impl fmt::Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_char('\t')?;
    }
    Ok(())
}

fn write_node(out: &mut impl fmt::Write, node: &Node, depth: usize) -> fmt::Result {
    write_indent(out, depth)?;
    write!(out, "<{}", node.tag)?;
    for (key, value) in node.attrs.iter() {
        write!(out, " {key}='{value}'")?;
    }

    match &node.content {
        Some(content) if has_renderable_content(Some(content)) => {
            out.write_str(">\n")?;
            write_content(out, content, depth + 1)?;
            out.write_char('\n')?;
            write_indent(out, depth)?;
            write!(out, "</{}>", node.tag)
        }
        _ => out.write_str("/>"),
    }
}

fn write_content(out: &mut impl fmt::Write, content: &NodeContent, depth: usize) -> fmt::Result {
    match content {
        NodeContent::Nodes(nodes) => {
            for (i, child) in nodes.iter().enumerate() {
                if i > 0 {
                    out.write_char('\n')?;
                }
                write_node(out, child, depth)?;
            }
            Ok(())
        }
        NodeContent::Bytes(bytes) => {
            write_indent(out, depth)?;
            out.write_str(&hex::encode(bytes))
        }
        NodeContent::String(s) => {
            write_indent(out, depth)?;
            out.write_str(s)
        }
    }
}
