use crate::node::{Attrs, Node, NodeContent};

/// Fluent constructor for [`Node`], mostly used to assemble stanzas in tests.
///
/// Setting content twice keeps the last value.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    tag: String,
    attrs: Attrs,
    content: Option<NodeContent>,
}

impl NodeBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn attrs<K, V>(self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        attrs
            .into_iter()
            .fold(self, |builder, (key, value)| builder.attr(key, value))
    }

    pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
        self.content(NodeContent::Nodes(children.into_iter().collect()))
    }

    pub fn bytes(self, bytes: impl Into<Vec<u8>>) -> Self {
        self.content(NodeContent::Bytes(bytes.into()))
    }

    pub fn string_content(self, s: impl Into<String>) -> Self {
        self.content(NodeContent::String(s.into()))
    }

    fn content(mut self, content: NodeContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn build(self) -> Node {
        Node {
            tag: self.tag,
            attrs: self.attrs,
            content: self.content,
        }
    }
}
