use crate::attrs::AttrParser;
use crate::error::{BinaryError, Result};
use crate::util::bytes_to_uint;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Stanza attributes in wire order. Keys are unique; inserting an existing key
/// replaces its value in place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attrs(pub Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(pos) => self.0[pos].1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Bytes(Vec<u8>),
    String(String),
    Nodes(Vec<Node>),
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub tag: String,
    pub attrs: Attrs,
    pub content: Option<NodeContent>,
}

impl Node {
    pub fn new(tag: &str, attrs: Attrs, content: Option<NodeContent>) -> Self {
        Self {
            tag: tag.to_string(),
            attrs,
            content,
        }
    }

    pub fn attrs(&self) -> AttrParser<'_> {
        AttrParser::new(self)
    }

    pub fn children(&self) -> Option<&[Node]> {
        match &self.content {
            Some(NodeContent::Nodes(nodes)) => Some(nodes),
            _ => None,
        }
    }

    /// All children in wire order, or an empty slice when the content is not a node list.
    pub fn get_all_children(&self) -> &[Node] {
        self.children().unwrap_or_default()
    }

    /// The raw content bytes, only when the content is byte-typed.
    pub fn content_bytes(&self) -> Option<&[u8]> {
        match &self.content {
            Some(NodeContent::Bytes(b)) => Some(b),
            _ => None,
        }
    }

    /// Byte content decoded as UTF-8 (lossy), or textual content as-is.
    pub fn content_string(&self) -> Option<Cow<'_, str>> {
        match &self.content {
            Some(NodeContent::Bytes(b)) => Some(String::from_utf8_lossy(b)),
            Some(NodeContent::String(s)) => Some(Cow::Borrowed(s)),
            _ => None,
        }
    }

    pub fn get_optional_child_by_tag<'a>(&'a self, tags: &[&str]) -> Option<&'a Node> {
        let mut current_node = self;
        for &tag in tags {
            current_node = current_node.get_optional_child(tag)?;
        }
        Some(current_node)
    }

    pub fn get_children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> {
        self.get_all_children().iter().filter(move |c| c.tag == tag)
    }

    pub fn get_optional_child(&self, tag: &str) -> Option<&Node> {
        self.get_all_children().iter().find(|node| node.tag == tag)
    }

    pub fn get_child_bytes(&self, tag: &str) -> Option<&[u8]> {
        self.get_optional_child(tag).and_then(Node::content_bytes)
    }

    pub fn get_child_string(&self, tag: &str) -> Option<Cow<'_, str>> {
        self.get_optional_child(tag).and_then(Node::content_string)
    }

    /// Reads the first `width` bytes of a child's content as a big-endian integer.
    pub fn get_child_uint(&self, tag: &str, width: usize) -> Option<u64> {
        self.get_child_bytes(tag)
            .and_then(|b| bytes_to_uint(b, width))
    }

    /// Fails with [`BinaryError::ErrorNode`] when an `<error>` child is present.
    pub fn assert_error_free(&self) -> Result<()> {
        let Some(err_node) = self.get_optional_child("error") else {
            return Ok(());
        };
        let mut attrs = err_node.attrs();
        let text = attrs
            .optional_string("text")
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown error")
            .to_string();
        let code = attrs
            .optional_string("code")
            .and_then(|c| c.parse::<u16>().ok());
        Err(BinaryError::ErrorNode { code, text })
    }

    /// Collapses children tagged `tag` into a `name`/`config_code` to
    /// `value`/`config_value` map. Later children overwrite earlier ones.
    pub fn reduce_to_dictionary(&self, tag: &str) -> IndexMap<String, String> {
        let first_present = |node: &Node, keys: [&str; 2]| {
            keys.into_iter()
                .find_map(|k| node.attrs.get(k).filter(|v| !v.is_empty()))
                .map(str::to_string)
        };

        let mut dict = IndexMap::new();
        for child in self.get_children_by_tag(tag) {
            let (Some(key), Some(value)) = (
                first_present(child, ["name", "config_code"]),
                first_present(child, ["value", "config_value"]),
            ) else {
                continue;
            };
            dict.insert(key, value);
        }
        dict
    }
}
