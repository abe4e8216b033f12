use std::str::FromStr;

use crate::error::{BinaryError, Result};
use crate::jid::Jid;
use crate::node::{Attrs, Node};

/// Typed, error-accumulating reader over a node's attributes.
///
/// Optional getters record parse failures in `errors` instead of failing
/// immediately; call [`AttrParser::finish`] to surface them.
pub struct AttrParser<'a> {
    pub attrs: &'a Attrs,
    pub errors: Vec<BinaryError>,
}

impl<'a> AttrParser<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            attrs: &node.attrs,
            errors: Vec::new(),
        }
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(&self) -> Result<()> {
        if self.ok() {
            Ok(())
        } else {
            Err(BinaryError::AttrList(self.errors.clone()))
        }
    }

    fn get_raw(&mut self, key: &str, require: bool) -> Option<&'a str> {
        let val = self.attrs.get(key);
        if require && val.is_none() {
            self.errors.push(BinaryError::MissingAttr(key.to_string()));
        }
        val
    }

    // --- String ---
    pub fn optional_string(&mut self, key: &str) -> Option<&'a str> {
        self.get_raw(key, false)
    }

    /// Get a required string attribute, returning an error if missing.
    pub fn required_string(&mut self, key: &str) -> Result<&'a str> {
        self.optional_string(key)
            .ok_or_else(|| BinaryError::MissingAttr(key.to_string()))
    }

    /// First of `keys` that is present with a non-empty value.
    pub fn first_present(&mut self, keys: &[&str]) -> Option<&'a str> {
        keys.iter()
            .find_map(|k| self.get_raw(k, false).filter(|v| !v.is_empty()))
    }

    // --- JID ---
    pub fn optional_jid(&mut self, key: &str) -> Option<Jid> {
        let raw = self.get_raw(key, false)?;
        self.parse_jid(raw)
    }

    /// Parses an already-selected raw value, recording failures like the other getters.
    pub fn parse_jid(&mut self, raw: &str) -> Option<Jid> {
        match Jid::from_str(raw) {
            Ok(jid) => Some(jid),
            Err(e) => {
                self.errors.push(BinaryError::from(e));
                None
            }
        }
    }

    pub fn jid(&mut self, key: &str) -> Jid {
        self.get_raw(key, true);
        self.optional_jid(key).unwrap_or_default()
    }

    // --- Boolean ---
    /// `true`/`1` are truthy, anything else present is false.
    pub fn optional_bool(&mut self, key: &str) -> bool {
        matches!(self.get_raw(key, false), Some("true" | "1"))
    }

    // --- Numbers ---
    pub fn optional_u64(&mut self, key: &str) -> Option<u64> {
        self.parse_number(key)
    }

    pub fn optional_i64(&mut self, key: &str) -> Option<i64> {
        self.parse_number(key)
    }

    pub fn optional_unix_time(&mut self, key: &str) -> Option<i64> {
        self.optional_i64(key)
    }

    fn parse_number<T>(&mut self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let s = self.get_raw(key, false)?;
        match s.parse::<T>() {
            Ok(val) => Some(val),
            Err(e) => {
                self.errors.push(BinaryError::AttrParse {
                    key: key.to_string(),
                    value: s.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}
