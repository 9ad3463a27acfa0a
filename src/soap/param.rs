//! The parameter tree: named scalar leaves and nested groups.

use super::value;
use super::Result;

/// A named node of a SOAP parameter tree.
///
/// Type information is purely structural: a node either carries a scalar
/// wire value ([`Leaf`]) or an ordered list of children ([`Group`]). Names
/// are never empty; duplicate names among siblings are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param {
    /// Scalar parameter holding a wire-format value.
    Leaf(Leaf),
    /// Ordered list of child parameters.
    Group(Group),
}

impl Param {
    /// Name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.name(),
            Self::Group(group) => group.name(),
        }
    }

    /// Rename the node.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Self::Leaf(leaf) => leaf.set_name(name),
            Self::Group(group) => group.set_name(name),
        }
    }

    /// Whether this node is a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Borrow the scalar leaf, if this node is one.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    /// Mutably borrow the scalar leaf, if this node is one.
    pub fn as_leaf_mut(&mut self) -> Option<&mut Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    /// Borrow the group, if this node is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            Self::Leaf(_) => None,
        }
    }

    /// Mutably borrow the group, if this node is one.
    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Self::Group(group) => Some(group),
            Self::Leaf(_) => None,
        }
    }
}

impl From<Leaf> for Param {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Group> for Param {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// Scalar parameter: a name plus a wire-encoded raw value.
///
/// The raw value is always the already-escaped wire representation, stored
/// as bytes because transports can hand over values that are not valid
/// UTF-8. Decoding to a native value happens on read, on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leaf {
    name: String,
    value: Vec<u8>,
}

impl Leaf {
    /// Create a leaf holding an already-encoded wire value.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "param name must not be empty");
        Self {
            name,
            value: value.into(),
        }
    }

    /// Create a leaf from text, encoding it to wire form.
    #[must_use]
    pub fn string(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, value::encode_string(text))
    }

    /// Create a leaf from a boolean.
    #[must_use]
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, value::encode_boolean(value))
    }

    /// Create a leaf from a signed 32-bit integer.
    #[must_use]
    pub fn integer(name: impl Into<String>, value: i32) -> Self {
        Self::new(name, value::encode_integer(value))
    }

    /// Create a leaf from a floating point number.
    #[must_use]
    pub fn double(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, value::encode_double(value))
    }

    /// Create a leaf from binary data, base64-encoded.
    #[must_use]
    pub fn base64(name: impl Into<String>, value: &[u8]) -> Self {
        Self::new(name, value::encode_base64(value))
    }

    /// Create a leaf from text carried as base64.
    #[must_use]
    pub fn base64_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, value::encode_base64_text(text))
    }

    /// Name of the leaf.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the leaf.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        assert!(!name.is_empty(), "param name must not be empty");
        self.name = name;
    }

    /// Raw wire-format value.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Replace the raw wire-format value as-is, without encoding.
    pub fn set_value(&mut self, value: impl Into<Vec<u8>>) {
        self.value = value.into();
    }

    /// Encode and store text.
    pub fn set_string(&mut self, text: &str) {
        self.value = value::encode_string(text).into_bytes();
    }

    /// Encode and store a boolean.
    pub fn set_boolean(&mut self, value: bool) {
        self.value = value::encode_boolean(value).into();
    }

    /// Encode and store a signed 32-bit integer.
    pub fn set_integer(&mut self, value: i32) {
        self.value = value::encode_integer(value).into_bytes();
    }

    /// Encode and store a floating point number.
    pub fn set_double(&mut self, value: f64) {
        self.value = value::encode_double(value).into_bytes();
    }

    /// Encode and store binary data as base64.
    pub fn set_base64(&mut self, value: &[u8]) {
        self.value = value::encode_base64(value).into_bytes();
    }

    /// Encode and store text as base64 of its UTF-8 bytes.
    pub fn set_base64_text(&mut self, text: &str) {
        self.value = value::encode_base64_text(text).into_bytes();
    }

    /// Decode the value as text.
    pub fn decode_string(&self) -> Result<String> {
        value::decode_string(&self.value)
    }

    /// Decode the value as a boolean.
    pub fn decode_boolean(&self) -> Result<bool> {
        value::decode_boolean(&self.value)
    }

    /// Decode the value as a signed 32-bit integer.
    pub fn decode_integer(&self) -> Result<i32> {
        value::decode_integer(&self.value)
    }

    /// Decode the value as a floating point number.
    pub fn decode_double(&self) -> Result<f64> {
        value::decode_double(&self.value)
    }

    /// Decode the value as base64 binary.
    pub fn decode_base64(&self) -> Result<Vec<u8>> {
        value::decode_base64(&self.value)
    }

    /// Decode the value as base64-carried text.
    pub fn decode_base64_text(&self) -> Result<String> {
        value::decode_base64_text(&self.value)
    }
}

/// Ordered, name-addressable collection of parameters.
///
/// Children keep insertion order and may share names; lookups resolve to the
/// first match, so later same-named insertions stay in the tree but are
/// unreachable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    name: String,
    children: Vec<Param>,
}

impl Group {
    /// Create an empty group.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "param name must not be empty");
        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Name of the group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the group.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        assert!(!name.is_empty(), "param name must not be empty");
        self.name = name;
    }

    /// Append a parameter, taking ownership.
    pub fn add(&mut self, param: impl Into<Param>) {
        self.children.push(param.into());
    }

    /// Append several parameters in order.
    pub fn add_all(&mut self, params: impl IntoIterator<Item = Param>) {
        self.children.extend(params);
    }

    /// First child with the given name, or `None`.
    ///
    /// Linear scan over the children.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.children.iter().find(|param| param.name() == name)
    }

    /// Mutable borrow of the first child with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Param> {
        self.children.iter_mut().find(|param| param.name() == name)
    }

    /// Look up several names at once; results align positionally with the
    /// queried names.
    #[must_use]
    pub fn get_all<'a>(&'a self, names: &[&str]) -> Vec<Option<&'a Param>> {
        names.iter().map(|name| self.get(name)).collect()
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Param] {
        &self.children
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
