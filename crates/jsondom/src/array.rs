use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::slice;

use crate::value::{element_hash, JsonValue};

/// A JSON array: an ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonArray {
    elements: Vec<JsonValue>,
}

impl JsonArray {
    /// Creates an empty array.
    pub const fn new() -> Self {
        JsonArray { elements: Vec::new() }
    }

    /// Creates an empty array with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray { elements: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &JsonValue {
        &self.elements[index]
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; elements cannot be inserted past
    /// the end of the array.
    pub fn set(&mut self, index: usize, value: impl Into<JsonValue>) {
        self.elements[index] = value.into();
    }

    /// Appends an element. Anything convertible into a [`JsonValue`] is
    /// accepted, so plain strings, numbers, and booleans are wrapped
    /// automatically.
    pub fn add(&mut self, value: impl Into<JsonValue>) {
        self.elements.push(value.into());
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> JsonValue {
        self.elements.remove(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, JsonValue> {
        self.elements.iter()
    }
}

/// Order-insensitive hash: the XOR of the elements' hashes, so that equal
/// arrays hash equal. Arrays that differ only in element order collide;
/// equality is still order-sensitive. This asymmetry is intentional.
impl Hash for JsonArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut hash = 0;
        for element in &self.elements {
            hash ^= element_hash(element);
        }
        state.write_u64(hash);
    }
}

impl Index<usize> for JsonArray {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        &self.elements[index]
    }
}

impl Extend<JsonValue> for JsonArray {
    fn extend<I: IntoIterator<Item = JsonValue>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonArray { elements: iter.into_iter().collect() }
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
