use std::hash::{Hash, Hasher};
use std::slice;

use ahash::AHashMap;

use crate::value::{element_hash, JsonValue, UNKNOWN};

/// A JSON object: an ordered sequence of name/value members.
///
/// Members keep their insertion order and duplicate names are allowed; name
/// lookups return the first match. This mirrors JSON text, where an object
/// is a sequence of members rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonObject {
    members: Vec<JsonMember>,
}

impl JsonObject {
    /// Creates an empty object.
    pub const fn new() -> Self {
        JsonObject { members: Vec::new() }
    }

    /// Number of members, counting duplicates.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the value of the first member with the given name, or
    /// [`JsonValue::Unknown`] if there is none.
    pub fn get(&self, name: &str) -> &JsonValue {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map_or(&UNKNOWN, |member| &member.value)
    }

    /// Returns the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn member(&self, index: usize) -> &JsonMember {
        &self.members[index]
    }

    /// Replaces the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_member(&mut self, index: usize, member: JsonMember) {
        self.members[index] = member;
    }

    /// Appends a member, even if the name duplicates an existing member.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<JsonValue>) {
        self.add_member(JsonMember::new(name, value));
    }

    /// Appends an already constructed member.
    pub fn add_member(&mut self, member: JsonMember) {
        self.members.push(member);
    }

    /// Replaces the first member with the given name, or appends a new
    /// member if there is none.
    pub fn set(&mut self, name: &str, value: impl Into<JsonValue>) {
        let value = value.into();
        match self.members.iter_mut().find(|member| member.name == name) {
            Some(member) => member.value = value,
            None => self.add_member(JsonMember::new(name, value)),
        }
    }

    /// Removes and returns the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> JsonMember {
        self.members.remove(index)
    }

    /// Removes and returns the first member with the given name, or `None`
    /// if there is none. Later duplicates are left in place.
    pub fn remove_by_name(&mut self, name: &str) -> Option<JsonMember> {
        let index = self.members.iter().position(|member| member.name == name)?;
        Some(self.members.remove(index))
    }

    /// Builds a map from member names to values, keeping only the first
    /// occurrence of each name.
    pub fn to_map(&self) -> AHashMap<&str, &JsonValue> {
        let mut map = AHashMap::with_capacity(self.members.len());
        for member in &self.members {
            map.entry(member.name.as_str()).or_insert(&member.value);
        }
        map
    }

    pub fn iter(&self) -> slice::Iter<'_, JsonMember> {
        self.members.iter()
    }
}

/// Order-insensitive hash: the XOR of the members' hashes, so that equal
/// objects hash equal. Objects that differ only in member order collide;
/// equality is still order-sensitive. This asymmetry is intentional.
impl Hash for JsonObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut hash = 0;
        for member in &self.members {
            hash ^= element_hash(member);
        }
        state.write_u64(hash);
    }
}

impl Extend<JsonMember> for JsonObject {
    fn extend<I: IntoIterator<Item = JsonMember>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl FromIterator<JsonMember> for JsonObject {
    fn from_iter<I: IntoIterator<Item = JsonMember>>(iter: I) -> Self {
        JsonObject { members: iter.into_iter().collect() }
    }
}

impl IntoIterator for JsonObject {
    type Item = JsonMember;
    type IntoIter = std::vec::IntoIter<JsonMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = &'a JsonMember;
    type IntoIter = slice::Iter<'a, JsonMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// A name/value pair inside a [`JsonObject`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonMember {
    pub(crate) name: String,
    pub(crate) value: JsonValue,
}

impl JsonMember {
    pub fn new(name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        JsonMember {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut JsonValue {
        &mut self.value
    }

    pub fn into_value(self) -> JsonValue {
        self.value
    }

    pub fn into_parts(self) -> (String, JsonValue) {
        (self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonMember, JsonObject};
    use crate::JsonValue;

    #[test]
    fn get_returns_first_match() {
        let mut object = JsonObject::new();
        object.add("x", "first");
        object.add("x", "second");
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("x").string_value(""), "first");
    }

    #[test]
    fn get_missing_is_unknown() {
        let object = JsonObject::new();
        assert!(object.get("abc").is_unknown());
    }

    #[test]
    fn set_updates_first_match_or_appends() {
        let mut object = JsonObject::new();
        assert!(object.is_empty());
        object.add("bart", 10);
        object.add("bort", -10);
        object.set("bort", 20);
        object.set("lisa", 12);
        assert_eq!(object.get("bart").as_int(0), 10);
        assert_eq!(object.get("bort").as_int(0), 20);
        assert_eq!(object.get("lisa").as_int(0), 12);
        assert!(!object.is_empty());
    }

    #[test]
    fn remove_returns_member() {
        let mut object = JsonObject::new();
        object.add("a", 1);
        object.add("b", 2);
        let removed = object.remove(0);
        assert_eq!(removed.name(), "a");
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn remove_by_name_takes_first_match_only() {
        let mut object = JsonObject::new();
        object.add("x", 1);
        object.add("x", 2);
        let removed = object.remove_by_name("x").unwrap();
        assert_eq!(removed.value().as_int(0), 1);
        assert_eq!(object.get("x").as_int(0), 2);
        assert!(object.remove_by_name("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn member_index_out_of_bounds() {
        let object = JsonObject::new();
        let _ = object.member(0);
    }

    #[test]
    fn to_map_keeps_first_occurrence() {
        let mut object = JsonObject::new();
        object.add("x", 1);
        object.add("x", 2);
        object.add("y", 3);
        let map = object.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["x"].as_int(0), 1);
        assert_eq!(map["y"].as_int(0), 3);
    }

    #[test]
    fn member_equality_covers_both_fields() {
        let member = JsonMember::new("foo", "foo");
        assert_eq!(member, JsonMember::new("foo", "foo"));
        assert_ne!(member, JsonMember::new("foo", "x"));
        assert_ne!(member, JsonMember::new("bar", "foo"));
    }

    #[test]
    fn accepts_member_names_needing_escapes() {
        let mut object = JsonObject::new();
        for (i, name) in ["\"", "\\", "\n", "\r", "\t", "\u{8}", "\u{c}", " "]
            .into_iter()
            .enumerate()
        {
            object.add(name, i as i64 + 1);
        }
        assert_eq!(object.get("\"").int_value(0), 1);
        assert_eq!(object.get("\\").int_value(0), 2);
        assert_eq!(object.get("\n").int_value(0), 3);
        assert_eq!(object.get(" ").int_value(0), 8);
    }

    #[test]
    fn extend_appends_members() {
        let mut object = JsonObject::new();
        object.extend([
            JsonMember::new("1", 1),
            JsonMember::new("1", true),
            JsonMember::new("1", false),
        ]);
        assert_eq!(object.len(), 3);
        assert_eq!(object.get("1"), &JsonValue::from(1));
    }
}
