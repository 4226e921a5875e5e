//! Attribute storage for elements.
//!
//! A fixed set of frequently used attributes lives in dedicated slots so that
//! setting and writing them needs no lookup. Everything else is appended to a
//! free-form buffer that is written verbatim after the slots.

use std::fmt;

/// The well-known attributes, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrSlot {
    Id,
    DataId,
    Class,
    Type,
    Role,
    Style,
    Src,
    Alt,
    Width,
    Height,
    Href,
    Rel,
}

impl AttrSlot {
    pub const ALL: [AttrSlot; 12] = [
        AttrSlot::Id,
        AttrSlot::DataId,
        AttrSlot::Class,
        AttrSlot::Type,
        AttrSlot::Role,
        AttrSlot::Style,
        AttrSlot::Src,
        AttrSlot::Alt,
        AttrSlot::Width,
        AttrSlot::Height,
        AttrSlot::Href,
        AttrSlot::Rel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AttrSlot::Id => "id",
            AttrSlot::DataId => "data-id",
            AttrSlot::Class => "class",
            AttrSlot::Type => "type",
            AttrSlot::Role => "role",
            AttrSlot::Style => "style",
            AttrSlot::Src => "src",
            AttrSlot::Alt => "alt",
            AttrSlot::Width => "width",
            AttrSlot::Height => "height",
            AttrSlot::Href => "href",
            AttrSlot::Rel => "rel",
        }
    }

    /// Recognizes a well-known attribute by its exact markup name.
    pub fn from_name(name: &str) -> Option<AttrSlot> {
        AttrSlot::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// A name/value pair handed to `add`.
///
/// Well-known names are routed into their slot; any other name is appended to
/// the free-form buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: String,
    value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Shorthand for [`Attr::new`].
pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Attr {
    Attr::new(name, value)
}

/// The attributes of one element.
///
/// Empty values are treated as absent and are never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    slots: [String; 12],
    /// ` name="value"` fragments in insertion order.
    other: String,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: AttrSlot) -> &str {
        &self.slots[slot as usize]
    }

    /// Overwrites a slot. `class` is replaced too; use
    /// [`Attributes::add_class`] to accumulate classes.
    pub fn set(&mut self, slot: AttrSlot, value: impl Into<String>) -> &mut Self {
        self.slots[slot as usize] = value.into();
        self
    }

    /// Appends a class, separated from the existing value by a space.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        let slot = &mut self.slots[AttrSlot::Class as usize];
        slot.push(' ');
        slot.push_str(class);
        self
    }

    /// Routes an attribute by name: well-known names overwrite their slot,
    /// any other name is appended to the free-form buffer.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value: String = value.into();
        match AttrSlot::from_name(name) {
            Some(slot) => self.set(slot, value),
            None => self.push_other(name, &value),
        }
    }

    /// Appends `name="value"` to the free-form buffer without any routing.
    /// Repeated names accumulate.
    pub fn push_other(&mut self, name: &str, value: &str) -> &mut Self {
        self.other.push(' ');
        self.other.push_str(name);
        self.other.push_str("=\"");
        self.other.push_str(value);
        self.other.push('"');
        self
    }

    /// Writes a boolean attribute in its presence form (`required="required"`).
    pub fn push_flag(&mut self, name: &str) -> &mut Self {
        self.push_other(name, name)
    }

    /// Writes an attribute whose value is the literal `"true"` or `"false"`.
    pub fn push_bool(&mut self, name: &str, value: bool) -> &mut Self {
        self.push_other(name, if value { "true" } else { "false" })
    }

    /// The free-form buffer as it will be written, including leading spaces.
    pub fn other(&self) -> &str {
        &self.other
    }

    pub fn is_empty(&self) -> bool {
        self.other.is_empty() && self.slots.iter().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(String::clear);
        self.other.clear();
    }

    /// Appends every non-empty attribute to `out`, each preceded by a space.
    pub fn write(&self, out: &mut String) {
        for slot in AttrSlot::ALL {
            let value = self.get(slot);
            if value.is_empty() {
                continue;
            }
            out.push(' ');
            out.push_str(slot.name());
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push_str(&self.other);
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write(&mut out);
        f.write_str(&out)
    }
}
