//! Setter generators for tag-specific attributes.

/// Consuming setters that write ` name="value"` for any displayable value.
macro_rules! value_setters {
    ($t:ty { $($(#[$meta:meta])* $method:ident => $attr:literal),+ $(,)? }) => {
        impl $t {
            $(
                $(#[$meta])*
                pub fn $method(mut self, value: impl ::std::fmt::Display) -> Self {
                    ::htmlgen_core::Node::element_mut(&mut self)
                        .attrs_mut()
                        .push_other($attr, &value.to_string());
                    self
                }
            )+
        }
    };
}

/// Consuming setters for boolean attributes written in presence form.
macro_rules! flag_setters {
    ($t:ty { $($(#[$meta:meta])* $method:ident => $attr:literal),+ $(,)? }) => {
        impl $t {
            $(
                $(#[$meta])*
                pub fn $method(mut self) -> Self {
                    ::htmlgen_core::Node::element_mut(&mut self)
                        .attrs_mut()
                        .push_flag($attr);
                    self
                }
            )+
        }
    };
}

pub(crate) use flag_setters;
pub(crate) use value_setters;
