//! Channel keys for multi-channel signals.

use std::fmt;

/// Identifies one channel of a [`Signal`](crate::Signal).
///
/// Vector measurements conventionally store their components under
/// `Component(0)`, `Component(1)` and `Component(2)`. Scalar or derived
/// quantities use named fields. Components order before fields, so
/// iteration over a signal always visits vector components first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelKey {
    /// Vector component by index.
    Component(usize),
    /// Named scalar field.
    Field(String),
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKey::Component(index) => write!(f, "component {index}"),
            ChannelKey::Field(name) => f.write_str(name),
        }
    }
}

impl From<usize> for ChannelKey {
    fn from(index: usize) -> Self {
        ChannelKey::Component(index)
    }
}

impl From<&str> for ChannelKey {
    fn from(name: &str) -> Self {
        ChannelKey::Field(name.to_string())
    }
}

impl From<String> for ChannelKey {
    fn from(name: String) -> Self {
        ChannelKey::Field(name)
    }
}
