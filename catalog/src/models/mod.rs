use serde::de::DeserializeOwned;

mod destination;
mod source;

pub mod prelude {
    pub use super::Definition;
    pub use super::destination::DestinationDefinition;
    pub use super::source::SourceDefinition;
}

/// A definition kind that can be loaded from a catalog. Each kind fixes the
/// field holding its unique id; the `name` field is shared by every kind.
pub trait Definition: DeserializeOwned {
    fn id_field() -> &'static str;
    fn kind() -> &'static str;
}
