//! Loads YAML connector-definition catalogs. A catalog is a top-level YAML
//! sequence of definition mappings; loading enforces that every definition
//! carries a unique id and a unique name, then hands back either the generic
//! JSON-shaped documents or a typed definition list.

mod error;
mod loader;
mod models;

pub mod prelude {
    pub use crate::error::DefinitionsError;
    pub use crate::loader::{
        verify_and_convert_to_documents, verify_and_convert_to_models, yaml_to_documents,
    };
    pub use crate::models::prelude::*;
}

pub use crate::error::DefinitionsError;
pub use crate::loader::{
    verify_and_convert_to_documents, verify_and_convert_to_models, yaml_to_documents,
};
pub use crate::models::Definition;
