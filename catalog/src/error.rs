use thiserror::Error;

/// Failures raised while loading a definition catalog. Any variant aborts the
/// load of the whole batch, callers never get a partial list.
#[derive(Error, Debug)]
pub enum DefinitionsError {
    #[error("Unable to parse definition list. {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
    #[error("No definitions found")]
    NoDefinitions,
    #[error("Definition list must be a sequence of mappings")]
    NotAList,
    #[error("Definition at index {index} is not a mapping")]
    NotAMapping { index: usize },
    #[error("Definition is missing required field '{field}'")]
    MissingField { field: String },
    #[error("Multiple definitions have the id '{id}'")]
    DuplicateId { id: String },
    #[error("Multiple definitions have the name '{name}'")]
    DuplicateName { name: String },
    #[error("Definition '{name}' does not match the {kind} schema. {source}")]
    SchemaMismatch {
        name: String,
        kind: &'static str,
        source: serde_json::Error,
    },
}
