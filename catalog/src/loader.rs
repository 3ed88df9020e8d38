use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::error::DefinitionsError;
use crate::models::Definition;

/// Every definition kind shares the `name` field; only the id field varies.
const NAME_FIELD: &str = "name";

/// Parses raw YAML into the generic document form: an ordered array of
/// mappings, one per definition. The array is JSON-shaped so callers can hand
/// it straight to a JSON serializer.
pub fn yaml_to_documents(raw: &str) -> Result<Vec<Value>, DefinitionsError> {
    if raw.trim().is_empty() {
        return Err(DefinitionsError::NoDefinitions);
    }

    let parsed: Value = serde_yaml::from_str(raw)?;
    let documents = match parsed {
        Value::Null => return Err(DefinitionsError::NoDefinitions),
        Value::Array(elements) => elements,
        _ => return Err(DefinitionsError::NotAList),
    };

    if documents.is_empty() {
        return Err(DefinitionsError::NoDefinitions);
    }

    for (index, document) in documents.iter().enumerate() {
        if !document.is_object() {
            return Err(DefinitionsError::NotAMapping { index });
        }
    }

    Ok(documents)
}

/// Verifies the id and name uniqueness invariants against `id_field` and
/// returns the document array unchanged.
pub fn verify_and_convert_to_documents(
    id_field: &str,
    raw: &str,
) -> Result<Vec<Value>, DefinitionsError> {
    let documents = yaml_to_documents(raw)?;
    check_no_duplicates(&documents, id_field)?;

    debug!("Loaded {} definition documents", documents.len());

    Ok(documents)
}

/// Verifies the same invariants, using the id field fixed by `T`, and
/// deserializes every document into `T`. Input order is preserved.
pub fn verify_and_convert_to_models<T: Definition>(
    raw: &str,
) -> Result<Vec<T>, DefinitionsError> {
    let documents = yaml_to_documents(raw)?;
    check_no_duplicates(&documents, T::id_field())?;

    let mut definitions = Vec::with_capacity(documents.len());
    for document in documents {
        let name = field_as_string(&document, NAME_FIELD)?;
        let definition =
            serde_json::from_value(document).map_err(|e| DefinitionsError::SchemaMismatch {
                name,
                kind: T::kind(),
                source: e,
            })?;
        definitions.push(definition);
    }

    debug!("Loaded {} {} definitions", definitions.len(), T::kind());

    Ok(definitions)
}

/// Single scan in input order, so the first conflicting value is the one
/// reported. Id and name are independent invariants; either collision is
/// fatal on its own.
fn check_no_duplicates(documents: &[Value], id_field: &str) -> Result<(), DefinitionsError> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for document in documents {
        let id = field_as_string(document, id_field)?;
        let name = field_as_string(document, NAME_FIELD)?;

        if !seen_ids.insert(id.clone()) {
            return Err(DefinitionsError::DuplicateId { id });
        }
        if !seen_names.insert(name.clone()) {
            return Err(DefinitionsError::DuplicateName { name });
        }
    }

    Ok(())
}

fn field_as_string(document: &Value, field: &str) -> Result<String, DefinitionsError> {
    match document.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        // Non-string scalars still take part in uniqueness checking.
        Some(value) => Ok(value.to_string()),
        None => Err(DefinitionsError::MissingField {
            field: field.to_string(),
        }),
    }
}
