use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Definition;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDefinition {
    pub destination_definition_id: String,
    pub name: String,
    pub docker_repository: String,
    pub docker_image_tag: String,
    pub documentation_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Definition for DestinationDefinition {
    fn id_field() -> &'static str {
        "destinationDefinitionId"
    }

    fn kind() -> &'static str {
        "DestinationDefinition"
    }
}
