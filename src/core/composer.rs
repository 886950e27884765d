use crate::domain::model::{ComposedSchema, RequiredFragments, ResponseMap};

/// Builds the consolidated document. `migrate` and `sudo` are always empty.
pub fn compose(required: RequiredFragments, responses: ResponseMap) -> ComposedSchema {
    ComposedSchema {
        instantiate: required.instantiate,
        execute: required.execute,
        query: required.query,
        migrate: serde_json::Map::new(),
        sudo: serde_json::Map::new(),
        responses,
    }
}
