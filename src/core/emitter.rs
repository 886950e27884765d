use crate::domain::model::ComposedSchema;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Pretty-printed JSON with two-space indentation.
pub fn render(schema: &ComposedSchema) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(schema)?)
}

/// Writes the schema to `output_file`, replacing any existing file, and
/// returns where it was written.
pub fn emit<S: Storage + ?Sized>(
    storage: &S,
    output_file: &str,
    schema: &ComposedSchema,
) -> Result<String> {
    let data = render(schema)?;
    tracing::debug!("Writing {} bytes to {}", data.len(), output_file);
    storage.write_file(output_file, &data)?;
    Ok(storage.location(output_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composer::compose;
    use crate::core::mock::MockStorage;
    use crate::domain::model::{RequiredFragments, ResponseMap};
    use serde_json::json;

    fn schema() -> ComposedSchema {
        let mut responses = ResponseMap::new();
        responses.insert("get_vote".to_string(), json!({"type": "object"}));
        compose(
            RequiredFragments {
                instantiate: json!({"a": 1}),
                execute: json!({"b": 2}),
                query: json!({"c": 3}),
            },
            responses,
        )
    }

    #[test]
    fn test_render_key_order_and_indent() {
        let text = String::from_utf8(render(&schema()).unwrap()).unwrap();

        let positions: Vec<usize> = ["instantiate", "execute", "query", "migrate", "sudo", "responses"]
            .iter()
            .map(|key| text.find(&format!("\"{}\"", key)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);

        assert!(text.starts_with("{\n  \"instantiate\": {\n    \"a\": 1\n  },"));
        assert!(text.contains("\"migrate\": {},"));
    }

    #[test]
    fn test_emit_overwrites_existing_output() {
        let storage = MockStorage::new().with_file("full.json", "stale");

        let location = emit(&storage, "full.json", &schema()).unwrap();

        assert_eq!(location, "mock://full.json");
        let written: serde_json::Value =
            serde_json::from_slice(&storage.get_file("full.json").unwrap()).unwrap();
        assert_eq!(written["responses"]["get_vote"], json!({"type": "object"}));
    }
}
