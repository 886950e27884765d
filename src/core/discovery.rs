use crate::domain::model::{ResponseFile, RESPONSE_SUFFIX};
use std::collections::BTreeMap;

/// Query name for a response schema file, or `None` when the name does not
/// follow the `<name>_response.json` convention.
///
/// The key is everything before the first occurrence of the suffix, so
/// `get_vote_response.json` yields `get_vote`.
pub fn derive_response_key(file_name: &str) -> Option<&str> {
    if !file_name.ends_with(RESPONSE_SUFFIX) {
        return None;
    }
    file_name.find(RESPONSE_SUFFIX).map(|idx| &file_name[..idx])
}

/// Picks the response files out of a directory listing, sorted by file name.
pub fn discover_response_files<I, S>(file_names: I) -> Vec<ResponseFile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found: Vec<ResponseFile> = file_names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            derive_response_key(name).map(|key| ResponseFile {
                key: key.to_string(),
                file_name: name.to_string(),
            })
        })
        .collect();

    found.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!("Discovered {} response files", found.len());
    found
}

/// Response files named explicitly by a manifest, in query name order.
pub fn manifest_response_files(manifest: &BTreeMap<String, String>) -> Vec<ResponseFile> {
    manifest
        .iter()
        .map(|(key, file_name)| ResponseFile {
            key: key.clone(),
            file_name: file_name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_response_key() {
        assert_eq!(derive_response_key("get_vote_response.json"), Some("get_vote"));
        assert_eq!(derive_response_key("config_response.json"), Some("config"));
        assert_eq!(derive_response_key("query_msg.json"), None);
        assert_eq!(derive_response_key("get_vote_response.json.bak"), None);
        assert_eq!(derive_response_key("get_vote_response.yaml"), None);
    }

    #[test]
    fn test_derive_response_key_uses_first_suffix_occurrence() {
        assert_eq!(
            derive_response_key("a_response.json_response.json"),
            Some("a")
        );
        assert_eq!(
            derive_response_key("voting_power_response_history_response.json"),
            Some("voting_power_response_history")
        );
        assert_eq!(derive_response_key("_response.json"), Some(""));
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let listing = vec![
            "query_msg.json",
            "total_power_response.json",
            "execute_msg.json",
            "config_response.json",
            "instantiate_msg.json",
            "notes.txt",
            "dao_voting_adapter_full_schema.json",
        ];

        let found = discover_response_files(listing);

        assert_eq!(
            found,
            vec![
                ResponseFile {
                    key: "config".to_string(),
                    file_name: "config_response.json".to_string(),
                },
                ResponseFile {
                    key: "total_power".to_string(),
                    file_name: "total_power_response.json".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_discover_is_order_independent() {
        let forward = discover_response_files(["b_response.json", "a_response.json"]);
        let backward = discover_response_files(["a_response.json", "b_response.json"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_discover_empty_listing() {
        let found = discover_response_files(Vec::<String>::new());
        assert!(found.is_empty());
    }

    #[test]
    fn test_manifest_response_files() {
        let mut manifest = BTreeMap::new();
        manifest.insert("voting_power".to_string(), "power.json".to_string());
        manifest.insert("config".to_string(), "cfg.json".to_string());

        let files = manifest_response_files(&manifest);

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].key, "config");
        assert_eq!(files[0].file_name, "cfg.json");
        assert_eq!(files[1].key, "voting_power");
    }
}
