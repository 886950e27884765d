use crate::core::loader::parse_fragment;
use crate::domain::model::{ResponseEntry, ResponseFile, ResponseMap};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SchemaError};

pub fn load_response<S: Storage + ?Sized>(storage: &S, file: &ResponseFile) -> Result<ResponseEntry> {
    let bytes = storage.read_file(&file.file_name).map_err(|e| match e {
        SchemaError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            SchemaError::MissingResponseFragment {
                file: file.file_name.clone(),
            }
        }
        other => other,
    })?;
    let fragment = parse_fragment(&file.file_name, &bytes)?;
    Ok(ResponseEntry {
        key: file.key.clone(),
        fragment,
    })
}

/// Loads every response file into a map keyed by query name. A later file
/// with the same key replaces the earlier one.
pub fn collect_responses<S: Storage + ?Sized>(
    storage: &S,
    files: &[ResponseFile],
) -> Result<ResponseMap> {
    let mut responses = ResponseMap::new();

    for file in files {
        let entry = load_response(storage, file)?;
        tracing::debug!("Collected response '{}' from {}", entry.key, file.file_name);
        if responses.insert(entry.key, entry.fragment).is_some() {
            tracing::debug!("Response key from {} replaced an earlier entry", file.file_name);
        }
    }

    Ok(responses)
}
