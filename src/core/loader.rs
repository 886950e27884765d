use crate::domain::model::{Fragment, FragmentRole, RequiredFragments};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SchemaError};

pub fn parse_fragment(file_name: &str, bytes: &[u8]) -> Result<Fragment> {
    serde_json::from_slice(bytes).map_err(|source| SchemaError::MalformedFragment {
        file: file_name.to_string(),
        source,
    })
}

pub fn load_fragment<S: Storage + ?Sized>(storage: &S, role: FragmentRole) -> Result<Fragment> {
    let file = role.file_name();
    let bytes = storage.read_file(file).map_err(|e| match e {
        SchemaError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            SchemaError::MissingRequiredFragment {
                file: file.to_string(),
            }
        }
        other => other,
    })?;

    tracing::debug!("Loaded {} ({} bytes)", file, bytes.len());
    parse_fragment(file, &bytes)
}

/// Loads all three mandatory fragments; the first failure aborts.
pub fn load_required<S: Storage + ?Sized>(storage: &S) -> Result<RequiredFragments> {
    Ok(RequiredFragments {
        instantiate: load_fragment(storage, FragmentRole::Instantiate)?,
        execute: load_fragment(storage, FragmentRole::Execute)?,
        query: load_fragment(storage, FragmentRole::Query)?,
    })
}
