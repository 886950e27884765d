use crate::domain::model::{ComposedSchema, RequiredFragments, ResponseFile, ResponseMap};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// A flat directory of schema files.
pub trait Storage {
    /// Names of the regular files directly inside the directory.
    fn list_files(&self) -> Result<Vec<String>>;
    fn read_file(&self, name: &str) -> Result<Vec<u8>>;
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()>;
    /// Human readable location of `name`, used in progress output.
    fn location(&self, name: &str) -> String;
}

pub trait ConfigProvider {
    fn schema_dir(&self) -> &str;
    fn output_file(&self) -> &str;
    /// Explicit query name to response file pairs. `None` selects discovery
    /// by file name convention.
    fn response_manifest(&self) -> Option<&BTreeMap<String, String>>;
    fn atomic_write(&self) -> bool;
}

/// Progress narration for a run.
pub trait Reporter {
    fn started(&self);
    fn responses_discovered(&self, files: &[ResponseFile]);
    fn completed(&self, output: &str);
}

pub trait Pipeline {
    fn discover(&self) -> Result<Vec<ResponseFile>>;
    fn load_required(&self) -> Result<RequiredFragments>;
    fn collect_responses(&self, files: &[ResponseFile]) -> Result<ResponseMap>;
    fn emit(&self, schema: &ComposedSchema) -> Result<String>;
}
