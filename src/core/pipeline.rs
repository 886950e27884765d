use crate::core::{collector, discovery, emitter, loader};
use crate::core::{ComposedSchema, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{RequiredFragments, ResponseFile, ResponseMap};
use crate::utils::error::Result;

/// Reads fragments from one storage directory and writes the full schema
/// back into it.
pub struct SchemaPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> SchemaPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn output_location(&self) -> String {
        self.storage.location(self.config.output_file())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SchemaPipeline<S, C> {
    fn discover(&self) -> Result<Vec<ResponseFile>> {
        if let Some(manifest) = self.config.response_manifest() {
            tracing::debug!("Using response manifest with {} entries", manifest.len());
            return Ok(discovery::manifest_response_files(manifest));
        }

        let listing = self.storage.list_files()?;
        tracing::debug!(
            "Scanning {} files in {}",
            listing.len(),
            self.config.schema_dir()
        );
        Ok(discovery::discover_response_files(listing))
    }

    fn load_required(&self) -> Result<RequiredFragments> {
        loader::load_required(&self.storage)
    }

    fn collect_responses(&self, files: &[ResponseFile]) -> Result<ResponseMap> {
        collector::collect_responses(&self.storage, files)
    }

    fn emit(&self, schema: &ComposedSchema) -> Result<String> {
        emitter::emit(&self.storage, self.config.output_file(), schema)
    }
}
