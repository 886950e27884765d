use crate::core::composer::compose;
use crate::core::{ComposedSchema, Pipeline, Reporter};
use crate::utils::error::Result;

/// Drives a pipeline through discovery, loading, composition and emission.
/// The first failing step aborts the run; nothing is written before every
/// input has been loaded.
pub struct SchemaEngine<P: Pipeline, R: Reporter> {
    pipeline: P,
    reporter: R,
}

impl<P: Pipeline, R: Reporter> SchemaEngine<P, R> {
    pub fn new(pipeline: P, reporter: R) -> Self {
        Self { pipeline, reporter }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Everything up to, but not including, the write.
    pub fn build(&self) -> Result<ComposedSchema> {
        self.reporter.started();

        tracing::debug!("Discovering response fragments");
        let response_files = self.pipeline.discover()?;
        self.reporter.responses_discovered(&response_files);

        tracing::debug!("Loading required fragments");
        let required = self.pipeline.load_required()?;

        tracing::debug!("Collecting {} response fragments", response_files.len());
        let responses = self.pipeline.collect_responses(&response_files)?;

        Ok(compose(required, responses))
    }

    pub fn run(&self) -> Result<String> {
        let schema = self.build()?;

        tracing::debug!("Emitting full schema");
        let output = self.pipeline.emit(&schema)?;
        self.reporter.completed(&output);

        Ok(output)
    }
}
