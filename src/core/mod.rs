pub mod collector;
pub mod composer;
pub mod discovery;
pub mod emitter;
pub mod engine;
pub mod loader;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod mock;

pub use crate::domain::model::{ComposedSchema, Fragment, ResponseFile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Reporter, Storage};
pub use crate::utils::error::Result;
