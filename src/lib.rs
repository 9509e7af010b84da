//! Derive Swagger schema definitions from model types and merge them into a
//! persisted swagger document.
//!
//! ```no_run
//! use swaggify::{Registry, SchemaMerger, SwaggifyConfig, model_schema};
//!
//! pub struct Phone {
//!     first_name: String,
//!     phone: u64,
//!     is_active: bool,
//! }
//!
//! model_schema!(Phone {
//!     first_name => "firstName",
//!     phone,
//!     is_active => "isActive",
//! });
//!
//! # async fn run() -> swaggify::SwaggifyResult<()> {
//! let mut registry = Registry::new();
//! registry.register_model::<Phone>();
//!
//! let merger = SchemaMerger::from_config(&SwaggifyConfig::default());
//! merger.merge_definitions(&registry.to_swagger_schema()).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod merger;
pub mod paths;
pub mod registry;
pub mod schema;

pub use crate::config::SwaggifyConfig;
pub use crate::error::{SwaggifyError, SwaggifyResult};
pub use crate::merger::{DocumentSection, SchemaMerger};
pub use crate::paths::{ApiPathDefinition, HttpMethod, OperationMeta};
pub use crate::registry::Registry;
pub use crate::schema::{ModelSchema, TypeShape, extract_shape};
