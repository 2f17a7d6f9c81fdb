pub mod builder;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod selector;
pub mod session;
pub mod source;
pub mod templates;
pub mod window;

pub use builder::BreezeBuilder;
pub use config::{PipelineConfig, TemperatureConfig, WindowConfig};
pub use error::{Result, TaskError};
pub use pipeline::TaskPipeline;
pub use runner::{Breeze, GenerationRequest};
pub use selector::{AiBackend, BackendSelector, Probe, PromptSource};
pub use session::SessionManager;
pub use source::{ContentSource, StaticContentSource};
pub use window::{truncate, truncate_head, TRUNCATION_MARKER};
