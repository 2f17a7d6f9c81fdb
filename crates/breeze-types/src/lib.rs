pub mod artifact;
pub mod category;
pub mod page;

pub use artifact::{Artifact, TaskResult};
pub use category::{BlogCategory, GenerationMode, UnknownCategory};
pub use page::{PageContent, PageMeta, MAX_PAGE_TEXT_CHARS};
