pub mod catalog;
pub mod load;
pub mod preload;
pub mod resource;

pub use catalog::{CatalogEntry, COURSE_TAGLINE, COURSE_TITLE, HERO_RESOURCE_ID, RESOURCE_CATALOG};
pub use load::{Completion, LoadLatch, LoadState};
pub use preload::{PreloadRegistry, PreloadReport};
pub use resource::{DescriptorError, ResourceDescriptor, ResourceId, ResourceKind};
