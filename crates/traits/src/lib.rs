pub mod executor;
pub mod resource;

pub use executor::{Executor, ExecutorError, SyncExecutor};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
