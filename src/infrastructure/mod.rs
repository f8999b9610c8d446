pub mod preview_registry;

pub use preview_registry::{PreviewHandle, PreviewRegistry};
