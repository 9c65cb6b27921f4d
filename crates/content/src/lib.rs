mod loader;
mod types;

pub use loader::{load_first_document, LoadError};
pub use types::{AttackDataItem, BaselineSpec, DetectionDoc, TestCase, TestSuite};
