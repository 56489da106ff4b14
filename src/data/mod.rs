mod loader;

pub use loader::{LoadError, load_questions};
