mod loader;

pub use loader::{load_content_from_json, load_embedded_content, LoadError};
