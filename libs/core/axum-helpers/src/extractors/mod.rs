//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with the same `{success: false, errors: [...]}`
//! body so clients only have to handle one validation shape.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
