//! Pipeline services behind the HTTP routes.

pub mod color_theme;
pub mod error;
pub mod fetch;
pub mod generation;
pub mod image_prep;
pub mod pipeline;
pub mod prompts;

pub use error::ServiceError;
