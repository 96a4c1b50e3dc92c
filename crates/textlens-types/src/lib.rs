pub mod error;
pub mod types;

pub use error::UploadError;
pub use types::*;
