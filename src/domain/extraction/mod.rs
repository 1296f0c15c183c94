pub mod error;
pub mod format;
pub mod service;

pub use error::ExtractError;
pub use format::FileFormat;
pub use service::extract;
