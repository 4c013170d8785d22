pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::SiteAtlasError;
pub use types::{LocationKind, ACTIVE_STATUS};
