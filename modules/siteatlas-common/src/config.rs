use crate::SiteAtlasError;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment, consulting a local `.env`
    /// file first if one exists.
    pub fn from_env() -> Result<Self, SiteAtlasError> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| SiteAtlasError::Config("DATABASE_URL is not set".into()))?;

        Ok(Self { database_url })
    }
}
