use std::env;

#[derive(Clone, Debug)]
pub struct Config {
	pub server_host: String,
	pub port: u16,
	pub database_url: String,
	pub max_pool_size: u32,
}

impl Config {
	/// Reads the configuration from the process environment.
	///
	/// A `.env` file in the working directory is loaded first if present.
	pub fn from_env() -> Result<Self, ConfigError> {
		let _ = dotenvy::dotenv();

		Ok(Self {
			server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
			port: env::var("PORT")
				.unwrap_or_else(|_| "8080".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidPort)?,
			database_url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?,
			max_pool_size: env::var("MAX_POOL_SIZE")
				.unwrap_or_else(|_| "5".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidPoolSize)?,
		})
	}

	pub fn server_addr(&self) -> String {
		format!("{}:{}", self.server_host, self.port)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid port number")]
	InvalidPort,
	#[error("DATABASE_URL must be set")]
	MissingDatabaseUrl,
	#[error("MAX_POOL_SIZE must be a positive number")]
	InvalidPoolSize,
}
