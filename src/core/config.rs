//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// bcrypt cost factor for stored password hashes
    /// Example: BCRYPT_COST=12
    pub bcrypt_cost: Option<u32>,

    /// Whether the signup endpoint accepts new accounts
    /// Example: SIGNUPS_ENABLED=false
    pub signups_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("BCRYPT_COST").ok(),
            std::env::var("SIGNUPS_ENABLED").ok(),
        )
    }

    fn from_vars(bcrypt_cost: Option<String>, signups_enabled: Option<String>) -> Self {
        let bcrypt_cost = bcrypt_cost.and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(cost) => Some(cost),
            Err(_) => {
                tracing::warn!("Ignoring invalid BCRYPT_COST value: {}", raw);
                None
            }
        });

        let signups_enabled = signups_enabled
            .map(|raw| !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(true);

        Self {
            bcrypt_cost,
            signups_enabled,
        }
    }

    /// Cost to hash passwords with
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
