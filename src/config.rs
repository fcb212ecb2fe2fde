use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub log_filter: String,
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("NOTEQUIZ_LOG").unwrap_or_else(|_| "info".to_string()),
            rng_seed: env::var("NOTEQUIZ_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            log_filter: "debug".to_string(),
            rng_seed: Some(7),
        }
    }
}
