use crate::errors::{PricefeedError, PricefeedResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> PricefeedResult<Self> {
        dotenvy::dotenv().ok();

        let http_timeout_secs = match std::env::var("PRICEFEED_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                PricefeedError::Config(format!(
                    "PRICEFEED_HTTP_TIMEOUT_SECS is not a number: {}",
                    raw
                ))
            })?,
            Err(_) => 30,
        };

        let user_agent = std::env::var("PRICEFEED_USER_AGENT")
            .unwrap_or_else(|_| format!("pricefeed/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            http_timeout_secs,
            user_agent,
        })
    }
}
