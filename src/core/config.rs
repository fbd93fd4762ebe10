use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub slack_channel: String,
    pub threads_table: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| format!("SLACK_BOT_TOKEN: {}", e))?,
            slack_channel: env::var("SLACK_CHANNEL")
                .map_err(|e| format!("SLACK_CHANNEL: {}", e))?,
            threads_table: env::var("THREADS_TABLE")
                .map_err(|e| format!("THREADS_TABLE: {}", e))?,
        })
    }
}
