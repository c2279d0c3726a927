use serde::{Deserialize, Serialize};

/// Main configuration structure for the simulators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logistics service configuration
    #[serde(default)]
    pub logistics: LogisticsConfig,

    /// Telephony service configuration
    #[serde(default)]
    pub telephony: TelephonyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logistics: LogisticsConfig::default(),
            telephony: TelephonyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logistics service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LogisticsConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_logistics_port")]
    pub port: u16,

    /// Lifetime of issued bearer tokens, in seconds
    #[serde(default = "default_logistics_token_ttl")]
    pub token_ttl_secs: i64,
}

const fn default_logistics_port() -> u16 {
    8080
}

const fn default_logistics_token_ttl() -> i64 {
    86_400
}

impl Default for LogisticsConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_logistics_port(),
            token_ttl_secs: default_logistics_token_ttl(),
        }
    }
}

/// Telephony service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TelephonyConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_telephony_port")]
    pub port: u16,

    /// Lifetime of issued bearer tokens, in seconds
    #[serde(default = "default_telephony_token_ttl")]
    pub token_ttl_secs: i64,

    /// Delay before a placed call transitions ringing -> in_progress
    #[serde(default = "default_answer_delay_ms")]
    pub answer_delay_ms: u64,
}

const fn default_telephony_port() -> u16 {
    9000
}

const fn default_telephony_token_ttl() -> i64 {
    3600
}

const fn default_answer_delay_ms() -> u64 {
    2000
}

impl Default for TelephonyConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_telephony_port(),
            token_ttl_secs: default_telephony_token_ttl(),
            answer_delay_ms: default_answer_delay_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
