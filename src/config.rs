use std::env;
use std::str::FromStr;

pub const DEFAULT_PUID_LEN: usize = 14;
pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub puid_len: usize,
    pub ellipsis: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    Compact,
    Full,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "full" => Ok(LogFormat::Full),
            other => Err(format!("unknown log format {other:?}")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
            puid_len: DEFAULT_PUID_LEN,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

fn parse_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    lookup(key)?.trim().parse().ok()
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Values that do not
    /// parse are ignored and the defaults stay in place.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(level) = lookup("FNKIT_LOG") {
            if !level.trim().is_empty() {
                cfg.log_level = level.trim().to_ascii_lowercase();
            }
        }

        if let Some(fmt) = lookup("FNKIT_LOG_FORMAT") {
            if let Ok(format) = fmt.parse::<LogFormat>() {
                cfg.log_format = format;
            }
        }

        if let Some(len) = parse_usize(&lookup, "FNKIT_PUID_LEN") {
            if len > 0 {
                cfg.puid_len = len;
            }
        }

        if let Some(ellipsis) = lookup("FNKIT_ELLIPSIS") {
            cfg.ellipsis = ellipsis;
        }

        cfg
    }
}
