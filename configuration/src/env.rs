use std::str::FromStr;

use crate::{AppConfig, ConfigError, LogFormat};

pub const ENV_PREFIX: &str = "TRANSCRIBE_RELAY_";

/// Applies `TRANSCRIBE_RELAY_*` variables on top of file configuration.
/// Unknown keys under the prefix are ignored; empty values clear optional
/// secrets.
pub fn apply_env_overrides<I>(config: &mut AppConfig, vars: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    for (name, value) in vars {
        let Some(key) = name.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        match key {
            "SERVER_HOST" => config.server.host = value,
            "SERVER_PORT" => config.server.port = parse(&name, &value)?,
            "LOGGING_LEVEL" => config.logging.level = value,
            "LOGGING_FORMAT" => config.logging.format = parse_format(&name, &value)?,
            "SPEECH_ENDPOINT" => config.service.speech.endpoint = value,
            "SPEECH_API_KEY" => config.service.speech.api_key = non_empty(value),
            "SPEECH_ACCESS_TOKEN" => config.service.speech.access_token = non_empty(value),
            "SPEECH_REQUEST_TIMEOUT_SECS" => {
                config.service.speech.request_timeout_secs = parse(&name, &value)?
            }
            "HTTP_MAX_UPLOAD_BYTES" => {
                config.service.http.max_upload_bytes = parse(&name, &value)?
            }
            _ => {}
        }
    }
    Ok(())
}

fn parse<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|err: T::Err| ConfigError::InvalidEnv {
        key: key.to_string(),
        message: err.to_string(),
    })
}

fn parse_format(key: &str, value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnv {
            key: key.to_string(),
            message: format!("unknown log format `{other}`"),
        }),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
