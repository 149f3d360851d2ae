use std::env;
use std::fs;
use std::path::Path;

use toml::Value;
use voicecart_core::config::{resolve_config_path, AppConfig, LoadOptions};

struct Field {
    key: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in fields(&config) {
        let source = field_source(
            field.key,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key, &field.value, source));
    }

    lines.join("\n")
}

fn fields(config: &AppConfig) -> Vec<Field> {
    vec![
        Field {
            key: "catalog.path",
            env_keys: &["VOICECART_CATALOG_PATH"],
            value: config.catalog.path.display().to_string(),
        },
        Field {
            key: "server.bind_address",
            env_keys: &["VOICECART_SERVER_BIND_ADDRESS"],
            value: config.server.bind_address.clone(),
        },
        Field {
            key: "server.port",
            env_keys: &["VOICECART_SERVER_PORT"],
            value: config.server.port.to_string(),
        },
        Field {
            key: "server.cors_enabled",
            env_keys: &["VOICECART_SERVER_CORS_ENABLED"],
            value: config.server.cors_enabled.to_string(),
        },
        Field {
            key: "assistant.suggestion_limit",
            env_keys: &["VOICECART_ASSISTANT_SUGGESTION_LIMIT"],
            value: config.assistant.suggestion_limit.to_string(),
        },
        Field {
            key: "logging.level",
            env_keys: &["VOICECART_LOGGING_LEVEL", "VOICECART_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        Field {
            key: "logging.format",
            env_keys: &["VOICECART_LOGGING_FORMAT", "VOICECART_LOG_FORMAT"],
            value: format!("{:?}", config.logging.format),
        },
    ]
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
