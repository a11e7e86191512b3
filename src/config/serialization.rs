//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            r#"# reposeek configuration

# Theme: dark, light
theme = {theme}

# Show the system logs panel at startup (Ctrl+L toggles it)
show_logs = {show_logs}

# Search endpoint and timing
[search]
# Repository-search endpoint; q, page and per_page are appended
api_url = {api_url}
# Quiet period after the last keystroke before a query is sent
debounce_ms = {debounce_ms}
# When scrolling reaches the bottom: "exact" (position equals the bottom)
# or "at-or-past" (position at or beyond the bottom)
scroll_trigger = "{scroll_trigger}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the TUI logs panel or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = toml_string(&self.theme),
            show_logs = self.show_logs,
            api_url = toml_string(&self.search.api_url),
            debounce_ms = self.search.debounce_ms,
            scroll_trigger = self.search.scroll_trigger.as_str(),
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}

/// Quote a value as a TOML basic string, escaping `"`, `\` and control characters
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
