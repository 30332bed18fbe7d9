//! Per-element configuration read from `data-config`.
//!
//! ```html
//! <div data-terminal data-config='{"user": "ada", "host": "lab"}'></div>
//! ```

use dhterm_core::ShellConfig;

/// Parse a `data-config` attribute value.
///
/// A missing or invalid value falls back to the defaults, with a warning
/// in the console.
pub fn parse(raw: Option<&str>) -> ShellConfig {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return ShellConfig::default();
    };

    let parsed = serde_json::from_str::<ShellConfig>(raw)
        .map_err(|e| e.to_string())
        .and_then(|config| config.validate().map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring data-config: {e}");
            ShellConfig::default()
        }
    }
}
