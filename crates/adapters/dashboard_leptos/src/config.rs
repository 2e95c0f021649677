//! Configuration injected by the host page.
//!
//! The page that serves the dashboard may override any
//! [`DashboardConfig`] field with a meta tag:
//!
//! ```html
//! <meta name="picoguard:api-base" content="http://pico-bridge.local:5000">
//! <meta name="picoguard:poll-interval-ms" content="2000">
//! ```

use picoguard_app::config::{ConfigError, DashboardConfig};
use wasm_bindgen::JsCast;

/// Prefix of the meta tag names read by [`load`].
pub const META_PREFIX: &str = "picoguard:";

/// Build the configuration from defaults and the page's meta tags.
///
/// Returns the configuration together with every override that was
/// rejected. Logging is not up yet when this runs, so the caller reports
/// them. An override set that fails validation is discarded entirely.
#[must_use]
pub fn load() -> (DashboardConfig, Vec<ConfigError>) {
    let mut config = DashboardConfig::default();
    let mut issues = Vec::new();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return (config, issues);
    };
    let Ok(metas) = document.query_selector_all(&format!("meta[name^='{META_PREFIX}']")) else {
        return (config, issues);
    };

    for index in 0..metas.length() {
        let Some(meta) = metas
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let (Some(name), Some(content)) = (meta.get_attribute("name"), meta.get_attribute("content"))
        else {
            continue;
        };
        let Some(key) = name.strip_prefix(META_PREFIX) else {
            continue;
        };
        if let Err(err) = config.apply_override(key, &content) {
            issues.push(err);
        }
    }

    if let Err(err) = config.validate() {
        issues.push(err);
        config = DashboardConfig::default();
    }
    (config, issues)
}
