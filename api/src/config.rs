//! Endpoint configuration for the registration client. Values come from a
//! build-time environment variable with an optional runtime override read from
//! `window.SIGNFORM_CONFIG` on the web, so static deployments can point at a
//! different API without rebuilding. Configuration values are public; do not
//! store secrets here.

use url::Url;

use crate::error::ApiError;

/// Path of the registration endpoint, relative to the API base URL.
pub const REGISTER_PATH: &str = "/api/register";
/// Default request timeout (milliseconds) applied to the registration call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Base URL used by native builds when nothing else is configured.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_FALLBACK_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub register_path: String,
    pub timeout_ms: u64,
}

impl ApiConfig {
    /// Loads config from the build-time environment and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("SIGNFORM_API_BASE_URL")
                .and_then(normalize_value)
                .unwrap_or_default(),
            ..Self::default()
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        if config.api_base_url.is_empty() {
            config.api_base_url = fallback_base_url();
        }

        config
    }

    /// Absolute URL of the registration endpoint.
    ///
    /// # Errors
    /// Returns [`ApiError::Endpoint`] if the base URL cannot be parsed or joined.
    pub fn register_url(&self) -> Result<Url, ApiError> {
        endpoint_url(&self.api_base_url, &self.register_path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            register_path: REGISTER_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Joins `path` onto `base_url`, keeping any path prefix the base already has.
///
/// # Errors
/// Returns [`ApiError::Endpoint`] when `base_url` is not an absolute http(s) URL.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let base = base_url.trim().trim_end_matches('/');
    let mut url =
        Url::parse(&format!("{base}/")).map_err(|err| ApiError::Endpoint(format!("{base}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(ApiError::Endpoint(format!("unsupported scheme {scheme}"))),
    }

    url = url
        .join(path.trim().trim_start_matches('/'))
        .map_err(|err| ApiError::Endpoint(format!("{path}: {err}")))?;

    Ok(url)
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut ApiConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SIGNFORM_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    let api_base_url = Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
        .and_then(|value| normalize_value(&value));

    Some(RuntimeConfig { api_base_url })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn fallback_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn fallback_base_url() -> String {
    NATIVE_FALLBACK_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://auth.example.test "),
            Some("https://auth.example.test".to_string())
        );
    }

    #[test]
    fn runtime_override_replaces_base_url() {
        let mut config = ApiConfig {
            api_base_url: "https://default.test".to_string(),
            ..ApiConfig::default()
        };
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_value("https://override.test"),
            },
        );
        assert_eq!(config.api_base_url, "https://override.test");
    }

    #[test]
    fn blank_runtime_override_is_ignored() {
        let mut config = ApiConfig {
            api_base_url: "https://default.test".to_string(),
            ..ApiConfig::default()
        };
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_value("  "),
            },
        );
        assert_eq!(config.api_base_url, "https://default.test");
    }

    #[test]
    fn load_always_yields_a_base_url() {
        let config = ApiConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert_eq!(config.register_path, REGISTER_PATH);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn endpoint_url_joins_with_and_without_slashes() {
        let a = endpoint_url("http://localhost:8080", "/api/register").unwrap();
        let b = endpoint_url("http://localhost:8080/", "api/register").unwrap();
        assert_eq!(a.as_str(), "http://localhost:8080/api/register");
        assert_eq!(a, b);
    }

    #[test]
    fn endpoint_url_keeps_base_prefix() {
        let url = endpoint_url("https://example.test/v1", "/api/register").unwrap();
        assert_eq!(url.as_str(), "https://example.test/v1/api/register");
    }

    #[test]
    fn endpoint_url_rejects_unsupported_scheme() {
        let err = endpoint_url("ftp://example.test", REGISTER_PATH).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn endpoint_url_rejects_relative_base() {
        assert!(matches!(
            endpoint_url("", REGISTER_PATH),
            Err(ApiError::Endpoint(_))
        ));
    }
}
