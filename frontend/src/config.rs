use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_OTP_COOLDOWN_SECS: u64 = 10;
pub const DEFAULT_ASSIGNABLE_ROLES: &[&str] = &["user1", "user2"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub otp_cooldown_secs: Option<u64>,
    pub assignable_roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub otp_cooldown_secs: u64,
    pub assignable_roles: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::from_runtime(RuntimeConfig::default())
    }
}

impl ResolvedConfig {
    pub fn from_runtime(cfg: RuntimeConfig) -> Self {
        let api_base_url = cfg
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let otp_cooldown_secs = cfg
            .otp_cooldown_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_OTP_COOLDOWN_SECS);
        let assignable_roles = cfg
            .assignable_roles
            .map(|roles| {
                roles
                    .into_iter()
                    .map(|role| role.trim().to_string())
                    .filter(|role| !role.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|roles| !roles.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_ASSIGNABLE_ROLES
                    .iter()
                    .map(|role| role.to_string())
                    .collect()
            });
        Self {
            api_base_url,
            otp_cooldown_secs,
            assignable_roles,
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsValue;

    fn read_key(obj: &JsValue, keys: &[&str]) -> Option<JsValue> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
    }

    fn read_global(name: &str, upper_first: bool) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let order = |upper: &'static str, lower: &'static str| {
            if upper_first {
                [upper, lower]
            } else {
                [lower, upper]
            }
        };
        let api_base_url = read_key(&any, &order("API_BASE_URL", "api_base_url"))
            .and_then(|v| v.as_string());
        let otp_cooldown_secs = read_key(&any, &order("OTP_COOLDOWN_SECS", "otp_cooldown_secs"))
            .and_then(|v| v.as_f64())
            .map(|secs| secs.max(0.0) as u64);
        let assignable_roles = read_key(&any, &order("ASSIGNABLE_ROLES", "assignable_roles"))
            .filter(js_sys::Array::is_array)
            .map(|v| {
                js_sys::Array::from(&v)
                    .iter()
                    .filter_map(|role| role.as_string())
                    .collect::<Vec<_>>()
            });
        Some(RuntimeConfig {
            api_base_url,
            otp_cooldown_secs,
            assignable_roles,
        })
    }

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        // window.__PORTAL_ENV (env.js) wins over window.__PORTAL_CONFIG
        read_global("__PORTAL_ENV", true).or_else(|| read_global("__PORTAL_CONFIG", false))
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| anyhow!("window.location.origin unavailable"))?;
        let resp = reqwest::get(format!("{}/config.json", origin))
            .await
            .context("config.json request failed")?;
        if !resp.status().is_success() {
            return Err(anyhow!("config.json returned {}", resp.status()));
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("config.json is not valid runtime config")
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    if let Some(cfg) = browser::snapshot_from_globals() {
        return cfg;
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::debug!("Falling back to default runtime config: {:#}", err);
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn await_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let resolved = ResolvedConfig::from_runtime(load_runtime_config().await);
    RESOLVED.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

pub fn is_resolved() -> bool {
    RESOLVED.get().is_some()
}

/// Current config without waiting; defaults until `init` has completed.
pub fn current() -> ResolvedConfig {
    if !is_resolved() {
        log::warn!("Runtime config read before it was loaded; using defaults");
    }
    RESOLVED.get().cloned().unwrap_or_default()
}

pub async fn init() {
    let cfg = await_config().await;
    log::info!("Runtime config initialized (api: {})", cfg.api_base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let cfg = ResolvedConfig::default();
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.otp_cooldown_secs, 10);
        assert_eq!(cfg.assignable_roles, vec!["user1", "user2"]);
    }

    #[test]
    fn runtime_values_are_normalized() {
        let cfg = ResolvedConfig::from_runtime(RuntimeConfig {
            api_base_url: Some(" https://api.example.com/ ".into()),
            otp_cooldown_secs: Some(0),
            assignable_roles: Some(vec![" sales ".into(), "".into()]),
        });
        assert_eq!(cfg.api_base_url, "https://api.example.com");
        assert_eq!(cfg.otp_cooldown_secs, DEFAULT_OTP_COOLDOWN_SECS);
        assert_eq!(cfg.assignable_roles, vec!["sales"]);
    }

    #[test]
    fn runtime_config_parses_partial_json() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://x"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://x"));
        assert!(cfg.assignable_roles.is_none());
    }
}
