//! Server configuration.
//!
//! Read once from the environment (and `.env` when present). Every setting is
//! optional: a missing webhook URL only fails lead delivery, not startup.

use once_cell::sync::Lazy;
use regex::Regex;

static GTM_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GTM-[A-Z0-9]{4,12}$").expect("GTM pattern is valid"));

static SITE: Lazy<SiteConfig> = Lazy::new(SiteConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// `LEAD_WEBHOOK_URL` — where leads are posted
    pub webhook_url: Option<String>,
    /// `GTM_ID` — Google Tag Manager container rendered in the page head
    pub gtm_id: Option<String>,
    /// `LOG_LEVEL` — default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl SiteConfig {
    /// Process-wide configuration, loaded on first use.
    pub fn global() -> &'static SiteConfig {
        &SITE
    }

    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `LOG_LEVEL` alone, for installing the subscriber before the rest of
    /// the config is loaded and can log.
    pub fn log_level_from_env() -> String {
        let _ = dotenvy::dotenv();
        log_level(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let gtm_id = non_blank(&lookup, "GTM_ID").filter(|id| {
            let ok = GTM_CONTAINER.is_match(id);
            if !ok {
                tracing::warn!(gtm_id = %id, "ignoring malformed GTM_ID");
            }
            ok
        });

        Self {
            webhook_url: non_blank(&lookup, "LEAD_WEBHOOK_URL"),
            gtm_id,
            log_level: log_level(&lookup),
        }
    }
}

fn non_blank(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn log_level(lookup: impl Fn(&str) -> Option<String>) -> String {
    non_blank(lookup, "LOG_LEVEL").unwrap_or_else(|| "info".into())
}
