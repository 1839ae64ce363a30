use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SITE_FILE: &str = "site.json";

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::load().unwrap_or_else(|err| {
        log::error!("falling back to default site config: {err}");
        SiteConfig::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
struct Content;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Site content file {0} not found")]
    NotFound(&'static str),
    #[error("Couldn't parse site content: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: Owner,
    pub nav: Vec<NavItem>,
    pub about: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub timing: Timing,
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let file = Content::get(SITE_FILE).ok_or(ConfigError::NotFound(SITE_FILE))?;
        Self::from_json(&String::from_utf8_lossy(&file.data))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Section ids in nav order, used for active-link tracking.
    pub fn section_ids(&self) -> Vec<String> {
        self.nav.iter().map(|n| n.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Delays and thresholds for the page effects. All durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub submit_delay_ms: u64,
    pub banner_ttl_ms: u64,
    pub typewriter_start_ms: u64,
    pub typewriter_char_ms: u64,
    pub typewriter_cursor_ms: u64,
    pub navbar_height: f64,
    pub navbar_scrolled_at: f64,
    pub active_link_offset: f64,
    pub parallax_rate: f64,
    pub parallax_debounce_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            banner_ttl_ms: 5000,
            typewriter_start_ms: 1000,
            typewriter_char_ms: 150,
            typewriter_cursor_ms: 3000,
            navbar_height: 80.0,
            navbar_scrolled_at: 50.0,
            active_link_offset: 100.0,
            parallax_rate: -0.3,
            parallax_debounce_ms: 10.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl Timing {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn banner_ttl(&self) -> Duration {
        Duration::from_millis(self.banner_ttl_ms)
    }
}

/// Year the site was built, stamped by build.rs.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
