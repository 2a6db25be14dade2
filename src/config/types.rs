use crate::ConfigError;
use serde::Deserialize;
use url::Url;

/// Default root of the hosted reference document
pub const DEFAULT_BASE_URL: &str = "http://paizo.com/pathfinderRPG/prd/";

/// Main configuration structure for PRD-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Location and markup conventions of the reference document
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Absolute URL of the document root; relative paths resolve against it
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Path of the feat index page, relative to the base URL
    #[serde(rename = "feat-index", default = "default_feat_index")]
    pub feat_index: String,

    /// CSS class marking second-level navigation menus on the root page
    #[serde(rename = "menu-class", default = "default_menu_class")]
    pub menu_class: String,
}

impl SiteConfig {
    /// Parses the configured base URL
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", self.base_url, e))
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            feat_index: default_feat_index(),
            menu_class: default_menu_class(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Loader registry behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    /// Run registered loaders as concurrent tasks instead of one after another
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            concurrent: default_concurrent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_feat_index() -> String {
    "indices/feats.html".to_string()
}

fn default_menu_class() -> String {
    "level-2".to_string()
}

fn default_user_agent() -> String {
    format!("prd-harvest/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_concurrent() -> bool {
    true
}
