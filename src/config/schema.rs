use serde::{Deserialize, Deserializer};

/// Main configuration structure
///
/// Every key is optional in the JSON file. Missing keys take zero values
/// (empty string, empty list, `0`, `false`) until [`Config::apply_defaults`]
/// fills the ones that have a fallback.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    #[serde(deserialize_with = "null_default")]
    pub url: UrlConfig,
    #[serde(deserialize_with = "null_default")]
    pub parse_rules: ParseRulesConfig,
    #[serde(deserialize_with = "null_default")]
    pub storage: StorageConfig,
    #[serde(deserialize_with = "null_default")]
    pub scraping_options: ScrapingOptionsConfig,
    #[serde(deserialize_with = "null_default")]
    pub data_formatting: DataFormattingConfig,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlConfig {
    #[serde(deserialize_with = "null_default")]
    pub base: String,
    #[serde(deserialize_with = "null_default")]
    pub routes: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub include_base: bool,
}

/// Selector expressions for the fields extracted from each page
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseRulesConfig {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub meta_description: String,
    #[serde(deserialize_with = "null_default")]
    pub article_content: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    #[serde(deserialize_with = "null_default")]
    pub date_published: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(deserialize_with = "null_default")]
    pub output_formats: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub save_path: String,
    #[serde(deserialize_with = "null_default")]
    pub file_name: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrapingOptionsConfig {
    #[serde(deserialize_with = "null_default")]
    pub max_depth: i64,
    #[serde(deserialize_with = "null_default")]
    pub rate_limit: f64,
    /// Not consumed by the crawler yet; fetches are never retried.
    #[serde(deserialize_with = "null_default")]
    pub retry_attempts: i64,
    #[serde(deserialize_with = "null_default")]
    pub user_agent: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataFormattingConfig {
    #[serde(deserialize_with = "null_default")]
    pub clean_whitespace: bool,
    #[serde(rename = "removeHTML", deserialize_with = "null_default")]
    pub remove_html: bool,
}

/// Treat an explicit JSON `null` like a missing key
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Default value functions
pub fn default_base_url() -> String {
    "https://example.com".to_string()
}
pub fn default_routes() -> Vec<String> {
    vec!["/".to_string()]
}
pub const fn default_max_depth() -> i64 {
    2
}
pub const fn default_rate_limit() -> f64 {
    1.5
}
pub const fn default_retry_attempts() -> i64 {
    3
}
pub fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36"
        .to_string()
}
pub fn default_output_formats() -> Vec<String> {
    vec!["json".to_string()]
}
pub fn default_save_path() -> String {
    "output/".to_string()
}
pub fn default_file_name() -> String {
    "scraped_data".to_string()
}

impl Config {
    /// Build a config with every defaulted field filled in
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        config.apply_defaults();
        config
    }

    /// Replace zero-valued fields with their fallback values.
    ///
    /// Fields that already hold a non-zero value are left alone, so applying
    /// this twice is the same as applying it once.
    pub fn apply_defaults(&mut self) -> &mut Self {
        if self.url.base.is_empty() {
            self.url.base = default_base_url();
        }
        if self.url.routes.is_empty() {
            self.url.routes = default_routes();
        }

        let options = &mut self.scraping_options;
        if options.max_depth == 0 {
            options.max_depth = default_max_depth();
        }
        if options.rate_limit == 0.0 {
            options.rate_limit = default_rate_limit();
        }
        if options.retry_attempts == 0 {
            options.retry_attempts = default_retry_attempts();
        }
        if options.user_agent.is_empty() {
            options.user_agent = default_user_agent();
        }

        let storage = &mut self.storage;
        if storage.output_formats.is_empty() {
            storage.output_formats = default_output_formats();
        }
        if storage.save_path.is_empty() {
            storage.save_path = default_save_path();
        }
        if storage.file_name.is_empty() {
            storage.file_name = default_file_name();
        }

        self
    }
}
