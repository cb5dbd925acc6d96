//! Partial configs layered on top of a loaded [`Config`].
//!
//! Every field of a [`ConfigOverride`] is an `Option`. `None` leaves the
//! target untouched; `Some(value)` always replaces it, including with empty
//! strings, empty lists, `0` or `false`. Sections are walked in declaration
//! order and each replaced field is reported as an [`AppliedOverride`].

use super::schema::Config;
use serde::Deserialize;
use std::fmt;

/// Desired changes to a [`Config`], usually built from CLI flags
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOverride {
    pub version: Option<String>,
    pub url: Option<UrlOverride>,
    pub parse_rules: Option<ParseRulesOverride>,
    pub storage: Option<StorageOverride>,
    pub scraping_options: Option<ScrapingOptionsOverride>,
    pub data_formatting: Option<DataFormattingOverride>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlOverride {
    pub base: Option<String>,
    pub routes: Option<Vec<String>>,
    pub include_base: Option<bool>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseRulesOverride {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub article_content: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageOverride {
    pub output_formats: Option<Vec<String>>,
    pub save_path: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrapingOptionsOverride {
    pub max_depth: Option<i64>,
    pub rate_limit: Option<f64>,
    pub retry_attempts: Option<i64>,
    pub user_agent: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataFormattingOverride {
    pub clean_whitespace: Option<bool>,
    #[serde(rename = "removeHTML")]
    pub remove_html: Option<bool>,
}

/// A single field replaced by [`ConfigOverride::apply`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedOverride {
    /// Dotted display path, e.g. `ScrapingOptions.MaxDepth`
    pub field: String,
    /// The new value as shown to the user
    pub value: String,
}

impl fmt::Display for AppliedOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Overriding {}: {}", self.field, self.value)
    }
}

/// How an override value is shown in diagnostics
trait OverrideValue: Clone {
    fn render(&self) -> String;
}

impl OverrideValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl OverrideValue for i64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl OverrideValue for f64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl OverrideValue for bool {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl OverrideValue for Vec<String> {
    fn render(&self) -> String {
        format!("[{}]", self.join(", "))
    }
}

/// Collects changes for one section
struct Section<'a> {
    name: &'static str,
    applied: &'a mut Vec<AppliedOverride>,
}

impl Section<'_> {
    fn set<T: OverrideValue>(&mut self, field: &str, target: &mut T, value: Option<&T>) {
        let Some(value) = value else {
            return;
        };
        *target = value.clone();

        let field = if self.name.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.name)
        };
        let rendered = value.render();
        tracing::info!(field = %field, value = %rendered, "Applied config override");
        self.applied.push(AppliedOverride {
            field,
            value: rendered,
        });
    }
}

impl ConfigOverride {
    /// Copy every present field onto `config`.
    ///
    /// Returns one entry per replaced field, in declaration order. A present
    /// value is applied even when it equals the current one.
    pub fn apply(&self, config: &mut Config) -> Vec<AppliedOverride> {
        let mut applied = Vec::new();

        Section {
            name: "",
            applied: &mut applied,
        }
        .set("Version", &mut config.version, self.version.as_ref());

        if let Some(url) = &self.url {
            let target = &mut config.url;
            let mut section = Section {
                name: "URL",
                applied: &mut applied,
            };
            section.set("Base", &mut target.base, url.base.as_ref());
            section.set("Routes", &mut target.routes, url.routes.as_ref());
            section.set(
                "IncludeBase",
                &mut target.include_base,
                url.include_base.as_ref(),
            );
        }

        if let Some(rules) = &self.parse_rules {
            let target = &mut config.parse_rules;
            let mut section = Section {
                name: "ParseRules",
                applied: &mut applied,
            };
            section.set("Title", &mut target.title, rules.title.as_ref());
            section.set(
                "MetaDescription",
                &mut target.meta_description,
                rules.meta_description.as_ref(),
            );
            section.set(
                "ArticleContent",
                &mut target.article_content,
                rules.article_content.as_ref(),
            );
            section.set("Author", &mut target.author, rules.author.as_ref());
            section.set(
                "DatePublished",
                &mut target.date_published,
                rules.date_published.as_ref(),
            );
        }

        if let Some(storage) = &self.storage {
            let target = &mut config.storage;
            let mut section = Section {
                name: "Storage",
                applied: &mut applied,
            };
            section.set(
                "OutputFormats",
                &mut target.output_formats,
                storage.output_formats.as_ref(),
            );
            section.set("SavePath", &mut target.save_path, storage.save_path.as_ref());
            section.set("FileName", &mut target.file_name, storage.file_name.as_ref());
        }

        if let Some(options) = &self.scraping_options {
            let target = &mut config.scraping_options;
            let mut section = Section {
                name: "ScrapingOptions",
                applied: &mut applied,
            };
            section.set("MaxDepth", &mut target.max_depth, options.max_depth.as_ref());
            section.set("RateLimit", &mut target.rate_limit, options.rate_limit.as_ref());
            section.set(
                "RetryAttempts",
                &mut target.retry_attempts,
                options.retry_attempts.as_ref(),
            );
            section.set("UserAgent", &mut target.user_agent, options.user_agent.as_ref());
        }

        if let Some(formatting) = &self.data_formatting {
            let target = &mut config.data_formatting;
            let mut section = Section {
                name: "DataFormatting",
                applied: &mut applied,
            };
            section.set(
                "CleanWhitespace",
                &mut target.clean_whitespace,
                formatting.clean_whitespace.as_ref(),
            );
            section.set(
                "RemoveHTML",
                &mut target.remove_html,
                formatting.remove_html.as_ref(),
            );
        }

        applied
    }
}
