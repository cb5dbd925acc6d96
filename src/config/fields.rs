//! Static field listing for config records.
//!
//! Each record names its fields in declaration order through [`FieldSet`].
//! [`print_non_empty_fields`] walks that listing to dump every populated
//! string leaf, e.g. `URL.Base: https://example.com`.

use super::schema::{
    Config, DataFormattingConfig, ParseRulesConfig, ScrapingOptionsConfig, StorageConfig,
    UrlConfig,
};
use crate::output::{Palette, Tone};
use std::io::{self, Write};

/// One field of a record as seen by the printer
pub enum Field<'a> {
    /// String leaf
    Text(&'a str),
    /// Nested record, walked recursively
    Record(&'a dyn FieldSet),
    /// Numbers, bools and lists. Never printed.
    Other,
}

/// A record whose fields can be listed without reflection
pub trait FieldSet {
    /// Fields in declaration order, keyed by display name
    fn fields(&self) -> Vec<(&'static str, Field<'_>)>;
}

/// Print `{prefix}{name}: {value}` for every non-empty string leaf of `record`.
///
/// Nested records extend the prefix with `{name}.`. Returns the number of
/// lines written.
pub fn print_non_empty_fields<W: Write + ?Sized>(
    w: &mut W,
    palette: Palette,
    prefix: &str,
    record: &dyn FieldSet,
) -> io::Result<usize> {
    let mut printed = 0;
    for (name, field) in record.fields() {
        match field {
            Field::Record(nested) => {
                printed += print_non_empty_fields(w, palette, &format!("{prefix}{name}."), nested)?;
            }
            Field::Text(value) if !value.is_empty() => {
                palette.line(w, &format!("{prefix}{name}: "), value, Tone::BrightYellow)?;
                printed += 1;
            }
            Field::Text(_) | Field::Other => {}
        }
    }
    Ok(printed)
}

impl FieldSet for Config {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("Version", Field::Text(&self.version)),
            ("URL", Field::Record(&self.url)),
            ("ParseRules", Field::Record(&self.parse_rules)),
            ("Storage", Field::Record(&self.storage)),
            ("ScrapingOptions", Field::Record(&self.scraping_options)),
            ("DataFormatting", Field::Record(&self.data_formatting)),
        ]
    }
}

impl FieldSet for UrlConfig {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("Base", Field::Text(&self.base)),
            ("Routes", Field::Other),
            ("IncludeBase", Field::Other),
        ]
    }
}

impl FieldSet for ParseRulesConfig {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("Title", Field::Text(&self.title)),
            ("MetaDescription", Field::Text(&self.meta_description)),
            ("ArticleContent", Field::Text(&self.article_content)),
            ("Author", Field::Text(&self.author)),
            ("DatePublished", Field::Text(&self.date_published)),
        ]
    }
}

impl FieldSet for StorageConfig {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("OutputFormats", Field::Other),
            ("SavePath", Field::Text(&self.save_path)),
            ("FileName", Field::Text(&self.file_name)),
        ]
    }
}

impl FieldSet for ScrapingOptionsConfig {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("MaxDepth", Field::Other),
            ("RateLimit", Field::Other),
            ("RetryAttempts", Field::Other),
            ("UserAgent", Field::Text(&self.user_agent)),
        ]
    }
}

impl FieldSet for DataFormattingConfig {
    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![("CleanWhitespace", Field::Other), ("RemoveHTML", Field::Other)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: String,
        #[allow(dead_code)]
        age: u32,
    }

    impl FieldSet for Person {
        fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
            vec![("Name", Field::Text(&self.name)), ("Age", Field::Other)]
        }
    }

    fn dump(record: &dyn FieldSet) -> (usize, String) {
        let mut buf = Vec::new();
        let count = print_non_empty_fields(&mut buf, Palette::plain(), "", record).unwrap();
        (count, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_only_string_fields_printed() {
        let person = Person {
            name: "Alice".to_string(),
            age: 30,
        };

        let (count, out) = dump(&person);
        assert_eq!(count, 1);
        assert_eq!(out, "Name: Alice\n");
    }

    #[test]
    fn test_empty_string_skipped() {
        let person = Person {
            name: String::new(),
            age: 40,
        };

        let (count, out) = dump(&person);
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_nested_prefix() {
        let mut config = Config::default();
        config.version = "1.0".to_string();
        config.url.base = "http://example.com".to_string();
        config.parse_rules.title = "h1".to_string();
        config.scraping_options.max_depth = 10;

        let (count, out) = dump(&config);
        assert_eq!(count, 3);
        assert_eq!(
            out,
            "Version: 1.0\nURL.Base: http://example.com\nParseRules.Title: h1\n"
        );
    }

    #[test]
    fn test_defaulted_config_lines_in_declaration_order() {
        let config = Config::with_defaults();

        let (_, out) = dump(&config);
        let names: Vec<&str> = out
            .lines()
            .map(|line| line.split(": ").next().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "URL.Base",
                "Storage.SavePath",
                "Storage.FileName",
                "ScrapingOptions.UserAgent"
            ]
        );
    }

    #[test]
    fn test_caller_prefix_is_kept() {
        let person = Person {
            name: "Bob".to_string(),
            age: 25,
        };

        let mut buf = Vec::new();
        print_non_empty_fields(&mut buf, Palette::plain(), "Owner.", &person).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Owner.Name: Bob\n");
    }
}
