use crate::error::{Result, ScrapeyError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Output targets named in `storage.outputFormats`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOption {
    Json,
    Xml,
    Excel,
    MongoDb,
    MySql,
}

impl StorageOption {
    /// All supported options
    pub const ALL: [Self; 5] = [Self::Json, Self::Xml, Self::Excel, Self::MongoDb, Self::MySql];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Excel => "excel",
            Self::MongoDb => "mongodb",
            Self::MySql => "mysql",
        }
    }
}

impl fmt::Display for StorageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StorageOption {
    type Err = ScrapeyError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|option| option.name() == wanted)
            .ok_or_else(|| ScrapeyError::UnknownStorageFormat(s.to_string()))
    }
}

/// Persist extracted data in the given format.
///
/// No backend writes anything yet; this always succeeds.
pub fn save_data(data: &HashMap<String, String>, option: StorageOption) -> Result<()> {
    tracing::debug!(fields = data.len(), format = %option, "Saving scraped data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("json".parse::<StorageOption>().unwrap(), StorageOption::Json);
        assert_eq!("XML".parse::<StorageOption>().unwrap(), StorageOption::Xml);
        assert_eq!(" Excel ".parse::<StorageOption>().unwrap(), StorageOption::Excel);
        assert_eq!("mongodb".parse::<StorageOption>().unwrap(), StorageOption::MongoDb);
        assert_eq!("MySQL".parse::<StorageOption>().unwrap(), StorageOption::MySql);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "csv".parse::<StorageOption>().unwrap_err();
        assert!(matches!(err, ScrapeyError::UnknownStorageFormat(ref f) if f == "csv"));
        assert!(err.to_string().contains("Unknown storage format: csv"));
    }

    #[test]
    fn test_display_matches_name() {
        for option in StorageOption::ALL {
            assert_eq!(option.to_string().parse::<StorageOption>().unwrap(), option);
        }
    }

    #[test]
    fn test_save_data_is_noop() {
        let mut data = HashMap::new();
        data.insert("title".to_string(), "Example".to_string());

        for option in StorageOption::ALL {
            assert!(save_data(&data, option).is_ok());
        }
    }
}
