use super::{RecordEntry, RecordType};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// A record as written in the records file.
///
/// Fields stay loosely typed so one bad entry can be rejected without
/// failing the whole document.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RecordDefinition {
    #[serde(default)]
    pub domain: String,

    #[serde(default, rename = "type")]
    pub record_type: String,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub ttl: i64,
}

/// Top-level shape of the records file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordsDocument {
    #[serde(default)]
    pub records: Vec<RecordDefinition>,
}

impl RecordsDocument {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl TryFrom<&RecordDefinition> for RecordEntry {
    type Error = DomainError;

    fn try_from(definition: &RecordDefinition) -> Result<Self, Self::Error> {
        let domain = definition.domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidRecord("empty domain".to_string()));
        }

        if definition.record_type.trim().is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "missing record type ({})",
                domain
            )));
        }

        let record_type: RecordType = definition
            .record_type
            .parse()
            .map_err(|e: String| DomainError::InvalidRecord(format!("{} ({})", e, domain)))?;

        let ttl = u32::try_from(definition.ttl).map_err(|_| {
            DomainError::InvalidRecord(format!(
                "ttl {} out of range for {} {}",
                definition.ttl, domain, record_type
            ))
        })?;

        Ok(RecordEntry::new(
            domain,
            record_type,
            definition.value.as_str(),
            ttl,
        ))
    }
}
