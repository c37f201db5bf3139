use async_trait::async_trait;
use relay_dns_application::ports::RecordSource;
use relay_dns_domain::{DomainError, RecordSet, RecordsDocument};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Records file in TOML form:
///
/// ```toml
/// [[records]]
/// domain = "test.local"
/// type = "A"
/// value = "10.0.0.5"
/// ttl = 60
/// ```
pub struct TomlRecordSource {
    path: PathBuf,
    location: String,
}

impl TomlRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses file contents; entries that fail validation are logged and
    /// left out.
    pub fn parse(&self, contents: &str) -> Result<RecordSet, DomainError> {
        let document =
            RecordsDocument::from_toml(contents).map_err(|e| DomainError::RecordSourceParse {
                path: self.location.clone(),
                reason: e.to_string(),
            })?;

        let (set, rejected) = RecordSet::from_definitions(&document.records);
        for (index, error) in &rejected.entries {
            warn!(source = %self.location, entry = index, error = %error, "Skipping record");
        }

        Ok(set)
    }

    /// Writes an empty records file, creating parent directories.
    async fn create_placeholder(&self) -> Result<(), DomainError> {
        let io_error = |e: std::io::Error| DomainError::RecordSourceIo {
            path: self.location.clone(),
            reason: e.to_string(),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let placeholder =
            RecordsDocument::default()
                .to_toml()
                .map_err(|e| DomainError::RecordSourceIo {
                    path: self.location.clone(),
                    reason: e.to_string(),
                })?;

        tokio::fs::write(&self.path, placeholder)
            .await
            .map_err(io_error)
    }
}

#[async_trait]
impl RecordSource for TomlRecordSource {
    async fn load(&self) -> Result<RecordSet, DomainError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => self.parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_placeholder().await?;
                info!(source = %self.location, "Records file not found, created an empty one");
                Ok(RecordSet::empty())
            }
            Err(e) => Err(DomainError::RecordSourceIo {
                path: self.location.clone(),
                reason: e.to_string(),
            }),
        }
    }

    fn location(&self) -> &str {
        &self.location
    }
}
