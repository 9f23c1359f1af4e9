pub mod completions;
pub mod inspect;
pub mod publish;

use depotcat_catalog::CatalogError;
use depotcat_manifest::ReportError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_PARSE_ERROR: u8 = 2;
pub const EXIT_CATALOG_ERROR: u8 = 3;

/// Failure of a CLI command, tagged with the exit code it maps to.
#[derive(Debug)]
pub enum CommandError {
    Parse(ReportError),
    Catalog(CatalogError),
    Other(String),
}

impl CommandError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Parse(_) => EXIT_PARSE_ERROR,
            CommandError::Catalog(_) => EXIT_CATALOG_ERROR,
            CommandError::Other(_) => EXIT_FAILURE,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Parse(e) => write!(f, "report error: {e}"),
            CommandError::Catalog(e) => write!(f, "catalog error: {e}"),
            CommandError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ReportError> for CommandError {
    fn from(e: ReportError) -> Self {
        CommandError::Parse(e)
    }
}

impl From<CatalogError> for CommandError {
    fn from(e: CatalogError) -> Self {
        CommandError::Catalog(e)
    }
}

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, CommandError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CommandError::Other(format!("JSON serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(EXIT_SUCCESS, EXIT_FAILURE);
        assert_ne!(EXIT_FAILURE, EXIT_PARSE_ERROR);
        assert_ne!(EXIT_PARSE_ERROR, EXIT_CATALOG_ERROR);
    }

    #[test]
    fn parse_errors_map_to_their_exit_code() {
        let err = CommandError::from(ReportError::EmptyTable);
        assert_eq!(err.exit_code(), EXIT_PARSE_ERROR);
        assert!(err.to_string().starts_with("report error:"));
    }

    #[test]
    fn catalog_errors_map_to_their_exit_code() {
        let err = CommandError::from(CatalogError::UnresolvedVersion("42".to_owned()));
        assert_eq!(err.exit_code(), EXIT_CATALOG_ERROR);
        assert!(err.to_string().starts_with("catalog error:"));
    }

    #[test]
    fn json_pretty_serializes() {
        let val = serde_json::json!({"key": "value"});
        let result = json_pretty(&val).unwrap();
        assert!(result.contains("\"key\""));
    }
}
