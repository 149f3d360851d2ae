use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("cart quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("bad gateway: {message}")]
    BadGateway { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn internal(message: impl Into<String>, correlation_id: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), correlation_id: correlation_id.into() }
    }

    /// Detail returned to the client. Upstream error text is passed through unredacted.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::BadGateway { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::BadGateway { correlation_id, .. }
            | Self::Internal { correlation_id, .. } => correlation_id,
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::BadGateway { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::InvalidInput(message) => {
                Self::BadRequest { message, correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Domain(error) => Self::BadRequest {
                message: error.to_string(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Catalog(error) => Self::BadGateway {
                message: format!("API error {error}"),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::catalog::CatalogError;
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn invalid_input_maps_to_bad_request_with_correlation_id() {
        let interface =
            ApplicationError::InvalidInput("No text".to_owned()).into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref message,
                ref correlation_id,
            } if message == "No text" && correlation_id == "req-1"
        ));
    }

    #[test]
    fn domain_error_maps_to_bad_request() {
        let interface =
            ApplicationError::from(DomainError::InvalidQuantity(0)).into_interface("req-2");

        assert!(matches!(interface, InterfaceError::BadRequest { .. }));
        assert!(interface.message().contains("at least 1"));
    }

    #[test]
    fn catalog_error_maps_to_bad_gateway_with_raw_detail() {
        let error = CatalogError::Read {
            path: PathBuf::from("products.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let interface = ApplicationError::from(error).into_interface("req-3");

        assert!(matches!(interface, InterfaceError::BadGateway { .. }));
        assert!(interface.message().starts_with("API error "));
        assert!(interface.message().contains("products.json"));
        assert!(interface.message().contains("No such file"));
        assert_eq!(interface.correlation_id(), "req-3");
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface =
            ApplicationError::Configuration("bad catalog path".to_owned()).into_interface("req-4");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.message(), "bad catalog path");
    }
}
