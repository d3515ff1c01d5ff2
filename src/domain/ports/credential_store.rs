use crate::domain::error::DomainError;

/// Local storage for the provider API key.
pub trait CredentialStore: Send + Sync {
    fn get_api_key(&self) -> Result<Option<String>, DomainError>;
    fn set_api_key(&self, key: &str) -> Result<(), DomainError>;
    fn clear_api_key(&self) -> Result<(), DomainError>;
}
