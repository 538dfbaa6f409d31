use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid domain name '{0}': must be a bare apex domain like example.com")]
    InvalidDomain(String),

    #[error("domain name is empty")]
    EmptyDomain,
}

pub type Result<T> = std::result::Result<T, DomainError>;
