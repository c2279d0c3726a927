use thiserror::Error;

/// Request-scoped failures surfaced to API clients.
///
/// Every variant renders to the exact wire message the real vendor APIs
/// return; the HTTP status mapping lives in the adapter layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization header absent or not a bearer credential.
    #[error("Unauthorized")]
    MissingBearer,

    /// Presented token is unknown or past its expiry.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login credentials did not match any seeded record.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// OAuth grant type other than client_credentials.
    #[error("Invalid grant type")]
    InvalidGrant,

    /// Unknown record id for the named entity.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Required request field absent or empty.
    #[error("{0} required")]
    MissingField(&'static str),

    /// Operation not valid for the record's current state.
    #[error("{0}")]
    InvalidState(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(ApiError::MissingBearer.to_string(), "Unauthorized");
        assert_eq!(
            ApiError::InvalidToken.to_string(),
            "Invalid or expired token"
        );
        assert_eq!(ApiError::NotFound("Shipment").to_string(), "Shipment not found");
        assert_eq!(
            ApiError::MissingField("Phone number").to_string(),
            "Phone number required"
        );
        assert_eq!(
            ApiError::InvalidState("Call already ended").to_string(),
            "Call already ended"
        );
    }
}
