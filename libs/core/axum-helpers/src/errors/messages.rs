//! Standard error messages for consistent error responses.

pub const INVALID_JSON: &str = "JSON inválido";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";
