use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::users::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
}

impl RegisterRequest {
    /// Trimmed, non-empty display name.
    pub fn validated_name(self) -> Result<String, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name must not be empty"));
        }
        Ok(name.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        let req = RegisterRequest { name: "   ".into() };
        assert!(matches!(req.validated_name(), Err(AppError::Validation(_))));
    }

    #[test]
    fn trims_names() {
        let req = RegisterRequest {
            name: "  Enzo Pavanelli ".into(),
        };
        assert_eq!(req.validated_name().unwrap(), "Enzo Pavanelli");
    }
}
