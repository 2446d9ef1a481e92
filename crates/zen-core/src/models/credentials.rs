use serde::Serialize;

/// Body of `POST /api/auth/token/`
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /api/register/`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    /// Credentials used for the automatic login after registration
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(&self.email, &self.password)
    }
}
