/// Account entity - a registered user of the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Opaque identifier assigned by the persistence layer.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Password as stored; the real use case stores an Argon2 hash here.
    pub password: String,
    /// Written by the token-issuing flow, never by signup.
    pub access_token: Option<String>,
}

/// Data needed to create an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Same account data with the password replaced, e.g. by its hash.
    pub fn with_password(self, password: String) -> Self {
        Self { password, ..self }
    }
}
