//! Role names known to the application.

/// Role of a user account, stored as `role.role_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    Admin,
    User,
}

impl RoleName {
    pub const ALL: [RoleName; 2] = [RoleName::Admin, RoleName::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Parses a stored role name, `None` for anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}
