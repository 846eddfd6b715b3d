use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Identity stored under the `user` key once the session is established.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: Some(email.into()),
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Admin,
            email: Some(email.into()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}
