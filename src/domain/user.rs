// src/domain/user.rs
use serde::{Deserialize, Serialize};

/// Who is using the app. Identity is minted fresh at login/register
/// (any name, self-declared role) and is advisory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Resident,
    Collector,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Collector => "collector",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "resident" => Some(Role::Resident),
            "collector" => Some(Role::Collector),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Label shown in the navbar and on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Resident => "Resident",
            Role::Collector => "Collector",
            Role::Admin => "Admin",
        }
    }
}
