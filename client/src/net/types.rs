//! Wire DTOs for the job-board REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Roles are a closed enum so
//! guard code can match exhaustively instead of comparing strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker.
    Candidate,
    /// Company account that posts jobs.
    Employer,
    /// Site moderator.
    Admin,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Self; 3] = [Self::Candidate, Self::Employer, Self::Admin];

    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "candidate" => Some(Self::Candidate),
            "employer" => Some(Self::Employer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Dashboard route for this role. Also the fallback when a role guard denies.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Candidate => "/dashboard/candidate",
            Self::Employer => "/dashboard/employer",
            Self::Admin => "/dashboard/admin",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Job seeker",
            Self::Employer => "Employer",
            Self::Admin => "Administrator",
        }
    }
}

/// The signed-in user as returned by `GET /auth/{token}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account role.
    pub role: Role,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Role-specific part of a registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegisterProfile {
    Candidate {
        headline: String,
        location: String,
    },
    Employer {
        #[serde(rename = "companyName")]
        company_name: String,
        #[serde(rename = "companyWebsite")]
        company_website: String,
    },
}

impl RegisterProfile {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Candidate { .. } => Role::Candidate,
            Self::Employer { .. } => Role::Employer,
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: RegisterProfile,
}

/// Body of `POST /auth/forgot-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
