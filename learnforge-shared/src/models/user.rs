/// User model
///
/// This module provides the User record and its insert/patch shapes. Users
/// hold a platform role, gamification state (points, login streak), and the
/// timestamps the storage layer maintains.
///
/// Usernames and emails are unique by lookup convention only: the storage
/// layer matches them case-insensitively but does not reject duplicates at
/// creation. Callers that need uniqueness check with
/// `get_user_by_username`/`get_user_by_email` before creating.
///
/// # Example
///
/// ```
/// use learnforge_shared::models::user::{CreateUser, UserRole};
///
/// let new_user = CreateUser {
///     username: "student".to_string(),
///     password: "student123".to_string(),
///     email: "student@example.com".to_string(),
///     full_name: "Student User".to_string(),
///     role: Some(UserRole::Student),
/// };
/// assert_eq!(new_user.role, Some(UserRole::Student));
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Platform roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full platform control
    Admin,

    /// Can author and manage courses
    Teacher,

    /// Can enroll in courses and track progress
    Student,
}

impl UserRole {
    /// Converts role to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }

    /// Parses a role from its lowercase string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "teacher" => Some(UserRole::Teacher),
            "student" => Some(UserRole::Student),
            _ => None,
        }
    }

    /// Can create and edit courses
    pub fn can_author_courses(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Teacher)
    }

    /// Has full administrative access
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// User account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    pub id: i32,

    /// Login name (unique by lookup convention, case-insensitive)
    pub username: String,

    /// Password as supplied by the caller
    ///
    /// Hashing is the responsibility of the authentication layer.
    pub password: String,

    /// Email address (unique by lookup convention, case-insensitive)
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Platform role
    pub role: UserRole,

    /// Accumulated gamification points
    pub points: i32,

    /// Consecutive-day login streak
    pub streak: i32,

    /// Last login time; initialized to the creation time
    pub last_login: DateTime<Utc>,

    /// Optional avatar/profile picture URL
    pub avatar_url: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// Role defaults to `Student` when omitted. Points, streak, timestamps, and
/// the avatar URL are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 3, max = 64))]
    pub username: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    /// Platform role; `None` means `Student`
    pub role: Option<UserRole>,
}

/// Input for updating an existing user
///
/// All fields are optional. Only `Some` fields are merged over the stored
/// record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub username: Option<String>,

    pub password: Option<String>,

    pub email: Option<String>,

    pub full_name: Option<String>,

    pub role: Option<UserRole>,

    pub points: Option<i32>,

    pub streak: Option<i32>,

    pub last_login: Option<DateTime<Utc>>,

    /// New avatar URL (use `Some(None)` to clear)
    pub avatar_url: Option<Option<String>>,
}

impl User {
    /// Merges a patch over this record, returning the updated record
    ///
    /// Unspecified fields keep their current values. `id` and `created_at`
    /// never change.
    pub fn merge(&self, patch: &UpdateUser) -> User {
        User {
            id: self.id,
            username: patch.username.clone().unwrap_or_else(|| self.username.clone()),
            password: patch.password.clone().unwrap_or_else(|| self.password.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            full_name: patch
                .full_name
                .clone()
                .unwrap_or_else(|| self.full_name.clone()),
            role: patch.role.unwrap_or(self.role),
            points: patch.points.unwrap_or(self.points),
            streak: patch.streak.unwrap_or(self.streak),
            last_login: patch.last_login.unwrap_or(self.last_login),
            avatar_url: patch
                .avatar_url
                .clone()
                .unwrap_or_else(|| self.avatar_url.clone()),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "student".to_string(),
            password: "student123".to_string(),
            email: "student@example.com".to_string(),
            full_name: "Student User".to_string(),
            role: UserRole::Student,
            points: 0,
            streak: 0,
            last_login: Utc::now(),
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Teacher.as_str(), "teacher");
        assert_eq!(UserRole::Student.as_str(), "student");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(UserRole::from_str("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("teacher"), Some(UserRole::Teacher));
        assert_eq!(UserRole::from_str("student"), Some(UserRole::Student));
        assert_eq!(UserRole::from_str("superuser"), None);
    }

    #[test]
    fn test_role_permissions() {
        assert!(UserRole::Admin.can_author_courses());
        assert!(UserRole::Teacher.can_author_courses());
        assert!(!UserRole::Student.can_author_courses());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Teacher.is_admin());
    }

    #[test]
    fn test_merge_preserves_unspecified_fields() {
        let user = sample_user();
        let patch = UpdateUser {
            points: Some(1248),
            streak: Some(5),
            ..Default::default()
        };

        let updated = user.merge(&patch);
        assert_eq!(updated.points, 1248);
        assert_eq!(updated.streak, 5);
        assert_eq!(updated.username, user.username);
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.role, user.role);
        assert_eq!(updated.created_at, user.created_at);
    }

    #[test]
    fn test_merge_clears_avatar_url() {
        let mut user = sample_user();
        user.avatar_url = Some("avatar.png".to_string());

        let patch = UpdateUser {
            avatar_url: Some(None),
            ..Default::default()
        };
        assert_eq!(user.merge(&patch).avatar_url, None);
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUser {
            username: "student".to_string(),
            password: "student123".to_string(),
            email: "student@example.com".to_string(),
            full_name: "Student User".to_string(),
            role: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = CreateUser {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Teacher).unwrap(), "\"teacher\"");
        let parsed: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, UserRole::Admin);
    }
}
