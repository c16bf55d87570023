/// User achievement grants
///
/// A grant record: the fact that a user unlocked an achievement, stamped at
/// creation. Grants are never updated; revocation is a delete.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement grant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    /// Store-assigned identifier
    pub id: i32,

    pub user_id: i32,

    pub achievement_id: i32,

    /// Assigned at creation, immutable
    pub unlocked_at: DateTime<Utc>,
}

/// Input for granting an achievement to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserAchievement {
    pub user_id: i32,

    pub achievement_id: i32,
}
