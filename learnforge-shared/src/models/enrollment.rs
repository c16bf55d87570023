/// Enrollment model
///
/// An enrollment ties a user to a course and tracks overall progress. The
/// (user_id, course_id) pair is conceptually unique; the store looks it up
/// via `get_enrollment(user_id, course_id)` but does not reject duplicate
/// creation.
///
/// # Completion state machine
///
/// ```text
/// completed=false, completed_at=None
///     --(patch completed=true)--> completed=true, completed_at=Some(now)
///
/// completed_at is set exactly once, on the false -> true transition.
/// Re-completing keeps the original timestamp; un-completing keeps it too.
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Enrollment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Store-assigned identifier
    pub id: i32,

    pub user_id: i32,

    pub course_id: i32,

    /// Completion percentage, 0-100
    pub progress: i32,

    pub completed: bool,

    pub certificate_issued: bool,

    pub enrolled_at: DateTime<Utc>,

    /// Set on the first transition of `completed` to true, never changed after
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for creating a new enrollment
///
/// Progress starts at 0, not completed, no certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollment {
    pub user_id: i32,

    pub course_id: i32,
}

/// Input for updating an existing enrollment
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnrollment {
    /// Completion percentage, 0-100
    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i32>,

    pub completed: Option<bool>,

    pub certificate_issued: Option<bool>,
}

impl Enrollment {
    /// Merges a patch over this record, applying the completion rule
    ///
    /// `completed_at` is set to `now` only when the patch flips `completed`
    /// from false to true; every other combination leaves it untouched.
    pub fn merge(&self, patch: &UpdateEnrollment, now: DateTime<Utc>) -> Enrollment {
        let completed = patch.completed.unwrap_or(self.completed);
        let completed_at = if patch.completed == Some(true) && !self.completed {
            Some(now)
        } else {
            self.completed_at
        };

        Enrollment {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
            progress: patch.progress.unwrap_or(self.progress),
            completed,
            certificate_issued: patch.certificate_issued.unwrap_or(self.certificate_issued),
            enrolled_at: self.enrolled_at,
            completed_at,
        }
    }
}
