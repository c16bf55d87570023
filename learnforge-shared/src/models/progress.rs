/// Progress model
///
/// Per-lesson completion state for a user. The (user_id, lesson_id) pair is
/// conceptually unique and looked up via `get_progress(user_id, lesson_id)`.
/// The `completed_at` rule is the same as for enrollments: set once on the
/// false -> true transition, never refreshed, never cleared.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lesson progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Store-assigned identifier
    pub id: i32,

    pub user_id: i32,

    pub lesson_id: i32,

    pub completed: bool,

    /// Set on the first transition of `completed` to true, never changed after
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for creating a new progress record
///
/// Always starts not completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgress {
    pub user_id: i32,

    pub lesson_id: i32,
}

/// Input for updating an existing progress record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgress {
    pub completed: Option<bool>,
}

impl Progress {
    /// Merges a patch over this record, applying the completion rule
    pub fn merge(&self, patch: &UpdateProgress, now: DateTime<Utc>) -> Progress {
        let completed_at = if patch.completed == Some(true) && !self.completed {
            Some(now)
        } else {
            self.completed_at
        };

        Progress {
            id: self.id,
            user_id: self.user_id,
            lesson_id: self.lesson_id,
            completed: patch.completed.unwrap_or(self.completed),
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_completed_at_set_exactly_once() {
        let progress = Progress {
            id: 1,
            user_id: 3,
            lesson_id: 2,
            completed: false,
            completed_at: None,
        };
        let t1 = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let complete = UpdateProgress {
            completed: Some(true),
        };

        let first = progress.merge(&complete, t1);
        assert_eq!(first.completed_at, Some(t1));

        let second = first.merge(&complete, t2);
        assert_eq!(second.completed_at, Some(t1));

        let reverted = second.merge(
            &UpdateProgress {
                completed: Some(false),
            },
            t2,
        );
        assert!(!reverted.completed);
        assert_eq!(reverted.completed_at, Some(t1));
    }
}
