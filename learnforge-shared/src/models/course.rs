/// Course model
///
/// Courses are authored by teachers (`author_id` references a User) and are
/// composed of ordered modules. The storage layer refreshes `updated_at` on
/// every successful update, regardless of which fields the patch carries;
/// that rule lives in [`Course::merge`] so it can be tested without a store.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Course record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Store-assigned identifier
    pub id: i32,

    pub title: String,

    pub description: String,

    /// Catalog category, e.g. "Programming"
    pub category: String,

    /// Difficulty level, e.g. "Beginner"
    pub level: String,

    /// Expected duration in weeks
    pub duration: i32,

    /// Authoring user (no referential enforcement by the store)
    pub author_id: i32,

    /// Points awarded on completion
    pub points: i32,

    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new course
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub description: String,

    pub category: String,

    pub level: String,

    /// Duration in weeks
    #[validate(range(min = 1))]
    pub duration: i32,

    pub author_id: i32,

    /// Completion points; `None` means 0
    pub points: Option<i32>,

    pub image_url: Option<String>,
}

/// Input for updating an existing course
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    pub title: Option<String>,

    pub description: Option<String>,

    pub category: Option<String>,

    pub level: Option<String>,

    pub duration: Option<i32>,

    pub author_id: Option<i32>,

    pub points: Option<i32>,

    /// New image URL (use `Some(None)` to clear)
    pub image_url: Option<Option<String>>,
}

impl Course {
    /// Merges a patch over this record, always refreshing `updated_at`
    ///
    /// `now` is supplied by the caller so the rule is deterministic under
    /// test. `id` and `created_at` never change.
    pub fn merge(&self, patch: &UpdateCourse, now: DateTime<Utc>) -> Course {
        Course {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            level: patch.level.clone().unwrap_or_else(|| self.level.clone()),
            duration: patch.duration.unwrap_or(self.duration),
            author_id: patch.author_id.unwrap_or(self.author_id),
            points: patch.points.unwrap_or(self.points),
            image_url: patch
                .image_url
                .clone()
                .unwrap_or_else(|| self.image_url.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_course() -> Course {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Course {
            id: 1,
            title: "Web Development Fundamentals".to_string(),
            description: "Learn the basics of web development".to_string(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            duration: 8,
            author_id: 2,
            points: 500,
            image_url: None,
            created_at: t0,
            updated_at: t0,
        }
    }

    #[test]
    fn test_merge_refreshes_updated_at_even_for_empty_patch() {
        let course = sample_course();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let updated = course.merge(&UpdateCourse::default(), now);
        assert_eq!(updated.updated_at, now);
        assert_eq!(updated.created_at, course.created_at);
        assert_eq!(updated.title, course.title);
    }

    #[test]
    fn test_merge_applies_patched_fields_only() {
        let course = sample_course();
        let now = Utc::now();
        let patch = UpdateCourse {
            points: Some(600),
            ..Default::default()
        };

        let updated = course.merge(&patch, now);
        assert_eq!(updated.points, 600);
        assert_eq!(updated.duration, 8);
        assert_eq!(updated.author_id, 2);
    }
}
