/// Achievement model
///
/// Achievement definitions with a structured unlock criterion. The store
/// only persists criteria; evaluating them and deciding when to grant is the
/// job of an external collaborator, which records grants via
/// `create_user_achievement`.
///
/// # Criteria wire format
///
/// Criteria serialize as a tagged JSON object:
///
/// ```json
/// { "type": "course_completion", "count": 1 }
/// { "type": "login_streak", "days": 5 }
/// { "type": "quiz_completion", "score": 100, "count": 5 }
/// ```
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Unlock criteria for an achievement
///
/// Only the kinds the platform actually awards are modeled; an unknown
/// `type` tag fails deserialization rather than being carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementCriteria {
    /// Complete `count` courses
    CourseCompletion { count: u32 },

    /// Log in `days` consecutive days
    LoginStreak { days: u32 },

    /// Score at least `score` on `count` quizzes
    QuizCompletion { score: u32, count: u32 },
}

/// Achievement definition record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Store-assigned identifier
    pub id: i32,

    pub title: String,

    pub description: String,

    /// Badge image
    pub image_url: Option<String>,

    pub criteria: AchievementCriteria,

    /// Points awarded when unlocked
    pub points: i32,
}

/// Input for creating a new achievement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievement {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub description: String,

    pub image_url: Option<String>,

    pub criteria: AchievementCriteria,

    /// Unlock points; `None` means 0
    pub points: Option<i32>,
}

/// Input for updating an existing achievement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievement {
    pub title: Option<String>,

    pub description: Option<String>,

    /// New badge image (use `Some(None)` to clear)
    pub image_url: Option<Option<String>>,

    pub criteria: Option<AchievementCriteria>,

    pub points: Option<i32>,
}

impl Achievement {
    /// Merges a patch over this record
    pub fn merge(&self, patch: &UpdateAchievement) -> Achievement {
        Achievement {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            image_url: patch
                .image_url
                .clone()
                .unwrap_or_else(|| self.image_url.clone()),
            criteria: patch
                .criteria
                .clone()
                .unwrap_or_else(|| self.criteria.clone()),
            points: patch.points.unwrap_or(self.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_criteria_wire_format() {
        let streak = AchievementCriteria::LoginStreak { days: 5 };
        assert_eq!(
            serde_json::to_value(&streak).unwrap(),
            json!({ "type": "login_streak", "days": 5 })
        );

        let quiz: AchievementCriteria =
            serde_json::from_value(json!({ "type": "quiz_completion", "score": 100, "count": 5 }))
                .unwrap();
        assert_eq!(
            quiz,
            AchievementCriteria::QuizCompletion {
                score: 100,
                count: 5
            }
        );
    }

    #[test]
    fn test_unknown_criteria_kind_is_rejected() {
        let result: Result<AchievementCriteria, _> =
            serde_json::from_value(json!({ "type": "perfect_attendance", "days": 30 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_swaps_criteria() {
        let achievement = Achievement {
            id: 1,
            title: "First Course Completed".to_string(),
            description: "Complete your first course".to_string(),
            image_url: Some("course-complete-badge.svg".to_string()),
            criteria: AchievementCriteria::CourseCompletion { count: 1 },
            points: 50,
        };

        let patch = UpdateAchievement {
            criteria: Some(AchievementCriteria::CourseCompletion { count: 3 }),
            ..Default::default()
        };
        let updated = achievement.merge(&patch);
        assert_eq!(
            updated.criteria,
            AchievementCriteria::CourseCompletion { count: 3 }
        );
        assert_eq!(updated.points, 50);
    }
}
