/// Lesson model
///
/// A lesson is an ordered content item within a module. Listings scoped to a
/// module are sorted ascending by `order`.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lesson content kinds
///
/// Serialized under the JSON field name `type` on the lesson record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    /// Written content
    Text,

    /// Video content (see `video_url`)
    Video,

    /// Graded quiz
    Quiz,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Text => "text",
            LessonType::Video => "video",
            LessonType::Quiz => "quiz",
        }
    }
}

/// Lesson record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Store-assigned identifier
    pub id: i32,

    /// Owning module (no referential enforcement by the store)
    pub module_id: i32,

    pub title: String,

    pub content: String,

    #[serde(rename = "type")]
    pub kind: LessonType,

    /// Expected duration in minutes
    pub duration: Option<i32>,

    /// Position within the module, ascending
    pub order: i32,

    /// Points awarded on completion
    pub points: i32,

    pub video_url: Option<String>,
}

/// Input for creating a new lesson
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLesson {
    pub module_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub content: String,

    #[serde(rename = "type")]
    pub kind: LessonType,

    /// Duration in minutes
    pub duration: Option<i32>,

    pub order: i32,

    /// Completion points; `None` means 0
    pub points: Option<i32>,

    pub video_url: Option<String>,
}

/// Input for updating an existing lesson
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLesson {
    pub module_id: Option<i32>,

    pub title: Option<String>,

    pub content: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<LessonType>,

    /// New duration (use `Some(None)` to clear)
    pub duration: Option<Option<i32>>,

    pub order: Option<i32>,

    pub points: Option<i32>,

    /// New video URL (use `Some(None)` to clear)
    pub video_url: Option<Option<String>>,
}

impl Lesson {
    /// Merges a patch over this record
    pub fn merge(&self, patch: &UpdateLesson) -> Lesson {
        Lesson {
            id: self.id,
            module_id: patch.module_id.unwrap_or(self.module_id),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            content: patch
                .content
                .clone()
                .unwrap_or_else(|| self.content.clone()),
            kind: patch.kind.unwrap_or(self.kind),
            duration: patch.duration.unwrap_or(self.duration),
            order: patch.order.unwrap_or(self.order),
            points: patch.points.unwrap_or(self.points),
            video_url: patch
                .video_url
                .clone()
                .unwrap_or_else(|| self.video_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type_field() {
        let lesson = Lesson {
            id: 1,
            module_id: 1,
            title: "Introduction to JavaScript".to_string(),
            content: "JavaScript is a programming language...".to_string(),
            kind: LessonType::Text,
            duration: Some(15),
            order: 1,
            points: 10,
            video_url: None,
        };

        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_lesson_type_as_str() {
        assert_eq!(LessonType::Text.as_str(), "text");
        assert_eq!(LessonType::Video.as_str(), "video");
        assert_eq!(LessonType::Quiz.as_str(), "quiz");
    }
}
