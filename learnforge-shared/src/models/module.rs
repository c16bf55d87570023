/// Module model
///
/// A module is an ordered section within a course. Listings scoped to a
/// course are sorted ascending by `order`.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Course module record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Store-assigned identifier
    pub id: i32,

    /// Owning course (no referential enforcement by the store)
    pub course_id: i32,

    pub title: String,

    pub description: Option<String>,

    /// Position within the course, ascending
    pub order: i32,
}

/// Input for creating a new module
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateModule {
    pub course_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub description: Option<String>,

    pub order: i32,
}

/// Input for updating an existing module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModule {
    pub course_id: Option<i32>,

    pub title: Option<String>,

    /// New description (use `Some(None)` to clear)
    pub description: Option<Option<String>>,

    pub order: Option<i32>,
}

impl Module {
    /// Merges a patch over this record
    pub fn merge(&self, patch: &UpdateModule) -> Module {
        Module {
            id: self.id,
            course_id: patch.course_id.unwrap_or(self.course_id),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            order: patch.order.unwrap_or(self.order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_reorders_without_touching_title() {
        let module = Module {
            id: 3,
            course_id: 1,
            title: "JavaScript Basics".to_string(),
            description: None,
            order: 1,
        };

        let patch = UpdateModule {
            order: Some(2),
            ..Default::default()
        };
        let updated = module.merge(&patch);
        assert_eq!(updated.order, 2);
        assert_eq!(updated.title, "JavaScript Basics");
        assert_eq!(updated.course_id, 1);
    }
}
