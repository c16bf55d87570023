/// Storage contract for LearnForge domain state
///
/// One method per domain operation, grouped by entity. The contract is
/// deliberately non-throwing: lookups and updates signal absence with
/// `None`, deletes with `false`. There is no conflict kind — duplicate
/// usernames, emails, or unique pairs are not rejected here; callers that
/// need uniqueness check with the corresponding lookup before creating.
///
/// Implementations hand out owned records, never references into their own
/// state, so callers can hold results across later mutations.
use async_trait::async_trait;

use learnforge_shared::models::{
    Achievement, Certificate, Course, CreateAchievement, CreateCertificate, CreateCourse,
    CreateEnrollment, CreateLesson, CreateModule, CreateProgress, CreateUser,
    CreateUserAchievement, Enrollment, Lesson, Module, Progress, UpdateAchievement, UpdateCourse,
    UpdateEnrollment, UpdateLesson, UpdateModule, UpdateProgress, UpdateUser, User,
    UserAchievement,
};

/// Async storage abstraction over the nine LearnForge entity types
///
/// Object-safe so consumers can hold `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users

    /// Looks up a user by id
    async fn get_user(&self, id: i32) -> Option<User>;

    /// Looks up a user by username, case-insensitively
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Looks up a user by email, case-insensitively
    async fn get_user_by_email(&self, email: &str) -> Option<User>;

    /// Creates a user, assigning id and defaults (points=0, streak=0,
    /// role=Student when unspecified, last_login=created_at=now)
    async fn create_user(&self, data: CreateUser) -> User;

    /// Merges a patch over an existing user; `None` if the id is absent
    async fn update_user(&self, id: i32, data: UpdateUser) -> Option<User>;

    /// All users, unordered snapshot
    async fn list_users(&self) -> Vec<User>;

    // Courses

    async fn get_course(&self, id: i32) -> Option<Course>;

    /// All courses, unordered snapshot
    async fn list_courses(&self) -> Vec<Course>;

    /// Courses authored by the given user
    async fn list_courses_by_author(&self, author_id: i32) -> Vec<Course>;

    async fn create_course(&self, data: CreateCourse) -> Course;

    /// Merges a patch over an existing course; every successful update
    /// refreshes `updated_at`
    async fn update_course(&self, id: i32, data: UpdateCourse) -> Option<Course>;

    /// Removes a course; `true` if a record existed
    async fn delete_course(&self, id: i32) -> bool;

    // Modules

    async fn get_module(&self, id: i32) -> Option<Module>;

    /// Modules in a course, sorted ascending by `order`
    async fn list_modules_by_course(&self, course_id: i32) -> Vec<Module>;

    async fn create_module(&self, data: CreateModule) -> Module;

    async fn update_module(&self, id: i32, data: UpdateModule) -> Option<Module>;

    async fn delete_module(&self, id: i32) -> bool;

    // Lessons

    async fn get_lesson(&self, id: i32) -> Option<Lesson>;

    /// Lessons in a module, sorted ascending by `order`
    async fn list_lessons_by_module(&self, module_id: i32) -> Vec<Lesson>;

    async fn create_lesson(&self, data: CreateLesson) -> Lesson;

    async fn update_lesson(&self, id: i32, data: UpdateLesson) -> Option<Lesson>;

    async fn delete_lesson(&self, id: i32) -> bool;

    // Enrollments

    /// Composite-key lookup; first match wins if duplicates exist
    async fn get_enrollment(&self, user_id: i32, course_id: i32) -> Option<Enrollment>;

    async fn list_enrollments_by_user(&self, user_id: i32) -> Vec<Enrollment>;

    async fn list_enrollments_by_course(&self, course_id: i32) -> Vec<Enrollment>;

    async fn create_enrollment(&self, data: CreateEnrollment) -> Enrollment;

    /// Merges a patch over an existing enrollment, applying the completion
    /// rule: `completed_at` is stamped once, on the false -> true transition
    async fn update_enrollment(&self, id: i32, data: UpdateEnrollment) -> Option<Enrollment>;

    async fn delete_enrollment(&self, id: i32) -> bool;

    // Progress

    /// Composite-key lookup; first match wins if duplicates exist
    async fn get_progress(&self, user_id: i32, lesson_id: i32) -> Option<Progress>;

    async fn list_progress_by_user(&self, user_id: i32) -> Vec<Progress>;

    async fn create_progress(&self, data: CreateProgress) -> Progress;

    /// Same completion-timestamp rule as `update_enrollment`
    async fn update_progress(&self, id: i32, data: UpdateProgress) -> Option<Progress>;

    async fn delete_progress(&self, id: i32) -> bool;

    // Achievements

    async fn get_achievement(&self, id: i32) -> Option<Achievement>;

    /// All achievement definitions, unordered snapshot
    async fn list_achievements(&self) -> Vec<Achievement>;

    async fn create_achievement(&self, data: CreateAchievement) -> Achievement;

    async fn update_achievement(&self, id: i32, data: UpdateAchievement) -> Option<Achievement>;

    async fn delete_achievement(&self, id: i32) -> bool;

    // User achievements (grant records: no update)

    /// Composite-key lookup; first match wins if duplicates exist
    async fn get_user_achievement(
        &self,
        user_id: i32,
        achievement_id: i32,
    ) -> Option<UserAchievement>;

    async fn list_user_achievements_by_user(&self, user_id: i32) -> Vec<UserAchievement>;

    /// Records a grant, stamping `unlocked_at`
    async fn create_user_achievement(&self, data: CreateUserAchievement) -> UserAchievement;

    /// Revokes a grant
    async fn delete_user_achievement(&self, id: i32) -> bool;

    // Certificates (grant records: no update, no delete)

    /// Composite-key lookup; first match wins if duplicates exist
    async fn get_certificate(&self, user_id: i32, course_id: i32) -> Option<Certificate>;

    async fn list_certificates_by_user(&self, user_id: i32) -> Vec<Certificate>;

    /// Issues a certificate, stamping `issued_at`
    async fn create_certificate(&self, data: CreateCertificate) -> Certificate;
}
