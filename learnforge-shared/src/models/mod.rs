/// Domain models for LearnForge
///
/// Every entity follows the same record triple: the full record (all fields,
/// including store-generated ones), a `Create*` insert record carrying only
/// caller-supplied fields, and — where the entity is mutable — an `Update*`
/// patch record in which every field is optional.
///
/// Identity (`id: i32`) and timestamps are assigned exclusively by the
/// storage layer; no insert record carries them.
///
/// # Models
///
/// - `user`: Accounts with roles, points, and login streaks
/// - `course`: Courses authored by teachers
/// - `module`: Ordered sections within a course
/// - `lesson`: Ordered content items within a module
/// - `enrollment`: A user's membership and progress in a course
/// - `progress`: Per-lesson completion state for a user
/// - `achievement`: Achievement definitions with structured criteria
/// - `user_achievement`: Achievement grants (create/read/delete only)
/// - `certificate`: Course-completion certificates (create/read only)
pub mod achievement;
pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod module;
pub mod progress;
pub mod user;
pub mod user_achievement;

pub use achievement::{Achievement, AchievementCriteria, CreateAchievement, UpdateAchievement};
pub use certificate::{Certificate, CreateCertificate};
pub use course::{Course, CreateCourse, UpdateCourse};
pub use enrollment::{CreateEnrollment, Enrollment, UpdateEnrollment};
pub use lesson::{CreateLesson, Lesson, LessonType, UpdateLesson};
pub use module::{CreateModule, Module, UpdateModule};
pub use progress::{CreateProgress, Progress, UpdateProgress};
pub use user::{CreateUser, UpdateUser, User, UserRole};
pub use user_achievement::{CreateUserAchievement, UserAchievement};
