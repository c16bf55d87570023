/// In-memory storage implementation
///
/// [`MemStorage`] keeps every collection in a `HashMap<i32, T>` with a
/// per-entity monotonic counter, all behind a single `tokio::sync::RwLock`.
/// The one lock keeps each operation atomic when the store sits behind a
/// server with concurrent in-flight requests.
///
/// The store owns its state outright: construction is explicit (no process
/// globals), and every result is an owned clone, so callers never hold a
/// reference that could bypass the update path. Test suites build a fresh
/// `MemStorage::new()` per test.
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use learnforge_shared::models::{
    Achievement, Certificate, Course, CreateAchievement, CreateCertificate, CreateCourse,
    CreateEnrollment, CreateLesson, CreateModule, CreateProgress, CreateUser,
    CreateUserAchievement, Enrollment, Lesson, Module, Progress, UpdateAchievement, UpdateCourse,
    UpdateEnrollment, UpdateLesson, UpdateModule, UpdateProgress, UpdateUser, User,
    UserAchievement, UserRole,
};

use crate::storage::Storage;

/// One entity collection: rows keyed by id plus the id counter
///
/// Counters start at 1 and only ever move forward; deletes never release
/// ids for reuse.
struct Table<T> {
    rows: HashMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Allocates the next id, stores the built row, and returns it
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Replaces the row with `apply(current)`; `None` if the id is absent
    fn update_with(&mut self, id: i32, apply: impl FnOnce(&T) -> T) -> Option<T> {
        let updated = apply(self.rows.get(&id)?);
        self.rows.insert(id, updated.clone());
        Some(updated)
    }

    fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

#[derive(Default)]
struct State {
    users: Table<User>,
    courses: Table<Course>,
    modules: Table<Module>,
    lessons: Table<Lesson>,
    enrollments: Table<Enrollment>,
    progress: Table<Progress>,
    achievements: Table<Achievement>,
    user_achievements: Table<UserAchievement>,
    certificates: Table<Certificate>,
}

/// In-memory [`Storage`] implementation
pub struct MemStorage {
    state: RwLock<State>,
}

impl MemStorage {
    /// Creates an empty store with all counters at 1
    pub fn new() -> Self {
        MemStorage {
            state: RwLock::new(State::default()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    // Users

    async fn get_user(&self, id: i32) -> Option<User> {
        self.state.read().await.users.get(id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let state = self.state.read().await;
        let found = state
            .users
            .values()
            .find(|user| user.username.eq_ignore_ascii_case(username))
            .cloned();
        found
    }

    async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let state = self.state.read().await;
        let found = state
            .users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned();
        found
    }

    async fn create_user(&self, data: CreateUser) -> User {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state.users.insert_with(|id| User {
            id,
            username: data.username,
            password: data.password,
            email: data.email,
            full_name: data.full_name,
            role: data.role.unwrap_or(UserRole::Student),
            points: 0,
            streak: 0,
            last_login: now,
            avatar_url: None,
            created_at: now,
        })
    }

    async fn update_user(&self, id: i32, data: UpdateUser) -> Option<User> {
        let mut state = self.state.write().await;
        state.users.update_with(id, |user| user.merge(&data))
    }

    async fn list_users(&self) -> Vec<User> {
        self.state.read().await.users.values().cloned().collect()
    }

    // Courses

    async fn get_course(&self, id: i32) -> Option<Course> {
        self.state.read().await.courses.get(id)
    }

    async fn list_courses(&self) -> Vec<Course> {
        self.state.read().await.courses.values().cloned().collect()
    }

    async fn list_courses_by_author(&self, author_id: i32) -> Vec<Course> {
        let state = self.state.read().await;
        state
            .courses
            .values()
            .filter(|course| course.author_id == author_id)
            .cloned()
            .collect()
    }

    async fn create_course(&self, data: CreateCourse) -> Course {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state.courses.insert_with(|id| Course {
            id,
            title: data.title,
            description: data.description,
            category: data.category,
            level: data.level,
            duration: data.duration,
            author_id: data.author_id,
            points: data.points.unwrap_or(0),
            image_url: data.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_course(&self, id: i32, data: UpdateCourse) -> Option<Course> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state
            .courses
            .update_with(id, |course| course.merge(&data, now))
    }

    async fn delete_course(&self, id: i32) -> bool {
        self.state.write().await.courses.remove(id)
    }

    // Modules

    async fn get_module(&self, id: i32) -> Option<Module> {
        self.state.read().await.modules.get(id)
    }

    async fn list_modules_by_course(&self, course_id: i32) -> Vec<Module> {
        let state = self.state.read().await;
        let mut modules: Vec<Module> = state
            .modules
            .values()
            .filter(|module| module.course_id == course_id)
            .cloned()
            .collect();
        modules.sort_by_key(|module| module.order);
        modules
    }

    async fn create_module(&self, data: CreateModule) -> Module {
        let mut state = self.state.write().await;
        state.modules.insert_with(|id| Module {
            id,
            course_id: data.course_id,
            title: data.title,
            description: data.description,
            order: data.order,
        })
    }

    async fn update_module(&self, id: i32, data: UpdateModule) -> Option<Module> {
        let mut state = self.state.write().await;
        state.modules.update_with(id, |module| module.merge(&data))
    }

    async fn delete_module(&self, id: i32) -> bool {
        self.state.write().await.modules.remove(id)
    }

    // Lessons

    async fn get_lesson(&self, id: i32) -> Option<Lesson> {
        self.state.read().await.lessons.get(id)
    }

    async fn list_lessons_by_module(&self, module_id: i32) -> Vec<Lesson> {
        let state = self.state.read().await;
        let mut lessons: Vec<Lesson> = state
            .lessons
            .values()
            .filter(|lesson| lesson.module_id == module_id)
            .cloned()
            .collect();
        lessons.sort_by_key(|lesson| lesson.order);
        lessons
    }

    async fn create_lesson(&self, data: CreateLesson) -> Lesson {
        let mut state = self.state.write().await;
        state.lessons.insert_with(|id| Lesson {
            id,
            module_id: data.module_id,
            title: data.title,
            content: data.content,
            kind: data.kind,
            duration: data.duration,
            order: data.order,
            points: data.points.unwrap_or(0),
            video_url: data.video_url,
        })
    }

    async fn update_lesson(&self, id: i32, data: UpdateLesson) -> Option<Lesson> {
        let mut state = self.state.write().await;
        state.lessons.update_with(id, |lesson| lesson.merge(&data))
    }

    async fn delete_lesson(&self, id: i32) -> bool {
        self.state.write().await.lessons.remove(id)
    }

    // Enrollments

    async fn get_enrollment(&self, user_id: i32, course_id: i32) -> Option<Enrollment> {
        let state = self.state.read().await;
        let found = state
            .enrollments
            .values()
            .find(|enrollment| enrollment.user_id == user_id && enrollment.course_id == course_id)
            .cloned();
        found
    }

    async fn list_enrollments_by_user(&self, user_id: i32) -> Vec<Enrollment> {
        let state = self.state.read().await;
        state
            .enrollments
            .values()
            .filter(|enrollment| enrollment.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn list_enrollments_by_course(&self, course_id: i32) -> Vec<Enrollment> {
        let state = self.state.read().await;
        state
            .enrollments
            .values()
            .filter(|enrollment| enrollment.course_id == course_id)
            .cloned()
            .collect()
    }

    async fn create_enrollment(&self, data: CreateEnrollment) -> Enrollment {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state.enrollments.insert_with(|id| Enrollment {
            id,
            user_id: data.user_id,
            course_id: data.course_id,
            progress: 0,
            completed: false,
            certificate_issued: false,
            enrolled_at: now,
            completed_at: None,
        })
    }

    async fn update_enrollment(&self, id: i32, data: UpdateEnrollment) -> Option<Enrollment> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state
            .enrollments
            .update_with(id, |enrollment| enrollment.merge(&data, now))
    }

    async fn delete_enrollment(&self, id: i32) -> bool {
        self.state.write().await.enrollments.remove(id)
    }

    // Progress

    async fn get_progress(&self, user_id: i32, lesson_id: i32) -> Option<Progress> {
        let state = self.state.read().await;
        let found = state
            .progress
            .values()
            .find(|progress| progress.user_id == user_id && progress.lesson_id == lesson_id)
            .cloned();
        found
    }

    async fn list_progress_by_user(&self, user_id: i32) -> Vec<Progress> {
        let state = self.state.read().await;
        state
            .progress
            .values()
            .filter(|progress| progress.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn create_progress(&self, data: CreateProgress) -> Progress {
        let mut state = self.state.write().await;
        state.progress.insert_with(|id| Progress {
            id,
            user_id: data.user_id,
            lesson_id: data.lesson_id,
            completed: false,
            completed_at: None,
        })
    }

    async fn update_progress(&self, id: i32, data: UpdateProgress) -> Option<Progress> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state
            .progress
            .update_with(id, |progress| progress.merge(&data, now))
    }

    async fn delete_progress(&self, id: i32) -> bool {
        self.state.write().await.progress.remove(id)
    }

    // Achievements

    async fn get_achievement(&self, id: i32) -> Option<Achievement> {
        self.state.read().await.achievements.get(id)
    }

    async fn list_achievements(&self) -> Vec<Achievement> {
        self.state
            .read()
            .await
            .achievements
            .values()
            .cloned()
            .collect()
    }

    async fn create_achievement(&self, data: CreateAchievement) -> Achievement {
        let mut state = self.state.write().await;
        state.achievements.insert_with(|id| Achievement {
            id,
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            criteria: data.criteria,
            points: data.points.unwrap_or(0),
        })
    }

    async fn update_achievement(&self, id: i32, data: UpdateAchievement) -> Option<Achievement> {
        let mut state = self.state.write().await;
        state
            .achievements
            .update_with(id, |achievement| achievement.merge(&data))
    }

    async fn delete_achievement(&self, id: i32) -> bool {
        self.state.write().await.achievements.remove(id)
    }

    // User achievements

    async fn get_user_achievement(
        &self,
        user_id: i32,
        achievement_id: i32,
    ) -> Option<UserAchievement> {
        let state = self.state.read().await;
        let found = state
            .user_achievements
            .values()
            .find(|grant| grant.user_id == user_id && grant.achievement_id == achievement_id)
            .cloned();
        found
    }

    async fn list_user_achievements_by_user(&self, user_id: i32) -> Vec<UserAchievement> {
        let state = self.state.read().await;
        state
            .user_achievements
            .values()
            .filter(|grant| grant.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn create_user_achievement(&self, data: CreateUserAchievement) -> UserAchievement {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state.user_achievements.insert_with(|id| UserAchievement {
            id,
            user_id: data.user_id,
            achievement_id: data.achievement_id,
            unlocked_at: now,
        })
    }

    async fn delete_user_achievement(&self, id: i32) -> bool {
        self.state.write().await.user_achievements.remove(id)
    }

    // Certificates

    async fn get_certificate(&self, user_id: i32, course_id: i32) -> Option<Certificate> {
        let state = self.state.read().await;
        let found = state
            .certificates
            .values()
            .find(|cert| cert.user_id == user_id && cert.course_id == course_id)
            .cloned();
        found
    }

    async fn list_certificates_by_user(&self, user_id: i32) -> Vec<Certificate> {
        let state = self.state.read().await;
        state
            .certificates
            .values()
            .filter(|cert| cert.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn create_certificate(&self, data: CreateCertificate) -> Certificate {
        let mut state = self.state.write().await;
        let now = Utc::now();
        state.certificates.insert_with(|id| Certificate {
            id,
            user_id: data.user_id,
            course_id: data.course_id,
            certificate_url: data.certificate_url,
            issued_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ids_are_monotonic_across_removal() {
        let mut table: Table<i32> = Table::default();
        table.insert_with(|id| id); // 1
        table.insert_with(|id| id); // 2
        assert!(table.remove(2));
        let third = table.insert_with(|id| id);
        assert_eq!(third, 3);
    }

    #[test]
    fn test_table_update_missing_row() {
        let mut table: Table<i32> = Table::default();
        assert_eq!(table.update_with(1, |v| v + 1), None);
        assert!(!table.remove(1));
    }
}
