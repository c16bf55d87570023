/// Demo dataset seeding
///
/// Populates a store with the fixed demonstration dataset: one user per
/// role, two courses with modules and lessons, three achievements, two
/// enrollments with progress underway, two achievement grants, and the demo
/// student's gamification state. The sequence only goes through the public
/// [`Storage`] methods, so seeding a fresh store always reproduces the same
/// field values (timestamps aside).
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use learnforge_shared::models::{
    AchievementCriteria, CreateAchievement, CreateCourse, CreateEnrollment, CreateLesson,
    CreateModule, CreateUser, CreateUserAchievement, LessonType, UpdateEnrollment, UpdateUser,
    UserRole,
};

use crate::storage::Storage;

/// Errors from the seed sequence
///
/// These only fire if the store misbehaves (a record created moments
/// earlier is gone); they exist so the sequence can use `?` instead of
/// silently skipping steps.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("enrollment for user {user_id} in course {course_id} missing after creation")]
    MissingEnrollment { user_id: i32, course_id: i32 },

    #[error("user {id} missing after creation")]
    MissingUser { id: i32 },
}

/// Counts of the records the seed sequence created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: usize,
    pub courses: usize,
    pub modules: usize,
    pub lessons: usize,
    pub achievements: usize,
    pub enrollments: usize,
    pub user_achievements: usize,
}

/// Runs the demo seed sequence against an empty store
pub async fn populate(storage: &dyn Storage) -> Result<SeedSummary, SeedError> {
    info!("seeding demo dataset");

    // Sample users, one per role
    let _admin = storage
        .create_user(CreateUser {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@example.com".to_string(),
            full_name: "Admin User".to_string(),
            role: Some(UserRole::Admin),
        })
        .await;

    let teacher = storage
        .create_user(CreateUser {
            username: "teacher".to_string(),
            password: "teacher123".to_string(),
            email: "teacher@example.com".to_string(),
            full_name: "Teacher User".to_string(),
            role: Some(UserRole::Teacher),
        })
        .await;

    let student = storage
        .create_user(CreateUser {
            username: "student".to_string(),
            password: "student123".to_string(),
            email: "student@example.com".to_string(),
            full_name: "Student User".to_string(),
            role: Some(UserRole::Student),
        })
        .await;

    // Sample courses
    let web_dev_course = storage
        .create_course(CreateCourse {
            title: "Web Development Fundamentals".to_string(),
            description: "Learn the basics of web development".to_string(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            duration: 8,
            author_id: teacher.id,
            points: Some(500),
            image_url: None,
        })
        .await;

    let python_course = storage
        .create_course(CreateCourse {
            title: "Python Programming".to_string(),
            description: "Master Python programming language".to_string(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            duration: 6,
            author_id: teacher.id,
            points: Some(300),
            image_url: None,
        })
        .await;

    // Modules and lessons for the web development course
    let js_module_1 = storage
        .create_module(CreateModule {
            course_id: web_dev_course.id,
            title: "JavaScript Basics".to_string(),
            description: Some("Learn the fundamentals of JavaScript programming".to_string()),
            order: 1,
        })
        .await;

    let _js_module_2 = storage
        .create_module(CreateModule {
            course_id: web_dev_course.id,
            title: "Working with DOM".to_string(),
            description: Some("Manipulate HTML elements using JavaScript".to_string()),
            order: 2,
        })
        .await;

    storage
        .create_lesson(CreateLesson {
            module_id: js_module_1.id,
            title: "Introduction to JavaScript".to_string(),
            content: "JavaScript is a programming language that runs in the browser..."
                .to_string(),
            kind: LessonType::Text,
            duration: Some(15),
            order: 1,
            points: Some(10),
            video_url: None,
        })
        .await;

    storage
        .create_lesson(CreateLesson {
            module_id: js_module_1.id,
            title: "Variables and Data Types".to_string(),
            content: "Learn about variables, constants, and data types in JavaScript..."
                .to_string(),
            kind: LessonType::Text,
            duration: Some(20),
            order: 2,
            points: Some(15),
            video_url: None,
        })
        .await;

    // Modules and lessons for the python course
    let py_module_1 = storage
        .create_module(CreateModule {
            course_id: python_course.id,
            title: "Python Basics".to_string(),
            description: Some("Introduction to Python programming language".to_string()),
            order: 1,
        })
        .await;

    storage
        .create_lesson(CreateLesson {
            module_id: py_module_1.id,
            title: "Getting Started with Python".to_string(),
            content: "Python is a versatile programming language...".to_string(),
            kind: LessonType::Text,
            duration: Some(25),
            order: 1,
            points: Some(20),
            video_url: None,
        })
        .await;

    // Achievement definitions
    let first_course = storage
        .create_achievement(CreateAchievement {
            title: "First Course Completed".to_string(),
            description: "Complete your first course".to_string(),
            image_url: Some("course-complete-badge.svg".to_string()),
            criteria: AchievementCriteria::CourseCompletion { count: 1 },
            points: Some(50),
        })
        .await;

    let five_day_streak = storage
        .create_achievement(CreateAchievement {
            title: "5-Day Streak".to_string(),
            description: "Log in for 5 consecutive days".to_string(),
            image_url: Some("streak-badge.svg".to_string()),
            criteria: AchievementCriteria::LoginStreak { days: 5 },
            points: Some(25),
        })
        .await;

    storage
        .create_achievement(CreateAchievement {
            title: "Quiz Master".to_string(),
            description: "Score 100% on 5 quizzes".to_string(),
            image_url: Some("quiz-badge.svg".to_string()),
            criteria: AchievementCriteria::QuizCompletion {
                score: 100,
                count: 5,
            },
            points: Some(75),
        })
        .await;

    // Enroll the student in both courses, with progress underway
    storage
        .create_enrollment(CreateEnrollment {
            user_id: student.id,
            course_id: web_dev_course.id,
        })
        .await;

    storage
        .create_enrollment(CreateEnrollment {
            user_id: student.id,
            course_id: python_course.id,
        })
        .await;

    let enrollment_1 = storage
        .get_enrollment(student.id, web_dev_course.id)
        .await
        .ok_or(SeedError::MissingEnrollment {
            user_id: student.id,
            course_id: web_dev_course.id,
        })?;
    storage
        .update_enrollment(
            enrollment_1.id,
            UpdateEnrollment {
                progress: Some(68),
                ..Default::default()
            },
        )
        .await;

    let enrollment_2 = storage
        .get_enrollment(student.id, python_course.id)
        .await
        .ok_or(SeedError::MissingEnrollment {
            user_id: student.id,
            course_id: python_course.id,
        })?;
    storage
        .update_enrollment(
            enrollment_2.id,
            UpdateEnrollment {
                progress: Some(42),
                ..Default::default()
            },
        )
        .await;

    // Grant the student their first two achievements
    storage
        .create_user_achievement(CreateUserAchievement {
            user_id: student.id,
            achievement_id: first_course.id,
        })
        .await;

    storage
        .create_user_achievement(CreateUserAchievement {
            user_id: student.id,
            achievement_id: five_day_streak.id,
        })
        .await;

    // Demo gamification state for the student
    storage
        .update_user(
            student.id,
            UpdateUser {
                points: Some(1248),
                streak: Some(5),
                ..Default::default()
            },
        )
        .await
        .ok_or(SeedError::MissingUser { id: student.id })?;

    let summary = SeedSummary {
        users: storage.list_users().await.len(),
        courses: storage.list_courses().await.len(),
        modules: storage.list_modules_by_course(web_dev_course.id).await.len()
            + storage.list_modules_by_course(python_course.id).await.len(),
        lessons: storage.list_lessons_by_module(js_module_1.id).await.len()
            + storage.list_lessons_by_module(py_module_1.id).await.len(),
        achievements: storage.list_achievements().await.len(),
        enrollments: storage.list_enrollments_by_user(student.id).await.len(),
        user_achievements: storage
            .list_user_achievements_by_user(student.id)
            .await
            .len(),
    };

    info!(
        users = summary.users,
        courses = summary.courses,
        achievements = summary.achievements,
        "demo dataset seeded"
    );

    Ok(summary)
}
