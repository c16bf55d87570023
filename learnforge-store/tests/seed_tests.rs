//! Integration tests for the demo seed sequence

use learnforge_shared::models::{AchievementCriteria, UserRole};
use learnforge_store::{populate, MemStorage, SeedSummary, Storage};

#[tokio::test]
async fn test_seed_scenario_counts() {
    let store = MemStorage::new();
    let summary = populate(&store).await.expect("seed must succeed");

    assert_eq!(
        summary,
        SeedSummary {
            users: 3,
            courses: 2,
            modules: 3,
            lessons: 3,
            achievements: 3,
            enrollments: 2,
            user_achievements: 2,
        }
    );
}

#[tokio::test]
async fn test_seed_produces_expected_records() {
    let store = MemStorage::new();
    populate(&store).await.unwrap();

    // One user per role; the student carries the demo gamification state
    let admin = store.get_user_by_username("admin").await.unwrap();
    let teacher = store.get_user_by_username("teacher").await.unwrap();
    let student = store.get_user_by_username("student").await.unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(teacher.role, UserRole::Teacher);
    assert_eq!(student.role, UserRole::Student);
    assert_eq!(student.points, 1248);
    assert_eq!(student.streak, 5);

    // Both courses are authored by the teacher
    let courses = store.list_courses_by_author(teacher.id).await;
    assert_eq!(courses.len(), 2);
    let web_dev = courses
        .iter()
        .find(|c| c.title == "Web Development Fundamentals")
        .unwrap();
    let python = courses
        .iter()
        .find(|c| c.title == "Python Programming")
        .unwrap();
    assert_eq!((web_dev.duration, web_dev.points), (8, 500));
    assert_eq!((python.duration, python.points), (6, 300));

    // Enrollments carry the demo progress values, not yet completed
    let enrollment_1 = store.get_enrollment(student.id, web_dev.id).await.unwrap();
    let enrollment_2 = store.get_enrollment(student.id, python.id).await.unwrap();
    assert_eq!(enrollment_1.progress, 68);
    assert_eq!(enrollment_2.progress, 42);
    assert!(!enrollment_1.completed);
    assert_eq!(enrollment_1.completed_at, None);

    // Module/lesson structure of the web development course
    let modules = store.list_modules_by_course(web_dev.id).await;
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].title, "JavaScript Basics");
    let lessons = store.list_lessons_by_module(modules[0].id).await;
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].title, "Introduction to JavaScript");
    assert_eq!(lessons[0].points, 10);

    // Achievement criteria survive as structured data
    let achievements = store.list_achievements().await;
    let streak = achievements
        .iter()
        .find(|a| a.title == "5-Day Streak")
        .unwrap();
    assert_eq!(streak.criteria, AchievementCriteria::LoginStreak { days: 5 });
    assert_eq!(streak.points, 25);

    // The student's two grants reference seeded achievements
    let grants = store.list_user_achievements_by_user(student.id).await;
    assert_eq!(grants.len(), 2);
    for grant in &grants {
        assert!(store.get_achievement(grant.achievement_id).await.is_some());
    }
}

#[tokio::test]
async fn test_seed_is_deterministic_across_stores() {
    let store_a = MemStorage::new();
    let store_b = MemStorage::new();
    populate(&store_a).await.unwrap();
    populate(&store_b).await.unwrap();

    let student_a = store_a.get_user_by_username("student").await.unwrap();
    let student_b = store_b.get_user_by_username("student").await.unwrap();
    assert_eq!(student_a.id, student_b.id);
    assert_eq!(student_a.points, student_b.points);

    let mut titles_a: Vec<String> = store_a
        .list_courses()
        .await
        .into_iter()
        .map(|c| c.title)
        .collect();
    let mut titles_b: Vec<String> = store_b
        .list_courses()
        .await
        .into_iter()
        .map(|c| c.title)
        .collect();
    titles_a.sort();
    titles_b.sort();
    assert_eq!(titles_a, titles_b);
}
