//! # LearnForge Seed Demo
//!
//! Builds an in-memory store, runs the demo seed sequence, and prints the
//! resulting dataset as JSON. Useful for eyeballing the seed data and as a
//! smoke test for the storage layer.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p learnforge-store --bin seed-demo
//! ```

use learnforge_store::{populate, MemStorage, Storage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "learnforge_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("LearnForge seed demo v{}", env!("CARGO_PKG_VERSION"));

    let store = MemStorage::new();
    let summary = populate(&store).await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    for user in store.list_users().await {
        println!(
            "user #{} {} ({}) points={} streak={}",
            user.id,
            user.username,
            user.role.as_str(),
            user.points,
            user.streak
        );
    }

    for course in store.list_courses().await {
        println!(
            "course #{} {:?} [{} weeks, {} pts]",
            course.id, course.title, course.duration, course.points
        );
        for module in store.list_modules_by_course(course.id).await {
            println!("  module #{} {:?}", module.id, module.title);
            for lesson in store.list_lessons_by_module(module.id).await {
                println!(
                    "    lesson #{} {:?} ({}, {} pts)",
                    lesson.id,
                    lesson.title,
                    lesson.kind.as_str(),
                    lesson.points
                );
            }
        }
    }

    Ok(())
}
