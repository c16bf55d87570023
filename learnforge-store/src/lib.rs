//! # LearnForge Storage Layer
//!
//! The authoritative in-memory holder of all LearnForge domain state: nine
//! entity collections with store-assigned monotonic identity, relationship
//! queries, and the derived-state rules applied on update (completion
//! timestamps, course `updated_at`).
//!
//! ## Module Organization
//!
//! - `storage`: The [`Storage`] trait — the contract consumed by API
//!   handlers and the achievement evaluator
//! - `memory`: [`MemStorage`], the in-memory implementation
//! - `seed`: The deterministic demo dataset, applied through the public
//!   trait methods
//!
//! ## Usage
//!
//! ```
//! use learnforge_store::{MemStorage, Storage};
//! use learnforge_shared::models::{CreateUser, UserRole};
//!
//! # async fn example() {
//! let store = MemStorage::new();
//! let user = store
//!     .create_user(CreateUser {
//!         username: "student".to_string(),
//!         password: "student123".to_string(),
//!         email: "student@example.com".to_string(),
//!         full_name: "Student User".to_string(),
//!         role: Some(UserRole::Student),
//!     })
//!     .await;
//! assert_eq!(user.id, 1);
//! # }
//! ```

pub mod memory;
pub mod seed;
pub mod storage;

pub use memory::MemStorage;
pub use seed::{populate, SeedError, SeedSummary};
pub use storage::Storage;
