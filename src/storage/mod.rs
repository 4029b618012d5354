//! Storage layer for the Mind Matters companion
//!
//! Durable storage is a collaborator of the recommendation core: it keeps
//! users, daily mood logs and assessment submissions keyed by id, with
//! secondary lookup by user id or (unique) email.

pub mod memory;

use crate::error::Result;
use crate::types::{AssessmentEntry, MoodEntry, User, UserId, UserUpdates};
use async_trait::async_trait;

pub use memory::MemoryStore;

/// Storage backend trait defining all required operations
#[async_trait]
pub trait WellnessStore: Send + Sync {
    /// Register a new user; fails if the email is taken
    async fn create_user(&self, name: &str, email: &str) -> Result<User>;

    /// Retrieve a user by ID
    async fn get_user(&self, id: UserId) -> Result<User>;

    /// Look up a user by email (case-insensitive)
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Apply a partial update to a user
    async fn update_user(&self, id: UserId, updates: UserUpdates) -> Result<User>;

    /// Store a mood log entry
    async fn save_mood(&self, entry: &MoodEntry) -> Result<()>;

    /// All mood entries for a user, oldest first
    async fn list_moods(&self, user_id: UserId) -> Result<Vec<MoodEntry>>;

    /// Store a completed assessment
    async fn save_assessment(&self, entry: &AssessmentEntry) -> Result<()>;

    /// All assessments for a user, oldest first
    async fn list_assessments(&self, user_id: UserId) -> Result<Vec<AssessmentEntry>>;
}
