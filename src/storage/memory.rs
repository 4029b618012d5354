//! In-memory [`WellnessStore`] with optional JSON snapshots
//!
//! Used by the CLI (snapshotted to a data file between runs) and by tests.

use crate::error::{MindMattersError, Result};
use crate::storage::WellnessStore;
use crate::types::{AssessmentEntry, MoodEntry, User, UserId, UserUpdates};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Snapshot {
    users: Vec<User>,
    moods: Vec<MoodEntry>,
    assessments: Vec<AssessmentEntry>,
}

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    /// Lower-cased email -> user id
    emails: HashMap<String, UserId>,
    moods: Vec<MoodEntry>,
    assessments: Vec<AssessmentEntry>,
}

impl Tables {
    fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut tables = Tables::default();
        for user in snapshot.users {
            let key = normalize_email(&user.email);
            if tables.emails.insert(key, user.id).is_some() {
                return Err(MindMattersError::AlreadyExists(format!(
                    "duplicate email in snapshot: {}",
                    user.email
                )));
            }
            tables.users.insert(user.id, user);
        }
        tables.moods = snapshot.moods;
        tables.assessments = snapshot.assessments;
        Ok(tables)
    }

    fn to_snapshot(&self) -> Snapshot {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Snapshot {
            users,
            moods: self.moods.clone(),
            assessments: self.assessments.clone(),
        }
    }

    fn require_user(&self, id: UserId) -> Result<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(MindMattersError::UserNotFound(id.to_string()))
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Store that keeps everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot file; a missing file yields an empty store
    pub async fn load(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            info!("Data file not found, starting empty: {:?}", path);
            return Ok(Self::new());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        let tables = Tables::from_snapshot(snapshot)?;
        info!(
            "Loaded {} users and {} mood entries from {:?}",
            tables.users.len(),
            tables.moods.len(),
            path
        );

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Write the current contents to a snapshot file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let snapshot = self.tables.read().await.to_snapshot();
        let content = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, content).await?;

        debug!("Saved snapshot to {:?}", path);
        Ok(())
    }
}

#[async_trait]
impl WellnessStore for MemoryStore {
    async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let key = normalize_email(email);
        if key.is_empty() {
            return Err(MindMattersError::Other("email cannot be empty".to_string()));
        }

        let mut tables = self.tables.write().await;
        if tables.emails.contains_key(&key) {
            return Err(MindMattersError::AlreadyExists(format!("user with email {}", email)));
        }

        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: email.trim().to_string(),
            created_at: Utc::now(),
        };
        tables.emails.insert(key, user.id);
        tables.users.insert(user.id, user.clone());

        info!("Created user {}", user.id);
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<User> {
        self.tables
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| MindMattersError::UserNotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .emails
            .get(&normalize_email(email))
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn update_user(&self, id: UserId, updates: UserUpdates) -> Result<User> {
        let mut tables = self.tables.write().await;
        let current = tables
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| MindMattersError::UserNotFound(id.to_string()))?;

        let mut updated = current.clone();
        if let Some(name) = updates.name {
            updated.name = name;
        }
        if let Some(email) = updates.email {
            let new_key = normalize_email(&email);
            let old_key = normalize_email(&current.email);
            if new_key != old_key {
                if tables.emails.contains_key(&new_key) {
                    return Err(MindMattersError::AlreadyExists(format!(
                        "user with email {}",
                        email
                    )));
                }
                tables.emails.remove(&old_key);
                tables.emails.insert(new_key, id);
            }
            updated.email = email.trim().to_string();
        }

        tables.users.insert(id, updated.clone());
        debug!("Updated user {}", id);
        Ok(updated)
    }

    async fn save_mood(&self, entry: &MoodEntry) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.require_user(entry.user_id)?;
        tables.moods.push(entry.clone());
        debug!("Saved {} mood for user {}", entry.mood, entry.user_id);
        Ok(())
    }

    async fn list_moods(&self, user_id: UserId) -> Result<Vec<MoodEntry>> {
        let tables = self.tables.read().await;
        let mut moods: Vec<MoodEntry> = tables
            .moods
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        moods.sort_by_key(|m| m.date);
        Ok(moods)
    }

    async fn save_assessment(&self, entry: &AssessmentEntry) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.require_user(entry.user_id)?;
        tables.assessments.push(entry.clone());
        debug!("Saved {} assessment for user {}", entry.mood, entry.user_id);
        Ok(())
    }

    async fn list_assessments(&self, user_id: UserId) -> Result<Vec<AssessmentEntry>> {
        let tables = self.tables.read().await;
        let mut assessments: Vec<AssessmentEntry> = tables
            .assessments
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        assessments.sort_by_key(|a| a.date);
        Ok(assessments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Answers, AssessmentMood, TrackerMood};
    use chrono::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let store = MemoryStore::new();
        let user = store.create_user("Ada", "Ada@Example.com").await.unwrap();

        assert_eq!(store.get_user(user.id).await.unwrap(), user);
        let found = store.get_user_by_email("ada@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert!(store.get_user_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();
        store.create_user("Ada", "ada@example.com").await.unwrap();

        let result = store.create_user("Other", " ADA@example.com ").await;
        assert!(matches!(result, Err(MindMattersError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_user() {
        let store = MemoryStore::new();
        let ada = store.create_user("Ada", "ada@example.com").await.unwrap();
        store.create_user("Bob", "bob@example.com").await.unwrap();

        let updated = store
            .update_user(
                ada.id,
                UserUpdates {
                    name: Some("Ada L.".to_string()),
                    email: Some("lovelace@example.com".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ada L.");
        assert!(store.get_user_by_email("ada@example.com").await.unwrap().is_none());
        assert!(store
            .get_user_by_email("lovelace@example.com")
            .await
            .unwrap()
            .is_some());

        let clash = store
            .update_user(
                ada.id,
                UserUpdates {
                    email: Some("bob@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(clash, Err(MindMattersError::AlreadyExists(_))));

        let missing = store.update_user(UserId::new(), UserUpdates::default()).await;
        assert!(matches!(missing, Err(MindMattersError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_moods_by_user_sorted() {
        let store = MemoryStore::new();
        let ada = store.create_user("Ada", "ada@example.com").await.unwrap();
        let bob = store.create_user("Bob", "bob@example.com").await.unwrap();

        let now = Utc::now();
        store
            .save_mood(&MoodEntry::new(ada.id, TrackerMood::Sad, now))
            .await
            .unwrap();
        store
            .save_mood(&MoodEntry::new(ada.id, TrackerMood::Happy, now - Duration::days(1)))
            .await
            .unwrap();
        store
            .save_mood(&MoodEntry::new(bob.id, TrackerMood::Neutral, now))
            .await
            .unwrap();

        let moods = store.list_moods(ada.id).await.unwrap();
        let labels: Vec<TrackerMood> = moods.iter().map(|m| m.mood).collect();
        assert_eq!(labels, vec![TrackerMood::Happy, TrackerMood::Sad]);
    }

    #[tokio::test]
    async fn test_entries_require_known_user() {
        let store = MemoryStore::new();
        let stranger = UserId::new();

        let mood = store
            .save_mood(&MoodEntry::new(stranger, TrackerMood::Happy, Utc::now()))
            .await;
        assert!(matches!(mood, Err(MindMattersError::UserNotFound(_))));

        let assessment = store
            .save_assessment(&AssessmentEntry::new(
                stranger,
                AssessmentMood::Neutral,
                Answers::new(),
            ))
            .await;
        assert!(matches!(assessment, Err(MindMattersError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let store = MemoryStore::new();
        let ada = store.create_user("Ada", "ada@example.com").await.unwrap();
        store
            .save_mood(&MoodEntry::new(ada.id, TrackerMood::Happy, Utc::now()))
            .await
            .unwrap();
        let mut answers = Answers::new();
        answers.insert(1, "Relaxation".to_string());
        store
            .save_assessment(&AssessmentEntry::new(ada.id, AssessmentMood::Neutral, answers))
            .await
            .unwrap();
        store.save(&path).await.unwrap();

        let reloaded = MemoryStore::load(&path).await.unwrap();
        assert_eq!(reloaded.get_user(ada.id).await.unwrap(), ada);
        assert_eq!(reloaded.list_moods(ada.id).await.unwrap().len(), 1);
        let assessments = reloaded.list_assessments(ada.id).await.unwrap();
        assert_eq!(assessments[0].answers[&1], "Relaxation");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = MemoryStore::load(&dir.path().join("absent.json")).await.unwrap();
        assert!(store.get_user_by_email("ada@example.com").await.unwrap().is_none());
    }
}
