//! Key/Value Session Store
//!
//! Stores the current user as camelCase JSON under one key and reads the
//! ban list (a JSON array of emails) from another.

use platform::storage::KeyValueStore;

use crate::application::config::AccountConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{ban_list::BanList, email::Email};
use crate::error::{AccountError, AccountResult};

/// Session store over any [`KeyValueStore`] backend
#[derive(Debug, Clone)]
pub struct KvSessionStore<K> {
    kv: K,
    current_user_key: String,
    ban_list_key: String,
}

impl<K> KvSessionStore<K>
where
    K: KeyValueStore + Sync,
{
    pub fn new(kv: K, config: &AccountConfig) -> Self {
        Self {
            kv,
            current_user_key: config.current_user_key.clone(),
            ban_list_key: config.ban_list_key.clone(),
        }
    }

    /// Underlying backend
    pub fn kv(&self) -> &K {
        &self.kv
    }

    async fn load_ban_list(&self) -> AccountResult<BanList> {
        let Some(raw) = self.kv.get(&self.ban_list_key).await? else {
            return Ok(BanList::default());
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                AccountError::MalformedPersistedRecord(format!("ban list: {e}")).log();
                Ok(BanList::default())
            }
        }
    }
}

impl<K> SessionStore for KvSessionStore<K>
where
    K: KeyValueStore + Sync,
{
    async fn load(&self) -> AccountResult<Option<User>> {
        let Some(raw) = self.kv.get(&self.current_user_key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                AccountError::MalformedPersistedRecord(format!("current user: {e}")).log();
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> AccountResult<()> {
        let json = serde_json::to_string(user)?;
        self.kv.put(&self.current_user_key, &json).await?;
        Ok(())
    }

    async fn clear(&self) -> AccountResult<()> {
        self.kv.remove(&self.current_user_key).await?;
        Ok(())
    }

    async fn is_banned(&self, email: &Email) -> AccountResult<bool> {
        Ok(self.load_ban_list().await?.contains(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::fixtures::consumer;
    use crate::domain::value_object::badge::Badge;
    use platform::storage::{FileStore, MemoryStore};

    fn store(kv: MemoryStore) -> KvSessionStore<MemoryStore> {
        KvSessionStore::new(kv, &AccountConfig::development())
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let store = store(MemoryStore::new());
        let user = consumer("amaka@example.com")
            .with_badge(Badge::new("early_adopter"))
            .unwrap()
            .with_credits_adjusted(-5);

        store.save(&user).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let kv = MemoryStore::new();
        let store = store(kv.clone());
        let user = consumer("amaka@example.com");

        store.save(&user).await.unwrap();
        let first = kv.get("current_user").await.unwrap();
        store.save(&user).await.unwrap();
        let second = kv.get("current_user").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(kv.len().await, 1);
    }

    #[tokio::test]
    async fn test_load_absent() {
        assert_eq!(store(MemoryStore::new()).load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_malformed_is_absent() {
        let store = store(MemoryStore::with_entry("current_user", "{\"id\":"));
        assert_eq!(store.load().await.unwrap(), None);

        let store = self::store(MemoryStore::with_entry("current_user", "{\"id\":\"1\"}"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_accepts_legacy_banned_status() {
        let user = consumer("amaka@example.com");
        let mut value = serde_json::to_value(&user).unwrap();
        value["status"] = "banned".into();
        let store = store(MemoryStore::with_entry("current_user", value.to_string()));

        let loaded = store.load().await.unwrap().unwrap();
        assert!(!loaded.can_login());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = store(MemoryStore::new());
        store.save(&consumer("amaka@example.com")).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_is_banned() {
        let store = store(MemoryStore::with_entry(
            "banned_users",
            r#"["spammer@example.com"]"#,
        ));
        assert!(store.is_banned(&Email::new("Spammer@Example.com")).await.unwrap());
        assert!(!store.is_banned(&Email::new("amaka@example.com")).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_or_malformed_ban_list_bans_nobody() {
        let email = Email::new("spammer@example.com");
        assert!(!store(MemoryStore::new()).is_banned(&email).await.unwrap());

        let store = store(MemoryStore::with_entry("banned_users", "not json"));
        assert!(!store.is_banned(&email).await.unwrap());
    }

    #[tokio::test]
    async fn test_file_backend_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = AccountConfig::development();
        let user = consumer("amaka@example.com");

        KvSessionStore::new(FileStore::new(dir.path()), &config)
            .save(&user)
            .await
            .unwrap();

        let reopened = KvSessionStore::new(FileStore::new(dir.path()), &config);
        assert_eq!(reopened.load().await.unwrap(), Some(user));
    }
}
