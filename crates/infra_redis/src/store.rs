//! Voter store connection and raw key-value operations
//!
//! One Redis connection per process, established at startup and reused for
//! the process lifetime. The `ConnectionManager` multiplexes and reconnects
//! internally and is safe to share across concurrent requests. Every key this
//! application touches lives under the `voter:` prefix, isolating it from
//! anything else in a shared Redis instance.
//!
//! The store is deliberately dumb: whole-value get/set/delete plus a
//! full-prefix key scan. Single-key operations are atomic; nothing spanning
//! multiple keys is. All precondition logic lives in the repository above.

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use crate::error::StoreError;

/// Fallback location when `REDIS_URL` is not set
pub const DEFAULT_REDIS_URL: &str = "redis://0.0.0.0:6379";

/// Namespace prefix for every key this application owns
pub const VOTER_KEY_PREFIX: &str = "voter:";

/// Configuration for the store connection
///
/// # Example
///
/// ```rust
/// use infra_redis::RedisConfig;
///
/// let config = RedisConfig::new("redis://localhost:6379");
/// assert_eq!(config.key_prefix, "voter:");
/// ```
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: String,
    /// Key namespace prefix
    pub key_prefix: String,
}

impl RedisConfig {
    /// Creates a configuration for the given URL with the default namespace
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key_prefix: VOTER_KEY_PREFIX.to_string(),
        }
    }

    /// Resolves the URL from the `REDIS_URL` environment override, falling
    /// back to [`DEFAULT_REDIS_URL`]
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        Self::new(url)
    }

    /// Overrides the key namespace prefix
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REDIS_URL)
    }
}

/// The key-value seam over the one shared Redis connection
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and verifies the connection with a PING
    ///
    /// Fails fast: a connection error here is meant to be process-fatal in
    /// the server binary rather than discovered on the first request.
    pub async fn connect(config: &RedisConfig) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(config.url.as_str()).map_err(|e| StoreError::ConnectionFailed {
                url: config.url.clone(),
                message: e.to_string(),
            })?;

        let mut conn =
            client
                .get_connection_manager()
                .await
                .map_err(|e| StoreError::ConnectionFailed {
                    url: config.url.clone(),
                    message: e.to_string(),
                })?;

        let _: String = redis::cmd("PING").query_async(&mut conn).await.map_err(|e| {
            StoreError::ConnectionFailed {
                url: config.url.clone(),
                message: e.to_string(),
            }
        })?;

        info!(url = %config.url, "connected to redis");
        Ok(Self {
            conn,
            key_prefix: config.key_prefix.clone(),
        })
    }

    /// Derives the namespaced key for an integer identifier, e.g. `voter:42`
    pub fn key_for(&self, id: i64) -> String {
        format!("{}{}", self.key_prefix, id)
    }

    fn scan_pattern(&self) -> String {
        format!("{}*", self.key_prefix)
    }

    /// Fetches the record body stored under an identifier, if any
    pub async fn get(&self, id: i64) -> Result<Option<String>, StoreError> {
        self.get_raw(&self.key_for(id)).await
    }

    /// Fetches a record body by its full key
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let body: Option<String> = conn.get(key).await?;
        Ok(body)
    }

    /// Upserts a record body under an identifier; inserts if absent,
    /// overwrites if present, with no existence signal either way
    pub async fn set(&self, id: i64, body: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(self.key_for(id), body).await?;
        Ok(())
    }

    /// Returns true if a record exists under the identifier
    pub async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let present: bool = conn.exists(self.key_for(id)).await?;
        Ok(present)
    }

    /// Deletes the record under an identifier, returning false when there
    /// was nothing to delete
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.del(self.key_for(id)).await?;
        Ok(removed > 0)
    }

    /// Returns every key in this application's namespace
    pub async fn scan_keys(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn.keys(self.scan_pattern()).await?;
        Ok(keys)
    }

    /// Deletes the given keys in one batch call, returning the number
    /// actually removed. Not atomic with respect to the preceding scan.
    pub async fn delete_keys(&self, keys: &[String]) -> Result<u64, StoreError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(keys).await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RedisConfig::default();
        assert_eq!(config.url, DEFAULT_REDIS_URL);
        assert_eq!(config.key_prefix, VOTER_KEY_PREFIX);
    }

    #[test]
    fn test_config_prefix_override() {
        let config = RedisConfig::new("redis://example:6379").key_prefix("test-voter:");
        assert_eq!(config.key_prefix, "test-voter:");
    }
}
