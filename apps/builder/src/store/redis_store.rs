use std::sync::Mutex;
use std::time::Duration;

use redis::Commands;
use tracing::debug;

use crate::store::{KeyValueStore, StoreError, StoreResult};

/// Upper bound on connecting, reading and writing. Handlers call the store
/// synchronously, so a stalled server must fail fast instead of blocking.
const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Keys live directly in the Redis keyspace, one string value each.
pub struct RedisStore {
    client: redis::Client,
    conn: Mutex<Option<redis::Connection>>,
}

impl RedisStore {
    /// Validates the URL only; the connection is opened on first use.
    pub fn open(url: &str) -> StoreResult<Self> {
        Ok(Self {
            client: redis::Client::open(url)?,
            conn: Mutex::new(None),
        })
    }

    fn connect(&self) -> StoreResult<redis::Connection> {
        let conn = self.client.get_connection_with_timeout(IO_TIMEOUT)?;
        conn.set_read_timeout(Some(IO_TIMEOUT))?;
        conn.set_write_timeout(Some(IO_TIMEOUT))?;
        debug!("Opened redis connection");
        Ok(conn)
    }

    /// Runs `op` on the cached connection. A failed call drops the
    /// connection so the next one reconnects.
    fn with_conn<T>(
        &self,
        op: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>,
    ) -> StoreResult<T> {
        let mut slot = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("redis connection lock poisoned".to_string()))?;
        let mut conn = match slot.take() {
            Some(conn) => conn,
            None => self.connect()?,
        };
        let value = op(&mut conn)?;
        *slot = Some(conn);
        Ok(value)
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.with_conn(|conn| conn.get::<_, Option<String>>(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.with_conn(|conn| conn.set::<_, _, ()>(key, value))
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
