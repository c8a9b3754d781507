use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use quick_cache::sync::Cache as Backing;

const CAPACITY: usize = 256;

pub struct Config {
    pub enabled: bool,
    pub ttl: Duration,
}

pub struct Cache<K, V> {
    enabled: bool,
    ttl: Duration,
    inner: Backing<K, (Instant, Arc<V>)>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash,
{
    pub fn new(config: Config) -> Self {
        Self {
            enabled: config.enabled,
            ttl: config.ttl,
            inner: Backing::new(CAPACITY),
        }
    }

    pub fn insert(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);

        if self.enabled {
            self.inner
                .insert(key, (Instant::now() + self.ttl, Arc::clone(&value)));
        }

        value
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        if !self.enabled {
            return None;
        }

        let (expires_at, value) = self.inner.get(key)?;

        if expires_at <= Instant::now() {
            self.inner.remove(key);
            return None;
        }

        Some(value)
    }
}
