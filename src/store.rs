//! Holder for the currently published blame snapshot.
//!
//! Writers replace the whole `Arc` under a short write lock. Readers clone
//! the `Arc` and run their queries without holding any lock, so a query
//! always sees one complete snapshot.

use std::sync::{Arc, RwLock};

use crate::blame::BlameSnapshot;
use crate::error::{AppError, Result};

#[derive(Debug, Default)]
pub struct BlameStore {
    current: RwLock<Arc<BlameSnapshot>>,
}

impl BlameStore {
    pub fn new(snapshot: BlameSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot to answer a query from
    pub fn current(&self) -> Result<Arc<BlameSnapshot>> {
        let current = self
            .current
            .read()
            .map_err(|_| AppError::Internal("Lock poisoned".to_string()))?;
        Ok(Arc::clone(&current))
    }

    /// Replace the current snapshot, returning the one it superseded
    pub fn publish(&self, snapshot: BlameSnapshot) -> Result<Arc<BlameSnapshot>> {
        let next = Arc::new(snapshot);
        let mut current = self
            .current
            .write()
            .map_err(|_| AppError::Internal("Lock poisoned".to_string()))?;
        Ok(std::mem::replace(&mut *current, next))
    }
}

pub type SharedStore = Arc<BlameStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlameLists, Commit};

    #[test]
    fn readers_keep_their_snapshot_across_publish() {
        let store = BlameStore::default();
        let before = store.current().unwrap();
        assert!(before.commits().is_empty());

        let next = BlameSnapshot::new(vec![Commit::new(0, "c0", "alice", 10)], BlameLists::new());
        let superseded = store.publish(next).unwrap();

        assert!(Arc::ptr_eq(&before, &superseded));
        assert!(before.commits().is_empty());
        assert_eq!(store.current().unwrap().commits().len(), 1);
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let store = Arc::new(BlameStore::default());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = store.current().unwrap();
                        let n = snapshot.commits().len();
                        assert!(n == 0 || n == 2);
                    }
                })
            })
            .collect();

        let commits = vec![Commit::new(0, "c0", "alice", 10), Commit::new(1, "c1", "bob", 20)];
        store.publish(BlameSnapshot::new(commits, BlameLists::new())).unwrap();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
