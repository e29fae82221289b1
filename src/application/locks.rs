// src/application/locks.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::user::UserId;

/// Per-user async locks. Generation and publish requests of one user run one
/// at a time so the quota checks they perform cannot interleave.
#[derive(Default)]
pub struct UserLocks {
    slots: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user_id: UserId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries nobody holds or waits on are dropped.
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(user_id).or_default())
        };
        slot.lock_owned().await
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_user_waits_for_release() {
        let locks = Arc::new(UserLocks::new());
        let user = UserId::generate();
        let guard = locks.acquire(user).await;

        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _guard = locks.acquire(user).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn different_users_do_not_block() {
        let locks = UserLocks::new();
        let _first = locks.acquire(UserId::generate()).await;
        let second = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(UserId::generate()),
        )
        .await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn released_slots_are_pruned() {
        let locks = UserLocks::new();
        drop(locks.acquire(UserId::generate()).await);
        let _held = locks.acquire(UserId::generate()).await;
        assert_eq!(locks.tracked(), 1);
    }
}
