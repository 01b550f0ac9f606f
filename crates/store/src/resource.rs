use std::sync::Arc;

use tokio::sync::RwLock;

use models::Entity;

use crate::errors::StoreError;

/// Generic in-memory collection of one entity kind, insertion-ordered.
///
/// Records are owned exclusively by the store; reads hand out clones and
/// writes go through `update`/`delete`. Ids come from a per-store counter
/// that only moves forward, so an id freed by `delete` is never handed out
/// again. Cheap to clone and share: clones see the same collection.
#[derive(Clone)]
pub struct ResourceStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

struct Inner<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Entity> ResourceStore<T> {
    /// Fresh empty store; the first assigned id is 1.
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { records: Vec::new(), next_id: 1 })) }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let inner = self.inner.read().await;
        inner.records.clone()
    }

    /// Assign the next id, append the record, return it. Never fails.
    ///
    /// The counter is read and bumped under the write lock, so concurrent
    /// creates cannot observe the same value.
    pub async fn create(&self, input: T::Input) -> T {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = T::from_input(id, input);
        inner.records.push(record.clone());
        record
    }

    /// Find the record with the given id (linear scan).
    pub async fn get(&self, id: u64) -> Result<T, StoreError> {
        let inner = self.inner.read().await;
        inner
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound(T::NAME))
    }

    /// Merge a patch into the record with the given id, in place, and return
    /// the updated record. The id itself is not patchable.
    pub async fn update(&self, id: u64, patch: T::Patch) -> Result<T, StoreError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound(T::NAME))?;
        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove exactly the record with the given id, preserving the relative
    /// order of the remainder.
    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(T::NAME))?;
        inner.records.remove(pos);
        Ok(())
    }
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{NewProduct, NewUser, Product, User, UserPatch};

    fn named(name: &str) -> NewUser {
        NewUser { name: name.into(), email: None }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_in_insertion_order() {
        let store = ResourceStore::<User>::new();
        let john = store.create(named("John Doe")).await;
        let jane = store.create(named("Jane Doe")).await;
        assert_eq!(john.id, 1);
        assert_eq!(jane.id, 2);

        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "John Doe");
        assert_eq!(all[1].name, "Jane Doe");
    }

    #[tokio::test]
    async fn list_on_fresh_store_is_empty() {
        let store = ResourceStore::<Product>::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn get_returns_what_create_returned() {
        let store = ResourceStore::<User>::new();
        let created = store
            .create(NewUser { name: "John Doe".into(), email: Some("john@example.com".into()) })
            .await;
        let fetched = store.get(created.id).await.expect("present");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_id_signals_not_found() {
        let store = ResourceStore::<User>::new();
        let err = store.get(999).await.expect_err("absent");
        assert_eq!(err, StoreError::NotFound("User"));
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn update_merges_in_place_and_keeps_id() {
        let store = ResourceStore::<User>::new();
        let created = store
            .create(NewUser { name: "John Doe".into(), email: Some("john@example.com".into()) })
            .await;

        let updated = store
            .update(created.id, UserPatch { name: Some("Johnny Doe".into()), email: None })
            .await
            .expect("present");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Johnny Doe");
        // field absent from the patch is untouched
        assert_eq!(updated.email.as_deref(), Some("john@example.com"));

        let fetched = store.get(created.id).await.expect("present");
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_missing_id_signals_not_found() {
        let store = ResourceStore::<User>::new();
        let err = store.update(1, UserPatch::default()).await.expect_err("absent");
        assert_eq!(err, StoreError::NotFound("User"));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_preserves_order() {
        let store = ResourceStore::<User>::new();
        store.create(named("John Doe")).await;
        let jane = store.create(named("Jane Doe")).await;
        store.create(named("Jim Doe")).await;

        store.delete(jane.id).await.expect("present");

        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "John Doe");
        assert_eq!(all[1].name, "Jim Doe");

        let err = store.get(jane.id).await.expect_err("gone");
        assert_eq!(err, StoreError::NotFound("User"));
        let err = store.delete(jane.id).await.expect_err("gone");
        assert_eq!(err, StoreError::NotFound("User"));
    }

    #[tokio::test]
    async fn create_after_delete_does_not_reuse_ids() {
        // The counter outlives deletions, so the id freed by the delete is
        // never assigned again.
        let store = ResourceStore::<User>::new();
        let john = store.create(named("John Doe")).await;
        let jane = store.create(named("Jane Doe")).await;
        assert_eq!((john.id, jane.id), (1, 2));

        store.delete(john.id).await.expect("present");
        let replacement = store.create(named("New")).await;
        assert_eq!(replacement.id, 3);

        let ids: Vec<u64> = store.list().await.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_yield_unique_ids() {
        let store = ResourceStore::<Product>::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(NewProduct {
                        name: format!("item-{i}"),
                        price: 1.0,
                        description: None,
                    })
                    .await
                    .id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.expect("task"));
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(store.list().await.len(), 32);
    }
}
