//! Cascade deletion across denormalized record sets.
//!
//! The record sets are flat and independently keyed; nothing in the schema
//! enforces referential integrity, and no cross-collection transaction
//! exists. [`CascadeCoordinator`] walks the dependent-record graph for a
//! parent entity and issues independent deletes, dependents strictly before
//! the parent row.
//!
//! Every step is independently retryable and deleting an already-absent
//! record is a no-op success, so re-invoking a cascade after a partial
//! failure converges to the same final state. A failed step is logged and
//! counted; the walk proceeds with the remaining independent steps instead
//! of aborting. The parent row is only removed once every dependent step in
//! its subtree succeeded, so the id stays usable as the re-run handle.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use reportal_core::object_store::ObjectStore;
use reportal_core::types::DbId;
use serde::Serialize;

use crate::models::file::StoredFile;
use crate::models::folder::Folder;
use crate::repositories::{
    ApprovalRepo, CustomerRepo, FileRepo, FolderRepo, MessageRepo, OfferItemRepo, ReadReceiptRepo,
};
use crate::DbPool;

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Error type for record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The record stores the cascade walks, as one seam.
///
/// The production implementation is [`PgCascadeStore`]; tests use an
/// in-memory double. Deleting rows that do not exist returns `Ok(0)` /
/// `Ok(false)`, never an error.
#[async_trait]
pub trait CascadeStore: Send + Sync {
    // Customer dependents
    async fn delete_approvals_by_customer(&self, customer_id: DbId) -> Result<u64, StoreError>;
    async fn delete_messages_by_customer(&self, customer_id: DbId) -> Result<u64, StoreError>;
    async fn delete_customer(&self, customer_id: DbId) -> Result<bool, StoreError>;

    // File dependents
    async fn find_file(&self, file_id: DbId) -> Result<Option<StoredFile>, StoreError>;
    async fn delete_approvals_for_path(
        &self,
        project_id: DbId,
        path: &str,
    ) -> Result<u64, StoreError>;
    async fn delete_receipts_for_path(&self, path: &str) -> Result<u64, StoreError>;
    async fn delete_messages_for_path(
        &self,
        project_id: DbId,
        path: &str,
    ) -> Result<u64, StoreError>;
    async fn delete_file(&self, file_id: DbId) -> Result<bool, StoreError>;

    // Folder tree
    async fn child_folders(&self, folder_id: DbId) -> Result<Vec<Folder>, StoreError>;
    async fn delete_folder_items(&self, folder_id: DbId) -> Result<u64, StoreError>;
    async fn delete_folder(&self, folder_id: DbId) -> Result<bool, StoreError>;
}

/// Postgres-backed implementation delegating to the repositories.
pub struct PgCascadeStore {
    pool: DbPool,
}

impl PgCascadeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CascadeStore for PgCascadeStore {
    async fn delete_approvals_by_customer(&self, customer_id: DbId) -> Result<u64, StoreError> {
        Ok(ApprovalRepo::delete_by_customer(&self.pool, customer_id).await?)
    }

    async fn delete_messages_by_customer(&self, customer_id: DbId) -> Result<u64, StoreError> {
        Ok(MessageRepo::delete_by_customer(&self.pool, customer_id).await?)
    }

    async fn delete_customer(&self, customer_id: DbId) -> Result<bool, StoreError> {
        Ok(CustomerRepo::delete(&self.pool, customer_id).await?)
    }

    async fn find_file(&self, file_id: DbId) -> Result<Option<StoredFile>, StoreError> {
        Ok(FileRepo::find_by_id(&self.pool, file_id).await?)
    }

    async fn delete_approvals_for_path(
        &self,
        project_id: DbId,
        path: &str,
    ) -> Result<u64, StoreError> {
        Ok(ApprovalRepo::delete_for_path(&self.pool, project_id, path).await?)
    }

    async fn delete_receipts_for_path(&self, path: &str) -> Result<u64, StoreError> {
        Ok(ReadReceiptRepo::delete_for_path(&self.pool, path).await?)
    }

    async fn delete_messages_for_path(
        &self,
        project_id: DbId,
        path: &str,
    ) -> Result<u64, StoreError> {
        Ok(MessageRepo::delete_for_path(&self.pool, project_id, path).await?)
    }

    async fn delete_file(&self, file_id: DbId) -> Result<bool, StoreError> {
        Ok(FileRepo::delete(&self.pool, file_id).await?)
    }

    async fn child_folders(&self, folder_id: DbId) -> Result<Vec<Folder>, StoreError> {
        Ok(FolderRepo::list_children(&self.pool, folder_id).await?)
    }

    async fn delete_folder_items(&self, folder_id: DbId) -> Result<u64, StoreError> {
        Ok(OfferItemRepo::delete_by_folder(&self.pool, folder_id).await?)
    }

    async fn delete_folder(&self, folder_id: DbId) -> Result<bool, StoreError> {
        Ok(FolderRepo::delete(&self.pool, folder_id).await?)
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of one cascade invocation.
///
/// `failed_steps > 0` means the cascade should be re-invoked; the walk is
/// designed so a re-run converges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeOutcome {
    /// Rows removed across all record sets (parent row included).
    pub rows_removed: u64,
    /// Fan-out steps that failed and were skipped over.
    pub failed_steps: u32,
}

impl CascadeOutcome {
    /// `true` when every step of the walk succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed_steps == 0
    }

    fn record_rows(&mut self, step: &'static str, result: Result<u64, StoreError>) {
        match result {
            Ok(rows) => self.rows_removed += rows,
            Err(e) => {
                tracing::error!(step, error = %e, "Cascade step failed, continuing");
                self.failed_steps += 1;
            }
        }
    }

    fn record_row(&mut self, step: &'static str, result: Result<bool, StoreError>) {
        match result {
            Ok(true) => self.rows_removed += 1,
            // Already absent: deleting a missing record is a no-op success.
            Ok(false) => {}
            Err(e) => {
                tracing::error!(step, error = %e, "Cascade step failed, continuing");
                self.failed_steps += 1;
            }
        }
    }

    fn absorb(&mut self, other: CascadeOutcome) {
        self.rows_removed += other.rows_removed;
        self.failed_steps += other.failed_steps;
    }
}

// ---------------------------------------------------------------------------
// Coordinator
// ---------------------------------------------------------------------------

/// Fans out deletes across dependent record sets when a parent entity is
/// removed.
pub struct CascadeCoordinator {
    store: Arc<dyn CascadeStore>,
    objects: Arc<dyn ObjectStore>,
}

impl CascadeCoordinator {
    pub fn new(store: Arc<dyn CascadeStore>, objects: Arc<dyn ObjectStore>) -> Self {
        Self { store, objects }
    }

    /// Coordinator over the Postgres stores.
    pub fn postgres(pool: DbPool, objects: Arc<dyn ObjectStore>) -> Self {
        Self::new(Arc::new(PgCascadeStore::new(pool)), objects)
    }

    /// Remove a customer together with every approval record and message
    /// referencing it. The customer row goes last: an orphaned dependent is
    /// recoverable by re-running, a dangling customer id referenced by
    /// surviving orphans is not detectable.
    pub async fn delete_customer(&self, customer_id: DbId) -> CascadeOutcome {
        let mut outcome = CascadeOutcome::default();

        outcome.record_rows(
            "approvals_by_customer",
            self.store.delete_approvals_by_customer(customer_id).await,
        );
        outcome.record_rows(
            "messages_by_customer",
            self.store.delete_messages_by_customer(customer_id).await,
        );

        if outcome.is_complete() {
            outcome.record_row("customer", self.store.delete_customer(customer_id).await);
        } else {
            tracing::warn!(
                customer_id,
                "Keeping customer row until dependent deletions succeed; re-run to converge"
            );
        }

        tracing::info!(
            customer_id,
            rows_removed = outcome.rows_removed,
            failed_steps = outcome.failed_steps,
            "Customer cascade finished"
        );
        outcome
    }

    /// Remove a file: its approval records, read receipts, and messages
    /// keyed to its path, then the payload in object storage, then the
    /// metadata row. The metadata row goes last because it is the handle a
    /// re-run needs to find the path and object key again.
    pub async fn delete_file(&self, file_id: DbId) -> CascadeOutcome {
        let mut outcome = CascadeOutcome::default();

        let file = match self.store.find_file(file_id).await {
            Ok(Some(file)) => file,
            Ok(None) => {
                tracing::info!(file_id, "File already absent, nothing to cascade");
                return outcome;
            }
            Err(e) => {
                tracing::error!(file_id, error = %e, "Failed to load file for cascade");
                outcome.failed_steps += 1;
                return outcome;
            }
        };
        let path = file.full_path();

        outcome.record_rows(
            "approvals_for_path",
            self.store
                .delete_approvals_for_path(file.project_id, &path)
                .await,
        );
        outcome.record_rows(
            "receipts_for_path",
            self.store.delete_receipts_for_path(&path).await,
        );
        outcome.record_rows(
            "messages_for_path",
            self.store
                .delete_messages_for_path(file.project_id, &path)
                .await,
        );

        if let Err(e) = self.objects.remove(&file.object_key).await {
            tracing::error!(file_id, object_key = %file.object_key, error = %e,
                "Payload removal failed, continuing");
            outcome.failed_steps += 1;
        }

        if outcome.is_complete() {
            outcome.record_row("file", self.store.delete_file(file.id).await);
        } else {
            tracing::warn!(
                file_id,
                "Keeping file row until dependent deletions succeed; re-run to converge"
            );
        }

        tracing::info!(
            file_id,
            rows_removed = outcome.rows_removed,
            failed_steps = outcome.failed_steps,
            "File cascade finished"
        );
        outcome
    }

    /// Remove a folder subtree depth-first: child folders fully first, then
    /// the catalog items owned by this folder, then the folder row itself.
    /// A folder row is never removed while anything below it survived.
    pub async fn delete_folder(&self, folder_id: DbId) -> CascadeOutcome {
        let outcome = self.delete_folder_tree(folder_id).await;
        tracing::info!(
            folder_id,
            rows_removed = outcome.rows_removed,
            failed_steps = outcome.failed_steps,
            "Folder cascade finished"
        );
        outcome
    }

    fn delete_folder_tree(
        &self,
        folder_id: DbId,
    ) -> Pin<Box<dyn Future<Output = CascadeOutcome> + Send + '_>> {
        Box::pin(async move {
            let mut outcome = CascadeOutcome::default();

            match self.store.child_folders(folder_id).await {
                Ok(children) => {
                    for child in children {
                        outcome.absorb(self.delete_folder_tree(child.id).await);
                    }
                }
                Err(e) => {
                    tracing::error!(folder_id, error = %e, "Failed to list child folders");
                    outcome.failed_steps += 1;
                }
            }

            outcome.record_rows(
                "folder_items",
                self.store.delete_folder_items(folder_id).await,
            );

            if outcome.is_complete() {
                outcome.record_row("folder", self.store.delete_folder(folder_id).await);
            } else {
                tracing::warn!(
                    folder_id,
                    "Keeping folder row until descendants are gone; re-run to converge"
                );
            }

            outcome
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use reportal_core::approval::file_key;
    use reportal_core::object_store::ObjectStoreError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory double for the record stores. Rows are reduced to the
    /// attributes the cascade keys on.
    #[derive(Default)]
    struct MemoryState {
        /// (customer_id, project_id, file_path)
        approvals: Vec<(DbId, DbId, String)>,
        /// (customer_id, project_id, folder_path)
        messages: Vec<(DbId, DbId, String)>,
        /// (file_path, reader_id)
        receipts: Vec<(String, DbId)>,
        customers: Vec<DbId>,
        files: Vec<StoredFile>,
        folders: Vec<Folder>,
        /// (folder_id, item_id)
        items: Vec<(DbId, DbId)>,
        folder_delete_order: Vec<DbId>,
        failing_steps: HashSet<&'static str>,
        failing_folders: HashSet<DbId>,
    }

    #[derive(Default)]
    struct MemoryStore {
        state: Mutex<MemoryState>,
    }

    impl MemoryStore {
        fn fail_step(&self, step: &'static str) {
            self.state.lock().unwrap().failing_steps.insert(step);
        }

        fn clear_failures(&self) {
            self.state.lock().unwrap().failing_steps.clear();
        }

        fn check(&self, step: &'static str) -> Result<(), StoreError> {
            if self.state.lock().unwrap().failing_steps.contains(step) {
                Err(StoreError::Unavailable(format!("{step} is down")))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl CascadeStore for MemoryStore {
        async fn delete_approvals_by_customer(&self, customer_id: DbId) -> Result<u64, StoreError> {
            self.check("approvals_by_customer")?;
            let mut state = self.state.lock().unwrap();
            let before = state.approvals.len();
            state.approvals.retain(|(c, _, _)| *c != customer_id);
            Ok((before - state.approvals.len()) as u64)
        }

        async fn delete_messages_by_customer(&self, customer_id: DbId) -> Result<u64, StoreError> {
            self.check("messages_by_customer")?;
            let mut state = self.state.lock().unwrap();
            let before = state.messages.len();
            state.messages.retain(|(c, _, _)| *c != customer_id);
            Ok((before - state.messages.len()) as u64)
        }

        async fn delete_customer(&self, customer_id: DbId) -> Result<bool, StoreError> {
            self.check("customer")?;
            let mut state = self.state.lock().unwrap();
            let before = state.customers.len();
            state.customers.retain(|c| *c != customer_id);
            Ok(state.customers.len() < before)
        }

        async fn find_file(&self, file_id: DbId) -> Result<Option<StoredFile>, StoreError> {
            self.check("find_file")?;
            let state = self.state.lock().unwrap();
            Ok(state.files.iter().find(|f| f.id == file_id).cloned())
        }

        async fn delete_approvals_for_path(
            &self,
            project_id: DbId,
            path: &str,
        ) -> Result<u64, StoreError> {
            self.check("approvals_for_path")?;
            let mut state = self.state.lock().unwrap();
            let before = state.approvals.len();
            // Same semantics as the SQL: basename match scoped to project.
            state
                .approvals
                .retain(|(_, p, ap)| !(*p == project_id && file_key(ap) == file_key(path)));
            Ok((before - state.approvals.len()) as u64)
        }

        async fn delete_receipts_for_path(&self, path: &str) -> Result<u64, StoreError> {
            self.check("receipts_for_path")?;
            let mut state = self.state.lock().unwrap();
            let before = state.receipts.len();
            state.receipts.retain(|(rp, _)| rp != path);
            Ok((before - state.receipts.len()) as u64)
        }

        async fn delete_messages_for_path(
            &self,
            project_id: DbId,
            path: &str,
        ) -> Result<u64, StoreError> {
            self.check("messages_for_path")?;
            let mut state = self.state.lock().unwrap();
            let before = state.messages.len();
            state
                .messages
                .retain(|(_, p, mp)| !(*p == project_id && mp == path));
            Ok((before - state.messages.len()) as u64)
        }

        async fn delete_file(&self, file_id: DbId) -> Result<bool, StoreError> {
            self.check("file")?;
            let mut state = self.state.lock().unwrap();
            let before = state.files.len();
            state.files.retain(|f| f.id != file_id);
            Ok(state.files.len() < before)
        }

        async fn child_folders(&self, folder_id: DbId) -> Result<Vec<Folder>, StoreError> {
            self.check("child_folders")?;
            let state = self.state.lock().unwrap();
            Ok(state
                .folders
                .iter()
                .filter(|f| f.parent_id == Some(folder_id))
                .cloned()
                .collect())
        }

        async fn delete_folder_items(&self, folder_id: DbId) -> Result<u64, StoreError> {
            self.check("folder_items")?;
            let mut state = self.state.lock().unwrap();
            let before = state.items.len();
            state.items.retain(|(f, _)| *f != folder_id);
            Ok((before - state.items.len()) as u64)
        }

        async fn delete_folder(&self, folder_id: DbId) -> Result<bool, StoreError> {
            let mut state = self.state.lock().unwrap();
            if state.failing_folders.contains(&folder_id) {
                return Err(StoreError::Unavailable(format!("folder {folder_id} is stuck")));
            }
            let before = state.folders.len();
            state.folders.retain(|f| f.id != folder_id);
            if state.folders.len() < before {
                state.folder_delete_order.push(folder_id);
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    /// Object store double recording removed keys.
    #[derive(Default)]
    struct MemoryObjects {
        removed: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl ObjectStore for MemoryObjects {
        async fn remove(&self, object_key: &str) -> Result<(), ObjectStoreError> {
            if self.fail {
                return Err(ObjectStoreError::Io(std::io::Error::other("storage down")));
            }
            self.removed.lock().unwrap().push(object_key.to_string());
            Ok(())
        }
    }

    fn folder(id: DbId, parent_id: Option<DbId>) -> Folder {
        Folder {
            id,
            project_id: 1,
            parent_id,
            name: format!("folder-{id}"),
            created_at: Utc::now(),
        }
    }

    fn stored_file(id: DbId) -> StoredFile {
        StoredFile {
            id,
            project_id: 1,
            folder_path: "reports/2024".to_string(),
            file_name: "summary.pdf".to_string(),
            object_key: format!("objects/{id}"),
            is_report: true,
            uploaded_at: Utc::now(),
        }
    }

    fn coordinator(store: Arc<MemoryStore>, objects: Arc<MemoryObjects>) -> CascadeCoordinator {
        CascadeCoordinator::new(store, objects)
    }

    // -- customer cascade --------------------------------------------------

    #[tokio::test]
    async fn customer_cascade_removes_dependents_and_customer() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut state = store.state.lock().unwrap();
            state.customers = vec![7, 8];
            state.approvals = vec![
                (7, 1, "a.pdf".into()),
                (7, 2, "b.pdf".into()),
                (8, 1, "c.pdf".into()),
            ];
            state.messages = vec![(7, 1, "reports".into()), (8, 1, "reports".into())];
        }
        let coordinator = coordinator(Arc::clone(&store), Arc::new(MemoryObjects::default()));

        let outcome = coordinator.delete_customer(7).await;

        assert!(outcome.is_complete());
        assert_eq!(outcome.rows_removed, 4);
        let state = store.state.lock().unwrap();
        assert!(state.approvals.iter().all(|(c, _, _)| *c != 7));
        assert!(state.messages.iter().all(|(c, _, _)| *c != 7));
        assert_eq!(state.customers, vec![8]);
    }

    #[tokio::test]
    async fn customer_cascade_rerun_is_a_noop() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut state = store.state.lock().unwrap();
            state.customers = vec![7];
            state.approvals = vec![(7, 1, "a.pdf".into())];
        }
        let coordinator = coordinator(Arc::clone(&store), Arc::new(MemoryObjects::default()));

        let first = coordinator.delete_customer(7).await;
        let second = coordinator.delete_customer(7).await;

        assert!(first.is_complete());
        assert_eq!(second, CascadeOutcome::default());
        assert!(store.state.lock().unwrap().approvals.is_empty());
    }

    #[tokio::test]
    async fn customer_cascade_keeps_parent_when_a_step_fails_then_converges() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut state = store.state.lock().unwrap();
            state.customers = vec![7];
            state.approvals = vec![(7, 1, "a.pdf".into())];
            state.messages = vec![(7, 1, "reports".into())];
        }
        store.fail_step("messages_by_customer");
        let coordinator = coordinator(Arc::clone(&store), Arc::new(MemoryObjects::default()));

        let partial = coordinator.delete_customer(7).await;
        assert_eq!(partial.failed_steps, 1);
        // The approvals step still ran; the customer row was kept.
        {
            let state = store.state.lock().unwrap();
            assert!(state.approvals.is_empty());
            assert_eq!(state.customers, vec![7]);
        }

        // Re-run after the store recovers: converges to the clean state.
        store.clear_failures();
        let rerun = coordinator.delete_customer(7).await;
        assert!(rerun.is_complete());
        let state = store.state.lock().unwrap();
        assert!(state.messages.is_empty());
        assert!(state.customers.is_empty());
    }

    // -- file cascade ------------------------------------------------------

    #[tokio::test]
    async fn file_cascade_removes_records_payload_and_metadata() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut state = store.state.lock().unwrap();
            state.files = vec![stored_file(42)];
            // Duplicate spellings of the same physical file.
            state.approvals = vec![
                (7, 1, "reports/2024/summary.pdf".into()),
                (7, 1, "summary.pdf".into()),
                (7, 1, "reports/2024/other.pdf".into()),
            ];
            state.receipts = vec![
                ("reports/2024/summary.pdf".into(), 7),
                ("reports/2024/other.pdf".into(), 7),
            ];
            state.messages = vec![(7, 1, "reports/2024/summary.pdf".into())];
        }
        let objects = Arc::new(MemoryObjects::default());
        let coordinator = coordinator(Arc::clone(&store), Arc::clone(&objects));

        let outcome = coordinator.delete_file(42).await;

        assert!(outcome.is_complete());
        let state = store.state.lock().unwrap();
        assert_eq!(state.approvals.len(), 1);
        assert_eq!(state.receipts.len(), 1);
        assert!(state.messages.is_empty());
        assert!(state.files.is_empty());
        assert_eq!(*objects.removed.lock().unwrap(), vec!["objects/42"]);
    }

    #[tokio::test]
    async fn file_cascade_on_absent_file_is_a_noop() {
        let store = Arc::new(MemoryStore::default());
        let objects = Arc::new(MemoryObjects::default());
        let coordinator = coordinator(Arc::clone(&store), Arc::clone(&objects));

        let outcome = coordinator.delete_file(999).await;

        assert_eq!(outcome, CascadeOutcome::default());
        assert!(objects.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_cascade_keeps_metadata_when_payload_removal_fails() {
        let store = Arc::new(MemoryStore::default());
        store.state.lock().unwrap().files = vec![stored_file(42)];
        let objects = Arc::new(MemoryObjects {
            fail: true,
            ..Default::default()
        });
        let coordinator = coordinator(Arc::clone(&store), objects);

        let outcome = coordinator.delete_file(42).await;

        assert_eq!(outcome.failed_steps, 1);
        // The metadata row survives as the re-run handle.
        assert_eq!(store.state.lock().unwrap().files.len(), 1);
    }

    // -- folder cascade ----------------------------------------------------

    #[tokio::test]
    async fn folder_cascade_deletes_children_before_parent() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut state = store.state.lock().unwrap();
            state.folders = vec![folder(1, None), folder(2, Some(1)), folder(3, Some(2))];
            state.items = vec![(1, 10), (2, 20), (3, 30)];
        }
        let coordinator = coordinator(Arc::clone(&store), Arc::new(MemoryObjects::default()));

        let outcome = coordinator.delete_folder(1).await;

        assert!(outcome.is_complete());
        // 3 folders + 3 items
        assert_eq!(outcome.rows_removed, 6);
        let state = store.state.lock().unwrap();
        assert!(state.folders.is_empty());
        assert!(state.items.is_empty());
        assert_eq!(state.folder_delete_order, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn folder_cascade_keeps_parent_when_a_child_is_stuck() {
        let store = Arc::new(MemoryStore::default());
        {
            let mut state = store.state.lock().unwrap();
            state.folders = vec![folder(1, None), folder(2, Some(1))];
            state.items = vec![(1, 10), (2, 20)];
            state.failing_folders.insert(2);
        }
        let coordinator = coordinator(Arc::clone(&store), Arc::new(MemoryObjects::default()));

        let outcome = coordinator.delete_folder(1).await;

        assert_eq!(outcome.failed_steps, 1);
        let state = store.state.lock().unwrap();
        // Items of both folders were still removed (independent steps)...
        assert!(state.items.is_empty());
        // ...but both folder rows survive: the child is stuck and the
        // parent never outlives a referencing child.
        assert_eq!(state.folders.len(), 2);
    }

    // -- error type --------------------------------------------------------

    #[tokio::test]
    async fn failing_step_surfaces_as_unavailable() {
        let store = MemoryStore::default();
        store.fail_step("approvals_by_customer");
        let err = store.delete_approvals_by_customer(7).await.unwrap_err();
        assert_matches!(err, StoreError::Unavailable(_));
    }
}
