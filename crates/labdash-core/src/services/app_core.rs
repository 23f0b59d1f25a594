//! `AppCore` - the primary application facade.
//!
//! This is the composition target for core services. Adapters (CLI, GUI)
//! construct an `AppCore` with concrete store and runner implementations
//! and route every user action through it.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{ClassRecord, LabCatalog};
use crate::operations::{ClassOperation, LabTask};
use crate::ports::{ClassStore, CoreError, ScriptInvocation, ScriptOutcome, ScriptRunner, StoreError};
use crate::requests::{ClassRequest, ClassSubmission, RequestOutcome};

use super::{ClassRegistry, RegistryError};

/// The core application facade.
///
/// Owns the class registry exclusively. Mutations only touch memory;
/// nothing is persisted until [`AppCore::save`] is called.
///
/// # Example
///
/// ```ignore
/// let store = labdash_store::build_store(&settings);
/// let runner = labdash_runtime::build_runner(&settings);
/// let mut core = AppCore::open(store, runner, LabCatalog::mock()).await?;
///
/// core.handle(ClassRequest::Add(fields))?;
/// core.save().await?;
/// ```
pub struct AppCore {
    registry: ClassRegistry,
    store: Arc<dyn ClassStore>,
    runner: Arc<dyn ScriptRunner>,
    catalog: LabCatalog,
}

impl AppCore {
    /// Load the stored classes and build the facade.
    ///
    /// Stored data that breaks a registry invariant (duplicate or blank
    /// names, missing quarter or students) is reported as corrupt storage.
    pub async fn open(
        store: Arc<dyn ClassStore>,
        runner: Arc<dyn ScriptRunner>,
        catalog: LabCatalog,
    ) -> Result<Self, CoreError> {
        let registry = load_registry(store.as_ref()).await?;
        info!(
            classes = registry.len(),
            store = %store.describe(),
            "Loaded classes"
        );
        Ok(Self {
            registry,
            store,
            runner,
            catalog,
        })
    }

    /// Read-only access to the class registry.
    pub const fn classes(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Available templates, datastores, adapters and VMs.
    pub const fn catalog(&self) -> &LabCatalog {
        &self.catalog
    }

    /// Replace the catalog (e.g. after querying the host for templates).
    pub fn set_catalog(&mut self, catalog: LabCatalog) {
        self.catalog = catalog;
    }

    /// Apply a registry mutation.
    pub fn handle(&mut self, request: ClassRequest) -> Result<RequestOutcome, CoreError> {
        let outcome = match request {
            ClassRequest::Add(fields) => RequestOutcome::Added(self.registry.add(fields)?),
            ClassRequest::Update {
                original_name,
                fields,
            } => RequestOutcome::Updated(self.registry.update(&original_name, fields)?),
            ClassRequest::Delete { original_name } => {
                RequestOutcome::Deleted(self.registry.delete(&original_name))
            }
        };
        Ok(outcome)
    }

    /// Handle a form submission: add if it has no original name, else update.
    pub fn submit(&mut self, submission: ClassSubmission) -> Result<RequestOutcome, CoreError> {
        for warning in self.catalog.unknown_selections(&submission.fields.normalized()) {
            warn!(class = %submission.fields.name, "{warning}");
        }
        self.handle(ClassRequest::from_submission(submission))
    }

    /// Delete the class named `original_name`. Missing classes are ignored.
    pub fn delete(&mut self, original_name: &str) -> Option<ClassRecord> {
        self.registry.delete(original_name)
    }

    /// Persist the current class list as a full snapshot.
    pub async fn save(&self) -> Result<(), CoreError> {
        debug!(classes = self.registry.len(), store = %self.store.describe(), "Saving classes");
        self.store.save(self.registry.records()).await?;
        Ok(())
    }

    /// Discard in-memory changes and reload from the store.
    ///
    /// On failure the current registry is kept.
    pub async fn reload(&mut self) -> Result<(), CoreError> {
        self.registry = load_registry(self.store.as_ref()).await?;
        Ok(())
    }

    /// Run a script and return its output, failed runs included.
    pub async fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, CoreError> {
        info!(script = %invocation.script, "Running script");
        let outcome = self.runner.run(invocation).await?;
        if !outcome.is_success() {
            warn!(script = %invocation.script, status = ?outcome.status, "Script did not succeed");
        }
        Ok(outcome)
    }

    /// Run an operation against the class currently named `class_name`.
    pub async fn run_class_operation(
        &self,
        class_name: &str,
        operation: &ClassOperation,
    ) -> Result<ScriptOutcome, CoreError> {
        let class = self
            .registry
            .get(class_name)
            .ok_or_else(|| RegistryError::NotFound {
                name: class_name.to_string(),
            })?;
        let invocation = operation.invocation(class)?;
        self.run(&invocation).await
    }

    /// Run a host-wide task.
    pub async fn run_lab_task(&self, task: LabTask) -> Result<ScriptOutcome, CoreError> {
        self.run(&task.invocation()).await
    }

    /// Reload the template list from the host's template listing.
    ///
    /// Only a successful run replaces the templates. The outcome is
    /// returned either way.
    pub async fn refresh_templates(&mut self) -> Result<ScriptOutcome, CoreError> {
        let outcome = self.run_lab_task(LabTask::ListTemplates).await?;
        if outcome.is_success() {
            self.catalog.set_templates_from_listing(&outcome.text);
            debug!(templates = self.catalog.templates.len(), "Refreshed templates");
        }
        Ok(outcome)
    }
}

async fn load_registry(store: &dyn ClassStore) -> Result<ClassRegistry, CoreError> {
    let records = store.load().await?;
    ClassRegistry::from_records(records).map_err(|e| {
        CoreError::Store(StoreError::Corrupt {
            path: store.describe().into(),
            reason: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClassFields, ClassId};
    use crate::ports::class_store::{self, MockClassStore};
    use crate::ports::script_runner::{self, MockScriptRunner};
    use crate::ports::{ScriptError, ScriptStatus};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory store that remembers the last saved snapshot.
    struct MemoryStore {
        records: Mutex<Vec<ClassRecord>>,
    }

    impl MemoryStore {
        fn with(records: Vec<ClassRecord>) -> Arc<Self> {
            Arc::new(Self {
                records: Mutex::new(records),
            })
        }

        fn names(&self) -> Vec<String> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.name.clone())
                .collect()
        }
    }

    #[async_trait]
    impl class_store::ClassStore for MemoryStore {
        async fn load(&self) -> Result<Vec<ClassRecord>, StoreError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn save(&self, records: &[ClassRecord]) -> Result<(), StoreError> {
            *self.records.lock().unwrap() = records.to_vec();
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    /// Runner that echoes the invocation back.
    struct EchoRunner;

    #[async_trait]
    impl script_runner::ScriptRunner for EchoRunner {
        async fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutcome, ScriptError> {
            Ok(ScriptOutcome::succeeded(
                invocation.script.clone(),
                invocation.to_string(),
            ))
        }
    }

    fn record(name: &str) -> ClassRecord {
        ClassRecord::from_fields(ClassId::new(), ClassFields::new(name, "Fall 2024", ["alice"]))
    }

    async fn open_with(records: Vec<ClassRecord>) -> (AppCore, Arc<MemoryStore>) {
        let store = MemoryStore::with(records);
        let core = AppCore::open(store.clone(), Arc::new(EchoRunner), LabCatalog::mock())
            .await
            .unwrap();
        (core, store)
    }

    #[tokio::test]
    async fn test_open_loads_records_in_order() {
        let (core, _) = open_with(vec![record("CS470"), record("CS480")]).await;
        let names: Vec<_> = core.classes().list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["CS470", "CS480"]);
    }

    #[tokio::test]
    async fn test_open_rejects_duplicate_names_as_corrupt() {
        let store = MemoryStore::with(vec![record("CS101"), record("cs101")]);
        let result = AppCore::open(store, Arc::new(EchoRunner), LabCatalog::default()).await;
        assert!(matches!(
            result,
            Err(CoreError::Store(StoreError::Corrupt { .. }))
        ));
    }

    #[tokio::test]
    async fn test_mutations_are_not_persisted_until_save() {
        let (mut core, store) = open_with(vec![record("CS470")]).await;

        core.handle(ClassRequest::Add(ClassFields::new("CS101", "Fall", ["bob"])))
            .unwrap();
        assert_eq!(store.names(), vec!["CS470"]);

        core.save().await.unwrap();
        assert_eq!(store.names(), vec!["CS470", "CS101"]);
    }

    #[tokio::test]
    async fn test_submit_routes_add_and_update() {
        let (mut core, _) = open_with(vec![]).await;

        let added = core
            .submit(ClassSubmission::new(ClassFields::new("CS101", "Fall", ["a"])))
            .unwrap();
        let RequestOutcome::Added(id) = added else {
            panic!("expected an added class");
        };

        let updated = core
            .submit(ClassSubmission::editing(
                "CS101",
                ClassFields::new("CS102", "Fall", ["a"]),
            ))
            .unwrap();
        assert_eq!(updated, RequestOutcome::Updated(id));
        assert!(core.classes().get("CS102").is_some());
    }

    #[tokio::test]
    async fn test_rejected_request_reports_reason() {
        let (mut core, _) = open_with(vec![record("CS101")]).await;

        let duplicate = core
            .handle(ClassRequest::Add(ClassFields::new("cs101", "Fall", ["a"])))
            .unwrap_err();
        assert!(matches!(
            duplicate,
            CoreError::Registry(RegistryError::DuplicateName { .. })
        ));

        let missing = core
            .handle(ClassRequest::Add(ClassFields::new("CS200", "", ["a"])))
            .unwrap_err();
        assert_eq!(missing.to_string(), "Missing required field: quarter");
        assert_eq!(core.classes().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_request_is_idempotent() {
        let (mut core, _) = open_with(vec![record("CS101")]).await;

        let first = core.handle(ClassRequest::delete("CS101")).unwrap();
        assert!(matches!(first, RequestOutcome::Deleted(Some(_))));
        let second = core.handle(ClassRequest::delete("CS101")).unwrap();
        assert_eq!(second, RequestOutcome::Deleted(None));
        assert!(core.delete("CS101").is_none());
    }

    #[tokio::test]
    async fn test_reload_discards_unsaved_changes() {
        let (mut core, _) = open_with(vec![record("CS101")]).await;
        core.delete("CS101");
        assert!(core.classes().is_empty());

        core.reload().await.unwrap();
        assert_eq!(core.classes().len(), 1);
    }

    #[tokio::test]
    async fn test_run_class_operation_uses_current_record() {
        let (core, _) = open_with(vec![record("CS101")]).await;

        let outcome = core
            .run_class_operation("CS101", &ClassOperation::DeleteAllResources)
            .await
            .unwrap();
        assert_eq!(
            outcome.text,
            "createStudentFolders.ps1 -ClassName 'CS101' -DeleteAll $true"
        );

        let missing = core
            .run_class_operation("CS999", &ClassOperation::RestartAllVms)
            .await
            .unwrap_err();
        assert!(matches!(
            missing,
            CoreError::Registry(RegistryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_lab_task() {
        let (core, _) = open_with(vec![]).await;
        let outcome = core.run_lab_task(LabTask::ListTemplates).await.unwrap();
        assert_eq!(outcome.text, "ListTemplates.ps1");
    }

    #[tokio::test]
    async fn test_refresh_templates_only_on_success() {
        let mut runner = MockScriptRunner::new();
        let mut seq = mockall::Sequence::new();
        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|i| Ok(ScriptOutcome::succeeded(i.script.clone(), "UbuntuTemplate\nKali\n")));
        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|i| Ok(ScriptOutcome::failed(i.script.clone(), Some(1), "ERROR")));
        let mut core = AppCore::open(MemoryStore::with(vec![]), Arc::new(runner), LabCatalog::default())
            .await
            .unwrap();

        core.refresh_templates().await.unwrap();
        assert_eq!(core.catalog().templates, vec!["UbuntuTemplate", "Kali"]);

        let failed = core.refresh_templates().await.unwrap();
        assert!(!failed.is_success());
        assert_eq!(core.catalog().templates, vec!["UbuntuTemplate", "Kali"]);
    }

    #[tokio::test]
    async fn test_failed_script_is_returned_as_data() {
        let mut runner = MockScriptRunner::new();
        runner.expect_run().times(1).returning(|invocation| {
            Ok(ScriptOutcome::failed(
                invocation.script.clone(),
                Some(1),
                format!("ERROR executing {}: access denied", invocation.script),
            ))
        });
        let core = AppCore::open(MemoryStore::with(vec![]), Arc::new(runner), LabCatalog::default())
            .await
            .unwrap();

        let outcome = core.run_lab_task(LabTask::PowerOnAllVms).await.unwrap();
        assert_eq!(outcome.status, ScriptStatus::Failed { exit_code: Some(1) });
        assert!(outcome.text.contains("PowerOnAllVMs.ps1"));
    }

    #[tokio::test]
    async fn test_missing_interpreter_propagates() {
        let mut runner = MockScriptRunner::new();
        runner.expect_run().returning(|_| {
            Err(ScriptError::InterpreterNotFound {
                interpreter: "powershell".to_string(),
            })
        });
        let core = AppCore::open(MemoryStore::with(vec![]), Arc::new(runner), LabCatalog::default())
            .await
            .unwrap();

        let err = core.run_lab_task(LabTask::ListTemplates).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Script(ScriptError::InterpreterNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_failure_propagates_and_keeps_registry() {
        let mut store = MockClassStore::new();
        store.expect_load().returning(|| Ok(Vec::new()));
        store.expect_describe().returning(|| "mock".to_string());
        store.expect_save().returning(|_| {
            Err(StoreError::Io {
                path: "/readonly/classes.json".into(),
                reason: "permission denied".to_string(),
            })
        });

        let mut core = AppCore::open(Arc::new(store), Arc::new(EchoRunner), LabCatalog::default())
            .await
            .unwrap();
        core.handle(ClassRequest::Add(ClassFields::new("CS101", "Fall", ["a"])))
            .unwrap();

        let err = core.save().await.unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::Io { .. })));
        assert_eq!(core.classes().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_store_propagates_on_open() {
        let mut store = MockClassStore::new();
        store.expect_load().returning(|| {
            Err(StoreError::Corrupt {
                path: "classes.json".into(),
                reason: "expected value at line 1 column 1".to_string(),
            })
        });
        store.expect_describe().returning(|| "classes.json".to_string());

        let result = AppCore::open(Arc::new(store), Arc::new(EchoRunner), LabCatalog::default()).await;
        assert!(matches!(
            result,
            Err(CoreError::Store(StoreError::Corrupt { .. }))
        ));
    }
}
