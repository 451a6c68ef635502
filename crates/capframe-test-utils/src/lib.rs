//! Testing utilities for capframe workspace
//!
//! Shared fixtures: sessions over in-memory storage, a storage backend that
//! refuses writes, and a compact catalog for edge cases.

#![allow(missing_docs)]

use capframe_catalog::{
    builtin, Capability, Catalog, LevelDescriptor, ProficiencyLevel, RoleMapping,
};
use capframe_core::Session;
use capframe_store::{MemoryStorage, Storage, StorageError};
use parking_lot::Mutex;
use std::sync::Arc;

pub fn memory_storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

pub fn setup_session() -> Session<'static> {
    Session::with_storage(builtin(), memory_storage())
}

pub fn setup_session_with(storage: Arc<dyn Storage>) -> Session<'static> {
    Session::with_storage(builtin(), storage)
}

/// Storage that reads normally but fails every write after `fail_writes()`
#[derive(Debug, Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    failing: Mutex<bool>,
    failed_writes: Mutex<usize>,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self) {
        *self.failing.lock() = true;
    }

    pub fn failed_writes(&self) -> usize {
        *self.failed_writes.lock()
    }

    fn refuse(&self) -> Result<(), StorageError> {
        if *self.failing.lock() {
            *self.failed_writes.lock() += 1;
            return Err(StorageError::Unavailable("write refused".to_string()));
        }
        Ok(())
    }
}

impl Storage for FlakyStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.refuse()?;
        self.inner.save(key, blob)
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.refuse()?;
        self.inner.clear(key)
    }
}

/// Capability with `per_level` numbered descriptors at every level
pub fn numbered_capability(id: &str, per_level: usize) -> Capability {
    let texts: Vec<String> = (0..per_level).map(|i| format!("{id} descriptor {i}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    ProficiencyLevel::ALL
        .into_iter()
        .fold(Capability::new(id, id, ""), |cap, level| {
            cap.with_level(LevelDescriptor::new(level, &refs))
        })
}

/// Two capabilities and one role mapping the first twice
pub fn small_catalog() -> Catalog {
    let role = RoleMapping::new("lead", "Lead")
        .requires("alpha", ProficiencyLevel::Exemplar)
        .requires("alpha", ProficiencyLevel::Foundation);
    Catalog::new(
        vec![numbered_capability("alpha", 5), numbered_capability("beta", 2)],
        vec![role],
        vec![],
    )
}
