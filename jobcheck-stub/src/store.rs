//! In-memory job storage
//!
//! Stands in for the server's database. Cheap to clone; clones share state.

use jobcheck_core::domain::job::Job;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, PoisonError};

#[derive(Debug, Default)]
pub struct Tables {
    pub jobs: BTreeMap<i64, Job>,
    last_id: i64,
}

impl Tables {
    /// Next sequential identifier, starting at 1
    pub fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobStore {
    tables: Arc<RwLock<Tables>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}
