use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::models::FormField;

use super::FormFieldSet;

/// Registrations currently being relayed, shared across requests.
///
/// A registration is identified by its email and course; while one is in
/// flight an identical one is refused.
#[derive(Debug, Clone, Default)]
pub struct PendingSubmissions {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl PendingSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_for(fields: &FormFieldSet) -> String {
        format!(
            "{}|{}",
            fields.get(FormField::Email).trim().to_lowercase(),
            fields.get(FormField::Course).trim()
        )
    }

    /// Claims `key`, or returns `None` if it is already pending. The claim
    /// is released when the returned guard drops.
    pub fn try_begin(&self, key: String) -> Option<PendingGuard> {
        if !self.lock().insert(key.clone()) {
            debug!("registration {:?} already pending", key);
            return None;
        }
        Some(PendingGuard {
            keys: self.keys.clone(),
            key,
        })
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.lock().contains(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.keys.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Debug)]
pub struct PendingGuard {
    keys: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let mut keys = self.keys.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        keys.remove(&self.key);
    }
}
