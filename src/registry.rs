//! Handle lifecycle manager.
//!
//! Stands in for the native side's allocation table: every live engine
//! instance is addressed by an opaque integer handle. Handles move through
//! `Unallocated -> Allocated -> Released`; release is terminal and
//! idempotent, and a failed allocation leaves no entry behind.

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};

use crate::constants::{DEFAULT_MAX_INSTANCES, HANDLE_SENTINEL, PRETOK_MAX_INSTANCES_ENV};
use crate::engine::Engine;
use crate::error::{PretokError, Result};

/// Opaque engine resource identifier. Valid handles are `>= 0`;
/// [`HANDLE_SENTINEL`] marks the unallocated and released states.
pub type RawHandle = i64;

struct Registry {
    entries: HashMap<RawHandle, Arc<dyn Engine>>,
    next_handle: RawHandle,
}

static REGISTRY: LazyLock<Mutex<Registry>> = LazyLock::new(|| {
    Mutex::new(Registry {
        entries: HashMap::new(),
        next_handle: 0,
    })
});

// Release must never panic, so a poisoned lock is recovered everywhere.
fn lock_registry() -> MutexGuard<'static, Registry> {
    REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn max_instances() -> Result<usize> {
    match env::var(PRETOK_MAX_INSTANCES_ENV) {
        Ok(value) => value.trim().parse().map_err(|_| {
            PretokError::InvalidArgument(format!(
                "{PRETOK_MAX_INSTANCES_ENV} must be a non-negative integer, got {value:?}"
            ))
        }),
        Err(_) => Ok(DEFAULT_MAX_INSTANCES),
    }
}

/// Reserves a registry slot for `engine` and returns its handle.
pub(crate) fn allocate(engine: Arc<dyn Engine>) -> Result<RawHandle> {
    let capacity = max_instances()?;
    let mut registry = lock_registry();
    if registry.entries.len() >= capacity {
        return Err(PretokError::Allocation(format!(
            "engine registry is at capacity ({capacity} instances)"
        )));
    }
    let handle = registry.next_handle;
    registry.next_handle += 1;
    registry.entries.insert(handle, engine);
    Ok(handle)
}

/// Releases a handle. Safe to call with the sentinel or with a handle that
/// was already released; never panics.
pub(crate) fn release(handle: RawHandle) {
    if handle == HANDLE_SENTINEL {
        return;
    }
    lock_registry().entries.remove(&handle);
}

/// Resolves a live handle to its engine.
pub(crate) fn engine_for(handle: RawHandle) -> Result<Arc<dyn Engine>> {
    lock_registry()
        .entries
        .get(&handle)
        .cloned()
        .ok_or_else(|| {
            PretokError::Allocation(format!("handle {handle} is not allocated"))
        })
}

/// Number of currently allocated engine instances.
#[cfg(test)]
pub(crate) fn live_instances() -> usize {
    lock_registry().entries.len()
}
