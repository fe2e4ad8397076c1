use std::env;
use std::ffi::OsString;
use std::sync::Mutex;

// Process-wide lock: the environment is global state, so tests that touch it
// must not interleave.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs a closure with one overridden environment variable.
pub(crate) fn with_env_var<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
    with_env_vars(&[(key, Some(value))], f)
}

/// Runs a closure while holding the global environment lock and applying
/// overrides, restoring previous values afterwards even on panic.
pub(crate) fn with_env_vars<T>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let backups: Vec<(&str, Option<OsString>)> = overrides
        .iter()
        .map(|(key, _)| (*key, env::var_os(key)))
        .collect();

    for (key, value) in overrides {
        #[allow(unused_unsafe)]
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, backup) in backups.into_iter().rev() {
        #[allow(unused_unsafe)]
        unsafe {
            match backup {
                Some(original) => env::set_var(key, original),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
