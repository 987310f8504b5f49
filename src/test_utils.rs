//! Test utilities shared by the unit tests.
//!
//! Mutating the environment while another thread reads it is undefined
//! behaviour on some platforms, and building a reqwest client reads proxy
//! variables. Every test that touches the environment or builds a client
//! holds [`env_lock`] for its whole body.
//!
//! # Example
//!
//! ```ignore
//! let _env = env_lock();
//! set_env("OMDB_MINDER_TEST_X", "key");
//! let client = OmdbClient::new(config).unwrap();
//! ```

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize access to the process environment.
///
/// A test that panicked while holding the lock leaves nothing to clean up,
/// so poisoning is ignored.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Set an environment variable. Hold [`env_lock`] while calling.
pub fn set_env(var: &str, value: &str) {
    unsafe { std::env::set_var(var, value) };
}

/// Remove an environment variable. Hold [`env_lock`] while calling.
pub fn clear_env(var: &str) {
    unsafe { std::env::remove_var(var) };
}
