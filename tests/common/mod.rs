use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;
use turfbook::config::ConfigManager;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated config manager backed by a unique directory.
pub fn setup_config_env() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}
