use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, in increasing precedence: `config/default`, `config/{RUN_ENV}`
/// (both optional, any format the `config` crate understands), then
/// environment variables prefixed with `CARTIFY` using `__` as the section
/// separator (e.g. `CARTIFY__SERVER__PORT=8086`). A `.env` file is loaded
/// into the environment first, once per process.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "CARTIFY".to_string());

    let config_root = config_root();
    let default_path = config_root.join("config/default");
    let env_path = config_root.join(format!("config/{run_env}"));

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    builder.build()?.try_deserialize()
}

/// Locates the directory holding `config/`, walking up from the manifest
/// directory (under cargo) or the current directory (deployed binary).
fn config_root() -> PathBuf {
    let start = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));
    if let Some(root) = start.ancestors().find(|dir| dir.join("config").is_dir()) {
        return root.to_path_buf();
    }
    start
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures the dotenv file is loaded into the environment exactly once.
///
/// `DOTENV_OVERRIDE` selects an alternative file; a missing file is not an
/// error.
pub fn ensure_dotenv_loaded() {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());
    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
}
