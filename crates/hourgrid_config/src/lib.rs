use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
pub mod models;
pub use models::*;

/// Loads the layered application configuration.
///
/// Sources, later ones winning:
/// 1. `<CONFIG_DIR>/default.*`
/// 2. `<CONFIG_DIR>/<RUN_ENV>.*` (RUN_ENV defaults to `debug`)
/// 3. environment variables prefixed with `PREFIX` (default `HOURGRID`), `__` after the prefix
///    and between keys, e.g. `HOURGRID__CALENDAR__TIME_ZONE=Europe/Berlin`
///
/// `CONFIG_DIR` defaults to `config` relative to the working directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Same as [`load_config`] but with an explicit config directory.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "HOURGRID".to_string());
    load_config_with_prefix(config_dir, &prefix)
}

/// Same as [`load_config_from`] with an explicit environment variable prefix.
pub fn load_config_with_prefix(config_dir: &Path, prefix: &str) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .separator("__")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, at most once.
///
/// `DOTENV_OVERRIDE` picks the file; otherwise a first CLI argument starting with `.env`,
/// otherwise `.env`. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
