pub mod config;

pub use config::{
    config_path, credentials_from_env, load_config, load_config_from, read_config,
    resolve_credentials, save_config, save_config_to, Config, StoreCredentials,
};
