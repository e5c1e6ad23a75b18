use crate::client::StoreClient;
use crate::config::{
    config_path, credentials_from_env, read_config, save_config, save_config_to, Config,
    StoreCredentials,
};
use crate::engine::WheelSettings;
use crate::error::{WheelError, WheelResult};
use crate::room::RoomService;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and the store client
pub struct CliContext {
    config: Config,
    /// File the config was read from; saves go back to it.
    config_path: Option<PathBuf>,
    credentials: Option<StoreCredentials>,
    client: Option<Arc<StoreClient>>,
}

impl CliContext {
    /// Create an empty context that has not read any configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            config_path: None,
            credentials: None,
            client: None,
        }
    }

    /// Load context from saved configuration and the environment.
    /// A config file that exists but cannot be read is an error.
    pub fn load() -> WheelResult<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::new()),
        }
    }

    pub fn load_from(path: &Path) -> WheelResult<Self> {
        let config = read_config(path)?;
        let credentials = credentials_from_env(&config).ok();

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
            credentials,
            client: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Saved wheel settings as they are, for display.
    pub fn wheel_settings(&self) -> WheelSettings {
        self.config.wheel
    }

    /// Wheel settings for drawing. Only spins need them to be consistent,
    /// so a bad wheel section does not block `auth` or member edits.
    pub fn spin_settings(&self) -> WheelResult<WheelSettings> {
        self.config.wheel.validate()?;
        Ok(self.config.wheel)
    }

    /// Get or create the store client (requires credentials)
    pub fn store(&mut self) -> WheelResult<Arc<StoreClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let credentials = self.credentials()?.clone();
        let client = Arc::new(StoreClient::new(&credentials)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn rooms(&mut self) -> WheelResult<RoomService<Arc<StoreClient>>> {
        Ok(RoomService::new(self.store()?))
    }

    /// Store credentials, resolving them lazily if necessary
    pub fn credentials(&mut self) -> WheelResult<&StoreCredentials> {
        if self.credentials.is_none() {
            self.credentials = Some(credentials_from_env(&self.config)?);
        }

        self.credentials.as_ref().ok_or(WheelError::StoreNotConfigured)
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Explicit room, or the remembered default
    pub fn room_slug(&self, explicit: Option<&str>) -> WheelResult<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.config.default_room.clone())
            .ok_or_else(|| {
                WheelError::InvalidInput(
                    "No room given. Pass --room <SLUG> or run 'wheel use <SLUG>'.".to_string(),
                )
            })
    }

    /// Set and save new store credentials
    pub fn set_credentials(&mut self, url: String, api_key: String) -> WheelResult<()> {
        self.config.store_url = Some(url.clone());
        self.config.api_key = Some(api_key.clone());
        self.save()?;

        let credentials = StoreCredentials {
            url: url.trim_end_matches('/').to_string(),
            api_key,
        };
        self.client = Some(Arc::new(StoreClient::new(&credentials)?));
        self.credentials = Some(credentials);
        Ok(())
    }

    /// Remember a room as the default for later commands
    pub fn set_default_room(&mut self, slug: &str) -> WheelResult<()> {
        self.config.default_room = Some(slug.to_string());
        self.save()
    }

    fn save(&self) -> WheelResult<()> {
        match &self.config_path {
            Some(path) => save_config_to(path, &self.config),
            None => save_config(&self.config),
        }
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    credentials: Option<StoreCredentials>,
    default_room: Option<String>,
    wheel: Option<WheelSettings>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            credentials: None,
            default_room: None,
            wheel: None,
        }
    }

    pub fn with_store(mut self, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.credentials = Some(StoreCredentials {
            url: url.into(),
            api_key: api_key.into(),
        });
        self
    }

    pub fn with_default_room(mut self, slug: impl Into<String>) -> Self {
        self.default_room = Some(slug.into());
        self
    }

    pub fn with_wheel_settings(mut self, settings: WheelSettings) -> Self {
        self.wheel = Some(settings);
        self
    }

    pub fn build(self) -> WheelResult<CliContext> {
        let mut context = match self.credentials {
            Some(credentials) => CliContext {
                config: Config::default(),
                config_path: None,
                credentials: Some(credentials),
                client: None,
            },
            None => CliContext::load()?,
        };

        if let Some(slug) = self.default_room {
            context.config.default_room = Some(slug);
        }
        if let Some(settings) = self.wheel {
            context.config.wheel = settings;
        }

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
