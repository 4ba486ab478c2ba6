//! Command handlers over one [`ProfileStore`] and its token store.

use crate::{
    CliError, CliResult, commands::Commands, commands::LoginArgs,
    default_app_commands::DefaultAppCommands, env_commands::EnvCommands,
};

use appctl_config::{Config, Environments, TokenStoreBackend};
use appctl_profile::{
    AccessToken, DefaultApp, FileTokenStore, KeyringTokenStore, MemoryTokenStore, ProfileError,
    ProfileStore, ServerUser, TokenStore,
};
use log::{info, warn};
use serde_json::{Value, json};

/// Everything a command needs, passed explicitly instead of held globally.
pub struct Session {
    store: ProfileStore,
    tokens: Box<dyn TokenStore>,
    environments: Environments,
    default_environment: String,
}

impl Session {
    pub fn new(
        store: ProfileStore,
        tokens: Box<dyn TokenStore>,
        environments: Environments,
        default_environment: impl Into<String>,
    ) -> Self {
        Self {
            store,
            tokens,
            environments,
            default_environment: default_environment.into(),
        }
    }

    /// Builds a session from validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ProfileStore::new(config.profile_location()),
            build_token_store(config),
            config.environments(),
            config.default_environment(),
        )
    }

    pub fn store(&mut self) -> &mut ProfileStore {
        &mut self.store
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub async fn execute(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login(args) => self.login(args).await,
            Commands::Logout => self.logout().await,
            Commands::Whoami => self.whoami().await,
            Commands::DefaultApp { action } => match action {
                DefaultAppCommands::Set { app } => self.set_default_app(&app),
                DefaultAppCommands::Clear => self.clear_default_app(),
                DefaultAppCommands::Show => self.show_default_app(),
            },
            Commands::Env { action } => match action {
                EnvCommands::List => Ok(self.list_environments()),
            },
        }
    }

    pub async fn login(&mut self, args: LoginArgs) -> CliResult<Value> {
        let environment = args
            .env
            .unwrap_or_else(|| self.default_environment.clone());
        if !self.environments.contains(&environment) {
            return Err(ProfileError::unknown_environment(environment).into());
        }

        let user = ServerUser {
            id: args.user_id,
            name: args.user_name,
            display_name: args.display_name,
            email: args.email,
        };
        let token = AccessToken::new(args.token_id, args.token);

        let profile = self
            .store
            .save_user(self.tokens.as_ref(), user, token, &environment)
            .await?;

        info!("Logged in {} on {environment}", profile.user_name);
        Ok(json!({ "profile": profile }))
    }

    pub async fn logout(&mut self) -> CliResult<Value> {
        let had_user = self.store.get_user()?.is_some();
        self.store.delete_user(self.tokens.as_ref()).await?;
        Ok(json!({ "loggedOut": had_user }))
    }

    pub async fn whoami(&mut self) -> CliResult<Value> {
        let Some(profile) = self.store.get_user()?.cloned() else {
            return Ok(Value::Null);
        };

        // A profile from an environment no longer configured is still reported.
        let endpoint = match profile.endpoint(&self.environments) {
            Ok(endpoint) => Some(endpoint),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        let token_id = profile.access_token(self.tokens.as_ref()).await?.map(|t| t.id);

        Ok(json!({
            "profile": profile,
            "endpoint": endpoint,
            "hasAccessToken": token_id.is_some(),
            "accessTokenId": token_id.flatten(),
        }))
    }

    pub fn set_default_app(&mut self, app: &str) -> CliResult<Value> {
        let default_app = DefaultApp::parse(app).ok_or_else(|| {
            CliError::invalid_input(format!(
                "'{app}' is not a valid app; expected <owner>/<app>"
            ))
        })?;

        let profile = self.store.set_default_app(Some(default_app))?;
        Ok(json!({ "defaultApp": profile.default_app }))
    }

    pub fn clear_default_app(&mut self) -> CliResult<Value> {
        let profile = self.store.set_default_app(None)?;
        Ok(json!({ "defaultApp": profile.default_app }))
    }

    pub fn show_default_app(&mut self) -> CliResult<Value> {
        let profile = self
            .store
            .get_user()?
            .ok_or_else(ProfileError::not_logged_in)?;
        Ok(json!({ "defaultApp": profile.default_app }))
    }

    pub fn list_environments(&self) -> Value {
        let environments: Vec<Value> = self
            .environments
            .iter()
            .map(|(name, env)| {
                json!({
                    "name": name,
                    "endpoint": env.endpoint,
                    "description": env.description,
                    "default": name == self.default_environment,
                })
            })
            .collect();

        json!({ "environments": environments })
    }
}

/// Token store for the configured backend.
pub fn build_token_store(config: &Config) -> Box<dyn TokenStore> {
    match config.token_store.backend {
        TokenStoreBackend::Keyring => {
            Box::new(KeyringTokenStore::new(config.token_store.service.clone()))
        }
        TokenStoreBackend::File => Box::new(FileTokenStore::new(config.token_file_path())),
        TokenStoreBackend::Memory => Box::new(MemoryTokenStore::new()),
    }
}
