// src/config.rs
use crate::constants::{
    API_BASE_URL, API_KEY_ENV, BASE_URL_ENV, DEFAULT_NOTION_VERSION, NOTION_VERSION_ENV,
};
use crate::types::{ApiKey, BaseUrl, ValidationError};
use clap::{Parser, Subcommand};

/// Immutable settings a client is built from: credentials, API version and
/// the endpoint every request is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub notion_version: String,
    pub base_url: BaseUrl,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            base_url: default_base_url(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Result<Self, ValidationError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ValidationError::EmptyField("notion_version"));
        }
        self.notion_version = version.trim().to_string();
        Ok(self)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ValidationError> {
        self.base_url = BaseUrl::parse(url)?;
        Ok(self)
    }

    /// Reads `NOTION_API_KEY` (required), `NOTION_VERSION` and
    /// `NOTION_BASE_URL` (optional) from the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or(ValidationError::EmptyField(API_KEY_ENV))?;
        let mut config = Self::new(ApiKey::new(api_key)?);

        if let Some(version) = lookup(NOTION_VERSION_ENV) {
            config = config.with_version(version)?;
        }
        if let Some(url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(&url)?;
        }
        Ok(config)
    }
}

fn default_base_url() -> BaseUrl {
    BaseUrl::parse(API_BASE_URL).expect("Built-in API base URL should be valid")
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the Notion API", long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Notion API version sent with every request (overrides NOTION_VERSION)
    #[arg(long, global = true)]
    pub notion_version: Option<String>,

    /// API base URL (overrides NOTION_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per client operation. Every command prints JSON.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Retrieve a database schema
    GetDatabase { id: String },
    /// List every database shared with the integration
    ListDatabases,
    /// Retrieve a page and its property values
    GetPage { id: String },
    /// Retrieve a single block
    GetBlock { id: String },
    /// List all children of a block or page
    ListChildren { id: String },
    /// Retrieve a user
    GetUser { id: String },
    /// List every user in the workspace
    ListUsers,
    /// Update page properties from a JSON object of property values
    UpdatePage { id: String, properties: String },
    /// Create a page from a JSON page body (parent and properties)
    CreatePage { page: String },
    /// Append blocks from a JSON array to a block or page
    AppendChildren { id: String, children: String },
}

impl CommandLineInput {
    /// Builds the client configuration, letting flags override the environment.
    pub fn client_config(&self) -> Result<ClientConfig, ValidationError> {
        let mut config = ClientConfig::from_env()?;
        if let Some(version) = &self.notion_version {
            config = config.with_version(version.as_str())?;
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url)?;
        }
        Ok(config)
    }
}
