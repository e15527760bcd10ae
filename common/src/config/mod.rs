pub mod aws_client_config;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

#[derive(Default, Serialize, Deserialize, Clone, Eq, PartialEq, EnumIter, Display, Debug)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Development,
    QA,
    Staging,
    Production,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    Load(#[from] envy::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the default configuration for the project. This is the
    /// configuration used in production.
    ///
    /// For every environment other than `local`, `.env.<environment>.local` and then
    /// `.env.<environment>` are read, followed by `.env.local` and `.env`.
    ///
    /// If a variable is set in the OS environment, it will not be
    /// overriden by any file.
    pub fn load_default<TConfig>() -> Result<TConfig, ConfigError>
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter() {
            if environment != Environment::Local {
                dotenv::from_filename(format!(".env.{environment}.local")).ok();
                dotenv::from_filename(format!(".env.{environment}")).ok();
            }
        }

        ConfigLoader::load::<TConfig>()
    }

    fn load<TConfig>() -> Result<TConfig, ConfigError>
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        Ok(envy::from_env::<TConfig>()?)
    }

    /// Deserializes a configuration from an explicit set of variables instead of the
    /// process environment. Keys follow the same naming as environment variables.
    pub fn load_from_iter<TConfig, I>(vars: I) -> Result<TConfig, ConfigError>
    where
        TConfig: DeserializeOwned,
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, TConfig>(vars)?)
    }
}
