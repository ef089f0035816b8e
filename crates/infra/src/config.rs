use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_COLLECTION_NAME: &str = "cas-service-registry";

/// How the registry assigns ids to services saved without one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdStrategy {
    /// Random positive id
    Random,
    /// Id derived from a hash of the service content. Identical services
    /// get the same id and overwrite each other.
    ContentHash,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidIdStrategyError {
    #[error("Unknown id strategy: `{0}`")]
    Unknown(String),
}

impl FromStr for IdStrategy {
    type Err = InvalidIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "content-hash" | "content_hash" | "hash" => Ok(Self::ContentHash),
            _ => Err(InvalidIdStrategyError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub connection_string: String,
    pub db_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the collection holding the registered services
    pub collection_name: String,
    /// Drop the collection, and every service in it, when the registry
    /// is initialized at startup
    pub drop_collection: bool,
    pub id_strategy: IdStrategy,
    /// `None` means the inmemory registry is used
    pub mongodb: Option<MongoConfig>,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from the given variable lookup, falling back to
    /// defaults for missing or invalid values
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let collection_name = match lookup("SERVICE_REGISTRY_COLLECTION") {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            Some(_) => {
                warn!(
                    "The given SERVICE_REGISTRY_COLLECTION is empty, falling back to the default collection: {}.",
                    DEFAULT_COLLECTION_NAME
                );
                DEFAULT_COLLECTION_NAME.into()
            }
            None => DEFAULT_COLLECTION_NAME.into(),
        };

        let drop_collection = match lookup("SERVICE_REGISTRY_DROP_COLLECTION") {
            Some(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    warn!(
                        "The given SERVICE_REGISTRY_DROP_COLLECTION: {} is not valid, the collection will not be dropped.",
                        value
                    );
                    false
                }
            },
            None => false,
        };

        let id_strategy = match lookup("SERVICE_REGISTRY_ID_STRATEGY") {
            Some(value) => value.parse::<IdStrategy>().unwrap_or_else(|e| {
                warn!("{}, falling back to random ids.", e);
                IdStrategy::Random
            }),
            None => IdStrategy::Random,
        };

        let mongodb = match (
            lookup("MONGODB_CONNECTION_STRING"),
            lookup("MONGODB_NAME"),
        ) {
            (Some(connection_string), Some(db_name)) => Some(MongoConfig {
                connection_string,
                db_name,
            }),
            _ => {
                info!("MONGODB_CONNECTION_STRING and MONGODB_NAME env vars was not provided.");
                None
            }
        };

        Self {
            collection_name,
            drop_collection,
            id_strategy,
            mongodb,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
