//! Process configuration, read from the environment after `.env` is loaded.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::repositories::SeedData;
use crate::validation::{dishes, orders, Check, Data};

pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read seed file {}: {source}", path.display())]
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid seed file {}: {source}", path.display())]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid seed file {}: {reason}", path.display())]
    InvalidSeed { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SERVER_ADDR`
    pub server_addr: String,
    /// `SEED_DATA`: JSON file with `{ "dishes": [...], "orders": [...] }`.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.into(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            server_addr: non_empty("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into()),
            seed_path: non_empty("SEED_DATA").map(PathBuf::from),
        }
    }

    pub fn load_seed(&self) -> Result<SeedData, ConfigError> {
        match &self.seed_path {
            Some(path) => load_seed_file(path),
            None => Ok(SeedData::default()),
        }
    }
}

pub fn load_seed_file(path: &Path) -> Result<SeedData, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    let seed: SeedData =
        serde_json::from_str(&content).map_err(|source| ConfigError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    check_seed(&seed).map_err(|reason| ConfigError::InvalidSeed {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(seed)
}

/// Seeded records obey the same rules as records created over HTTP, and ids
/// are unique within each collection.
fn check_seed(seed: &SeedData) -> Result<(), String> {
    let mut seen = HashSet::new();
    for dish in &seed.dishes {
        let data = as_data(dish)?;
        passes(&data, &dishes::create_chain())
            .and_then(|_| dishes::dish_fields(&data).map_err(|e| e.to_string()))
            .map_err(|e| format!("dish {}: {e}", dish.id))?;
        unique(&mut seen, &dish.id, "dish")?;
    }

    let mut seen = HashSet::new();
    for order in &seed.orders {
        let data = as_data(order)?;
        passes(&data, &orders::create_chain())
            .and_then(|_| orders::new_order(&data).map_err(|e| e.to_string()))
            .map_err(|e| format!("order {}: {e}", order.id))?;
        unique(&mut seen, &order.id, "order")?;
    }
    Ok(())
}

fn passes(data: &Data, chain: &[Check<'_>]) -> Result<(), String> {
    chain
        .iter()
        .try_for_each(|check| check(data))
        .map_err(|e| e.to_string())
}

fn as_data<T: Serialize>(record: &T) -> Result<Data, String> {
    match serde_json::to_value(record).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        _ => Err("record is not an object".into()),
    }
}

fn unique<'a>(seen: &mut HashSet<&'a str>, id: &'a str, kind: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err(format!("{kind} with an empty id"));
    }
    if !seen.insert(id) {
        return Err(format!("duplicate {kind} id {id}"));
    }
    Ok(())
}
