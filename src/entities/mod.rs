pub mod dish;
pub mod order;

use serde::{Deserialize, Serialize};

/// Wire envelope shared by requests and responses: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
