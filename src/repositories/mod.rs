pub mod in_memory;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    entities::dish::{Dish, DishFields},
    entities::order::{NewOrder, Order, OrderUpdate},
    errors::RepoErr,
};

#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn create(&self, fields: DishFields) -> Result<Dish, RepoErr>;
    async fn get_by_id(&self, id: &str) -> Result<Dish, RepoErr>;
    async fn list(&self) -> Result<Vec<Dish>, RepoErr>;
    async fn update(&self, id: &str, fields: DishFields) -> Result<Dish, RepoErr>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr>;
    async fn get_by_id(&self, id: &str) -> Result<Order, RepoErr>;
    async fn list(&self) -> Result<Vec<Order>, RepoErr>;
    async fn update(&self, id: &str, update: OrderUpdate) -> Result<Order, RepoErr>;
    async fn delete(&self, id: &str) -> Result<(), RepoErr>;
}

/// Initial contents of both collections, as loaded from a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}
