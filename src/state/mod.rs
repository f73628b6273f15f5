use crate::repositories::in_memory::{InMemoryDishRepository, InMemoryOrderRepository};
use crate::repositories::{DishRepository, OrderRepository, SeedData};
use actix_web::web::Data;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn DishRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new<D, O>(dishes: D, orders: O) -> Data<Self>
    where
        D: DishRepository + 'static,
        O: OrderRepository + 'static,
    {
        Data::new(Self {
            dishes: Arc::new(dishes),
            orders: Arc::new(orders),
        })
    }

    pub fn in_memory(seed: SeedData) -> Data<Self> {
        Self::new(
            InMemoryDishRepository::with_items(seed.dishes),
            InMemoryOrderRepository::with_items(seed.orders),
        )
    }
}
