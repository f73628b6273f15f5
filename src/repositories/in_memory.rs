use crate::entities::dish::{Dish, DishFields};
use crate::entities::order::{NewOrder, Order, OrderUpdate};
use crate::errors::RepoErr;
use crate::repositories::{DishRepository, OrderRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Dishes in insertion order. Append-only: there is no delete.
#[derive(Clone, Default)]
pub struct InMemoryDishRepository {
    inner: Arc<RwLock<Vec<Dish>>>,
}

impl InMemoryDishRepository {
    pub fn with_items(dishes: Vec<Dish>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dishes)),
        }
    }
}

#[async_trait]
impl DishRepository for InMemoryDishRepository {
    async fn create(&self, fields: DishFields) -> Result<Dish, RepoErr> {
        let mut items = self.inner.write().await;
        let dish = Dish::new(fields);
        items.push(dish.clone());
        Ok(dish)
    }

    async fn get_by_id(&self, id: &str) -> Result<Dish, RepoErr> {
        let items = self.inner.read().await;
        items
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(RepoErr::NotFound)
    }

    async fn list(&self) -> Result<Vec<Dish>, RepoErr> {
        Ok(self.inner.read().await.clone())
    }

    async fn update(&self, id: &str, fields: DishFields) -> Result<Dish, RepoErr> {
        let mut items = self.inner.write().await;
        let d = items
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(RepoErr::NotFound)?;
        d.apply(fields);
        Ok(d.clone())
    }
}

/// Orders in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn with_items(orders: Vec<Order>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(orders)),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr> {
        let mut items = self.inner.write().await;
        let order = Order::new(new);
        items.push(order.clone());
        Ok(order)
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, RepoErr> {
        let items = self.inner.read().await;
        items
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepoErr::NotFound)
    }

    async fn list(&self) -> Result<Vec<Order>, RepoErr> {
        Ok(self.inner.read().await.clone())
    }

    async fn update(&self, id: &str, update: OrderUpdate) -> Result<Order, RepoErr> {
        let mut items = self.inner.write().await;
        let o = items
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(RepoErr::NotFound)?;
        o.apply(update);
        Ok(o.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoErr> {
        let mut items = self.inner.write().await;
        let index = items
            .iter()
            .position(|o| o.id == id)
            .ok_or(RepoErr::NotFound)?;
        items.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::order::{OrderDish, OrderStatus};
    use serde_json::Map;

    fn sample_order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            deliver_to: "1 Main St".into(),
            mobile_number: "555-0100".into(),
            status,
            dishes: vec![OrderDish {
                quantity: 1,
                details: Map::new(),
            }],
        }
    }

    fn fields(name: &str, price: u64) -> DishFields {
        DishFields {
            name: name.into(),
            description: "tasty".into(),
            price,
            image_url: "http://img".into(),
        }
    }

    #[tokio::test]
    async fn dishes_list_in_insertion_order() {
        let repo = InMemoryDishRepository::default();
        let a = repo.create(fields("a", 1)).await.unwrap();
        let b = repo.create(fields("b", 2)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![a.clone(), b]);
        assert_eq!(repo.get_by_id(&a.id).await.unwrap(), a);
    }

    #[tokio::test]
    async fn dish_update_overwrites_in_place() {
        let repo = InMemoryDishRepository::default();
        let a = repo.create(fields("a", 1)).await.unwrap();

        let updated = repo.update(&a.id, fields("z", 9)).await.unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.price, 9);

        let stored = repo.get_by_id(&a.id).await.unwrap();
        assert_eq!(stored.name, "z");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_dish_is_not_found() {
        let repo = InMemoryDishRepository::default();
        assert_eq!(repo.get_by_id("nope").await, Err(RepoErr::NotFound));
        assert_eq!(
            repo.update("nope", fields("a", 1)).await,
            Err(RepoErr::NotFound)
        );
    }

    #[tokio::test]
    async fn order_update_changes_status_only_fields() {
        let repo = InMemoryOrderRepository::with_items(vec![sample_order(
            "5",
            OrderStatus::Preparing,
        )]);

        let updated = repo
            .update(
                "5",
                OrderUpdate {
                    deliver_to: "2 Side St".into(),
                    mobile_number: "555-0199".into(),
                    status: OrderStatus::Delivered,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        assert_eq!(updated.deliver_to, "2 Side St");
        assert_eq!(updated.dishes.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_order() {
        let repo = InMemoryOrderRepository::with_items(vec![
            sample_order("a", OrderStatus::Pending),
            sample_order("b", OrderStatus::Pending),
        ]);

        repo.delete("a").await.unwrap();

        let left = repo.list().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "b");
    }

    #[tokio::test]
    async fn delete_nonexistent_returns_err() {
        let repo = InMemoryOrderRepository::default();
        assert_eq!(repo.delete("nope").await, Err(RepoErr::NotFound));
    }
}
