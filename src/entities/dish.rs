use serde::{Deserialize, Serialize};

use crate::utils::next_id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Mutable part of a dish; used for both create and full overwrite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    pub fn new(fields: DishFields) -> Self {
        Self {
            id: next_id(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taco() -> DishFields {
        DishFields {
            name: "Taco".into(),
            description: "Spicy".into(),
            price: 8,
            image_url: "x".into(),
        }
    }

    #[test]
    fn dish_new_assigns_fresh_id() {
        let a = Dish::new(taco());
        let b = Dish::new(taco());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.price, 8);
        assert_eq!(a.name, "Taco");
    }

    #[test]
    fn apply_overwrites_everything_but_id() {
        let mut d = Dish::new(taco());
        let id = d.id.clone();
        d.apply(DishFields {
            name: "Burrito".into(),
            description: "Big".into(),
            price: 12,
            image_url: "y".into(),
        });
        assert_eq!(d.id, id);
        assert_eq!(d.name, "Burrito");
        assert_eq!(d.description, "Big");
        assert_eq!(d.price, 12);
        assert_eq!(d.image_url, "y");
    }
}
