use crate::entities::dish::DishFields;
use crate::errors::ApiError;

use super::{has_property, id_matches, positive_integer, step, text_field, Check, Data};

const REQUIRED: [&str; 4] = ["name", "description", "price", "image_url"];

pub fn price_is_valid(data: &Data) -> Result<(), ApiError> {
    match data.get("price").and_then(positive_integer) {
        Some(_) => Ok(()),
        None => Err(ApiError::Validation(
            "Dish must have a price that is an integer greater than 0".into(),
        )),
    }
}

pub fn create_chain() -> Vec<Check<'static>> {
    let mut chain: Vec<Check<'static>> = REQUIRED.into_iter().map(has_property).collect();
    chain.push(step(price_is_valid));
    chain
}

pub fn update_chain(route_id: &str) -> Vec<Check<'_>> {
    let mut chain = vec![id_matches("Dish", route_id)];
    chain.extend(create_chain());
    chain
}

/// Typed fields of a payload that passed [`create_chain`] or [`update_chain`].
pub fn dish_fields(data: &Data) -> Result<DishFields, ApiError> {
    let price = data.get("price").and_then(positive_integer).ok_or_else(|| {
        ApiError::Validation("Dish must have a price that is an integer greater than 0".into())
    })?;
    Ok(DishFields {
        name: text_field(data, "name")?,
        description: text_field(data, "description")?,
        price,
        image_url: text_field(data, "image_url")?,
    })
}
