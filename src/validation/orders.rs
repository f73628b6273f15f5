use serde_json::Value;

use crate::entities::order::{NewOrder, Order, OrderDish, OrderStatus, OrderUpdate};
use crate::errors::ApiError;

use super::{has_property, id_matches, positive_integer, step, text_field, Check, Data};

fn no_dishes() -> ApiError {
    ApiError::Validation("Order must include at least one dish".into())
}

fn bad_quantity(index: usize) -> ApiError {
    ApiError::Validation(format!(
        "Dish {index} must have a quantity that is an integer greater than 0"
    ))
}

fn bad_status() -> ApiError {
    let all = OrderStatus::ALL.map(|s| s.as_str()).join(", ");
    ApiError::Validation(format!("Order must have a status of {all}"))
}

pub fn dishes_is_array(data: &Data) -> Result<(), ApiError> {
    match data.get("dishes") {
        Some(Value::Array(items)) if !items.is_empty() => Ok(()),
        _ => Err(no_dishes()),
    }
}

pub fn dishes_are_valid(data: &Data) -> Result<(), ApiError> {
    let Some(Value::Array(items)) = data.get("dishes") else {
        return Err(no_dishes());
    };
    for (index, item) in items.iter().enumerate() {
        if item.get("quantity").and_then(positive_integer).is_none() {
            return Err(bad_quantity(index));
        }
    }
    Ok(())
}

pub fn status_is_valid(data: &Data) -> Result<(), ApiError> {
    match data.get("status") {
        Some(Value::String(s)) if s.parse::<OrderStatus>().is_ok() => Ok(()),
        _ => Err(bad_status()),
    }
}

/// Status is optional on create; when given it must be a known one.
pub fn status_if_present(data: &Data) -> Result<(), ApiError> {
    match data.get("status") {
        None | Some(Value::Null) => Ok(()),
        Some(_) => status_is_valid(data),
    }
}

pub fn not_delivered(stored: &Order) -> Result<(), ApiError> {
    if stored.status == OrderStatus::Delivered {
        return Err(ApiError::Conflict(
            "A delivered order cannot be changed".into(),
        ));
    }
    Ok(())
}

pub fn is_pending(stored: &Order) -> Result<(), ApiError> {
    if stored.status != OrderStatus::Pending {
        return Err(ApiError::Conflict(
            "An order cannot be deleted unless it is pending".into(),
        ));
    }
    Ok(())
}

pub fn create_chain() -> Vec<Check<'static>> {
    vec![
        has_property("deliverTo"),
        has_property("mobileNumber"),
        has_property("dishes"),
        step(dishes_is_array),
        step(dishes_are_valid),
        step(status_if_present),
    ]
}

pub fn update_chain<'a>(route_id: &'a str, stored: &'a Order) -> Vec<Check<'a>> {
    vec![
        id_matches("Order", route_id),
        has_property("status"),
        has_property("deliverTo"),
        has_property("mobileNumber"),
        has_property("dishes"),
        step(dishes_is_array),
        step(dishes_are_valid),
        step(status_is_valid),
        step(move |_: &Data| not_delivered(stored)),
    ]
}

pub fn delete_chain(stored: &Order) -> Vec<Check<'_>> {
    vec![step(move |_: &Data| is_pending(stored))]
}

fn status_field(data: &Data) -> Result<Option<OrderStatus>, ApiError> {
    match data.get("status") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => s.parse().map(Some).map_err(|_| bad_status()),
        Some(_) => Err(bad_status()),
    }
}

fn order_dishes(data: &Data) -> Result<Vec<OrderDish>, ApiError> {
    let Some(Value::Array(items)) = data.get("dishes") else {
        return Err(no_dishes());
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(bad_quantity(index));
            };
            let quantity = fields
                .get("quantity")
                .and_then(positive_integer)
                .ok_or_else(|| bad_quantity(index))?;
            let mut details = fields.clone();
            details.remove("quantity");
            Ok(OrderDish { quantity, details })
        })
        .collect()
}

/// Typed order of a payload that passed [`create_chain`].
pub fn new_order(data: &Data) -> Result<NewOrder, ApiError> {
    Ok(NewOrder {
        deliver_to: text_field(data, "deliverTo")?,
        mobile_number: text_field(data, "mobileNumber")?,
        status: status_field(data)?.unwrap_or_default(),
        dishes: order_dishes(data)?,
    })
}

/// Typed changes of a payload that passed [`update_chain`].
pub fn order_update(data: &Data) -> Result<OrderUpdate, ApiError> {
    Ok(OrderUpdate {
        deliver_to: text_field(data, "deliverTo")?,
        mobile_number: text_field(data, "mobileNumber")?,
        status: status_field(data)?.ok_or_else(bad_status)?,
    })
}
