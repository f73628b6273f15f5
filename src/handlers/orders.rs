use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::entities::order::Order;
use crate::entities::Envelope;
use crate::errors::{ApiError, RepoErr};
use crate::state::AppState;
use crate::validation::{orders as rules, run_chain, Data, Payload};

fn not_found(order_id: &str) -> ApiError {
    ApiError::NotFound(format!("Order does not exist: {order_id}"))
}

/// Existence guard for `/orders/{orderId}` routes.
async fn order_exists(state: &AppState, order_id: &str) -> Result<Order, ApiError> {
    state.orders.get_by_id(order_id).await.map_err(|e| match e {
        RepoErr::NotFound => not_found(order_id),
    })
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.orders.list().await.map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(Envelope::new(items)))
}

#[instrument(name = "create_order", skip_all)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let data = Payload::from_body(&body)?.fields();
    run_chain(&data, &rules::create_chain())?;
    let new = rules::new_order(&data)?;

    let created = state
        .orders
        .create(new)
        .await
        .map_err(|_| ApiError::Internal)?;
    info!(order_id = %created.id, status = %created.status, lines = created.dishes.len(), "order created");
    Ok(HttpResponse::Created().json(Envelope::new(created)))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order = order_exists(&state, &path).await?;
    Ok(HttpResponse::Ok().json(Envelope::new(order)))
}

#[instrument(name = "update_order", skip_all, fields(order_id = %path.as_str()))]
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let order = order_exists(&state, &path).await?;
    let data = Payload::from_body(&body)?.fields();
    run_chain(&data, &rules::update_chain(&order.id, &order))?;
    let update = rules::order_update(&data)?;

    let from = order.status;
    let updated = state
        .orders
        .update(&order.id, update)
        .await
        .map_err(|_| not_found(&order.id))?;
    info!(%from, to = %updated.status, "order updated");
    Ok(HttpResponse::Ok().json(Envelope::new(updated)))
}

#[instrument(name = "delete_order", skip_all, fields(order_id = %path.as_str()))]
pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order = order_exists(&state, &path).await?;
    run_chain(&Data::new(), &rules::delete_chain(&order))?;

    state
        .orders
        .delete(&order.id)
        .await
        .map_err(|_| not_found(&order.id))?;
    info!("order deleted");
    Ok(HttpResponse::NoContent().finish())
}
