use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::entities::dish::Dish;
use crate::entities::Envelope;
use crate::errors::{ApiError, RepoErr};
use crate::state::AppState;
use crate::validation::{dishes as rules, run_chain, Payload};

fn not_found(dish_id: &str) -> ApiError {
    ApiError::NotFound(format!("Dish does not exist: {dish_id}"))
}

/// Existence guard for `/dishes/{dishId}` routes.
async fn dish_exists(state: &AppState, dish_id: &str) -> Result<Dish, ApiError> {
    state.dishes.get_by_id(dish_id).await.map_err(|e| match e {
        RepoErr::NotFound => not_found(dish_id),
    })
}

pub async fn list_dishes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.dishes.list().await.map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(Envelope::new(items)))
}

#[instrument(name = "create_dish", skip_all)]
pub async fn create_dish(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let data = Payload::from_body(&body)?.fields();
    run_chain(&data, &rules::create_chain())?;
    let fields = rules::dish_fields(&data)?;

    let created = state
        .dishes
        .create(fields)
        .await
        .map_err(|_| ApiError::Internal)?;
    info!(dish_id = %created.id, price = created.price, "dish created");
    Ok(HttpResponse::Created().json(Envelope::new(created)))
}

pub async fn get_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let dish = dish_exists(&state, &path).await?;
    Ok(HttpResponse::Ok().json(Envelope::new(dish)))
}

#[instrument(name = "update_dish", skip_all, fields(dish_id = %path.as_str()))]
pub async fn update_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let dish = dish_exists(&state, &path).await?;
    let data = Payload::from_body(&body)?.fields();
    run_chain(&data, &rules::update_chain(&dish.id))?;
    let fields = rules::dish_fields(&data)?;

    let updated = state
        .dishes
        .update(&dish.id, fields)
        .await
        .map_err(|_| not_found(&dish.id))?;
    info!("dish updated");
    Ok(HttpResponse::Ok().json(Envelope::new(updated)))
}
