use actix_web::{web, HttpResponse};

use crate::core::{ApiResponse, AppError};
use crate::modules::customers::models::{
    CreateCustomerRequest, CreatePurchaseRequest, UpdateCustomerRequest,
};
use crate::modules::customers::services::CustomerService;

/// List customer summaries
/// GET /customers
pub async fn list_customers(
    service: web::Data<CustomerService>,
) -> Result<HttpResponse, AppError> {
    let customers = service.list_customers().await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(customers)))
}

/// Fetch one customer with full history
/// GET /customers/{id}
pub async fn get_customer(
    service: web::Data<CustomerService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let customer = service.get_customer(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(customer)))
}

/// Register a new customer
/// POST /customers
pub async fn create_customer(
    service: web::Data<CustomerService>,
    request: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let customer = service.create_customer(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message(customer, "customer created")))
}

/// Update profile fields
/// PUT /customers/{id}
pub async fn update_customer(
    service: web::Data<CustomerService>,
    path: web::Path<u64>,
    request: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let customer = service
        .update_customer(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(customer, "customer updated")))
}

/// Remove a customer, returning the deleted record
/// DELETE /customers/{id}
pub async fn delete_customer(
    service: web::Data<CustomerService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let customer = service.delete_customer(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(customer, "customer deleted")))
}

/// Purchase history of one customer
/// GET /customers/{id}/purchases
pub async fn list_purchases(
    service: web::Data<CustomerService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let purchases = service.purchase_history(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(purchases)))
}

/// Append a purchase to a customer's history
/// POST /customers/{id}/purchases
pub async fn add_purchase(
    service: web::Data<CustomerService>,
    path: web::Path<u64>,
    request: web::Json<CreatePurchaseRequest>,
) -> Result<HttpResponse, AppError> {
    let purchase = service
        .add_purchase(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message(purchase, "purchase recorded")))
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(list_customers))
            .route("", web::post().to(create_customer))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::put().to(update_customer))
            .route("/{id}", web::delete().to(delete_customer))
            .route("/{id}/purchases", web::get().to(list_purchases))
            .route("/{id}/purchases", web::post().to(add_purchase)),
    );
}
