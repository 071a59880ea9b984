use actix_web::{web, HttpResponse};
use tracing::info;

use crate::core::{ApiResponse, AppError};
use crate::modules::exposure::models::{CalculateExposureRequest, PeakExposure};
use crate::modules::exposure::services::ExposureCalculator;

/// Compute a customer's peak debt exposure from a submitted history
/// POST /exposure/calculate
///
/// The empty-history case is a defined zero result, distinguishable from an
/// error only by the envelope message.
pub async fn calculate_exposure(
    request: web::Json<CalculateExposureRequest>,
) -> Result<HttpResponse, AppError> {
    let customer = request.into_inner().customer;

    let Some(history) = customer.purchase_history else {
        return Err(AppError::validation("customer purchase history is required"));
    };

    if history.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::with_message(
            PeakExposure::zero(),
            "customer has no recorded purchases",
        )));
    }

    let result = ExposureCalculator::peak_exposure(&history);
    info!(
        customer_id = customer.id,
        purchases = history.len(),
        peak_month = %result.month,
        "peak exposure calculated"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        result,
        "debt exposure calculated",
    )))
}

/// Configure exposure routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/exposure").route("/calculate", web::post().to(calculate_exposure)),
    );
}
