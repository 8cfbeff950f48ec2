use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::asset::application::domain::image_policy::{ImageUpload, MAX_IMAGE_BYTES};
use crate::modules::payment::application::ports::incoming::use_cases::{
    PaymentSubmission, SubmitPaymentCommand,
};
use crate::shared::api::{multipart::read_multipart, response::Created, ApiResponse};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    request_body(
        content_type = "multipart/form-data",
        description = "student_name, phone, project_name, amount and an optional `screenshot` image"
    ),
    responses(
        (status = 201, description = "Payment recorded as pending", body = Created),
        (status = 400, description = "Missing fields, bad amount or rejected screenshot")
    )
)]
#[post("/api/payments")]
pub async fn submit_payment_handler(
    data: web::Data<AppState>,
    mut payload: Multipart,
) -> impl Responder {
    let mut form = match read_multipart(&mut payload, "screenshot", MAX_IMAGE_BYTES).await {
        Ok(form) => form,
        Err(err) => return err.to_response(),
    };

    let screenshot = match form.file.take() {
        Some(file) => {
            match ImageUpload::check(&file.content_type, file.filename.as_deref(), file.bytes) {
                Ok(image) => Some(image),
                Err(rejection) => {
                    return ApiResponse::bad_request("INVALID_ATTACHMENT", &rejection.to_string())
                }
            }
        }
        None => None,
    };

    let submission = PaymentSubmission {
        student_name: form.take_field("student_name"),
        phone: form.take_field("phone"),
        project_name: form.take_field("project_name"),
        amount: form.take_field("amount"),
    };

    let command = match SubmitPaymentCommand::new(submission, screenshot) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data.payment.submit.execute(command).await {
        Ok(payment) => {
            ApiResponse::created(Created::new(payment.id, "Payment submitted successfully"))
        }
        Err(e) => {
            error!("Payment submission failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
