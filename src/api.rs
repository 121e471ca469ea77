use actix_web::error::InternalError;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::error;

use crate::data_structs::requests::email_send_request::EmailSendRequest;
use crate::data_structs::responses::status_response::{
    ErrorResponse, HealthResponse, StatusResponse, ValidationErrorResponse,
};
use crate::mail_dispatcher::{self, MailDispatcher};
use crate::SharedResources;

#[get("/health")]
pub async fn health() -> impl Responder {
    // liveness probe, must never depend on configuration state
    HttpResponse::Ok().json(HealthResponse::healthy())
}

#[post("/send-email")]
pub async fn send_email(
    data: web::Data<SharedResources>,
    payload: web::Json<EmailSendRequest>,
) -> impl Responder {
    let request: EmailSendRequest = payload.into_inner();

    // shape check at the boundary; the dispatcher is never invoked on mismatch
    if !mail_dispatcher::is_valid_email(&request.recipient) {
        return HttpResponse::UnprocessableEntity().json(ValidationErrorResponse::single(
            vec!["body".to_string(), "recipient".to_string()],
            "value is not a valid email address".to_string(),
        ));
    }

    let settings = request.smtp_settings(&data.config.credential_mode);
    let recipient = request.recipient.clone();
    let mailer = data.mailer.clone();

    // the SMTP session is a blocking exchange, keep it off the async workers
    let outcome = web::block(move || {
        MailDispatcher::new(mailer.as_ref()).send(
            &request.recipient,
            &request.subject,
            &request.content,
            &settings,
        )
    })
    .await;

    return match outcome {
        Ok(Ok(())) => HttpResponse::Ok().json(StatusResponse::success("Email sent successfully")),
        Ok(Err(err)) if err.is_validation() => {
            HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
        }
        Ok(Err(err)) => {
            error!("Failed to send email to {}: {}", recipient, err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to send email".to_string()))
        }
        Err(err) => {
            error!("Email dispatch task failed: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to send email".to_string()))
        }
    };
}

/// Maps JSON deserialization failures (malformed body, wrong types, missing
/// required fields) to a 422 with a machine-readable violation list.
pub fn json_config() -> web::JsonConfig {
    return web::JsonConfig::default().error_handler(|err, _req| {
        let body = ValidationErrorResponse::single(vec!["body".to_string()], err.to_string());
        let response = HttpResponse::UnprocessableEntity().json(body);
        InternalError::from_response(err, response).into()
    });
}
