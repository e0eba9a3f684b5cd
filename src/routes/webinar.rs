use actix_web::error::InternalError;
use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::json;

use crate::models::webinar::{SignupPayload, ValidationError};
use crate::services::webinar::SignupService;

pub const SIGNUP_PATH: &str = "/api/webinar-signup";

fn invalid_request() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": ValidationError.to_string() }))
}

/// Unparseable or non-JSON bodies count as missing fields.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected webinar sign-up body: {}", err);
        InternalError::from_response(err, invalid_request()).into()
    })
}

pub async fn webinar_signup(
    payload: web::Json<SignupPayload>,
    signups: web::Data<SignupService>,
) -> impl Responder {
    let request = match payload.into_inner().validate() {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected webinar sign-up: {}", e);
            return invalid_request();
        }
    };

    match signups.register(&request).await {
        Ok(()) => {
            info!("Sent session link to {} for {}", request.email, request.date);
            HttpResponse::Ok().json(json!({ "message": "Email sent successfully" }))
        }
        Err(e) => {
            error!("Error sending email to {}: {}", request.email, e);
            HttpResponse::InternalServerError().json(json!({
                "message": "Failed to send email",
                "error": e.to_string()
            }))
        }
    }
}

pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .content_type(ContentType::plaintext())
        .body(format!("Method {} Not Allowed", req.method()))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(SIGNUP_PATH)
            .app_data(json_config())
            .route(web::post().to(webinar_signup))
            .default_service(web::to(method_not_allowed)),
    );
}
