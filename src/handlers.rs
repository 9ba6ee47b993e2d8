use actix_web::web::{Data, Form, Json};
use actix_web::{Either, HttpRequest, HttpResponse, Responder};

use crate::config::Config;
use crate::errors::RelayError;
use crate::models::model_list::ModelList;
use crate::models::request::ChatRequest;
use crate::models::response::{ErrorResponse, HealthResponse};
use crate::service::ChatService;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

pub async fn models() -> impl Responder {
    HttpResponse::Ok().json(ModelList::available())
}

pub async fn chat(
    service: Data<ChatService>,
    config: Data<Config>,
    body: Either<Json<ChatRequest>, Form<ChatRequest>>,
) -> impl Responder {
    let request = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    match service.create_reply(request, &config).await {
        Ok(chat_response) => HttpResponse::Ok().json(chat_response),
        Err(e) => {
            match &e {
                RelayError::ValidationError(_) => log::info!("chat request rejected: {:?}", e),
                _ => log::error!("Chat API error: {:?}", e),
            }
            let envelope = ErrorResponse::from_error(&e, config.environment.exposes_error_details());
            HttpResponse::build(e.status()).json(envelope)
        }
    }
}

pub async fn not_found(req: HttpRequest) -> impl Responder {
    log::debug!("no route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ErrorResponse::new("Endpoint not found"))
}
