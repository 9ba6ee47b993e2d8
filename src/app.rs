use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::http::header;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers, Logger};
use actix_web::web::{self, Data};
use actix_web::{App, Error, HttpRequest, HttpResponse};

use crate::config::Config;
use crate::consts::BODY_LIMIT_BYTES;
use crate::errors::{MESSAGE_REQUIRED, RelayError};
use crate::models::response::ErrorResponse;
use crate::{handlers, service};

pub fn create_app(
    chat_service: Arc<service::ChatService>,
    config: Arc<Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = cors_policy(&config.allowed_origins);

    App::new()
        .wrap(
            ErrorHandlers::new()
                .default_handler_client(render_unhandled)
                .default_handler_server(render_unhandled),
        )
        .wrap(cors)
        .wrap(Logger::default())
        .app_data(Data::from(chat_service))
        .app_data(Data::from(config))
        .app_data(web::PayloadConfig::new(BODY_LIMIT_BYTES))
        .app_data(
            web::JsonConfig::default()
                .limit(BODY_LIMIT_BYTES)
                .error_handler(json_error),
        )
        .app_data(
            web::FormConfig::default()
                .limit(BODY_LIMIT_BYTES)
                .error_handler(form_error),
        )
        .service(
            web::resource("/")
                .route(web::get().to(handlers::health))
                .default_service(web::to(handlers::not_found)),
        )
        .service(
            web::scope("/api")
                .service(
                    web::resource("/chat")
                        .route(web::post().to(handlers::chat))
                        .default_service(web::to(handlers::not_found)),
                )
                .service(
                    web::resource("/models")
                        .route(web::get().to(handlers::models))
                        .default_service(web::to(handlers::not_found)),
                ),
        )
        .default_service(web::to(handlers::not_found))
}

fn cors_policy(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(["GET", "POST"])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .block_on_origin_mismatch(false)
}

// Bodies with no JSON content type, or with no bytes at all, count as an
// empty body so the chat handler reports the missing message.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    match err {
        JsonPayloadError::ContentType => {
            RelayError::ValidationError(MESSAGE_REQUIRED.to_string()).into()
        }
        JsonPayloadError::Deserialize(ref e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
            RelayError::ValidationError(MESSAGE_REQUIRED.to_string()).into()
        }
        other => {
            log::error!("Unhandled Error: {:?}", other);
            RelayError::BodyError(other.to_string()).into()
        }
    }
}

fn form_error(err: UrlencodedError, _req: &HttpRequest) -> Error {
    match err {
        UrlencodedError::ContentType => {
            RelayError::ValidationError(MESSAGE_REQUIRED.to_string()).into()
        }
        other => {
            log::error!("Unhandled Error: {:?}", other);
            RelayError::BodyError(other.to_string()).into()
        }
    }
}

fn render_unhandled<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.as_bytes().starts_with(b"application/json"))
        .unwrap_or(false);
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    log::error!(
        "Unhandled Error: {} {} -> {}",
        res.request().method(),
        res.request().path(),
        res.status()
    );

    let (req, _) = res.into_parts();
    let body = RelayError::BodyError(String::new());
    let response = HttpResponse::InternalServerError().json(ErrorResponse::from_error(&body, false));
    let res: ServiceResponse<EitherBody<B>> =
        ServiceResponse::new(req, response).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}
