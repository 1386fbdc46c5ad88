use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod products;

/// Largest JSON body accepted by the product endpoints.
const JSON_LIMIT: usize = 64 * 1024;

/// Register every product route together with the JSON extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(products::create_product)
        .service(products::list_products)
        .service(products::get_product)
        .service(products::update_product)
        .service(products::delete_product);
}

/// JSON extractor whose failures use the same `{"erro": ...}` body as the
/// service errors. Parser details only go to the log.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            let message = match &err {
                JsonPayloadError::ContentType => "Nenhum dado recebido",
                JsonPayloadError::Deserialize(_) => "Nenhum dado recebido",
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    "Dados inválidos: corpo muito grande"
                }
                _ => "Dados inválidos",
            };
            log::warn!("Rejected JSON body: {err}");
            InternalError::from_response(err, bad_request(message)).into()
        })
}

/// JSON response carrying `{"mensagem": text}`.
pub fn message(status: actix_web::http::StatusCode, text: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "mensagem": text }))
}

/// 400 response carrying `{"erro": text}`.
pub fn bad_request(text: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "erro": text }))
}

/// Map a service failure onto its HTTP response. Internal details are logged
/// by the service and never sent to the client.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => message(
            actix_web::http::StatusCode::NOT_FOUND,
            "Produto não encontrado",
        ),
        ServiceError::Form(text) | ServiceError::TypeConstraint(text) => bad_request(&text),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(json!({ "erro": "Erro interno do servidor" }))
        }
    }
}
