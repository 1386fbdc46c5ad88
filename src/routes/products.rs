use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::{Value, json};

use crate::forms::products::ProductForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{error_response, message};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, list_products as list_products_service,
    update_product as update_product_service,
};

/// Turn the raw body into a form, reporting wrongly typed fields by name.
fn read_form(body: Value) -> Result<ProductForm, HttpResponse> {
    ProductForm::try_from(body).map_err(|e| {
        log::warn!("Rejected product payload: {e:?}");
        error_response(ServiceError::from(e))
    })
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<Value>,
) -> impl Responder {
    let form = match read_form(body) {
        Ok(form) => form,
        Err(resp) => return resp,
    };

    match create_product_service(form, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(json!({
            "mensagem": "Produto cadastrado com sucesso",
            "produto": product,
        })),
        Err(err) => error_response(err),
    }
}

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(&product_id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<Value>,
) -> impl Responder {
    let form = match read_form(body) {
        Ok(form) => form,
        Err(resp) => return resp,
    };

    match update_product_service(&product_id, form, repo.get_ref()) {
        Ok(()) => message(StatusCode::OK, "Produto atualizado com sucesso"),
        Err(err) => error_response(err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match delete_product_service(&product_id, server_config.delete_policy, repo.get_ref()) {
        Ok(()) => message(StatusCode::OK, "Produto removido com sucesso"),
        Err(err) => error_response(err),
    }
}
