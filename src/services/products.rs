//! Business logic behind the `/products` endpoints.
//!
//! Every function validates its input before touching the repository and
//! translates repository failures into [`ServiceError`] so the HTTP routes
//! stay thin wrappers.

use crate::domain::product::DeletePolicy;
use crate::domain::types::ProductId;
use crate::dto::products::ProductDto;
use crate::forms::products::{ProductForm, ProductFormPayload};
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

fn parse_product_id(product_id: &str) -> ServiceResult<ProductId> {
    product_id.parse::<ProductId>().map_err(|e| {
        log::warn!("Rejected product id '{product_id}': {e}");
        ServiceError::from(e)
    })
}

fn validate_form(form: ProductForm) -> ServiceResult<ProductFormPayload> {
    ProductFormPayload::try_from(form).map_err(|e| {
        log::warn!("Rejected product payload: {e}");
        ServiceError::from(e)
    })
}

/// Validate a submission and store it as a new active product.
pub fn create_product<R>(form: ProductForm, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductWriter,
{
    let payload = validate_form(form)?;

    match repo.create_product(&payload.into_new_product()) {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            Ok(product.into())
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// All active products in insertion order.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default().active(true)) {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// A single product, including inactive ones.
pub fn get_product<R>(product_id: &str, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace the editable fields of an existing product.
///
/// An update that leaves every value as it was still succeeds.
pub fn update_product<R>(product_id: &str, form: ProductForm, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    let product_id = parse_product_id(product_id)?;
    let payload = validate_form(form)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_product(product_id, &payload.into_product_update()) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Updated product {product_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a product according to the configured policy.
///
/// Under [`DeletePolicy::Soft`] an already inactive product counts as not
/// found.
pub fn delete_product<R>(product_id: &str, policy: DeletePolicy, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    let result = match policy {
        DeletePolicy::Hard => repo.delete_product(product_id),
        DeletePolicy::Soft => repo.deactivate_product(product_id),
    };

    match result {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Deleted product {product_id} ({policy:?})");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}
