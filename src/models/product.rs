use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    DEFAULT_CATEGORY, DEFAULT_PRODUCT_TYPE, NewProduct as DomainNewProduct,
    Product as DomainProduct, ProductUpdate as DomainProductUpdate,
};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `products` table.
///
/// Only `id`, `active` and `created_at` are guaranteed; everything else may be
/// missing on rows written by older releases.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub previous_price: Option<f64>,
    pub affiliate_link: Option<String>,
    pub template: Option<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub previous_price: f64,
    pub affiliate_link: String,
    pub template: String,
    pub category: String,
    pub product_type: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

/// Changeset applied by a full update. `active` is skipped when `None`.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub name: String,
    pub price: f64,
    pub previous_price: f64,
    pub affiliate_link: String,
    pub template: String,
    pub category: String,
    pub product_type: String,
    pub active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: product.name.unwrap_or_default(),
            price: product.price.unwrap_or_default(),
            previous_price: product.previous_price.unwrap_or_default(),
            affiliate_link: product.affiliate_link.unwrap_or_default(),
            template: product.template.unwrap_or_default(),
            category: product
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            product_type: product
                .product_type
                .unwrap_or_else(|| DEFAULT_PRODUCT_TYPE.to_string()),
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            price: product.price.get(),
            previous_price: product.previous_price.get(),
            affiliate_link: product.affiliate_link.into_inner(),
            template: product.template.into_inner(),
            category: product.category.into_inner(),
            product_type: product.product_type.into_inner(),
            active: true,
            created_at: product.created_at,
        }
    }
}

impl From<DomainProductUpdate> for ProductChangeset {
    fn from(update: DomainProductUpdate) -> Self {
        Self {
            name: update.name.into_inner(),
            price: update.price.get(),
            previous_price: update.previous_price.get(),
            affiliate_link: update.affiliate_link.into_inner(),
            template: update.template.into_inner(),
            category: update.category.into_inner(),
            product_type: update.product_type.into_inner(),
            active: update.active,
            updated_at: update.updated_at,
        }
    }
}
