use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AffiliateLink, CategoryName, ProductId, ProductName, ProductPrice, ProductType, TemplateName,
};

/// Category assigned when a submission does not name one.
pub const DEFAULT_CATEGORY: &str = "Geral";
/// Product type reported for records stored before the field existed.
pub const DEFAULT_PRODUCT_TYPE: &str = "Outros";

/// A catalog product as read back from the store.
///
/// Values are plain rather than constrained: records written by earlier
/// releases may lack any of the optional columns, and those gaps are filled
/// with defaults when the row is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub previous_price: f64,
    pub affiliate_link: String,
    pub template: String,
    pub category: String,
    pub product_type: String,
    /// `false` hides the product from listings.
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Information required to create a new [`Product`].
///
/// New products are always stored as active.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub previous_price: ProductPrice,
    pub affiliate_link: AffiliateLink,
    pub template: TemplateName,
    pub category: CategoryName,
    pub product_type: ProductType,
    pub created_at: NaiveDateTime,
}

/// Full replacement of the editable fields of a [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProductUpdate {
    pub name: ProductName,
    pub price: ProductPrice,
    pub previous_price: ProductPrice,
    pub affiliate_link: AffiliateLink,
    pub template: TemplateName,
    pub category: CategoryName,
    pub product_type: ProductType,
    /// Left unchanged when `None`.
    pub active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

/// How `DELETE /products/{id}` treats the stored record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Remove the record permanently.
    #[default]
    Hard,
    /// Keep the record and clear its `active` flag.
    Soft,
}
