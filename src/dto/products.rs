use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::product::Product;

/// Wire representation of a product, keyed the way the storefront reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub nome: String,
    pub preco: f64,
    #[serde(rename = "precoAntigo")]
    pub preco_antigo: f64,
    pub link_afiliado: String,
    pub template: String,
    pub tipo_produto: String,
    pub categoria: String,
    pub ativo: bool,
    pub data_cadastro: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<DateTime<Utc>>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            nome: value.name,
            preco: value.price,
            preco_antigo: value.previous_price,
            link_afiliado: value.affiliate_link,
            template: value.template,
            tipo_produto: value.product_type,
            categoria: value.category,
            ativo: value.active,
            data_cadastro: value.created_at.and_utc(),
            data_atualizacao: value.updated_at.map(|at| at.and_utc()),
        }
    }
}
