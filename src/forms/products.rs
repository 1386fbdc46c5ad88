use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{DEFAULT_CATEGORY, NewProduct, ProductUpdate};
use crate::domain::types::{
    AffiliateLink, CategoryName, ProductName, ProductPrice, ProductType, TemplateName,
    TypeConstraintError,
};

/// Fields a product submission must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "nome",
    "preco",
    "precoAntigo",
    "link_afiliado",
    "template",
    "tipo_produto",
];

/// JSON body accepted by `POST /products` and `PUT /products/{id}`.
///
/// Every field is optional at this level so that a missing one can be
/// reported by name. Built from the raw body with [`TryFrom<Value>`] so a
/// value of the wrong type is also reported by field.
#[derive(Debug, Default, Validate)]
pub struct ProductForm {
    #[validate(length(max = 255))]
    pub nome: Option<String>,
    /// Number or numeric string.
    pub preco: Option<Value>,
    /// Number or numeric string. Sent as `precoAntigo`.
    pub preco_antigo: Option<Value>,
    #[validate(length(max = 2048))]
    pub link_afiliado: Option<String>,
    #[validate(length(max = 64))]
    pub template: Option<String>,
    #[validate(length(max = 128))]
    pub categoria: Option<String>,
    #[validate(length(max = 128))]
    pub tipo_produto: Option<String>,
    /// Only honoured by updates.
    pub ativo: Option<bool>,
}

impl ProductForm {
    fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.preco.is_none()
            && self.preco_antigo.is_none()
            && self.link_afiliado.is_none()
            && self.template.is_none()
            && self.categoria.is_none()
            && self.tipo_produto.is_none()
            && self.ativo.is_none()
    }

    fn first_missing_field(&self) -> Option<&'static str> {
        let present = [
            self.nome.is_some(),
            self.preco.is_some(),
            self.preco_antigo.is_some(),
            self.link_afiliado.is_some(),
            self.template.is_some(),
            self.tipo_produto.is_some(),
        ];
        REQUIRED_FIELDS
            .into_iter()
            .zip(present)
            .find_map(|(field, present)| (!present).then_some(field))
    }
}

/// Validated product submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
    pub name: ProductName,
    pub price: ProductPrice,
    pub previous_price: ProductPrice,
    pub affiliate_link: AffiliateLink,
    pub template: TemplateName,
    pub category: CategoryName,
    pub product_type: ProductType,
    pub active: Option<bool>,
}

impl ProductFormPayload {
    /// Build a record for insertion. New products are always active.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            previous_price: self.previous_price,
            affiliate_link: self.affiliate_link,
            template: self.template,
            category: self.category,
            product_type: self.product_type,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Build a full replacement of the editable fields.
    pub fn into_product_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            price: self.price,
            previous_price: self.previous_price,
            affiliate_link: self.affiliate_link,
            template: self.template,
            category: self.category,
            product_type: self.product_type,
            active: self.active,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProductFormError {
    #[error("Nenhum dado recebido")]
    Empty,
    #[error("Dados inválidos: o corpo deve ser um objeto JSON")]
    NotAnObject,
    /// The deserializer detail is kept for logs only.
    #[error("Campo {field} com tipo inválido")]
    InvalidType { field: &'static str, detail: String },
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),
    #[error("Campo {0} deve ser numérico")]
    InvalidNumber(&'static str),
    #[error("Dados inválidos: {0}")]
    Validation(String),
    #[error("Dados inválidos: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<T>, ProductFormError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| ProductFormError::InvalidType {
                field: name,
                detail: e.to_string(),
            }),
    }
}

impl TryFrom<Value> for ProductForm {
    type Error = ProductFormError;

    /// `null` yields an empty form. Unknown keys are ignored.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            _ => return Err(ProductFormError::NotAnObject),
        };

        Ok(Self {
            nome: field(&fields, "nome")?,
            preco: field(&fields, "preco")?,
            preco_antigo: field(&fields, "precoAntigo")?,
            link_afiliado: field(&fields, "link_afiliado")?,
            template: field(&fields, "template")?,
            categoria: field(&fields, "categoria")?,
            tipo_produto: field(&fields, "tipo_produto")?,
            ativo: field(&fields, "ativo")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ProductFormError> {
    value.ok_or(ProductFormError::MissingField(field))
}

fn parse_price(value: &Value, field: &'static str) -> Result<ProductPrice, ProductFormError> {
    let raw = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or(ProductFormError::InvalidNumber(field))?;

    Ok(ProductPrice::new_for_field(raw, field)?)
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ProductFormError::Empty);
        }
        if let Some(field) = value.first_missing_field() {
            return Err(ProductFormError::MissingField(field));
        }
        value.validate()?;

        let price = parse_price(&required(value.preco, "preco")?, "preco")?;
        let previous_price =
            parse_price(&required(value.preco_antigo, "precoAntigo")?, "precoAntigo")?;

        let category = match value.categoria {
            Some(category) if !category.trim().is_empty() => CategoryName::new(category)?,
            _ => CategoryName::new(DEFAULT_CATEGORY)?,
        };

        Ok(Self {
            name: ProductName::new(required(value.nome, "nome")?)?,
            price,
            previous_price,
            affiliate_link: AffiliateLink::new(required(value.link_afiliado, "link_afiliado")?)?,
            template: TemplateName::new(required(value.template, "template")?)?,
            category,
            product_type: ProductType::new(required(value.tipo_produto, "tipo_produto")?)?,
            active: value.ativo,
        })
    }
}
