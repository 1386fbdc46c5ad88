use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Check that the store is reachable.
    pub fn ping(&self) -> RepositoryResult<()> {
        self.conn().map(|_| ())
    }
}

/// Query parameters used when listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Filter by the `active` flag.
    pub active: Option<bool>,
}

impl ProductListQuery {
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters, oldest first.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier, active or not.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
///
/// Methods returning `usize` report the number of records matched.
pub trait ProductWriter {
    /// Persist a new product and return it with its assigned identifier.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Replace the editable fields of a product.
    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepositoryResult<usize>;
    /// Clear the `active` flag of a product that is still active.
    fn deactivate_product(&self, id: ProductId) -> RepositoryResult<usize>;
    /// Permanently remove a product.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
