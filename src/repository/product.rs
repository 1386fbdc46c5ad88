use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset as DbProductChangeset,
};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table
            .select(DbProduct::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(active) = query.active {
            items = items.filter(products::active.eq(active));
        }

        let items = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let inserted = diesel::insert_into(products::table)
            .values(db_product)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(&mut conn)?;

        let product: Product = inserted.try_into()?;
        Ok(product)
    }

    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changeset: DbProductChangeset = update.clone().into();

        // SQLite counts matched rows, so rewriting identical values still reports 1.
        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn deactivate_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::update(
            products::table
                .filter(products::id.eq(id.get()))
                .filter(products::active.eq(true)),
        )
        .set(products::active.eq(false))
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.filter(products::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
