use chrono::Utc;
use diesel::prelude::*;
use pushkind_vitrine::domain::product::{
    DEFAULT_CATEGORY, DEFAULT_PRODUCT_TYPE, NewProduct, ProductUpdate,
};
use pushkind_vitrine::domain::types::{
    AffiliateLink, CategoryName, ProductId, ProductName, ProductPrice, ProductType, TemplateName,
};
use pushkind_vitrine::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter,
};
use pushkind_vitrine::schema::products;

mod common;

fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid name"),
        price: ProductPrice::new(price).expect("valid price"),
        previous_price: ProductPrice::new(price + 30.0).expect("valid price"),
        affiliate_link: AffiliateLink::new("http://x").expect("valid link"),
        template: TemplateName::new("card").expect("valid template"),
        category: CategoryName::new(DEFAULT_CATEGORY).expect("valid category"),
        product_type: ProductType::new("eletronico").expect("valid type"),
        created_at: Utc::now().naive_utc(),
    }
}

fn update_for(product: &NewProduct, price: f64, active: Option<bool>) -> ProductUpdate {
    ProductUpdate {
        name: product.name.clone(),
        price: ProductPrice::new(price).expect("valid price"),
        previous_price: product.previous_price,
        affiliate_link: product.affiliate_link.clone(),
        template: product.template.clone(),
        category: product.category.clone(),
        product_type: product.product_type.clone(),
        active,
        updated_at: Utc::now().naive_utc(),
    }
}

fn active_products(repo: &DieselRepository) -> Vec<pushkind_vitrine::domain::product::Product> {
    repo.list_products(ProductListQuery::default().active(true))
        .expect("should list products")
}

#[test]
fn create_returns_stored_product_with_generated_id() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("Mouse", 99.90))
        .expect("should create product");

    assert!(created.id.get() > 0);
    assert_eq!(created.name, "Mouse");
    assert_eq!(created.price, 99.90);
    assert_eq!(created.previous_price, 99.90 + 30.0);
    assert!(created.active);
    assert!(created.updated_at.is_none());

    let listed = active_products(&repo);
    assert_eq!(listed, vec![created]);
}

#[test]
fn list_returns_active_products_in_insertion_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo.create_product(&new_product("Mouse", 10.0)).unwrap();
    let second = repo.create_product(&new_product("Teclado", 20.0)).unwrap();
    let third = repo.create_product(&new_product("Monitor", 30.0)).unwrap();
    assert_eq!(repo.deactivate_product(second.id).unwrap(), 1);

    let names: Vec<String> = active_products(&repo).into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Mouse".to_string(), "Monitor".to_string()]);

    let all = repo.list_products(ProductListQuery::default()).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[2].id, third.id);
}

#[test]
fn update_counts_matched_rows_even_without_changes() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let product = new_product("Mouse", 99.90);
    let created = repo.create_product(&product).unwrap();

    let affected = repo
        .update_product(created.id, &update_for(&product, 99.90, None))
        .expect("should update");
    assert_eq!(affected, 1);

    let affected = repo
        .update_product(created.id, &update_for(&product, 79.90, None))
        .expect("should update");
    assert_eq!(affected, 1);

    let stored = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(stored.price, 79.90);
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.updated_at.is_some());
    assert!(stored.active);
}

#[test]
fn update_of_missing_product_matches_nothing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let product = new_product("Mouse", 1.0);

    let affected = repo
        .update_product(ProductId::new(99).unwrap(), &update_for(&product, 2.0, None))
        .unwrap();
    assert_eq!(affected, 0);
}

#[test]
fn update_can_deactivate_product() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let product = new_product("Mouse", 1.0);
    let created = repo.create_product(&product).unwrap();

    repo.update_product(created.id, &update_for(&product, 1.0, Some(false)))
        .unwrap();

    assert!(active_products(&repo).is_empty());
    assert!(!repo.get_product_by_id(created.id).unwrap().unwrap().active);
}

#[test]
fn deactivate_only_matches_active_products() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo.create_product(&new_product("Mouse", 1.0)).unwrap();

    assert_eq!(repo.deactivate_product(created.id).unwrap(), 1);
    assert_eq!(repo.deactivate_product(created.id).unwrap(), 0);
    assert!(repo.get_product_by_id(created.id).unwrap().is_some());
}

#[test]
fn delete_removes_record_and_ids_are_not_reused() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo.create_product(&new_product("Mouse", 1.0)).unwrap();

    assert_eq!(repo.delete_product(created.id).unwrap(), 1);
    assert_eq!(repo.delete_product(created.id).unwrap(), 0);
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());

    let next = repo.create_product(&new_product("Teclado", 1.0)).unwrap();
    assert!(next.id.get() > created.id.get());
}

#[test]
fn legacy_rows_are_listed_with_defaults() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut conn = test_db
        .pool()
        .get()
        .expect("should acquire DB connection for setup");
    diesel::insert_into(products::table)
        .values((
            products::name.eq("Produto antigo"),
            products::price.eq(50.0_f64),
            products::affiliate_link.eq("http://old"),
            products::template.eq("card"),
        ))
        .execute(&mut conn)
        .expect("should insert legacy product");

    let listed = active_products(&repo);
    assert_eq!(listed.len(), 1);

    let legacy = &listed[0];
    assert_eq!(legacy.name, "Produto antigo");
    assert_eq!(legacy.price, 50.0);
    assert_eq!(legacy.previous_price, 0.0);
    assert_eq!(legacy.category, DEFAULT_CATEGORY);
    assert_eq!(legacy.product_type, DEFAULT_PRODUCT_TYPE);
    assert!(legacy.active);
}
