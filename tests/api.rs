//! Database-backed tests for the query layer and the sale flow.
//!
//! These need a reachable Postgres. Point `DATABASE_URL` at a scratch
//! database and run `cargo test -- --ignored`.

use bazar_api::{
    models::ProductInput,
    queries::{product_queries, sale_queries},
    services::pricing,
};
use rust_decimal::{Decimal, dec};
use sqlx::{PgPool, postgres::PgPoolOptions};

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for DB tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to test database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

fn product(title: &str, price: Decimal, images: &[&str]) -> ProductInput {
    ProductInput {
        title: title.to_string(),
        description: None,
        price,
        discount_percentage: Decimal::ZERO,
        rating: Decimal::ZERO,
        stock: 0,
        brand: None,
        category: None,
        thumbnail: None,
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

fn marker(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a Postgres instance"]
async fn bulk_insert_returns_ids_aligned_with_input() {
    let pool = test_pool().await;
    let tag = marker("bulk-ok");

    let batch = vec![
        product(&format!("{} first", tag), dec!(10.00), &["https://img/a.jpg"]),
        product(&format!("{} second", tag), dec!(20.00), &[]),
        product(
            &format!("{} third", tag),
            dec!(30.00),
            &["https://img/b.jpg", "https://img/c.jpg"],
        ),
    ];

    let ids = product_queries::bulk_insert(&pool, &batch).await.unwrap();
    assert_eq!(ids.len(), 3);

    for (id, input) in ids.iter().zip(&batch) {
        let found = product_queries::find_by_id(&pool, *id).await.unwrap().unwrap();
        assert_eq!(found.title, input.title);

        let images = product_queries::find_images_by_product_id(&pool, *id)
            .await
            .unwrap();
        assert_eq!(images, input.images);
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a Postgres instance"]
async fn bulk_insert_rolls_back_whole_batch_on_failure() {
    let pool = test_pool().await;
    let tag = marker("bulk-rollback");

    let mut batch = vec![
        product(&format!("{} first", tag), dec!(10.00), &["https://img/a.jpg"]),
        product(&format!("{} second", tag), dec!(20.00), &[]),
    ];
    // discount_percentage is NUMERIC(5,2); this overflows it mid-batch
    batch[1].discount_percentage = dec!(99999);

    let result = product_queries::bulk_insert(&pool, &batch).await;
    assert!(result.is_err());

    let leftover: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE title LIKE $1")
        .bind(format!("{}%", tag))
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(leftover, 0, "rollback left product rows behind");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a Postgres instance"]
async fn find_by_id_for_missing_product_returns_none() {
    let pool = test_pool().await;

    let found = product_queries::find_by_id(&pool, i32::MAX).await.unwrap();
    assert!(found.is_none());

    let images = product_queries::find_images_by_product_id(&pool, i32::MAX)
        .await
        .unwrap();
    assert!(images.is_empty());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a Postgres instance"]
async fn sale_total_uses_discounted_price() {
    let pool = test_pool().await;
    let tag = marker("sale");

    let mut input = product(&tag, dec!(100.00), &[]);
    input.discount_percentage = dec!(20);

    let ids = product_queries::bulk_insert(&pool, std::slice::from_ref(&input))
        .await
        .unwrap();
    let product_id = ids[0];

    let stored = product_queries::find_by_id(&pool, product_id)
        .await
        .unwrap()
        .unwrap();
    let total = pricing::compute_total(stored.price, stored.discount_percentage, 3);
    assert_eq!(total, dec!(240));

    sale_queries::insert_sale(&pool, product_id, 3, total).await.unwrap();

    let sales = sale_queries::get_all(&pool).await.unwrap();
    let sale = sales
        .iter()
        .find(|s| s.product_id == product_id)
        .expect("sale row was not persisted");
    assert_eq!(sale.quantity, 3);
    assert_eq!(sale.total_price, dec!(240));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a Postgres instance"]
async fn search_matches_title_and_description_case_insensitively() {
    let pool = test_pool().await;
    let tag = marker("zanzibar").replace('-', "");

    let mut in_description = product("plain title", dec!(5.00), &[]);
    in_description.description = Some(format!("mentions {} here", tag.to_uppercase()));

    let batch = vec![
        product(&format!("The {} Lamp", tag), dec!(5.00), &[]),
        in_description,
        product("unrelated product", dec!(5.00), &[]),
    ];
    let ids = product_queries::bulk_insert(&pool, &batch).await.unwrap();

    let hits = product_queries::search(&pool, &tag).await.unwrap();
    let hit_ids: Vec<i32> = hits.iter().map(|p| p.id).collect();

    assert!(hit_ids.contains(&ids[0]), "title match missed");
    assert!(hit_ids.contains(&ids[1]), "description match missed");
    assert!(!hit_ids.contains(&ids[2]), "unrelated product matched");
}
