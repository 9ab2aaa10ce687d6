use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Product, ProductInput},
};

/// Case-insensitive substring search over title and description.
/// An empty keyword matches every product.
pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<Product>> {
    let pattern = format!("%{}%", keyword);

    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE title ILIKE $1 OR description ILIKE $1",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn find_images_by_product_id(pool: &PgPool, product_id: i32) -> Result<Vec<String>> {
    let images = sqlx::query_scalar::<_, String>(
        "SELECT image_url FROM product_images WHERE product_id = $1",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

/// Inserts a batch of products and their images atomically.
///
/// The whole batch runs on one transaction: each product insert returns its
/// generated id, the product's images are then inserted against that id, and
/// nothing is committed until every insert has succeeded. On any failure the
/// transaction is dropped, which rolls back and returns the connection to the
/// pool. Returned ids are positionally aligned with the input slice.
pub async fn bulk_insert(pool: &PgPool, products: &[ProductInput]) -> Result<Vec<i32>> {
    let mut tx = pool.begin().await?;
    let mut product_ids = Vec::with_capacity(products.len());

    for product in products {
        let product_id: i32 = sqlx::query_scalar(
            "INSERT INTO products (title, description, price, discount_percentage, rating,
             stock, brand, category, thumbnail)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.discount_percentage)
        .bind(product.rating)
        .bind(product.stock)
        .bind(&product.brand)
        .bind(&product.category)
        .bind(&product.thumbnail)
        .fetch_one(&mut *tx)
        .await?;

        if !product.images.is_empty() {
            sqlx::query(
                "INSERT INTO product_images (product_id, image_url)
                 SELECT $1, unnest($2::varchar[])",
            )
            .bind(product_id)
            .bind(&product.images)
            .execute(&mut *tx)
            .await?;
        }

        product_ids.push(product_id);
    }

    tx.commit().await?;
    Ok(product_ids)
}
