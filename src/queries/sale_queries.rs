use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{error::Result, models::Sale};

pub async fn insert_sale(
    pool: &PgPool,
    product_id: i32,
    quantity: i32,
    total_price: Decimal,
) -> Result<()> {
    sqlx::query("INSERT INTO sales (product_id, quantity, total_price) VALUES ($1, $2, $3)")
        .bind(product_id)
        .bind(quantity)
        .bind(total_price)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Sale>> {
    let sales = sqlx::query_as::<_, Sale>("SELECT * FROM sales")
        .fetch_all(pool)
        .await?;

    Ok(sales)
}
