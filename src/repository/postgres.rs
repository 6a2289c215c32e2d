//! PostgreSQL adapters for the repository traits.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

use super::{CatalogQuery, CategoriesRepository, ProductPage, ProductsRepository, RepositoryError};
use crate::domain::{Category, Pagination, Price, Product, Variant};

const PRODUCT_COLUMNS: &str = "SELECT p.id, p.code, p.price, c.code AS category_code, c.name AS category_name \
     FROM products p LEFT JOIN categories c ON c.id = p.category_id";

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    code: String,
    price: Decimal,
    category_code: Option<String>,
    category_name: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct VariantRow {
    product_id: i64,
    name: String,
    sku: String,
    price: Decimal,
}

impl ProductRow {
    fn into_product(self, variants: Vec<Variant>) -> Product {
        let category = match (self.category_code, self.category_name) {
            (Some(code), Some(name)) => Some(Category { code, name }),
            _ => None,
        };
        Product { code: self.code, price: Price::new(self.price), category, variants }
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &CatalogQuery) {
    qb.push(" WHERE TRUE");
    if let Some(category_id) = query.category_id {
        qb.push(" AND p.category_id = ").push_bind(category_id);
    }
    if let Some(ceiling) = query.price_less_than {
        qb.push(" AND p.price < ").push_bind(ceiling.amount());
    }
}

/// Offset and limit actually sent to the database, re-normalized independently
/// of whatever the caller already did.
fn page_window(offset: i64, limit: i64) -> (i64, i64) {
    (offset.max(0), Pagination::clamp_limit(limit))
}

fn count_query(query: &CatalogQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM products p");
    push_filters(&mut qb, query);
    qb
}

fn page_query(query: &CatalogQuery) -> QueryBuilder<'static, Postgres> {
    let (offset, limit) = page_window(query.pagination.offset(), query.pagination.limit());
    let mut qb = QueryBuilder::new(PRODUCT_COLUMNS);
    push_filters(&mut qb, query);
    qb.push(" ORDER BY p.id LIMIT ").push_bind(limit);
    qb.push(" OFFSET ").push_bind(offset);
    qb
}

#[derive(Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads the variants of every row in one round trip and attaches them.
    async fn hydrate(&self, rows: Vec<ProductRow>) -> Result<Vec<Product>, RepositoryError> {
        if rows.is_empty() {
            return Ok(vec![]);
        }
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let variant_rows = sqlx::query_as::<_, VariantRow>(
            "SELECT product_id, name, sku, COALESCE(price, 0) AS price FROM product_variants WHERE product_id = ANY($1) ORDER BY id",
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await?;

        let mut by_product: HashMap<i64, Vec<Variant>> = HashMap::new();
        for v in variant_rows {
            by_product
                .entry(v.product_id)
                .or_default()
                .push(Variant { name: v.name, sku: v.sku, price: Price::new(v.price) });
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let variants = by_product.remove(&row.id).unwrap_or_default();
                row.into_product(variants)
            })
            .collect())
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_by_filter(&self, query: &CatalogQuery) -> Result<ProductPage, RepositoryError> {
        let mut count = count_query(query);
        let total: i64 = count.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut page = page_query(query);
        let rows: Vec<ProductRow> = page.build_query_as::<ProductRow>().fetch_all(&self.pool).await?;

        tracing::debug!(total, returned = rows.len(), pagination = ?query.pagination, "catalog page fetched");
        Ok(ProductPage { products: self.hydrate(rows).await?, total })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_COLUMNS} WHERE p.code = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[derive(Clone)]
pub struct PgCategoriesRepository {
    pool: PgPool,
}

impl PgCategoriesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoriesRepository for PgCategoriesRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>("SELECT code, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>("SELECT code, name FROM categories WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    async fn create(&self, category: &Category) -> Result<Category, RepositoryError> {
        let created = sqlx::query_as::<_, Category>("INSERT INTO categories (code, name) VALUES ($1, $2) RETURNING code, name")
            .bind(&category.code)
            .bind(&category.name)
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(code = %created.code, "category created");
        Ok(created)
    }
}
