//! Shapes domain entities into their wire representation.
//!
//! Listing responses carry a compact [`ProductSummary`] without variants; the
//! detail view carries a [`ProductDetail`] whose variants always expose their
//! effective (possibly inherited) price.

use serde::Serialize;

use crate::domain::{Category, Product, Variant};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryView {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub code: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub code: String,
    pub price: f64,
    /// Always present; empty code and name when the product has no category.
    pub category: CategoryView,
    pub variants: Vec<VariantView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantView {
    pub name: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub products: Vec<ProductSummary>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryList {
    pub categories: Vec<CategoryView>,
}

impl From<&Category> for CategoryView {
    fn from(c: &Category) -> Self {
        Self { code: c.code.clone(), name: c.name.clone() }
    }
}

pub fn summary(product: &Product) -> ProductSummary {
    ProductSummary {
        code: product.code.clone(),
        price: product.price.to_f64(),
        category: product.category.as_ref().map(CategoryView::from),
    }
}

pub fn detail(product: &Product) -> ProductDetail {
    ProductDetail {
        code: product.code.clone(),
        price: product.price.to_f64(),
        category: product.category.as_ref().map(CategoryView::from).unwrap_or_default(),
        variants: product.variants.iter().map(|v| variant(product, v)).collect(),
    }
}

fn variant(product: &Product, v: &Variant) -> VariantView {
    let effective = product.variant_price(v);
    VariantView {
        name: v.name.clone(),
        sku: v.sku.clone(),
        // Omitted rather than zero when neither level carries a price.
        price: (!effective.is_unset()).then(|| effective.to_f64()),
    }
}

pub fn catalog_page(products: &[Product], total: i64) -> CatalogPage {
    CatalogPage { products: products.iter().map(summary).collect(), total }
}

pub fn category_list(categories: &[Category]) -> CategoryList {
    CategoryList { categories: categories.iter().map(CategoryView::from).collect() }
}
