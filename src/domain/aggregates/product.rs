//! Product Aggregate

use crate::domain::aggregates::Category;
use crate::domain::value_objects::Price;

/// Fully hydrated product: its category (if any) and its ordered variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub code: String,
    pub price: Price,
    pub category: Option<Category>,
    pub variants: Vec<Variant>,
}

/// Purchasable configuration of a product. A zero `price` means unset.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name: String,
    pub sku: String,
    pub price: Price,
}

impl Product {
    pub fn new(code: impl Into<String>, price: Price) -> Self {
        Self { code: code.into(), price, category: None, variants: vec![] }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Price exposed for `variant` when sold as part of this product.
    pub fn variant_price(&self, variant: &Variant) -> Price {
        variant.effective_price(self.price)
    }
}

impl Variant {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: Price) -> Self {
        Self { name: name.into(), sku: sku.into(), price }
    }

    pub fn effective_price(&self, product_price: Price) -> Price {
        Price::resolve(self.price, product_price)
    }
}
