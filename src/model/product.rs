//! Represents a product as returned by the listing collaborator.
//!
//! The engine treats products as opaque beyond their [`ProductId`], which the presentation
//! layer uses as a render key and which [`CatalogIntent::Preview`](crate::catalog_actor::CatalogIntent::Preview)
//! refers to. All other fields are passed through untouched.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: ProductId,
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    pub special_price: f64,
    #[serde(alias = "quantity")]
    pub stock: u32,
}

impl Product {
    /// Creates a new Product with no discount and no image.
    ///
    /// # Arguments
    /// * `id` - Stable identity used as render key
    /// * `name` - Product name
    /// * `price` - List price, also used as the special price
    /// * `stock` - Units available
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            description: String::new(),
            price,
            discount: 0.0,
            special_price: price,
            stock,
        }
    }

    /// Applies a percentage discount and recomputes the special price.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self.special_price = self.price * (1.0 - discount / 100.0);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the status badge should read "In Stock".
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// Pagination block of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: u32,
    pub total_elements: u64,
}

/// One page of products plus pagination, the inbound result shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

impl ProductPage {
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Entry of the category dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: u64,
    pub category_name: String,
}

impl Category {
    pub fn new(category_id: u64, category_name: impl Into<String>) -> Self {
        Self {
            category_id,
            category_name: category_name.into(),
        }
    }
}
