//! In-memory catalog backend.
//!
//! Mirrors the server contract: filter by exact category and case-insensitive keyword
//! (name or description), sort by price, then cut a zero-based page.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

use super::{CategorySource, ProductSource};
use crate::fetch::TransportError;
use crate::model::{Category, ListingQuery, Pagination, Product, ProductPage, SortOrder};

pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone)]
struct Stocked {
    category: String,
    product: Product,
}

#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    items: Vec<Stocked>,
    categories: Vec<Category>,
    page_size: usize,
    latency: Duration,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            latency: Duration::ZERO,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Delay applied to every response.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Adds a product, registering its category on first use.
    pub fn with_product(mut self, category: &str, product: Product) -> Self {
        if !self.categories.iter().any(|c| c.category_name == category) {
            let id = self.categories.len() as u64 + 1;
            self.categories.push(Category::new(id, category));
        }
        self.items.push(Stocked {
            category: category.to_string(),
            product,
        });
        self
    }

    fn matches(item: &Stocked, query: &ListingQuery) -> bool {
        if let Some(category) = &query.category {
            if &item.category != category {
                return false;
            }
        }
        match &query.keyword {
            Some(keyword) => {
                let needle = keyword.to_lowercase();
                item.product.name.to_lowercase().contains(&needle)
                    || item.product.description.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    fn sort_value(product: &Product, sort_by: &str) -> f64 {
        match sort_by {
            "specialPrice" => product.special_price,
            "discount" => product.discount,
            _ => product.price,
        }
    }

    /// Runs `query` against the stored products without any latency.
    pub fn query(&self, query: &ListingQuery) -> ProductPage {
        let mut matching: Vec<&Product> = self
            .items
            .iter()
            .filter(|item| Self::matches(item, query))
            .map(|item| &item.product)
            .collect();

        matching.sort_by(|a, b| {
            let ordering = Self::sort_value(a, &query.sort_by)
                .partial_cmp(&Self::sort_value(b, &query.sort_by))
                .unwrap_or(Ordering::Equal);
            match query.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total_elements = matching.len();
        let total_pages = total_elements.div_ceil(self.page_size);
        let products = matching
            .into_iter()
            .skip((query.page_number as usize).saturating_mul(self.page_size))
            .take(self.page_size)
            .cloned()
            .collect();

        ProductPage {
            products,
            pagination: Pagination {
                total_pages: total_pages as u32,
                total_elements: total_elements as u64,
            },
        }
    }
}

#[async_trait]
impl ProductSource for InMemoryCatalog {
    async fn fetch_products(&self, query: &ListingQuery) -> Result<ProductPage, TransportError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let page = self.query(query);
        debug!(
            query = %query.to_query_string(),
            returned = page.products.len(),
            "Served listing"
        );
        Ok(page)
    }
}

#[async_trait]
impl CategorySource for InMemoryCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Category>, TransportError> {
        Ok(self.categories.clone())
    }
}
