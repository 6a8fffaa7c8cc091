//! Deal catalog adapter
//!
//! Fetches products from the public catalog API and maps them into partner
//! deals. The mapping (title truncation, category-as-location, price
//! scaling) lives in `sf_core::deal`; this client owns the wire format.

use async_trait::async_trait;
use serde::Deserialize;

use sf_core::deal::{
    location_from_category, nightly_price, truncate_title, Deal, FALLBACK_DESCRIPTION,
    FALLBACK_RATING,
};
use sf_core::ports::{errors::CatalogError, DealCatalogPort};

pub struct ProductCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Product {
    id: u64,
    title: String,
    price: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rating: Option<ProductRating>,
}

#[derive(Debug, Deserialize)]
struct ProductRating {
    rate: f64,
}

impl ProductCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn to_deal(product: Product) -> Deal {
        Deal {
            id: product.id.to_string(),
            name: truncate_title(&product.title),
            location: location_from_category(product.category.as_deref()),
            rating: product.rating.map(|r| r.rate).unwrap_or(FALLBACK_RATING),
            price_per_night: nightly_price(product.price),
            image_url: product.image.unwrap_or_default(),
            description: product
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        }
    }
}

#[async_trait]
impl DealCatalogPort for ProductCatalogClient {
    async fn fetch_deals(&self, limit: u32) -> Result<Vec<Deal>, CatalogError> {
        let url = format!("{}/products?limit={}", self.base_url, limit);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::BadStatus(status.as_u16()));
        }

        let products: Vec<Product> = response
            .json()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        Ok(products.into_iter().map(Self::to_deal).collect())
    }
}
