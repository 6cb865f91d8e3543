use serde::{Deserialize, Serialize};

use business::domain::product::errors::ProductError;
use business::domain::product::model::{
    NewProductInputProps, Product, ProductInput, format_timestamp,
};

/// Client payload for create and update. Missing fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestProduct {
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    /// `DD-MM-YYYY HH:MM:SS`; empty or absent keeps the product active.
    pub deactivated_at: Option<String>,
}

impl RequestProduct {
    pub fn into_input(self) -> Result<ProductInput, ProductError> {
        ProductInput::new(NewProductInputProps {
            name: self.name,
            category: self.category,
            image: self.image,
            description: self.description,
            price: self.price,
            deactivated_at: self.deactivated_at,
        })
    }
}

/// Product as returned to clients by every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<String>,
}

impl From<Product> for OutputProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            image: product.image,
            description: product.description,
            price: product.price,
            created_at: format_timestamp(&product.created_at),
            deactivated_at: product.deactivated_at.as_ref().map(format_timestamp),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryQuery {
    pub category: String,
}
