use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::errors::RpcError;
use business::domain::product::model::{Product, ProductInput};

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub method: &'a str,
    pub params: &'a P,
    pub id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<R> {
    pub result: Option<R>,
    pub error: Option<String>,
}

/// Product payload as sent to the backend on create and update.
///
/// The wire carries price as `f32`; values above f32's 24-bit mantissa lose
/// precision on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInputMessage {
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f32,
    pub deactivated_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProductMessage<'a> {
    pub uuid: &'a str,
    pub product: &'a ProductInputMessage,
}

#[derive(Debug, Serialize)]
pub struct ProductIdMessage<'a> {
    pub uuid: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CategoryMessage<'a> {
    pub category: &'a str,
}

/// Product as returned by the backend. Timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMessage {
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f32,
    pub created_at: String,
    pub deactivated_at: Option<String>,
}

pub fn narrow_price(price: f64) -> Result<f32, RpcError> {
    let narrowed = price as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(RpcError::codec(format!(
            "price {} does not fit the wire format",
            price
        )))
    }
}

fn parse_wire_timestamp(raw: &str) -> Result<DateTime<Utc>, RpcError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| RpcError::codec(format!("invalid timestamp '{}': {}", raw, err)))
}

impl TryFrom<&ProductInput> for ProductInputMessage {
    type Error = RpcError;

    fn try_from(product: &ProductInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            price: narrow_price(product.price)?,
            deactivated_at: product.deactivated_at.map(|value| value.to_rfc3339()),
        })
    }
}

impl ProductMessage {
    /// Converts the wire product; a message without an id counts as absent.
    pub fn into_domain(self) -> Result<Option<Product>, RpcError> {
        if self.uuid.is_empty() {
            return Ok(None);
        }

        let deactivated_at = match self.deactivated_at.as_deref() {
            Some(raw) if !raw.is_empty() => Some(parse_wire_timestamp(raw)?),
            _ => None,
        };

        Ok(Some(Product {
            id: self.uuid,
            name: self.name,
            category: self.category,
            image: self.image,
            description: self.description,
            price: f64::from(self.price),
            created_at: parse_wire_timestamp(&self.created_at)?,
            deactivated_at,
        }))
    }
}
