use chrono::{DateTime, NaiveDateTime, Utc};

use super::errors::ProductError;

/// Text format of every timestamp exchanged with HTTP clients.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A product as owned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    /// `None` while the product is active.
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.deactivated_at.is_none()
    }
}

/// The client-mutable subset of a product, forwarded on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub deactivated_at: Option<DateTime<Utc>>,
}

pub struct NewProductInputProps {
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    /// Raw client text; empty or missing means the product stays active.
    pub deactivated_at: Option<String>,
}

impl ProductInput {
    pub fn new(props: NewProductInputProps) -> Result<Self, ProductError> {
        // Prices travel as f32 on the wire.
        if !props.price.is_finite() || props.price < 0.0 || props.price > f64::from(f32::MAX) {
            return Err(ProductError::InvalidPrice);
        }

        let deactivated_at = match props.deactivated_at.as_deref() {
            Some(raw) if !raw.is_empty() => Some(parse_timestamp(raw)?),
            _ => None,
        };

        Ok(Self {
            name: props.name,
            category: props.category,
            image: props.image,
            description: props.description,
            price: props.price,
            deactivated_at,
        })
    }
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ProductError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ProductError::InvalidDeactivationDate(raw.to_string()))
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn props(price: f64, deactivated_at: Option<&str>) -> NewProductInputProps {
        NewProductInputProps {
            name: "Hermes Burger".to_string(),
            category: "snack".to_string(),
            image: "burger.png".to_string(),
            description: "double cheese".to_string(),
            price,
            deactivated_at: deactivated_at.map(str::to_string),
        }
    }

    #[test]
    fn should_keep_product_active_when_deactivation_is_empty() {
        let input = ProductInput::new(props(12.5, Some(""))).unwrap();
        assert!(input.deactivated_at.is_none());

        let input = ProductInput::new(props(12.5, None)).unwrap();
        assert!(input.deactivated_at.is_none());
    }

    #[test]
    fn should_parse_deactivation_when_present() {
        let input = ProductInput::new(props(12.5, Some("21-03-2024 10:15:00"))).unwrap();
        let deactivated_at = input.deactivated_at.expect("deactivation parsed");
        assert_eq!(format_timestamp(&deactivated_at), "21-03-2024 10:15:00");
    }

    #[test]
    fn should_reject_unparseable_deactivation() {
        let result = ProductInput::new(props(12.5, Some("2024/03/21")));
        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidDeactivationDate(raw) if raw == "2024/03/21"
        ));
    }

    #[test]
    fn should_reject_negative_or_non_finite_price() {
        assert!(matches!(
            ProductInput::new(props(-1.0, None)).unwrap_err(),
            ProductError::InvalidPrice
        ));
        assert!(matches!(
            ProductInput::new(props(f64::NAN, None)).unwrap_err(),
            ProductError::InvalidPrice
        ));
    }

    #[test]
    fn should_reject_price_beyond_wire_range() {
        assert!(matches!(
            ProductInput::new(props(1e39, None)).unwrap_err(),
            ProductError::InvalidPrice
        ));
        assert!(ProductInput::new(props(f64::from(f32::MAX), None)).is_ok());
    }

    proptest! {
        #[test]
        fn deactivation_text_round_trips(
            day in 1u32..=28,
            month in 1u32..=12,
            year in 1970i32..=2100,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) {
            let raw = format!(
                "{:02}-{:02}-{:04} {:02}:{:02}:{:02}",
                day, month, year, hour, minute, second
            );
            let parsed = parse_timestamp(&raw).unwrap();
            prop_assert_eq!(format_timestamp(&parsed), raw);
        }
    }
}
