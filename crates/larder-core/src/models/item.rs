//! Inventory item model

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Identifier of an inventory item: the creation time in Unix milliseconds,
/// rendered as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Issue a new id from the current time.
    ///
    /// Ids are strictly increasing within the process, so two items created in
    /// the same millisecond still get distinct ids.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED_MS.load(Ordering::Acquire);
        loop {
            let next = now.max(last.saturating_add(1));
            match LAST_ISSUED_MS.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Self(next.to_string()),
                Err(current) => last = current,
            }
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("Item ID cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    /// Price per unit
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    /// ISO-8601 timestamp of the last create or update
    pub last_updated: String,
}

impl InventoryItem {
    /// Stock is low once the quantity drops to the minimum or below.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Value of the stock on hand (`quantity * price`).
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        self.quantity * self.price
    }

    /// Parsed `last_updated`, if it holds a valid RFC 3339 timestamp.
    #[must_use]
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|stamp| stamp.with_timezone(&Utc))
    }
}

/// Fields supplied by the caller when creating an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl NewItem {
    /// Stamp the draft with its server-assigned id and timestamp.
    #[must_use]
    pub fn into_item(self, id: ItemId, last_updated: String) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            min_stock: self.min_stock,
            price: self.price,
            supplier: normalize_text_option(self.supplier),
            last_updated,
        }
    }
}

/// Raw create payload as received over HTTP, before required-field checks.
///
/// Numeric fields accept JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub min_stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default)]
    pub supplier: Option<String>,
}

impl NewItemRequest {
    /// Check that every required field is present.
    ///
    /// Text fields count as missing when blank; numeric fields only when
    /// absent or `null`, so a quantity of zero is accepted.
    pub fn validate(self) -> Result<NewItem> {
        let missing = || Error::InvalidInput("Missing required fields".to_string());

        Ok(NewItem {
            name: normalize_text_option(self.name).ok_or_else(missing)?,
            category: normalize_text_option(self.category).ok_or_else(missing)?,
            quantity: self.quantity.ok_or_else(missing)?,
            unit: normalize_text_option(self.unit).ok_or_else(missing)?,
            min_stock: self.min_stock.ok_or_else(missing)?,
            price: self.price.ok_or_else(missing)?,
            supplier: normalize_text_option(self.supplier),
        })
    }
}

/// Partial update; `None` leaves the stored value untouched.
///
/// Unknown keys such as `id` or `lastUpdated` are ignored, so a full item can
/// be sent back as an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_stock: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// An empty string clears the supplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl ItemUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
            && self.min_stock.is_none()
            && self.price.is_none()
            && self.supplier.is_none()
    }

    /// Merge this update over `existing`, keeping its id and stamping
    /// `last_updated`.
    ///
    /// Text fields are trimmed. A blank name, category, or unit keeps the
    /// stored value since those fields are required.
    #[must_use]
    pub fn apply(&self, existing: &InventoryItem, last_updated: String) -> InventoryItem {
        let required = |update: &Option<String>, current: &String| {
            normalize_text_option(update.clone()).unwrap_or_else(|| current.clone())
        };
        InventoryItem {
            id: existing.id.clone(),
            name: required(&self.name, &existing.name),
            category: required(&self.category, &existing.category),
            quantity: self.quantity.unwrap_or(existing.quantity),
            unit: required(&self.unit, &existing.unit),
            min_stock: self.min_stock.unwrap_or(existing.min_stock),
            price: self.price.unwrap_or(existing.price),
            supplier: match &self.supplier {
                Some(supplier) => normalize_text_option(Some(supplier.clone())),
                None => existing.supplier.clone(),
            },
            last_updated,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accept `12`, `12.5`, or `"12.5"`; a blank string counts as absent.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(value)) => value,
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("expected a number, got {text:?}")))?
        }
    };

    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(de::Error::custom("number must be finite"))
    }
}
