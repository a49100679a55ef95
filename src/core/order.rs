//! The order record and the payloads that carry it over HTTP
//!
//! `Order` is what clients read back, `OrderPayload` and `WaiterUpdate` are
//! what they send. Payload fields are all `Option` so that a missing field
//! surfaces as a validation error rather than a JSON parse error.

use super::error::OrderError;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::Validate;

/// Store-assigned identifier of an order
///
/// Rendered as the 24 character lowercase hex form of a MongoDB ObjectId.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(ObjectId);

impl OrderId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// The all-zero identifier, which never matches a stored order
    pub fn nil() -> Self {
        Self(ObjectId::from_bytes([0; 12]))
    }

    /// Parse a path parameter without rejecting it
    ///
    /// Unparseable input maps to [`OrderId::nil`], so a garbage id simply
    /// finds nothing downstream instead of failing the request.
    pub fn parse_lenient(raw: &str) -> Self {
        match ObjectId::parse_str(raw) {
            Ok(oid) => Self(oid),
            Err(e) => {
                tracing::debug!(raw, error = %e, "Unparseable order id, falling back to nil id");
                Self::nil()
            }
        }
    }

    pub fn is_nil(&self) -> bool {
        *self == Self::nil()
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<ObjectId> for OrderId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl fmt::Debug for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderId({})", self.0.to_hex())
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ObjectId::parse_str(&raw)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// A persisted order
///
/// `Order::default()` is the zero-value record returned by the update
/// operations when no document matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub dish: String,
    pub price: f64,
    pub server: String,
    pub table: i64,
}

impl Order {
    pub fn from_fields(id: OrderId, fields: OrderFields) -> Self {
        Self {
            id,
            dish: fields.dish,
            price: fields.price,
            server: fields.server,
            table: fields.table,
        }
    }
}

/// The four business fields of an order, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub dish: String,
    pub price: f64,
    pub server: String,
    pub table: i64,
}

impl OrderFields {
    pub fn new(dish: impl Into<String>, price: f64, server: impl Into<String>, table: i64) -> Self {
        Self {
            dish: dish.into(),
            price,
            server: server.into(),
            table,
        }
    }
}

/// Request body for create and full replace
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderPayload {
    #[validate(required, length(min = 1))]
    pub dish: Option<String>,

    #[validate(required)]
    pub price: Option<f64>,

    #[validate(required, length(min = 1))]
    pub server: Option<String>,

    #[validate(required)]
    pub table: Option<i64>,
}

impl TryFrom<OrderPayload> for OrderFields {
    type Error = OrderError;

    fn try_from(payload: OrderPayload) -> Result<Self, Self::Error> {
        let missing = |field: &str| OrderError::Validation(format!("{}: required", field));

        Ok(Self {
            dish: payload.dish.ok_or_else(|| missing("dish"))?,
            price: payload.price.ok_or_else(|| missing("price"))?,
            server: payload.server.ok_or_else(|| missing("server"))?,
            table: payload.table.ok_or_else(|| missing("table"))?,
        })
    }
}

/// Request body for the partial waiter update
///
/// `server` may be omitted, in which case the stored value is cleared. An
/// empty string is stored as given.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WaiterUpdate {
    pub server: Option<String>,
}

/// Acknowledgment of a successful insert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertAck {
    #[serde(rename = "InsertedID")]
    pub inserted_id: OrderId,
}

/// Result of an update or replace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of a delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}
