//! BSON mapping shared by the store backends
//!
//! Orders are stored as `{_id: ObjectId, dish, price, server, table}`. Decoding
//! happens one document at a time so a single malformed record only fails
//! itself.

use crate::core::{Order, OrderFields, OrderFilter, OrderId, StoreError};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Deserializer};

/// On-disk shape of an order
#[derive(Debug, Deserialize)]
struct OrderDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    dish: String,
    price: f64,
    // Cleared by a waiter update without a `server` value
    #[serde(default, deserialize_with = "null_as_empty")]
    server: String,
    table: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<OrderDocument> for Order {
    fn from(record: OrderDocument) -> Self {
        Self {
            id: OrderId::from(record.id),
            dish: record.dish,
            price: record.price,
            server: record.server,
            table: record.table,
        }
    }
}

/// Decode one stored document into an order
pub(crate) fn decode_order(doc: Document) -> Result<Order, StoreError> {
    let record: OrderDocument = mongodb::bson::from_document(doc)?;
    Ok(record.into())
}

/// Business fields as a document, without `_id`
pub(crate) fn fields_document(fields: &OrderFields) -> Document {
    doc! {
        "dish": fields.dish.as_str(),
        "price": fields.price,
        "server": fields.server.as_str(),
        "table": fields.table,
    }
}

/// Full document for insertion
pub(crate) fn order_document(id: &OrderId, fields: &OrderFields) -> Document {
    doc! {
        "_id": id.object_id(),
        "dish": fields.dish.as_str(),
        "price": fields.price,
        "server": fields.server.as_str(),
        "table": fields.table,
    }
}

pub(crate) fn id_filter(id: &OrderId) -> Document {
    doc! { "_id": id.object_id() }
}

pub(crate) fn filter_document(filter: &OrderFilter) -> Document {
    match filter {
        OrderFilter::All => doc! {},
        OrderFilter::Server(server) => doc! { "server": server.as_str() },
    }
}
