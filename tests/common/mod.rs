//! Shared helpers for integration tests: writes a small dataset
//! directory in the on-disk table format.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

pub struct OrderSpec {
    pub row_id: i64,
    pub order_date: &'static str,
    pub ship_date: &'static str,
    pub ship_mode: &'static str,
    pub customer_id: &'static str,
    pub postal_code: u32,
    pub product_id: &'static str,
    pub sales: f64,
    pub discount: f64,
    pub profit: f64,
}

impl OrderSpec {
    pub fn new(row_id: i64, order_date: &'static str) -> Self {
        Self {
            row_id,
            order_date,
            ship_date: order_date,
            ship_mode: "Standard Class",
            customer_id: "CG-12520",
            postal_code: 42420,
            product_id: "FUR-BO-10001798",
            sales: 0.0,
            discount: 0.0,
            profit: 0.0,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "row_id": self.row_id,
            "order_id": format!("CA-{}", self.row_id),
            "order_date": self.order_date,
            "ship_date": self.ship_date,
            "ship_mode": self.ship_mode,
            "customer_id": self.customer_id,
            "segment": "Consumer",
            "postal_code": self.postal_code,
            "product_id": self.product_id,
            "sales": self.sales,
            "quantity": 1,
            "discount": self.discount,
            "profit": self.profit,
        })
    }
}

pub fn customers() -> Value {
    json!([
        {"customer_id": "CG-12520", "customer_name": "Claire Gute"},
        {"customer_id": "DV-13045", "customer_name": "Darrin Van Huff"},
        {"customer_id": "SO-20335", "customer_name": "Sean O'Donnell"}
    ])
}

/// Three regions, plus one malformed row the cleaner drops
pub fn locations() -> Value {
    json!([
        {"postal_code": 42420, "city": "Henderson", "state": "Kentucky",
         "region": "South", "country_region": "United States"},
        {"postal_code": "90036", "city": "Los Angeles", "state": "California",
         "region": "West", "country_region": "United States"},
        {"postal_code": 10024.0, "city": "New York City", "state": "New York",
         "region": "East", "country_region": "United States"},
        {"postal_code": "unknown", "city": "Nowhere", "state": "",
         "region": "", "country_region": ""}
    ])
}

/// Four products, plus a header row the cleaner drops
pub fn products() -> Value {
    json!([
        {"product_id": "Product ID", "category": "Category",
         "sub_category": "Sub-Category", "product_name": "Product Name"},
        {"product_id": "FUR-BO-10001798", "category": "Furniture",
         "sub_category": "Bookcases", "product_name": "Bush Somerset Collection Bookcase"},
        {"product_id": "FUR-CH-10000454", "category": "Furniture",
         "sub_category": "Chairs", "product_name": "Hon Deluxe Fabric Upholstered Stacking Chairs"},
        {"product_id": "OFF-LA-10000240", "category": "Office Supplies",
         "sub_category": "Labels", "product_name": "Self-Adhesive Address Labels"},
        {"product_id": "TEC-PH-10002275", "category": "Technology",
         "sub_category": "Phones", "product_name": "Mitel 5320 IP Phone VoIP phone"}
    ])
}

pub fn write_table(dir: &Path, table: &str, rows: &Value) {
    fs::write(dir.join(format!("{}.json", table)), rows.to_string()).unwrap();
}

/// Creates a data directory with the standard dimensions and `orders`
pub fn data_dir(orders: &[OrderSpec]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let rows: Vec<Value> = orders.iter().map(OrderSpec::to_json).collect();

    write_table(tmp.path(), "customers", &customers());
    write_table(tmp.path(), "orders", &Value::Array(rows));
    write_table(tmp.path(), "locations", &locations());
    write_table(tmp.path(), "products", &products());
    tmp
}
