//! Shared test data for calculator tests

use chrono::NaiveDate;

use crate::schema::{Customer, Dataset, Location, Order, PostalCode, Product};

pub const EAST: u32 = 10001;
pub const WEST: u32 = 90036;
pub const SOUTH: u32 = 42420;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// An order for C1 / P1 in the East, shipped the same day, no discount
pub fn order(row_id: i64, order_date: &str) -> Order {
    let d = date(order_date);
    Order {
        row_id,
        order_id: format!("CA-{}", row_id),
        order_date: d,
        ship_date: d,
        ship_mode: "Standard Class".into(),
        customer_id: "C1".into(),
        segment: "Consumer".into(),
        postal_code: PostalCode(EAST),
        product_id: "P1".into(),
        sales: 0.0,
        quantity: 1,
        discount: 0.0,
        profit: 0.0,
    }
}

fn customer(id: &str, name: &str) -> Customer {
    Customer {
        customer_id: id.into(),
        customer_name: name.into(),
    }
}

fn product(id: &str, category: &str, sub: &str, name: &str) -> Product {
    Product {
        product_id: id.into(),
        category: category.into(),
        sub_category: sub.into(),
        product_name: name.into(),
    }
}

fn location(code: u32, city: &str, state: &str, region: &str) -> Location {
    Location {
        postal_code: PostalCode(code),
        city: city.into(),
        state: state.into(),
        region: region.into(),
        country_region: "United States".into(),
    }
}

/// Three customers, four products, three regions
pub fn dataset(orders: Vec<Order>) -> Dataset {
    Dataset::new(
        vec![
            customer("C1", "Claire Gute"),
            customer("C2", "Darrin Van Huff"),
            customer("C3", "Sean O'Donnell"),
        ],
        orders,
        vec![
            location(EAST, "New York City", "New York", "East"),
            location(WEST, "Los Angeles", "California", "West"),
            location(SOUTH, "Henderson", "Kentucky", "South"),
        ],
        vec![
            product("P1", "Furniture", "Chairs", "Hon Task Chair"),
            product("P2", "Furniture", "Tables", "Bretford Table"),
            product("P3", "Office Supplies", "Paper", "Xerox 1967"),
            product("P4", "Technology", "Phones", "Polycom Phone"),
        ],
    )
}
