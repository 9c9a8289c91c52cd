//! In-memory dataset and key lookups
//!
//! `RawDataset` is what the loader produces. `Dataset` is the cleaned,
//! validated snapshot every calculator reads. Nothing mutates a `Dataset`
//! after construction.

use std::collections::HashMap;

use super::types::{Customer, Location, Order, PostalCode, Product, RawLocation};

/// Table names, as used for file names and error context
pub const CUSTOMERS: &str = "customers";
pub const ORDERS: &str = "orders";
pub const LOCATIONS: &str = "locations";
pub const PRODUCTS: &str = "products";

/// The four tables as loaded, before cleaning
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub locations: Vec<RawLocation>,
    pub products: Vec<Product>,
}

/// Cleaned snapshot of the four tables
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub locations: Vec<Location>,
    pub products: Vec<Product>,
}

impl Dataset {
    pub fn new(
        customers: Vec<Customer>,
        orders: Vec<Order>,
        locations: Vec<Location>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            customers,
            orders,
            locations,
            products,
        }
    }

    /// Builds key lookups over the dimension tables.
    ///
    /// The first row wins when a key repeats; the validator rejects
    /// datasets with repeated keys before they get here.
    pub fn index(&self) -> DatasetIndex<'_> {
        let mut customers = HashMap::with_capacity(self.customers.len());
        for c in &self.customers {
            customers.entry(c.customer_id.as_str()).or_insert(c);
        }

        let mut products = HashMap::with_capacity(self.products.len());
        for p in &self.products {
            products.entry(p.product_id.as_str()).or_insert(p);
        }

        let mut locations = HashMap::with_capacity(self.locations.len());
        for l in &self.locations {
            locations.entry(l.postal_code).or_insert(l);
        }

        DatasetIndex {
            dataset: self,
            customers,
            products,
            locations,
        }
    }
}

/// Key lookups borrowed from a `Dataset`
#[derive(Debug)]
pub struct DatasetIndex<'a> {
    dataset: &'a Dataset,
    customers: HashMap<&'a str, &'a Customer>,
    products: HashMap<&'a str, &'a Product>,
    locations: HashMap<PostalCode, &'a Location>,
}

impl<'a> DatasetIndex<'a> {
    pub fn customer(&self, customer_id: &str) -> Option<&'a Customer> {
        self.customers.get(customer_id).copied()
    }

    pub fn product(&self, product_id: &str) -> Option<&'a Product> {
        self.products.get(product_id).copied()
    }

    pub fn location(&self, postal_code: PostalCode) -> Option<&'a Location> {
        self.locations.get(&postal_code).copied()
    }

    /// Left-joins one order onto all three dimensions.
    pub fn join(&self, order: &'a Order) -> JoinedOrder<'a> {
        JoinedOrder {
            order,
            customer: self.customer(&order.customer_id),
            product: self.product(&order.product_id),
            location: self.location(order.postal_code),
        }
    }

    /// Left-joins every order, in table order.
    pub fn joined_orders(&self) -> impl Iterator<Item = JoinedOrder<'a>> + '_ {
        self.dataset.orders.iter().map(move |o| self.join(o))
    }
}

/// An order with whichever dimension rows matched its keys
#[derive(Debug, Clone, Copy)]
pub struct JoinedOrder<'a> {
    pub order: &'a Order,
    pub customer: Option<&'a Customer>,
    pub product: Option<&'a Product>,
    pub location: Option<&'a Location>,
}

impl JoinedOrder<'_> {
    /// True when every dimension matched
    pub fn is_complete(&self) -> bool {
        self.customer.is_some() && self.product.is_some() && self.location.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(row_id: i64, customer: &str, product: &str, postal: u32) -> Order {
        let date = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
        Order {
            row_id,
            order_id: format!("ORD-{}", row_id),
            order_date: date,
            ship_date: date,
            ship_mode: "Standard Class".into(),
            customer_id: customer.into(),
            segment: "Consumer".into(),
            postal_code: PostalCode(postal),
            product_id: product.into(),
            sales: 10.0,
            quantity: 1,
            discount: 0.0,
            profit: 1.0,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![Customer {
                customer_id: "C1".into(),
                customer_name: "Claire Gute".into(),
            }],
            vec![order(1, "C1", "P1", 10001), order(2, "C9", "P1", 99999)],
            vec![Location {
                postal_code: PostalCode(10001),
                city: "New York City".into(),
                state: "New York".into(),
                region: "East".into(),
                country_region: "United States".into(),
            }],
            vec![Product {
                product_id: "P1".into(),
                category: "Furniture".into(),
                sub_category: "Chairs".into(),
                product_name: "Task Chair".into(),
            }],
        )
    }

    #[test]
    fn test_join_resolves_dimensions() {
        let ds = dataset();
        let index = ds.index();
        let joined: Vec<_> = index.joined_orders().collect();

        assert_eq!(joined.len(), 2);
        assert!(joined[0].is_complete());
        assert_eq!(joined[0].location.unwrap().region, "East");

        assert!(!joined[1].is_complete());
        assert!(joined[1].customer.is_none());
        assert!(joined[1].product.is_some());
        assert!(joined[1].location.is_none());
    }
}
