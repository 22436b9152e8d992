//! Entity definitions for the Olist order schema
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! `orders` and `sellers` are external tables and are modelled by key only.

pub mod order_items;
pub use order_items::Entity as OrderItems;
pub mod orders;
pub use orders::Entity as Orders;
pub mod payments;
pub use payments::Entity as Payments;
pub mod products;
pub use products::Entity as Products;
pub mod reviews;
pub use reviews::Entity as Reviews;
pub mod sellers;
pub use sellers::Entity as Sellers;
