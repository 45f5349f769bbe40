//! Sales domain module.
//!
//! Carts reserve stock from a [`GoodsProvider`](storefront_inventory::GoodsProvider)
//! as goods are added, and either turn the reservation into an invoice on
//! order or hand it back on release.

pub mod cart;
pub mod shop;

pub use cart::Cart;
pub use shop::Shop;
