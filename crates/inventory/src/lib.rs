//! Inventory domain module.
//!
//! Stock bookkeeping for the shop: goods, per-good quantity containers, the
//! collections that aggregate them, and the warehouse that owns the
//! authoritative stock. Pure in-memory logic (no IO, no storage).

pub mod collection;
pub mod container;
pub mod good;
pub mod provider;
pub mod warehouse;

pub use collection::GoodCollection;
pub use container::GoodContainer;
pub use good::Good;
pub use provider::GoodsProvider;
pub use warehouse::Warehouse;
