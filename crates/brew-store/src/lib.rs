//! brew-store — client-side state for the beverage builder.
//!
//! `BeverageStore` keeps three option lists (bases, creamers, syrups), one
//! current selection per list, and the beverages made so far. It reads and
//! writes through any [`DocumentDb`](brew_state::DocumentDb):
//!
//! - `init` loads every list, seeding defaults into empty collections,
//!   then loads saved beverages
//! - `make_beverage` snapshots the current selections into a new record
//! - `show_beverage` restores selections from a saved record
//!
//! # Architecture
//!
//! ```text
//! BeverageStore
//!   ├── DocumentDb (bases, creamers, syrups, beverages collections)
//!   ├── DefaultCatalog (seed data for empty option collections)
//!   └── per-category slot
//!       ├── loaded items
//!       └── current selection
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::BeverageStore;
