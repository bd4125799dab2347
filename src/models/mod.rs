pub mod catalog;
pub mod item;
pub mod receipt;

pub use catalog::{load_catalog, Catalog, CatalogFile};
pub use item::{normalize_name, Category, MenuItem};
pub use receipt::{format_money, Receipt, ReceiptLine, SavedSelection};
