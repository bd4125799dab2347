pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Catalog, Category, MenuItem, Receipt, SavedSelection};
pub use state::{OrderSession, PlannerMachine};
