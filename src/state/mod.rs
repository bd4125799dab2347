pub mod machine;
mod persistence;
mod session;

pub use machine::{Message, Outcome, PlannerMachine, PlannerState, View};
pub use persistence::{load_selection, save_selection, DEFAULT_SAVE_FILE};
pub use session::{parse_budget, OrderSession};
