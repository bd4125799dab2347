pub mod form;
pub mod prompts;
pub mod render;

pub use form::{load_previous, run_form, save_receipt};
pub use prompts::{prompt_budget, prompt_item, prompt_text, prompt_yes_no};
pub use render::{
    display_menu, display_message, display_receipt, display_summary, format_menu,
    format_receipt, format_summary, item_label,
};
