//! UI Components
//!
//! Reusable Leptos components.

mod topping_checkbox;
mod topping_list;
mod result_line;
mod greet_form;
mod check_form;

pub use topping_checkbox::ToppingCheckbox;
pub use topping_list::ToppingList;
pub use result_line::ResultLine;
pub use greet_form::GreetForm;
pub use check_form::CheckForm;
