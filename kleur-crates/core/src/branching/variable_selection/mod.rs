mod input_order;
mod most_constrained;
mod variable_selector;

pub use input_order::InputOrder;
pub use most_constrained::MostConstrained;
pub use variable_selector::VariableSelector;
