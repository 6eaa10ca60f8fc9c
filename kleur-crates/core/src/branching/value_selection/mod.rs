mod in_domain_order;
mod least_constraining_value;
mod value_selector;

pub use in_domain_order::InDomainOrder;
pub use least_constraining_value::LeastConstrainingValue;
pub use value_selector::ValueSelector;
