pub mod constants;
pub mod diverse;
pub mod engine;
pub mod greedy;
pub mod pick;
pub mod remarks;

pub use constants::*;
pub use engine::{ComboSelector, Policy, SelectorConfig, SelectorStats};
pub use pick::Pick;
pub use remarks::{
    MealType, RemarkStyle, compose_reasoning, compose_remark, compose_sentence, reasons,
};
