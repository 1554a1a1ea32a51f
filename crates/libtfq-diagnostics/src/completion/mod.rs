//! Domain completions layered on top of the grammar's own suggestions.
//!
//! The parser only knows token classes. These helpers add what the console
//! knows about filter queries: which logical and comparison operators fit
//! after a complete expression, and which field names or sub-attributes
//! complete a partially typed selector.

mod completing_oracle;
mod field_completion;
mod operator_completion;

pub use completing_oracle::CompletingOracle;
pub use field_completion::field_name_suggestions;
pub use operator_completion::comparison_operator_suggestions;
pub use operator_completion::logical_operator_suggestions;
pub use operator_completion::COMPARISON_OPERATORS;
pub use operator_completion::LOGICAL_OPERATORS;
