//! CLI command implementations.

pub mod categories;
pub mod compute;
pub mod defaults;

pub use categories::CategoriesArgs;
pub use compute::ComputeArgs;
pub use defaults::DefaultsArgs;
