//! XML navigation and the generic field-extraction primitive.

mod field;
pub mod transform;
mod utils;

pub use field::{extract, required_text, Aggregate, Optional, Required, Sum};
pub use utils::{
    collect_by_path, element_children, find_by_path, find_child, find_children, get_tag_name,
    qualified_name,
};
