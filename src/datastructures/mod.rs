mod assignment;
mod truth_table;

pub use assignment::*;
pub use truth_table::*;
