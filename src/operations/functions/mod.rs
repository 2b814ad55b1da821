mod connective_function;
mod formula_depth_function;
mod models_function;
mod sub_node_function;
mod truth_table_function;
mod variables_function;

pub use connective_function::*;
pub use formula_depth_function::*;
pub use models_function::*;
pub use sub_node_function::*;
pub use truth_table_function::*;
pub use variables_function::*;
