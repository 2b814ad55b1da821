mod cnf;
mod dnf;
mod implication_elimination;
mod nnf;
mod normal_form;

pub use cnf::*;
pub use dnf::*;
pub use implication_elimination::*;
pub use nnf::*;
pub use normal_form::*;
