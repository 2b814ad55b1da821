mod formula;
mod printer;

pub use formula::*;
pub use printer::*;
