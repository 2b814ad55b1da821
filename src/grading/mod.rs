mod answer;
mod config;
mod error;
mod exercise;
mod grader;
mod result;

pub use answer::*;
pub use config::*;
pub use error::*;
pub use exercise::*;
pub use grader::*;
pub use result::*;
