pub mod validation;

pub use validation::AppJson;
