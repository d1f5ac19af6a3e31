pub mod square;
pub mod error_function;

pub use square::SquareLoss;
pub use error_function::ErrorFunction;
