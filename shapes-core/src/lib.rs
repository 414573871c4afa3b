pub mod shape;
pub mod triangle;
mod utils;

/// Scalar type.
pub type Scalar = f64;

pub mod prelude {
    pub use crate::{shape::*, triangle::*, Scalar};
}
