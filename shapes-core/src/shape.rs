use crate::Scalar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
macro_rules! iter {
    ($v:expr) => {
        $v.par_iter()
    };
}

#[cfg(not(feature = "parallel"))]
macro_rules! iter {
    ($v:expr) => {
        $v.iter()
    };
}

/// Closed planar figure that can be measured.
///
/// # Examples
/// ```
/// use shapes_core::prelude::*;
///
/// fn describe(shape: &dyn Shape) -> String {
///     format!("{} / {}", shape.area(), shape.perimeter())
/// }
///
/// let triangle = Triangle::new(3.0, 4.0, 5.0).unwrap();
/// assert_eq!(describe(&triangle), "6 / 12");
/// ```
pub trait Shape {
    /// Returns area enclosed by the boundary.
    fn area(&self) -> Scalar;

    /// Returns length of the boundary.
    fn perimeter(&self) -> Scalar;
}

impl<S> Shape for &S
where
    S: Shape + ?Sized,
{
    fn area(&self) -> Scalar {
        (**self).area()
    }

    fn perimeter(&self) -> Scalar {
        (**self).perimeter()
    }
}

impl<S> Shape for Box<S>
where
    S: Shape + ?Sized,
{
    fn area(&self) -> Scalar {
        (**self).area()
    }

    fn perimeter(&self) -> Scalar {
        (**self).perimeter()
    }
}

/// Sum of areas of all shapes.
/// With `parallel` feature the summation order is unspecified, so the result may differ
/// from a sequential sum in the last bits.
///
/// # Arguments
/// * `shapes` - Shapes to measure.
///
/// # Examples
/// ```
/// use shapes_core::prelude::*;
///
/// let shapes: Vec<Box<dyn Shape + Send + Sync>> = vec![
///     Box::new(Triangle::new(3.0, 4.0, 5.0).unwrap()),
///     Box::new(Triangle::new(5.0, 5.0, 8.0).unwrap()),
/// ];
/// assert_eq!(total_area(&shapes), 18.0);
/// assert_eq!(total_area::<Triangle>(&[]), 0.0);
/// ```
pub fn total_area<S>(shapes: &[S]) -> Scalar
where
    S: Shape + Sync,
{
    iter!(shapes).map(|s| s.area()).sum()
}

/// Sum of perimeters of all shapes.
/// With `parallel` feature the summation order is unspecified.
///
/// # Arguments
/// * `shapes` - Shapes to measure.
pub fn total_perimeter<S>(shapes: &[S]) -> Scalar
where
    S: Shape + Sync,
{
    iter!(shapes).map(|s| s.perimeter()).sum()
}
