use crate::{
    shape::Shape,
    utils::{are_edges_consistent, edges_sum, heron_area},
    Scalar,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Error thrown during triangle construction or edges replacement.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TriangleError {
    /// Wrong number of edges.
    /// (provided)
    #[error("triangle must have exactly 3 edges, got {0}")]
    WrongEdgeCount(usize),
    /// Edges fail the triangle inequality.
    /// (rejected edges)
    #[error("the edges {0:?} fail the triangle inequality condition")]
    InequalityViolated([Scalar; 3]),
}

/// Triangle described by its edge lengths.
///
/// Edges always satisfy the inclusive triangle inequality, so degenerate triangles
/// (`a + b == c`) are valid while `(3, 4, 100)` can never be constructed.
///
/// # Examples
/// ```
/// use shapes_core::prelude::*;
///
/// let triangle = Triangle::new(3.0, 4.0, 5.0).unwrap();
/// assert_eq!(triangle.perimeter(), 12.0);
/// assert_eq!(triangle.area(), 6.0);
/// assert!(!triangle.is_equilateral());
/// assert_eq!(
///     Triangle::new(3.0, 4.0, 100.0),
///     Err(TriangleError::InequalityViolated([3.0, 4.0, 100.0])),
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>")]
pub struct Triangle {
    edges: [Scalar; 3],
}

impl Triangle {
    /// Create new triangle.
    ///
    /// # Arguments
    /// * `a` - First edge length.
    /// * `b` - Second edge length.
    /// * `c` - Third edge length.
    ///
    /// # Returns
    /// Triangle or error.
    pub fn new(a: Scalar, b: Scalar, c: Scalar) -> Result<Self, TriangleError> {
        let edges = validate([a, b, c])?;
        Ok(Self { edges })
    }

    /// Create new triangle from any number of edges.
    ///
    /// # Arguments
    /// * `edges` - Edge lengths, there must be exactly three.
    ///
    /// # Returns
    /// Triangle or error.
    ///
    /// # Examples
    /// ```
    /// use shapes_core::prelude::*;
    ///
    /// assert!(Triangle::from_edges(&[5.0, 3.0, 4.0]).is_ok());
    /// assert_eq!(
    ///     Triangle::from_edges(&[3.0, 4.0, 5.0, 6.0]),
    ///     Err(TriangleError::WrongEdgeCount(4)),
    /// );
    /// ```
    pub fn from_edges(edges: &[Scalar]) -> Result<Self, TriangleError> {
        let edges = validate(exactly_three(edges)?)?;
        Ok(Self { edges })
    }

    /// Returns edge lengths in construction order.
    #[inline]
    pub fn edges(&self) -> [Scalar; 3] {
        self.edges
    }

    /// Replace all edges at once.
    /// On error triangle keeps its previous edges.
    ///
    /// # Arguments
    /// * `edges` - New edge lengths.
    ///
    /// # Examples
    /// ```
    /// use shapes_core::prelude::*;
    ///
    /// let mut triangle = Triangle::new(3.0, 4.0, 5.0).unwrap();
    /// assert!(triangle.set_edges([3.0, 4.0, 100.0]).is_err());
    /// assert_eq!(triangle.edges(), [3.0, 4.0, 5.0]);
    /// assert!(triangle.set_edges([4.0, 4.0, 4.0]).is_ok());
    /// assert!(triangle.is_equilateral());
    /// ```
    pub fn set_edges(&mut self, edges: [Scalar; 3]) -> Result<(), TriangleError> {
        self.edges = validate(edges)?;
        Ok(())
    }

    /// Replace all edges at once from any number of values.
    /// On error triangle keeps its previous edges.
    ///
    /// # Arguments
    /// * `edges` - New edge lengths, there must be exactly three.
    pub fn replace_edges(&mut self, edges: &[Scalar]) -> Result<(), TriangleError> {
        self.set_edges(exactly_three(edges)?)
    }

    /// Tells if all edges have the same length.
    #[inline]
    pub fn is_equilateral(&self) -> bool {
        let max = self.edges.iter().copied().fold(Scalar::MIN, Scalar::max);
        let min = self.edges.iter().copied().fold(Scalar::MAX, Scalar::min);
        max == min
    }
}

impl Shape for Triangle {
    /// Area from Heron's formula. Zero for degenerate triangles.
    fn area(&self) -> Scalar {
        heron_area(self.edges)
    }

    fn perimeter(&self) -> Scalar {
        edges_sum(self.edges)
    }
}

impl TryFrom<[Scalar; 3]> for Triangle {
    type Error = TriangleError;

    fn try_from([a, b, c]: [Scalar; 3]) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}

impl TryFrom<&[Scalar]> for Triangle {
    type Error = TriangleError;

    fn try_from(edges: &[Scalar]) -> Result<Self, Self::Error> {
        Self::from_edges(edges)
    }
}

impl TryFrom<Vec<Scalar>> for Triangle {
    type Error = TriangleError;

    fn try_from(edges: Vec<Scalar>) -> Result<Self, Self::Error> {
        Self::from_edges(&edges)
    }
}

impl From<Triangle> for Vec<Scalar> {
    fn from(triangle: Triangle) -> Self {
        triangle.edges.to_vec()
    }
}

fn exactly_three(edges: &[Scalar]) -> Result<[Scalar; 3], TriangleError> {
    match edges {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(TriangleError::WrongEdgeCount(edges.len())),
    }
}

fn validate(edges: [Scalar; 3]) -> Result<[Scalar; 3], TriangleError> {
    if are_edges_consistent(edges) {
        trace!(?edges, "triangle edges accepted");
        Ok(edges)
    } else {
        debug!(?edges, "triangle edges rejected");
        Err(TriangleError::InequalityViolated(edges))
    }
}
