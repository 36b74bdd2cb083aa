use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} = {value} is not a finite number")]
    NotFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} must be positive")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} must not be negative")]
    Negative { parameter: &'static str, value: f64 },

    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to affine transformations.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transformation matrix [{a}, {b}, {c}, {d}, {e}, {f}] is not invertible")]
    Singular {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
}

/// Errors related to polynomial algebra and root finding.
#[derive(Debug, Error)]
pub enum PolynomialError {
    #[error("polynomial must have at least one coefficient")]
    Empty,

    #[error("coefficient {index} = {value} is not a finite number")]
    NotFinite { index: usize, value: f64 },

    #[error("leading coefficient must not be zero")]
    ZeroLeadingCoefficient,

    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("complex root {re}{im:+}i has no conjugate partner, coefficients would not be real")]
    UnpairedComplexRoot { re: f64, im: f64 },

    #[error("no convergence for degree {degree} after {restarts} shift restarts")]
    NoConvergence { degree: usize, restarts: usize },

    #[error("invalid quadrature order {0}")]
    InvalidOrder(usize),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
