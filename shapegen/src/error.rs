//! Error types for shape generation

/// Rejected shape parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A numeric parameter is outside its valid range
    #[error("{shape}: {param} must be {expected}, got {value}")]
    InvalidParameter {
        shape: &'static str,
        param: &'static str,
        expected: &'static str,
        value: String,
    },

    /// The mesh would need more vertices than a u32 index can address
    #[error("{shape}: {vertices} vertices exceeds the u32 index range")]
    TooManyVertices { shape: &'static str, vertices: u64 },
}

impl ShapeError {
    pub(crate) fn invalid(
        shape: &'static str,
        param: &'static str,
        expected: &'static str,
        value: impl ToString,
    ) -> Self {
        Self::InvalidParameter {
            shape,
            param,
            expected,
            value: value.to_string(),
        }
    }
}

/// Require a finite, strictly positive length
pub(crate) fn positive(shape: &'static str, param: &'static str, value: f32) -> Result<f32, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::invalid(shape, param, "finite and > 0", value))
    }
}

/// Require a subdivision count of at least `min`
pub(crate) fn at_least(
    shape: &'static str,
    param: &'static str,
    min: u32,
    value: u32,
) -> Result<u32, ShapeError> {
    if value >= min {
        Ok(value)
    } else {
        let expected = match min {
            1 => ">= 1",
            3 => ">= 3",
            _ => "larger",
        };
        Err(ShapeError::invalid(shape, param, expected, value))
    }
}

/// Require a vertex count that fits the u32 index range
pub(crate) fn vertex_budget(shape: &'static str, vertices: u64) -> Result<u32, ShapeError> {
    u32::try_from(vertices).map_err(|_| ShapeError::TooManyVertices { shape, vertices })
}
