//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be stored
//! as matrix values and multiplied by the kernel.

use crate::format::DataType;
use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Mul};

/// Trait for floating point types that can be stored in a CSR matrix
///
/// All element types must be:
/// - Copy: values are moved in and out of flat arrays by value
/// - Add/Mul/AddAssign: the kernel accumulates `value * x[col]`
/// - Display: the dump printer formats them with a fixed precision
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Send
    + Sync
    + 'static
{
    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    /// Additive identity, used for freshly reset output buffers
    fn zero() -> Self;

    /// Multiplicative identity, used for the initial vector
    fn one() -> Self;

    /// Parse a value field from a triplet line
    fn parse_field(field: &str) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($type:ty, $variant:ident) => {
        impl MatrixElement for $type {
            fn data_type() -> DataType {
                DataType::$variant
            }

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn parse_field(field: &str) -> Option<Self> {
                field.parse::<$type>().ok()
            }
        }
    };
}

impl_matrix_element!(f32, F32);
impl_matrix_element!(f64, F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(f32::parse_field("3.5"), Some(3.5));
        assert_eq!(f32::parse_field("-2e3"), Some(-2000.0));
        assert_eq!(f64::parse_field("1"), Some(1.0));
        assert_eq!(f32::parse_field("abc"), None);
        assert_eq!(f64::parse_field(""), None);
    }

    #[test]
    fn test_data_type() {
        assert_eq!(f32::data_type(), DataType::F32);
        assert_eq!(f64::data_type(), DataType::F64);
    }
}
