use thiserror::Error;

use crate::components::FieldProperty;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("{property:?} must be non-negative, got {value}")]
    NegativeValue { property: FieldProperty, value: f32 },
    #[error("{property:?} must be a finite number")]
    NonFiniteValue { property: FieldProperty },
}

pub type FieldResult<T> = Result<T, FieldError>;

pub(crate) fn non_negative(property: FieldProperty, value: f32) -> FieldResult<f32> {
    if !value.is_finite() {
        return Err(FieldError::NonFiniteValue { property });
    }
    if value < 0.0 {
        return Err(FieldError::NegativeValue { property, value });
    }
    Ok(value)
}
