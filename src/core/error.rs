/// Result type for projection functions.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl ProjectionError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ProjectionError::InvalidInput { field, .. } => field,
        }
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> ProjectionResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, "must be a finite number"))
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> ProjectionResult<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, "must be >= 0"));
    }
    Ok(())
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> ProjectionResult<()> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ProjectionError::invalid(field, "must be > 0"));
    }
    Ok(())
}

/// Rejects a computed value that overflowed. Inputs are finite by the time
/// this runs, so a non-finite result means the amounts or horizon are too large.
pub(crate) fn ensure_finite_output(field: &'static str, value: f64) -> ProjectionResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(
            field,
            "projection overflows; reduce the amounts or the horizon",
        ))
    }
}

/// Annual percentage rates at or below -100% wipe out the balance and make
/// fractional compounding undefined.
pub(crate) fn ensure_rate(field: &'static str, percent: f64) -> ProjectionResult<()> {
    ensure_finite(field, percent)?;
    if percent <= -100.0 {
        return Err(ProjectionError::invalid(field, "must be > -100"));
    }
    Ok(())
}
