use serde::Serialize;
use tracing::{debug, warn};
use tutor_core::model::{Shape, ShapeSpec, get_formula, list_shapes};

use crate::error::AdvisorError;

pub const INVALID_DIMENSIONS_MESSAGE: &str = "⚠️ Please enter valid numerical values.";

/// Result of a Learning-tab calculation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub shape: Shape,
    pub value: f64,
    pub text: String,
}

impl AreaReport {
    fn new(spec: &ShapeSpec, value: f64) -> Self {
        Self {
            shape: spec.shape,
            value,
            text: format!("{} of {}: {value:.2} cm²", spec.measure.label(), spec.name),
        }
    }
}

/// Maps shape names to formula sheets and computes areas from raw input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeAdvisorService;

impl ShapeAdvisorService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn list_shapes(&self) -> [Shape; 6] {
        list_shapes()
    }

    /// # Errors
    ///
    /// Returns `AdvisorError::UnknownShape` for names outside the fixed set.
    pub fn formula(&self, name: &str) -> Result<&'static ShapeSpec, AdvisorError> {
        get_formula(name)
    }

    /// # Errors
    ///
    /// Returns `AdvisorError` if the shape is unknown or any input is malformed.
    pub fn compute<S: AsRef<str>>(&self, name: &str, inputs: &[S]) -> Result<AreaReport, AdvisorError> {
        let spec = get_formula(name)?;
        let value = spec.compute_raw(inputs)?;
        debug!(shape = spec.name, value, "computed area");
        Ok(AreaReport::new(spec, value))
    }

    /// Display text for a calculation, including the invalid-input warning.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::UnknownShape` only; malformed inputs become the
    /// warning text.
    pub fn report<S: AsRef<str>>(&self, name: &str, inputs: &[S]) -> Result<String, AdvisorError> {
        match self.compute(name, inputs) {
            Ok(report) => Ok(report.text),
            Err(err) if err.is_invalid_input() => {
                warn!(shape = name, error = %err, "rejected dimensions");
                Ok(INVALID_DIMENSIONS_MESSAGE.to_owned())
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_formats_two_decimals_with_unit() {
        let advisor = ShapeAdvisorService::new();
        assert_eq!(advisor.report("Circle", &["7"]).unwrap(), "Area of Circle: 153.86 cm²");
        assert_eq!(
            advisor.report("Rectangle", &["40", "20"]).unwrap(),
            "Area of Rectangle: 800.00 cm²"
        );
        assert_eq!(
            advisor.report("Cube", &["4"]).unwrap(),
            "Surface Area of Cube: 96.00 cm²"
        );
        assert_eq!(
            advisor.report("cuboid", &["2", "3", "4"]).unwrap(),
            "Surface Area of Cuboid: 52.00 cm²"
        );
    }

    #[test]
    fn malformed_dimensions_render_the_warning() {
        let advisor = ShapeAdvisorService::new();
        assert_eq!(
            advisor.report("Triangle", &["10", "five"]).unwrap(),
            INVALID_DIMENSIONS_MESSAGE
        );
        assert_eq!(advisor.report("Square", &[""]).unwrap(), INVALID_DIMENSIONS_MESSAGE);
        assert_eq!(
            advisor.report("Rectangle", &["1"]).unwrap(),
            INVALID_DIMENSIONS_MESSAGE
        );
        assert_eq!(
            advisor.report("Circle", &["1e200"]).unwrap(),
            INVALID_DIMENSIONS_MESSAGE
        );
    }

    #[test]
    fn unknown_shape_is_still_an_error() {
        let err = ShapeAdvisorService::new().report("Hexagon", &["1"]).unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownShape { .. }));
    }

    #[test]
    fn compute_returns_the_raw_value() {
        let report = ShapeAdvisorService::new().compute("Triangle", &["10", "5"]).unwrap();
        assert_eq!(report.shape, Shape::Triangle);
        assert!((report.value - 25.0).abs() < f64::EPSILON);
    }
}
