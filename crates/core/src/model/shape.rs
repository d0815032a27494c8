use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::number::parse_number;

/// Approximation of π used by every circle formula taught in the app.
pub const PI_APPROX: f64 = 3.14;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("unknown shape: {name}")]
    UnknownShape { name: String },

    #[error("{shape} expects {expected} input(s), got {provided}")]
    InputCount {
        shape: Shape,
        expected: usize,
        provided: usize,
    },

    #[error("{label}: `{raw}` is not a valid number")]
    NotANumber { label: &'static str, raw: String },

    #[error("{shape} dimensions are too large to compute")]
    OutOfRange { shape: Shape },
}

impl ShapeError {
    /// True for malformed dimensions (as opposed to an unknown shape name).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InputCount { .. } | Self::NotANumber { .. } | Self::OutOfRange { .. }
        )
    }
}

//
// ─── SHAPES ────────────────────────────────────────────────────────────────────
//

/// What the formula of a shape measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Measure {
    Area,
    SurfaceArea,
}

impl Measure {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::SurfaceArea => "Surface Area",
        }
    }
}

/// The closed set of shapes the tutor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Shape {
    Circle,
    Rectangle,
    Square,
    Triangle,
    Cube,
    Cuboid,
}

/// Static description of a shape: formula text, inputs and reference link.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSpec {
    pub shape: Shape,
    pub name: &'static str,
    pub formula_text: &'static str,
    pub input_labels: &'static [&'static str],
    pub reference_label: &'static str,
    pub reference_url: &'static str,
    pub measure: Measure,
    compute: fn(&[f64]) -> f64,
}

impl ShapeSpec {
    /// Number of dimensions the formula needs.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.input_labels.len()
    }

    /// Apply the formula to already-parsed dimensions.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InputCount` if `values` does not match `input_labels`
    /// and `ShapeError::OutOfRange` if the result is not finite.
    pub fn compute(&self, values: &[f64]) -> Result<f64, ShapeError> {
        if values.len() != self.arity() {
            return Err(ShapeError::InputCount {
                shape: self.shape,
                expected: self.arity(),
                provided: values.len(),
            });
        }
        let value = (self.compute)(values);
        if !value.is_finite() {
            return Err(ShapeError::OutOfRange { shape: self.shape });
        }
        Ok(value)
    }

    /// Parse raw text inputs in label order and apply the formula.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InputCount` on a count mismatch and
    /// `ShapeError::NotANumber` for the first input that fails to parse.
    pub fn compute_raw<S: AsRef<str>>(&self, inputs: &[S]) -> Result<f64, ShapeError> {
        if inputs.len() != self.arity() {
            return Err(ShapeError::InputCount {
                shape: self.shape,
                expected: self.arity(),
                provided: inputs.len(),
            });
        }

        let values = inputs
            .iter()
            .zip(self.input_labels)
            .map(|(raw, label)| {
                parse_number(raw.as_ref()).map_err(|err| ShapeError::NotANumber {
                    label: *label,
                    raw: err.raw,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.compute(&values)
    }
}

static CIRCLE: ShapeSpec = ShapeSpec {
    shape: Shape::Circle,
    name: "Circle",
    formula_text: "Area = π * r²",
    input_labels: &["Enter radius of circle"],
    reference_label: "YouTube Link: Area of Circle",
    reference_url: "https://www.youtube.com/results?search_query=area+of+circle",
    measure: Measure::Area,
    compute: |v| PI_APPROX * v[0] * v[0],
};

static RECTANGLE: ShapeSpec = ShapeSpec {
    shape: Shape::Rectangle,
    name: "Rectangle",
    formula_text: "Area = length * breadth",
    input_labels: &["Enter length of rectangle", "Enter breadth of rectangle"],
    reference_label: "YouTube Link: Area of Rectangle",
    reference_url: "https://www.youtube.com/results?search_query=area+of+rectangle",
    measure: Measure::Area,
    compute: |v| v[0] * v[1],
};

static SQUARE: ShapeSpec = ShapeSpec {
    shape: Shape::Square,
    name: "Square",
    formula_text: "Area = side²",
    input_labels: &["Enter side of square"],
    reference_label: "YouTube Link: Area of Square",
    reference_url: "https://www.youtube.com/results?search_query=area+of+square",
    measure: Measure::Area,
    compute: |v| v[0] * v[0],
};

static TRIANGLE: ShapeSpec = ShapeSpec {
    shape: Shape::Triangle,
    name: "Triangle",
    formula_text: "Area = 0.5 * base * height",
    input_labels: &["Enter base of triangle", "Enter height of triangle"],
    reference_label: "YouTube Link: Area of Triangle",
    reference_url: "https://www.youtube.com/results?search_query=area+of+triangle",
    measure: Measure::Area,
    compute: |v| 0.5 * v[0] * v[1],
};

static CUBE: ShapeSpec = ShapeSpec {
    shape: Shape::Cube,
    name: "Cube",
    formula_text: "Surface Area = 6 * side²",
    input_labels: &["Enter side of cube"],
    reference_label: "YouTube Link: Surface Area of Cube",
    reference_url: "https://www.youtube.com/results?search_query=surface+area+of+cube",
    measure: Measure::SurfaceArea,
    compute: |v| 6.0 * v[0] * v[0],
};

static CUBOID: ShapeSpec = ShapeSpec {
    shape: Shape::Cuboid,
    name: "Cuboid",
    formula_text: "Surface Area = 2 * (length * breadth + breadth * height + height * length)",
    input_labels: &[
        "Enter length of cuboid",
        "Enter breadth of cuboid",
        "Enter height of cuboid",
    ],
    reference_label: "YouTube Link: Surface Area of Cuboid",
    reference_url: "https://www.youtube.com/results?search_query=surface+area+of+cuboid",
    measure: Measure::SurfaceArea,
    compute: |v| 2.0 * (v[0] * v[1] + v[1] * v[2] + v[2] * v[0]),
};

impl Shape {
    /// Every shape, in menu order.
    pub const ALL: [Shape; 6] = [
        Shape::Circle,
        Shape::Rectangle,
        Shape::Square,
        Shape::Triangle,
        Shape::Cube,
        Shape::Cuboid,
    ];

    #[must_use]
    pub fn spec(self) -> &'static ShapeSpec {
        match self {
            Self::Circle => &CIRCLE,
            Self::Rectangle => &RECTANGLE,
            Self::Square => &SQUARE,
            Self::Triangle => &TRIANGLE,
            Self::Cube => &CUBE,
            Self::Cuboid => &CUBOID,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    #[must_use]
    pub fn measure(self) -> Measure {
        self.spec().measure
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShapeError::UnknownShape {
                name: s.to_owned(),
            })
    }
}

//
// ─── ADVISOR OPERATIONS ────────────────────────────────────────────────────────
//

/// Shapes offered by the advisor, in menu order.
#[must_use]
pub fn list_shapes() -> [Shape; 6] {
    Shape::ALL
}

/// Look up the formula sheet for a shape by name.
///
/// # Errors
///
/// Returns `ShapeError::UnknownShape` if the name is not one of the six shapes.
pub fn get_formula(name: &str) -> Result<&'static ShapeSpec, ShapeError> {
    name.parse::<Shape>().map(Shape::spec)
}

/// Compute the area (or surface area) for a named shape from raw inputs.
///
/// # Errors
///
/// Returns `ShapeError::UnknownShape` for an unknown name, and
/// `ShapeError::InputCount`/`ShapeError::NotANumber` for malformed inputs.
pub fn compute_area<S: AsRef<str>>(name: &str, inputs: &[S]) -> Result<f64, ShapeError> {
    get_formula(name)?.compute_raw(inputs)
}
