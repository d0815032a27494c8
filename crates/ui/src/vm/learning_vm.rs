use services::{AdvisorError, INVALID_DIMENSIONS_MESSAGE, ShapeAdvisorService};
use tutor_core::model::{Shape, ShapeSpec};

/// Names for the shape picker, in menu order.
#[must_use]
pub fn shape_options() -> Vec<&'static str> {
    Shape::ALL.iter().map(|shape| shape.name()).collect()
}

/// The formula sheet shown after "Get Formula".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaSheetVm {
    pub shape: Shape,
    pub formula_text: &'static str,
    pub input_labels: Vec<&'static str>,
    pub link_label: &'static str,
    pub link_url: &'static str,
}

impl From<&ShapeSpec> for FormulaSheetVm {
    fn from(spec: &ShapeSpec) -> Self {
        Self {
            shape: spec.shape,
            formula_text: spec.formula_text,
            input_labels: spec.input_labels.to_vec(),
            link_label: spec.reference_label,
            link_url: spec.reference_url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLineVm {
    pub text: String,
    pub is_warning: bool,
}

/// State of the Learning tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningVm {
    selected: Shape,
    sheet: Option<FormulaSheetVm>,
    inputs: Vec<String>,
    result: Option<ResultLineVm>,
}

impl Default for LearningVm {
    fn default() -> Self {
        Self {
            selected: Shape::Circle,
            sheet: None,
            inputs: Vec::new(),
            result: None,
        }
    }
}

impl LearningVm {
    #[must_use]
    pub fn selected(&self) -> Shape {
        self.selected
    }

    #[must_use]
    pub fn sheet(&self) -> Option<&FormulaSheetVm> {
        self.sheet.as_ref()
    }

    #[must_use]
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultLineVm> {
        self.result.as_ref()
    }

    /// # Errors
    ///
    /// Returns `AdvisorError::UnknownShape` and keeps the previous selection
    /// if `name` is not a known shape.
    pub fn select(&mut self, name: &str) -> Result<(), AdvisorError> {
        self.selected = name.parse()?;
        Ok(())
    }

    /// Show the formula for the selected shape and reset the inputs.
    pub fn show_formula(&mut self, advisor: &ShapeAdvisorService) {
        let Ok(spec) = advisor.formula(self.selected.name()) else {
            return;
        };
        self.inputs = vec![String::new(); spec.arity()];
        self.sheet = Some(FormulaSheetVm::from(spec));
        self.result = None;
    }

    pub fn set_input(&mut self, idx: usize, value: String) {
        if let Some(slot) = self.inputs.get_mut(idx) {
            *slot = value;
        }
    }

    /// Compute the area for the shown sheet. Does nothing before "Get Formula".
    pub fn calculate(&mut self, advisor: &ShapeAdvisorService) {
        let Some(sheet) = &self.sheet else {
            return;
        };
        let result = match advisor.report(sheet.shape.name(), &self.inputs) {
            Ok(text) => ResultLineVm {
                is_warning: text == INVALID_DIMENSIONS_MESSAGE,
                text,
            },
            Err(err) => ResultLineVm {
                text: err.to_string(),
                is_warning: true,
            },
        };
        self.result = Some(result);
    }
}
