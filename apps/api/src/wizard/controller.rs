#![allow(dead_code)]

use serde::Serialize;
use tracing::debug;

use crate::wizard::fields::{AnswerRecord, FieldId, ListField, TextField};
use crate::wizard::steps::{StepDefinition, RESUME_STEPS};
use crate::wizard::summary::ResumeSummary;
use crate::wizard::validation::{check_phone, missing_required, phone_len};
use crate::wizard::view::{CurrentView, FieldValue, StepView};
use crate::wizard::WizardError;

/// Everything the wizard remembers between input events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub answers: AnswerRecord,
    /// `0..N` are editing steps, `N` is the summary.
    pub current_step: usize,
    pub phone_error: Option<String>,
}

/// Outcome of a text write that went through a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldWrite {
    Applied,
    /// Value refused, prior value kept, message stored in `phone_error`.
    Rejected,
}

/// Owns one wizard run: the step table, the answers, and the step cursor.
///
/// Every operation completes synchronously. Answers survive step
/// transitions, so moving back and forth never loses edits.
#[derive(Debug, Clone)]
pub struct WizardController {
    steps: &'static [StepDefinition],
    state: WizardState,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self::with_steps(&RESUME_STEPS)
    }

    pub fn with_steps(steps: &'static [StepDefinition]) -> Self {
        Self {
            steps,
            state: WizardState::default(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.state.answers
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn phone_error(&self) -> Option<&str> {
        self.state.phone_error.as_deref()
    }

    /// Number of editing steps (N). Reaching it means the summary is shown.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_complete(&self) -> bool {
        self.state.current_step >= self.steps.len()
    }

    /// Replaces a single-value answer. Phone numbers go through `set_phone`.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) -> FieldWrite {
        if field == TextField::PhoneNumber {
            return self.set_phone(value);
        }
        self.state.answers.set_text(field, value.into());
        FieldWrite::Applied
    }

    /// Stores the phone number if it passes the length rule, otherwise keeps
    /// the previous value and records the error for the view.
    pub fn set_phone(&mut self, value: impl Into<String>) -> FieldWrite {
        let value = value.into();
        match check_phone(&value) {
            Ok(()) => {
                self.state
                    .answers
                    .set_text(TextField::PhoneNumber, value);
                self.state.phone_error = None;
                FieldWrite::Applied
            }
            Err(message) => {
                debug!(len = phone_len(&value), "phone number rejected");
                self.state.phone_error = Some(message.to_string());
                FieldWrite::Rejected
            }
        }
    }

    pub fn set_list_entry(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.state.answers.set_entry(field, index, value.into())
    }

    /// Appends an empty entry and returns the new list length. Unbounded.
    pub fn append_list_entry(&mut self, field: ListField) -> usize {
        self.state.answers.push_entry(field)
    }

    /// Moves one step forward. Saturates at the summary state.
    ///
    /// Required fields are not enforced here; `StepView::missing_required`
    /// carries them as a hint instead.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.state.current_step += 1;
        debug!(step = self.state.current_step, "wizard advanced");
        true
    }

    /// Moves one step back. Does nothing at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.state.current_step == 0 {
            return false;
        }
        self.state.current_step -= 1;
        debug!(step = self.state.current_step, "wizard retreated");
        true
    }

    /// Jumps straight to the summary from any step.
    pub fn finalize(&mut self) {
        self.state.current_step = self.steps.len();
        debug!(step = self.state.current_step, "wizard finalized");
    }

    /// Discards all answers and returns to the first step.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("wizard reset");
    }

    pub fn current_view(&self) -> CurrentView {
        let Some(step) = self.steps.get(self.state.current_step) else {
            return CurrentView::Summary(ResumeSummary::from_answers(&self.state.answers));
        };

        let answers = &self.state.answers;
        let value = match step.field {
            FieldId::Text(field) => FieldValue::Single(answers.text(field).to_string()),
            FieldId::List(field) => FieldValue::Multi(answers.list(field).to_vec()),
        };
        let phone_error = match step.field {
            FieldId::Text(TextField::PhoneNumber) => self.state.phone_error.clone(),
            _ => None,
        };
        let index = self.state.current_step;
        let total = self.steps.len();

        CurrentView::Step(StepView {
            index,
            total,
            label: step.label,
            field: step.field,
            input: step.input,
            placeholder: step.placeholder,
            required: step.required,
            value,
            add_label: step.add_label,
            phone_error,
            missing_required: missing_required(self.steps, answers),
            can_retreat: index > 0,
            advance_label: if index + 1 == total { "Submit" } else { "Next" },
        })
    }

    // Name-keyed entry points for renderers that only know wire names.

    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<FieldWrite, WizardError> {
        let field: TextField = name.parse()?;
        Ok(self.set_field(field, value))
    }

    pub fn set_list_entry_by_name(
        &mut self,
        name: &str,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        let field: ListField = name.parse()?;
        self.set_list_entry(field, index, value)
    }

    pub fn append_list_entry_by_name(&mut self, name: &str) -> Result<usize, WizardError> {
        let field: ListField = name.parse()?;
        Ok(self.append_list_entry(field))
    }
}
