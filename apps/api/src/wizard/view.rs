#![allow(dead_code)]

use serde::Serialize;

use crate::wizard::fields::{FieldId, TextField};
use crate::wizard::steps::InputKind;
use crate::wizard::summary::ResumeSummary;

/// Live value of the field edited on the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multi(Vec<String>),
}

/// What the renderer draws for an editing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub index: usize,
    pub total: usize,
    pub label: &'static str,
    pub field: FieldId,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
    pub value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_error: Option<String>,
    /// Required fields still blank anywhere in the wizard. Display hint only.
    pub missing_required: Vec<TextField>,
    pub can_retreat: bool,
    pub advance_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurrentView {
    Step(StepView),
    Summary(ResumeSummary),
}

impl CurrentView {
    pub fn is_summary(&self) -> bool {
        matches!(self, CurrentView::Summary(_))
    }

    pub fn as_step(&self) -> Option<&StepView> {
        match self {
            CurrentView::Step(step) => Some(step),
            CurrentView::Summary(_) => None,
        }
    }
}
