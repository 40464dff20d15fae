use serde::Serialize;

use crate::wizard::fields::{FieldId, ListField, TextField};

/// Which input primitive the renderer should draw for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    TextArea,
    Text,
    Tel,
    Email,
}

/// One screen of the wizard. Fixed at construction; the table order is both
/// display order and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub label: &'static str,
    pub field: FieldId,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
    /// Label of the "add another entry" control. Only list steps have one.
    pub add_label: Option<&'static str>,
}

impl StepDefinition {
    const fn text(
        label: &'static str,
        field: TextField,
        input: InputKind,
        placeholder: &'static str,
    ) -> Self {
        Self {
            label,
            field: FieldId::Text(field),
            input,
            placeholder,
            required: true,
            add_label: None,
        }
    }

    const fn list(
        label: &'static str,
        field: ListField,
        placeholder: &'static str,
        add_label: &'static str,
    ) -> Self {
        Self {
            label,
            field: FieldId::List(field),
            input: InputKind::Text,
            placeholder,
            required: false,
            add_label: Some(add_label),
        }
    }
}

pub const RESUME_STEPS: [StepDefinition; 7] = [
    StepDefinition::text(
        "Professional Summary",
        TextField::Summary,
        InputKind::TextArea,
        "Write your professional summary here",
    ),
    StepDefinition::list(
        "Education Qualifications",
        ListField::Education,
        "Enter your qualification",
        "Add More Education",
    ),
    StepDefinition::list(
        "Academic and Non-Academic Skills",
        ListField::Skills,
        "Enter a skill",
        "Add More Skills",
    ),
    StepDefinition::text(
        "Career Objective",
        TextField::CareerObjective,
        InputKind::TextArea,
        "State your career objective",
    ),
    StepDefinition::list(
        "Experience and Internships",
        ListField::Experience,
        "Enter your experience",
        "Add More Experience",
    ),
    StepDefinition::text(
        "Phone Number",
        TextField::PhoneNumber,
        InputKind::Tel,
        "Enter your phone number",
    ),
    StepDefinition::text(
        "Email Address",
        TextField::Email,
        InputKind::Email,
        "Enter your email",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_appears_exactly_once() {
        for field in TextField::ALL {
            let count = RESUME_STEPS
                .iter()
                .filter(|s| s.field == FieldId::Text(field))
                .count();
            assert_eq!(count, 1, "{}", field.name());
        }
        for field in ListField::ALL {
            let count = RESUME_STEPS
                .iter()
                .filter(|s| s.field == FieldId::List(field))
                .count();
            assert_eq!(count, 1, "{}", field.name());
        }
    }

    #[test]
    fn test_only_list_steps_have_add_controls() {
        for step in &RESUME_STEPS {
            match step.field {
                FieldId::List(_) => {
                    assert!(step.add_label.is_some());
                    assert!(!step.required);
                }
                FieldId::Text(_) => {
                    assert!(step.add_label.is_none());
                    assert!(step.required);
                }
            }
        }
    }

    #[test]
    fn test_phone_step_uses_tel_input() {
        let phone = RESUME_STEPS
            .iter()
            .find(|s| s.field == FieldId::Text(TextField::PhoneNumber))
            .unwrap();
        assert_eq!(phone.input, InputKind::Tel);
        assert_eq!(phone.label, "Phone Number");
    }
}
