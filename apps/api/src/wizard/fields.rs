use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::wizard::WizardError;

/// Answers held as a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Summary,
    CareerObjective,
    PhoneNumber,
    Email,
}

/// Answers held as an ordered, growable list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    Education,
    Skills,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldId {
    Text(TextField),
    List(ListField),
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        TextField::Summary,
        TextField::CareerObjective,
        TextField::PhoneNumber,
        TextField::Email,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextField::Summary => "summary",
            TextField::CareerObjective => "careerObjective",
            TextField::PhoneNumber => "phoneNumber",
            TextField::Email => "email",
        }
    }
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::Education, ListField::Skills, ListField::Experience];

    pub fn name(self) -> &'static str {
        match self {
            ListField::Education => "education",
            ListField::Skills => "skills",
            ListField::Experience => "experience",
        }
    }
}

impl FieldId {
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Text(f) => f.name(),
            FieldId::List(f) => f.name(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(f) = TextField::ALL.iter().find(|f| f.name() == s) {
            return Ok(FieldId::Text(*f));
        }
        if let Some(f) = ListField::ALL.iter().find(|f| f.name() == s) {
            return Ok(FieldId::List(*f));
        }
        Err(WizardError::UnknownField(s.to_string()))
    }
}

impl FromStr for TextField {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<FieldId>()? {
            FieldId::Text(f) => Ok(f),
            FieldId::List(f) => Err(WizardError::InvalidFieldAccess {
                field: f.name().to_string(),
                expected: "single",
            }),
        }
    }
}

impl FromStr for ListField {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<FieldId>()? {
            FieldId::List(f) => Ok(f),
            FieldId::Text(f) => Err(WizardError::InvalidFieldAccess {
                field: f.name().to_string(),
                expected: "multi-entry",
            }),
        }
    }
}

/// Every answer collected by the resume wizard.
///
/// List fields always hold at least one entry. Entries can be rewritten in
/// place or appended, never removed, so a list only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    summary: String,
    education: Vec<String>,
    skills: Vec<String>,
    career_objective: String,
    experience: Vec<String>,
    phone_number: String,
    email: String,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self {
            summary: String::new(),
            education: vec![String::new()],
            skills: vec![String::new()],
            career_objective: String::new(),
            experience: vec![String::new()],
            phone_number: String::new(),
            email: String::new(),
        }
    }
}

impl AnswerRecord {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Summary => &self.summary,
            TextField::CareerObjective => &self.career_objective,
            TextField::PhoneNumber => &self.phone_number,
            TextField::Email => &self.email,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Education => &self.education,
            ListField::Skills => &self.skills,
            ListField::Experience => &self.experience,
        }
    }

    pub(crate) fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Summary => &mut self.summary,
            TextField::CareerObjective => &mut self.career_objective,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::Email => &mut self.email,
        };
        *slot = value;
    }

    /// Replaces one entry in place. The list length never changes.
    pub(crate) fn set_entry(
        &mut self,
        field: ListField,
        index: usize,
        value: String,
    ) -> Result<(), WizardError> {
        let list = self.list_mut(field);
        let len = list.len();
        let slot = list.get_mut(index).ok_or(WizardError::IndexOutOfRange {
            field: field.name(),
            index,
            len,
        })?;
        *slot = value;
        Ok(())
    }

    /// Appends one empty entry and returns the new length.
    pub(crate) fn push_entry(&mut self, field: ListField) -> usize {
        let list = self.list_mut(field);
        list.push(String::new());
        list.len()
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Education => &mut self.education,
            ListField::Skills => &mut self.skills,
            ListField::Experience => &mut self.experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_has_one_empty_entry_per_list() {
        let record = AnswerRecord::default();
        for field in ListField::ALL {
            assert_eq!(record.list(field), &[String::new()]);
        }
        for field in TextField::ALL {
            assert_eq!(record.text(field), "");
        }
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(
            "careerObjective".parse::<FieldId>().unwrap(),
            FieldId::Text(TextField::CareerObjective)
        );
        assert_eq!(
            "skills".parse::<FieldId>().unwrap(),
            FieldId::List(ListField::Skills)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!(matches!(
            "hobbies".parse::<FieldId>(),
            Err(WizardError::UnknownField(name)) if name == "hobbies"
        ));
    }

    #[test]
    fn test_parse_wrong_kind() {
        assert!(matches!(
            "education".parse::<TextField>(),
            Err(WizardError::InvalidFieldAccess { .. })
        ));
        assert!(matches!(
            "email".parse::<ListField>(),
            Err(WizardError::InvalidFieldAccess { .. })
        ));
    }

    #[test]
    fn test_set_entry_out_of_range_leaves_list_untouched() {
        let mut record = AnswerRecord::default();
        let err = record
            .set_entry(ListField::Education, 1, "MSc".to_string())
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::IndexOutOfRange {
                field: "education",
                index: 1,
                len: 1
            }
        );
        assert_eq!(record.list(ListField::Education), &[String::new()]);
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let json = serde_json::to_value(AnswerRecord::default()).unwrap();
        assert_eq!(json["careerObjective"], "");
        assert_eq!(json["phoneNumber"], "");
        assert_eq!(json["education"], serde_json::json!([""]));
    }

    #[test]
    fn test_field_id_serializes_as_plain_name() {
        let json = serde_json::to_value(FieldId::List(ListField::Experience)).unwrap();
        assert_eq!(json, "experience");
    }
}
