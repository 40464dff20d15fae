use std::fmt::Write as _;

use serde::Serialize;

use crate::wizard::fields::{AnswerRecord, ListField, TextField};

pub const SUMMARY_TITLE: &str = "Your Resume";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph { text: String },
    Items { items: Vec<String> },
    Contact { phone: String, email: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySection {
    pub heading: &'static str,
    pub body: SectionBody,
}

/// The assembled resume shown once every step has been passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeSummary {
    pub title: &'static str,
    pub sections: Vec<SummarySection>,
    pub answers: AnswerRecord,
}

impl ResumeSummary {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        let paragraph = |heading: &'static str, field: TextField| SummarySection {
            heading,
            body: SectionBody::Paragraph {
                text: answers.text(field).to_string(),
            },
        };
        let items = |heading: &'static str, field: ListField| SummarySection {
            heading,
            body: SectionBody::Items {
                items: answers.list(field).to_vec(),
            },
        };

        let sections = vec![
            paragraph("Professional Summary", TextField::Summary),
            items("Education Qualifications", ListField::Education),
            items("Academic and Non-Academic Skills", ListField::Skills),
            paragraph("Career Objective", TextField::CareerObjective),
            items("Experience and Internships", ListField::Experience),
            SummarySection {
                heading: "Contact Information",
                body: SectionBody::Contact {
                    phone: answers.text(TextField::PhoneNumber).to_string(),
                    email: answers.text(TextField::Email).to_string(),
                },
            },
        ];

        Self {
            title: SUMMARY_TITLE,
            sections,
            answers: answers.clone(),
        }
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", section.heading);
            match &section.body {
                SectionBody::Paragraph { text } => {
                    let _ = writeln!(out, "{text}");
                }
                SectionBody::Items { items } => {
                    for item in items {
                        let _ = writeln!(out, "- {item}");
                    }
                }
                SectionBody::Contact { phone, email } => {
                    let _ = writeln!(out, "Phone: {phone}");
                    let _ = writeln!(out, "Email: {email}");
                }
            }
        }
        out
    }
}
