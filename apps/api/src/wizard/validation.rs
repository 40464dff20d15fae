use crate::wizard::fields::{AnswerRecord, FieldId, TextField};
use crate::wizard::steps::StepDefinition;

pub const PHONE_MAX_LEN: usize = 10;

pub const PHONE_TOO_LONG: &str = "Phone number must not exceed 10 digits.";

/// Checks a candidate phone number before it is stored.
///
/// PASS: at most `PHONE_MAX_LEN` UTF-16 code units, including the empty string.
/// FAIL: anything longer, with `PHONE_TOO_LONG` as the message.
///
/// Length is measured the way browser input values report it, so a
/// character outside the BMP counts as two. Non-digit characters are accepted.
pub fn check_phone(value: &str) -> Result<(), &'static str> {
    if phone_len(value) <= PHONE_MAX_LEN {
        Ok(())
    } else {
        Err(PHONE_TOO_LONG)
    }
}

pub fn phone_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Required text fields that are still blank, in step order.
///
/// Advisory: the controller reports these to the renderer but never refuses
/// a transition because of them.
pub fn missing_required(steps: &[StepDefinition], answers: &AnswerRecord) -> Vec<TextField> {
    steps
        .iter()
        .filter(|step| step.required)
        .filter_map(|step| match step.field {
            FieldId::Text(field) if answers.text(field).trim().is_empty() => Some(field),
            _ => None,
        })
        .collect()
}
