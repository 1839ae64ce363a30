use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const NAME_MIN: usize = 2;
const SUBJECT_MIN: usize = 3;
const MESSAGE_MIN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control id / name attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn check(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Field::Name => input_len(value) >= NAME_MIN,
            Field::Email => EMAIL_RE.is_match(value),
            Field::Subject => input_len(value) >= SUBJECT_MIN,
            Field::Message => input_len(value) >= MESSAGE_MIN,
        }
    }
}

/// Length as the browser reports it for an input value: UTF-16 code units.
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values of the four contact form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> ValidationResult {
        validate(&self.name, &self.email, &self.subject, &self.message)
    }
}

/// Per-field verdicts. Overall validity is derived, so it can never disagree
/// with the individual flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    flags: [bool; 4],
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.flags.iter().all(|f| *f)
    }

    pub fn field(&self, field: Field) -> bool {
        self.flags[field.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        Field::ALL.into_iter().map(|f| (f, self.field(f)))
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        self.fields()
            .filter_map(|(f, ok)| if ok { None } else { Some(f) })
            .collect()
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                fields: self.invalid_fields(),
            })
        }
    }
}

/// One or more fields failed their rule. Per-field detail lives in the field
/// indicators, not the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in all required fields correctly.")]
pub struct ValidationFailure {
    pub fields: Vec<Field>,
}

pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> ValidationResult {
    ValidationResult {
        flags: [
            Field::Name.check(name),
            Field::Email.check(email),
            Field::Subject.check(subject),
            Field::Message.check(message),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm::new("Al", "a@b.co", "Hi there", "This is long enough.")
    }

    #[test]
    fn test_name_length_boundary() {
        let check = |name: &str| validate(name, "", "", "").field(Field::Name);
        assert!(!check(""));
        assert!(!check("A"));
        assert!(!check("  A  "), "whitespace should be trimmed before counting");
        assert!(check("Al"));
        assert!(check(" Al "));
        assert!(check("Arya"));
    }

    #[test]
    fn test_email_pattern() {
        let check = |email: &str| validate("", email, "", "").field(Field::Email);
        assert!(check("a@b.c"));
        assert!(check("me@example.com"));
        assert!(check("  me@example.com  "));
        assert!(check("first.last@sub.example.org"));

        assert!(!check(""));
        assert!(!check("a@b"));
        assert!(!check("a b@c.d"));
        assert!(!check("ab.c"));
        assert!(!check("a@@b.c"));
        assert!(!check("@b.c"));
        assert!(!check("a@b."));
        assert!(!check("a@.c"));
    }

    #[test]
    fn test_subject_and_message_lengths() {
        let result = validate("", "", "Hi", "123456789");
        assert!(!result.field(Field::Subject));
        assert!(!result.field(Field::Message));

        let result = validate("", "", "Hey", "1234567890");
        assert!(result.field(Field::Subject));
        assert!(result.field(Field::Message));

        // trimmed before measuring
        let result = validate("", "", "  Hi  ", "   123456789   ");
        assert!(!result.field(Field::Subject));
        assert!(!result.field(Field::Message));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // BMP characters count once regardless of byte length
        assert!(validate("Zoë", "", "", "").field(Field::Name));
        assert!(validate("李雷", "", "", "").field(Field::Name));
        assert!(!validate("é", "", "", "").field(Field::Name));
        assert!(!validate("", "", "李雷", "").field(Field::Subject));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        let result = validate("😀", "a@b.c", "😀😀", "😀😀😀😀😀");
        assert!(result.field(Field::Name), "one emoji is two units");
        assert!(result.field(Field::Subject), "two emoji are four units");
        assert!(result.field(Field::Message), "five emoji are ten units");
        assert!(result.is_valid());

        assert!(!validate("", "", "😀", "").field(Field::Subject));
        assert!(!validate("", "", "", "😀😀😀😀a").field(Field::Message));
        assert!(validate("", "", "😀a", "😀😀😀😀ab").field(Field::Subject));
        assert!(validate("", "", "", "😀😀😀😀ab").field(Field::Message));
    }

    #[test]
    fn test_overall_is_and_of_fields() {
        let result = valid_form().validate();
        assert!(result.is_valid());
        assert!(result.invalid_fields().is_empty());

        for field in Field::ALL {
            let mut form = valid_form();
            form.set(field, "");
            let result = form.validate();
            assert!(!result.is_valid(), "{field} empty should fail overall");
            assert_eq!(result.invalid_fields(), vec![field]);
            assert_eq!(
                result.is_valid(),
                result.fields().all(|(_, ok)| ok),
                "overall must equal AND of flags"
            );
        }
    }

    #[test]
    fn test_all_empty() {
        let result = ContactForm::default().validate();
        assert!(!result.is_valid());
        assert_eq!(result.invalid_fields(), Field::ALL.to_vec());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let form = ContactForm::new("A", "a@b", "Hello", "short");
        assert_eq!(form.validate(), form.validate());
        let form = valid_form();
        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn test_into_result() {
        assert!(valid_form().validate().into_result().is_ok());

        let err = ContactForm::new("Arya", "nope", "Hello", "long enough message")
            .validate()
            .into_result()
            .unwrap_err();
        assert_eq!(err.fields, vec![Field::Email]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields correctly."
        );
    }

    #[test]
    fn test_form_accessors() {
        let mut form = ContactForm::default();
        form.set(Field::Subject, "  Hello ");
        assert_eq!(form.get(Field::Subject), "  Hello ");
        assert!(form.validate().field(Field::Subject));
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
