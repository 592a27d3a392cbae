//! Declarative field rules for the auth forms.
//!
//! DESIGN
//! ======
//! Each form is described by a `FieldSchema`: an ordered list of fields, each
//! with an ordered list of rules. Validation is a pure function of the input,
//! so it can run on every submit attempt without touching controller state.
//! The first failing rule for a field wins; a field never carries more than
//! one message.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_MISMATCH: &str = "Passwords don't match";

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"));

/// Lite email grammar: one `@`, no whitespace, a dot in the domain part.
pub fn valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|re| re.is_match(email))
}

/// Form fields known to the auth screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Wire/DOM name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// A single validation rule, carrying the message shown when it fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty. Whitespace counts as content.
    Required(&'static str),
    /// Value must contain at least one non-whitespace character.
    NonBlank(&'static str),
    /// Value (trimmed) must match the email grammar.
    Email(&'static str),
    /// Value must equal the value of another field, byte for byte.
    Matches(Field, &'static str),
}

impl Rule {
    fn check(self, value: &str, input: &impl FieldSource) -> Option<&'static str> {
        match self {
            Self::Required(message) => value.is_empty().then_some(message),
            Self::NonBlank(message) => value.trim().is_empty().then_some(message),
            Self::Email(message) => (!valid_email(value.trim())).then_some(message),
            Self::Matches(other, message) => (value != input.field_value(other)).then_some(message),
        }
    }
}

/// Read access to raw form values by field.
pub trait FieldSource {
    fn field_value(&self, field: Field) -> &str;
}

/// Field-scoped validation errors. Empty means the input is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn reject(&mut self, field: Field, message: &str) {
        self.errors.entry(field).or_insert_with(|| message.to_owned());
    }
}

/// Ordered rules per field for one form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    rules: &'static [(Field, &'static [Rule])],
}

impl FieldSchema {
    pub const fn new(rules: &'static [(Field, &'static [Rule])]) -> Self {
        Self { rules }
    }

    /// Fields covered by this schema, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.iter().map(|(field, _)| *field)
    }

    /// Evaluate every rule against `input`.
    pub fn validate(&self, input: &impl FieldSource) -> ValidationResult {
        let mut result = ValidationResult::default();
        for (field, rules) in self.rules {
            let value = input.field_value(*field);
            if let Some(message) = rules.iter().find_map(|rule| rule.check(value, input)) {
                result.reject(*field, message);
            }
        }
        result
    }
}

const SIGN_UP_RULES: &[(Field, &[Rule])] = &[
    (Field::Name, &[Rule::NonBlank(NAME_REQUIRED)]),
    (Field::Email, &[Rule::NonBlank(EMAIL_REQUIRED), Rule::Email(EMAIL_INVALID)]),
    (Field::Password, &[Rule::Required(PASSWORD_REQUIRED)]),
    (
        Field::ConfirmPassword,
        &[
            Rule::Required(CONFIRM_PASSWORD_REQUIRED),
            Rule::Matches(Field::Password, PASSWORDS_MISMATCH),
        ],
    ),
];

const SIGN_IN_RULES: &[(Field, &[Rule])] = &[
    (Field::Email, &[Rule::NonBlank(EMAIL_REQUIRED), Rule::Email(EMAIL_INVALID)]),
    (Field::Password, &[Rule::Required(PASSWORD_REQUIRED)]),
];

pub const SIGN_UP_SCHEMA: FieldSchema = FieldSchema::new(SIGN_UP_RULES);
pub const SIGN_IN_SCHEMA: FieldSchema = FieldSchema::new(SIGN_IN_RULES);
