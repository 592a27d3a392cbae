//! The two auth forms: raw inputs, schemas, payload mapping, dispatch.
//!
//! Sign-up and sign-in share one controller; everything that differs between
//! them lives behind `AuthForm`.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use super::backend::{AuthBackend, PendingOutcome};
use super::schema::{Field, FieldSchema, FieldSource, SIGN_IN_SCHEMA, SIGN_UP_SCHEMA, ValidationResult};
use crate::net::types::{SignInPayload, SignUpPayload};

/// A form kind the submission controller can drive.
pub trait AuthForm: 'static {
    /// Raw values as typed by the user.
    type Input: FieldSource + Clone;
    /// Exactly what the backend receives.
    type Payload: Clone + std::fmt::Debug;

    /// Short name used in logs.
    const NAME: &'static str;
    const SCHEMA: FieldSchema;

    fn validate(input: &Self::Input) -> ValidationResult {
        Self::SCHEMA.validate(input)
    }

    fn payload(input: &Self::Input) -> Self::Payload;

    fn dispatch<B: AuthBackend + ?Sized>(backend: &B, payload: Self::Payload) -> PendingOutcome;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldSource for SignUpInput {
    fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl FieldSource for SignInInput {
    fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name | Field::ConfirmPassword => "",
        }
    }
}

/// Account creation.
#[derive(Clone, Copy, Debug)]
pub struct SignUpForm;

impl AuthForm for SignUpForm {
    type Input = SignUpInput;
    type Payload = SignUpPayload;

    const NAME: &'static str = "sign-up";
    const SCHEMA: FieldSchema = SIGN_UP_SCHEMA;

    fn payload(input: &SignUpInput) -> SignUpPayload {
        SignUpPayload {
            name: input.name.trim().to_owned(),
            email: input.email.trim().to_owned(),
            password: input.password.clone(),
        }
    }

    fn dispatch<B: AuthBackend + ?Sized>(backend: &B, payload: SignUpPayload) -> PendingOutcome {
        backend.sign_up(payload)
    }
}

/// Login with email and password.
#[derive(Clone, Copy, Debug)]
pub struct SignInForm;

impl AuthForm for SignInForm {
    type Input = SignInInput;
    type Payload = SignInPayload;

    const NAME: &'static str = "sign-in";
    const SCHEMA: FieldSchema = SIGN_IN_SCHEMA;

    fn payload(input: &SignInInput) -> SignInPayload {
        SignInPayload {
            email: input.email.trim().to_owned(),
            password: input.password.clone(),
        }
    }

    fn dispatch<B: AuthBackend + ?Sized>(backend: &B, payload: SignInPayload) -> PendingOutcome {
        backend.sign_in(payload)
    }
}
