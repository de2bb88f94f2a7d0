//! crates/taskhive_core/src/validation.rs
//!
//! Pure, synchronous validation of form payloads. Each validator either
//! produces the accepted, wire-ready value or a mapping from field path to
//! a human-readable message. All violations for a submission are collected,
//! not just the first.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    Credentials, LoginForm, RegistrationRequest, SignupForm, VerificationForm,
    VerificationRequest,
};
use crate::phone;

/// Minimum password length accepted by the product.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Exact length of the email verification code.
pub const OTP_LEN: usize = 6;

// Structural email check: one local part, one domain with at least one dot.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

//=========================================================================================
// ValidationErrors
//=========================================================================================

/// Field-scoped validation failures, keyed by field path (e.g. `email`,
/// `confirmPassword`, `phone.number`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: &str) {
        // First message per field wins, matching how the form displays them.
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// The message attached to a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over `(field path, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn into_result<T>(self, accepted: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(accepted)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

//=========================================================================================
// Validators
//=========================================================================================

fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Validates the login form: email syntax and password length.
pub fn validate_login(form: &LoginForm) -> Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if !is_valid_email(&form.email) {
        errors.add("email", "Enter a valid email address");
    }
    if form.password.len() < MIN_PASSWORD_LEN {
        errors.add("password", "Enter a valid password");
    }
    errors.into_result(Credentials {
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

/// Validates the signup form and performs the dispatch transform: the
/// numeric calling code is derived from the selected country and the phone
/// number is reduced to its national significant digits.
///
/// A password/confirmation mismatch is attached to `confirmPassword`, not
/// `password`.
pub fn validate_signup(form: &SignupForm) -> Result<RegistrationRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if !is_valid_email(&form.email) {
        errors.add("email", "Enter a valid email address");
    }
    if form.full_name.trim().is_empty() {
        errors.add("fullName", "Enter your full name");
    }
    if form.username.trim().is_empty() {
        errors.add("username", "Enter a username");
    }

    let country_code = match phone::calling_code(&form.phone.country) {
        Some(code) => Some(code),
        None => {
            errors.add("phone.country", "Enter a country code");
            None
        }
    };
    let phone_number = if phone::is_valid_national(&form.phone.country, &form.phone.number) {
        phone::national_digits(&form.phone.number)
    } else {
        errors.add("phone.number", "Enter a phone number");
        None
    };

    if form.password.len() < MIN_PASSWORD_LEN {
        errors.add("password", "Enter a valid password");
    }
    if form.confirm_password.len() < MIN_PASSWORD_LEN {
        errors.add("confirmPassword", "Enter a valid confirm password");
    } else if form.confirm_password != form.password {
        errors.add("confirmPassword", "Passwords do not match");
    }

    let (Some(country_code), Some(phone_number)) = (country_code, phone_number) else {
        return Err(errors);
    };
    errors.into_result(RegistrationRequest {
        email: form.email.clone(),
        username: form.username.clone(),
        password: form.password.clone(),
        full_name: form.full_name.clone(),
        country_code: country_code.to_string(),
        phone_number,
        company_name: form.company_name.clone(),
    })
}

/// Validates the verification form: the code must be exactly six digits.
pub fn validate_verification(
    form: &VerificationForm,
) -> Result<VerificationRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if form.code.len() != OTP_LEN || !form.code.chars().all(|c| c.is_ascii_digit()) {
        errors.add("emailVerificationOTP", "Enter a valid 6-digit code");
    }
    errors.into_result(VerificationRequest {
        id: form.id.clone(),
        email_verification_otp: form.code.clone(),
    })
}
