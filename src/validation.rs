// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Input predicates shared by the wizard pages and the backend endpoints.

use crate::constants::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, RESERVED_USERNAME};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Lowercase alphanumerics starting with a letter, internal hyphens allowed
pub static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").unwrap());

/// Same shape as [`USERNAME_REGEX`] but mixed case
pub static PWD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]([-a-zA-Z0-9]*[a-zA-Z0-9])?$").unwrap());

/// A single domain: dot-separated labels ending in an alphabetic TLD
pub static DNS_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9_-]{0,61}[a-z0-9]\.)*[a-z0-9-]{1,61}\.[a-z]{2,}$").unwrap()
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Valid username can not be longer than {} characters.", MAX_USERNAME_LENGTH)]
    TooLong,

    #[error("The {} username is reserved.", RESERVED_USERNAME)]
    Reserved,

    #[error("Valid username wasn't provided")]
    Invalid,
}

pub fn is_valid_username(input: &str) -> bool {
    USERNAME_REGEX.is_match(input)
}

pub fn is_valid_password(input: &str) -> bool {
    PWD_REGEX.is_match(input)
}

pub fn is_valid_dns_name(input: &str) -> bool {
    DNS_NAME_REGEX.is_match(input)
}

/// Password rules of the credentials page: long enough, at least one
/// uppercase letter, and only the characters [`PWD_REGEX`] allows
pub fn password_policy_met(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.to_lowercase() != password
        && is_valid_password(password)
}

/// Returns the input only when it is present and matches `regex`
pub fn validate_input<'a>(regex: &Regex, input: Option<&'a str>) -> Option<&'a str> {
    input.filter(|value| regex.is_match(value))
}

/// Username check used by the credentials page. An empty username is
/// accepted since the field is optional until submitted.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.len() >= MAX_USERNAME_LENGTH {
        return Err(ValidationError::TooLong);
    }
    if username == RESERVED_USERNAME {
        return Err(ValidationError::Reserved);
    }
    if username.is_empty() || is_valid_username(username) {
        Ok(())
    } else {
        Err(ValidationError::Invalid)
    }
}
