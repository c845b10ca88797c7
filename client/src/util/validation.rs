//! Synchronous form validation.
//!
//! Each form's raw input is checked field by field before anything touches
//! the backend. A valid input converts into the request type the submit
//! flow sends; an invalid one yields [`FieldErrors`] keyed by field name for
//! inline display. Lengths count characters, not bytes.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::posts::PostDraft;
use crate::net::types::{Credentials, FileUpload, NewAccount};
use crate::net::users::ProfileDraft;

pub const NAME_MIN: usize = 2;
pub const USERNAME_MIN: usize = 2;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const CAPTION_MIN: usize = 5;
pub const CAPTION_MAX: usize = 2200;
pub const LOCATION_MIN: usize = 2;
pub const LOCATION_MAX: usize = 100;
pub const BIO_MAX: usize = 2200;

pub const TOO_SHORT: &str = "Too short";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const IMAGE_REQUIRED: &str = "Please add a photo";

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Field name → first error message for that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record `message` unless the field already has an error.
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

fn too_short(min: usize) -> String {
    format!("Must contain at least {min} character(s)")
}

fn too_long(max: usize) -> String {
    format!("Must contain at most {max} character(s)")
}

fn check_len(errors: &mut FieldErrors, field: &'static str, value: &str, min: usize, max: Option<usize>) {
    let len = value.chars().count();
    match max {
        _ if len < min => errors.add(field, too_short(min)),
        Some(max) if len > max => errors.add(field, too_long(max)),
        _ => {}
    }
}

fn check_email(errors: &mut FieldErrors, value: &str) {
    let ok = EMAIL.as_ref().is_some_and(|re| re.is_match(value));
    if !ok {
        errors.add("email", INVALID_EMAIL);
    }
}

fn check_password(errors: &mut FieldErrors, value: &str) {
    if value.chars().count() < PASSWORD_MIN {
        errors.add("password", PASSWORD_TOO_SHORT);
    }
}

/// Split a comma-separated tag field, dropping blanks and surrounding spaces.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

// =============================================================
// Sign-up / sign-in
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpInput {
    pub fn validate(&self) -> Result<NewAccount, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.chars().count() < NAME_MIN {
            errors.add("name", TOO_SHORT);
        }
        check_len(&mut errors, "username", &self.username, USERNAME_MIN, Some(USERNAME_MAX));
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result(|| NewAccount {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl SignInInput {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result(|| Credentials { email: self.email.clone(), password: self.password.clone() })
    }
}

// =============================================================
// Posts
// =============================================================

/// Whether a post form creates a new post or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostAction {
    Create,
    Update,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostInput {
    pub caption: String,
    pub location: String,
    /// Comma-separated.
    pub tags: String,
    pub file: Option<FileUpload>,
}

impl PostInput {
    /// A new post needs an image; an edit may keep the existing one.
    pub fn validate(&self, action: PostAction) -> Result<PostDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_len(&mut errors, "caption", &self.caption, CAPTION_MIN, Some(CAPTION_MAX));
        if action == PostAction::Create && self.file.is_none() {
            errors.add("file", IMAGE_REQUIRED);
        }
        check_len(&mut errors, "location", &self.location, LOCATION_MIN, Some(LOCATION_MAX));
        errors.into_result(|| PostDraft {
            caption: self.caption.clone(),
            location: self.location.clone(),
            tags: parse_tags(&self.tags),
            file: self.file.clone(),
        })
    }
}

// =============================================================
// Profile
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileInput {
    pub name: String,
    pub username: String,
    /// Shown read-only; validated but never sent.
    pub email: String,
    pub bio: String,
    pub file: Option<FileUpload>,
}

impl ProfileInput {
    pub fn validate(&self) -> Result<ProfileDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.chars().count() < NAME_MIN {
            errors.add("name", TOO_SHORT);
        }
        check_len(&mut errors, "username", &self.username, USERNAME_MIN, Some(USERNAME_MAX));
        check_email(&mut errors, &self.email);
        check_len(&mut errors, "bio", &self.bio, 0, Some(BIO_MAX));
        errors.into_result(|| ProfileDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            bio: self.bio.clone(),
            file: self.file.clone(),
        })
    }
}
