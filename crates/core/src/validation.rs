//! Payload validation for create/update requests.
//!
//! Each field has an ordered list of validator checks that append
//! field-scoped violations; `validate_create` / `validate_update` run every
//! check and aggregate all violations before reporting, so a response lists
//! every bad field at once instead of failing on the first.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::plant::{CreatePlantRequest, UpdatePlantRequest};

/// Names must be 2-100 characters.
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;

/// Urls must be at most 200 characters and start with this prefix.
pub const URL_MAX_LEN: usize = 200;
pub const REQUIRED_URL_PREFIX: &str = "https://plants.usda.gov/plant-profile";

/// Valid ages on update. Creates only require a non-negative age.
pub const AGE_MIN: i32 = 1;
pub const AGE_MAX: i32 = 500;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

static NAME_WITH_SPACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid regex"));

/// Denylist of SQL/script keywords and metacharacters that must not appear
/// anywhere in a url.
static INJECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(\b(SELECT|INSERT|UPDATE|DELETE|DROP|CREATE|ALTER|EXEC|EXECUTE|UNION|SCRIPT|JAVASCRIPT|VBSCRIPT)\b)|(--|/\*|\*/|;|'|"|<|>|&|%|@|\+|\||\\|\^|\$|\#|!|\?|\*|\(|\)|\[|\]|\{|\})"#,
    )
    .expect("valid regex")
});

// ---------------------------------------------------------------------------
// Violation collection
// ---------------------------------------------------------------------------

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// API-facing field name (camelCase, matching the request payload).
    pub field: &'static str,
    pub message: String,
}

/// Accumulated validation failures across all fields of a payload.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self))
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// Length and character-class checks for a name field. When `required` is
/// false an empty value passes untouched (it means "leave unchanged").
fn check_name(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    pattern: &Regex,
    pattern_message: &str,
    required: bool,
) {
    if value.trim().is_empty() {
        if required {
            errors.push(field, "is required");
        }
        return;
    }

    let len = value.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        errors.push(
            field,
            format!("must have a length between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"),
        );
    }

    if !pattern.is_match(value) {
        errors.push(field, pattern_message);
    }
}

/// Prefix, length, and denylist checks for the url field. When `required`
/// is false an empty value passes untouched.
fn check_url(errors: &mut ValidationErrors, value: &str, required: bool) {
    if value.trim().is_empty() {
        if required {
            errors.push("url", "is required");
        }
        return;
    }

    if value.chars().count() > URL_MAX_LEN {
        errors.push(
            "url",
            format!("must be at most {URL_MAX_LEN} characters"),
        );
    }

    if !value.to_ascii_lowercase().starts_with(REQUIRED_URL_PREFIX) {
        errors.push(
            "url",
            format!("does not start with the required prefix: {REQUIRED_URL_PREFIX}"),
        );
    }

    if INJECTION_RE.is_match(value) {
        errors.push("url", "contains invalid characters");
    }
}

// ---------------------------------------------------------------------------
// Payload validation
// ---------------------------------------------------------------------------

/// Validate a create payload. All fields are required; names are
/// letters-only, the age must be non-negative, and the url must pass the
/// prefix and denylist checks.
pub fn validate_create(request: &CreatePlantRequest) -> Result<(), CoreError> {
    let mut errors = ValidationErrors::default();

    check_name(
        &mut errors,
        "commonName",
        &request.common_name,
        &NAME_RE,
        "can only contain letters",
        true,
    );
    check_name(
        &mut errors,
        "scientificName",
        &request.scientific_name,
        &NAME_RE,
        "can only contain letters",
        true,
    );

    if request.age < 0 {
        errors.push("age", "must not be negative");
    }

    check_url(&mut errors, &request.url, true);

    errors.into_result()
}

/// Validate a partial update payload. Absent or empty fields pass (they
/// mean "leave unchanged"); names may contain spaces, and a supplied age
/// must be within 1-500. An undefined `duration` string is accepted here
/// and ignored by the merge.
pub fn validate_update(request: &UpdatePlantRequest) -> Result<(), CoreError> {
    let mut errors = ValidationErrors::default();

    check_name(
        &mut errors,
        "commonName",
        request.common_name.as_deref().unwrap_or_default(),
        &NAME_WITH_SPACES_RE,
        "can only contain letters and spaces",
        false,
    );
    check_name(
        &mut errors,
        "scientificName",
        request.scientific_name.as_deref().unwrap_or_default(),
        &NAME_WITH_SPACES_RE,
        "can only contain letters and spaces",
        false,
    );

    if let Some(age) = request.age {
        if !(AGE_MIN..=AGE_MAX).contains(&age) {
            errors.push("age", format!("must be between {AGE_MIN} and {AGE_MAX}"));
        }
    }

    check_url(
        &mut errors,
        request.url.as_deref().unwrap_or_default(),
        false,
    );

    errors.into_result()
}
