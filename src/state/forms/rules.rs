//! Declarative validation rules and the single-field validator

use super::field::FieldValue;
use regex::Regex;
use std::fmt;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Custom validator: returns a message when the value is rejected
pub type CustomValidator = Arc<dyn Fn(&FieldValue) -> Option<String> + Send + Sync>;

/// A field-level validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("{label} is required")]
    Required { label: String },

    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },

    #[error("{label} must be at most {max} characters")]
    TooLong { label: String, max: usize },

    #[error("{label} must be a number")]
    NotANumber { label: String },

    #[error("{label} must be at least {min}")]
    BelowMin { label: String, min: f64 },

    #[error("{label} must be at most {max}")]
    AboveMax { label: String, max: f64 },

    #[error("{label} must be a valid email address")]
    InvalidEmail { label: String },

    #[error("{label} must be a valid URL")]
    InvalidUrl { label: String },

    #[error("{message}")]
    PatternMismatch { message: String },

    #[error("{0}")]
    Custom(String),
}

/// A regular expression plus the message shown when it does not match
#[derive(Debug, Clone)]
pub struct Pattern {
    pub regex: Regex,
    pub message: String,
}

impl Pattern {
    pub fn new(pattern: &str, message: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            message: message.to_string(),
        })
    }
}

/// Constraints on one field, evaluated in a fixed order
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub email: bool,
    pub url: bool,
    pub pattern: Option<Pattern>,
    pub custom: Option<CustomValidator>,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("email", &self.email)
            .field("url", &self.url)
            .field("pattern", &self.pattern.as_ref().map(|p| p.regex.as_str()))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
    })
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid URL regex")
    })
}

impl ValidationRule {
    /// Set a custom validator
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(f));
        self
    }

    /// Check `value` against the rule.
    ///
    /// Order: required, length, numeric bounds, email, url, pattern, custom.
    /// The first failure wins. Blank input on an optional field is always valid.
    pub fn check(&self, label: &str, value: &FieldValue) -> Result<(), Violation> {
        if value.is_blank() {
            if self.required {
                return Err(Violation::Required {
                    label: label.to_string(),
                });
            }
            return Ok(());
        }

        let text = value.as_text();
        let length = text.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(Violation::TooShort {
                    label: label.to_string(),
                    min,
                });
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(Violation::TooLong {
                    label: label.to_string(),
                    max,
                });
            }
        }

        if self.min.is_some() || self.max.is_some() {
            let number = text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| Violation::NotANumber {
                    label: label.to_string(),
                })?;
            if let Some(min) = self.min {
                if number < min {
                    return Err(Violation::BelowMin {
                        label: label.to_string(),
                        min,
                    });
                }
            }
            if let Some(max) = self.max {
                if number > max {
                    return Err(Violation::AboveMax {
                        label: label.to_string(),
                        max,
                    });
                }
            }
        }

        if self.email && !email_regex().is_match(text.trim()) {
            return Err(Violation::InvalidEmail {
                label: label.to_string(),
            });
        }
        if self.url && !url_regex().is_match(text.trim()) {
            return Err(Violation::InvalidUrl {
                label: label.to_string(),
            });
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.regex.is_match(&text) {
                return Err(Violation::PatternMismatch {
                    message: pattern.message.clone(),
                });
            }
        }

        if let Some(custom) = &self.custom {
            if let Some(message) = custom(value) {
                return Err(Violation::Custom(message));
            }
        }

        Ok(())
    }
}
