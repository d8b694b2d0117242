//! Form field value objects

use super::rules::ValidationRule;
use std::collections::BTreeMap;

/// Values of one form, keyed by field name
pub type FormValues = BTreeMap<String, FieldValue>;

/// Postal address captured by an address field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl Address {
    /// Non-empty parts joined with ", "
    pub fn display(&self) -> String {
        [&self.street, &self.city, &self.state, &self.postal_code]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Geographic coordinates as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    /// Parse both components, `None` if either is missing or not a number
    pub fn parsed(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse::<f64>().ok()?;
        let lng = self.longitude.trim().parse::<f64>().ok()?;
        Some((lat, lng))
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Address(Address),
    Coordinates(Coordinates),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl FieldValue {
    /// Textual form used by length, format and pattern rules
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Address(address) => address.display(),
            FieldValue::Coordinates(c) => {
                if c.latitude.trim().is_empty() && c.longitude.trim().is_empty() {
                    String::new()
                } else {
                    format!("{}, {}", c.latitude.trim(), c.longitude.trim())
                }
            }
        }
    }

    /// True for empty or whitespace-only input
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Address(address) => address.display().is_empty(),
            FieldValue::Coordinates(c) => {
                c.latitude.trim().is_empty() && c.longitude.trim().is_empty()
            }
        }
    }

    /// Push a character onto the focused part of the value
    pub fn push_char(&mut self, part: usize, c: char) {
        if let Some(s) = self.part_mut(part) {
            s.push(c);
        }
    }

    /// Remove the last character of the focused part
    pub fn pop_char(&mut self, part: usize) {
        if let Some(s) = self.part_mut(part) {
            s.pop();
        }
    }

    fn part_mut(&mut self, part: usize) -> Option<&mut String> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Address(a) => match part {
                0 => Some(&mut a.street),
                1 => Some(&mut a.city),
                2 => Some(&mut a.state),
                3 => Some(&mut a.postal_code),
                _ => None,
            },
            FieldValue::Coordinates(c) => match part {
                0 => Some(&mut c.latitude),
                1 => Some(&mut c.longitude),
                _ => None,
            },
        }
    }
}

/// Which renderer draws a field. Closed set, matched exhaustively by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    TextInput,
    Select { options: Vec<String> },
    Textarea,
    Address,
    Coordinates,
}

impl FieldKind {
    /// Empty value of the right shape for this kind
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldKind::TextInput | FieldKind::Select { .. } | FieldKind::Textarea => {
                FieldValue::Text(String::new())
            }
            FieldKind::Address => FieldValue::Address(Address::default()),
            FieldKind::Coordinates => FieldValue::Coordinates(Coordinates::default()),
        }
    }

    /// Number of editable sub-parts (address has four, coordinates two)
    pub fn part_count(&self) -> usize {
        match self {
            FieldKind::Address => 4,
            FieldKind::Coordinates => 2,
            _ => 1,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Textarea)
    }
}

/// One declared input of a form
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub rules: ValidationRule,
    pub placeholder: Option<String>,
}

impl FieldConfig {
    /// Create a new field of the given kind with no rules
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            rules: ValidationRule::default(),
            placeholder: None,
        }
    }

    /// Single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::TextInput)
    }

    /// Multi-line text field
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    /// Select field with a fixed option list
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    pub fn address(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Address)
    }

    pub fn coordinates(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Coordinates)
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    /// Replace the field's validation rules, keeping the required flag
    pub fn with_rules(mut self, rules: ValidationRule) -> Self {
        let required = self.rules.required || rules.required;
        self.rules = rules;
        self.rules.required = required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.required
    }
}
