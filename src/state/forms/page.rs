//! Form page: a `FormEngine` plus keyboard focus for one create/edit view

use super::engine::{FieldEvent, FormEngine};
use crate::state::entities::EntityKind;

/// Whether the page creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// State of the active create/edit page
#[derive(Debug)]
pub struct FormPage {
    pub kind: EntityKind,
    pub mode: FormMode,
    pub engine: FormEngine,
    /// Index into the engine's declared fields
    pub active_field_index: usize,
    /// Sub-part of the active field (address line, latitude/longitude)
    pub active_part: usize,
}

impl FormPage {
    /// Create a page and focus its first field
    pub fn new(kind: EntityKind, mode: FormMode, engine: FormEngine) -> Self {
        let mut page = Self {
            kind,
            mode,
            engine,
            active_field_index: 0,
            active_part: 0,
        };
        page.focus_active();
        page
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", self.kind.singular()),
            FormMode::Edit { .. } => format!("Edit {}", self.kind.singular()),
        }
    }

    pub fn field_count(&self) -> usize {
        self.engine.fields().len()
    }

    /// Name of the focused field
    pub fn active_field_name(&self) -> Option<String> {
        self.engine
            .fields()
            .get(self.active_field_index)
            .map(|f| f.name.clone())
    }

    fn focus_active(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.engine.dispatch(&name, FieldEvent::Focused);
        }
    }

    fn blur_active(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.engine.dispatch(&name, FieldEvent::Blurred);
        }
    }

    fn active_part_count(&self) -> usize {
        self.engine
            .fields()
            .get(self.active_field_index)
            .map(|f| f.kind.part_count())
            .unwrap_or(1)
    }

    /// Move to the next part, or blur and focus the next field (wraps around)
    pub fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        if self.active_part + 1 < self.active_part_count() {
            self.active_part += 1;
            return;
        }
        self.blur_active();
        self.active_field_index = (self.active_field_index + 1) % count;
        self.active_part = 0;
        self.focus_active();
    }

    /// Move to the previous part, or blur and focus the previous field
    pub fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        if self.active_part > 0 {
            self.active_part -= 1;
            return;
        }
        self.blur_active();
        self.active_field_index = if self.active_field_index == 0 {
            count - 1
        } else {
            self.active_field_index - 1
        };
        self.active_part = self.active_part_count().saturating_sub(1);
        self.focus_active();
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        self.edit_active(|value, part| value.push_char(part, c));
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.edit_active(|value, part| value.pop_char(part));
    }

    /// Cycle a select field through its options
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.engine.fields().get(self.active_field_index) else {
            return;
        };
        let super::FieldKind::Select { options } = &field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self
            .engine
            .value(&field.name)
            .map(|v| v.as_text())
            .unwrap_or_default();
        let next = match options.iter().position(|o| *o == current) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(0) => options.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        let name = field.name.clone();
        let value = options[next].clone();
        self.engine.dispatch(&name, FieldEvent::Changed(value.into()));
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut super::FieldValue, usize)) {
        let Some(field) = self.engine.fields().get(self.active_field_index) else {
            return;
        };
        if matches!(field.kind, super::FieldKind::Select { .. }) {
            return;
        }
        let name = field.name.clone();
        let mut value = self
            .engine
            .value(&name)
            .cloned()
            .unwrap_or_else(|| field.kind.empty_value());
        edit(&mut value, self.active_part);
        self.engine.dispatch(&name, FieldEvent::Changed(value));
    }

    /// Whether the focused field renders over several lines
    pub fn is_active_field_multiline(&self) -> bool {
        self.engine
            .fields()
            .get(self.active_field_index)
            .is_some_and(|f| f.kind.is_multiline())
    }
}
