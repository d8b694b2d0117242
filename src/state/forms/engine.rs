//! Form engine: field state, validation and the submit lifecycle
//!
//! One `FormEngine` backs one create or edit page. The page declares its
//! fields once; renderers talk to the engine only through [`FieldProps`]
//! (what to draw) and [`FieldEvent`] (what the user did).

use super::field::{FieldConfig, FieldValue, FormValues};
use std::collections::BTreeMap;
use std::future::Future;

/// Field name to user-facing error message
pub type FormErrors = BTreeMap<String, String>;

/// Snapshot of everything the engine tracks for one form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub touched: BTreeMap<String, bool>,
    pub is_submitting: bool,
    pub is_valid: bool,
    pub is_dirty: bool,
}

impl FormState {
    fn initial(values: FormValues) -> Self {
        Self {
            values,
            errors: FormErrors::new(),
            touched: BTreeMap::new(),
            is_submitting: false,
            is_valid: true,
            is_dirty: false,
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.get(name).copied().unwrap_or(false)
    }
}

/// Host-side collaborator notified about validation, reset and submit failures
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver {
    /// Called after whole-form or single-field validation
    fn on_validation_change(&self, is_valid: bool, errors: &FormErrors);

    /// Receives the state as it was just before a reset
    fn on_reset(&self, outgoing: &FormState);

    /// Receives the error returned by the submit handler
    fn on_submit_error(&self, error: &anyhow::Error);
}

/// Default observer that only logs, tagged with the form it watches
#[derive(Debug, Default, Clone)]
pub struct TracingObserver {
    form: String,
}

impl TracingObserver {
    pub fn new(form: impl Into<String>) -> Self {
        Self { form: form.into() }
    }
}

impl FormObserver for TracingObserver {
    fn on_validation_change(&self, is_valid: bool, errors: &FormErrors) {
        tracing::debug!(
            form = %self.form,
            is_valid,
            error_count = errors.len(),
            "form validation changed"
        );
    }

    fn on_reset(&self, outgoing: &FormState) {
        tracing::debug!(form = %self.form, was_dirty = outgoing.is_dirty, "form reset");
    }

    fn on_submit_error(&self, error: &anyhow::Error) {
        tracing::error!(form = %self.form, "form submission failed: {error:#}");
    }
}

/// What a field renderer reports back, once per user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Changed(FieldValue),
    Blurred,
    Focused,
}

/// Everything a renderer needs to draw one field
#[derive(Debug, Clone)]
pub struct FieldProps<'a> {
    pub config: &'a FieldConfig,
    pub value: &'a FieldValue,
    pub error: Option<&'a str>,
    pub touched: bool,
}

impl FieldProps<'_> {
    /// Errors are only shown once the field has been touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error
        } else {
            None
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, the handler was not called
    Invalid,
    /// The handler completed successfully
    Submitted,
    /// The handler returned an error; input is preserved for retry
    Failed,
}

/// Owns one form's state for a declared field list
pub struct FormEngine {
    fields: Vec<FieldConfig>,
    initial_values: FormValues,
    state: FormState,
    observer: Box<dyn FormObserver>,
}

impl std::fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("fields", &self.fields)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl FormEngine {
    /// Create an engine; fields missing from `initial_values` start empty
    pub fn new(fields: Vec<FieldConfig>, mut initial_values: FormValues) -> Self {
        for field in &fields {
            initial_values
                .entry(field.name.clone())
                .or_insert_with(|| field.kind.empty_value());
        }
        Self {
            state: FormState::initial(initial_values.clone()),
            fields,
            initial_values,
            observer: Box::new(TracingObserver::default()),
        }
    }

    /// Replace the default tracing observer
    pub fn with_observer(mut self, observer: Box<dyn FormObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.values.get(name)
    }

    /// Renderer input for a declared field
    pub fn field_props(&self, name: &str) -> Option<FieldProps<'_>> {
        let config = self.field(name)?;
        let value = self.state.values.get(name)?;
        Some(FieldProps {
            config,
            value,
            error: self.state.errors.get(name).map(String::as_str),
            touched: self.state.is_touched(name),
        })
    }

    /// Route a renderer event to the matching handler
    pub fn dispatch(&mut self, name: &str, event: FieldEvent) {
        match event {
            FieldEvent::Changed(value) => self.set_field_value(name, value),
            FieldEvent::Blurred => self.handle_field_blur(name),
            FieldEvent::Focused => self.handle_field_focus(name),
        }
    }

    /// Store a new value. Does not validate, but drops a stale error for the field.
    pub fn set_field_value(&mut self, name: &str, value: FieldValue) {
        self.state.values.insert(name.to_string(), value);
        self.state.is_dirty = true;
        if self.state.errors.remove(name).is_some() {
            self.state.is_valid = self.state.errors.is_empty();
        }
    }

    pub fn set_field_touched(&mut self, name: &str, touched: bool) {
        self.state.touched.insert(name.to_string(), touched);
    }

    pub fn handle_field_focus(&mut self, name: &str) {
        self.set_field_touched(name, true);
    }

    /// Validate `value` against the rules declared for `name`
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> Option<String> {
        let field = self.field(name)?;
        field
            .rules
            .check(&field.label, value)
            .err()
            .map(|violation| violation.to_string())
    }

    /// Validate every declared field, replacing the error map
    pub fn validate_form(&mut self) -> bool {
        let errors: FormErrors = self
            .fields
            .iter()
            .filter_map(|field| {
                let empty = field.kind.empty_value();
                let value = self.state.values.get(&field.name).unwrap_or(&empty);
                self.validate_field(&field.name, value)
                    .map(|message| (field.name.clone(), message))
            })
            .collect();

        self.state.errors = errors;
        self.state.is_valid = self.state.errors.is_empty();
        self.observer
            .on_validation_change(self.state.is_valid, &self.state.errors);
        self.state.is_valid
    }

    /// Mark touched, validate this field only and merge the result
    pub fn handle_field_blur(&mut self, name: &str) {
        self.set_field_touched(name, true);

        let error = match self.state.values.get(name) {
            Some(value) => self.validate_field(name, value),
            None => self
                .field(name)
                .and_then(|f| self.validate_field(name, &f.kind.empty_value())),
        };
        match error {
            Some(message) => {
                self.state.errors.insert(name.to_string(), message);
            }
            None => {
                self.state.errors.remove(name);
            }
        }

        self.state.is_valid = self.state.errors.is_empty();
        self.observer
            .on_validation_change(self.state.is_valid, &self.state.errors);
    }

    /// Validate, then hand the values to `on_submit`.
    ///
    /// `is_submitting` is true while the handler runs and false afterwards,
    /// whatever the handler returns. A failing handler leaves values and
    /// errors untouched.
    pub async fn submit_form<F, Fut>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues, FormState) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        if !self.validate_form() {
            tracing::debug!(
                errors = self.state.errors.len(),
                "submit blocked by validation"
            );
            return SubmitOutcome::Invalid;
        }

        self.state.is_submitting = true;
        let result = on_submit(self.state.values.clone(), self.state.clone()).await;
        self.state.is_submitting = false;

        match result {
            Ok(()) => {
                tracing::info!("form submitted");
                SubmitOutcome::Submitted
            }
            Err(error) => {
                self.observer.on_submit_error(&error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Restore initial values and clear all tracking
    pub fn reset_form(&mut self) {
        let outgoing = std::mem::replace(
            &mut self.state,
            FormState::initial(self.initial_values.clone()),
        );
        self.observer.on_reset(&outgoing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rules::ValidationRule;
    use anyhow::anyhow;
    use std::cell::Cell;
    use std::rc::Rc;

    fn fields() -> Vec<FieldConfig> {
        vec![
            FieldConfig::text("name", "Name").required(),
            FieldConfig::text("email", "Email")
                .required()
                .with_rules(ValidationRule {
                    email: true,
                    ..Default::default()
                }),
            FieldConfig::text("nickname", "Nickname").with_rules(ValidationRule {
                min_length: Some(3),
                ..Default::default()
            }),
        ]
    }

    fn initial() -> FormValues {
        let mut values = FormValues::new();
        values.insert("name".to_string(), FieldValue::from("Mimosa"));
        values.insert("email".to_string(), FieldValue::from("ana@fazenda.com"));
        values.insert("nickname".to_string(), FieldValue::from(""));
        values
    }

    fn engine() -> FormEngine {
        FormEngine::new(fields(), initial())
    }

    fn quiet_observer() -> MockFormObserver {
        let mut observer = MockFormObserver::new();
        observer.expect_on_validation_change().return_const(());
        observer.expect_on_reset().return_const(());
        observer
    }

    mod field_validation {
        use super::*;

        #[test]
        fn test_required_field_rejects_blank() {
            let engine = engine();
            for blank in ["", "   "] {
                assert_eq!(
                    engine.validate_field("name", &FieldValue::from(blank)),
                    Some("Name is required".to_string())
                );
            }
            assert_eq!(engine.validate_field("name", &FieldValue::from("x")), None);
        }

        #[test]
        fn test_optional_field_accepts_blank() {
            let engine = engine();
            assert_eq!(engine.validate_field("nickname", &FieldValue::from("")), None);
            assert!(engine
                .validate_field("nickname", &FieldValue::from("ab"))
                .is_some());
        }

        #[test]
        fn test_unknown_field_has_no_rules() {
            let engine = engine();
            assert_eq!(engine.validate_field("missing", &FieldValue::from("")), None);
        }
    }

    mod change_and_blur {
        use super::*;

        #[test]
        fn test_new_engine_is_pristine() {
            let engine = engine();
            let state = engine.state();
            assert!(state.is_valid);
            assert!(!state.is_dirty);
            assert!(!state.is_submitting);
            assert!(state.errors.is_empty());
            assert!(state.touched.is_empty());
        }

        #[test]
        fn test_missing_initial_values_are_filled() {
            let engine = FormEngine::new(fields(), FormValues::new());
            assert_eq!(engine.value("name"), Some(&FieldValue::default()));
            assert_eq!(engine.state().values.len(), 3);
        }

        #[test]
        fn test_set_field_value_marks_dirty_without_validating() {
            let mut engine = engine();
            engine.set_field_value("name", FieldValue::from(""));
            assert!(engine.state().is_dirty);
            assert!(engine.state().errors.is_empty());
            assert!(engine.state().is_valid);
        }

        #[test]
        fn test_invalid_email_then_blur() {
            let mut engine = engine();
            engine.dispatch("email", FieldEvent::Focused);
            engine.dispatch("email", FieldEvent::Changed(FieldValue::from("invalid-email")));
            engine.dispatch("email", FieldEvent::Blurred);

            let state = engine.state();
            assert_eq!(
                state.errors.get("email").map(String::as_str),
                Some("Email must be a valid email address")
            );
            assert!(!state.is_valid);
            assert!(state.is_touched("email"));
        }

        #[test]
        fn test_blur_clears_error_once_fixed() {
            let mut engine = engine();
            engine.set_field_value("email", FieldValue::from("nope"));
            engine.handle_field_blur("email");
            assert!(!engine.state().is_valid);

            engine.set_field_value("email", FieldValue::from("ana@fazenda.com"));
            engine.handle_field_blur("email");
            assert!(engine.state().errors.is_empty());
            assert!(engine.state().is_valid);
        }

        #[test]
        fn test_blur_merges_and_keeps_other_errors() {
            let mut engine = engine();
            engine.set_field_value("name", FieldValue::from(""));
            engine.set_field_value("email", FieldValue::from("nope"));
            engine.handle_field_blur("name");
            engine.handle_field_blur("email");
            assert_eq!(engine.state().errors.len(), 2);

            engine.set_field_value("name", FieldValue::from("Mimosa"));
            engine.handle_field_blur("name");
            assert_eq!(engine.state().errors.len(), 1);
            assert!(engine.state().errors.contains_key("email"));
            assert!(!engine.state().is_valid);
        }

        #[test]
        fn test_typing_drops_stale_error() {
            let mut engine = engine();
            engine.set_field_value("email", FieldValue::from("nope"));
            engine.handle_field_blur("email");
            engine.set_field_value("email", FieldValue::from("nope2"));
            assert!(!engine.state().errors.contains_key("email"));
            assert!(engine.state().is_valid);
        }

        #[test]
        fn test_set_touched_is_idempotent() {
            let mut engine = engine();
            engine.set_field_touched("name", true);
            engine.set_field_touched("name", true);
            assert_eq!(engine.state().touched.len(), 1);
            assert!(engine.state().is_touched("name"));
        }

        #[test]
        fn test_field_props_hide_error_until_touched() {
            let mut engine = engine();
            engine.set_field_value("name", FieldValue::from(""));
            engine.validate_form();
            let props = engine.field_props("name").unwrap();
            assert_eq!(props.error, Some("Name is required"));
            assert_eq!(props.visible_error(), None);

            engine.handle_field_focus("name");
            let props = engine.field_props("name").unwrap();
            assert_eq!(props.visible_error(), Some("Name is required"));
            assert!(engine.field_props("missing").is_none());
        }

        #[test]
        fn test_blur_notifies_observer() {
            let mut observer = MockFormObserver::new();
            observer
                .expect_on_validation_change()
                .withf(|is_valid, errors| !*is_valid && errors.contains_key("name"))
                .times(1)
                .return_const(());
            let mut engine = engine().with_observer(Box::new(observer));
            engine.set_field_value("name", FieldValue::from(" "));
            engine.handle_field_blur("name");
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_form_replaces_errors() {
            let mut engine = engine();
            engine.set_field_value("name", FieldValue::from(""));
            engine.set_field_value("nickname", FieldValue::from("ab"));
            assert!(!engine.validate_form());
            let mut keys: Vec<_> = engine.state().errors.keys().cloned().collect();
            keys.sort();
            assert_eq!(keys, vec!["name".to_string(), "nickname".to_string()]);

            engine.set_field_value("name", FieldValue::from("Mimosa"));
            engine.set_field_value("nickname", FieldValue::from("Mimi"));
            assert!(engine.validate_form());
            assert!(engine.state().errors.is_empty());
        }

        #[test]
        fn test_reset_restores_initial_values() {
            let mut engine = engine().with_observer(Box::new(quiet_observer()));
            engine.set_field_value("name", FieldValue::from(""));
            engine.handle_field_blur("name");
            engine.reset_form();

            let state = engine.state().clone();
            assert_eq!(state.values, initial());
            assert!(state.errors.is_empty());
            assert!(state.touched.is_empty());
            assert!(!state.is_dirty);
            assert!(state.is_valid);
            assert!(!state.is_submitting);

            engine.reset_form();
            assert_eq!(engine.state(), &state);
        }

        #[test]
        fn test_reset_passes_outgoing_state() {
            let mut observer = MockFormObserver::new();
            observer
                .expect_on_reset()
                .withf(|outgoing| {
                    outgoing.is_dirty
                        && outgoing.values.get("name") == Some(&FieldValue::from("Estrela"))
                })
                .times(1)
                .return_const(());
            let mut engine = engine().with_observer(Box::new(observer));
            engine.set_field_value("name", FieldValue::from("Estrela"));
            engine.reset_form();
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_invalid_form_never_calls_handler() {
            let mut engine = engine();
            engine.set_field_value("name", FieldValue::from(""));
            let calls = Rc::new(Cell::new(0));
            let counter = calls.clone();

            let outcome = tokio_test::block_on(engine.submit_form(|_, _| {
                counter.set(counter.get() + 1);
                async { Ok::<_, anyhow::Error>(()) }
            }));

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(calls.get(), 0);
            assert!(!engine.state().is_submitting);
            assert!(engine.state().errors.contains_key("name"));
        }

        #[test]
        fn test_handler_sees_submitting_state() {
            let mut engine = engine();
            let outcome = tokio_test::block_on(engine.submit_form(|values, state| async move {
                assert!(state.is_submitting);
                assert_eq!(values.get("name"), Some(&FieldValue::from("Mimosa")));
                Ok::<_, anyhow::Error>(())
            }));
            assert_eq!(outcome, SubmitOutcome::Submitted);
            assert!(!engine.state().is_submitting);
        }

        #[test]
        fn test_rejected_submit_preserves_input() {
            let mut observer = MockFormObserver::new();
            observer.expect_on_validation_change().return_const(());
            observer
                .expect_on_submit_error()
                .withf(|error| error.to_string() == "store unavailable")
                .times(1)
                .return_const(());
            let mut engine = engine().with_observer(Box::new(observer));
            engine.set_field_value("nickname", FieldValue::from("Mimi"));
            let before = engine.state().values.clone();

            let outcome = tokio_test::block_on(
                engine.submit_form(|_, _| async { Err(anyhow!("store unavailable")) }),
            );

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert!(!engine.state().is_submitting);
            assert_eq!(engine.state().values, before);
            assert!(engine.state().is_dirty);
        }
    }
}
