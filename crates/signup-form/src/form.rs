// File: src/form.rs
// Purpose: Form state and the controller that applies input events to it

use crate::engine::{FieldValidationEngine, HandRolledEngine};
use crate::event::FormEvent;
use crate::field::{is_field_satisfied, FieldName, FieldState};
use crate::payload::{HearAbout, SubmissionPayload};
use crate::submission::{SubmissionSink, SubmitError};
use tracing::{debug, info, warn};

/// Every value of one form instance
///
/// Created empty and untouched. Never reset by a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: FieldState,
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub password: FieldState,
    pub hear_about: HearAbout,
    pub optin: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        match name {
            FieldName::Email => &self.email,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Password => &mut self.password,
        }
    }

    /// Validated fields in form order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FieldState)> + '_ {
        FieldName::ALL.into_iter().map(move |name| (name, self.field(name)))
    }

    /// Idempotent; returns true when the field was not touched before
    pub fn mark_touched(&mut self, name: FieldName) -> bool {
        self.field_mut(name).mark_touched()
    }

    /// True iff every validated field is satisfied
    pub fn can_submit(&self) -> bool {
        self.fields().all(|(_, state)| state.is_satisfied())
    }

    pub fn unsatisfied_fields(&self) -> Vec<FieldName> {
        self.fields()
            .filter(|(_, state)| !state.is_satisfied())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn snapshot(&self) -> SubmissionPayload {
        SubmissionPayload {
            email: self.email.value.clone(),
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            password: self.password.value.clone(),
            hear_about: self.hear_about,
            optin: self.optin,
        }
    }
}

/// A sign-up form bound to a validation engine
///
/// # Example
///
/// ```
/// use signup_form::{FieldName, SignupForm, SubmissionPayload};
///
/// let mut form = SignupForm::new();
/// form.input(FieldName::Email, "ann@lee.com");
/// form.blur(FieldName::Email);
/// assert!(form.visible_error(FieldName::Email).is_none());
/// assert!(!form.can_submit());
///
/// let mut sink: Vec<SubmissionPayload> = Vec::new();
/// assert!(form.submit(&mut sink).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SignupForm<E = HandRolledEngine> {
    state: FormState,
    engine: E,
    revalidate_on_submit: bool,
}

impl SignupForm<HandRolledEngine> {
    pub fn new() -> Self {
        Self::with_engine(HandRolledEngine)
    }
}

impl Default for SignupForm<HandRolledEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FieldValidationEngine> SignupForm<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            state: FormState::new(),
            engine,
            revalidate_on_submit: true,
        }
    }

    /// When disabled, `submit` relies on the `can_submit` gate alone and does
    /// not recompute errors from the current values
    pub fn revalidate_on_submit(mut self, enabled: bool) -> Self {
        self.revalidate_on_submit = enabled;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// New raw value for a field; the error is recomputed immediately
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        let outcome = self.engine.validate(field, &value);
        debug!(field = %field, valid = outcome.is_ok(), "field updated");
        self.state.field_mut(field).update(value, outcome);
    }

    /// Field lost focus
    pub fn blur(&mut self, field: FieldName) {
        if self.state.mark_touched(field) {
            debug!(field = %field, "field touched");
        }
    }

    pub fn set_optin(&mut self, checked: bool) {
        self.state.optin = checked;
    }

    pub fn set_hear_about(&mut self, value: HearAbout) {
        self.state.hear_about = value;
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn unsatisfied_fields(&self) -> Vec<FieldName> {
        self.state.unsatisfied_fields()
    }

    /// Error to render next to a field, if any
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        self.state.field(field).visible_error()
    }

    /// Hand a snapshot of the form to `sink`
    ///
    /// Unless re-validation is disabled, every field's error is recomputed
    /// from its value first and the sink is not called if any field is
    /// unsatisfied. The state is left unchanged either way.
    ///
    /// Calling this directly skips the submit button gate; `apply` with
    /// [`FormEvent::Submit`] goes through it.
    pub fn submit<S>(&self, sink: &mut S) -> Result<SubmissionPayload, SubmitError>
    where
        S: SubmissionSink + ?Sized,
    {
        if self.revalidate_on_submit {
            let unsatisfied = self.revalidate();
            if !unsatisfied.is_empty() {
                warn!(unsatisfied = ?unsatisfied, "submission rejected");
                return Err(SubmitError::NotSubmittable { unsatisfied });
            }
        }

        let payload = self.state.snapshot();
        sink.accept(&payload)?;
        info!(email = %payload.email, "submission accepted");
        Ok(payload)
    }

    fn revalidate(&self) -> Vec<FieldName> {
        self.state
            .fields()
            .filter(|(name, state)| {
                let error = self.engine.validate(*name, &state.value).err().unwrap_or_default();
                !is_field_satisfied(&state.value, &error, state.touched)
            })
            .map(|(name, _)| name)
            .collect()
    }

    /// Apply one event; returns the payload when a submit went through
    pub fn apply<S>(
        &mut self,
        event: FormEvent,
        sink: &mut S,
    ) -> Result<Option<SubmissionPayload>, SubmitError>
    where
        S: SubmissionSink + ?Sized,
    {
        match event {
            FormEvent::Input { field, value } => self.input(field, value),
            FormEvent::Blur { field } => self.blur(field),
            FormEvent::Optin { checked } => self.set_optin(checked),
            FormEvent::HearAbout { value } => self.set_hear_about(value),
            FormEvent::Submit => return self.press_submit(sink).map(Some),
        }
        Ok(None)
    }

    /// The submit button is disabled until `can_submit` holds
    fn press_submit<S>(&self, sink: &mut S) -> Result<SubmissionPayload, SubmitError>
    where
        S: SubmissionSink + ?Sized,
    {
        if !self.can_submit() {
            let unsatisfied = self.unsatisfied_fields();
            debug!(unsatisfied = ?unsatisfied, "submit button disabled");
            return Err(SubmitError::NotSubmittable { unsatisfied });
        }
        self.submit(sink)
    }
}
