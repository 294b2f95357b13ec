//! Step navigation and submission for the lead forms.
//!
//! The wizard owns the collected [`FormData`] and the current step. Moving
//! forward requires the current step to be valid; moving back never does.
//! Submission is split in two halves ([`FormWizard::begin_submit`] and
//! [`FormWizard::finish_submit`]) so a component can hold the wizard in a
//! signal and await the network call without borrowing it across the await.

use std::fmt::Display;
use std::future::Future;

use super::data::{FieldValue, FormData};
use super::schema::{FormSchema, StepSpec};
use super::validation::{self, FieldIssue};
use crate::core::notify::Notice;

pub const SUBMIT_SUCCESS_KEY: &str = "form-submit-success";
pub const SUBMIT_ERROR_KEY: &str = "form-submit-error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepChange {
    Advanced { from: usize, to: usize },
    Blocked { issues: Vec<FieldIssue> },
    AtFinalStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    NotOnFinalStep,
    AlreadySubmitting,
    /// First invalid step and what is wrong with it.
    Invalid { step: usize, issues: Vec<FieldIssue> },
}

/// Where a finished form is sent.
pub trait FormSink {
    type Error: Display;

    fn send(&self, payload: &serde_json::Value) -> impl Future<Output = Result<(), Self::Error>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormWizard {
    schema: FormSchema,
    step: usize,
    data: FormData,
    submitting: bool,
}

impl FormWizard {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            data: FormData::for_schema(&schema),
            schema,
            step: 0,
            submitting: false,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.schema.step_count()
    }

    pub fn current_step(&self) -> &'static StepSpec {
        let steps: &'static [StepSpec] = self.schema.steps;
        &steps[self.step]
    }

    pub fn is_final_step(&self) -> bool {
        self.step + 1 >= self.schema.step_count()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> bool {
        self.data.set_text(name, text)
    }

    pub fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        self.data.set(name, value)
    }

    pub fn is_step_valid(&self, step: usize) -> bool {
        self.schema
            .steps
            .get(step)
            .map(|spec| validation::is_step_valid(spec, &self.data))
            .unwrap_or(false)
    }

    pub fn current_issues(&self) -> Vec<FieldIssue> {
        validation::step_issues(self.current_step(), &self.data)
    }

    /// Whether the "next" control should be enabled.
    pub fn can_advance(&self) -> bool {
        !self.is_final_step() && self.is_step_valid(self.step)
    }

    pub fn go_next(&mut self) -> StepChange {
        if self.is_final_step() {
            return StepChange::AtFinalStep;
        }
        let issues = self.current_issues();
        if !issues.is_empty() {
            return StepChange::Blocked { issues };
        }
        let from = self.step;
        self.step += 1;
        StepChange::Advanced { from, to: self.step }
    }

    /// Step back. Returns `false` on the first step.
    pub fn go_previous(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Validate everything and mark the form as in flight.
    /// Returns the flat JSON payload to post.
    pub fn begin_submit(&mut self) -> Result<serde_json::Value, SubmitBlocked> {
        if !self.is_final_step() {
            return Err(SubmitBlocked::NotOnFinalStep);
        }
        if self.submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        for (index, spec) in self.schema.steps.iter().enumerate() {
            let issues = validation::step_issues(spec, &self.data);
            if !issues.is_empty() {
                return Err(SubmitBlocked::Invalid {
                    step: index,
                    issues,
                });
            }
        }
        self.submitting = true;
        Ok(self.data.to_json())
    }

    /// Apply the outcome of the POST started by [`begin_submit`](Self::begin_submit).
    ///
    /// Success clears every field and returns to the first step; failure
    /// leaves values untouched so the visitor can correct and resend.
    pub fn finish_submit<E: Display>(&mut self, outcome: Result<(), E>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                tracing::info!(form = self.schema.id, "form submitted");
                self.reset();
                Notice::success(SUBMIT_SUCCESS_KEY)
            }
            Err(err) => {
                tracing::warn!(form = self.schema.id, error = %err, "form submission failed");
                Notice::error(SUBMIT_ERROR_KEY, err.to_string())
            }
        }
    }

    /// Both halves in one call, for callers that own the wizard outright.
    pub async fn submit<S: FormSink>(&mut self, sink: &S) -> Result<Notice, SubmitBlocked> {
        let payload = self.begin_submit()?;
        let outcome = sink.send(&payload).await;
        Ok(self.finish_submit(outcome))
    }

    pub fn reset(&mut self) {
        self.data = FormData::for_schema(&self.schema);
        self.step = 0;
        self.submitting = false;
    }
}
