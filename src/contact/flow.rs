use std::time::Duration;

use crate::config::Timing;
use crate::schedule::{Scheduler, TaskHandle};

use super::banner::{Banner, BannerId, BannerKind, SUCCESS_MESSAGE};
use super::validate::{ContactForm, Field, ValidationFailure, ValidationResult};

pub const IDLE_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTask {
    CompleteSubmission,
    DismissBanner(BannerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Valid,
    Invalid,
}

impl Indicator {
    pub fn class(&self) -> &'static str {
        match self {
            Indicator::Valid => "is-valid",
            Indicator::Invalid => "is-invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the error banner is showing.
    Rejected(ValidationFailure),
    /// The control is busy until the completion task fires.
    Sending,
    /// A submission is already in flight.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    state: SubmissionState,
    idle_label: String,
    busy_label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(IDLE_LABEL, BUSY_LABEL)
    }
}

impl SubmitControl {
    pub fn new(idle_label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            state: SubmissionState::Idle,
            idle_label: idle_label.into(),
            busy_label: busy_label.into(),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Busy
    }

    pub fn is_disabled(&self) -> bool {
        self.is_busy()
    }

    pub fn label(&self) -> &str {
        match self.state {
            SubmissionState::Idle => &self.idle_label,
            SubmissionState::Busy => &self.busy_label,
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveBanner {
    banner: Banner,
    expiry: TaskHandle,
}

/// Contact form state: field values, per-field indicators, the submit
/// control and at most one banner.
///
/// All timed transitions go through the supplied [`Scheduler`]; the host feeds
/// fired tasks back through [`ContactFlow::fire`].
#[derive(Debug, Clone)]
pub struct ContactFlow {
    form: ContactForm,
    indicators: [Option<Indicator>; 4],
    control: SubmitControl,
    banner: Option<ActiveBanner>,
    submission: Option<TaskHandle>,
    next_banner: u64,
    submit_delay: Duration,
    banner_ttl: Duration,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new(&Timing::default())
    }
}

impl ContactFlow {
    pub fn new(timing: &Timing) -> Self {
        Self::with_delays(timing.submit_delay(), timing.banner_ttl())
    }

    pub fn with_delays(submit_delay: Duration, banner_ttl: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            indicators: [None; 4],
            control: SubmitControl::default(),
            banner: None,
            submission: None,
            next_banner: 0,
            submit_delay,
            banner_ttl,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn indicator(&self, field: Field) -> Option<Indicator> {
        self.indicators[field as usize]
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn state(&self) -> SubmissionState {
        self.control.state()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref().map(|b| &b.banner)
    }

    pub fn submit<S: Scheduler<FlowTask>>(&mut self, sched: &mut S) -> SubmitOutcome {
        if self.control.is_busy() {
            log::debug!("contact form submit ignored while sending");
            return SubmitOutcome::Ignored;
        }

        self.clear_indicators();
        self.remove_banner(sched);

        let result = self.form.validate();
        self.reflect(&result);

        match result.into_result() {
            Err(failure) => {
                log::debug!("contact form rejected: invalid {:?}", failure.fields);
                self.show_banner(BannerKind::Error, failure.to_string(), sched);
                SubmitOutcome::Rejected(failure)
            }
            Ok(()) => {
                log::debug!("contact form accepted, simulating send");
                self.control.state = SubmissionState::Busy;
                self.submission = Some(sched.schedule(self.submit_delay, FlowTask::CompleteSubmission));
                SubmitOutcome::Sending
            }
        }
    }

    /// Apply a task that came due.
    pub fn fire<S: Scheduler<FlowTask>>(&mut self, task: FlowTask, sched: &mut S) {
        match task {
            FlowTask::CompleteSubmission => {
                if self.submission.take().is_none() {
                    return;
                }
                self.control.state = SubmissionState::Idle;
                self.form.clear();
                self.clear_indicators();
                self.show_banner(BannerKind::Success, SUCCESS_MESSAGE.to_string(), sched);
                log::debug!("contact form sent");
            }
            FlowTask::DismissBanner(id) => {
                if self.banner.as_ref().is_some_and(|b| b.banner.id == id) {
                    self.banner = None;
                }
            }
        }
    }

    /// Manual close of the current banner.
    pub fn dismiss_banner<S: Scheduler<FlowTask>>(&mut self, sched: &mut S) {
        self.remove_banner(sched);
    }

    /// Cancel everything still pending. The flow must not be driven afterwards.
    pub fn teardown<S: Scheduler<FlowTask>>(&mut self, sched: &mut S) {
        if let Some(handle) = self.submission.take() {
            sched.cancel(handle);
        }
        self.remove_banner(sched);
    }

    fn reflect(&mut self, result: &ValidationResult) {
        for (field, ok) in result.fields() {
            self.indicators[field as usize] = Some(if ok {
                Indicator::Valid
            } else {
                Indicator::Invalid
            });
        }
    }

    fn clear_indicators(&mut self) {
        self.indicators = [None; 4];
    }

    fn show_banner<S: Scheduler<FlowTask>>(&mut self, kind: BannerKind, message: String, sched: &mut S) {
        self.remove_banner(sched);
        let id = BannerId(self.next_banner);
        self.next_banner += 1;
        let expiry = sched.schedule(self.banner_ttl, FlowTask::DismissBanner(id));
        self.banner = Some(ActiveBanner {
            banner: Banner { id, kind, message },
            expiry,
        });
    }

    fn remove_banner<S: Scheduler<FlowTask>>(&mut self, sched: &mut S) {
        if let Some(active) = self.banner.take() {
            sched.cancel(active.expiry);
        }
    }
}
