//! Contact form: validation, per-field indicators, banners and the simulated
//! send. Nothing here touches the DOM; `app::contact` renders this state.

mod banner;
mod flow;
mod validate;

pub use banner::{Banner, BannerId, BannerKind, SUCCESS_MESSAGE};
pub use flow::{
    ContactFlow, FlowTask, Indicator, SubmissionState, SubmitControl, SubmitOutcome, BUSY_LABEL,
    IDLE_LABEL,
};
pub use validate::{validate, ContactForm, Field, ValidationFailure, ValidationResult};
