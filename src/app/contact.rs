use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use leptos::either::Either;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::config::{SiteConfig, SITE_CONFIG};
use crate::contact::{ContactFlow, Field, FlowTask, SubmitOutcome};
use crate::schedule::{Scheduler, TaskHandle};

use super::links::{ExternalLink, MailLink};
use super::motion::Reveal;

type Sink = Arc<dyn Fn(TaskHandle, FlowTask) + Send + Sync>;

/// [`Scheduler`] backed by `setTimeout`. Fired tasks are handed to the sink.
#[derive(Default)]
struct BrowserScheduler {
    next_id: u64,
    pending: HashMap<TaskHandle, TimeoutHandle>,
    sink: Option<Sink>,
}

impl BrowserScheduler {
    fn forget(&mut self, handle: TaskHandle) {
        self.pending.remove(&handle);
    }
}

impl Scheduler<FlowTask> for BrowserScheduler {
    fn schedule(&mut self, delay: Duration, task: FlowTask) -> TaskHandle {
        let handle = TaskHandle::from_raw(self.next_id);
        self.next_id += 1;
        let Some(sink) = self.sink.clone() else {
            log::warn!("contact form timer dropped before wiring: {task:?}");
            return handle;
        };
        match set_timeout_with_handle(move || sink(handle, task), delay) {
            Ok(timeout) => {
                self.pending.insert(handle, timeout);
            }
            Err(err) => log::error!("couldn't schedule {task:?}: {err:?}"),
        }
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.pending.remove(&handle) {
            Some(timeout) => {
                timeout.clear();
                true
            }
            None => false,
        }
    }

    fn cancel_all(&mut self) {
        for (_, timeout) in self.pending.drain() {
            timeout.clear();
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    view! {
        <section id="contact" class="py-20 bg-surface">
            <div class="mx-auto max-w-6xl px-4">
                <h2 class="section-title text-3xl font-bold text-center mb-12">"Get In Touch"</h2>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <Reveal class="contact-info-item flex items-center gap-4">
                            <i class="fas fa-envelope text-2xl" />
                            <MailLink email=config.contact.email.clone() />
                        </Reveal>
                        {config
                            .contact
                            .location
                            .clone()
                            .map(|location| {
                                view! {
                                    <Reveal class="contact-info-item flex items-center gap-4">
                                        <i class="fas fa-map-marker-alt text-2xl" />
                                        <span>{location}</span>
                                    </Reveal>
                                }
                            })}
                        {config
                            .contact
                            .links
                            .iter()
                            .map(|link| {
                                view! {
                                    <Reveal class="contact-info-item flex items-center gap-4">
                                        <i class="fas fa-link text-2xl" />
                                        <ExternalLink href=link.url.clone()>
                                            {link.label.clone()}
                                        </ExternalLink>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::new(&SITE_CONFIG.timing));
    let timers = StoredValue::new(BrowserScheduler::default());

    // Timers can outlive the component; both handles are checked before use.
    let on_fire = move |handle: TaskHandle, task: FlowTask| {
        timers.try_update_value(|t| {
            t.forget(handle);
            flow.try_update(|f| f.fire(task, t));
        });
    };
    let sink: Sink = Arc::new(on_fire);
    timers.update_value(|t| t.sink = Some(sink));

    on_cleanup(move || {
        timers.try_update_value(|t| {
            flow.try_update_untracked(|f| f.teardown(t));
            t.cancel_all();
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = timers
            .try_update_value(|t| flow.try_update(|f| f.submit(t)))
            .flatten();
        if let Some(SubmitOutcome::Rejected(failure)) = outcome {
            log::info!("contact form has {} invalid field(s)", failure.fields.len());
        }
    };

    let dismiss = move |_: MouseEvent| {
        timers.update_value(|t| flow.update(|f| f.dismiss_banner(t)));
    };

    view! {
        <div class="contact-form-wrap">
            {move || {
                flow.with(|f| f.banner().cloned())
                    .map(|banner| {
                        view! {
                            <div
                                id=banner.id.to_string()
                                class=format!("{} alert-dismissible fade show mt-3", banner.kind.class())
                                role="alert"
                                aria-live=if banner.is_error() { "assertive" } else { "polite" }
                            >
                                <i class=format!("{} mr-2", banner.kind.icon()) />
                                {banner.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=dismiss
                                ></button>
                            </div>
                        }
                    })
            }}
            <form id="contactForm" class="space-y-4" novalidate=true on:submit=on_submit>
                <FormField flow field=Field::Name />
                <FormField flow field=Field::Email />
                <FormField flow field=Field::Subject />
                <FormField flow field=Field::Message />
                <button
                    type="submit"
                    class="btn btn-primary w-full"
                    disabled=move || flow.with(|f| f.control().is_disabled())
                >
                    {move || {
                        flow.with(|f| f.control().is_busy())
                            .then(|| view! { <i class="fas fa-spinner fa-spin mr-2" /> })
                    }}
                    {move || flow.with(|f| f.control().label().to_string())}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormField(flow: RwSignal<ContactFlow>, field: Field) -> impl IntoView {
    let id = field.as_str();
    let class = move || match flow.with(|f| f.indicator(field)) {
        Some(indicator) => format!("form-control {}", indicator.class()),
        None => "form-control".to_string(),
    };
    let value = move || flow.with(|f| f.value(field).to_string());

    let control = if field == Field::Message {
        Either::Left(view! {
            <textarea
                id=id
                name=id
                rows="5"
                class=class
                prop:value=value
                on:input:target=move |ev| flow.update(|f| f.set_field(field, ev.target().value()))
            ></textarea>
        })
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        Either::Right(view! {
            <input
                type=kind
                id=id
                name=id
                class=class
                prop:value=value
                on:input:target=move |ev| flow.update(|f| f.set_field(field, ev.target().value()))
            />
        })
    };

    view! {
        <div>
            <label for=id class="form-label block mb-1 font-medium">
                {field.label()}
            </label>
            {control}
        </div>
    }
}
