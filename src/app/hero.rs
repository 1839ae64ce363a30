use leptos::{html, prelude::*};
use leptos_use::{signal_debounced, use_window_scroll};

use crate::config::{SiteConfig, SITE_CONFIG};
use crate::effects::{parallax_offset, Frame, Typewriter};

use super::navbar::{follow_anchor, NavMenu};

#[component]
pub fn Hero() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    let timing = &config.timing;
    let menu = expect_context::<NavMenu>();
    let hero_ref = NodeRef::<html::Section>::new();

    let (_, scroll_y) = use_window_scroll();
    let scroll_y = signal_debounced(scroll_y, timing.parallax_debounce_ms);
    let (transform, set_transform) = signal(None::<f64>);
    Effect::new(move |_| {
        let y = scroll_y.get();
        let Some(hero) = hero_ref.get() else {
            return;
        };
        // past the hero the last offset stays put
        if let Some(offset) = parallax_offset(y, hero.offset_height() as f64, timing) {
            set_transform.set(Some(offset));
        }
    });
    let style = move || {
        transform
            .get()
            .map(|offset| format!("transform: translateY({offset}px);"))
            .unwrap_or_default()
    };

    view! {
        <section
            id="home"
            node_ref=hero_ref
            class="hero-section min-h-screen flex items-center pt-20"
            style=style
        >
            <div class="mx-auto max-w-6xl px-4 text-center lg:text-left">
                <h1 class="hero-title text-4xl lg:text-6xl font-bold mb-4">
                    "Hi, I'm " <TypedText text=config.owner.name.clone() />
                </h1>
                <p class="text-xl text-muted mb-2">{config.owner.title.clone()}</p>
                <p class="text-lg max-w-2xl mb-8">{config.owner.tagline.clone()}</p>
                <div class="hero-buttons flex flex-wrap gap-4 justify-center lg:justify-start">
                    <a
                        href="#projects"
                        class="btn btn-primary"
                        on:click=move |ev| follow_anchor(ev, "#projects", menu)
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn-outline"
                        on:click=move |ev| follow_anchor(ev, "#contact", menu)
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Types `text` out once after hydration. The server renders the full text.
#[component]
fn TypedText(text: String) -> impl IntoView {
    let timing = &SITE_CONFIG.timing;
    let (frame, set_frame) = signal(Frame {
        text: text.clone(),
        cursor: false,
    });
    let pending = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            play(Typewriter::new(&text, timing), set_frame, pending);
        }
    });
    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    view! {
        <span class=move || {
            if frame.with(|f| f.cursor) { "typewriter cursor" } else { "typewriter" }
        }>{move || frame.with(|f| f.text.clone())}</span>
    }
}

fn play(
    mut typewriter: Typewriter,
    frame: WriteSignal<Frame>,
    pending: StoredValue<Option<TimeoutHandle>>,
) {
    let Some((delay, next)) = typewriter.next() else {
        pending.set_value(None);
        return;
    };
    let scheduled = set_timeout_with_handle(
        move || {
            // the hero may have been unmounted in the meantime
            if frame.try_set(next).is_none() {
                play(typewriter, frame, pending);
            }
        },
        delay,
    );
    match scheduled {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(err) => log::error!("couldn't schedule typewriter frame: {err:?}"),
    }
}
