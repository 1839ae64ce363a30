use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::config::SITE_CONFIG;
use crate::effects::{hover_style, HoverEffect};

/// Fades its content in the first time it scrolls into view.
///
/// With `hover` set, the same element also gets the hover transform, so cards
/// fade in and lift as one node.
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: Option<String>,
    #[prop(optional)] hover: Option<HoverEffect>,
    /// CSS `animation-delay` for staggered entrances.
    #[prop(into, optional)]
    delay: Option<String>,
    children: Children,
) -> impl IntoView {
    let timing = &SITE_CONFIG.timing;
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let (hovered, set_hovered) = signal(None::<bool>);
    let style = move || hover_style(hover.zip(hovered.get()), delay.as_deref());
    let on_hover = move |over: bool| {
        if hover.is_some() {
            set_hovered.set(Some(over));
        }
    };

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![timing.reveal_threshold])
            .root_margin(timing.reveal_root_margin.clone()),
    );

    view! {
        <div
            node_ref=target
            id=id
            style=style
            on:mouseenter=move |_| on_hover(true)
            on:mouseleave=move |_| on_hover(false)
            class=move || {
                if revealed.get() {
                    format!("{class} fade-in active")
                } else {
                    format!("{class} fade-in")
                }
            }
        >
            {children()}
        </div>
    }
}

/// Applies a hover transform to its content.
#[component]
pub fn Hover(
    effect: HoverEffect,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<bool>);
    let style = move || hover_style(hovered.get().map(|over| (effect, over)), None);

    view! {
        <div
            class=class
            style=style
            on:mouseenter=move |_| set_hovered.set(Some(true))
            on:mouseleave=move |_| set_hovered.set(Some(false))
        >
            {children()}
        </div>
    }
}
