use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::{SiteConfig, SITE_CONFIG};
use crate::effects::{active_section, fragment, scroll_target, NavbarStyle, SectionBounds};

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy)]
pub struct NavMenu(RwSignal<bool>);

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl NavMenu {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        if self.0.get_untracked() {
            self.0.set(false);
        }
    }
}

/// Click handler for anchors that may point into the page.
///
/// Fragment links scroll smoothly to their section (leaving room for the fixed
/// navbar) and close the mobile menu; anything else navigates normally.
pub fn follow_anchor(ev: MouseEvent, href: &str, menu: NavMenu) {
    if !href.starts_with('#') {
        return;
    }
    ev.prevent_default();
    if scroll_to_fragment(href, SITE_CONFIG.timing.navbar_height) {
        menu.close();
    }
}

fn scroll_to_fragment(href: &str, navbar_height: f64) -> bool {
    let Some(target) = fragment(href).and_then(section_element) else {
        log::debug!("no section for {href}");
        return false;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(target.offset_top() as f64, navbar_height));
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
    true
}

fn section_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let el = section_element(id)?;
            Some(SectionBounds::new(
                id.clone(),
                el.offset_top() as f64,
                el.offset_height() as f64,
            ))
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config: &'static SiteConfig = &SITE_CONFIG;
    let timing = &config.timing;
    let menu = expect_context::<NavMenu>();
    let (_, scroll_y) = use_window_scroll();
    let (active, set_active) = signal(None::<String>);

    // runs once on mount, then on every scroll
    let section_ids = config.section_ids();
    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = section_bounds(&section_ids);
        let current = active_section(&bounds, y, timing).map(str::to_string);
        if active.get_untracked() != current {
            set_active.set(current);
        }
    });

    let style = move || NavbarStyle::for_scroll(scroll_y.get(), timing).css();

    view! {
        <nav class="custom-navbar fixed top-0 inset-x-0 z-50 transition-all" style=style>
            <div class="mx-auto max-w-6xl px-4 flex flex-wrap items-center justify-between min-h-20">
                <a
                    href="#home"
                    class="navbar-brand text-xl font-bold text-primary"
                    on:click=move |ev| follow_anchor(ev, "#home", menu)
                >
                    {config.owner.name.clone()}
                </a>
                <button
                    type="button"
                    class="navbar-toggler md:hidden p-2"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu.toggle()
                >
                    <i class="fas fa-bars" />
                </button>
                <div class=move || {
                    if menu.is_open() {
                        "navbar-collapse show w-full md:w-auto"
                    } else {
                        "navbar-collapse hidden md:block"
                    }
                }>
                    <ul class="navbar-nav flex flex-col md:flex-row gap-2 md:gap-6 py-2 md:py-0">
                        {config
                            .nav
                            .iter()
                            .map(|item| {
                                let href = item.href();
                                let link_href = href.clone();
                                let id = item.id.as_str();
                                let is_active = move || {
                                    active.with(|a| a.as_deref() == Some(id))
                                };
                                view! {
                                    <li>
                                        <a
                                            class=move || {
                                                if is_active() { "nav-link active" } else { "nav-link" }
                                            }
                                            href=link_href
                                            on:click=move |ev| follow_anchor(ev, &href, menu)
                                        >
                                            {item.label.clone()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
