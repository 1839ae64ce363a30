use leptos::prelude::*;

/// Link opening in a new tab. Clicks are logged; navigation is left alone.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let logged = href.clone();
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=class
            on:click=move |_| log::info!("Opening external link: {logged}")
        >
            {children()}
        </a>
    }
}

#[component]
pub fn MailLink(#[prop(into)] email: String, #[prop(into, optional)] class: String) -> impl IntoView {
    let href = format!("mailto:{email}");
    let logged = href.clone();
    view! {
        <a href=href class=class on:click=move |_| log::info!("Opening email client for: {logged}")>
            {email}
        </a>
    }
}

/// `<img>` that reports load failures.
#[component]
pub fn LoggedImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let logged = src.clone();
    view! {
        <img
            src=src
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| log::warn!("Image failed to load: {logged}")
        />
    }
}
