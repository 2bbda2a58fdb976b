use coursesite_core::catalog::{self, page_entries, CatalogEntry};
use coursesite_core::{COURSE_TAGLINE, COURSE_TITLE};
use yew::prelude::*;

use crate::app::SiteContext;
use crate::app_router::Route;
use crate::embedded_view::EmbeddedResourceView;

/// Entry page. Every mount asks the coordinator to warm the page resources;
/// the registry makes repeat visits free.
#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let site = use_context::<SiteContext>();
    use_effect_with((), move |_| {
        match site {
            Some(site) => {
                site.preload.ensure_preloaded(&catalog::preload_descriptors());
            }
            None => gloo::console::warn!("home mounted without site context, preload skipped"),
        }
        || ()
    });

    let hero = match catalog::hero_entry().and_then(|entry| Some((entry, entry.descriptor()?))) {
        Some((entry, descriptor)) => html! {
            <EmbeddedResourceView
                key={entry.id}
                descriptor={descriptor}
                title={AttrValue::Static(entry.title)}
                height={entry.height}
            />
        },
        None => html! {},
    };
    let tagline = if COURSE_TAGLINE.is_empty() {
        html! {}
    } else {
        html! { <p class="hero-tagline">{ COURSE_TAGLINE }</p> }
    };
    let cards: Html = page_entries()
        .map(|entry| {
            html! {
                <li class="page-card">
                    <a href={Route::Page(entry).href()}>{ entry.title }</a>
                </li>
            }
        })
        .collect();
    html! {
        <section class="home">
            <header class="hero">
                <h1 class="hero-title">{ COURSE_TITLE }</h1>
                {tagline}
            </header>
            <div class="hero-scene">{hero}</div>
            <ul class="page-cards">{cards}</ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ResourcePageProps {
    pub(crate) entry: &'static CatalogEntry,
}

#[function_component(ResourcePage)]
pub(crate) fn resource_page(props: &ResourcePageProps) -> Html {
    let entry = props.entry;
    let body = match entry.descriptor() {
        Some(descriptor) => html! {
            <EmbeddedResourceView
                key={entry.id}
                descriptor={descriptor}
                title={AttrValue::Static(entry.title)}
                height={entry.height}
            />
        },
        None => {
            gloo::console::warn!("catalog entry rejected", entry.id);
            html! { <p class="page-error">{ "This page is unavailable." }</p> }
        }
    };
    html! {
        <section class="resource-page">
            <h1>{ entry.title }</h1>
            {body}
        </section>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h1>{ "Page not found" }</h1>
            <a href={Route::Home.href()}>{ "Back to the course home" }</a>
        </section>
    }
}
