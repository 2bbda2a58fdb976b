use std::rc::Rc;

use coursesite_core::catalog::page_entries;
use coursesite_core::COURSE_TITLE;
use gloo::events::EventListener;
use yew::prelude::*;

use crate::app_router::{self, Route};
use crate::pages::{HomePage, NotFoundPage, ResourcePage};
use crate::preload::{PreloadCoordinator, PreloadHost};

/// App-scoped services handed to pages through a Yew context.
#[derive(Clone)]
pub(crate) struct SiteContext {
    pub(crate) preload: Rc<PreloadCoordinator>,
}

impl SiteContext {
    pub(crate) fn new() -> Self {
        Self {
            preload: PreloadCoordinator::new(),
        }
    }
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.preload, &other.preload)
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    current: Route,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let link = |route: Route, label: &'static str| {
        let active = route == props.current;
        html! {
            <a
                class={classes!("nav-link", active.then_some("active"))}
                href={route.href()}
                aria-current={active.then_some("page")}
            >
                { label }
            </a>
        }
    };
    let page_links: Html = page_entries()
        .map(|entry| link(Route::Page(entry), entry.title))
        .collect();
    html! {
        <nav class="site-nav">
            {link(Route::Home, COURSE_TITLE)}
            <div class="nav-pages">{page_links}</div>
        </nav>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let site = use_memo((), |_| SiteContext::new());
    let route = use_state(app_router::current_route);
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| {
                    let next = app_router::current_route();
                    gloo::console::log!("route", next.href());
                    route.set(next);
                })
            });
            move || drop(listener)
        });
    }

    let current = *route;
    let page = match current {
        Route::Home => html! { <HomePage /> },
        Route::Page(entry) => html! { <ResourcePage key={entry.id} entry={entry} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! {
        <ContextProvider<SiteContext> context={(*site).clone()}>
            <NavBar current={current} />
            <main class="site-main">{page}</main>
            <footer class="site-footer">{ COURSE_TITLE }</footer>
            <PreloadHost />
        </ContextProvider<SiteContext>>
    }
}
