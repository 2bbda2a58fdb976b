use std::cell::RefCell;
use std::rc::Rc;

use coursesite_core::{PreloadRegistry, PreloadReport, ResourceDescriptor};
use web_sys::Event;
use yew::prelude::*;

use crate::app::SiteContext;

const PRELOAD_HOST_STYLE: &str = "position: fixed; left: -10000px; top: 0; width: 1280px; \
     height: 800px; visibility: hidden; pointer-events: none; overflow: hidden;";

pub(crate) type PreloadSubscriber = Rc<dyn Fn()>;

/// Owns the preload registry for one app instance and tells the host when
/// new hidden surfaces have to be mounted.
pub(crate) struct PreloadCoordinator {
    registry: RefCell<PreloadRegistry>,
    subscribers: Rc<RefCell<Vec<PreloadSubscriber>>>,
}

impl PreloadCoordinator {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            registry: RefCell::new(PreloadRegistry::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn ensure_preloaded(&self, descriptors: &[ResourceDescriptor]) -> PreloadReport {
        let report = self.registry.borrow_mut().ensure_preloaded(descriptors);
        for id in &report.url_conflicts {
            gloo::console::warn!("preload url changed, keeping first submission", id.to_string());
        }
        if report.is_noop() {
            return report;
        }
        for descriptor in &report.started {
            gloo::console::log!(
                "preload start",
                descriptor.id().to_string(),
                descriptor.source_url().to_string()
            );
        }
        self.notify_subscribers();
        report
    }

    pub(crate) fn instances(&self) -> Vec<ResourceDescriptor> {
        self.registry.borrow().instances().to_vec()
    }

    pub(crate) fn subscribe(&self, subscriber: PreloadSubscriber) -> PreloadSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        PreloadSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify_subscribers(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct PreloadSubscription {
    subscriber: PreloadSubscriber,
    subscribers: Rc<RefCell<Vec<PreloadSubscriber>>>,
}

impl Drop for PreloadSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[derive(Properties, PartialEq)]
struct PreloadFrameProps {
    descriptor: ResourceDescriptor,
}

#[function_component(PreloadFrame)]
fn preload_frame(props: &PreloadFrameProps) -> Html {
    let descriptor = &props.descriptor;
    // Outcome is not tracked; the visible view loads on its own.
    let onload = {
        let id = descriptor.id().to_string();
        Callback::from(move |_: Event| {
            gloo::console::log!("preload warm", id.clone());
        })
    };
    html! {
        <iframe
            src={descriptor.source_url().to_string()}
            title={format!("preload {}", descriptor.id())}
            loading="eager"
            tabindex="-1"
            allow={descriptor.kind().allow_policy()}
            data-preload-id={descriptor.id().to_string()}
            onload={onload}
        ></iframe>
    }
}

/// Off-viewport container for preload surfaces. Mounted once at the app
/// root so surfaces survive navigation.
#[function_component(PreloadHost)]
pub(crate) fn preload_host() -> Html {
    let site = use_context::<SiteContext>();
    let instances = use_state(Vec::<ResourceDescriptor>::new);
    {
        let instances = instances.clone();
        use_effect_with(site, move |site| {
            let subscription = site.as_ref().map(|site| {
                let coordinator = site.preload.clone();
                instances.set(coordinator.instances());
                let coordinator_for_cb = coordinator.clone();
                coordinator.subscribe(Rc::new(move || {
                    instances.set(coordinator_for_cb.instances());
                }))
            });
            if subscription.is_none() {
                gloo::console::warn!("preload host mounted without site context");
            }
            move || drop(subscription)
        });
    }
    let frames: Html = instances
        .iter()
        .map(|descriptor| {
            html! {
                <PreloadFrame
                    key={descriptor.id().to_string()}
                    descriptor={descriptor.clone()}
                />
            }
        })
        .collect();
    html! {
        <div class="preload-host" aria-hidden="true" style={PRELOAD_HOST_STYLE}>
            {frames}
        </div>
    }
}
