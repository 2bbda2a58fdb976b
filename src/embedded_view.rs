use coursesite_core::catalog::DEFAULT_EMBED_HEIGHT;
use coursesite_core::{Completion, LoadLatch, LoadState, ResourceDescriptor, ResourceKind};
use web_sys::Event;
use yew::prelude::*;

use crate::skeleton::Skeleton;

const FADE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub(crate) struct EmbeddedResourceViewProps {
    pub(crate) descriptor: ResourceDescriptor,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or(DEFAULT_EMBED_HEIGHT)]
    pub(crate) height: u32,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
}

fn placeholder_style(state: LoadState) -> String {
    if state.placeholder_visible() {
        format!("opacity: 1; visibility: visible; transition: opacity {FADE_MS}ms ease;")
    } else {
        format!(
            "opacity: 0; visibility: hidden; transition: opacity {FADE_MS}ms ease, visibility 0s linear {FADE_MS}ms;"
        )
    }
}

fn surface_style(state: LoadState) -> String {
    format!(
        "opacity: {}; transition: opacity {FADE_MS}ms ease;",
        state.content_opacity()
    )
}

/// Load state of one mounted view plus the latch its surface signals into.
/// The latch detaches when the calling component unmounts.
#[hook]
fn use_load_latch() -> (LoadState, LoadLatch) {
    let load_state = use_state(|| LoadState::Loading);
    let latch = use_memo((), |_| LoadLatch::new());
    {
        let latch = (*latch).clone();
        let load_state = load_state.clone();
        use_effect_with((), move |_| {
            latch.on_loaded(move || load_state.set(LoadState::Loaded));
            move || latch.detach()
        });
    }
    (*load_state, (*latch).clone())
}

fn on_surface_load(latch: &LoadLatch, id: &str) -> Completion {
    let completion = latch.complete();
    match completion {
        Completion::Transitioned => gloo::console::log!("embed loaded", id),
        Completion::AlreadyLoaded => {}
        Completion::Detached => gloo::console::log!("embed load after teardown ignored", id),
    }
    completion
}

/// Shows a skeleton over an eagerly mounted iframe until the iframe reports
/// `load`, then fades the iframe in. Parents key this component by resource
/// id; a new resource means a new instance.
#[function_component(EmbeddedResourceView)]
pub(crate) fn embedded_resource_view(props: &EmbeddedResourceViewProps) -> Html {
    let (state, latch) = use_load_latch();
    let descriptor = &props.descriptor;
    let onload = {
        let id = descriptor.id().to_string();
        Callback::from(move |_: Event| {
            on_surface_load(&latch, &id);
        })
    };

    let kind = descriptor.kind();
    let kind_class = match kind {
        ResourceKind::Document => "embed-document",
        ResourceKind::Scene => "embed-scene",
    };
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::from(descriptor.id().to_string()));
    let placeholder_text = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::Static(kind.default_placeholder()));
    let placeholder_lines: usize = match kind {
        ResourceKind::Document => 6,
        ResourceKind::Scene => 2,
    };
    let placeholder_hidden = if state.placeholder_visible() {
        "false"
    } else {
        "true"
    };
    html! {
        <div
            class={classes!("embed", kind_class, state.as_str())}
            style={format!("height: {}px;", props.height)}
            data-resource={descriptor.id().to_string()}
            data-state={state.as_str()}
        >
            <iframe
                class="embed-surface"
                src={descriptor.source_url().to_string()}
                title={title}
                loading="eager"
                allow={kind.allow_policy()}
                allowfullscreen={true}
                style={surface_style(state)}
                onload={onload}
            ></iframe>
            <div
                class="embed-placeholder"
                role="status"
                aria-hidden={placeholder_hidden}
                style={placeholder_style(state)}
            >
                <Skeleton
                    lines={placeholder_lines}
                    block={matches!(kind, ResourceKind::Scene)}
                    label={placeholder_text}
                />
            </div>
        </div>
    }
}
