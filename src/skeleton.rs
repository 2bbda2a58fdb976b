use yew::prelude::*;

const LINE_WIDTHS: &[u32] = &[92, 78, 85, 64, 71];

#[derive(Properties, PartialEq)]
pub(crate) struct SkeletonProps {
    #[prop_or(3)]
    pub(crate) lines: usize,
    /// Draws a large block above the lines, for scene-shaped content.
    #[prop_or_default]
    pub(crate) block: bool,
    #[prop_or_default]
    pub(crate) label: Option<AttrValue>,
}

#[function_component(Skeleton)]
pub(crate) fn skeleton(props: &SkeletonProps) -> Html {
    let block = if props.block {
        html! { <div class="skeleton-block skeleton-shimmer"></div> }
    } else {
        html! {}
    };
    let lines: Html = (0..props.lines)
        .map(|index| {
            let width = LINE_WIDTHS[index % LINE_WIDTHS.len()];
            html! {
                <div
                    class="skeleton-line skeleton-shimmer"
                    style={format!("width: {width}%;")}
                ></div>
            }
        })
        .collect();
    let label = match props.label.as_ref() {
        Some(text) if !text.trim().is_empty() => {
            html! { <p class="skeleton-label">{ text.clone() }</p> }
        }
        _ => html! {},
    };
    html! {
        <div class="skeleton">
            {block}
            {lines}
            {label}
        </div>
    }
}
