use leptos::*;
use crate::diagram::HoverInfo;
use crate::models::Locale;

#[component]
pub fn SegmentTooltip(
    hovered: ReadSignal<Option<HoverInfo>>,
    locale: Signal<Locale>,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(hover) = hovered.get() {
                let train = if hover.train_id.is_empty() {
                    locale.get().no_info().to_string()
                } else {
                    hover.train_id.clone()
                };
                let swatch = hover.segment.color.clone().unwrap_or_default();

                view! {
                    <div
                        class="segment-tooltip"
                        style=format!("left: {}px; top: {}px;", hover.x + 10.0, hover.y - 30.0)
                    >
                        <span class="tooltip-swatch" style=format!("background: {swatch};")></span>
                        <strong>{train}</strong>
                        " "
                        <span>{hover.label}</span>
                    </div>
                }.into_view()
            } else {
                view! { <div class="segment-tooltip-hidden"></div> }.into_view()
            }
        }}
    }
}
