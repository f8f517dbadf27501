use leptos::{component, view, Signal, IntoView, create_signal, SignalGet, SignalUpdate};

/// Collapsible list of trains and their stroke colors
#[component]
pub fn Legend(
    /// Train id and color, in diagram order
    trains: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(true);

    view! {
        <div class="legend-container">
            <button
                class="legend-button"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                title="Trains"
            >
                <i class="fa-solid fa-train"></i>
                {move || format!(" {}", trains.get().len())}
            </button>

            {move || {
                if is_open.get() {
                    view! {
                        <ul class="legend-items">
                            {trains.get().into_iter().map(|(train_id, color)| view! {
                                <li class="legend-item">
                                    <span class="legend-swatch" style=format!("background: {color};")></span>
                                    <span class="legend-label">{train_id}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_view()
                } else {
                    ().into_view()
                }
            }}
        </div>
    }
}
