use leptos::{component, view, Signal, IntoView, create_signal, SignalGet, SignalUpdate, event_target_value, SignalWith};
use crate::models::{Locale, RenderConfig};

#[component]
#[allow(clippy::too_many_lines)]
pub fn Settings(
    config: Signal<RenderConfig>,
    set_config: impl Fn(RenderConfig) + 'static + Copy,
) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(false);

    let update = move |change: &dyn Fn(&mut RenderConfig)| {
        let mut next = config.get();
        change(&mut next);
        set_config(next);
    };

    let handle_locale_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if let Some(locale) = Locale::from_code(&value) {
            update(&|c: &mut RenderConfig| c.locale = locale);
        }
    };

    let handle_font_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let family = value.trim().to_string();
        if !family.is_empty() {
            update(&|c: &mut RenderConfig| c.font_family.clone_from(&family));
        }
    };

    let handle_tolerance_change = move |ev: web_sys::Event| {
        if let Ok(tolerance) = event_target_value(&ev).parse::<f64>() {
            update(&|c: &mut RenderConfig| c.hit_tolerance = tolerance.clamp(1.0, 50.0));
        }
    };

    let handle_stroke_change = move |ev: web_sys::Event| {
        if let Ok(width) = event_target_value(&ev).parse::<f64>() {
            update(&|c: &mut RenderConfig| c.stroke_width = width.clamp(0.5, 20.0));
        }
    };

    let handle_padding_change = move |ev: web_sys::Event| {
        if let Ok(minutes) = event_target_value(&ev).parse::<i64>() {
            update(&|c: &mut RenderConfig| c.padding_minutes = minutes.clamp(0, 720));
        }
    };

    view! {
        <div class="settings-container">
            <button
                class="settings-button"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
                title="Settings"
            >
                <i class="fa-solid fa-gear"></i>
            </button>

            {move || is_open.get().then(|| view! {
                <div class="settings-popover">
                    <div class="settings-row">
                        <label>"Language"</label>
                        <select on:change=handle_locale_change>
                            {Locale::ALL.into_iter().map(|locale| view! {
                                <option
                                    value=locale.code()
                                    selected=move || config.with(|c| c.locale == locale)
                                >
                                    {locale.display_name()}
                                </option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="settings-row">
                        <label>"Font family"</label>
                        <input
                            type="text"
                            prop:value=move || config.with(|c| c.font_family.clone())
                            on:change=handle_font_change
                        />
                    </div>
                    <div class="settings-row">
                        <label>"Hover tolerance (px)"</label>
                        <input
                            type="number"
                            min="1"
                            step="1"
                            prop:value=move || config.with(|c| c.hit_tolerance.to_string())
                            on:change=handle_tolerance_change
                        />
                    </div>
                    <div class="settings-row">
                        <label>"Line width (px)"</label>
                        <input
                            type="number"
                            min="0.5"
                            step="0.5"
                            prop:value=move || config.with(|c| c.stroke_width.to_string())
                            on:change=handle_stroke_change
                        />
                    </div>
                    <div class="settings-row">
                        <label>"Time padding (min)"</label>
                        <input
                            type="number"
                            min="0"
                            step="5"
                            prop:value=move || config.with(|c| c.padding_minutes.to_string())
                            on:change=handle_padding_change
                        />
                    </div>
                    <div class="settings-row">
                        <button on:click=move |_| set_config(RenderConfig::default())>"Reset to defaults"</button>
                    </div>
                </div>
            })}
        </div>
    }
}
