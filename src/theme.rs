use leptos::{create_signal, create_effect, on_cleanup, ReadSignal, SignalSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    /// Class put on the app root so the stylesheet can follow the canvas
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Reactive theme that follows the system color scheme
///
/// # Panics
///
/// Panics if the browser window or media query API is not available.
#[must_use]
pub fn use_theme() -> ReadSignal<Theme> {
    let (theme, set_theme) = create_signal(Theme::default());

    create_effect(move |_| {
        let window = web_sys::window().expect("window");
        let media_query = window
            .match_media(DARK_SCHEME_QUERY)
            .expect("matchMedia")
            .expect("media query list");

        set_theme.set(Theme::from_dark(media_query.matches()));

        let closure = Closure::wrap(Box::new(move |event: wasm_bindgen::JsValue| {
            let Ok(matches) = js_sys::Reflect::get(&event, &"matches".into()) else { return };
            let Some(is_dark) = matches.as_bool() else { return };
            crate::log!("Color scheme changed, dark = {}", is_dark);
            set_theme.set(Theme::from_dark(is_dark));
        }) as Box<dyn FnMut(_)>);

        if media_query
            .add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            .is_err()
        {
            leptos::logging::warn!("Could not follow color scheme changes");
        }

        on_cleanup(move || {
            let _ = media_query.remove_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        });
    });

    theme
}
