use leptos::*;
use leptos_meta::*;
use crate::colors::train_colors;
use crate::components::diagram_canvas::DiagramCanvas;
use crate::components::error_list::ErrorList;
use crate::components::importer::Importer;
use crate::components::legend::Legend;
use crate::components::settings::Settings;
use crate::diagram::{prepare_diagram, DiagramModel};
use crate::error::{DiagramError, MissingTimeWarning};
use crate::import::ImportReport;
use crate::models::{RenderConfig, StationOrder};
use crate::theme::use_theme;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = use_theme();
    let (config, set_config_signal) = create_signal(RenderConfig::load());
    let (report, set_report) = create_signal(ImportReport::default());
    let (station_order, set_station_order) = create_signal(None::<StationOrder>);
    let (warnings, set_warnings) = create_signal(Vec::<MissingTimeWarning>::new());

    let set_config = move |next: RenderConfig| {
        if let Err(e) = next.save() {
            leptos::logging::error!("Failed to save render settings: {e}");
        }
        set_config_signal.set(next);
    };

    let has_data = create_memo(move |_| report.with(|r| r.station_count > 0));
    let padding = create_memo(move |_| config.with(RenderConfig::padding));

    let diagram = create_memo(move |_| -> Option<Result<DiagramModel, DiagramError>> {
        if !has_data.get() {
            return None;
        }
        let result = report.with(|r| {
            station_order.with(|order| prepare_diagram(&r.records, order.as_ref(), padding.get()))
        });
        if let Err(e) = &result {
            leptos::logging::error!("{e}");
        }
        Some(result)
    });

    let model = Signal::derive(move || diagram.get().and_then(Result::ok));

    create_effect(move |_| {
        if model.with(Option::is_none) {
            set_warnings.set(Vec::new());
        }
    });
    let legend_trains = Signal::derive(move || {
        diagram.with(|d| match d {
            Some(Ok(model)) => train_colors(&model.segments).into_iter().collect(),
            _ => Vec::new(),
        })
    });
    let title = move || config.with(|c| c.locale.title());

    view! {
        <Stylesheet id="leptos" href="/pkg/train_diagram.css"/>
        <Title text=title/>

        <div class=move || format!("app {}", theme.get().css_class())>
            <header class="toolbar">
                <span class="toolbar-title">{title}</span>
                <Importer set_report=set_report set_station_order=set_station_order />
                <Legend trains=legend_trains />
                <ErrorList
                    issues=Signal::derive(move || report.with(|r| r.issues.clone()))
                    warnings=warnings.into()
                />
                <Settings config=config.into() set_config=set_config />
                {move || station_order.with(|order| order.as_ref().map(|o| view! {
                    <span class="toolbar-status">{format!("{} stations ordered", o.len())}</span>
                }))}
            </header>

            <main class="diagram-area">
                {move || match diagram.get() {
                    None => view! {
                        <p class="placeholder">"Load one timetable file per station to draw the diagram."</p>
                    }.into_view(),
                    Some(Err(e)) => view! {
                        <p class="diagram-error">{e.to_string()}</p>
                    }.into_view(),
                    Some(Ok(_)) => ().into_view(),
                }}
                <Show when=move || model.with(Option::is_some)>
                    <DiagramCanvas
                        model=model
                        config=config.into()
                        theme=theme
                        set_warnings=set_warnings
                    />
                </Show>
            </main>
        </div>
    }
}
