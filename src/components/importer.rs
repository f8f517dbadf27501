use leptos::{component, view, WriteSignal, IntoView, create_node_ref, spawn_local, SignalSet, html, NodeRef};
use wasm_bindgen_futures::JsFuture;
use crate::error::ImportError;
use crate::import::{load_station_files, parse_station_order, ImportReport, StationFile};
use crate::models::StationOrder;

/// Read every selected file as text, reporting the ones the browser would not hand over
async fn read_files(files: web_sys::FileList) -> (Vec<StationFile>, Vec<ImportError>) {
    let mut read = Vec::new();
    let mut failed = Vec::new();

    for index in 0..files.length() {
        let Some(file) = files.get(index) else { continue };
        let file_name = file.name();

        match JsFuture::from(file.text()).await {
            Ok(value) => match value.as_string() {
                Some(contents) => read.push(StationFile::new(file_name, contents)),
                None => failed.push(ImportError::UnreadableFile {
                    file: file_name,
                    reason: "contents are not text".to_string(),
                }),
            },
            Err(e) => failed.push(ImportError::UnreadableFile {
                file: file_name,
                reason: format!("{e:?}"),
            }),
        }
    }

    (read, failed)
}

fn selected_files(input_ref: NodeRef<html::Input>) -> Option<web_sys::FileList> {
    let input = input_ref.get()?;
    let files = input.files()?;
    (files.length() > 0).then_some(files)
}

fn clear_input(input_ref: NodeRef<html::Input>) {
    if let Some(input) = input_ref.get() {
        input.set_value("");
    }
}

#[component]
#[must_use]
pub fn Importer(
    set_report: WriteSignal<ImportReport>,
    set_station_order: WriteSignal<Option<StationOrder>>,
) -> impl IntoView {
    let stations_input_ref = create_node_ref::<html::Input>();
    let order_input_ref = create_node_ref::<html::Input>();

    let handle_stations_change = move |_| {
        let Some(files) = selected_files(stations_input_ref) else { return };

        spawn_local(async move {
            let (files, mut issues) = read_files(files).await;
            for issue in &issues {
                leptos::logging::warn!("{issue}");
            }

            let mut report = load_station_files(&files);
            issues.append(&mut report.issues);
            report.issues = issues;

            leptos::logging::log!(
                "Loaded {} records from {} stations ({} issues)",
                report.records.len(),
                report.station_count,
                report.issues.len()
            );
            set_report.set(report);
            clear_input(stations_input_ref);
        });
    };

    let handle_order_change = move |_| {
        let Some(files) = selected_files(order_input_ref) else { return };

        spawn_local(async move {
            let (files, unreadable) = read_files(files).await;
            for issue in &unreadable {
                leptos::logging::error!("Failed to read station order: {issue}");
            }

            if let Some(file) = files.first() {
                let order = parse_station_order(&file.contents);
                leptos::logging::log!("Station order from {}: {} stations", file.file_name, order.len());
                set_station_order.set(Some(order));
            }
            clear_input(order_input_ref);
        });
    };

    view! {
        <input
            type="file"
            accept=".txt"
            multiple=true
            node_ref=stations_input_ref
            on:change=handle_stations_change
            style="display: none;"
        />
        <input
            type="file"
            node_ref=order_input_ref
            on:change=handle_order_change
            style="display: none;"
        />
        <button
            class="import-button"
            on:click=move |_| {
                if let Some(input) = stations_input_ref.get() {
                    input.click();
                }
            }
            title="Load station timetables (one .txt file per station)"
        >
            <i class="fa-solid fa-file-import"></i>
        </button>
        <button
            class="import-button"
            on:click=move |_| {
                if let Some(input) = order_input_ref.get() {
                    input.click();
                }
            }
            title="Load station order (one station name per line)"
        >
            <i class="fa-solid fa-list-ol"></i>
        </button>
        <button
            class="import-button"
            on:click=move |_| set_station_order.set(None)
            title="Clear station order"
        >
            <i class="fa-solid fa-eraser"></i>
        </button>
    }
}
