use leptos::*;
use web_sys::{MouseEvent, WheelEvent};
use wasm_bindgen::{JsCast, closure::Closure};
use crate::components::canvas_viewport::{self, ViewportSignals};
use crate::components::segment_tooltip::SegmentTooltip;
use crate::diagram::{DiagramDimensions, DiagramModel, HoverInfo, RenderedDiagram};
use crate::error::MissingTimeWarning;
use crate::models::RenderConfig;
use crate::theme::Theme;
use super::painter;

fn canvas_position(canvas: &web_sys::HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top())
}

/// Size the backing store to the element's layout size
fn fit_canvas(canvas: &web_sys::HtmlCanvasElement) -> DiagramDimensions {
    // Browser dimensions are always non-negative
    #[allow(clippy::cast_sign_loss)]
    let width = canvas.client_width() as u32;
    #[allow(clippy::cast_sign_loss)]
    let height = canvas.client_height() as u32;

    if width > 0 && height > 0 && (canvas.width() != width || canvas.height() != height) {
        canvas.set_width(width);
        canvas.set_height(height);
    }

    DiagramDimensions::new(f64::from(canvas.width()), f64::from(canvas.height()))
}

/// Log and hand over the scene's warnings when they differ from the last frame's
fn publish_warnings(
    scene: &RenderedDiagram,
    published: StoredValue<Vec<MissingTimeWarning>>,
    set_warnings: WriteSignal<Vec<MissingTimeWarning>>,
) {
    if published.with_value(|current| current == &scene.warnings) {
        return;
    }
    for warning in &scene.warnings {
        leptos::logging::warn!("{warning}");
    }
    published.set_value(scene.warnings.clone());
    set_warnings.set(scene.warnings.clone());
}

#[allow(clippy::too_many_arguments)]
fn setup_render_effect(
    canvas_ref: NodeRef<html::Canvas>,
    model: Signal<Option<DiagramModel>>,
    config: Signal<RenderConfig>,
    theme: ReadSignal<Theme>,
    viewport: ViewportSignals,
    scene: StoredValue<Option<RenderedDiagram>>,
    set_warnings: WriteSignal<Vec<MissingTimeWarning>>,
) {
    let published = store_value(Vec::<MissingTimeWarning>::new());
    let (render_requested, set_render_requested) = create_signal(false);

    create_effect(move |_| {
        // Track all dependencies
        let _ = model.with(Option::is_some);
        let _ = config.get();
        let _ = theme.get();
        let _ = viewport.state();

        if render_requested.get_untracked() {
            return;
        }
        set_render_requested.set(true);

        let window = web_sys::window().expect("window");
        let callback = Closure::once(move || {
            set_render_requested.set(false);

            let Some(canvas) = canvas_ref.get_untracked() else { return };
            let canvas_elem: &web_sys::HtmlCanvasElement = &canvas;
            let dims = fit_canvas(canvas_elem);

            let Some(rendered) = model.with_untracked(|m| m.as_ref().map(|m| m.render(dims, viewport.state_untracked()))) else {
                scene.set_value(None);
                set_warnings.set(Vec::new());
                return;
            };

            let Ok(Some(context)) = canvas_elem.get_context("2d") else {
                leptos::logging::warn!("Failed to get 2D context");
                return;
            };
            let Ok(ctx) = context.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
                leptos::logging::warn!("Failed to cast to 2D rendering context");
                return;
            };

            config.with_untracked(|config| painter::paint(&ctx, &rendered, config, theme.get_untracked()));
            crate::log!("Painted {} strokes", rendered.strokes.len());

            publish_warnings(&rendered, published, set_warnings);
            scene.set_value(Some(rendered));
        });

        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        callback.forget();
    });
}

#[component]
#[must_use]
pub fn DiagramCanvas(
    model: Signal<Option<DiagramModel>>,
    config: Signal<RenderConfig>,
    theme: ReadSignal<Theme>,
    set_warnings: WriteSignal<Vec<MissingTimeWarning>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let viewport = canvas_viewport::create_viewport_signals();
    let scene = store_value(None::<RenderedDiagram>);
    let (hovered, set_hovered) = create_signal(None::<HoverInfo>);

    // A new diagram starts from the fitted view
    create_effect(move |_| {
        let _ = model.with(Option::is_some);
        viewport.reset();
        set_hovered.set(None);
    });

    setup_render_effect(canvas_ref, model, config, theme, viewport, scene, set_warnings);

    let handle_mouse_down = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get() else { return };
        if ev.button() == 2 || ev.ctrl_key() {
            let (x, y) = canvas_position(&canvas, &ev);
            set_hovered.set(None);
            canvas_viewport::handle_pan_start(x, y, &viewport);
        }
    };

    let handle_mouse_move = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get() else { return };
        let (x, y) = canvas_position(&canvas, &ev);

        if viewport.is_panning.get() {
            canvas_viewport::handle_pan_move(x, y, &viewport);
            return;
        }

        let tolerance = config.with(|c| c.hit_tolerance);
        let hover = scene.with_value(|scene| scene.as_ref().and_then(|s| s.hit_test(x, y, tolerance)));
        if hovered.with_untracked(|current| current != &hover) {
            set_hovered.set(hover);
        }
    };

    let handle_mouse_up = move |_ev: MouseEvent| {
        canvas_viewport::handle_pan_end(&viewport);
    };

    let handle_mouse_leave = move |_ev: MouseEvent| {
        canvas_viewport::handle_pan_end(&viewport);
        set_hovered.set(None);
    };

    let handle_wheel = move |ev: WheelEvent| {
        ev.prevent_default();

        let Some(canvas) = canvas_ref.get() else { return };
        let (mouse_x, mouse_y) = canvas_position(&canvas, &ev);
        let area = DiagramDimensions::new(f64::from(canvas.width()), f64::from(canvas.height())).graph_area();

        if area.contains(mouse_x, mouse_y) {
            canvas_viewport::handle_zoom(&ev, mouse_x - area.x, mouse_y - area.y, &viewport);
        }
    };

    view! {
        <div class="canvas-container" style="position: relative;">
            <canvas
                node_ref=canvas_ref
                class="diagram-canvas"
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_mouse_up
                on:mouseleave=handle_mouse_leave
                on:wheel=handle_wheel
                on:contextmenu=|ev| ev.prevent_default()
                on:dblclick=move |_| viewport.reset()
                style="cursor: crosshair;"
            ></canvas>

            <SegmentTooltip hovered=hovered locale=Signal::derive(move || config.with(|c| c.locale)) />
        </div>
    }
}
