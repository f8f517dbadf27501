use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;
use crate::diagram::RenderedDiagram;
use crate::models::RenderConfig;
use crate::theme::Theme;

const TITLE_FONT_SIZE: u32 = 16;
const LABEL_FONT_SIZE: u32 = 12;
const TITLE_Y: f64 = 22.0;
const TIME_LABEL_Y_OFFSET: f64 = -10.0;
const STATION_LABEL_X_OFFSET: f64 = -8.0;
const AXIS_CAPTION_Y_OFFSET: f64 = -12.0;
const GRID_LINE_WIDTH: f64 = 1.0;

struct Palette {
    background: &'static str,
    graph_background: &'static str,
    time_grid: &'static str,
    station_grid: &'static str,
    label: &'static str,
    title: &'static str,
}

const DARK_PALETTE: Palette = Palette {
    background: "#0a0a0a",
    graph_background: "#111111",
    time_grid: "#2a2a2a",
    station_grid: "#1f1f1f",
    label: "#888",
    title: "#ddd",
};

const LIGHT_PALETTE: Palette = Palette {
    background: "#fafafa",
    graph_background: "#ffffff",
    time_grid: "#d0d0d0",
    station_grid: "#e5e5e5",
    label: "#666",
    title: "#222",
};

fn get_palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK_PALETTE,
        Theme::Light => &LIGHT_PALETTE,
    }
}

/// Paint a rendered diagram onto `ctx`
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &RenderedDiagram, config: &RenderConfig, theme: Theme) {
    let palette = get_palette(theme);
    let dims = scene.dims;
    let area = dims.graph_area();

    ctx.clear_rect(0.0, 0.0, dims.canvas_width, dims.canvas_height);
    ctx.set_fill_style_str(palette.background);
    ctx.fill_rect(0.0, 0.0, dims.canvas_width, dims.canvas_height);
    ctx.set_fill_style_str(palette.graph_background);
    ctx.fill_rect(area.x, area.y, area.width, area.height);

    // Everything inside the graph area is clipped to it
    ctx.save();
    ctx.begin_path();
    ctx.rect(area.x, area.y, area.width, area.height);
    ctx.clip();

    draw_grid(ctx, scene, palette);
    draw_strokes(ctx, scene, config);
    draw_markers(ctx, scene, config);

    ctx.restore();

    draw_labels(ctx, scene, config, palette);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, scene: &RenderedDiagram, palette: &Palette) {
    let area = scene.dims.graph_area();
    ctx.set_line_width(GRID_LINE_WIDTH);

    ctx.set_stroke_style_str(palette.time_grid);
    for tick in &scene.time_ticks {
        ctx.begin_path();
        ctx.move_to(tick.position, area.y);
        ctx.line_to(tick.position, area.bottom());
        ctx.stroke();
    }

    ctx.set_stroke_style_str(palette.station_grid);
    for tick in &scene.station_ticks {
        ctx.begin_path();
        ctx.move_to(area.x, tick.position);
        ctx.line_to(area.right(), tick.position);
        ctx.stroke();
    }
}

fn draw_strokes(ctx: &CanvasRenderingContext2d, scene: &RenderedDiagram, config: &RenderConfig) {
    ctx.set_line_width(config.stroke_width);
    ctx.set_line_cap("butt");

    for stroke in &scene.strokes {
        ctx.set_stroke_style_str(&stroke.color);
        ctx.begin_path();
        ctx.move_to(stroke.x1, stroke.y1);
        ctx.line_to(stroke.x2, stroke.y2);
        ctx.stroke();
    }
}

fn draw_markers(ctx: &CanvasRenderingContext2d, scene: &RenderedDiagram, config: &RenderConfig) {
    for marker in &scene.markers {
        ctx.set_fill_style_str(&marker.color);
        ctx.begin_path();
        let _ = ctx.arc(marker.x, marker.y, config.marker_radius, 0.0, PI * 2.0);
        ctx.fill();
    }
}

fn draw_labels(ctx: &CanvasRenderingContext2d, scene: &RenderedDiagram, config: &RenderConfig, palette: &Palette) {
    let dims = scene.dims;
    let area = dims.graph_area();
    let label_font = config.font(LABEL_FONT_SIZE);

    ctx.set_fill_style_str(palette.label);
    ctx.set_font(&label_font);

    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in &scene.station_ticks {
        let _ = ctx.fill_text(&tick.label, area.x + STATION_LABEL_X_OFFSET, tick.position);
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    for tick in scene.time_ticks.iter().filter(|t| t.position >= area.x && t.position <= area.right()) {
        let _ = ctx.fill_text(&tick.label, tick.position, area.y + TIME_LABEL_Y_OFFSET);
    }

    let center_x = area.x + area.width / 2.0;
    let _ = ctx.fill_text(config.locale.time_axis_label(), center_x, dims.canvas_height + AXIS_CAPTION_Y_OFFSET);

    ctx.set_fill_style_str(palette.title);
    ctx.set_font(&format!("bold {}", config.font(TITLE_FONT_SIZE)));
    let _ = ctx.fill_text(config.locale.title(), center_x, TITLE_Y);
}
