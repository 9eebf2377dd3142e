/// UI rendering: sidebar panel, labels, radius box and tool rows
use crate::draw::color::ORANGE;
use crate::draw::render::{Palette, SidebarChrome};
use crate::input::{Layout, SidebarItem, layout};

// ============================================================================
// UI Text Constants (not configurable)
// ============================================================================

/// Sidebar font size in points
const SIDEBAR_FONT_SIZE: f64 = 16.0;
/// Distance from a row's top edge to the text baseline
const TEXT_BASELINE_OFFSET: f64 = 20.0;
/// Left padding of the buffer text inside the radius box
const RADIUS_TEXT_PADDING: f64 = 5.0;
/// Outline width of the radius box
const RADIUS_BOX_LINE_WIDTH: f64 = 2.0;

/// Render the sidebar: panel fill, current algorithm, radius box, last
/// execution time and the tool list with the active algorithm highlighted.
pub fn render_sidebar(
    ctx: &cairo::Context,
    layout: &Layout,
    palette: &Palette,
    chrome: &SidebarChrome<'_>,
) {
    let (x, y, w, h) = layout.sidebar_rect().to_f64();
    palette.sidebar.apply(ctx);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();

    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );
    ctx.set_font_size(SIDEBAR_FONT_SIZE);

    let text_x = f64::from(layout.sidebar_left() + layout::SIDEBAR_MARGIN);

    palette.text.apply(ctx);
    show_line(
        ctx,
        text_x,
        layout::ALGORITHM_LABEL_TOP,
        &format!("Algorithm: {}", chrome.algorithm),
    );

    // Radius box: outline color signals editing / invalid entry
    let (bx, by, bw, bh) = layout.radius_box_rect().to_f64();
    let outline = if chrome.rejected {
        ORANGE
    } else if chrome.editing {
        palette.text
    } else {
        palette.muted
    };
    outline.apply(ctx);
    ctx.set_line_width(RADIUS_BOX_LINE_WIDTH);
    ctx.rectangle(bx, by, bw, bh);
    let _ = ctx.stroke();

    palette.text.apply(ctx);
    ctx.move_to(bx + RADIUS_TEXT_PADDING, by + TEXT_BASELINE_OFFSET);
    let _ = ctx.show_text(chrome.radius_text);

    show_line(
        ctx,
        text_x,
        layout::TIMING_LABEL_TOP,
        &format!("Time: {:.6} s", chrome.last_execution_secs),
    );

    for (index, item) in SidebarItem::ALL.iter().enumerate() {
        let selected = matches!(item, SidebarItem::Algorithm(a) if *a == chrome.algorithm);
        if selected {
            palette.text.apply(ctx);
        } else {
            palette.muted.apply(ctx);
        }
        show_line(ctx, text_x, layout.tool_row_rect(index).y, item.label());
    }
}

fn show_line(ctx: &cairo::Context, x: f64, top: i32, text: &str) {
    ctx.move_to(x, f64::from(top) + TEXT_BASELINE_OFFSET);
    if let Err(e) = ctx.show_text(text) {
        log::warn!("Failed to draw sidebar text '{}': {}", text, e);
    }
}
