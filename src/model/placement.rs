//! Choosing a monitor and centering the panel on it.

use super::constants::{BASE_DPI, CLOSE_BUTTON_SIZE, PANEL_MARGIN, PASTE_AREA_HEIGHT};

/// A rectangle in physical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right and bottom edges are exclusive.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Picks the monitor to show the panel on.
///
/// A configured index wins when it exists; otherwise the monitor under the
/// cursor, otherwise the first monitor.
pub fn choose_monitor(monitors: &[Rect], target: Option<usize>, cursor: (i32, i32)) -> Option<Rect> {
    if let Some(rect) = target.and_then(|index| monitors.get(index)) {
        return Some(*rect);
    }
    monitors
        .iter()
        .find(|m| m.contains(cursor.0, cursor.1))
        .or_else(|| monitors.first())
        .copied()
}

/// Top-left corner that centers a `width` x `height` window on `monitor`.
pub fn center_in(monitor: &Rect, width: i32, height: i32) -> (i32, i32) {
    (
        monitor.x + (monitor.width - width) / 2,
        monitor.y + (monitor.height - height) / 2,
    )
}

/// Scales a logical length to the given DPI.
pub fn scale_for_dpi(logical: i32, dpi: u32) -> i32 {
    if dpi == 0 {
        return logical;
    }
    ((logical as i64 * dpi as i64 + BASE_DPI as i64 / 2) / BASE_DPI as i64) as i32
}

/// Child control rectangles inside the panel's client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub close_button: Rect,
    pub list: Rect,
    pub paste_area: Option<Rect>,
}

/// Lays out the close button (top right), the item list and, when shown,
/// the paste area along the bottom. Sizes never go negative.
pub fn panel_layout(client_width: i32, client_height: i32, dpi: u32, show_paste_area: bool) -> PanelLayout {
    let margin = scale_for_dpi(PANEL_MARGIN, dpi);
    let button = scale_for_dpi(CLOSE_BUTTON_SIZE, dpi);
    let inner_width = (client_width - 2 * margin).max(0);

    let close_button = Rect::new(client_width - margin - button, margin, button, button);

    let paste_area = show_paste_area.then(|| {
        let height = scale_for_dpi(PASTE_AREA_HEIGHT, dpi);
        Rect::new(margin, (client_height - margin - height).max(0), inner_width, height)
    });

    let list_top = margin + button + margin;
    let list_bottom = match paste_area {
        Some(area) => area.y - margin,
        None => client_height - margin,
    };
    let list = Rect::new(margin, list_top, inner_width, (list_bottom - list_top).max(0));

    PanelLayout {
        close_button,
        list,
        paste_area,
    }
}
