use ratatui::layout::{Constraint, Direction, Layout, Rect};

const ALERT_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Carves an alert strip off the top of `body` when there is an alert.
pub fn split_alert(body: Rect, has_alert: bool) -> (Option<Rect>, Rect) {
    if !has_alert {
        return (None, body);
    }
    let height = ALERT_HEIGHT.min(body.height);
    let alert = Rect { height, ..body };
    let rest = Rect {
        y: body.y + height,
        height: body.height - height,
        ..body
    };
    (Some(alert), rest)
}

/// Stock (top left), cart (bottom left), peer carts (right).
pub fn shop_panes(body: Rect, stock_rows: usize) -> (Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);

    // Rows plus header and borders.
    let stock_height = (stock_rows as u16).saturating_add(3);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(stock_height), Constraint::Min(0)])
        .split(columns[0]);

    (left[0], left[1], columns[1])
}
