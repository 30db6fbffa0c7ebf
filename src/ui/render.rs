use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, shop_panes, split_alert};
use crate::ui::nav::{NavState, Pane};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    STATUS_ERROR,
};
use crate::ui::view::{CartView, ErrorView, PeerRow, PeersView, StockView};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();
    let nav = app.nav();

    frame.render_widget(Header::new().widget(app.connection()), header);

    let (alert, body) = split_alert(body, matches!(view.error, ErrorView::Alert(_)));
    if let (Some(area), ErrorView::Alert(message)) = (alert, &view.error) {
        draw_alert(frame, area, message);
    }

    let (stock_area, cart_area, peers_area) = shop_panes(body, view.stock.rows.len());
    draw_stock(frame, stock_area, &view.stock, nav);
    draw_cart(frame, cart_area, &view.cart, nav);
    draw_peers(frame, peers_area, &view.peers);

    frame.render_widget(Footer::new().widget(footer, nav), footer);
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().copied().map(Cell::from)).style(
        Style::default()
            .fg(HEADER_SEPARATOR)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_alert(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let widget = Paragraph::new(Line::from(message.to_string()))
        .style(Style::default().fg(STATUS_ERROR))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Error ",
                    Style::default()
                        .fg(STATUS_ERROR)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(widget, area);
}

fn draw_stock(frame: &mut Frame<'_>, area: Rect, stock: &StockView, nav: &NavState) {
    let focused = nav.focus == Pane::Stock;
    let rows = stock.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.name.clone()),
            Cell::from(Line::from(row.price.clone()).right_aligned()),
            Cell::from(Span::styled("[ add ]", Style::default().fg(ACCENT))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(header_row(&["Product", "Price", ""]))
    .block(pane_block(" Stock ", focused))
    .row_highlight_style(highlight(focused));

    let mut state = TableState::default().with_selected(Some(nav.stock_row));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_cart(frame: &mut Frame<'_>, area: Rect, cart: &CartView, nav: &NavState) {
    let focused = nav.focus == Pane::Cart;
    let block = pane_block(" Cart ", focused);

    let (rows, total) = match cart {
        CartView::Empty { prompt } => {
            let widget = Paragraph::new(*prompt)
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        CartView::Filled { rows, total } => (rows, total),
    };

    let table_rows = rows.iter().enumerate().map(|(idx, row)| {
        let editing = nav.cart_row == idx && nav.edit.is_some();
        let quantity = match (&nav.edit, editing) {
            (Some(text), true) => Span::styled(
                format!("{text}▏"),
                Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            ),
            _ => Span::raw(row.quantity.text.clone()),
        };
        Row::new(vec![
            Cell::from(row.name.clone()),
            Cell::from(Line::from(row.price.clone()).right_aligned()),
            Cell::from(Line::from(quantity).right_aligned()),
            Cell::from(Line::from(row.subtotal.clone()).right_aligned()),
        ])
    });

    let footer = Row::new(vec![
        Cell::from(Span::styled(
            "Total",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(""),
        Cell::from(""),
        Cell::from(
            Line::from(Span::styled(
                total.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        ),
    ]);

    let table = Table::new(
        table_rows,
        [
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(header_row(&["Item", "Price", "Qty", "Subtotal"]))
    .footer(footer)
    .block(block)
    .row_highlight_style(highlight(focused));

    let mut state = TableState::default().with_selected(Some(nav.cart_row));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_peers(frame: &mut Frame<'_>, area: Rect, peers: &PeersView) {
    let block = pane_block(" Other shoppers ", false);

    let rows = match peers {
        PeersView::Nobody { placeholder } => {
            let widget = Paragraph::new(*placeholder)
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        PeersView::Carts(rows) => rows,
    };

    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let table_rows = rows.iter().map(|row| match row {
        PeerRow::Empty {
            position,
            placeholder,
        } => Row::new(vec![
            Cell::from(format!("#{position}")),
            Cell::from(Span::styled(*placeholder, dim.add_modifier(Modifier::ITALIC))),
            Cell::from(""),
            Cell::from(""),
        ]),
        PeerRow::Items {
            position,
            listing,
            qty,
            subtotal,
        } => {
            let height = listing.lines().count().max(1) as u16;
            Row::new(vec![
                Cell::from(format!("#{position}")),
                Cell::from(listing.clone()),
                Cell::from(Line::from(qty.to_string()).right_aligned()),
                Cell::from(Line::from(subtotal.clone()).right_aligned()),
            ])
            .height(height)
        }
    });

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(5),
            Constraint::Length(14),
        ],
    )
    .header(header_row(&["", "Items", "Qty", "Subtotal"]))
    .block(block);
    frame.render_widget(table, area);
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
