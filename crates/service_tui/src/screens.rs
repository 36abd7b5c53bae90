//! Screen rendering functions for the TUI.

use crate::app::{InputMode, RenderState};
use blotter_core::series::TimeSeries;
use blotter_core::types::{BuySell, FxOption};
use blotter_core::view::SortKey;
use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table, Wrap,
    },
};

/// Format a number with a fixed number of decimals
fn format_number(n: f64, decimals: usize) -> String {
    if decimals == 0 {
        format!("{:.0}", n)
    } else {
        format!("{:.1$}", n, decimals)
    }
}

/// Format large numbers with K/M suffix
fn format_k(n: f64) -> String {
    let abs_n = n.abs();
    if abs_n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs_n >= 1_000.0 {
        format!("{:.0}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Format an FX rate
fn format_rate(n: f64) -> String {
    format!("{:.4}", n)
}

/// Draw the waiting screen shown until the feed answers
pub(crate) fn draw_loading(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("Loading trades...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

/// Draw the feed failure screen
pub(crate) fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let text = format!("Error loading trades: {}", message);
    let error = Paragraph::new(text)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(error, area);
}

/// Draw blotter screen with the filter box and trade table
pub(crate) fn draw_blotter(frame: &mut Frame, area: Rect, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Filter box; the trailing underscore marks live editing
    let editing = state.input_mode == InputMode::Filter;
    let filter_text = if editing {
        format!("{}_", state.view.filter)
    } else {
        state.view.filter.clone()
    };
    let filter_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let filter = Paragraph::new(filter_text).style(filter_style).block(
        Block::default()
            .title(" Filter (instrument or currency) ")
            .borders(Borders::ALL),
    );
    frame.render_widget(filter, chunks[0]);

    // Strike rate sorts but is not a table column; it shows in the charts
    // and the details popup.
    let header_cells = SortKey::ALL[..5].iter().map(|key| {
        let mut label = key.label().to_string();
        let style = if *key == state.view.sort_key {
            label.push(' ');
            label.push_str(state.view.sort_order.arrow());
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Cell::from(label).style(style)
    });
    let header = Row::new(header_cells).height(1);

    let rows = state.rows.iter().enumerate().map(|(idx, option)| {
        let style = if idx == state.selected {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(option.buy_sell.as_str()).style(Style::default().fg(
                if option.buy_sell == BuySell::Buy {
                    Color::Green
                } else {
                    Color::Red
                },
            )),
            Cell::from(option.underlying_instrument_name.clone()),
            Cell::from(option.base_currency.clone()),
            Cell::from(option.premium_payment_date.clone()),
            Cell::from(format_number(option.premium_payment_amount, 2)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Min(22),
        Constraint::Length(15),
        Constraint::Length(23),
        Constraint::Length(25),
    ];

    let sort_note = if state.view.sort_key == SortKey::StrikeRate {
        format!(" - sorted by Strike Rate {}", state.view.sort_order.arrow())
    } else {
        String::new()
    };
    let title = format!(
        " Trades ({} shown / {} loaded, {} skipped){} ",
        state.rows.len(),
        state.total,
        state.skipped,
        sort_note
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(table, chunks[1]);
}

/// Draw the premium payment amount chart screen
pub(crate) fn draw_premium_chart(frame: &mut Frame, area: Rect, state: &RenderState) {
    draw_series_chart(
        frame,
        area,
        state,
        &state.premium,
        " Premium Payments by Date ",
        "Premium",
        Color::Cyan,
        format_k,
    );
}

/// Draw the strike rate chart screen
pub(crate) fn draw_strike_chart(frame: &mut Frame, area: Rect, state: &RenderState) {
    draw_series_chart(
        frame,
        area,
        state,
        &state.strike,
        " Strike Rates by Date ",
        "Strike",
        Color::Green,
        format_rate,
    );
}

/// Draw one value-by-date chart with a cursor readout underneath
#[allow(clippy::too_many_arguments)]
fn draw_series_chart(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    series: &TimeSeries,
    title: &str,
    value_label: &str,
    color: Color,
    fmt: fn(f64) -> String,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    // Prepare chart data
    let cursor = state.chart_cursor;
    let points: Vec<(f64, f64)> = series.points();
    let cursor_point: Vec<(f64, f64)> = series
        .at(cursor)
        .map(|(_, value)| (cursor as f64, value))
        .into_iter()
        .collect();

    let x_bounds = series.x_bounds();
    let y_bounds = series.y_bounds();

    let datasets = vec![
        Dataset::default()
            .name(value_label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&cursor_point),
    ];

    let x_labels: Vec<Span> = series.date_labels().into_iter().map(Span::raw).collect();

    // Y axis labels, formatted per value kind
    let y_min = y_bounds[0];
    let y_max = y_bounds[1];
    let y_labels: Vec<Span> = vec![
        Span::raw(fmt(y_min)),
        Span::raw(fmt((y_min + y_max) / 2.0)),
        Span::raw(fmt(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(value_label)
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, chunks[0]);

    // Cursor readout shows both charted values for the row
    let readout = match (state.premium.at(cursor), state.strike.at(cursor)) {
        (Some((date, premium)), Some((_, strike))) => format!(
            " {} | Premium: {} | Strike: {} ({} of {}) ",
            date,
            format_number(premium, 2),
            format_rate(strike),
            cursor + 1,
            series.len()
        ),
        _ => " no data to plot ".to_string(),
    };
    let cursor_panel = Paragraph::new(readout)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Cursor "));
    frame.render_widget(cursor_panel, chunks[1]);
}

/// Draw the record details popup over the current screen
pub(crate) fn draw_details(frame: &mut Frame, area: Rect, option: &FxOption) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let dump = option.pretty_json();
    let mut lines = vec![Line::from("")];
    lines.extend(dump.lines().map(|line| Line::from(format!("  {}", line))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Esc]Close",
        Style::default().fg(Color::DarkGray),
    )));

    let title = format!(
        " {} {} ",
        option.buy_sell.as_str(),
        option.underlying_instrument_name
    );
    let details = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(details, popup);
}

/// Helper function to create a centered rect using a percentage of the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
