//! Screen layout and rendering.
//!
//! Fixed layout: the element rectangles registered with the enhancer are
//! the same constants the renderer draws into.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use veneer::geometry::Rect;
use veneer::table::SortDirection;
use veneer::toast::ToastLevel;

use crate::app::{CrewDesk, Focus};

pub const COL_NAME: u16 = 26;
pub const COL_DEPARTMENT: u16 = 20;
pub const COL_LEAVES: u16 = 10;

pub const SEARCH_RECT: Rect = Rect::new(10, 3, 30, 1);
pub const TABLE_RECT: Rect = Rect::new(2, 5, COL_NAME + COL_DEPARTMENT + COL_LEAVES, 12);
pub const APPLY_BTN_RECT: Rect = Rect::new(2, 18, 19, 1);

pub const MODAL_RECT: Rect = Rect::new(20, 6, 50, 16);
pub const LEAVE_TYPE_RECT: Rect = Rect::new(22, 9, 30, 1);
pub const FROM_DATE_RECT: Rect = Rect::new(22, 11, 30, 1);
pub const TO_DATE_RECT: Rect = Rect::new(22, 13, 30, 1);
pub const PHONE_RECT: Rect = Rect::new(22, 15, 30, 1);
pub const REASON_RECT: Rect = Rect::new(22, 17, 30, 1);
pub const SUBMIT_BTN_RECT: Rect = Rect::new(22, 19, 18, 1);
pub const CANCEL_BTN_RECT: Rect = Rect::new(44, 19, 10, 1);

const TOAST_WIDTH: u16 = 40;

pub fn draw(app: &CrewDesk, out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    draw_header(out)?;
    draw_search(app, out)?;
    draw_table(app, out)?;
    draw_button(out, APPLY_BTN_RECT, "[ Apply for leave ]", true)?;

    if app.enhancer.modals().is_open("apply-leave") {
        draw_leave_modal(app, out)?;
    }

    draw_toasts(app, out)?;
    draw_tooltip(app, out)?;

    out.flush()
}

fn draw_header(out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        MoveTo(2, 0),
        SetAttribute(Attribute::Bold),
        Print("CrewDesk HR Console"),
        SetAttribute(Attribute::Reset),
        MoveTo(2, 1),
        SetForegroundColor(Color::DarkGrey),
        Print("Tab: focus   Esc: close/quit   Ctrl+Q: quit"),
        ResetColor
    )
}

fn draw_search(app: &CrewDesk, out: &mut impl Write) -> io::Result<()> {
    queue!(out, MoveTo(2, SEARCH_RECT.y), Print("Search:"))?;
    let focused = app.focus == Focus::Search;
    draw_input(out, SEARCH_RECT, &app.query, focused)
}

fn draw_table(app: &CrewDesk, out: &mut impl Write) -> io::Result<()> {
    let columns = app.employees.columns();
    let sort = app.employees.sort();

    // Header row with sort indicators.
    let mut x = TABLE_RECT.x;
    queue!(out, SetAttribute(Attribute::Bold))?;
    for (i, column) in columns.iter().enumerate() {
        let indicator = match sort {
            Some((col, SortDirection::Ascending)) if col == i => " ^",
            Some((col, SortDirection::Descending)) if col == i => " v",
            _ => "",
        };
        queue!(
            out,
            MoveTo(x, TABLE_RECT.y),
            Print(clip(&format!("{}{}", column.title, indicator), column.width))
        )?;
        x += column.width;
    }
    queue!(out, SetAttribute(Attribute::Reset))?;

    // Data rows.
    let visible = (TABLE_RECT.height - 1) as usize;
    for (row_index, row) in app.employees.rows().iter().take(visible).enumerate() {
        let y = TABLE_RECT.y + 1 + row_index as u16;
        let mut x = TABLE_RECT.x;
        for (i, column) in columns.iter().enumerate() {
            let cell = row.cells.get(i).map(String::as_str).unwrap_or("");
            queue!(out, MoveTo(x, y), Print(clip(cell, column.width)))?;
            x += column.width;
        }
    }
    Ok(())
}

fn draw_leave_modal(app: &CrewDesk, out: &mut impl Write) -> io::Result<()> {
    fill(out, MODAL_RECT)?;
    queue!(
        out,
        MoveTo(MODAL_RECT.x + 2, MODAL_RECT.y + 1),
        SetAttribute(Attribute::Bold),
        Print("Apply for leave"),
        SetAttribute(Attribute::Reset)
    )?;

    let fields = [
        ("leave_type", LEAVE_TYPE_RECT, Focus::LeaveType),
        ("from_date", FROM_DATE_RECT, Focus::FromDate),
        ("to_date", TO_DATE_RECT, Focus::ToDate),
        ("contact_phone", PHONE_RECT, Focus::Phone),
        ("reason", REASON_RECT, Focus::Reason),
    ];

    for (name, rect, focus) in fields {
        let Some(field) = app.leave_form.get_field(name) else {
            continue;
        };
        queue!(
            out,
            MoveTo(rect.x, rect.y - 1),
            Print(format!("{}:", field.label()))
        )?;
        draw_input(out, rect, &field.value(), app.focus == focus)?;

        // Inline error to the right of the input.
        if let Some(error) = field.error() {
            queue!(
                out,
                MoveTo(rect.right() + 1, rect.y),
                SetForegroundColor(Color::Red),
                Print(clip(&error, 16)),
                ResetColor
            )?;
        }
    }

    let submit_label = format!("[ {} ]", app.leave_form.submit_button_label());
    draw_button(out, SUBMIT_BTN_RECT, &submit_label, app.leave_form.submit_enabled())?;
    draw_button(out, CANCEL_BTN_RECT, "[ Cancel ]", true)
}

fn draw_toasts(app: &CrewDesk, out: &mut impl Write) -> io::Result<()> {
    let now = Instant::now();
    for (i, (_, toast)) in app.enhancer.toasts().active(now).iter().take(5).enumerate() {
        let color = match toast.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
        };
        queue!(
            out,
            MoveTo(100 - TOAST_WIDTH, 1 + i as u16),
            SetForegroundColor(color),
            Print(toast.truncated_message(TOAST_WIDTH as usize)),
            ResetColor
        )?;
    }
    Ok(())
}

fn draw_tooltip(app: &CrewDesk, out: &mut impl Write) -> io::Result<()> {
    if let Some(tooltip) = app.enhancer.tooltip() {
        queue!(
            out,
            MoveTo(tooltip.area.x, tooltip.area.y),
            SetForegroundColor(Color::Black),
            crossterm::style::SetBackgroundColor(Color::Grey),
            Print(format!(" {} ", tooltip.text)),
            ResetColor
        )?;
    }
    Ok(())
}

fn draw_input(out: &mut impl Write, rect: Rect, value: &str, focused: bool) -> io::Result<()> {
    let marker = if focused { "_" } else { " " };
    let text = format!("{}{}", clip(value, rect.width - 1), marker);
    queue!(
        out,
        MoveTo(rect.x, rect.y),
        SetAttribute(Attribute::Underlined),
        Print(format!("{:<width$}", text, width = rect.width as usize)),
        SetAttribute(Attribute::Reset)
    )
}

fn draw_button(out: &mut impl Write, rect: Rect, label: &str, enabled: bool) -> io::Result<()> {
    let color = if enabled { Color::White } else { Color::DarkGrey };
    queue!(
        out,
        MoveTo(rect.x, rect.y),
        SetForegroundColor(color),
        Print(clip(label, rect.width)),
        ResetColor
    )
}

fn fill(out: &mut impl Write, rect: Rect) -> io::Result<()> {
    for y in rect.y..rect.bottom() {
        queue!(
            out,
            MoveTo(rect.x, y),
            Print(" ".repeat(rect.width as usize))
        )?;
    }
    Ok(())
}

fn clip(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}
