//! Ratatui widget drawing a configured component.
//!
//! The widget reads committed surface geometry only: item frames, the content
//! offset and the page control frame. It never lays anything out itself, so
//! a component must have been set up for the area it is drawn into.

use super::page_indicator::PageIndicator;
use crate::component::{Component, ItemStyle};
use crate::model::{Frame, IndexPath, Item, Point};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated text.
const ELLIPSIS: char = '…';

/// Widget for one component and, recursively, its composite children.
#[derive(Debug, Clone, Copy)]
pub struct ComponentView<'a> {
    component: &'a Component,
    focused: Option<IndexPath>,
}

impl<'a> ComponentView<'a> {
    /// Widget for `component`, highlighting its focused item.
    pub fn new(component: &'a Component) -> Self {
        Self {
            component,
            focused: component.focused(),
        }
    }

    /// Override the highlighted item.
    pub fn focused(mut self, focused: Option<IndexPath>) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ComponentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_component(self.component, self.focused, area, buf);
    }
}

fn render_component(
    component: &Component,
    focused: Option<IndexPath>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.is_empty() {
        return;
    }

    let surface = component.surface();
    let offset = surface.content_offset();
    let registry = component.configuration().registry.borrow();
    let model = component.model();

    for (index, frame) in surface.item_frames().iter().enumerate() {
        let Some(item) = model.items.get(index) else {
            continue;
        };
        let Some(clip) = project(frame, offset, area) else {
            continue;
        };
        let left = f64::from(area.x) + frame.x - offset.x;
        let top = f64::from(area.y) + frame.y - offset.y;

        if let Some(child) = component.composites().get(index) {
            draw_clipped(left, top, frame, clip, buf, |rect, buf| {
                render_component(child, child.focused(), rect, buf);
            });
            continue;
        }

        let style = registry.template(&item.kind).style;
        let is_focused = focused == Some(IndexPath::item(index));
        draw_clipped(left, top, frame, clip, buf, |rect, buf| {
            render_item(item, style, is_focused, rect, buf);
        });
    }

    let control = component.page_control();
    if control.is_attached() {
        if let Some(rect) = project(&control.frame, Point::ZERO, area) {
            let line = PageIndicator::new(control).render(rect.width as usize);
            let pad = (rect.width as usize).saturating_sub(line.width()) / 2;
            let rect = Rect {
                x: rect.x + pad as u16,
                width: rect.width - pad as u16,
                ..rect
            };
            Paragraph::new(line).render(rect, buf);
        }
    }
}

/// Screen rectangle of a content-space frame, clipped to `area`.
fn project(frame: &Frame, offset: Point, area: Rect) -> Option<Rect> {
    let left = f64::from(area.x) + frame.x - offset.x;
    let top = f64::from(area.y) + frame.y - offset.y;

    let x0 = left.max(f64::from(area.left())).floor();
    let y0 = top.max(f64::from(area.top())).floor();
    let x1 = (left + frame.width).min(f64::from(area.right())).floor();
    let y1 = (top + frame.height).min(f64::from(area.bottom())).floor();

    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(
        x0 as u16,
        y0 as u16,
        (x1 - x0) as u16,
        (y1 - y0) as u16,
    ))
}

/// Draw content laid out at (`left`, `top`) in the size of `frame`, keeping
/// only the cells inside `clip`.
///
/// Partially visible items are drawn whole into a scratch buffer first so
/// borders and text keep their positions.
fn draw_clipped<F>(left: f64, top: f64, frame: &Frame, clip: Rect, buf: &mut Buffer, draw: F)
where
    F: FnOnce(Rect, &mut Buffer),
{
    let full = Rect::new(0, 0, frame.width.floor() as u16, frame.height.floor() as u16);
    let left = left.floor() as i32;
    let top = top.floor() as i32;

    if left == i32::from(clip.x)
        && top == i32::from(clip.y)
        && full.width == clip.width
        && full.height == clip.height
    {
        draw(clip, buf);
        return;
    }

    let mut scratch = Buffer::empty(full);
    draw(full, &mut scratch);
    for y in clip.top()..clip.bottom() {
        for x in clip.left()..clip.right() {
            let (Ok(sx), Ok(sy)) = (
                u16::try_from(i32::from(x) - left),
                u16::try_from(i32::from(y) - top),
            ) else {
                continue;
            };
            if sx < full.width && sy < full.height {
                buf[(x, y)] = scratch[(sx, sy)].clone();
            }
        }
    }
}

fn render_item(item: &Item, style: ItemStyle, focused: bool, rect: Rect, buf: &mut Buffer) {
    match style {
        ItemStyle::Plain => {
            let title_style = if focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let width = rect.width as usize;
            let lines = vec![
                Line::styled(truncate_to_width(&item.title, width), title_style),
                Line::styled(
                    truncate_to_width(&item.subtitle, width),
                    Style::default().fg(Color::DarkGray),
                ),
                Line::raw(truncate_to_width(&item.text, width)),
            ];
            Paragraph::new(lines).render(rect, buf);
        }
        ItemStyle::Card => {
            let border = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let title_width = (rect.width as usize).saturating_sub(2);
            let block = Block::bordered()
                .border_style(border)
                .title(truncate_to_width(&item.title, title_width));
            let inner = block.inner(rect);
            block.render(rect, buf);

            let width = inner.width as usize;
            let lines = vec![
                Line::styled(
                    truncate_to_width(&item.subtitle, width),
                    Style::default().fg(Color::DarkGray),
                ),
                Line::raw(truncate_to_width(&item.text, width)),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

/// Cut `text` to at most `width` display cells, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

// ===== Tests =====

#[cfg(test)]
#[path = "component_view_tests.rs"]
mod tests;
