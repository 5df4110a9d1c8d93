//! Page indicator line for a component's page control.
//!
//! Draws one dot per page when they fit, and a `current/total` counter when
//! they don't. Colors come from the page control's tint; a control without a
//! tint uses the terminal's default colors with a bold current dot.

use crate::component::PageControl;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Dot for the current page.
const CURRENT_DOT: &str = "●";

/// Dot for every other page.
const PAGE_DOT: &str = "○";

/// Renders a [`PageControl`] as a single line.
#[derive(Debug, Clone, Copy)]
pub struct PageIndicator<'a> {
    control: &'a PageControl,
}

impl<'a> PageIndicator<'a> {
    /// Indicator for `control`.
    pub fn new(control: &'a PageControl) -> Self {
        Self { control }
    }

    fn page_style(&self) -> Style {
        match self.control.tint {
            Some(tint) => Style::default().fg(tint.page),
            None => Style::default(),
        }
    }

    fn current_style(&self) -> Style {
        match self.control.tint {
            Some(tint) => Style::default().fg(tint.current_page),
            None => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Width the dot row needs.
    pub fn dots_width(&self) -> usize {
        match self.control.page_count {
            0 => 0,
            n => n * 2 - 1,
        }
    }

    /// Line fitting in `width` cells. Empty when there are no pages.
    pub fn render(&self, width: usize) -> Line<'static> {
        let count = self.control.page_count;
        if count == 0 {
            return Line::default();
        }

        if self.dots_width() > width {
            let counter = format!("{}/{}", self.control.current_page + 1, count);
            if counter.width() > width {
                return Line::default();
            }
            return Line::from(Span::styled(counter, self.current_style()));
        }

        let mut spans = Vec::with_capacity(count * 2);
        for page in 0..count {
            if page > 0 {
                spans.push(Span::raw(" "));
            }
            if page == self.control.current_page {
                spans.push(Span::styled(CURRENT_DOT, self.current_style()));
            } else {
                spans.push(Span::styled(PAGE_DOT, self.page_style()));
            }
        }
        Line::from(spans)
    }
}
