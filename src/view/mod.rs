//! Terminal rendering and the interactive viewer (impure shell)

pub mod component_view;
pub mod page_indicator;

pub use component_view::{truncate_to_width, ComponentView};
pub use page_indicator::PageIndicator;

use crate::cache::CacheError;
use crate::component::{
    CarouselScrollDelegate, Completion, Component, ComponentDelegate, FocusDelegate,
    RefreshHandle,
};
use crate::model::{IndexPath, Item, ModelError, Point, ScrollDirection, Size};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Rows taken by the header and the status bar.
const CHROME_ROWS: u16 = 2;

/// Errors that can occur while running the viewer
#[derive(Debug, Error)]
pub enum ViewerError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The model file could not be loaded
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// The state cache could not be written
    #[error("State cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Delegate the viewer installs on its component.
///
/// Every callback lands in the status bar.
#[derive(Debug, Default)]
pub struct ViewerDelegate {
    status: RefCell<String>,
    selections: RefCell<Vec<String>>,
}

impl ViewerDelegate {
    /// Delegate with an empty status line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status message.
    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    /// Titles of the items selected so far.
    pub fn selections(&self) -> Vec<String> {
        self.selections.borrow().clone()
    }

    fn set_status(&self, status: impl Into<String>) {
        *self.status.borrow_mut() = status.into();
    }
}

impl ComponentDelegate for ViewerDelegate {
    fn item_selected(&self, _component: &Component, item: &Item) {
        info!(title = %item.title, "Item selected");
        self.selections.borrow_mut().push(item.title.clone());
        self.set_status(format!("Selected {}", item.title));
    }

    fn reload_requested(&self, _refresh: RefreshHandle, completion: Completion) {
        self.set_status("Refreshed");
        completion.complete();
    }

    fn did_reach_end(&self, _component: &Component, completion: Completion) {
        self.set_status("End of content");
        completion.complete();
    }
}

impl FocusDelegate for ViewerDelegate {
    fn focus_changed(&self, component: &Component, index_path: IndexPath) {
        if let Some(item) = component.item(index_path.item) {
            self.set_status(item.title);
        }
    }
}

impl CarouselScrollDelegate for ViewerDelegate {
    fn did_scroll(&self, component: &Component, page: usize) {
        self.set_status(format!("Page {}/{}", page + 1, component.item_count()));
    }
}

/// Interactive viewer for one component
///
/// Generic over backend to support testing with TestBackend
pub struct Viewer<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    component: Component,
    delegate: Rc<ViewerDelegate>,
    viewport: Size,
}

impl Viewer<CrosstermBackend<Stdout>> {
    /// Create the viewer on the real terminal
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(component: Component) -> Result<Self, ViewerError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Self::with_terminal(terminal, component)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), ViewerError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> Viewer<B>
where
    B: Backend,
{
    /// Viewer drawing into `terminal`. Sets the component up for its size.
    pub fn with_terminal(terminal: Terminal<B>, component: Component) -> Result<Self, ViewerError> {
        let size = terminal.size()?;
        let delegate = Rc::new(ViewerDelegate::new());
        let mut viewer = Self {
            terminal,
            component,
            delegate,
            viewport: Size::ZERO,
        };
        viewer.component.set_delegate(&viewer.delegate);
        viewer.component.set_focus_delegate(&viewer.delegate);
        viewer
            .component
            .set_carousel_scroll_delegate(&viewer.delegate);
        viewer.handle_resize(size.width, size.height);
        Ok(viewer)
    }

    /// The component being viewed.
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// The installed delegate.
    pub fn delegate(&self) -> &ViewerDelegate {
        &self.delegate
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the viewer should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let horizontal = self.component.scroll_direction() == ScrollDirection::Horizontal;
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Left if horizontal => {
                let page = self.component.current_page().saturating_sub(1);
                self.component.scroll_to_page(page);
            }
            KeyCode::Right if horizontal => {
                let page = self.component.current_page() + 1;
                self.component.scroll_to_page(page);
            }
            KeyCode::Left => self.move_focus(-1),
            KeyCode::Right => self.move_focus(1),
            KeyCode::Up => {
                let step = self.row_step();
                self.move_focus(-step);
            }
            KeyCode::Down => {
                let step = self.row_step();
                self.move_focus(step);
            }
            KeyCode::Enter => {
                let target = if horizontal {
                    IndexPath::item(self.component.current_page())
                } else {
                    self.component.focused().unwrap_or_default()
                };
                self.component.select(target);
            }
            KeyCode::Char('r') => {
                self.component.refresh();
            }
            KeyCode::Char('s') => self.save_state(),
            _ => {}
        }
        false
    }

    /// Items skipped by one row of vertical movement.
    fn row_step(&self) -> isize {
        self.component
            .plan()
            .map(|plan| plan.columns.max(1) as isize)
            .unwrap_or(1)
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.component.item_count();
        if count == 0 {
            return;
        }
        let current = self.component.focused().map(|path| path.item);
        let next = match current {
            None => 0,
            Some(index) => index
                .saturating_add_signed(delta)
                .min(count - 1),
        };
        self.component.focus(IndexPath::item(next));
        self.scroll_into_view(next);

        if next == count - 1 {
            self.component.reached_end(Completion::noop());
        }
    }

    /// Adjust the vertical content offset so item `index` is fully visible.
    fn scroll_into_view(&mut self, index: usize) {
        let Some(frame) = self.component.surface().item_frames().get(index).copied() else {
            return;
        };
        let offset = self.component.surface().content_offset();
        let height = self.viewport.height;

        let mut y = offset.y;
        if frame.y < y {
            y = frame.y;
        } else if frame.max_y() > y + height {
            y = frame.max_y() - height;
        }
        self.component
            .surface_mut()
            .set_content_offset(Point::new(offset.x, y.max(0.0)));
    }

    fn save_state(&self) {
        let Some(cache) = self.component.state_cache() else {
            self.delegate.set_status("No cache key; state not saved");
            return;
        };
        match cache.save(&self.component.model()) {
            Ok(()) => self.delegate.set_status(format!("Saved to {}", cache.key())),
            Err(e) => {
                warn!(error = %e, "Failed to save component state");
                self.delegate.set_status(format!("Save failed: {e}"));
            }
        }
    }

    /// Terminal resized - set the component up for the new content area
    fn handle_resize(&mut self, width: u16, height: u16) {
        let content = content_area(Rect::new(0, 0, width, height));
        self.viewport = Size::new(f64::from(content.width), f64::from(content.height));
        debug!(width, height, "Viewer resized");
        self.component.setup(self.viewport);
        if let Some(index) = self.component.focused().map(|path| path.item) {
            self.scroll_into_view(index);
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), ViewerError> {
        let component = &self.component;
        let status = self.delegate.status();

        self.terminal.draw(|frame| {
            let [header, body, footer] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            frame.render_widget(Paragraph::new(header_line(component)), header);
            frame.render_widget(ComponentView::new(component), body);
            frame.render_widget(Paragraph::new(status_line(&status)), footer);
        })?;

        Ok(())
    }
}

/// Area left for the component once header and status bar are placed.
fn content_area(area: Rect) -> Rect {
    Rect {
        y: area.y + 1.min(area.height),
        height: area.height.saturating_sub(CHROME_ROWS),
        ..area
    }
}

fn header_line(component: &Component) -> Line<'static> {
    let model = component.model();
    let title = if model.title.is_empty() {
        "listkit".to_string()
    } else {
        model.title.clone()
    };
    Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(
            format!("[{} · {} items]", model.kind.as_str(), model.items.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn status_line(status: &str) -> Line<'static> {
    let help = "←/→ page  ↑/↓ focus  ⏎ select  r refresh  s save  q quit";
    if status.is_empty() {
        Line::styled(help, Style::default().fg(Color::DarkGray))
    } else {
        Line::from(vec![
            Span::styled(status.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(help, Style::default().fg(Color::DarkGray)),
        ])
    }
}

/// Initialize and run the viewer for `component`
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_viewer(component: Component) -> Result<(), ViewerError> {
    let mut viewer = Viewer::new(component)?;
    let result = viewer.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), ViewerError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
