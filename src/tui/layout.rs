//! Screen layout: responsive breakpoints and the vertical split
//!
//! Width thresholds and row budgets live here so render code has no magic
//! numbers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane, minimal terminal
    Compact,
    /// 60-99 cols: half-screen
    Normal,
    /// 100+ cols: full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

const TITLE_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;
/// Smallest results list worth drawing (borders + 3 rows)
const MIN_RESULTS_HEIGHT: u16 = 5;
/// Logs panel never shrinks below this; hidden instead
const MIN_LOGS_HEIGHT: u16 = 5;

/// Where each part of the screen goes this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub input: Rect,
    pub results: Rect,
    /// Zero-height when there is nothing to report
    pub banner: Rect,
    /// None when hidden or when the terminal is too short for it
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl ScreenAreas {
    /// Split `area` top to bottom: title, input, results, banner, logs, status
    ///
    /// The logs panel gets a third of the space left after the fixed rows.
    /// The banner is capped so the results list keeps its minimum height.
    pub fn compute(area: Rect, banner_height: u16, show_logs: bool) -> Self {
        let chrome = TITLE_HEIGHT + INPUT_HEIGHT + STATUS_HEIGHT;
        let banner_height =
            banner_height.min(area.height.saturating_sub(chrome + MIN_RESULTS_HEIGHT));
        let flexible = area.height.saturating_sub(chrome + banner_height);

        let logs_height = if show_logs {
            let third = flexible / 3;
            if third >= MIN_LOGS_HEIGHT && flexible - third >= MIN_RESULTS_HEIGHT {
                third
            } else {
                0
            }
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(banner_height),
                Constraint::Length(logs_height),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            title: chunks[0],
            input: chunks[1],
            results: chunks[2],
            banner: chunks[3],
            logs: (logs_height > 0).then_some(chunks[4]),
            status: chunks[5],
        }
    }
}
