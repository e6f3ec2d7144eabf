mod export;
mod filter;
mod selection;
mod transition;

pub use filter::{elapsed_days, filter_items, start_of_day};
pub use selection::{Button, ButtonGroup, Period, Selection};
pub use transition::OverlayTransition;

use crate::config::Config;
use crate::data::Item;
use crate::render::{self, TableBody, TableRow};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use ratatui::widgets::TableState;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,        // Help modal with keybindings
    RowDetail,   // Full text of the selected result row
    ExportMenu,  // Export menu for HTML/JSON
}

/// Which panel is on screen. The landing panel covers the results until a
/// search completes its fade-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusGroup {
    Topic,
    Period,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Html,
    Json,
}

pub struct App {
    pub config: Config,
    /// `None` when the data file could not be loaded.
    pub dataset: Option<Vec<Item>>,
    pub topics: ButtonGroup,
    pub periods: ButtonGroup,
    pub selection: Selection,
    pub focus: FocusGroup,
    pub screen: Screen,
    pub transition: OverlayTransition,
    pub input_mode: InputMode,
    pub results: Vec<Item>,
    pub table: TableBody,
    pub selected_index: usize,
    pub status_message: Option<String>,
    pub last_search: Option<String>,
    pub export_format: ExportFormat,
    pub export_menu_selection: usize, // 0: Format, 1: Export button
    pub table_state: TableState,
}

impl App {
    pub fn new(config: Config, dataset: Option<Vec<Item>>) -> Result<Self> {
        let topics = ButtonGroup::topics(&config.topics).context("no topics configured")?;
        let mut periods = ButtonGroup::periods();
        periods.activate_value(&config.default_period);
        let selection = Selection::new(&topics.active().value, &periods.active().value);
        let transition = OverlayTransition::new(Duration::from_millis(config.transition_ms));
        let status_message = if dataset.is_none() {
            Some("데이터 파일을 불러오지 못했습니다".to_string())
        } else {
            None
        };

        Ok(Self {
            config,
            dataset,
            topics,
            periods,
            selection,
            focus: FocusGroup::Topic,
            screen: Screen::Landing,
            transition,
            input_mode: InputMode::Normal,
            results: Vec::new(),
            table: TableBody::default(),
            selected_index: 0,
            status_message,
            last_search: None,
            export_format: ExportFormat::default(),
            export_menu_selection: 0,
            table_state: TableState::default(),
        })
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.as_ref().map_or(0, Vec::len)
    }

    /// Run the filter for the current selection as of `now` and rebuild the
    /// table. A missing dataset yields the placeholder.
    pub fn apply_search<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let filtered: Vec<&Item> = match &self.dataset {
            Some(items) => filter_items(items, &self.selection, now),
            None => {
                warn!("keyword data not loaded; nothing to show");
                Vec::new()
            }
        };
        self.table = render::build_table(filtered.iter().copied());
        self.results = filtered.into_iter().cloned().collect();
        self.selected_index = 0;
        info!(
            topic = %self.selection.topic,
            period = %self.selection.period_value,
            matches = self.results.len(),
            "search"
        );
    }

    /// Search trigger: filter, render, then start fading the landing panel.
    pub fn search(&mut self) {
        let now = Local::now();
        self.apply_search(&now);
        self.last_search = Some(now.format("%H:%M:%S").to_string());
        self.transition.begin(Instant::now());
    }

    /// Advance time-based state. Returns true when the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.transition.poll(now) {
            self.screen = Screen::Results;
            return true;
        }
        false
    }

    pub fn show_landing(&mut self) {
        self.transition.cancel();
        self.screen = Screen::Landing;
        self.input_mode = InputMode::Normal;
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.table.rows().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn selected_row(&self) -> Option<&TableRow> {
        self.table.rows().get(self.selected_index)
    }

    pub fn show_row_detail(&mut self) {
        if self.selected_row().is_some() {
            self.input_mode = InputMode::RowDetail;
        }
    }

    pub fn close_row_detail(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
