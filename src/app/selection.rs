use std::fmt;

use super::{App, FocusGroup};
use tracing::debug;

/// Recency window applied after the topic test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    ThreeDays,
    OneWeek,
    OneMonth,
    /// Any unrecognized value; lets every item through.
    Unbounded,
}

impl Period {
    pub fn from_value(value: &str) -> Self {
        match value {
            "today" => Period::Today,
            "3days" | "3 days" => Period::ThreeDays,
            "1week" | "1 week" => Period::OneWeek,
            "1month" | "1 month" => Period::OneMonth,
            _ => Period::Unbounded,
        }
    }

    /// Inclusive upper bound in days for the rolling windows.
    pub fn max_days(&self) -> Option<f64> {
        match self {
            Period::ThreeDays => Some(3.0),
            Period::OneWeek => Some(7.0),
            Period::OneMonth => Some(30.0),
            Period::Today | Period::Unbounded => None,
        }
    }
}

/// The user's current topic/period choice driving the next search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub topic: String,
    pub period_value: String,
}

impl Selection {
    pub fn new(topic: &str, period_value: &str) -> Self {
        Self {
            topic: topic.to_string(),
            period_value: period_value.to_string(),
        }
    }

    pub fn period(&self) -> Period {
        Period::from_value(&self.period_value)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.topic, self.period_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub value: String,
}

impl Button {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A row of mutually exclusive buttons. Exactly one is active at any time.
#[derive(Debug, Clone)]
pub struct ButtonGroup {
    buttons: Vec<Button>,
    active: usize,
}

impl ButtonGroup {
    /// Returns `None` for an empty button list.
    pub fn new(buttons: Vec<Button>) -> Option<Self> {
        if buttons.is_empty() {
            return None;
        }
        Some(Self { buttons, active: 0 })
    }

    pub fn topics(topics: &[String]) -> Option<Self> {
        Self::new(topics.iter().map(|t| Button::new(t, t)).collect())
    }

    pub fn periods() -> Self {
        Self {
            buttons: vec![
                Button::new("오늘", "today"),
                Button::new("3일", "3days"),
                Button::new("1주일", "1week"),
                Button::new("1개월", "1month"),
            ],
            active: 0,
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Button {
        &self.buttons[self.active]
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn activate(&mut self, index: usize) -> Option<&Button> {
        if index >= self.buttons.len() {
            return None;
        }
        self.active = index;
        Some(&self.buttons[index])
    }

    pub fn activate_next(&mut self) -> &Button {
        self.active = (self.active + 1) % self.buttons.len();
        &self.buttons[self.active]
    }

    pub fn activate_prev(&mut self) -> &Button {
        self.active = if self.active == 0 {
            self.buttons.len() - 1
        } else {
            self.active - 1
        };
        &self.buttons[self.active]
    }

    pub fn activate_value(&mut self, value: &str) -> bool {
        match self.buttons.iter().position(|b| b.value == value) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }
}

impl App {
    pub fn activate_topic(&mut self, index: usize) {
        if let Some(button) = self.topics.activate(index) {
            self.selection.topic = button.value.clone();
            debug!(topic = %self.selection.topic, "topic selected");
        }
    }

    pub fn activate_period(&mut self, index: usize) {
        if let Some(button) = self.periods.activate(index) {
            self.selection.period_value = button.value.clone();
            debug!(period = %self.selection.period_value, "period selected");
        }
    }

    /// Activate the button at `index` in whichever group has focus.
    pub fn activate_in_focus(&mut self, index: usize) {
        match self.focus {
            FocusGroup::Topic => self.activate_topic(index),
            FocusGroup::Period => self.activate_period(index),
        }
    }

    pub fn select_next(&mut self) {
        match self.focus {
            FocusGroup::Topic => self.selection.topic = self.topics.activate_next().value.clone(),
            FocusGroup::Period => {
                self.selection.period_value = self.periods.activate_next().value.clone()
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.focus {
            FocusGroup::Topic => self.selection.topic = self.topics.activate_prev().value.clone(),
            FocusGroup::Period => {
                self.selection.period_value = self.periods.activate_prev().value.clone()
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusGroup::Topic => FocusGroup::Period,
            FocusGroup::Period => FocusGroup::Topic,
        };
    }

    /// Preselect from command-line values. Unknown values leave the current
    /// button active and return false.
    pub fn preselect_topic(&mut self, value: &str) -> bool {
        if self.topics.activate_value(value) {
            self.selection.topic = self.topics.active().value.clone();
            true
        } else {
            false
        }
    }

    pub fn preselect_period(&mut self, value: &str) -> bool {
        if self.periods.activate_value(value) {
            self.selection.period_value = self.periods.active().value.clone();
            true
        } else {
            false
        }
    }
}
