//! Date picker widget.
//!
//! Headless calendar state: a selected civil date, a viewed month, and a
//! day grid padded with the previous and next month's days to full
//! weeks, the way a month calendar renders. Calendar arithmetic is done
//! directly on civil dates (proleptic Gregorian, Sunday week start).

use serde::{Deserialize, Serialize};

/// A civil (proleptic Gregorian) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDate {
    /// Year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-based
    pub day: u32,
}

impl CivilDate {
    /// Create a date; the day is clamped into the month.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let month = month.clamp(1, 12);
        Self {
            year,
            month,
            day: day.clamp(1, days_in_month(year, month)),
        }
    }
}

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day number within its month
    pub number: u32,
    /// Whether this cell belongs to the viewed month
    pub in_view_month: bool,
    /// Month this cell belongs to, 1-12
    pub month: u32,
    /// Year this cell belongs to
    pub year: i32,
}

impl DayCell {
    /// The civil date of this cell.
    #[must_use]
    pub fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.number)
    }
}

/// Message emitted when a day is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelected {
    /// The newly selected date
    pub date: CivilDate,
}

/// Whether a year is a leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month. Months outside 1-12 are clamped.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day of week for a civil date, 0 = Sunday (Sakamoto's method).
#[must_use]
pub fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = month.clamp(1, 12);
    let y = if month < 3 { year - 1 } else { year };
    let dow = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + OFFSETS[(month - 1) as usize]
        + day as i32)
        .rem_euclid(7);
    dow as u32
}

const fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

const fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

/// Headless date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePicker {
    /// Weekday labels, Sunday first
    day_labels: [String; 7],
    /// Month labels, January first
    month_labels: [String; 12],
    /// Years offered by the year dropdown
    selectable_years: Vec<i32>,
    /// Currently selected date
    selected: CivilDate,
    /// Viewed month, 1-12
    view_month: u32,
    /// Viewed year
    view_year: i32,
    /// Whether the calendar is visible
    #[serde(skip)]
    visible: bool,
    /// Keyboard cursor index into the day grid
    #[serde(skip)]
    cursor: usize,
}

impl DatePicker {
    /// Create a date picker viewing the selected date's month.
    #[must_use]
    pub fn new(selected: CivilDate) -> Self {
        let mut picker = Self {
            day_labels: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"].map(String::from),
            month_labels: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
            selectable_years: (1900..=2100).collect(),
            selected,
            view_month: selected.month,
            view_year: selected.year,
            visible: false,
            cursor: 0,
        };
        picker.cursor = picker.cursor_for_selected();
        picker
    }

    /// Set the weekday labels, Sunday first.
    #[must_use]
    pub fn day_labels(mut self, labels: [String; 7]) -> Self {
        self.day_labels = labels;
        self
    }

    /// Set the month labels, January first.
    #[must_use]
    pub fn month_labels(mut self, labels: [String; 12]) -> Self {
        self.month_labels = labels;
        self
    }

    /// Set the years offered by the year dropdown.
    #[must_use]
    pub fn selectable_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.selectable_years = years.into_iter().collect();
        self
    }

    /// Weekday labels, Sunday first.
    #[must_use]
    pub fn weekday_labels(&self) -> &[String; 7] {
        &self.day_labels
    }

    /// Label of the viewed month.
    #[must_use]
    pub fn view_month_label(&self) -> &str {
        &self.month_labels[(self.view_month - 1) as usize]
    }

    /// Years offered by the year dropdown.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.selectable_years
    }

    /// Currently selected date.
    #[must_use]
    pub const fn selected(&self) -> CivilDate {
        self.selected
    }

    /// Viewed (month, year).
    #[must_use]
    pub const fn view(&self) -> (u32, i32) {
        (self.view_month, self.view_year)
    }

    /// Whether the calendar is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Keyboard cursor index into [`Self::day_grid`].
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected date in ISO form, `YYYY-MM-DD`.
    #[must_use]
    pub fn display_date(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.selected.year, self.selected.month, self.selected.day
        )
    }

    /// The day grid for the viewed month: full weeks, padded with the
    /// trailing days of the previous month and the leading days of the
    /// next month, which are marked as outside the viewed month.
    #[must_use]
    pub fn day_grid(&self) -> Vec<DayCell> {
        let (year, month) = (self.view_year, self.view_month);
        let days = days_in_month(year, month);
        let leading = day_of_week(year, month, 1);
        let trailing = 6 - day_of_week(year, month, days);
        let (prev_m, prev_y) = previous_month(month, year);
        let (next_m, next_y) = next_month(month, year);
        let prev_days = days_in_month(prev_y, prev_m);

        let mut cells = Vec::with_capacity((leading + days + trailing) as usize);
        for i in 0..leading {
            cells.push(DayCell {
                number: prev_days - leading + 1 + i,
                in_view_month: false,
                month: prev_m,
                year: prev_y,
            });
        }
        for number in 1..=days {
            cells.push(DayCell {
                number,
                in_view_month: true,
                month,
                year,
            });
        }
        for number in 1..=trailing {
            cells.push(DayCell {
                number,
                in_view_month: false,
                month: next_m,
                year: next_y,
            });
        }
        cells
    }

    /// Whether a cell holds the selected date.
    #[must_use]
    pub fn is_selected(&self, cell: &DayCell) -> bool {
        cell.number == self.selected.day
            && cell.month == self.selected.month
            && cell.year == self.selected.year
    }

    /// Open the calendar, returning the view to the selected date.
    pub fn show(&mut self) {
        self.visible = true;
        self.view_month = self.selected.month;
        self.view_year = self.selected.year;
        self.cursor = self.cursor_for_selected();
    }

    /// Close the calendar.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// View the next month.
    pub fn next_month(&mut self) {
        let (month, year) = next_month(self.view_month, self.view_year);
        self.view_month = month;
        self.view_year = year;
        self.clamp_cursor();
    }

    /// View the previous month.
    pub fn previous_month(&mut self) {
        let (month, year) = previous_month(self.view_month, self.view_year);
        self.view_month = month;
        self.view_year = year;
        self.clamp_cursor();
    }

    /// View a month, 1-12. Out-of-range months are ignored.
    pub fn set_view_month(&mut self, month: u32) {
        if (1..=12).contains(&month) {
            self.view_month = month;
            self.clamp_cursor();
        }
    }

    /// View a year. Years outside the selectable list are ignored.
    pub fn set_view_year(&mut self, year: i32) {
        if self.selectable_years.contains(&year) {
            self.view_year = year;
            self.clamp_cursor();
        }
    }

    /// Select a day cell, closing the calendar.
    pub fn select_day(&mut self, cell: DayCell) -> DateSelected {
        self.selected = cell.date();
        self.visible = false;
        DateSelected {
            date: self.selected,
        }
    }

    /// Select the day under the cursor.
    #[must_use]
    pub fn commit_cursor(&mut self) -> Option<DateSelected> {
        let cell = self.day_grid().get(self.cursor).copied()?;
        Some(self.select_day(cell))
    }

    /// Move the cursor one cell right; at the end of a week row, page to
    /// the next month instead.
    pub fn cursor_right(&mut self) {
        if (self.cursor + 1) % 7 == 0 {
            self.next_month();
        } else {
            self.cursor += 1;
            self.clamp_cursor();
        }
    }

    /// Move the cursor one cell left; at the start of a week row, page
    /// to the previous month instead.
    pub fn cursor_left(&mut self) {
        if self.cursor % 7 == 0 {
            self.previous_month();
        } else {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one week up, stopping at the first row.
    pub fn cursor_up(&mut self) {
        if self.cursor >= 7 {
            self.cursor -= 7;
        }
    }

    /// Move the cursor one week down, stopping at the last row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 7 < self.day_grid().len() {
            self.cursor += 7;
        }
    }

    fn cursor_for_selected(&self) -> usize {
        self.day_grid()
            .iter()
            .position(|cell| self.is_selected(cell))
            .unwrap_or(0)
    }

    /// Keep the cursor inside the grid when the viewed month shrinks.
    fn clamp_cursor(&mut self) {
        let len = self.day_grid().len();
        while self.cursor >= len {
            self.cursor -= 7;
        }
    }
}
