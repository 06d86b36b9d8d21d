//! Application state and core logic for the wheel TUI.
//!
//! This module contains the `App` struct which owns the candidate list,
//! the exclusion set, the header and the wheel. Every mutation goes
//! through an `App` method so that it is written through to the store
//! before the method returns.

use std::collections::HashSet;
use std::time::Instant;

use chrono::NaiveDate;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::cli::CliConfig;
use crate::effects::Effects;
use crate::models::{CandidateList, ExclusionSet, Mode, SortDirection, pick_random_header};
use crate::store::Persistence;
use crate::theme::{BG_TERTIARY, TEXT_MUTED, TEXT_PRIMARY};
use crate::wheel::{Slot, SpinError, Wheel, eligible};

/// Application state
pub struct App {
    pub candidates: CandidateList,
    pub exclusions: ExclusionSet,
    pub header: String,
    pub wheel: Wheel,
    pub effects: Effects,
    pub mode: Mode,
    // Direction used by the next sort request
    pub sort_direction: SortDirection,
    // Text views over the model, rebuilt after non-editor mutations
    pub names_editor: TextArea<'static>,
    pub header_editor: TextArea<'static>,
    // Highlighted row in the exclusion list
    pub exclusion_cursor: usize,
    pub should_quit: bool,
    pub started: Instant,
    // Window title waiting to be pushed to the terminal
    pending_title: Option<String>,
    persistence: Persistence,
    rng: StdRng,
}

impl App {
    pub fn new(mut persistence: Persistence, config: &CliConfig, today: NaiveDate) -> Self {
        let candidates = persistence.load_candidates();
        let exclusions = persistence.load_exclusions();
        let header = persistence.load_header();
        // Re-store the header so an empty stored value is replaced by the default
        persistence.save_header(&header);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            "Loaded {} names, {} excluded",
            candidates.len(),
            exclusions.len()
        );

        Self {
            names_editor: names_editor(&candidates),
            header_editor: header_editor(&header),
            candidates,
            exclusions,
            pending_title: Some(header.clone()),
            header,
            wheel: Wheel::new(config.spin_duration),
            effects: Effects::new(config.effects, today),
            mode: Mode::Wheel,
            sort_direction: SortDirection::default(),
            exclusion_cursor: 0,
            should_quit: false,
            started: Instant::now(),
            persistence,
            rng,
        }
    }

    /// Eligible slices of the wheel, in list order
    pub fn slots(&self) -> Vec<Slot> {
        eligible(&self.candidates, &self.exclusions)
    }

    pub fn can_spin(&self) -> bool {
        self.wheel.can_spin(&self.slots())
    }

    /// List edits are refused while the wheel is turning so the drawn
    /// winner always belongs to the rendered list
    pub fn list_locked(&self) -> bool {
        self.wheel.is_spinning()
    }

    pub fn spin(&mut self, now: Instant) -> Result<(), SpinError> {
        let slots = self.slots();
        match self.wheel.start_spin(&slots, now, &mut self.rng) {
            Ok(()) => {
                debug!("Spin started over {} slots", slots.len());
                Ok(())
            }
            Err(err) => {
                debug!("Spin refused: {}", err);
                Err(err)
            }
        }
    }

    /// Advance timers: finishes the spin and expires effects
    pub fn tick(&mut self, now: Instant) {
        if let Some(winner) = self.wheel.tick(now) {
            info!("Winner: {}", winner.name);
            self.effects.celebrate(now);
        }
        self.effects.tick(now);
    }

    /// Close the winner dialog, keeping the winner on the list
    pub fn close_winner(&mut self) {
        if self.wheel.dismiss().is_some() {
            self.effects.clear_celebration();
        }
    }

    /// Remove the announced winner from the list and close the dialog
    pub fn remove_winner(&mut self) {
        let Some(winner) = self.wheel.dismiss() else {
            return;
        };
        self.effects.clear_celebration();
        let removed = self.candidates.remove(&winner.name);
        info!("Removed {} ({} entries)", winner.name, removed);
        self.after_list_change();
    }

    pub fn shuffle(&mut self) -> bool {
        if self.list_locked() {
            return false;
        }
        self.candidates.shuffle(&mut self.rng);
        self.after_list_change();
        true
    }

    /// Sort in the current direction, then flip it for the next request
    pub fn sort(&mut self) -> bool {
        if self.list_locked() {
            return false;
        }
        self.candidates.sort(self.sort_direction);
        self.sort_direction = self.sort_direction.toggle();
        self.after_list_change();
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.list_locked() {
            return false;
        }
        self.candidates.clear();
        self.after_list_change();
        true
    }

    /// Replace the list from the names editor's current text. The editor
    /// keeps its own text (including blank lines being typed).
    pub fn apply_names_editor(&mut self) -> bool {
        if self.list_locked() {
            return false;
        }
        let text = self.names_editor.lines().join("\n");
        self.candidates.replace_all(&text);
        self.persistence.save_candidates(&self.candidates);
        self.clamp_exclusion_cursor();
        true
    }

    /// Rebuild the names editor from the model
    pub fn sync_names_editor(&mut self) {
        self.names_editor = names_editor(&self.candidates);
    }

    pub fn toggle_exclusion(&mut self, name: &str) -> bool {
        if self.list_locked() {
            return false;
        }
        let excluded = self.exclusions.toggle(name);
        debug!("{} {}", name, if excluded { "excluded" } else { "included" });
        self.persistence.save_exclusions(&self.exclusions);
        true
    }

    pub fn toggle_selected_exclusion(&mut self) -> bool {
        let Some(name) = self
            .exclusion_rows()
            .get(self.exclusion_cursor)
            .map(|name| name.to_string())
        else {
            return false;
        };
        self.toggle_exclusion(&name)
    }

    /// Unique names in list order, one row each in the exclusion list
    pub fn exclusion_rows(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.candidates
            .names()
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn move_exclusion_cursor(&mut self, delta: isize) {
        let rows = self.exclusion_rows().len();
        if rows == 0 {
            self.exclusion_cursor = 0;
            return;
        }
        let next = self.exclusion_cursor as isize + delta;
        self.exclusion_cursor = next.clamp(0, rows as isize - 1) as usize;
    }

    pub fn set_header(&mut self, text: &str) {
        self.header = text.to_string();
        self.persistence.save_header(&self.header);
        self.pending_title = Some(self.header.clone());
    }

    pub fn random_header(&mut self) {
        let header = pick_random_header(&mut self.rng);
        self.set_header(header);
        self.header_editor = header_editor(&self.header);
    }

    /// Window title to push to the terminal, if it changed
    pub fn take_pending_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    /// Animation clock in tenths of a second since start
    pub fn animation_tick(&self, now: Instant) -> u64 {
        (now.saturating_duration_since(self.started).as_millis() / 100) as u64
    }

    /// Tear down timers before the app goes away
    pub fn shutdown(&mut self) {
        self.wheel.cancel();
        self.effects.clear_celebration();
    }

    #[cfg(test)]
    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    fn after_list_change(&mut self) {
        self.persistence.save_candidates(&self.candidates);
        self.sync_names_editor();
        self.clamp_exclusion_cursor();
    }

    fn clamp_exclusion_cursor(&mut self) {
        let rows = self.exclusion_rows().len();
        self.exclusion_cursor = self.exclusion_cursor.min(rows.saturating_sub(1));
    }
}

fn names_editor(candidates: &CandidateList) -> TextArea<'static> {
    let mut editor = TextArea::new(candidates.names().to_vec());
    editor.set_placeholder_text("Enter names, one per line");
    editor.set_placeholder_style(Style::default().fg(TEXT_MUTED));
    editor.set_style(Style::default().fg(TEXT_PRIMARY));
    editor.set_cursor_line_style(Style::default().bg(BG_TERTIARY));
    editor.move_cursor(CursorMove::Bottom);
    editor.move_cursor(CursorMove::End);
    editor
}

fn header_editor(header: &str) -> TextArea<'static> {
    let mut editor = TextArea::new(vec![header.to_string()]);
    editor.set_placeholder_text("Edit header text");
    editor.set_placeholder_style(Style::default().fg(TEXT_MUTED));
    editor.set_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD));
    editor.set_cursor_line_style(Style::default());
    editor.move_cursor(CursorMove::End);
    editor
}
