//! TUI application state.
//!
//! A small screen machine: Selection -> Generating -> Results (weekly or
//! weekend-prep tab) -> RecipeDetail. All mutation happens on the event
//! loop; the generation call is the only suspending operation and runs in a
//! spawned task, reported back over a oneshot channel.

use std::sync::Arc;

use prepplate_core::ai::{AiClient, PlanError, generate_meal_plan};
use prepplate_core::catalog::{Category, CategoryKind, MAX_PROTEINS};
use prepplate_core::plan::{Recipe, WeeklyPlan};
use prepplate_core::selection::SelectionState;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Which screen the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Selection,
    Generating,
    Results,
    RecipeDetail,
}

/// The two results views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsTab {
    Weekly,
    WeekendPrep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// One row of a selection panel. Group headers are display-only.
#[derive(Debug, Clone, Copy)]
pub enum PickerRow {
    Group(&'static str),
    Item(&'static str),
}

/// Rows for one category panel, group headers interleaved for proteins.
pub fn picker_rows(kind: CategoryKind) -> Vec<PickerRow> {
    match kind.catalog() {
        Category::Grouped(groups) => groups
            .iter()
            .flat_map(|g| {
                std::iter::once(PickerRow::Group(g.label))
                    .chain(g.items.iter().copied().map(PickerRow::Item))
            })
            .collect(),
        Category::Flat(items) => items.iter().copied().map(PickerRow::Item).collect(),
    }
}

fn first_selectable(rows: &[PickerRow]) -> usize {
    rows.iter()
        .position(|row| matches!(row, PickerRow::Item(_)))
        .unwrap_or(0)
}

/// Application state for the TUI.
pub struct App {
    client: Arc<dyn AiClient>,
    pub screen: Screen,
    pub selection: SelectionState,
    /// Index into [`CategoryKind::ALL`] of the focused panel.
    pub focused: usize,
    /// Row cursor per category panel.
    pub cursors: [usize; 3],
    pub plan: Option<WeeklyPlan>,
    pub results_tab: ResultsTab,
    /// Cursor over the flattened (day, slot) meal list.
    pub meal_cursor: usize,
    pub prep_scroll: u16,
    pub detail_scroll: u16,
    pub error: Option<String>,
    pub spinner_frame: usize,
    pub should_quit: bool,
    pending: Option<oneshot::Receiver<Result<WeeklyPlan, PlanError>>>,
}

impl App {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        let cursors = [
            first_selectable(&picker_rows(CategoryKind::Protein)),
            first_selectable(&picker_rows(CategoryKind::Veggie)),
            first_selectable(&picker_rows(CategoryKind::Carb)),
        ];
        Self {
            client,
            screen: Screen::Selection,
            selection: SelectionState::new(),
            focused: 0,
            cursors,
            plan: None,
            results_tab: ResultsTab::Weekly,
            meal_cursor: 0,
            prep_scroll: 0,
            detail_scroll: 0,
            error: None,
            spinner_frame: 0,
            should_quit: false,
            pending: None,
        }
    }

    pub fn focused_kind(&self) -> CategoryKind {
        CategoryKind::ALL[self.focused]
    }

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    // -- Selection screen --

    pub fn next_category(&mut self) {
        self.focused = (self.focused + 1) % CategoryKind::ALL.len();
    }

    pub fn prev_category(&mut self) {
        self.focused = (self.focused + CategoryKind::ALL.len() - 1) % CategoryKind::ALL.len();
    }

    /// Move the focused panel's cursor to the next selectable row.
    pub fn move_cursor(&mut self, delta: isize) {
        let rows = picker_rows(self.focused_kind());
        let mut pos = self.cursors[self.focused] as isize;

        loop {
            pos += delta;
            if pos < 0 || pos as usize >= rows.len() {
                return;
            }
            if matches!(rows[pos as usize], PickerRow::Item(_)) {
                self.cursors[self.focused] = pos as usize;
                return;
            }
        }
    }

    pub fn toggle_under_cursor(&mut self) {
        let kind = self.focused_kind();
        let rows = picker_rows(kind);
        if let Some(PickerRow::Item(label)) = rows.get(self.cursors[self.focused]) {
            self.selection.toggle(kind, label);
        }
    }

    /// Random-complete the focused category; proteins are left alone.
    pub fn auto_fill_focused(&mut self) {
        self.selection
            .auto_fill(self.focused_kind(), &mut rand::rng());
    }

    // -- Generation lifecycle --

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Kick off a generation attempt. Gated on a complete protein pick and
    /// on there being no request already in flight.
    pub fn start_generation(&mut self) {
        if self.is_generating() {
            return;
        }
        if !self.selection.is_complete() {
            self.error = Some(format!(
                "Please select exactly {MAX_PROTEINS} proteins to continue."
            ));
            return;
        }

        self.error = None;
        let client = Arc::clone(&self.client);
        let proteins = self.selection.selected(CategoryKind::Protein).to_vec();
        let veggies = self.selection.selected(CategoryKind::Veggie).to_vec();
        let carbs = self.selection.selected(CategoryKind::Carb).to_vec();

        tracing::debug!(?proteins, ?veggies, ?carbs, "starting plan generation");
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = generate_meal_plan(client.as_ref(), &proteins, &veggies, &carbs).await;
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        self.screen = Screen::Generating;
    }

    /// Check the in-flight generation, if any, and transition accordingly.
    pub fn poll_generation(&mut self) {
        let Some(rx) = &mut self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(plan)) => {
                self.pending = None;
                self.plan = Some(plan);
                self.results_tab = ResultsTab::Weekly;
                self.meal_cursor = 0;
                self.prep_scroll = 0;
                self.screen = Screen::Results;
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "plan generation failed");
                self.pending = None;
                self.error = Some(err.user_message().to_string());
                self.screen = Screen::Selection;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.error = Some(
                    PlanError::GenerationFailure("generation task dropped".to_string())
                        .user_message()
                        .to_string(),
                );
                self.screen = Screen::Selection;
            }
        }
    }

    // -- Results screens --

    pub fn toggle_results_tab(&mut self) {
        self.results_tab = match self.results_tab {
            ResultsTab::Weekly => ResultsTab::WeekendPrep,
            ResultsTab::WeekendPrep => ResultsTab::Weekly,
        };
    }

    fn meal_slot_count(&self) -> usize {
        self.plan.as_ref().map_or(0, |p| p.meals.len() * 2)
    }

    pub fn move_meal_cursor(&mut self, delta: isize) {
        let count = self.meal_slot_count();
        if count == 0 {
            return;
        }
        let pos = self.meal_cursor as isize + delta;
        self.meal_cursor = pos.clamp(0, count as isize - 1) as usize;
    }

    /// The recipe under the meal cursor, with its day label and slot.
    pub fn selected_recipe(&self) -> Option<(&str, MealSlot, &Recipe)> {
        let plan = self.plan.as_ref()?;
        let day = plan.meals.get(self.meal_cursor / 2)?;
        let slot = if self.meal_cursor % 2 == 0 {
            MealSlot::Lunch
        } else {
            MealSlot::Dinner
        };
        let recipe = match slot {
            MealSlot::Lunch => &day.lunch,
            MealSlot::Dinner => &day.dinner,
        };
        Some((day.day.as_str(), slot, recipe))
    }

    pub fn open_detail(&mut self) {
        if self.results_tab == ResultsTab::Weekly && self.selected_recipe().is_some() {
            self.detail_scroll = 0;
            self.screen = Screen::RecipeDetail;
        }
    }

    pub fn scroll(&mut self, delta: i32) {
        let target = match self.screen {
            Screen::RecipeDetail => &mut self.detail_scroll,
            Screen::Results if self.results_tab == ResultsTab::WeekendPrep => &mut self.prep_scroll,
            _ => return,
        };
        *target = target.saturating_add_signed(delta as i16);
    }

    /// Drop the plan and return to a fresh selection.
    pub fn start_over(&mut self) {
        self.selection.clear();
        self.plan = None;
        self.error = None;
        self.meal_cursor = 0;
        self.prep_scroll = 0;
        self.detail_scroll = 0;
        self.focused = 0;
        self.screen = Screen::Selection;
    }

    /// Esc/q: one level up, or quit from the top.
    pub fn navigate_back(&mut self) {
        match self.screen {
            Screen::RecipeDetail => self.screen = Screen::Results,
            Screen::Selection | Screen::Results => self.should_quit = true,
            // The in-flight call cannot be cancelled; leaving the screen
            // would just orphan it, so only quit is offered here.
            Screen::Generating => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepplate_core::ai::FakeClient;
    use serde_json::json;
    use std::time::Duration;

    fn plan_body() -> String {
        let recipe = json!({
            "id": "r1",
            "name": "Shrimp Pad Thai",
            "origin": "Thailand",
            "timeMinutes": 25,
            "ingredients": [{ "name": "Shrimp", "amount": "200g" }],
            "spices": [{ "name": "White Pepper", "amount": "2g" }],
            "miseEnPlace": [{ "title": "Prep", "instruction": "Mince garlic." }],
            "cookingSteps": ["Cook."],
            "proTips": ["Serve hot."],
            "isFreezable": true,
            "searchUrl": "https://www.google.com/search?q=Shrimp+Pad+Thai"
        });
        json!({
            "meals": [{ "day": "Monday", "lunch": recipe, "dinner": recipe }],
            "weekendPrep": [{ "title": "Proteins", "tasks": ["Marinate."] }]
        })
        .to_string()
    }

    fn pick_three_proteins(app: &mut App) {
        for item in ["Shrimp", "Chicken Thigh", "Tempeh"] {
            app.selection.toggle(CategoryKind::Protein, item);
        }
    }

    #[tokio::test]
    async fn test_generation_gated_on_exact_protein_count() {
        let fake = Arc::new(FakeClient::with_default_response(&plan_body()));
        let mut app = App::new(fake.clone());
        app.selection.toggle(CategoryKind::Protein, "Shrimp");
        app.selection.toggle(CategoryKind::Protein, "Tempeh");

        app.start_generation();

        assert_eq!(
            app.error.as_deref(),
            Some("Please select exactly 3 proteins to continue.")
        );
        assert_eq!(app.screen, Screen::Selection);
        assert!(!app.is_generating());
        assert_eq!(fake.call_count(), 0, "plan service must not be invoked");
    }

    #[tokio::test]
    async fn test_generation_runs_once_and_lands_on_results() {
        let fake = Arc::new(FakeClient::with_default_response(&plan_body()));
        let mut app = App::new(fake.clone());
        pick_three_proteins(&mut app);

        app.start_generation();
        assert_eq!(app.screen, Screen::Generating);

        // A second trigger while in flight is ignored.
        app.start_generation();

        for _ in 0..100 {
            app.poll_generation();
            if app.screen != Screen::Generating {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(app.screen, Screen::Results);
        assert_eq!(fake.call_count(), 1);
        assert_eq!(app.plan.as_ref().unwrap().meals.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_generation_returns_to_selection_with_message() {
        let fake = Arc::new(FakeClient::with_default_response("not json"));
        let mut app = App::new(fake);
        pick_three_proteins(&mut app);

        app.start_generation();
        for _ in 0..100 {
            app.poll_generation();
            if app.screen != Screen::Generating {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert_eq!(app.screen, Screen::Selection);
        assert_eq!(
            app.error.as_deref(),
            Some("The chef's recipe book was messy. Please try generating again.")
        );
        assert!(app.plan.is_none(), "no partial plan may survive a failure");
    }

    #[tokio::test]
    async fn test_start_over_clears_everything() {
        let fake = Arc::new(FakeClient::with_default_response(&plan_body()));
        let mut app = App::new(fake);
        pick_three_proteins(&mut app);
        app.start_over();

        assert_eq!(app.screen, Screen::Selection);
        assert!(app.selection.selected(CategoryKind::Protein).is_empty());
        assert!(app.plan.is_none());
    }

    #[test]
    fn test_protein_cursor_starts_below_the_group_header() {
        let rows = picker_rows(CategoryKind::Protein);
        assert!(matches!(rows[0], PickerRow::Group(_)));
        assert_eq!(first_selectable(&rows), 1);

        let rows = picker_rows(CategoryKind::Veggie);
        assert_eq!(first_selectable(&rows), 0);
    }
}
