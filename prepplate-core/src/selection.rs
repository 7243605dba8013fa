//! Selection state for the ingredient picker.
//!
//! Three ordered label lists, one per category, mutated only through
//! [`SelectionState::toggle`] and [`SelectionState::auto_fill`]. The caller's
//! UI binding guarantees toggled labels come from the catalog; the state
//! guarantees the per-category caps and set semantics.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::catalog::{CategoryKind, MAX_PROTEINS};

/// The user's current picks, one ordered list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    proteins: Vec<String>,
    veggies: Vec<String>,
    carbs: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current picks for one category, in selection order.
    pub fn selected(&self, kind: CategoryKind) -> &[String] {
        match kind {
            CategoryKind::Protein => &self.proteins,
            CategoryKind::Veggie => &self.veggies,
            CategoryKind::Carb => &self.carbs,
        }
    }

    fn selected_mut(&mut self, kind: CategoryKind) -> &mut Vec<String> {
        match kind {
            CategoryKind::Protein => &mut self.proteins,
            CategoryKind::Veggie => &mut self.veggies,
            CategoryKind::Carb => &mut self.carbs,
        }
    }

    pub fn is_selected(&self, kind: CategoryKind, item: &str) -> bool {
        self.selected(kind).iter().any(|s| s == item)
    }

    /// Flip one item: remove it if selected, add it if there is room,
    /// otherwise leave the state unchanged.
    pub fn toggle(&mut self, kind: CategoryKind, item: &str) {
        let max = kind.max();
        let list = self.selected_mut(kind);

        if let Some(pos) = list.iter().position(|s| s == item) {
            list.remove(pos);
        } else if list.len() < max {
            list.push(item.to_string());
        }
    }

    /// Complete an optional category with a uniform random sample of
    /// unselected catalog items. No-op for proteins, for a full category,
    /// and when nothing unselected remains.
    ///
    /// The RNG is passed in so callers (and tests) choose the source.
    pub fn auto_fill<R: Rng + ?Sized>(&mut self, kind: CategoryKind, rng: &mut R) {
        if !kind.is_auto_fillable() {
            return;
        }

        let available: Vec<&'static str> = kind
            .catalog()
            .iter()
            .filter(|item| !self.is_selected(kind, item))
            .collect();

        let list = self.selected_mut(kind);
        let needed = kind.max().saturating_sub(list.len());
        if needed == 0 || available.is_empty() {
            return;
        }

        list.extend(
            available
                .choose_multiple(rng, needed)
                .map(|item| item.to_string()),
        );
    }

    /// Generation is gated on an exact protein pick; the optional
    /// categories never block it.
    pub fn is_complete(&self) -> bool {
        self.proteins.len() == MAX_PROTEINS
    }

    /// Reset to an empty selection for a new session.
    pub fn clear(&mut self) {
        self.proteins.clear();
        self.veggies.clear();
        self.carbs.clear();
    }
}
