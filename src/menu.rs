use crate::state::AppState;

// ---------------------------------------------------------------------------
// Menu registration
// ---------------------------------------------------------------------------

/// A menu registration record: where an action appears in the menu bar and
/// what runs when it is picked. Plain data handed to the menu renderer at
/// startup; there is no dynamic discovery.
pub struct MenuAction {
    /// Top-level menu the action lives under.
    pub category: &'static str,
    /// Item label as shown to the user.
    pub label: &'static str,
    /// Fixed unique identifier.
    pub id: &'static str,
    /// Entry point, invoked with no arguments beyond the app state.
    pub run: fn(&mut AppState),
}

/// Unique id of the recon import action.
pub const IMPORT_RECON_ID: &str = "mct.import-recon";

/// All registered actions, in menu order.
pub fn menu_actions() -> &'static [MenuAction] {
    static ACTIONS: [MenuAction; 1] = [MenuAction {
        category: "MCT",
        label: "Import MCT Recon...",
        id: IMPORT_RECON_ID,
        run: crate::ui::panels::run_import_action,
    }];
    &ACTIONS
}

/// Distinct top-level categories, in first-appearance order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for action in menu_actions() {
        if !seen.contains(&action.category) {
            seen.push(action.category);
        }
    }
    seen
}

/// Actions registered under one category, in registration order.
pub fn actions_in(category: &str) -> impl Iterator<Item = &'static MenuAction> + '_ {
    menu_actions().iter().filter(move |a| a.category == category)
}
