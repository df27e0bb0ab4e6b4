//! Theme dropdown.
//!
//! Each entry swaps in a visibility vector over the fixed trace list; no
//! trace is ever rebuilt on selection.

use crate::models::{MenuButton, UpdateMenu, VisibilityUpdate};
use crate::traces::TraceSet;

pub const ALL_THEMES_LABEL: &str = "All themes";

/// Aggregate w2/w3 traces plus nodes.
pub fn visibility_for_all(set: &TraceSet) -> Vec<bool> {
    let mut visible = vec![false; set.len()];
    for i in set.aggregate_indices() {
        visible[i] = true;
    }
    visible[set.node_index()] = true;
    visible
}

/// One theme's w2/w3 traces plus nodes.
pub fn visibility_for_theme(set: &TraceSet, theme_pos: usize) -> Vec<bool> {
    let mut visible = vec![false; set.len()];
    for i in set.theme_indices(theme_pos) {
        visible[i] = true;
    }
    visible[set.node_index()] = true;
    visible
}

fn button(label: &str, visible: Vec<bool>) -> MenuButton {
    MenuButton {
        label: label.to_string(),
        method: "update",
        args: [VisibilityUpdate { visible }],
    }
}

pub fn build_menu(set: &TraceSet) -> UpdateMenu {
    let mut buttons = Vec::with_capacity(set.themes().len() + 1);
    buttons.push(button(ALL_THEMES_LABEL, visibility_for_all(set)));
    for (pos, theme) in set.themes().iter().enumerate() {
        buttons.push(button(theme, visibility_for_theme(set, pos)));
    }

    UpdateMenu {
        menu_type: "dropdown",
        direction: "down",
        active: 0,
        buttons,
        x: 0.02,
        y: 1.12,
        xanchor: "left",
        yanchor: "top",
    }
}
