//! Navigation engine - selection, descent, and the scrolling two-row view.

use super::{MenuId, MenuTree, Route, Target};
use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};
use crate::lcd::{self, CharDisplay, GLYPH_CURSOR};
use crate::program::ProgramId;

/// Outcome of ENTER on the selected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// The view moved into a sub-menu.
    Entered(MenuId),
    /// The selected route is a program; the caller launches it.
    Launch(ProgramId),
    /// Placeholder route, nothing happened.
    Stayed,
}

/// Which menu is on screen and which of its routes sits on the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Navigator {
    current: MenuId,
    first_visible_row: usize,
}

impl Navigator {
    pub const fn new(root: MenuId) -> Self {
        Self {
            current: root,
            first_visible_row: 0,
        }
    }

    pub fn current(&self) -> MenuId {
        self.current
    }

    pub fn first_visible_row(&self) -> usize {
        self.first_visible_row
    }

    /// Move the selection by `delta`; moves that would leave the list are
    /// ignored. Returns whether the selection changed.
    pub fn move_selection<D: CharDisplay + ?Sized>(
        &mut self,
        tree: &mut MenuTree,
        delta: isize,
        display: &mut D,
    ) -> bool {
        let Some(node) = tree.get_mut(self.current) else {
            return false;
        };
        let Some(target) = (node.selected as isize).checked_add(delta) else {
            return false;
        };
        if delta == 0 || target < 0 || target >= node.len() as isize {
            return false;
        }
        node.selected = target as usize;
        self.render(tree, display);
        true
    }

    /// Act on the selected route of the current menu.
    pub fn advance<D: CharDisplay + ?Sized>(
        &mut self,
        tree: &mut MenuTree,
        display: &mut D,
    ) -> Advance {
        let Some(target) = tree
            .get(self.current)
            .and_then(|n| n.selected_route())
            .map(Route::target)
        else {
            return Advance::Stayed;
        };
        match target {
            Target::SubMenu(Some(menu)) => {
                if self.navigate(tree, Some(menu), display) {
                    Advance::Entered(menu)
                } else {
                    Advance::Stayed
                }
            }
            Target::SubMenu(None) => Advance::Stayed,
            Target::Program(id) => Advance::Launch(id),
        }
    }

    /// Show `menu` with its first route selected. `None` (or an id the tree
    /// does not know) leaves everything untouched.
    pub fn navigate<D: CharDisplay + ?Sized>(
        &mut self,
        tree: &mut MenuTree,
        menu: Option<MenuId>,
        display: &mut D,
    ) -> bool {
        let Some(id) = menu else {
            return false;
        };
        let Some(node) = tree.get_mut(id) else {
            warn!("navigate to unknown menu {}", id);
            return false;
        };
        node.selected = 0;
        self.current = id;
        debug!("menu {}", id);
        self.render(tree, display);
        true
    }

    /// Go back to the root menu.
    pub fn jump_to_root<D: CharDisplay + ?Sized>(&mut self, tree: &mut MenuTree, display: &mut D) {
        let root = tree.root();
        self.navigate(tree, Some(root), display);
    }

    /// Scroll so the selection is visible, then redraw both rows.
    pub fn render<D: CharDisplay + ?Sized>(&mut self, tree: &MenuTree, display: &mut D) {
        let Some(node) = tree.get(self.current) else {
            return;
        };
        let window = DISPLAY_ROWS as usize;
        let selected = node.selected_index();
        if selected < self.first_visible_row || selected >= self.first_visible_row + window {
            self.first_visible_row = selected.saturating_sub(window - 1);
        }

        for row in 0..DISPLAY_ROWS {
            let index = self.first_visible_row + row as usize;
            match node.routes().get(index) {
                Some(route) => {
                    display.move_cursor(row, 0);
                    display.write_char(if index == selected { GLYPH_CURSOR } else { b' ' });
                    display.write_text(route.label());
                    let end = 1 + route.label().len();
                    if end < DISPLAY_COLS as usize {
                        lcd::clear_from(display, row, end as u8);
                    }
                }
                None => lcd::clear_from(display, row, 0),
            }
        }
    }
}
