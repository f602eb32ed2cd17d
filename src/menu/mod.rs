//! Menu tree - a fixed arena of menus linked by index.
//!
//! Menus are created once at startup and never freed. Routes point at
//! other menus or at registered programs through [`MenuId`] /
//! [`ProgramId`] indices, so the tree holds no references into itself.
//! The only state that changes after startup is each menu's selected
//! index, owned by the [`Navigator`].

pub mod nav;

use heapless::Vec;

use crate::config::{DISPLAY_COLS, MAX_MENUS, MAX_ROUTES};
use crate::error::Error;
use crate::program::{ProgramId, Programs};

pub use nav::{Advance, Navigator};

/// Stable index of a menu in its [`MenuTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuId(u8);

impl MenuId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a route leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// Another menu; `None` marks an entry with nothing behind it yet.
    SubMenu(Option<MenuId>),
    /// A demo program.
    Program(ProgramId),
}

/// One selectable menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    label: &'static str,
    target: Target,
}

impl Route {
    pub const fn submenu(label: &'static str, menu: MenuId) -> Self {
        Self {
            label,
            target: Target::SubMenu(Some(menu)),
        }
    }

    /// Entry that shows up in the list but goes nowhere.
    pub const fn placeholder(label: &'static str) -> Self {
        Self {
            label,
            target: Target::SubMenu(None),
        }
    }

    pub const fn program(label: &'static str, program: ProgramId) -> Self {
        Self {
            label,
            target: Target::Program(program),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn target(&self) -> Target {
        self.target
    }
}

/// A menu: its routes in display order and the current selection.
#[derive(Debug, Default)]
pub struct MenuNode {
    routes: Vec<Route, MAX_ROUTES>,
    selected: usize,
}

impl MenuNode {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_route(&self) -> Option<&Route> {
        self.routes.get(self.selected)
    }
}

/// Arena of menus. The first menu added is the root.
#[derive(Debug, Default)]
pub struct MenuTree {
    nodes: Vec<MenuNode, MAX_MENUS>,
}

impl MenuTree {
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append an empty menu and return its id.
    pub fn add_menu(&mut self) -> Result<MenuId, Error> {
        let id = MenuId(self.nodes.len() as u8);
        self.nodes
            .push(MenuNode::default())
            .map_err(|_| Error::TooManyMenus)?;
        Ok(id)
    }

    /// Append a route to `menu`; insertion order is display order.
    pub fn add_route(&mut self, menu: MenuId, route: Route) -> Result<(), Error> {
        if route.label.len() > DISPLAY_COLS as usize {
            return Err(Error::LabelTooLong);
        }
        self.nodes
            .get_mut(menu.index())
            .ok_or(Error::UnknownMenu)?
            .routes
            .push(route)
            .map_err(|_| Error::TooManyRoutes)
    }

    /// The entry menu. Only meaningful once a menu has been added.
    pub fn root(&self) -> MenuId {
        MenuId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: MenuId) -> Option<&MenuNode> {
        self.nodes.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: MenuId) -> Option<&mut MenuNode> {
        self.nodes.get_mut(id.index())
    }

    /// Check the finished tree: at least a root, no empty menus, and every
    /// route target present in this tree or in `programs`.
    pub fn validate(&self, programs: &Programs) -> Result<(), Error> {
        if self.nodes.is_empty() {
            return Err(Error::UnknownMenu);
        }
        for node in &self.nodes {
            if node.is_empty() {
                return Err(Error::EmptyMenu);
            }
            for route in &node.routes {
                match route.target {
                    Target::SubMenu(Some(menu)) if self.get(menu).is_none() => {
                        return Err(Error::UnknownMenu)
                    }
                    Target::Program(id) if programs.get(id).is_none() => {
                        return Err(Error::UnknownProgram)
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
