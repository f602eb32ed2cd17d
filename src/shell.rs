//! Application shell - routes key presses and ticks to whoever holds the
//! focus: the menu, or the one program currently running.
//!
//! ```text
//!            ENTER on a program route
//!   Menu  ───────────────────────────▶  Program
//!   focus ◀───────────────────────────  focus
//!                 CLEAR
//! ```
//!
//! All state lives in one [`Shell`] value owned by the tick loop and
//! handed to it by exclusive reference, so nothing here needs locking.

use crate::error::Error;
use crate::keys::{KeyFilter, KEY_CLEAR, KEY_DOWN, KEY_ENTER, KEY_UP};
use crate::lcd::CharDisplay;
use crate::menu::{Advance, MenuTree, Navigator};
use crate::program::{Lifecycle, ProgramId, Programs};

/// Who currently receives key and tick events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExecutionState {
    active: Option<ProgramId>,
    filter: KeyFilter,
}

impl ExecutionState {
    pub fn active_program(&self) -> Option<ProgramId> {
        self.active
    }

    pub fn is_held(&self) -> bool {
        self.filter.is_held()
    }
}

pub struct Shell {
    tree: MenuTree,
    nav: Navigator,
    programs: Programs,
    exec: ExecutionState,
}

impl Shell {
    /// Validate the tree against the program registry and take ownership
    /// of both. Nothing is drawn until [`start`](Self::start).
    pub fn new(tree: MenuTree, programs: Programs) -> Result<Self, Error> {
        tree.validate(&programs)?;
        Ok(Self {
            nav: Navigator::new(tree.root()),
            tree,
            programs,
            exec: ExecutionState::default(),
        })
    }

    /// Show the root menu.
    pub fn start<D: CharDisplay>(&mut self, display: &mut D) {
        self.nav.jump_to_root(&mut self.tree, display);
    }

    /// One timer tick: filter the raw key sample, route a press if there
    /// was one, then let the running program (if any) animate.
    pub fn tick<D: CharDisplay>(&mut self, display: &mut D, raw: u8) {
        if let Some(code) = self.exec.filter.sample(raw) {
            self.press(display, code);
        }
        if let Some(program) = self.exec.active.and_then(|id| self.programs.get_mut(id)) {
            program.on_tick(display);
        }
    }

    /// Route one press event according to the current focus.
    pub fn press<D: CharDisplay>(&mut self, display: &mut D, code: u8) {
        match self.exec.active {
            Some(_) if code == KEY_CLEAR => self.close(display),
            Some(id) => {
                if let Some(program) = self.programs.get_mut(id) {
                    program.on_key(display, code);
                }
            }
            None => match code {
                KEY_UP => {
                    self.nav.move_selection(&mut self.tree, -1, display);
                }
                KEY_DOWN => {
                    self.nav.move_selection(&mut self.tree, 1, display);
                }
                KEY_CLEAR => self.nav.jump_to_root(&mut self.tree, display),
                KEY_ENTER => {
                    if let Advance::Launch(id) = self.nav.advance(&mut self.tree, display) {
                        self.launch(display, id);
                    }
                }
                _ => {}
            },
        }
    }

    /// Hand the focus to `id` and start it.
    ///
    /// A program that is already running is stopped first; unknown ids
    /// are ignored.
    pub fn launch<D: CharDisplay>(&mut self, display: &mut D, id: ProgramId) {
        if self.programs.get(id).is_none() {
            warn!("launch of unknown program {}", id);
            return;
        }
        if self.exec.active.is_some() {
            warn!("launch while a program is running");
            self.close(display);
        }
        self.exec.active = Some(id);
        if let Some(program) = self.programs.get_mut(id) {
            info!("start {}", program.name());
            program.on_start(display);
        }
    }

    /// Stop the running program and give the display back to the menu.
    /// Does nothing when no program is running.
    pub fn close<D: CharDisplay>(&mut self, display: &mut D) {
        let Some(id) = self.exec.active.take() else {
            warn!("close with no program running");
            return;
        };
        if let Some(program) = self.programs.get_mut(id) {
            info!("stop {}", program.name());
            program.on_stop(display);
        }
        self.nav.render(&self.tree, display);
    }

    pub fn is_running(&self) -> bool {
        self.exec.active.is_some()
    }

    pub fn execution(&self) -> &ExecutionState {
        &self.exec
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn programs(&self) -> &Programs {
        &self.programs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEY_NONE;
    use crate::lcd::fake::FakeDisplay;
    use crate::menu::{MenuId, Route};
    use crate::program::Program;

    /// Callbacks are observed through what the ButtonCounter draws.
    struct Harness {
        shell: Shell,
        lcd: FakeDisplay,
        root: MenuId,
        sub: MenuId,
        counter: ProgramId,
    }

    /// root: [Sub -> sub, Empty (placeholder), Count (program)]
    /// sub:  [Inner (placeholder), Count again (program)]
    fn harness() -> Harness {
        let mut programs = Programs::new();
        let counter = programs
            .register(Program::ButtonCounter(Default::default()))
            .unwrap();
        let mut tree = MenuTree::new();
        let root = tree.add_menu().unwrap();
        let sub = tree.add_menu().unwrap();
        tree.add_route(root, Route::submenu("Sub", sub)).unwrap();
        tree.add_route(root, Route::placeholder("Empty")).unwrap();
        tree.add_route(root, Route::program("Count", counter)).unwrap();
        tree.add_route(sub, Route::placeholder("Inner")).unwrap();
        tree.add_route(sub, Route::program("Count again", counter)).unwrap();

        let mut shell = Shell::new(tree, programs).unwrap();
        let mut lcd = FakeDisplay::new();
        shell.start(&mut lcd);
        Harness {
            shell,
            lcd,
            root,
            sub,
            counter,
        }
    }

    impl Harness {
        /// Press and release `code` through the tick path.
        fn tap(&mut self, code: u8) {
            self.shell.tick(&mut self.lcd, code);
            self.shell.tick(&mut self.lcd, KEY_NONE);
        }

        fn selected(&self) -> usize {
            let current = self.shell.navigator().current();
            self.shell.tree().get(current).unwrap().selected_index()
        }
    }

    #[test]
    fn start_renders_root() {
        let h = harness();
        assert!(!h.shell.is_running());
        assert_eq!(h.shell.navigator().current(), h.root);
        assert_eq!(h.lcd.row(0), ">Sub            ");
        assert_eq!(h.lcd.row(1), " Empty          ");
    }

    #[test]
    fn down_twice_then_enter_launches_third_entry() {
        let mut h = harness();
        h.tap(KEY_DOWN);
        h.tap(KEY_DOWN);
        assert_eq!(h.shell.navigator().first_visible_row(), 1);
        assert_eq!(h.lcd.row(1), ">Count          ");
        h.tap(KEY_ENTER);
        assert!(h.shell.is_running());
        assert_eq!(h.shell.execution().active_program(), Some(h.counter));
        assert_eq!(h.lcd.row(0), "Presses: 0      ");
    }

    #[test]
    fn enter_on_submenu_resets_its_selection() {
        let mut h = harness();
        h.tap(KEY_ENTER);
        assert_eq!(h.shell.navigator().current(), h.sub);
        h.tap(KEY_DOWN);
        assert_eq!(h.selected(), 1);
        h.tap(KEY_CLEAR);
        h.tap(KEY_ENTER);
        assert_eq!(h.shell.navigator().current(), h.sub);
        assert_eq!(h.selected(), 0);
    }

    #[test]
    fn keys_go_to_the_program_while_it_runs() {
        let mut h = harness();
        h.shell.launch(&mut h.lcd, h.counter);
        let nav_before = *h.shell.navigator();

        for code in [KEY_UP, KEY_DOWN, KEY_ENTER, 1] {
            h.tap(code);
        }
        assert_eq!(h.lcd.row(0), "Presses: 4      ");
        assert_eq!(h.lcd.row(1), "Last: 1         ");
        // Menu keys did not move the menu underneath.
        assert_eq!(*h.shell.navigator(), nav_before);
    }

    #[test]
    fn clear_closes_program_and_restores_previous_menu() {
        let mut h = harness();
        h.tap(KEY_ENTER); // into sub
        h.tap(KEY_DOWN); // "Count again"
        h.tap(KEY_ENTER);
        assert!(h.shell.is_running());

        h.tap(KEY_CLEAR);
        assert!(!h.shell.is_running());
        assert_eq!(h.shell.navigator().current(), h.sub);
        assert_eq!(h.selected(), 1);
        assert_eq!(h.lcd.row(0), " Inner          ");
        assert_eq!(h.lcd.row(1), ">Count again    ");
    }

    #[test]
    fn clear_in_menu_jumps_to_root_not_one_level_up() {
        let mut h = harness();
        h.tap(KEY_ENTER);
        h.tap(KEY_DOWN);
        h.tap(KEY_CLEAR);
        assert!(!h.shell.is_running());
        assert_eq!(h.shell.navigator().current(), h.root);
        assert_eq!(h.selected(), 0);
        assert_eq!(h.lcd.row(0), ">Sub            ");
    }

    #[test]
    fn holding_a_key_is_one_press() {
        let mut h = harness();
        for _ in 0..50 {
            h.shell.tick(&mut h.lcd, KEY_DOWN);
        }
        assert_eq!(h.selected(), 1);
        h.shell.tick(&mut h.lcd, KEY_NONE);
        h.shell.tick(&mut h.lcd, KEY_DOWN);
        assert_eq!(h.selected(), 2);
    }

    #[test]
    fn enter_over_placeholder_does_nothing() {
        let mut h = harness();
        h.tap(KEY_DOWN);
        h.tap(KEY_ENTER);
        assert!(!h.shell.is_running());
        assert_eq!(h.shell.navigator().current(), h.root);
        assert_eq!(h.selected(), 1);
    }

    #[test]
    fn double_close_is_harmless() {
        let mut h = harness();
        h.shell.launch(&mut h.lcd, h.counter);
        h.shell.close(&mut h.lcd);
        let writes = h.lcd.writes;
        h.shell.close(&mut h.lcd);
        assert!(!h.shell.is_running());
        assert_eq!(h.lcd.writes, writes);
    }

    #[test]
    fn unknown_program_is_not_launched() {
        let mut h = harness();
        let mut programs = Programs::new();
        for _ in 0..3 {
            programs
                .register(Program::ButtonCounter(Default::default()))
                .unwrap();
        }
        // Id valid in another registry, unknown in this one.
        let foreign = programs
            .register(Program::ButtonCounter(Default::default()))
            .unwrap();
        h.shell.launch(&mut h.lcd, foreign);
        assert!(!h.shell.is_running());
    }

    #[test]
    fn program_ticks_even_without_keys() {
        let tick = crate::timer::TickPeriod::from_secs(0.25).unwrap();
        let mut programs = Programs::new();
        let sw = programs
            .register(Program::Stopwatch(crate::program::Stopwatch::new(tick)))
            .unwrap();
        let mut tree = MenuTree::new();
        let root = tree.add_menu().unwrap();
        tree.add_route(root, Route::program("Stopwatch", sw)).unwrap();
        let mut shell = Shell::new(tree, programs).unwrap();
        let mut lcd = FakeDisplay::new();
        shell.start(&mut lcd);

        shell.tick(&mut lcd, KEY_ENTER); // launch
        shell.tick(&mut lcd, KEY_NONE);
        shell.tick(&mut lcd, KEY_ENTER); // run
        shell.tick(&mut lcd, KEY_NONE);
        for _ in 0..4 {
            shell.tick(&mut lcd, KEY_NONE);
        }
        // Running for the press tick, its release and four idle ticks.
        assert_eq!(lcd.row(1), "00:01.50        ");
    }

    #[test]
    fn clear_stops_the_program_before_returning_to_the_menu() {
        let tick = crate::timer::TickPeriod::from_secs(0.25).unwrap();
        let mut programs = Programs::new();
        let sw = programs
            .register(Program::Stopwatch(crate::program::Stopwatch::new(tick)))
            .unwrap();
        let mut tree = MenuTree::new();
        let root = tree.add_menu().unwrap();
        tree.add_route(root, Route::program("Stopwatch", sw)).unwrap();
        let mut shell = Shell::new(tree, programs).unwrap();
        let mut lcd = FakeDisplay::new();
        shell.start(&mut lcd);

        shell.tick(&mut lcd, KEY_ENTER); // launch
        shell.tick(&mut lcd, KEY_NONE);
        shell.tick(&mut lcd, KEY_ENTER); // run
        shell.tick(&mut lcd, KEY_NONE);
        let running = |shell: &Shell| match shell.programs().get(sw) {
            Some(Program::Stopwatch(s)) => s.is_running(),
            _ => panic!("stopwatch missing"),
        };
        assert!(running(&shell));

        shell.tick(&mut lcd, KEY_CLEAR);
        assert!(!shell.is_running());
        // on_stop ran: the stopwatch no longer counts.
        assert!(!running(&shell));
        assert_eq!(lcd.row(0), ">Stopwatch      ");
    }

    #[test]
    fn closing_tick_does_not_tick_the_program() {
        let mut h = harness();
        h.shell.launch(&mut h.lcd, h.counter);
        h.shell.tick(&mut h.lcd, KEY_CLEAR);
        assert!(!h.shell.is_running());
        assert_eq!(h.lcd.row(0), ">Sub            ");
    }

    #[test]
    fn invalid_tree_is_rejected() {
        let tree = MenuTree::new();
        assert_eq!(
            Shell::new(tree, Programs::new()).err(),
            Some(Error::UnknownMenu)
        );
    }
}
