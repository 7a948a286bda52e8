//! View and sort state shared between command handlers and the renderer.

use std::sync::RwLock;

use super::ViewMode;
use crate::lock;
use crate::models::SortMode;

#[derive(Debug, Clone, Copy)]
struct StateData {
    view_mode: ViewMode,
    /// Always a main screen.
    previous_main_view_mode: ViewMode,
    sort_mode: SortMode,
}

/// The active view mode, the back-navigation target and the network sort
/// mode.
///
/// Readers take the shared lock and writers the exclusive one; the lock
/// itself is never handed out.
#[derive(Debug)]
pub struct AppState {
    data: RwLock<StateData>,
}

impl AppState {
    /// State starting on `initial`, which must be a main screen; anything
    /// else falls back to [`ViewMode::default`].
    pub fn new(initial: ViewMode, sort_mode: SortMode) -> Self {
        let initial = if initial.is_main_screen() {
            initial
        } else {
            ViewMode::default()
        };
        Self {
            data: RwLock::new(StateData {
                view_mode: initial,
                previous_main_view_mode: initial,
                sort_mode,
            }),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        lock::read(&self.data).view_mode
    }

    /// The main screen that back-navigation returns to.
    pub fn previous_main_view_mode(&self) -> ViewMode {
        lock::read(&self.data).previous_main_view_mode
    }

    /// Activate `mode`, remembering it as the back-navigation target when it
    /// is a main screen.
    pub fn set_view_mode(&self, mode: ViewMode) {
        let mut data = lock::write(&self.data);
        data.view_mode = mode;
        if mode.is_main_screen() {
            data.previous_main_view_mode = mode;
        }
    }

    /// Activate the back-navigation target and return it.
    pub fn restore_main_view_mode(&self) -> ViewMode {
        let mut data = lock::write(&self.data);
        data.view_mode = data.previous_main_view_mode;
        data.view_mode
    }

    pub fn sort_mode(&self) -> SortMode {
        lock::read(&self.data).sort_mode
    }

    pub fn set_sort_mode(&self, mode: SortMode) {
        lock::write(&self.data).sort_mode = mode;
    }

    /// Advance the sort mode one step and return the new mode.
    ///
    /// The current mode is read under the shared lock and the next one
    /// written under the exclusive lock, so the two steps are not atomic:
    /// two concurrent rotations can both read the same mode and advance it
    /// only once.
    pub fn rotate_sort_mode(&self) -> SortMode {
        self.rotate_sort_mode_with(|| {})
    }

    /// [`rotate_sort_mode`](Self::rotate_sort_mode), running `between`
    /// after the read and before the write.
    fn rotate_sort_mode_with(&self, between: impl FnOnce()) -> SortMode {
        let next = self.sort_mode().next();
        between();
        self.set_sort_mode(next);
        next
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewMode::default(), SortMode::default())
    }
}
