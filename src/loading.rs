use thiserror::Error;

/// Storage key marking that the first-visit experience has completed.
/// Presence of any value counts; the stored value itself is not inspected.
pub const VISITED_KEY: &str = "hasVisited";

/// How long the returning-visitor (retro) presentation runs before it
/// completes on its own.
pub const RETRO_DURATION_MS: u64 = 1500;
/// Delay between the intro video finishing and the overlay being dismissed,
/// so the exit animation has a frame to play.
pub const FINISH_DELAY_MS: u64 = 100;
/// Retro progress bar tick interval and per-tick increment.
pub const RETRO_TICK_MS: u64 = 30;
pub const RETRO_TICK_STEP: u32 = 2;
/// Retro status text cycle interval.
pub const RETRO_TEXT_MS: u64 = 250;
/// Hold at 100% before the retro overlay reports completion.
pub const RETRO_HOLD_MS: u64 = 200;

/// The four loading flags. Consumers read these; mutation goes through the
/// transition methods only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingFlags {
    pub initial: bool,
    pub route: bool,
    pub model_loaded: bool,
    pub video_complete: bool,
}

impl Default for LoadingFlags {
    /// App-start configuration: the initial overlay is up before anything
    /// else renders.
    fn default() -> Self {
        Self {
            initial: true,
            route: false,
            model_loaded: false,
            video_complete: false,
        }
    }
}

impl LoadingFlags {
    /// Reset to the beginning-of-load configuration. The route flag is
    /// independent and survives.
    pub fn start_initial(&mut self) {
        self.initial = true;
        self.model_loaded = false;
        self.video_complete = false;
    }

    pub fn finish_initial(&mut self) {
        self.initial = false;
    }

    pub fn set_model_loaded(&mut self, loaded: bool) {
        self.model_loaded = loaded;
    }

    pub fn set_video_complete(&mut self, complete: bool) {
        self.video_complete = complete;
    }

    pub fn start_route(&mut self) {
        self.route = true;
    }

    pub fn finish_route(&mut self) {
        self.route = false;
    }

    /// True when the intro video has finished but the overlay is still up,
    /// i.e. the finish transition should be scheduled.
    pub fn ready_to_finish(&self) -> bool {
        self.video_complete && self.initial
    }
}

/// Which full-screen overlay is visible, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// First-visit intro video experience.
    Intro,
    /// Fast fixed-duration loader for returning visitors.
    Retro,
    /// Lightweight route-transition loader.
    Route,
}

/// Select the active overlay. The initial overlay takes precedence while
/// both loading flags are set; the two should not normally co-occur.
pub fn active_overlay(flags: LoadingFlags, returning_visitor: bool) -> Option<OverlayKind> {
    if flags.initial {
        if returning_visitor {
            Some(OverlayKind::Retro)
        } else {
            Some(OverlayKind::Intro)
        }
    } else if flags.route {
        Some(OverlayKind::Route)
    } else {
        None
    }
}

#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("client storage is unavailable")]
    Unavailable,
    #[error("client storage access failed: {0}")]
    Access(String),
}

/// Access to the visit marker in client storage.
pub trait VisitStore {
    fn has_visited(&self) -> Result<bool, StorageError>;
    fn mark_visited(&self) -> Result<(), StorageError>;
}

/// Read the visit marker, degrading to "new visitor" on any storage error.
/// Storage problems are logged and never block rendering.
pub fn visited_or_new(store: &impl VisitStore) -> bool {
    match store.has_visited() {
        Ok(visited) => visited,
        Err(e) => {
            log::warn!("could not read visit marker: {e}");
            false
        }
    }
}

/// Write the visit marker, swallowing storage errors. The write is
/// idempotent, so repeated calls have no additional effect.
pub fn record_visit(store: &impl VisitStore) {
    if let Err(e) = store.mark_visited() {
        log::warn!("could not record visit marker: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeStore {
        visited: RefCell<Option<bool>>,
        fail_reads: bool,
        fail_writes: bool,
        writes: Cell<usize>,
    }

    impl FakeStore {
        fn new() -> Self {
            Self {
                visited: RefCell::new(None),
                fail_reads: false,
                fail_writes: false,
                writes: Cell::new(0),
            }
        }

        fn broken() -> Self {
            Self {
                fail_reads: true,
                fail_writes: true,
                ..Self::new()
            }
        }
    }

    impl VisitStore for FakeStore {
        fn has_visited(&self) -> Result<bool, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Unavailable);
            }
            Ok(self.visited.borrow().is_some())
        }

        fn mark_visited(&self) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Unavailable);
            }
            self.writes.set(self.writes.get() + 1);
            *self.visited.borrow_mut() = Some(true);
            Ok(())
        }
    }

    #[test]
    fn app_start_shows_initial_overlay() {
        let flags = LoadingFlags::default();
        assert!(flags.initial);
        assert!(!flags.model_loaded);
        assert!(!flags.video_complete);
        assert_eq!(active_overlay(flags, false), Some(OverlayKind::Intro));
        assert_eq!(active_overlay(flags, true), Some(OverlayKind::Retro));
    }

    #[test]
    fn start_initial_resets_but_keeps_route_flag() {
        let mut flags = LoadingFlags::default();
        flags.finish_initial();
        flags.set_model_loaded(true);
        flags.set_video_complete(true);
        flags.start_route();

        flags.start_initial();
        assert!(flags.initial);
        assert!(!flags.model_loaded);
        assert!(!flags.video_complete);
        assert!(flags.route);
    }

    #[test]
    fn initial_overlay_wins_over_route() {
        let mut flags = LoadingFlags::default();
        flags.start_route();
        assert_eq!(active_overlay(flags, false), Some(OverlayKind::Intro));

        flags.finish_initial();
        assert_eq!(active_overlay(flags, false), Some(OverlayKind::Route));

        flags.finish_route();
        assert_eq!(active_overlay(flags, false), None);
    }

    #[test]
    fn video_complete_during_initial_triggers_finish() {
        let mut flags = LoadingFlags::default();
        assert!(!flags.ready_to_finish());
        flags.set_video_complete(true);
        assert!(flags.ready_to_finish());
        flags.finish_initial();
        assert!(!flags.ready_to_finish());
    }

    #[test]
    fn finishing_twice_marks_visit_once_in_effect() {
        let store = FakeStore::new();
        let mut flags = LoadingFlags::default();

        flags.finish_initial();
        record_visit(&store);
        flags.finish_initial();
        record_visit(&store);

        assert!(!flags.initial);
        assert!(visited_or_new(&store));
        // Second write re-sets an already-true value.
        assert_eq!(store.writes.get(), 2);
        assert_eq!(*store.visited.borrow(), Some(true));
    }

    #[test]
    fn storage_read_failure_degrades_to_new_visitor() {
        let store = FakeStore::broken();
        assert!(!visited_or_new(&store));
        // Writes fail silently too.
        record_visit(&store);
        assert_eq!(store.writes.get(), 0);
    }
}
