use leptos::prelude::*;

use crate::loading::{active_overlay, LoadingFlags, OverlayKind};

#[cfg(feature = "hydrate")]
use std::time::Duration;

#[cfg(feature = "hydrate")]
use crate::loading::{
    record_visit, visited_or_new, StorageError, VisitStore, FINISH_DELAY_MS, RETRO_DURATION_MS,
    VISITED_KEY,
};

/// Visit marker in session storage. Read errors degrade to "new visitor";
/// write errors are swallowed. Either way the page renders.
#[cfg(feature = "hydrate")]
struct SessionVisitStore;

#[cfg(feature = "hydrate")]
impl VisitStore for SessionVisitStore {
    fn has_visited(&self) -> Result<bool, StorageError> {
        let storage = window()
            .session_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        let value = storage
            .get_item(VISITED_KEY)
            .map_err(|e| StorageError::Access(format!("{e:?}")))?;
        Ok(value.is_some())
    }

    fn mark_visited(&self) -> Result<(), StorageError> {
        let storage = window()
            .session_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(VISITED_KEY, "true")
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

/// The single mutation gate for the loading flags. Components read state
/// through the getters and drive transitions through the named operations;
/// nothing else touches the flags.
#[derive(Clone, Copy)]
pub struct LoadingHandle {
    flags: RwSignal<LoadingFlags>,
    returning: RwSignal<bool>,
}

impl LoadingHandle {
    pub fn is_initial_loading(&self) -> bool {
        self.flags.get().initial
    }

    pub fn is_route_loading(&self) -> bool {
        self.flags.get().route
    }

    pub fn is_model_loaded(&self) -> bool {
        self.flags.get().model_loaded
    }

    /// Which overlay is currently visible, if any.
    pub fn active_overlay(&self) -> Option<OverlayKind> {
        active_overlay(self.flags.get(), self.returning.get())
    }

    pub fn start_initial_loading(&self) {
        self.flags.update(|f| f.start_initial());
    }

    pub fn finish_initial_loading(&self) {
        self.flags.update(|f| f.finish_initial());
        #[cfg(feature = "hydrate")]
        record_visit(&SessionVisitStore);
    }

    pub fn set_model_loaded(&self, loaded: bool) {
        self.flags.update(|f| f.set_model_loaded(loaded));
    }

    pub fn set_video_complete(&self, complete: bool) {
        self.flags.update(|f| f.set_video_complete(complete));
    }

    pub fn start_route_loading(&self) {
        self.flags.update(|f| f.start_route());
    }

    pub fn finish_route_loading(&self) {
        self.flags.update(|f| f.finish_route());
    }
}

pub fn use_loading() -> LoadingHandle {
    expect_context::<LoadingHandle>()
}

pub fn provide_loading() -> LoadingHandle {
    let handle = LoadingHandle {
        // Loading starts up before anything renders.
        flags: RwSignal::new(LoadingFlags::default()),
        returning: RwSignal::new(false),
    };
    provide_context(handle);

    #[cfg(feature = "hydrate")]
    {
        // One storage probe on mount: returning visitors skip the full intro
        // and get the fast retro presentation instead.
        let retro_timer = StoredValue::new_local(None::<TimeoutHandle>);
        Effect::new(move |_| {
            if visited_or_new(&SessionVisitStore) {
                handle.returning.set(true);
                handle.flags.update(|f| f.set_model_loaded(true));
                let timer = set_timeout_with_handle(
                    move || {
                        handle.set_video_complete(true);
                        handle.finish_initial_loading();
                    },
                    Duration::from_millis(RETRO_DURATION_MS),
                )
                .ok();
                retro_timer.set_value(timer);
            }
        });

        // Once the intro video signals completion, dismiss the overlay after
        // a short delay so the exit animation can play.
        let finish_timer = StoredValue::new_local(None::<TimeoutHandle>);
        Effect::new(move |_| {
            if handle.flags.get().ready_to_finish() {
                let timer = set_timeout_with_handle(
                    move || handle.finish_initial_loading(),
                    Duration::from_millis(FINISH_DELAY_MS),
                )
                .ok();
                finish_timer.set_value(timer);
            }
        });

        on_cleanup(move || {
            if let Some(timer) = retro_timer.get_value() {
                timer.clear();
            }
            if let Some(timer) = finish_timer.get_value() {
                timer.clear();
            }
        });
    }

    handle
}
