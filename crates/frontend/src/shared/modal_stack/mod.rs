use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    // Runs on every close path: button, backdrop, or stack clear.
    on_close: Option<CloseCallback>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Centralized modal stack. One detail/edit dialog per screen is the
/// norm; callers that want a single slot call `clear` first.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(Arc::new(builder), None)
    }

    /// Like `push`, with a callback that fires whenever the modal is
    /// removed, regardless of which path closed it. Screens use it to
    /// reset their selection state.
    pub fn push_with_on_close<F, C>(&self, builder: F, on_close: C) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        self.push_entry(Arc::new(builder), Some(Arc::new(on_close)))
    }

    fn push_entry(&self, builder: ModalBuilder, on_close: Option<CloseCallback>) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                on_close,
            });
        });
        handle
    }

    fn remove(&self, id: u64) {
        let mut removed = None;
        self.stack.update(|s| {
            if let Some(pos) = s.iter().position(|entry| entry.id == id) {
                removed = Some(s.remove(pos));
            }
        });
        if let Some(entry) = removed {
            if let Some(cb) = entry.on_close {
                cb();
            }
        }
    }

    /// Close on the next tick. Removing the entry synchronously during
    /// the originating DOM event dispatch drops the closure while it is
    /// still being invoked.
    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.remove(id);
        });
    }

    /// Close the topmost modal (backdrop click, treated as cancel).
    pub fn close_top(&self) {
        if let Some(entry) = self.stack.get_untracked().last() {
            self.close_deferred(entry.id);
        }
    }

    pub fn clear(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            let entries = std::mem::take(&mut *svc.stack.write());
            for entry in entries {
                if let Some(cb) = entry.on_close {
                    cb();
                }
            }
        });
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    view! {
        <For
            each=move || svc.stack.get()
            key=|entry| entry.id
            children=move |entry: ModalEntry| {
                let handle = ModalHandle { id: entry.id, svc };
                view! {
                    // Clicking the backdrop cancels; the surface stops
                    // propagation so inner clicks stay inner.
                    <div class="modal-backdrop" on:click=move |_| svc.close_top()>
                        <div class="modal-surface" on:click=|ev| ev.stop_propagation()>
                            {(entry.builder)(handle.clone())}
                        </div>
                    </div>
                }
            }
        />
    }
}
