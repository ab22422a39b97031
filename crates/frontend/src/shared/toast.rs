use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Mutation acknowledgments surface here: success and failure both end
/// in a toast, nothing propagates past the screen boundary.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Success);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Destructive);
    }

    fn push(&self, title: &str, description: &str, variant: ToastVariant) {
        let entry = ToastEntry {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            variant,
        };
        let id = entry.id;
        self.toasts.update(|list| list.push(entry));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast: ToastEntry| {
                    let id = toast.id;
                    let variant_class = match toast.variant {
                        ToastVariant::Success => "toast toast--success",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=variant_class>
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
