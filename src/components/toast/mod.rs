//! Toast Notifications
//!
//! Transient, non-blocking messages with a severity variant. A [`Toaster`]
//! context is provided at the root; any component can enqueue a toast, and
//! the [`ToastViewport`] renders the stack bottom-right.
//!
//! Toasts auto-dismiss after their duration, or earlier via the close
//! button. Removal is by id and idempotent.

use leptos::*;
use uuid::Uuid;

use crate::components::common::{AlertTriangleIcon, CheckCircleIcon, CloseIcon};

/// How long a toast stays on screen unless it asks for something else.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Toast severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn container_class(self) -> &'static str {
        match self {
            ToastVariant::Default => "bg-slate-800 border-slate-700",
            ToastVariant::Destructive => "bg-red-950 border-red-500/40",
        }
    }
}

/// A single notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title).with_description(description)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Notification service, provided as context at the root.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    /// Enqueues a toast and schedules its auto-dismiss. Fire and forget.
    pub fn show(&self, toast: Toast) {
        let id = toast.id;
        let duration_ms = toast.duration_ms;
        let toasts = self.toasts;

        self.push(toast);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            // The viewport may be gone by the time the timer fires.
            toasts.try_update(|list| list.retain(|t| t.id != id));
        });
    }

    /// Removes a toast. Safe to call for an already-dismissed id.
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, toast: Toast) {
        self.toasts.update(|list| list.push(toast));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toaster from context
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the toast stack
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts;

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-full max-w-sm">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <ToastCard toast=toast />
            </For>
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toaster = use_toaster();
    let id = toast.id;
    let variant = toast.variant;

    view! {
        <div class=format!(
            "flex items-start gap-3 rounded-lg border p-4 shadow-lg {}",
            variant.container_class()
        )>
            {match variant {
                ToastVariant::Default => {
                    view! { <CheckCircleIcon class="w-5 h-5 text-green-400 flex-shrink-0 mt-0.5" /> }
                        .into_view()
                }
                ToastVariant::Destructive => {
                    view! { <AlertTriangleIcon class="w-5 h-5 text-red-400 flex-shrink-0 mt-0.5" /> }
                        .into_view()
                }
            }}
            <div class="flex-1 min-w-0">
                <p class="text-sm font-medium text-white">{toast.title.clone()}</p>
                {toast
                    .description
                    .clone()
                    .map(|description| {
                        view! { <p class="text-sm text-slate-400 mt-1">{description}</p> }
                    })}
            </div>
            <button
                class="p-1 text-slate-500 hover:text-white rounded transition-colors"
                on:click=move |_| toaster.dismiss(id)
            >
                <CloseIcon class="w-4 h-4" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_default_to_the_standard_variant_and_duration() {
        let toast = Toast::new("Cadastro recebido!");
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(toast.description, None);
    }

    #[test]
    fn destructive_builder_sets_variant_and_description() {
        let toast = Toast::destructive("Erro ao entrar", "Email ou senha incorretos.")
            .with_duration(5000);
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(
            toast.description.as_deref(),
            Some("Email ou senha incorretos.")
        );
        assert_eq!(toast.duration_ms, 5000);
    }

    #[test]
    fn dismiss_removes_only_the_target_toast() {
        let runtime = create_runtime();

        let toaster = Toaster::new();
        let first = Toast::new("first");
        let second = Toast::new("second");
        let first_id = first.id;
        let second_id = second.id;

        toaster.push(first);
        toaster.push(second);
        toaster.dismiss(first_id);

        let remaining = toaster.toasts.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second_id);

        // Dismissing again is a no-op.
        toaster.dismiss(first_id);
        assert_eq!(toaster.toasts.get_untracked().len(), 1);

        runtime.dispose();
    }
}
