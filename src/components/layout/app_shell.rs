//! Application Shell
//!
//! Top bar with brand, navigation, and the sign-in/sign-out control.
//! The login and cadastro screens render full-screen without it.

use leptos::*;

use crate::state::AppState;

/// Shell wrapper for signed-in pages
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let state = store_value(expect_context::<AppState>());
    let user = state.with_value(|state| state.user);

    view! {
        <div class="min-h-screen flex flex-col bg-slate-900 text-white">
            <header class="h-14 flex items-center justify-between px-6 border-b border-slate-700 bg-slate-800">
                <a href="/" class="font-bold text-lg">"Prospecta"</a>
                <nav class="flex items-center gap-4">
                    <a
                        href="/cadastro"
                        class="text-sm text-slate-300 hover:text-white transition-colors"
                    >
                        "Cadastro"
                    </a>
                    <Show
                        when=move || user.with(Option::is_some)
                        fallback=|| {
                            view! {
                                <a
                                    href="/login"
                                    class="text-sm text-slate-300 hover:text-white transition-colors"
                                >
                                    "Entrar"
                                </a>
                            }
                        }
                    >
                        <button
                            class="text-sm text-slate-300 hover:text-white transition-colors"
                            on:click=move |_| state.with_value(|state| state.sign_out())
                        >
                            "Sair"
                        </button>
                    </Show>
                </nav>
            </header>
            {children()}
        </div>
    }
}
