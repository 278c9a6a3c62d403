//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Routing
//! - Global state and notification contexts
//! - The toast viewport

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::components::auth::LoginPage;
use crate::components::layout::AppShell;
use crate::components::leads::CadastroPage;
use crate::components::toast::{ToastViewport, Toaster};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());
    provide_context(Toaster::new());

    view! {
        <Router>
            <Routes>
                // Home - with shell
                <Route path="/" view=|| view! { <AppShell><HomePage /></AppShell> } />

                // Customer-facing screens - full-screen, no shell
                <Route path="/login" view=LoginPage />
                <Route path="/cadastro" view=CadastroPage />

                // Catch-all for 404
                <Route path="/*" view=NotFoundPage />
            </Routes>
            <ToastViewport />
        </Router>
    }
}

/// Home page - signed-in landing
#[component]
fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let user = state.user;

    view! {
        <Title text="Prospecta" />
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-5xl mx-auto">
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-white">"Bem-vindo ao Prospecta"</h1>
                    <p class="text-slate-400 mt-1">
                        {move || match user.get() {
                            Some(user) => format!("Conectado como {}", user.email),
                            None => "Você não está conectado.".to_string(),
                        }}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <HomeCard
                        href="/cadastro"
                        title="Cadastro de leads"
                        description="Colete os dados de contato de novos interessados."
                    />
                    <HomeCard
                        href="/login"
                        title="Entrar"
                        description="Acesse sua conta para gerenciar o CRM."
                    />
                </div>
            </div>
        </div>
    }
}

/// Navigation card on the home page
#[component]
fn HomeCard(
    href: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block p-4 bg-slate-800 border border-slate-700 rounded-xl hover:border-blue-500/50 transition-colors group"
        >
            <h3 class="font-medium text-white group-hover:text-blue-400 transition-colors">
                {title}
            </h3>
            <p class="text-sm text-slate-400 mt-1">{description}</p>
        </a>
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Página não encontrada — Prospecta" />
        <main class="min-h-screen bg-slate-900 flex items-center justify-center p-6">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-600 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-6">"Página não encontrada"</p>
                <a
                    href="/"
                    class="inline-block bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-lg transition-colors"
                >
                    "Voltar ao início"
                </a>
            </div>
        </main>
    }
}
