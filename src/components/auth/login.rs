//! Login Screen
//!
//! Credential form gated on the current session: a user who is already
//! signed in never sees this screen and is sent straight to the home route.
//!
//! A completed sign-in attempt resolves to exactly one of: a navigation
//! home, or a notification describing the failure.

use leptos::*;
use leptos_meta::Title;
use leptos_router::use_navigate;

use crate::client::AuthError;
use crate::components::toast::{use_toaster, Toast};
use crate::state::AppState;

/// What a completed sign-in attempt resolves to.
#[derive(Debug)]
enum SubmitOutcome {
    GoHome,
    Notify(Toast),
}

/// Maps the sign-in result onto the user-visible reaction.
///
/// The two provider failures the product has copy for get their own
/// messages; everything else is echoed as the provider described it.
fn outcome_for(result: Result<(), AuthError>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome::GoHome,
        Err(AuthError::AccountSuspended) => SubmitOutcome::Notify(
            Toast::destructive(
                "Conta suspensa",
                "O acesso foi suspenso por pendência de faturamento. \
                 Entre em contato com o suporte para regularizar.",
            )
            .with_duration(5000),
        ),
        Err(AuthError::InvalidCredentials) => SubmitOutcome::Notify(Toast::destructive(
            "Erro ao entrar",
            "Email ou senha incorretos.",
        )),
        Err(other) => SubmitOutcome::Notify(Toast::destructive("Erro ao entrar", other.to_string())),
    }
}

/// Login screen with session gate
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Session gate: an already signed-in user is redirected home and sees
    // nothing. The navigation is queued in an effect so it fires exactly
    // once, after render.
    if state.user.get_untracked().is_some() {
        let navigate = use_navigate();
        create_effect(move |_| navigate("/", Default::default()));
        return ().into_view();
    }

    let toaster = use_toaster();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get_untracked();
        let password = password.get_untracked();
        let state = state.clone();
        let navigate = navigate.clone();

        set_loading.set(true);

        spawn_local(async move {
            let result = state.sign_in(&email, &password).await;

            // Resetting through try_update doubles as the teardown check:
            // if the user already navigated away, the stale result is
            // dropped here.
            if set_loading.try_update(|loading| *loading = false).is_none() {
                return;
            }

            match outcome_for(result) {
                SubmitOutcome::GoHome => navigate("/", Default::default()),
                SubmitOutcome::Notify(toast) => toaster.show(toast),
            }
        });
    };

    view! {
        <Title text="Entrar — Prospecta" />
        <main class="min-h-screen bg-slate-900 flex items-center justify-center p-4">
            <div class="max-w-md w-full">
                // Logo and title
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-white mb-2">"Prospecta"</h1>
                    <p class="text-slate-400">"CRM para pequenos negócios"</p>
                </div>

                <div class="bg-slate-800 rounded-xl border border-slate-700 p-6 shadow-lg">
                    <h2 class="text-xl font-semibold text-white mb-6">"Entrar na sua conta"</h2>

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-slate-300 text-sm mb-1" for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                name="email"
                                class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                placeholder="voce@empresa.com.br"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                            />
                        </div>

                        <div>
                            <label class="block text-slate-300 text-sm mb-1" for="password">
                                "Senha"
                            </label>
                            <input
                                id="password"
                                type="password"
                                name="password"
                                class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                placeholder="••••••••"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-slate-600 text-white font-medium py-2 rounded-lg transition-colors"
                            disabled=loading
                        >
                            {move || if loading.get() { "Entrando..." } else { "Entrar" }}
                        </button>
                    </form>
                </div>
            </div>
        </main>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::ToastVariant;

    #[test]
    fn successful_sign_in_goes_home_with_no_notification() {
        assert!(matches!(outcome_for(Ok(())), SubmitOutcome::GoHome));
    }

    #[test]
    fn suspended_account_gets_the_billing_notice() {
        let SubmitOutcome::Notify(toast) = outcome_for(Err(AuthError::AccountSuspended)) else {
            panic!("suspension must notify, not navigate");
        };
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.duration_ms, 5000);
        assert_eq!(toast.title, "Conta suspensa");
        assert!(toast.description.unwrap().contains("faturamento"));
    }

    #[test]
    fn invalid_credentials_get_the_localized_generic_message() {
        let SubmitOutcome::Notify(toast) = outcome_for(Err(AuthError::InvalidCredentials)) else {
            panic!("invalid credentials must notify, not navigate");
        };
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(
            toast.description.as_deref(),
            Some("Email ou senha incorretos.")
        );
    }

    #[test]
    fn other_errors_are_echoed_verbatim() {
        let provider_error = AuthError::Provider("quota exceeded".to_string());
        let SubmitOutcome::Notify(toast) = outcome_for(Err(provider_error)) else {
            panic!("provider errors must notify, not navigate");
        };
        assert_eq!(toast.description.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn transport_errors_are_echoed_through_their_display_text() {
        let error = AuthError::ConnectionFailed("HTTP 502".to_string());
        let SubmitOutcome::Notify(toast) = outcome_for(Err(error)) else {
            panic!("transport errors must notify, not navigate");
        };
        assert_eq!(
            toast.description.as_deref(),
            Some("connection failed: HTTP 502")
        );
    }
}
