//! Lead Capture Form
//!
//! Public registration form for prospective customers. Five fields, three
//! of them required (browser-enforced); submitting hands the draft to the
//! record store and flips the screen into a terminal confirmation state.
//! There is no way back to the form short of a full reload.

use chrono::Utc;
use leptos::*;
use leptos_meta::Title;

use crate::client::LeadRecord;
use crate::components::common::CheckCircleIcon;
use crate::components::toast::{use_toaster, Toast};
use crate::state::AppState;

/// In-progress form state. Fields are updated by the `name` attribute of
/// the input that changed; unknown names are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
struct LeadDraft {
    nome: String,
    sobrenome: String,
    telefone: String,
    email: String,
    cidade: String,
}

impl LeadDraft {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "nome" => self.nome = value,
            "sobrenome" => self.sobrenome = value,
            "telefone" => self.telefone = value,
            "email" => self.email = value,
            "cidade" => self.cidade = value,
            _ => {}
        }
    }

    fn into_record(self) -> LeadRecord {
        LeadRecord {
            nome: self.nome,
            sobrenome: self.sobrenome,
            telefone: self.telefone,
            email: self.email,
            cidade: self.cidade,
            captured_at: Utc::now(),
        }
    }
}

/// Lead capture screen
#[component]
pub fn CadastroPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let toaster = use_toaster();

    let (draft, set_draft) = create_signal(LeadDraft::default());
    let (submitted, set_submitted) = create_signal(false);

    let records = store_value(state.records());

    let on_field_input = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        set_draft.update(|draft| draft.set_field(&input.name(), input.value()));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let record = draft.get_untracked().into_record();
        let records = records.get_value();

        spawn_local(async move {
            // TODO: surface persistence failures once create_lead posts to
            // the records API
            let _ = records.create_lead(&record).await;

            // Flipping through try_update doubles as the teardown check.
            if set_submitted.try_update(|submitted| *submitted = true).is_none() {
                return;
            }

            toaster.show(
                Toast::new("Cadastro recebido!").with_description("Entraremos em contato em breve."),
            );
        });
    };

    view! {
        <Title text="Cadastro — Prospecta" />
        <main class="min-h-screen bg-slate-900 flex items-center justify-center p-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-white mb-2">"Prospecta"</h1>
                    <p class="text-slate-400">"Deixe seus dados e entraremos em contato"</p>
                </div>

                <Show
                    when=move || !submitted.get()
                    fallback=|| {
                        view! {
                            <div class="bg-slate-800 rounded-xl border border-slate-700 p-8 shadow-lg text-center">
                                <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-green-500/10 flex items-center justify-center">
                                    <CheckCircleIcon class="w-8 h-8 text-green-400" />
                                </div>
                                <h2 class="text-xl font-semibold text-white mb-2">"Obrigado!"</h2>
                                <p class="text-slate-400">
                                    "Recebemos seus dados e entraremos em contato em breve."
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="bg-slate-800 rounded-xl border border-slate-700 p-6 shadow-lg">
                        <h2 class="text-xl font-semibold text-white mb-6">"Cadastre-se"</h2>

                        <form on:submit=on_submit class="space-y-4">
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-slate-300 text-sm mb-1" for="nome">
                                        "Nome"
                                    </label>
                                    <input
                                        id="nome"
                                        type="text"
                                        name="nome"
                                        class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                        prop:value=move || draft.with(|d| d.nome.clone())
                                        on:input=on_field_input
                                        required
                                    />
                                </div>
                                <div>
                                    <label class="block text-slate-300 text-sm mb-1" for="sobrenome">
                                        "Sobrenome"
                                    </label>
                                    <input
                                        id="sobrenome"
                                        type="text"
                                        name="sobrenome"
                                        class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                        prop:value=move || draft.with(|d| d.sobrenome.clone())
                                        on:input=on_field_input
                                        required
                                    />
                                </div>
                            </div>

                            <div>
                                <label class="block text-slate-300 text-sm mb-1" for="telefone">
                                    "Telefone"
                                </label>
                                <input
                                    id="telefone"
                                    type="tel"
                                    name="telefone"
                                    class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                    placeholder="(11) 99999-9999"
                                    prop:value=move || draft.with(|d| d.telefone.clone())
                                    on:input=on_field_input
                                    required
                                />
                            </div>

                            <div>
                                <label class="block text-slate-300 text-sm mb-1" for="email">
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    name="email"
                                    class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                    placeholder="voce@exemplo.com.br"
                                    prop:value=move || draft.with(|d| d.email.clone())
                                    on:input=on_field_input
                                />
                            </div>

                            <div>
                                <label class="block text-slate-300 text-sm mb-1" for="cidade">
                                    "Cidade"
                                </label>
                                <input
                                    id="cidade"
                                    type="text"
                                    name="cidade"
                                    class="w-full bg-slate-900 text-white px-4 py-2 rounded-lg border border-slate-700 focus:border-blue-500 focus:outline-none"
                                    prop:value=move || draft.with(|d| d.cidade.clone())
                                    on:input=on_field_input
                                />
                            </div>

                            <button
                                type="submit"
                                class="w-full bg-blue-600 hover:bg-blue-700 text-white font-medium py-2 rounded-lg transition-colors"
                            >
                                "Enviar cadastro"
                            </button>
                        </form>
                    </div>
                </Show>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_exactly_the_named_field() {
        let mut draft = LeadDraft::default();
        draft.set_field("telefone", "11999999999".to_string());

        assert_eq!(draft.telefone, "11999999999");
        assert_eq!(draft.nome, "");
        assert_eq!(draft.sobrenome, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.cidade, "");
    }

    #[test]
    fn fields_update_independently() {
        let mut draft = LeadDraft::default();
        draft.set_field("nome", "Ana".to_string());
        draft.set_field("sobrenome", "Silva".to_string());

        draft.set_field("nome", "Beatriz".to_string());
        assert_eq!(draft.nome, "Beatriz");
        assert_eq!(draft.sobrenome, "Silva");
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut draft = LeadDraft::default();
        draft.set_field("empresa", "Acme".to_string());
        assert_eq!(draft, LeadDraft::default());
    }

    #[test]
    fn into_record_carries_the_draft_values() {
        let mut draft = LeadDraft::default();
        draft.set_field("nome", "Ana".to_string());
        draft.set_field("sobrenome", "Silva".to_string());
        draft.set_field("telefone", "11999999999".to_string());

        let record = draft.into_record();
        assert_eq!(record.nome, "Ana");
        assert_eq!(record.sobrenome, "Silva");
        assert_eq!(record.telefone, "11999999999");
        assert_eq!(record.email, "");
        assert_eq!(record.cidade, "");
    }
}
