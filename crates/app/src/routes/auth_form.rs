use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdMail, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::{AuthMode, Role, SignInRequest, SignUpRequest, SELF_SERVICE_ROLES};
use shared_ui::{Alert, Button, ButtonSize, ButtonVariant, Form, Input, Label};

use crate::auth::use_auth;
use crate::routes::Route;

struct FormCopy {
    title: &'static str,
    subtitle: &'static str,
    submit: &'static str,
    toggle_prompt: &'static str,
    toggle_action: &'static str,
}

fn copy_for(mode: AuthMode) -> FormCopy {
    match mode {
        AuthMode::SignIn => FormCopy {
            title: "Connexion",
            subtitle: "Accédez à votre espace santé",
            submit: "Se connecter",
            toggle_prompt: "Pas encore de compte ?",
            toggle_action: "S'inscrire",
        },
        AuthMode::SignUp => FormCopy {
            title: "Créer un compte",
            subtitle: "Rejoignez votre espace santé",
            submit: "Créer mon compte",
            toggle_prompt: "Déjà un compte ?",
            toggle_action: "Se connecter",
        },
    }
}

/// Sign-in or sign-up form, depending on `mode`. On success the profile is
/// stored in auth state and the user lands on the dashboard.
#[component]
pub fn AuthForm(mode: AuthMode, on_toggle: EventHandler<()>) -> Element {
    let auth = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut role = use_signal(|| Role::Patient);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let mut auth = auth.clone();
        async move {
            if loading() {
                return;
            }
            loading.set(true);
            error_msg.set(None);

            let result = match mode {
                AuthMode::SignIn => {
                    let request = SignInRequest {
                        email: email(),
                        password: password(),
                    };
                    auth.client.sign_in(&request).await
                }
                AuthMode::SignUp => {
                    let request = SignUpRequest {
                        email: email(),
                        password: password(),
                        first_name: first_name(),
                        last_name: last_name(),
                        role: role(),
                    };
                    auth.client.sign_up(&request).await
                }
            };
            loading.set(false);

            match result {
                Ok(profile) => {
                    tracing::info!(role = %profile.role, "authenticated");
                    auth.set_profile(profile);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "authentication failed");
                    error_msg.set(Some(e.message));
                }
            }
        }
    };

    let copy = copy_for(mode);
    let selected_role = role.read().as_str().to_string();
    let role_options: Vec<(&str, &str)> = SELF_SERVICE_ROLES
        .iter()
        .map(|r| (r.as_str(), r.label()))
        .collect();

    rsx! {
        div { class: "auth-form",
            div { class: "auth-form-header",
                div { class: "auth-logo",
                    Icon::<LdStethoscope> { icon: LdStethoscope, width: 32, height: 32 }
                }
                h1 { class: "auth-title", "{copy.title}" }
                p { class: "auth-subtitle", "{copy.subtitle}" }
            }

            Form { onsubmit: handle_submit,
                if mode == AuthMode::SignUp {
                    div { class: "auth-name-row",
                        Input {
                            name: "firstName",
                            label: "Prénom",
                            value: first_name(),
                            required: true,
                            on_input: move |e: FormEvent| first_name.set(e.value()),
                        }
                        Input {
                            name: "lastName",
                            label: "Nom",
                            value: last_name(),
                            required: true,
                            on_input: move |e: FormEvent| last_name.set(e.value()),
                        }
                    }
                }

                Input {
                    name: "email",
                    label: "Email",
                    input_type: "email",
                    placeholder: "vous@exemple.fr",
                    value: email(),
                    required: true,
                    icon: rsx! { Icon::<LdMail> { icon: LdMail, width: 16, height: 16 } },
                    on_input: move |e: FormEvent| email.set(e.value()),
                }
                Input {
                    name: "password",
                    label: "Mot de passe",
                    input_type: "password",
                    value: password(),
                    required: true,
                    icon: rsx! { Icon::<LdLock> { icon: LdLock, width: 16, height: 16 } },
                    on_input: move |e: FormEvent| password.set(e.value()),
                }

                if mode == AuthMode::SignUp {
                    div { class: "input-wrapper",
                        Label { html_for: "role", "Je suis" }
                        select {
                            id: "role",
                            name: "role",
                            class: "input auth-role-select",
                            onchange: move |e: FormEvent| role.set(Role::parse(&e.value())),
                            for (value, label) in role_options {
                                option {
                                    value: value,
                                    selected: value == selected_role,
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                if let Some(err) = error_msg() {
                    Alert { on_dismiss: move |_| error_msg.set(None), "{err}" }
                }

                Button {
                    button_type: "submit",
                    size: ButtonSize::Large,
                    loading: loading(),
                    class: "auth-submit",
                    "{copy.submit}"
                }
            }

            div { class: "auth-toggle",
                span { "{copy.toggle_prompt} " }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| on_toggle.call(()),
                    "{copy.toggle_action}"
                }
            }
        }
    }
}
