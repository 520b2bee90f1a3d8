use auth_service::submit_password_reset;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdMail, LdMailCheck};
use dioxus_free_icons::Icon;
use shared_types::ResetForm;
use shared_ui::{
    Alert, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Form, Input,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Forgot password page. Requests a reset link and, once the collaborator
/// accepts, replaces the form with a confirmation naming the address used.
#[component]
pub fn ForgotPassword() -> Element {
    let auth = use_auth();
    let mut form = use_signal(ResetForm::default);

    let handle_submit = move |_: FormEvent| {
        let client = auth.client.clone();
        async move {
            submit_password_reset(&*client, |edit| edit(&mut *form.write())).await;
        }
    };

    let state = form.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                if let Some(sent_to) = state.sent_to() {
                    ResetSent { email: sent_to.to_string() }
                } else {
                    CardHeader {
                        CardTitle { "Mot de passe oublié" }
                        CardDescription { "Entrez votre email pour recevoir un lien de réinitialisation" }
                    }

                    CardContent {
                        Form { onsubmit: handle_submit,
                            Input {
                                name: "email",
                                label: "Email",
                                input_type: "email",
                                placeholder: "vous@exemple.fr",
                                value: state.email.clone(),
                                required: true,
                                disabled: state.is_loading(),
                                icon: rsx! { Icon::<LdMail> { icon: LdMail, width: 16, height: 16 } },
                                on_input: move |e: FormEvent| form.write().set_email(e.value()),
                            }

                            if let Some(err) = state.error.clone() {
                                Alert { on_dismiss: move |_| form.write().dismiss_error(), "{err}" }
                            }

                            Button {
                                button_type: "submit",
                                size: ButtonSize::Large,
                                loading: state.is_loading(),
                                class: "auth-submit",
                                "Envoyer le lien de réinitialisation"
                            }
                        }
                    }

                    CardFooter {
                        Link { to: Route::AuthPage {}, class: "auth-back-link",
                            Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                            "Retour à la connexion"
                        }
                    }
                }
            }
        }
    }
}

/// Confirmation shown once a reset link has been sent to `email`.
#[component]
pub fn ResetSent(email: String) -> Element {
    rsx! {
        CardHeader {
            div { class: "auth-success-icon",
                Icon::<LdMailCheck> { icon: LdMailCheck, width: 32, height: 32 }
            }
            CardTitle { "Vérifiez votre email" }
            CardDescription {
                "Nous avons envoyé un lien de réinitialisation à "
                strong { class: "auth-sent-to", "{email}" }
            }
        }
        CardFooter {
            Button {
                variant: ButtonVariant::Outline,
                class: "auth-submit",
                onclick: move |_| {
                    navigator().push(Route::AuthPage {});
                },
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                "Retour à la connexion"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_the_submitted_address() {
        let html = dioxus_ssr::render_element(rsx! {
            ResetSent { email: "camille@clinique.test" }
        });
        assert!(html.contains("Vérifiez votre email"));
        assert!(html.contains("camille@clinique.test"));
        assert!(html.contains("Retour à la connexion"));
    }
}
