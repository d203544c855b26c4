use crate::routes::Route;
use crate::store::use_store;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormActions,
    FormField,
};
use std::collections::HashMap;

/// Email and password sign-in. Signed-in users are sent to their dashboard.
#[component]
pub fn Login() -> Element {
    let app = use_store();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let state = app.snapshot();
    if let Some(role) = state.auth.role() {
        navigator().replace(Route::dashboard(role));
    }
    let submitting = state.auth.loading;
    let expired = state.auth.expired;
    // field problems are shown inline instead
    let error = state.auth.error.filter(|_| field_errors.read().is_empty());

    let handle_login = move |_evt: FormEvent| async move {
        field_errors.set(HashMap::new());
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        match app.login(request).await {
            Ok(user) => {
                navigator().replace(Route::dashboard(user.role));
            }
            Err(e) => field_errors.set(e.field_errors),
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use the email registered with your federation account" }
                }
                CardContent {
                    if expired && error.is_none() {
                        div { class: "auth-notice", "Your session has expired. Please sign in again." }
                    }
                    if let Some(err) = error {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }
                    Form { onsubmit: handle_login,
                        FormField {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "you@club.mx",
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        FormField {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        FormActions {
                            Button {
                                button_type: "submit",
                                disabled: submitting,
                                if submitting { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }
            }
        }
    }
}
