mod fields;

use crate::routes::dashboard::{ErrorCard, LoadingSkeletons};
use crate::routes::Route;
use crate::store::use_store;
use client::ToastKind;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dioxus_free_icons::Icon;
use fields::{FieldSpec, FormValues};
use shared_types::{AppErrorKind, ImageKind, Role};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Form, FormField, PageHeader, PageTitle,
};
use std::collections::HashMap;

#[component]
pub fn AdminProfile() -> Element {
    rsx! { ProfilePage { role: Role::Admin } }
}

#[component]
pub fn PlayerProfile() -> Element {
    rsx! { ProfilePage { role: Role::Player } }
}

#[component]
pub fn CoachProfile() -> Element {
    rsx! { ProfilePage { role: Role::Coach } }
}

#[component]
pub fn ClubProfile() -> Element {
    rsx! { ProfilePage { role: Role::Club } }
}

#[component]
pub fn PartnerProfile() -> Element {
    rsx! { ProfilePage { role: Role::Partner } }
}

#[component]
pub fn StateProfile() -> Element {
    rsx! { ProfilePage { role: Role::State } }
}

/// Profile editor. The form is seeded from the role's dashboard slice,
/// which is fetched first if this page is opened directly, and reseeded
/// whenever that slice is refetched with different data.
#[component]
fn ProfilePage(role: Role) -> Element {
    let app = use_store();
    let state = app.snapshot();
    let slice = state.dashboards.get(role).clone();

    let needs_fetch = slice.data.is_none() && !slice.loading;
    use_hook(move || {
        if needs_fetch {
            app.fetch_dashboard(role);
        }
    });

    rsx! {
        div { class: "profile-page",
            PageHeader {
                PageTitle { "{role.display_name()} profile" }
            }
            match (slice.data, slice.error) {
                (Some(dashboard), _) => {
                    let profile = dashboard.profile_json();
                    // new server data remounts the form with a fresh baseline
                    let form_key = profile.to_string();
                    rsx! {
                        ProfileForm {
                            key: "{form_key}",
                            role,
                            initial: fields::initial_values(role, &profile),
                        }
                    }
                }
                (None, Some(message)) => rsx! {
                    ErrorCard { message, on_retry: move |_| app.fetch_dashboard(role) }
                },
                (None, None) => rsx! { LoadingSkeletons {} },
            }
        }
    }
}

#[component]
fn ProfileForm(role: Role, initial: FormValues) -> Element {
    let app = use_store();
    let mut baseline = use_signal(|| initial.clone());
    let mut values = use_signal(|| initial.clone());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_evt: FormEvent| async move {
        field_errors.set(HashMap::new());
        form_error.set(None);

        let built = fields::build_update(role, &baseline.read(), &values.read());
        let update = match built {
            Ok(Some(update)) => update,
            Ok(None) => {
                app.toast(ToastKind::Info, "No changes to save");
                return;
            }
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };

        saving.set(true);
        match app.update_profile(update).await {
            Ok(()) => {
                baseline.set(values());
                app.toast(ToastKind::Success, "Profile saved");
            }
            Err(e) if e.kind == AppErrorKind::Validation && !e.field_errors.is_empty() => {
                field_errors.set(e.field_errors);
            }
            Err(e) => {
                let message = e.friendly_message();
                form_error.set(Some(message.clone()));
                app.toast(ToastKind::Error, message);
            }
        }
        saving.set(false);
    };

    let image = fields::image_field(role);

    rsx! {
        Card { class: "profile-card",
            CardHeader {
                CardTitle { "Details" }
                CardDescription { "Only the fields you change are sent. Empty a field to clear it." }
            }
            Form { onsubmit: handle_submit,
                CardContent {
                    if let Some(message) = form_error() {
                        div { class: "profile-error", role: "alert", "{message}" }
                    }
                    if let Some((kind, name)) = image {
                        ImageField {
                            kind,
                            url: values.read().get(name).cloned().unwrap_or_default(),
                            error: field_errors.read().get(name).cloned(),
                            on_uploaded: move |url: String| {
                                values.write().insert(name.to_string(), url);
                            },
                        }
                    }
                    div { class: "profile-fields",
                        for spec in fields::specs(role).iter().copied() {
                            ProfileInput {
                                key: "{spec.name}",
                                spec,
                                value: values.read().get(spec.name).cloned().unwrap_or_default(),
                                error: field_errors.read().get(spec.name).cloned(),
                                on_change: move |text: String| {
                                    values.write().insert(spec.name.to_string(), text);
                                },
                            }
                        }
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::dashboard(role));
                        },
                        "Back"
                    }
                    Button {
                        button_type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileInput(
    spec: FieldSpec,
    value: String,
    error: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        FormField {
            label: spec.label.to_string(),
            name: spec.name.to_string(),
            input_type: spec.input_type.to_string(),
            placeholder: spec.placeholder.to_string(),
            value,
            error,
            on_input: move |e: FormEvent| on_change.call(e.value()),
        }
    }
}

/// Logo or photo picker. Uploads on selection and hands back the hosted URL.
#[component]
fn ImageField(
    kind: ImageKind,
    url: String,
    error: Option<String>,
    on_uploaded: EventHandler<String>,
) -> Element {
    let app = use_store();
    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| Option::<String>::None);
    let label = match kind {
        ImageKind::Logo => "Logo",
        ImageKind::Photo => "Photo",
    };
    let noun = label.to_lowercase();
    let shown_error = upload_error().or(error);

    rsx! {
        div { class: "profile-image",
            if url.is_empty() {
                div { class: "profile-image-empty", "No {noun} yet" }
            } else {
                img { class: "profile-image-preview", src: "{url}", alt: "{label}" }
            }
            label {
                class: if uploading() { "button profile-image-upload disabled" } else { "button profile-image-upload" },
                "data-style": "outline",
                input {
                    r#type: "file",
                    accept: "image/png,image/jpeg,image/webp,image/gif",
                    class: "profile-image-input",
                    disabled: uploading(),
                    onchange: move |evt: FormEvent| async move {
                        let files = evt.files();
                        let Some(file) = files.first() else {
                            return;
                        };
                        uploading.set(true);
                        upload_error.set(None);
                        match file.read_bytes().await {
                            Ok(bytes) => {
                                match app.upload_image(kind, file.name(), bytes.to_vec()).await {
                                    Ok(url) => {
                                        on_uploaded.call(url);
                                        app.toast(ToastKind::Success, format!("{} uploaded", label));
                                    }
                                    Err(e) => {
                                        let message = e
                                            .field_errors
                                            .values()
                                            .next()
                                            .cloned()
                                            .unwrap_or_else(|| e.friendly_message());
                                        upload_error.set(Some(message.clone()));
                                        app.toast(ToastKind::Error, message);
                                    }
                                }
                            }
                            Err(_) => {
                                app.toast(ToastKind::Error, "Failed to read file");
                            }
                        }
                        uploading.set(false);
                    },
                }
                Icon::<LdUpload> { icon: LdUpload, width: 16, height: 16 }
                if uploading() { "Uploading..." } else { "Upload {noun}" }
            }
            if let Some(message) = shown_error {
                div { class: "form-field-error", role: "alert", "{message}" }
            }
        }
    }
}
