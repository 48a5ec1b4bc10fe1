//! Contact form posting to the content API.

use leptos::*;
use rust_i18n::t;
use templemap_core::{ContactField, ContactForm, ContactSubmission, SubmitResponse, ValidationError};

use crate::api;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Editing,
    Sending,
    Sent,
}

type TextGetter = fn(&ContactForm) -> &String;
type TextSetter = fn(&mut ContactForm) -> &mut String;
type FlagGetter = fn(&ContactForm) -> bool;
type FlagSetter = fn(&mut ContactForm) -> &mut bool;

#[component]
pub fn Contact() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let errors = create_rw_signal(Vec::<ValidationError>::new());
    let status = create_rw_signal(Status::Editing);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() != Status::Editing {
            return;
        }

        let data = form.get_untracked();
        if let Err(found) = data.validate() {
            log::debug!("Contact form has {} error(s)", found.len());
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        status.set(Status::Sending);

        spawn_local(async move {
            let body = ContactSubmission { form: data };
            let next = match api::create::<_, SubmitResponse>("/contact", &body).await {
                Ok(response) if response.is_success() => {
                    log::info!("Contact form sent");
                    Status::Sent
                }
                Ok(response) => {
                    log::warn!("Contact form rejected: {}", response.message);
                    Status::Editing
                }
                Err(e) => {
                    log::warn!("Failed to send contact form: {}", e);
                    Status::Editing
                }
            };
            let _ = status.try_set(next);
        });
    };

    let reset = move |_| {
        form.set(ContactForm::default());
        errors.set(Vec::new());
        status.set(Status::Editing);
    };

    view! {
        <div class="max-w-xl mx-auto px-4">
            <Show
                when=move || status.get() == Status::Sent
                fallback=move || view! {
                    <form class="flex flex-col gap-4" novalidate=true on:submit=submit>
                        <fieldset class="flex flex-wrap gap-6">
                            {checkbox(form, t!("contact.option1").into(), |f| f.contact, |f| &mut f.contact)}
                            {checkbox(form, t!("contact.option2").into(), |f| f.documentation, |f| &mut f.documentation)}
                            {checkbox(form, t!("contact.option3").into(), |f| f.transfer, |f| &mut f.transfer)}
                        </fieldset>
                        {text_input(form, errors, t!("contact.field1").into(), "text", Some(ContactField::Firstname), |f| &f.firstname, |f| &mut f.firstname)}
                        {text_input(form, errors, t!("contact.field2").into(), "text", Some(ContactField::Lastname), |f| &f.lastname, |f| &mut f.lastname)}
                        {text_input(form, errors, t!("contact.field3").into(), "email", Some(ContactField::Email), |f| &f.email, |f| &mut f.email)}
                        {text_input(form, errors, t!("contact.field4").into(), "tel", None, |f| &f.tel, |f| &mut f.tel)}
                        <label class="flex flex-col gap-1 text-sm uppercase tracking-wider">
                            {t!("contact.field5").to_string()}
                            <textarea
                                class="border border-gray-300 p-2 normal-case"
                                rows=6
                                prop:value=move || form.with(|f| f.notes.clone())
                                on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                            />
                        </label>
                        <button
                            type="submit"
                            class="self-end px-6 py-2 border border-black uppercase tracking-widest hover:bg-black hover:text-white disabled:opacity-50"
                            disabled=move || status.get() == Status::Sending
                        >
                            {t!("contact.submit").to_string()}
                        </button>
                    </form>
                }
            >
                <button class="w-full py-16 text-center uppercase tracking-widest" on:click=reset>
                    {t!("form.success").to_string()}
                </button>
            </Show>
        </div>
    }
}

fn checkbox(
    form: RwSignal<ContactForm>,
    label: String,
    get: FlagGetter,
    set: FlagSetter,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm uppercase tracking-wider">
            <input
                type="checkbox"
                prop:checked=move || form.with(get)
                on:change=move |ev| form.update(|f| *set(f) = event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[allow(clippy::too_many_arguments)]
fn text_input(
    form: RwSignal<ContactForm>,
    errors: RwSignal<Vec<ValidationError>>,
    label: String,
    kind: &'static str,
    field: Option<ContactField>,
    get: TextGetter,
    set: TextSetter,
) -> impl IntoView {
    let error = move || {
        field.and_then(|field| {
            errors.with(|errors| ContactForm::error_for(errors, field).map(validation_message))
        })
    };

    view! {
        <label class="flex flex-col gap-1 text-sm uppercase tracking-wider">
            {label}
            <input
                type=kind
                name=field.map(|f| f.name())
                class=move || format!(
                    "border p-2 normal-case {}",
                    if error().is_some() { "border-red-600" } else { "border-gray-300" }
                )
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| *set(f) = event_target_value(&ev))
            />
            <span class="text-xs text-red-600 normal-case">{error}</span>
        </label>
    }
}

/// Localised message for a validation error.
fn validation_message(error: &ValidationError) -> String {
    t!(error.message_key()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_translated() {
        let required = ValidationError::Required {
            field: ContactField::Firstname,
        };
        assert_eq!(
            t!(required.message_key(), locale = "fr"),
            "Ce champ est obligatoire"
        );
        assert_eq!(
            t!(ValidationError::InvalidEmail.message_key(), locale = "en"),
            "Invalid email address"
        );
    }

    #[test]
    fn every_form_label_exists_in_both_locales() {
        let keys = [
            "contact.option1",
            "contact.option2",
            "contact.option3",
            "contact.field1",
            "contact.field2",
            "contact.field3",
            "contact.field4",
            "contact.field5",
            "contact.submit",
            "form.success",
        ];
        for locale in ["fr", "en"] {
            for key in keys {
                let text = t!(key, locale = locale);
                assert!(!text.contains(key), "{locale}: missing {key}");
            }
        }
        assert_ne!(t!("contact.submit", locale = "fr"), t!("contact.submit", locale = "en"));
    }
}
