use kashe_core::{Route, SiteConfig};
use kashe_engage::{
    submit_contact, ContactFields, ContactForm, Field, FormCell, FormVariant, SimulatedGateway,
    SubmitError,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::mount_page;
use crate::app::use_site;
use crate::platform::GlooSleeper;

/// Contact page. `?type=quote` and `?type=distributor` select the form variant.
#[component]
pub fn ContactPage() -> impl IntoView {
    let query = use_query_map();
    let site = use_site();
    let mailto = site.mailto();
    let tel = site.tel();
    let address = site.address.one_line();

    let form_view = move || {
        let variant = query.with(|q| FormVariant::from_query(q.get_str("type")));
        view! { <ContactFormView variant=variant/> }
    };

    view! {
        <Title text=site.page_title("Contact")/>
        <section class="contact">
            <aside class="contact-details">
                <h2>"Contact Information"</h2>
                <p><a href=mailto>{site.email.clone()}</a></p>
                <p><a href=tel>{site.phone.clone()}</a></p>
                <p>{address}</p>
            </aside>
            {form_view}
        </section>
    }
}

#[component]
fn ContactFormView(variant: FormVariant) -> impl IntoView {
    let logger = StoredValue::new(mount_page(Route::Contact {
        kind: variant.into(),
    }));
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let delay = config.contact.submit_delay();
    let timeout = config.contact.submit_timeout();

    let form = RwSignal::new(ContactForm::new(variant));
    let fields = RwSignal::new(ContactFields::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.is_submitting() || f.is_submitted()) {
            return;
        }
        let current = fields.get_untracked();
        error.set(None);

        spawn_local(async move {
            let gateway = SimulatedGateway::new(GlooSleeper).with_delay(delay);
            let outcome =
                submit_contact(&FormSignal(form), &current, &gateway, &GlooSleeper, timeout).await;
            // None: the page unmounted while waiting.
            match outcome {
                Some(Ok(receipt)) => {
                    logger.with_value(|l| {
                        l.info_builder("contact submission delivered")
                            .field("variant", variant.as_str())
                            .field("reference", receipt.reference)
                            .emit()
                    });
                }
                Some(Err(SubmitError::Form(e))) => {
                    logger.with_value(|l| {
                        l.warn_builder("contact form rejected")
                            .field("error", e.to_string())
                            .emit()
                    });
                    error.set(Some(e.to_string()));
                }
                Some(Err(e)) => {
                    logger.with_value(|l| {
                        l.warn_builder("contact submission failed")
                            .field("error", e.to_string())
                            .field_bool("retryable", e.is_retryable())
                            .emit()
                    });
                    error.set(Some(e.to_string()));
                }
                None => {}
            }
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <div class="contact-form">
            <Show
                when=move || form.with(|f| f.is_submitted())
                fallback=move || view! {
                    <h1>{variant.title()}</h1>
                    <p>{variant.description()}</p>
                    <form on:submit=on_submit novalidate=true>
                        {variant.fields().iter().copied().map(|field| {
                            view! { <FormField field=field variant=variant fields=fields disabled=Signal::derive(submitting)/> }
                        }).collect::<Vec<_>>()}
                        {move || error.get().map(|message| view! {
                            <p class="form-error" role="alert">{message}</p>
                        })}
                        <button type="submit" class="btn" disabled=submitting>
                            {move || form.with(|f| f.submit_label())}
                        </button>
                    </form>
                }
            >
                <div class="confirmation">
                    <h2>{ContactForm::CONFIRMATION_TITLE}</h2>
                    <p>{ContactForm::CONFIRMATION_MESSAGE}</p>
                    {move || form.with(|f| f.receipt().map(|r| view! {
                        <p class="reference">"Reference: " {r.reference.clone()}</p>
                    }))}
                </div>
            </Show>
        </div>
    }
}

/// Form state held in a signal; gone once the page is disposed.
struct FormSignal(RwSignal<ContactForm>);

impl FormCell for FormSignal {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
fn FormField(
    field: Field,
    variant: FormVariant,
    fields: RwSignal<ContactFields>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let required = variant.is_required(field);
    let label = if required {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let value = move || fields.with(|f| f.get(field).to_string());

    let input = match field {
        Field::Message => view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="5"
                placeholder=field.placeholder()
                required=required
                disabled=move || disabled.get()
                prop:value=value
                on:input=move |ev| fields.update(|f| f.set(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        _ => {
            let kind = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                _ => "text",
            };
            view! {
                <input
                    id=field.name()
                    name=field.name()
                    type=kind
                    placeholder=field.placeholder()
                    required=required
                    disabled=move || disabled.get()
                    prop:value=value
                    on:input=move |ev| fields.update(|f| f.set(field, event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label for=field.name()>{label}</label>
            {input}
        </div>
    }
}
