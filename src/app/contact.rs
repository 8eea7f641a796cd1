use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactForm, Field, SubmitPhase, SUBMIT_DELAY, SUCCESS_DISPLAY},
    content::SOCIAL_LINKS,
};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (hovered_link, set_hovered_link) = signal(None::<usize>);

    let UseTimeoutFnReturn {
        start: start_dismiss,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::dismiss_success),
        SUCCESS_DISPLAY.as_millis() as f64,
    );
    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(ContactForm::finish_submit);
            log::info!("contact message sent");
            start_dismiss(());
        },
        SUBMIT_DELAY.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        form.update(|f| accepted = f.submit());
        if accepted {
            start_send(());
        } else {
            log::debug!(
                "contact form rejected: {:?}",
                form.with_untracked(|f| f.errors().keys().map(Field::as_str).collect::<Vec<_>>())
            );
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-container">
                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <FormField form field=Field::Name label="Name" />
                    <FormField form field=Field::Email label="Email" />
                    <FormField form field=Field::Message label="Message" />
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || form.with(ContactForm::is_submit_disabled)
                    >
                        {move || {
                            if form.with(ContactForm::is_submit_disabled) {
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }}
                    </button>
                    <Show when=move || form.with(|f| f.phase() == SubmitPhase::Submitted)>
                        <p class="success-message">"Message sent successfully!"</p>
                    </Show>
                </form>
                <div class="social-links">
                    <h3>"Connect With Me"</h3>
                    {SOCIAL_LINKS
                        .iter()
                        .enumerate()
                        .map(|(idx, link)| {
                            view! {
                                <a
                                    href=link.url
                                    class="social-link"
                                    class:hovered=move || hovered_link.get() == Some(idx)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    on:mouseenter=move |_| set_hovered_link.set(Some(idx))
                                    on:mouseleave=move |_| set_hovered_link.set(None)
                                >
                                    <span class="social-icon">{link.icon}</span>
                                    <span>{link.name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field, label: &'static str) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.value(field).to_string());
    let input = match field {
        Field::Message => view! {
            <textarea id=id name=id rows="5" prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))></textarea>
        }
            .into_any(),
        Field::Email => view! {
            <input type="email" id=id name=id prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev))) />
        }
            .into_any(),
        Field::Name => view! {
            <input type="text" id=id name=id prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev))) />
        }
            .into_any(),
    };

    view! {
        <div class="form-group" class:has-error=move || form.with(|f| f.error(field).is_some())>
            <label for=id>{label}</label>
            {input}
            {move || {
                form.with(|f| f.error(field))
                    .map(|e| view! { <span class="error-message">{e.to_string()}</span> })
            }}
        </div>
    }
}
