use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactField, ContactForm, SubmitStatus, Submission},
    content::{
        copyright_year, Icon, CONTACT_INTRO, CONTACT_PITCH, EMAIL, GITHUB, LOCATION, OWNER,
        PHONE, PHONE_URI, SOCIALS, WHAT_I_BRING,
    },
    nav::Section,
    reveal::{RevealEffect, TriggerBand, STAGGER_STEP},
};

use super::{
    icon::Glyph,
    reveal::{reveal_class, use_reveal_scope},
};

const PRESS_MS: f64 = 100.0;

#[cfg(feature = "ssr")]
fn reject(e: crate::contact::ContactError) -> ServerFnError {
    tracing::warn!(error = %e, "rejected contact submission");
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(e.status_code());
    }
    ServerFnError::new(e)
}

#[server(endpoint = "submit_contact")]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<u64, ServerFnError> {
    use crate::contact::{ContactMessage, ContactTransport, GLOBAL_INBOX};

    let message = ContactMessage::new(&name, &email, &subject, &message).map_err(reject)?;
    let ContactMessage {
        name,
        email,
        subject,
        message: body,
    } = message.clone();
    let receipt = GLOBAL_INBOX.deliver(message).map_err(reject)?;
    tracing::info!(
        id = receipt.id,
        %name,
        %email,
        %subject,
        %body,
        stored = GLOBAL_INBOX.stored(),
        "contact message received"
    );
    Ok(receipt.id)
}

#[component]
pub fn Contact() -> impl IntoView {
    let scope = use_reveal_scope();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = scope.region(section_ref, TriggerBand::TOP_80);
    // every block cascades in page order
    let block = move |index: usize, base: &'static str| {
        let style = RevealEffect::fade_up(80.0)
            .staggered(index, STAGGER_STEP)
            .style();
        let class = move || reveal_class(&format!("contact-content {base}"), revealed.get());
        (class, style)
    };
    let (title_class, title_style) = block(0, "text-5xl md:text-6xl font-bold mb-6");
    let (intro_class, intro_style) = block(1, "text-xl text-gray-600 max-w-3xl mx-auto");
    let (pitch_class, pitch_style) = block(2, "");
    let (details_class, details_style) = block(3, "space-y-6");
    let (socials_class, socials_style) = block(4, "");
    let (bring_class, bring_style) = block(5, "");
    let (form_class, form_style) = block(6, "");
    let (footer_class, footer_style) = block(7, "text-center mt-16 pt-8 border-t border-gray-200");

    view! {
        <section id=Section::Contact.id() node_ref=section_ref class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class=title_class style=title_style>
                        "Let's Connect"
                    </h2>
                    <p class=intro_class style=intro_style>
                        {CONTACT_INTRO}
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <div class="space-y-8">
                        <div class=pitch_class style=pitch_style>
                            <h3 class="text-3xl font-semibold mb-6">"Get in Touch"</h3>
                            <p class="text-gray-600 text-lg leading-relaxed mb-8">{CONTACT_PITCH}</p>
                        </div>
                        <div class=details_class style=details_style>
                            <ContactDetails />
                        </div>
                        <div class=socials_class style=socials_style>
                            <h4 class="text-xl font-semibold mb-4">"Connect with me"</h4>
                            <div class="flex space-x-4">
                                {SOCIALS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label
                                                class="p-3 bg-gray-200 rounded-lg hover:bg-black hover:text-white transition-all duration-300 group"
                                            >
                                                <Glyph icon=social.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class=bring_class style=bring_style>
                            <h4 class="text-xl font-semibold mb-4">"What I Bring"</h4>
                            <ul class="space-y-3 text-gray-600">
                                {WHAT_I_BRING
                                    .iter()
                                    .map(|point| {
                                        view! {
                                            <li class="flex items-start space-x-2">
                                                <span class="w-2 h-2 bg-black rounded-full mt-2 flex-shrink-0"></span>
                                                <span>{*point}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                    <div class=form_class style=form_style>
                        <ContactFormPanel />
                    </div>
                </div>
                <footer class=footer_class style=footer_style>
                    <p class="text-gray-600 mb-4">
                        {format!("© {} {OWNER}. All rights reserved.", copyright_year())}
                    </p>
                    <p class="text-sm text-gray-500">
                        "Built with Rust, Leptos & Tailwind CSS • "
                        <a
                            href=GITHUB
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-black transition-colors duration-300 ml-1"
                        >
                            "View Source Code"
                        </a>
                    </p>
                </footer>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let items = [
        (Icon::Mail, "Email", EMAIL, Some(format!("mailto:{EMAIL}"))),
        (Icon::Phone, "Phone", PHONE, Some(PHONE_URI.to_string())),
        (Icon::MapPin, "Location", LOCATION, None),
    ];

    items
        .into_iter()
        .map(|(icon, label, value, href)| {
            let value = match href {
                Some(href) => {
                    view! {
                        <a href=href class="text-gray-600 hover:text-black transition-colors">
                            {value}
                        </a>
                    }
                        .into_any()
                }
                None => view! { <p class="text-gray-600">{value}</p> }.into_any(),
            };
            view! {
                <div class="flex items-center space-x-4">
                    <div class="p-3 bg-black text-white rounded-lg">
                        <Glyph icon=icon class="text-xl" />
                    </div>
                    <div>
                        <p class="font-medium">{label}</p>
                        {value}
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let submission = RwSignal::new(Submission::default());
    let send = ServerAction::<SubmitContact>::new();
    let (pressed, set_pressed) = signal(false);

    let UseTimeoutFnReturn {
        start: release, ..
    } = use_timeout_fn(move |_: ()| set_pressed.set(false), PRESS_MS);

    Effect::new(move |_| {
        let Some(result) = send.value().get() else {
            return;
        };
        let result = result.map_err(|e| match e {
            ServerFnError::ServerError(msg) => msg,
            other => other.to_string(),
        });
        if let Err(e) = &result {
            log::warn!("contact submission failed: {e}");
        }
        submission.update(|s| s.finish(result));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = submission.try_update(|s| s.begin(&form.get_untracked())) else {
            return;
        };
        match outcome {
            Ok(message) => {
                set_pressed.set(true);
                release(());
                send.dispatch(SubmitContact {
                    name: message.name,
                    email: message.email,
                    subject: message.subject,
                    message: message.message,
                });
            }
            Err(e) => log::debug!("contact form not sent: {e}"),
        }
    };

    let input = move |field: ContactField, kind: &'static str| {
        let copy = field.copy();
        view! {
            <div>
                <label for=field.name() class="block text-sm font-medium text-gray-700 mb-2">
                    {copy.label}
                </label>
                <input
                    type=kind
                    id=field.name()
                    name=field.name()
                    required
                    placeholder=copy.placeholder
                    prop:value=move || form.with(|f| f.get(field).to_string())
                    on:input=move |ev| form.update(|f| f.apply(field, event_target_value(&ev)))
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black focus:border-transparent transition-all duration-300"
                />
            </div>
        }
    };
    let message = ContactField::Message;

    view! {
        <form on:submit=on_submit class="bg-white p-8 rounded-lg shadow-sm space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {input(ContactField::Name, "text")}
                {input(ContactField::Email, "email")}
            </div>
            {input(ContactField::Subject, "text")}
            <div>
                <label for=message.name() class="block text-sm font-medium text-gray-700 mb-2">
                    {message.copy().label}
                </label>
                <textarea
                    id=message.name()
                    name=message.name()
                    required
                    rows="6"
                    placeholder=message.copy().placeholder
                    prop:value=move || form.with(|f| f.get(message).to_string())
                    on:input=move |ev| form.update(|f| f.apply(message, event_target_value(&ev)))
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black focus:border-transparent transition-all duration-300"
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=move || submission.with(Submission::is_sending)
                class=move || {
                    format!(
                        "submit-btn w-full bg-black text-white px-6 py-4 rounded-lg font-medium hover:bg-gray-800 transition-all duration-100 transform flex items-center justify-center space-x-2 disabled:opacity-70 {}",
                        if pressed.get() { "scale-95" } else { "scale-100 hover:scale-105" },
                    )
                }
            >
                <Glyph icon=Icon::Send />
                <span>
                    {move || if submission.with(Submission::is_sending) { "Sending..." } else { "Send Message" }}
                </span>
            </button>
            <p role="status" aria-live="polite" class="text-sm min-h-[1.25rem]">
                {move || match submission.get().status() {
                    SubmitStatus::Idle | SubmitStatus::Sending => String::new(),
                    SubmitStatus::Sent(_) => "Thanks! Your message has been received.".to_string(),
                    SubmitStatus::Failed(reason) => format!("Couldn't send your message: {reason}"),
                }}
            </p>
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::GLOBAL_INBOX;

    fn with_response_context() -> Owner {
        let owner = Owner::new();
        owner.set();
        provide_context(leptos_axum::ResponseOptions::default());
        owner
    }

    #[tokio::test]
    async fn test_submit_contact_stores_valid_message() {
        let _owner = with_response_context();
        let id = submit_contact(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Internship".to_string(),
            "Let's talk.".to_string(),
        )
        .await
        .expect("accepted");
        assert!(id >= 1);
        assert!(GLOBAL_INBOX.stored() >= 1);
    }

    #[tokio::test]
    async fn test_submit_contact_rejects_invalid_payload() {
        let _owner = with_response_context();
        let err = submit_contact(
            "Ada".to_string(),
            "not-an-email".to_string(),
            "Internship".to_string(),
            "Let's talk.".to_string(),
        )
        .await
        .unwrap_err();
        assert!(
            matches!(&err, ServerFnError::ServerError(msg) if msg == "email address doesn't look right"),
            "unexpected error: {err:?}"
        );

        let err = submit_contact(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "   ".to_string(),
            "Let's talk.".to_string(),
        )
        .await
        .unwrap_err();
        assert!(matches!(&err, ServerFnError::ServerError(msg) if msg == "subject is required"));
    }
}
