use leptos::{ev::SubmitEvent, prelude::*};

use crate::contact::{self, ContactSubmission, FieldErrors};

#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toast {
    Sent,
    Failed,
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-primary/10 bg-white/70 \
     focus:outline-none focus:ring-2 focus:ring-primary/40 focus:border-primary/40 \
     placeholder-primary/40 transition-all duration-200";

/// Validates on every keystroke, submits once all three fields pass, and
/// reports the outcome of the POST in a transient toast. Fields only clear
/// when the endpoint accepted the submission, so a failed send can be
/// retried without retyping.
#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (pending, set_pending) = signal(false);
    let (toast, set_toast) = signal(None::<Toast>);

    let can_submit = Memo::new(move |_| {
        !pending()
            && name.with(|v| contact::validate_name(v).is_none())
            && email.with(|v| contact::validate_email(v).is_none())
            && message.with(|v| contact::validate_message(v).is_none())
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            // one in-flight submission at a time
            return;
        }
        let parsed = name.with_untracked(|n| {
            email.with_untracked(|e| {
                message.with_untracked(|m| ContactSubmission::parse(n, e, m))
            })
        });
        let submission = match parsed {
            Ok(submission) => submission,
            Err(field_errors) => {
                set_errors(field_errors);
                return;
            }
        };
        set_errors(FieldErrors::default());
        set_pending(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match contact::deliver(&submission).await {
                Ok(()) => {
                    set_name(String::new());
                    set_email(String::new());
                    set_message(String::new());
                    set_toast(Some(Toast::Sent));
                }
                Err(err) => {
                    log::warn!("contact submission failed: {err}");
                    set_toast(Some(Toast::Failed));
                }
            }
            set_pending(false);
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toast(None);
        });

        // the server-rendered form is inert until hydration
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    view! {
        <form class="max-w-xl mx-auto text-left" on:submit=submit novalidate=true>
            <div class="mb-4">
                <label for="contact_name" class="block mb-1 text-sm font-medium text-primary/80">
                    "Name"
                </label>
                <input
                    id="contact_name"
                    type="text"
                    placeholder="Your name"
                    class=INPUT_CLASS
                    prop:value=name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_errors.update(|e| e.name = contact::validate_name(&value));
                        set_name(value);
                    }
                />
                <FieldErrorNote error=Signal::derive(move || errors().name) />
            </div>
            <div class="mb-4">
                <label for="contact_email" class="block mb-1 text-sm font-medium text-primary/80">
                    "Email"
                </label>
                <input
                    id="contact_email"
                    type="email"
                    placeholder="you@example.com"
                    class=INPUT_CLASS
                    prop:value=email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_errors.update(|e| e.email = contact::validate_email(&value));
                        set_email(value);
                    }
                />
                <FieldErrorNote error=Signal::derive(move || errors().email) />
            </div>
            <div class="mb-6">
                <label for="contact_message" class="block mb-1 text-sm font-medium text-primary/80">
                    "Message"
                </label>
                <textarea
                    id="contact_message"
                    rows=5
                    placeholder="Tell me about your project..."
                    class=INPUT_CLASS
                    prop:value=message
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_errors.update(|e| e.message = contact::validate_message(&value));
                        set_message(value);
                    }
                ></textarea>
                <FieldErrorNote error=Signal::derive(move || errors().message) />
            </div>
            <div class="text-center">
                <button
                    type="submit"
                    disabled=move || !can_submit()
                    class="inline-flex items-center px-6 py-3 bg-primary text-white rounded-lg \
                           hover:bg-primary/90 transition-colors disabled:opacity-50 \
                           disabled:cursor-not-allowed"
                >
                    {move || if pending() { "Sending..." } else { "Send Message" }}
                </button>
            </div>
        </form>
        {move || {
            toast()
                .map(|kind| {
                    let (tone, text) = match kind {
                        Toast::Sent => ("bg-emerald-600", "Thanks! Your message is on its way."),
                        Toast::Failed => {
                            ("bg-red-600", "Sending failed. Please try again in a moment.")
                        }
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "toast-rise fixed bottom-6 right-6 z-50 px-5 py-3 rounded-lg shadow-lg text-white {tone}",
                            )
                        >
                            {text}
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn FieldErrorNote(error: Signal<Option<contact::ValidationError>>) -> impl IntoView {
    view! {
        {move || {
            error()
                .map(|err| {
                    view! { <p class="mt-1 text-sm text-red-600">{err.to_string()}</p> }
                })
        }}
    }
}
