//! Phone number + one-time code login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step one collects a phone number and pretends to send a code; step two
//! hands the number and the typed code to the session store. The whole card
//! is hidden from actors who are already signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::ACCEPTED_OTP;

use crate::components::auth_guard::HideIfAuth;
use crate::state::auth::use_session;

const OTP_LEN: usize = 6;

pub(crate) const INVALID_PHONE: &str = "Please enter a valid phone number.";
pub(crate) const INVALID_OTP_LENGTH: &str = "OTP must be 6 digits.";
pub(crate) const INCORRECT_OTP: &str = "Incorrect OTP.";

/// Trim and check a phone number of the shape
/// `[+][(]ddd[)][sep]ddd[sep]dddd..dddddd`, where `sep` is `-`, `.`, or
/// whitespace and bracketed parts are optional.
pub(crate) fn validate_phone_input(input: &str) -> Result<String, &'static str> {
    let phone = input.trim();
    if is_phone_number(phone) { Ok(phone.to_owned()) } else { Err(INVALID_PHONE) }
}

/// Trim and require exactly six characters.
pub(crate) fn validate_otp_input(input: &str) -> Result<String, &'static str> {
    let code = input.trim();
    if code.chars().count() == OTP_LEN { Ok(code.to_owned()) } else { Err(INVALID_OTP_LENGTH) }
}

fn is_phone_number(s: &str) -> bool {
    let rest = s.strip_prefix('+').unwrap_or(s);
    let rest = rest.strip_prefix('(').unwrap_or(rest);
    let Some(rest) = take_digits(rest, 3) else {
        return false;
    };
    let rest = rest.strip_prefix(')').unwrap_or(rest);
    let Some(rest) = take_digits(skip_separator(rest), 3) else {
        return false;
    };
    let tail = skip_separator(rest);
    (4..=6).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_digit())
}

fn take_digits(s: &str, n: usize) -> Option<&str> {
    let head = s.get(..n)?;
    head.bytes().all(|b| b.is_ascii_digit()).then(|| &s[n..])
}

fn skip_separator(s: &str) -> &str {
    match s.chars().next() {
        Some(c) if c == '-' || c == '.' || c.is_whitespace() => &s[c.len_utf8()..],
        _ => s,
    }
}

/// Login route. Navigates home once the card reports a successful sign-in.
#[component]
pub fn LoginPage() -> impl IntoView {
    let signed_in = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if signed_in.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <div class="login-page">
            <HideIfAuth>
                <LoginCard signed_in=signed_in/>
            </HideIfAuth>
        </div>
    }
}

#[component]
fn LoginCard(signed_in: RwSignal<bool>) -> impl IntoView {
    let session = use_session();
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let otp_sent = RwSignal::new(false);
    let phone_error = RwSignal::new(None::<&'static str>);
    let code_error = RwSignal::new(None::<&'static str>);
    let info = RwSignal::new(String::new());

    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_phone_input(&phone.get()) {
            Ok(number) => {
                log::info!("simulating OTP delivery to {number}");
                phone_error.set(None);
                code.set(String::new());
                code_error.set(None);
                info.set(format!("OTP sent (simulated). Enter the code \"{ACCEPTED_OTP}\" to log in."));
                phone_number.set(number);
                otp_sent.set(true);
            }
            Err(msg) => phone_error.set(Some(msg)),
        }
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code_value = match validate_otp_input(&code.get()) {
            Ok(value) => value,
            Err(msg) => {
                code_error.set(Some(msg));
                return;
            }
        };
        if session.login(&phone_number.get_untracked(), &code_value) {
            code_error.set(None);
            info.set("Login successful! Welcome back!".to_owned());
            signed_in.set(true);
        } else {
            info.set("The OTP you entered is incorrect. Please try again.".to_owned());
            code_error.set(Some(INCORRECT_OTP));
        }
    };

    let on_back = move |_| {
        otp_sent.set(false);
        code_error.set(None);
        info.set(String::new());
    };

    view! {
        <div class="login-card">
            <h1>{move || if otp_sent.get() { "Enter OTP" } else { "Sign In" }}</h1>
            <p class="login-card__subtitle">
                {move || {
                    if otp_sent.get() {
                        format!("We sent a code to {}.", phone_number.get())
                    } else {
                        "Enter your phone number to receive a login code.".to_owned()
                    }
                }}
            </p>
            <Show
                when=move || otp_sent.get()
                fallback=move || {
                    view! {
                        <form class="login-form" on:submit=on_send_code>
                            <input
                                class="login-input"
                                type="tel"
                                placeholder="e.g., +1 555-123-4567"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                            <Show when=move || phone_error.get().is_some()>
                                <p class="login-error">{move || phone_error.get().unwrap_or_default()}</p>
                            </Show>
                            <button class="login-button" type="submit">
                                "Send Code"
                            </button>
                        </form>
                    }
                }
            >
                <form class="login-form" on:submit=on_verify_code>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <Show when=move || code_error.get().is_some()>
                        <p class="login-error">{move || code_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit">
                        "Verify & Sign In"
                    </button>
                    <button class="login-link" type="button" on:click=on_back>
                        "Back to phone number entry"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
