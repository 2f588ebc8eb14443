//! Contact form: per-field validation on blur, error clearing on input, and
//! a gated submit that relays the message through FormSubmit.co. One
//! submission is in flight at most, enforced by disabling the button while
//! sending.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent. We will respond within 24 hours.";

/// How long the status banner stays up before the form resets to idle.
const STATUS_RESET_MS: u32 = 4_000;

fn rejected_message() -> String {
    format!(
        "Failed to send message. Please try again or call {}.",
        config::FALLBACK_PHONE
    )
}

fn network_message() -> String {
    format!(
        "Network error. Please call us directly: {}.",
        config::FALLBACK_PHONE
    )
}

/// Snapshot of the form taken at submit time, serialized as the relay body.
#[derive(Serialize, Clone)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub privacy: bool,
}

/// Lifecycle of one submission attempt.
#[derive(Clone, PartialEq)]
enum SubmissionState {
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

/// Outcome of one delivery attempt, in the order the submit flow checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitOutcome {
    Sent,
    Rejected,
    NetworkFailure,
    MalformedResponse,
}

/// The submit button stays disabled from the moment a request goes out until
/// the timed reset returns the form to idle. That disabled window is the only
/// re-entrancy guard, so releasing it early would let a second submission
/// race the first attempt's pending reset timer.
fn submit_locked(state: &SubmissionState) -> bool {
    *state != SubmissionState::Idle
}

fn submit_label(state: &SubmissionState) -> &'static str {
    if *state == SubmissionState::Submitting {
        "Sending Message..."
    } else {
        "Send Message"
    }
}

/// Per-field error messages. `None` means the field currently passes.
#[derive(Clone, Default, PartialEq)]
struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    service: Option<&'static str>,
    message: Option<&'static str>,
    privacy: Option<&'static str>,
}

impl FieldErrors {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.service.is_none()
            && self.message.is_none()
            && self.privacy.is_none()
    }
}

fn validate_name(value: &str) -> Option<&'static str> {
    // Character count, not byte length: multibyte names must not need fewer
    // visible characters than ASCII ones.
    if value.trim().chars().count() < 2 {
        Some("Name must be at least 2 characters long")
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<&'static str> {
    if is_valid_email(value.trim()) {
        None
    } else {
        Some("Please enter a valid email address")
    }
}

fn validate_service(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Please select a service")
    } else {
        None
    }
}

fn validate_message(value: &str) -> Option<&'static str> {
    if value.trim().chars().count() < 10 {
        Some("Message must be at least 10 characters long")
    } else {
        None
    }
}

fn validate_privacy(checked: bool) -> Option<&'static str> {
    if checked {
        None
    } else {
        Some("You must agree to the privacy policy")
    }
}

/// The `local@domain.tld` shape: no whitespace, exactly one '@', and a dot
/// inside the domain with characters on both sides.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

/// Validates every field in one pass so all errors surface at once. Phone
/// and company are optional and always pass.
fn validate_all(request: &ContactRequest) -> FieldErrors {
    FieldErrors {
        name: validate_name(&request.name),
        email: validate_email(&request.email),
        service: validate_service(&request.service),
        message: validate_message(&request.message),
        privacy: validate_privacy(request.privacy),
    }
}

/// Interprets the relay's response body. Anything that is not JSON with a
/// boolean `success` field counts as malformed.
fn classify_response(body: &str) -> SubmitOutcome {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("success").and_then(|v| v.as_bool()) {
            Some(true) => SubmitOutcome::Sent,
            Some(false) => SubmitOutcome::Rejected,
            None => SubmitOutcome::MalformedResponse,
        },
        Err(_) => SubmitOutcome::MalformedResponse,
    }
}

/// Sends one POST to the relay. No retries; a failed attempt is terminal and
/// the user resubmits by hand.
async fn deliver(request: &ContactRequest) -> SubmitOutcome {
    let post = match Request::post(&config::get_form_endpoint())
        .header("Accept", "application/json")
        .json(request)
    {
        Ok(post) => post,
        Err(e) => {
            log::error!("Failed to encode contact request: {:?}", e);
            return SubmitOutcome::NetworkFailure;
        }
    };
    match post.send().await {
        Ok(response) => match response.text().await {
            Ok(body) => {
                let outcome = classify_response(&body);
                if outcome == SubmitOutcome::MalformedResponse {
                    log::warn!("Relay response was not JSON with a boolean success field");
                }
                outcome
            }
            Err(e) => {
                log::warn!("Failed to read relay response body: {:?}", e);
                SubmitOutcome::MalformedResponse
            }
        },
        Err(e) => {
            gloo_console::error!("FormSubmit error:", e.to_string());
            SubmitOutcome::NetworkFailure
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let company = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let privacy = use_state(|| false);
    let errors = use_state(FieldErrors::default);
    let state = use_state(|| SubmissionState::Idle);

    // Text inputs: update the value and clear that field's error on input,
    // validate on blur.
    let on_name_input = {
        let name = name.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            let mut next = (*errors).clone();
            next.name = None;
            errors.set(next);
        })
    };
    let on_name_blur = {
        let name = name.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            next.name = validate_name(&name);
            errors.set(next);
        })
    };

    let on_email_input = {
        let email = email.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            let mut next = (*errors).clone();
            next.email = None;
            errors.set(next);
        })
    };
    let on_email_blur = {
        let email = email.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            next.email = validate_email(&email);
            errors.set(next);
        })
    };

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_company_input = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };

    let on_service_change = {
        let service = service.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
            let mut next = (*errors).clone();
            next.service = None;
            errors.set(next);
        })
    };
    let on_service_blur = {
        let service = service.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            next.service = validate_service(&service);
            errors.set(next);
        })
    };

    let on_message_input = {
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
            let mut next = (*errors).clone();
            next.message = None;
            errors.set(next);
        })
    };
    let on_message_blur = {
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            next.message = validate_message(&message);
            errors.set(next);
        })
    };

    let on_privacy_change = {
        let privacy = privacy.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            privacy.set(input.checked());
            let mut next = (*errors).clone();
            next.privacy = None;
            errors.set(next);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let company = company.clone();
        let service = service.clone();
        let message = message.clone();
        let privacy = privacy.clone();
        let errors = errors.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                company: (*company).clone(),
                service: (*service).clone(),
                message: (*message).clone(),
                privacy: *privacy,
            };

            // All fields are checked in one pass; nothing is sent unless
            // every one of them passes.
            let field_errors = validate_all(&request);
            let all_valid = field_errors.is_empty();
            errors.set(field_errors);
            if !all_valid {
                // No network call; the banner gets the same timed reset the
                // network outcomes do, releasing the submit lock with it.
                state.set(SubmissionState::Error(
                    "Please correct the errors above.".to_string(),
                ));
                let state = state.clone();
                spawn_local(async move {
                    TimeoutFuture::new(STATUS_RESET_MS).await;
                    state.set(SubmissionState::Idle);
                });
                return;
            }

            state.set(SubmissionState::Submitting);

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let company = company.clone();
            let service = service.clone();
            let message = message.clone();
            let privacy = privacy.clone();
            let state = state.clone();
            spawn_local(async move {
                match deliver(&request).await {
                    SubmitOutcome::Sent => {
                        state.set(SubmissionState::Success(SENT_MESSAGE.to_string()));
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        company.set(String::new());
                        service.set(String::new());
                        message.set(String::new());
                        privacy.set(false);
                    }
                    SubmitOutcome::Rejected => {
                        state.set(SubmissionState::Error(rejected_message()));
                    }
                    SubmitOutcome::NetworkFailure | SubmitOutcome::MalformedResponse => {
                        state.set(SubmissionState::Error(network_message()));
                    }
                }
                // Unconditional reset: the banner hides and the button comes
                // back whatever the outcome was.
                TimeoutFuture::new(STATUS_RESET_MS).await;
                state.set(SubmissionState::Idle);
            });
        })
    };

    let locked = submit_locked(&state);
    let label = submit_label(&state);
    let status_banner = match &*state {
        SubmissionState::Success(msg) => html! {
            <div class="form-status success">{msg}</div>
        },
        SubmissionState::Error(msg) => html! {
            <div class="form-status error">{msg}</div>
        },
        SubmissionState::Idle | SubmissionState::Submitting => html! {},
    };

    let field_class = |error: Option<&'static str>| {
        if error.is_some() { "error" } else { "" }
    };

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit} novalidate={true}>
            <style>
            {r#".contact-form {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1.25rem;
                text-align: left;
            }
            .contact-form .full-width {
                grid-column: 1 / -1;
            }
            .contact-form label {
                display: block;
                font-weight: bold;
                margin-bottom: 0.35rem;
                font-size: 0.95rem;
            }
            .contact-form input,
            .contact-form select,
            .contact-form textarea {
                width: 100%;
                padding: 0.75rem;
                border: 1px solid #c9d3e0;
                border-radius: 6px;
                background: #fff;
                color: #1B365D;
            }
            .contact-form input.error,
            .contact-form select.error,
            .contact-form textarea.error {
                border-color: #c0392b;
            }
            .contact-form .field-error {
                display: block;
                color: #c0392b;
                font-size: 0.85rem;
                margin-top: 0.3rem;
                min-height: 1em;
            }
            .contact-form .privacy-row label {
                display: flex;
                align-items: flex-start;
                gap: 0.6rem;
                font-weight: normal;
            }
            .contact-form .privacy-row input {
                width: auto;
                margin-top: 0.3rem;
            }
            .contact-form button[type="submit"] {
                padding: 0.9rem 2.5rem;
                background: #1B365D;
                color: #fff;
                border: none;
                border-radius: 6px;
                font-size: 1.05rem;
                cursor: pointer;
                transition: background 0.3s ease;
            }
            .contact-form button[type="submit"]:hover {
                background: #27497c;
            }
            .contact-form button[type="submit"]:disabled {
                background: #8fa3bf;
                cursor: not-allowed;
            }
            .form-status {
                grid-column: 1 / -1;
                padding: 0.9rem 1rem;
                border-radius: 6px;
            }
            .form-status.success {
                background: #e8f5e9;
                color: #1b5e20;
            }
            .form-status.error {
                background: #fdecea;
                color: #c0392b;
            }
            @media (max-width: 768px) {
                .contact-form {
                    grid-template-columns: 1fr;
                }
            }"#}
            </style>

            <div>
                <label for="name">{"Full Name *"}</label>
                <input
                    id="name"
                    type="text"
                    value={(*name).clone()}
                    class={field_class(errors.name)}
                    oninput={on_name_input}
                    onblur={on_name_blur}
                />
                <span class="field-error">{errors.name.unwrap_or("")}</span>
            </div>
            <div>
                <label for="email">{"Email Address *"}</label>
                <input
                    id="email"
                    type="email"
                    value={(*email).clone()}
                    class={field_class(errors.email)}
                    oninput={on_email_input}
                    onblur={on_email_blur}
                />
                <span class="field-error">{errors.email.unwrap_or("")}</span>
            </div>
            <div>
                <label for="phone">{"Phone Number"}</label>
                <input
                    id="phone"
                    type="tel"
                    value={(*phone).clone()}
                    oninput={on_phone_input}
                />
            </div>
            <div>
                <label for="company">{"Company"}</label>
                <input
                    id="company"
                    type="text"
                    value={(*company).clone()}
                    oninput={on_company_input}
                />
            </div>
            <div class="full-width">
                <label for="service">{"Service Needed *"}</label>
                <select
                    id="service"
                    class={field_class(errors.service)}
                    onchange={on_service_change}
                    onblur={on_service_blur}
                >
                    <option value="" selected={service.is_empty()}>{"Select a service"}</option>
                    <option value="personal-injury" selected={*service == "personal-injury"}>{"Personal Injury"}</option>
                    <option value="criminal-defense" selected={*service == "criminal-defense"}>{"Criminal Defense"}</option>
                    <option value="family-law" selected={*service == "family-law"}>{"Family Law"}</option>
                    <option value="immigration" selected={*service == "immigration"}>{"Immigration"}</option>
                    <option value="estate-planning" selected={*service == "estate-planning"}>{"Estate Planning"}</option>
                    <option value="business-law" selected={*service == "business-law"}>{"Business Law"}</option>
                </select>
                <span class="field-error">{errors.service.unwrap_or("")}</span>
            </div>
            <div class="full-width">
                <label for="message">{"How can we help? *"}</label>
                <textarea
                    id="message"
                    rows="6"
                    value={(*message).clone()}
                    class={field_class(errors.message)}
                    oninput={on_message_input}
                    onblur={on_message_blur}
                />
                <span class="field-error">{errors.message.unwrap_or("")}</span>
            </div>
            <div class="full-width privacy-row">
                <label>
                    <input
                        id="privacy"
                        type="checkbox"
                        checked={*privacy}
                        class={field_class(errors.privacy)}
                        onchange={on_privacy_change}
                    />
                    <span>
                        {"I agree to the "}
                        <a href="/privacy" target="_blank">{"privacy policy"}</a>
                        {" and consent to being contacted about my inquiry. *"}
                    </span>
                </label>
                <span class="field-error">{errors.privacy.unwrap_or("")}</span>
            </div>
            {status_banner}
            <div class="full-width">
                <button type="submit" disabled={locked}>
                    {label}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            company: String::new(),
            service: "family-law".to_string(),
            message: "I need help with a custody matter.".to_string(),
            privacy: true,
        }
    }

    #[test]
    fn name_requires_two_characters() {
        assert!(validate_name("").is_some());
        assert!(validate_name("J").is_some());
        assert!(validate_name("  J  ").is_some());
        assert!(validate_name("Jo").is_none());
        assert!(validate_name("Jane Doe").is_none());
        // Characters, not bytes: one CJK character is still one character.
        assert!(validate_name("李").is_some());
        assert!(validate_name("李明").is_none());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe@mail.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
    }

    #[test]
    fn service_must_be_selected() {
        assert!(validate_service("").is_some());
        assert!(validate_service("   ").is_some());
        assert!(validate_service("family-law").is_none());
    }

    #[test]
    fn message_requires_ten_characters() {
        assert!(validate_message("too short").is_some());
        assert!(validate_message("this is long enough").is_none());
        assert!(validate_message("请帮我处理").is_some());
        assert!(validate_message("请帮我处理一起监护权纠纷").is_none());
    }

    #[test]
    fn privacy_must_be_checked() {
        assert!(validate_privacy(false).is_some());
        assert!(validate_privacy(true).is_none());
    }

    #[test]
    fn gate_passes_only_when_every_field_is_valid() {
        assert!(validate_all(&valid_request()).is_empty());

        // Privacy unchecked blocks the submission even with everything else
        // valid, so no request would be issued.
        let mut request = valid_request();
        request.privacy = false;
        let errors = validate_all(&request);
        assert!(!errors.is_empty());
        assert!(errors.privacy.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn all_errors_surface_in_one_pass() {
        let request = ContactRequest {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            company: String::new(),
            service: String::new(),
            message: "short".to_string(),
            privacy: false,
        };
        let errors = validate_all(&request);
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.service.is_some());
        assert!(errors.message.is_some());
        assert!(errors.privacy.is_some());
    }

    #[test]
    fn optional_fields_never_fail() {
        let mut request = valid_request();
        request.phone = String::new();
        request.company = String::new();
        assert!(validate_all(&request).is_empty());
    }

    #[test]
    fn control_stays_locked_until_the_timed_reset() {
        // The disabled button is the only re-entrancy guard: it must hold
        // through the banner window, not just while the request is in flight,
        // or a resubmission could race the first attempt's pending reset.
        assert!(!submit_locked(&SubmissionState::Idle));
        assert!(submit_locked(&SubmissionState::Submitting));
        assert!(submit_locked(&SubmissionState::Success("sent".to_string())));
        assert!(submit_locked(&SubmissionState::Error("failed".to_string())));
    }

    #[test]
    fn label_swaps_only_while_sending() {
        assert_eq!(submit_label(&SubmissionState::Idle), "Send Message");
        assert_eq!(submit_label(&SubmissionState::Submitting), "Sending Message...");
        assert_eq!(
            submit_label(&SubmissionState::Success("sent".to_string())),
            "Send Message"
        );
        assert_eq!(
            submit_label(&SubmissionState::Error("failed".to_string())),
            "Send Message"
        );
    }

    #[test]
    fn response_classification() {
        assert_eq!(classify_response(r#"{"success": true}"#), SubmitOutcome::Sent);
        assert_eq!(
            classify_response(r#"{"success": false}"#),
            SubmitOutcome::Rejected
        );
        assert_eq!(
            classify_response(r#"{"message": "ok"}"#),
            SubmitOutcome::MalformedResponse
        );
        assert_eq!(
            classify_response(r#"{"success": "true"}"#),
            SubmitOutcome::MalformedResponse
        );
        assert_eq!(
            classify_response("<html>502 Bad Gateway</html>"),
            SubmitOutcome::MalformedResponse
        );
        assert_eq!(classify_response(""), SubmitOutcome::MalformedResponse);
    }

    #[test]
    fn request_body_carries_every_field() {
        let body = serde_json::to_value(valid_request()).unwrap();
        for key in ["name", "email", "phone", "company", "service", "message", "privacy"] {
            assert!(body.get(key).is_some(), "missing field {key}");
        }
    }
}
