use yew::prelude::*;

use crate::config;

#[function_component(Privacy)]
pub fn privacy() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="privacy-page" style="max-width: 760px; margin: 0 auto; padding: 8rem 2rem 3rem;">
            <h1>{"Privacy Policy"}</h1>
            <p style="color: #5a6b82; margin: 1rem 0;">
                {"Information you submit through our contact form is used only to respond \
                  to your inquiry. It is relayed to our office inbox by FormSubmit.co and \
                  is not sold, shared, or added to any marketing list."}
            </p>
            <p style="color: #5a6b82; margin: 1rem 0;">
                {"Submitting the form does not create an attorney-client relationship. \
                  Please do not include confidential or time-sensitive details; for urgent \
                  matters, call us at "}{config::FALLBACK_PHONE}{"."}
            </p>
            <p style="color: #5a6b82; margin: 1rem 0;">
                {"This site does not use analytics cookies and keeps no record of your \
                  visit beyond standard hosting logs."}
            </p>
        </div>
    }
}
