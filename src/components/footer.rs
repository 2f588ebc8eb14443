use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <style>
            {r#".footer {
                background: #1B365D;
                color: rgba(255, 255, 255, 0.85);
                padding: 2.5rem 2rem;
                margin-top: 4rem;
            }
            .footer-inner {
                max-width: 1100px;
                margin: 0 auto;
                display: flex;
                flex-wrap: wrap;
                justify-content: space-between;
                gap: 1.5rem;
                font-size: 0.95rem;
            }
            .footer a {
                color: #d4b962;
                text-decoration: none;
            }
            .footer a:hover {
                text-decoration: underline;
            }"#}
            </style>
            <div class="footer-inner">
                <div>
                    <strong>{"Harrison & Associates, Attorneys at Law"}</strong>
                    <p>{config::OFFICE_ADDRESS}</p>
                    <p>{config::OFFICE_HOURS}</p>
                </div>
                <div>
                    <p>{"Call us: "}<a href={format!("tel:{}", config::FALLBACK_PHONE)}>{config::FALLBACK_PHONE}</a></p>
                    <p><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></p>
                    <p>{"© 2024 Harrison & Associates. Attorney advertising."}</p>
                </div>
            </div>
        </footer>
    }
}
