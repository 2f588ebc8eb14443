use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;
use crate::config;
use crate::utils::scroll;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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

    let on_hero_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("contact");
    });

    let page_css = r#"
        section {
            padding: 4.5rem 2rem;
        }
        .section-inner {
            max-width: 1100px;
            margin: 0 auto;
        }
        .section-inner h2 {
            font-size: 2.2rem;
            text-align: center;
            margin-bottom: 0.75rem;
        }
        .section-lead {
            text-align: center;
            color: #5a6b82;
            max-width: 640px;
            margin: 0 auto 2.5rem;
        }
        .hero {
            padding: 10rem 2rem 6rem;
            background: linear-gradient(160deg, #1B365D 0%, #27497c 100%);
            color: #fff;
            text-align: center;
        }
        .hero h1 {
            font-size: 2.8rem;
            max-width: 760px;
            margin: 0 auto 1rem;
        }
        .hero p {
            font-size: 1.2rem;
            color: rgba(255, 255, 255, 0.85);
            max-width: 620px;
            margin: 0 auto 2rem;
        }
        .hero .cta {
            display: inline-block;
            padding: 0.9rem 2.5rem;
            background: #d4b962;
            color: #1B365D;
            font-size: 1.05rem;
            font-weight: bold;
            text-decoration: none;
            border-radius: 6px;
            transition: background 0.3s ease;
        }
        .hero .cta:hover {
            background: #e2cd85;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 1.5rem;
        }
        .area-card {
            border: 1px solid #e3e9f1;
            border-radius: 10px;
            padding: 1.75rem;
            background: #fff;
            box-shadow: 0 2px 8px rgba(27, 54, 93, 0.06);
        }
        .area-card h3 {
            margin-bottom: 0.5rem;
        }
        .area-card p {
            color: #5a6b82;
        }
        .benefits {
            background: #f5f7fa;
        }
        .benefit-item {
            display: flex;
            gap: 1rem;
            align-items: flex-start;
            padding: 1rem 0;
        }
        .benefit-item .marker {
            color: #8a6d2f;
            font-size: 1.4rem;
            line-height: 1.2;
        }
        .award-card {
            text-align: center;
            padding: 1.5rem;
            border-radius: 10px;
            background: #fff;
            border: 1px solid #e3e9f1;
        }
        .award-card .year {
            color: #8a6d2f;
            font-weight: bold;
        }
        .timeline-item {
            display: flex;
            gap: 1.5rem;
            padding: 1.25rem 0;
            border-left: 2px solid #d4b962;
            padding-left: 1.5rem;
            margin-left: 0.5rem;
        }
        .timeline-item .year {
            font-weight: bold;
            min-width: 4rem;
        }
        .contact {
            background: #f5f7fa;
        }
        .contact-layout {
            display: grid;
            grid-template-columns: 1fr 2fr;
            gap: 2.5rem;
            align-items: start;
        }
        .info-card {
            background: #fff;
            border: 1px solid #e3e9f1;
            border-radius: 10px;
            padding: 1.5rem;
            margin-bottom: 1.25rem;
        }
        .info-card h3 {
            margin-bottom: 0.4rem;
        }
        .info-card p {
            color: #5a6b82;
        }
        @media (max-width: 900px) {
            .contact-layout {
                grid-template-columns: 1fr;
            }
            .hero h1 {
                font-size: 2.1rem;
            }
        }
    "#;

    html! {
        <div class="home-page">
            <style>{page_css}</style>

            <section class="hero">
                <h1>{"Four Decades of Standing Up for Detroit"}</h1>
                <p>{"From injury claims to family matters, Harrison & Associates brings \
                     seasoned counsel and straight answers to every case we take."}</p>
                <a class="cta" href="#contact" onclick={on_hero_cta}>{"Request a Free Consultation"}</a>
            </section>

            <section id="practice-areas">
                <div class="section-inner">
                    <h2>{"Practice Areas"}</h2>
                    <p class="section-lead">{"Focused representation across the matters that affect working families and local businesses most."}</p>
                    <div class="card-grid">
                        <Reveal class="area-card">
                            <h3>{"Personal Injury"}</h3>
                            <p>{"Car accidents, slip-and-fall, and workplace injuries. You pay nothing unless we recover for you."}</p>
                        </Reveal>
                        <Reveal class="area-card">
                            <h3>{"Criminal Defense"}</h3>
                            <p>{"Aggressive defense for misdemeanors and felonies, from first appearance through trial."}</p>
                        </Reveal>
                        <Reveal class="area-card">
                            <h3>{"Family Law"}</h3>
                            <p>{"Divorce, custody, and support handled with discretion and a steady hand."}</p>
                        </Reveal>
                        <Reveal class="area-card">
                            <h3>{"Immigration"}</h3>
                            <p>{"Visas, green cards, and naturalization for families building a life in Michigan."}</p>
                        </Reveal>
                        <Reveal class="area-card">
                            <h3>{"Estate Planning"}</h3>
                            <p>{"Wills, trusts, and probate so your family's future is never left to chance."}</p>
                        </Reveal>
                        <Reveal class="area-card">
                            <h3>{"Business Law"}</h3>
                            <p>{"Formation, contracts, and disputes for Detroit's small and mid-size businesses."}</p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="why-us" class="benefits">
                <div class="section-inner">
                    <h2>{"Why Clients Choose Us"}</h2>
                    <Reveal class="benefit-item">
                        <span class="marker">{"§"}</span>
                        <p>{"Free, no-obligation case evaluations. You will know where you stand before you spend a dollar."}</p>
                    </Reveal>
                    <Reveal class="benefit-item">
                        <span class="marker">{"§"}</span>
                        <p>{"You work with an attorney, not a case manager. Your calls are returned the same business day."}</p>
                    </Reveal>
                    <Reveal class="benefit-item">
                        <span class="marker">{"§"}</span>
                        <p>{"Deep roots in Wayne County courts and a record of results that speaks for itself."}</p>
                    </Reveal>
                    <Reveal class="benefit-item">
                        <span class="marker">{"§"}</span>
                        <p>{"Contingency and flat-fee arrangements wherever the matter allows it."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="awards">
                <div class="section-inner">
                    <h2>{"Recognition"}</h2>
                    <p class="section-lead">{"Honored by peers and clients alike."}</p>
                    <div class="card-grid">
                        <Reveal class="award-card">
                            <p class="year">{"2023"}</p>
                            <h3>{"Top 100 Trial Lawyers"}</h3>
                            <p>{"National Trial Lawyers Association"}</p>
                        </Reveal>
                        <Reveal class="award-card">
                            <p class="year">{"2021"}</p>
                            <h3>{"Client's Choice Award"}</h3>
                            <p>{"Michigan Legal Review"}</p>
                        </Reveal>
                        <Reveal class="award-card">
                            <p class="year">{"2019"}</p>
                            <h3>{"Super Lawyers Selection"}</h3>
                            <p>{"Eighth consecutive year"}</p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="history">
                <div class="section-inner">
                    <h2>{"Our History"}</h2>
                    <Reveal class="timeline-item">
                        <span class="year">{"1984"}</span>
                        <p>{"David Harrison opens a one-room office on Griswold Street, taking injury cases no one else would touch."}</p>
                    </Reveal>
                    <Reveal class="timeline-item">
                        <span class="year">{"1998"}</span>
                        <p>{"The firm grows to five attorneys and adds family and immigration practices."}</p>
                    </Reveal>
                    <Reveal class="timeline-item">
                        <span class="year">{"2012"}</span>
                        <p>{"A landmark verdict secures one of the largest premises-liability recoveries in Wayne County."}</p>
                    </Reveal>
                    <Reveal class="timeline-item">
                        <span class="year">{"Today"}</span>
                        <p>{"Second-generation leadership carries the same promise: straight talk, fair fees, and full preparation."}</p>
                    </Reveal>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="section-inner">
                    <h2>{"Talk to an Attorney"}</h2>
                    <p class="section-lead">{"Tell us about your matter and we will respond within one business day."}</p>
                    <div class="contact-layout">
                        <div>
                            <Reveal class="info-card">
                                <h3>{"Visit"}</h3>
                                <p>{config::OFFICE_ADDRESS}</p>
                            </Reveal>
                            <Reveal class="info-card">
                                <h3>{"Call"}</h3>
                                <p><a href={format!("tel:{}", config::FALLBACK_PHONE)}>{config::FALLBACK_PHONE}</a></p>
                                <p>{config::OFFICE_HOURS}</p>
                            </Reveal>
                        </div>
                        <div class="service-features">
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
