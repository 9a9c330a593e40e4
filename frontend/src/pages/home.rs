use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::FaqItem;
use crate::components::testimonials::{Testimonial, TestimonialCarousel};
use crate::counter::AnimatedCounter;
use crate::Route;

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Month-end close went from nine days to three. Bank reconciliation basically runs itself now.".into(),
            author: "Priya Raman".into(),
            role: "Finance Controller, Kaveri Foods".into(),
        },
        Testimonial {
            quote: "GST filings used to need two consultants. Now our accountant does them before lunch.".into(),
            author: "Arjun Mehta".into(),
            role: "Founder, Mehta Textiles".into(),
        },
        Testimonial {
            quote: "We moved 14 warehouses onto Innovate Books without a single missed dispatch.".into(),
            author: "Sana Qureshi".into(),
            role: "COO, Northline Distributors".into(),
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <section class="hero">
                <h1 class="hero-title">{"Accounting that closes the books for you"}</h1>
                <p class="hero-subtitle">
                    {"Innovate Books brings ledgers, GST, payroll and reconciliation into one place, built for Indian businesses."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Pricing} classes="cta-button">
                        <span>{"See pricing"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                    <Link<Route> to={Route::ReconcileCreate} classes="cta-secondary">
                        {"Start a reconciliation"}
                    </Link<Route>>
                </div>
            </section>

            <section class="stats">
                <div class="stat">
                    <AnimatedCounter end={10_000.0} prefix="₹" suffix="Cr+" class="stat-value" />
                    <span class="stat-label">{"transactions processed"}</span>
                </div>
                <div class="stat">
                    <AnimatedCounter end={1_234_567.0} class="stat-value" />
                    <span class="stat-label">{"invoices generated"}</span>
                </div>
                <div class="stat">
                    <AnimatedCounter end={99.9} decimals={1} suffix="%" class="stat-value" />
                    <span class="stat-label">{"uptime over the last year"}</span>
                </div>
                <div class="stat">
                    <AnimatedCounter end={48.0} duration={1500.0} suffix="h" class="stat-value" />
                    <span class="stat-label">{"average onboarding time"}</span>
                </div>
            </section>

            <section class="testimonials-section">
                <h2>{"Trusted by finance teams"}</h2>
                <TestimonialCarousel testimonials={testimonials()} />
            </section>

            <section class="faq-section">
                <h2>{"Questions"}</h2>
                <FaqItem question="Can I import data from my current software?">
                    <p>{"Yes. Tally, Zoho Books and spreadsheet exports can be imported during onboarding."}</p>
                </FaqItem>
                <FaqItem question="Is my data stored in India?">
                    <p>{"All customer data is hosted in Indian data centres and encrypted at rest."}</p>
                </FaqItem>
                <FaqItem question="How does reconciliation work?">
                    <p>{"Pick a period and a source. Innovate Books matches entries automatically and flags only what needs a human."}</p>
                </FaqItem>
            </section>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #0f172a;
                    color: #ffffff;
                    overflow-x: hidden;
                }

                .hero {
                    padding: 10rem 2rem 6rem;
                    text-align: center;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .hero-title {
                    font-size: 4rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #fff, #86efac);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: fadeIn 0.6s forwards;
                }

                @keyframes fadeIn {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .hero-subtitle {
                    color: #94a3b8;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    margin: 1.5rem 0 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: linear-gradient(45deg, #16a34a, #22c55e);
                    color: white;
                    text-decoration: none;
                    border-radius: 8px;
                    font-size: 1.1rem;
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(34, 197, 94, 0.3);
                }

                .cta-secondary {
                    padding: 1rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 8px;
                    color: #e2e8f0;
                    text-decoration: none;
                }

                .stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .stat-value {
                    font-size: 2.75rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                    color: #86efac;
                }

                .stat-label {
                    color: #94a3b8;
                }

                .testimonials-section,
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .testimonial-quote {
                    font-size: 1.4rem;
                    line-height: 1.6;
                }

                .testimonial footer {
                    display: flex;
                    flex-direction: column;
                    color: #94a3b8;
                }

                .testimonial-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }

                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    margin: 0 4px;
                    background: rgba(255, 255, 255, 0.25);
                }

                .testimonial-dot.active {
                    background: #22c55e;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    cursor: pointer;
                }

                .faq-answer {
                    display: none;
                    color: #94a3b8;
                }

                .faq-item.open .faq-answer {
                    display: block;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.5rem;
                    }

                    .stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
