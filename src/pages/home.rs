use leptos::prelude::*;

use crate::app::FIRM_NAME;
use crate::components::ContactForm;

const SERVICES: [(&str, &str); 4] = [
    (
        "Structural Design",
        "Reinforced concrete, steel and timber structures calculated to code and built to last.",
    ),
    (
        "Residential Projects",
        "Houses and condominiums from the first sketch to the occupancy permit.",
    ),
    (
        "Commercial & Industrial",
        "Warehouses, shops and plants designed around your operation and budget.",
    ),
    (
        "Renovation & Inspection",
        "Technical reports, retrofits and renovations with full engineering responsibility.",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("20+", "years in the field"),
    ("450+", "projects delivered"),
    ("100%", "licensed engineers"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>{FIRM_NAME}</h1>
                <p class="subtitle">"Engineering that holds up"</p>
                <p class="description">
                    "Structural, civil and building projects for homes, businesses and industry. "
                    "Clear budgets, licensed engineers and on-site follow-up from start to finish."
                </p>
                <div class="cta-buttons">
                    <a href="#contact" class="btn btn-primary">"Request a quote"</a>
                    <a href="#services" class="btn btn-secondary">"Our services"</a>
                </div>
            </section>

            <section id="services" class="features">
                {SERVICES
                    .into_iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="feature">
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section id="about" class="about">
                <h2>"About us"</h2>
                <p>
                    "We are a multidisciplinary team of civil engineers and architects. "
                    "Every project is signed by a registered engineer and followed on site."
                </p>
                <div class="stats">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat">
                                    <strong>{value}</strong>
                                    <span>{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="projects" class="projects">
                <h2>"How we work"</h2>
                <ol class="steps">
                    <li>"Site visit and briefing"</li>
                    <li>"Preliminary design and budget"</li>
                    <li>"Detailed project and permits"</li>
                    <li>"Construction follow-up"</li>
                </ol>
            </section>

            <section id="contact" class="contact">
                <h2>"Let's talk about your project"</h2>
                <p class="instructions">
                    "Fill in the form and our team will get back to you within one business day."
                </p>
                <ContactForm/>
            </section>

            <footer class="site-footer">
                <p>{format!("© {FIRM_NAME}. All rights reserved.")}</p>
            </footer>
        </div>
    }
}
