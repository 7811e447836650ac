use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::action_button::{ActionButton, ButtonWidth};
use crate::components::cards::{ExpertCard, TeamMemberCard};
use crate::components::feature_carousel::FeatureCarousel;
use crate::components::form::{use_form, Submitted};
use crate::components::inputs::{options_from, Input, Select};
use crate::components::project_carousel::ProjectCarousel;
use crate::data::{self, ProjectSummary, BRAND_LOGOS, COUNTRIES, FEATURES, TEAM_MEMBERS};
use crate::listing::OpinionRecord;
use crate::scroll;
use crate::validation::CONTACT_SCHEMA;
use crate::Route;

pub const SCROLL_CONTAINER_ID: &str = "scrollable-section";
const EXPERT_SECTION_ID: &str = "expert-opinions";
const HOME_EXPERT_LIMIT: usize = 3;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let form = use_form(&CONTACT_SCHEMA);
    let on_valid = Callback::from(|values: Submitted| {
        match serde_json::to_string(&values) {
            Ok(json) => gloo_console::log!("Contact form:", json),
            Err(e) => log::warn!("Could not serialize contact form: {}", e),
        }
    });

    if form.is_submitted() {
        return html! {
            <div class="lead-form lead-form--done">
                <h3>{"Thanks for reaching out!"}</h3>
                <p>{"Our team will get back to you within one business day."}</p>
            </div>
        };
    }

    html! {
        <form class="lead-form" onsubmit={form.on_submit(on_valid)} novalidate=true>
            <div class="lead-form__row">
                <Input label="First Name" name="first_name" placeholder="First name" is_required=true
                    value={form.value("first_name")} error={form.error("first_name")}
                    oninput={form.on_input("first_name")} onblur={form.on_blur("first_name")} />
                <Input label="Last Name" name="last_name" placeholder="Last name" is_required=true
                    value={form.value("last_name")} error={form.error("last_name")}
                    oninput={form.on_input("last_name")} onblur={form.on_blur("last_name")} />
            </div>
            <div class="lead-form__row">
                <Input label="Company" name="company" placeholder="Company" is_required=true
                    value={form.value("company")} error={form.error("company")}
                    oninput={form.on_input("company")} onblur={form.on_blur("company")} />
                <Input label="Job Title" name="job_title" placeholder="Job title" is_required=true
                    value={form.value("job_title")} error={form.error("job_title")}
                    oninput={form.on_input("job_title")} onblur={form.on_blur("job_title")} />
            </div>
            <div class="lead-form__row">
                <Select label="Country" name="country" placeholder="Select country" is_required=true
                    value={form.value("country")} options={options_from(COUNTRIES)} error={form.error("country")}
                    onchange={form.on_input("country")} onblur={form.on_blur("country")} />
                <Input label="Phone Number" name="phone_number" input_type="tel" placeholder="+234 000 000 0000"
                    value={form.value("phone_number")} error={form.error("phone_number")}
                    oninput={form.on_input("phone_number")} onblur={form.on_blur("phone_number")} />
            </div>
            <Input label="Work Email" name="email" input_type="email" placeholder="you@company.com" is_required=true
                value={form.value("email")} error={form.error("email")}
                oninput={form.on_input("email")} onblur={form.on_blur("email")} />
            <ActionButton button_type="submit" width={ButtonWidth::Fit}>
                {"Get in touch"}
            </ActionButton>
        </form>
    }
}

#[function_component(PublicHome)]
pub fn public_home() -> Html {
    let route = use_route::<Route>();
    let hash = current_hash();
    let trending = use_state(|| None::<Vec<ProjectSummary>>);
    let experts = use_state(|| None::<Vec<OpinionRecord>>);

    {
        let trending = trending.clone();
        let experts = experts.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    trending.set(Some(api::trending_projects_or_bundled().await));
                });
                spawn_local(async move {
                    experts.set(Some(api::experts_or_bundled(HOME_EXPERT_LIMIT).await));
                });
                || ()
            },
            (),
        );
    }

    // Deep links to #expert-opinions scroll on mount, then again at 100 and 300 ms.
    use_effect_with_deps(
        move |(_, hash): &(Option<Route>, String)| {
            let retries = (hash == "#expert-opinions")
                .then(|| scroll::scroll_section_with_retries(SCROLL_CONTAINER_ID, EXPERT_SECTION_ID));
            move || drop(retries)
        },
        (route, hash),
    );

    let news = use_memo(|_| data::trending_projects(), ());

    html! {
        <div class="home">
            <section class="hero">
                <video class="hero__video" autoplay=true loop=true muted=true playsinline=true poster="/images/hero-vid-img.svg">
                    <source src="/videos/hero-vid.mp4" type="video/mp4" />
                </video>
                <div class="hero__shade"></div>
                <div class="hero__content">
                    <h1>{"Trusted Intelligence For Construction In Africa"}</h1>
                    <p>{"Track projects, discover opportunities, and make smarter decisions."}</p>
                </div>
            </section>

            <section class="trusted-by">
                <h2>{"Trusted by international contractors, consultants, and investors"}</h2>
                <div class="marquee">
                    <div class="marquee__track">
                        // rendered twice so the loop has no gap
                        { for BRAND_LOGOS.iter().chain(BRAND_LOGOS.iter()).map(|brand| html! {
                            <div class="marquee__item">
                                <img src={brand.logo} alt={brand.name} />
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__heading">
                    <h2>{"Trending Projects"}</h2>
                    <h3>{"Get Insights and Updates on Projects Across Africa"}</h3>
                </div>
                <ProjectCarousel projects={(*trending).clone().unwrap_or_default()} loading={trending.is_none()} />
                <ActionButton href="/projects" width={ButtonWidth::Fit}>{"Learn More"}</ActionButton>
            </section>

            <section class="home-section features">
                <div class="home-section__heading">
                    <p class="eyebrow">{"BUILT FOR RESULTS. POWERED BY INSIGHTS."}</p>
                    <h2>{"Uncover Real Opportunities, Win Businesses"}</h2>
                    <p>
                        {"We deliver trusted, on-the-ground project intelligence, giving you clarity to act fast, plan smarter, and lead in Africa's evolving construction markets."}
                    </p>
                </div>
                <FeatureCarousel features={FEATURES.to_vec()} />
            </section>

            <section class="cta-banner">
                <div>
                    <h2>{"Make Smarter Decisions"}</h2>
                    <p>{"Get real-time insights to make quick decisions and stay ahead in Africa's construction industry."}</p>
                </div>
                <ActionButton route={Route::BookADemo} width={ButtonWidth::Fit}>{"Book a Demo"}</ActionButton>
            </section>

            <section class="home-section">
                <div class="home-section__heading">
                    <h2>{"NEWS AND INSIGHTS"}</h2>
                    <h3>{"Keep up-to-date with the Construction Landscape in Africa"}</h3>
                </div>
                <ProjectCarousel projects={(*news).clone()} />
                <ActionButton href="/news" width={ButtonWidth::Fit}>{"View More News"}</ActionButton>
            </section>

            <section class="newsletter">
                <h2>{"Connect with Construct Africa for Key Industry Updates on LinkedIn"}</h2>
                <p>{"Get the latest project updates, trends, and expert analysis delivered directly through our LinkedIn Newsletter."}</p>
                <ActionButton
                    href="https://www.linkedin.com/newsletters/constructafrica-insights-7367564550356840448/"
                    target="_blank"
                    width={ButtonWidth::Fit}
                >
                    {"Subscribe Now"}
                </ActionButton>
            </section>

            <section class="home-section" id={EXPERT_SECTION_ID}>
                <div class="home-section__heading">
                    <h2>{"EXPERT OPINION"}</h2>
                    <h3>{"Hear from experts across different industries"}</h3>
                </div>
                {
                    match &*experts {
                        None => html! { <div class="carousel-loading"><span class="loading-spinner"></span></div> },
                        Some(experts) => html! {
                            <div class="opinions-grid">
                                { for experts.iter().map(|expert| html! {
                                    <ExpertCard key={expert.id} expert={expert.clone()} />
                                }) }
                            </div>
                        },
                    }
                }
                <ActionButton route={Route::ExpertOpinions} width={ButtonWidth::Fit}>{"View More Opinions"}</ActionButton>
            </section>

            <section class="get-listed">
                <div>
                    <h2>{"Get listed"}</h2>
                    <p>{"Get a competitive edge with ConstructAfrica. Join thousands of companies making data-driven decisions."}</p>
                </div>
                <ActionButton href="/get-listed" width={ButtonWidth::Fit}>{"Request Listing"}</ActionButton>
            </section>

            <section class="home-section">
                <div class="home-section__heading">
                    <h2>{"ADVISORY BOARD"}</h2>
                    <h3>{"Meet the ConstructAfrica Industry Advisory Board"}</h3>
                </div>
                <div class="team-grid">
                    { for TEAM_MEMBERS.iter().map(|member| html! {
                        <TeamMemberCard name={member.name} role={member.role} image={member.image} />
                    }) }
                </div>
                <ActionButton
                    href="/advisory-board"
                    width={ButtonWidth::Fit}
                    text_color="#414651"
                    background_color="#ffffff"
                    border_color="#D5D7DA"
                >
                    {"View all members"}
                </ActionButton>
            </section>

            <section class="home-section contact">
                <div class="home-section__heading">
                    <h2>{"Get in touch"}</h2>
                    <h3>{"Tell us about your business and we'll show you what ConstructAfrica can do."}</h3>
                </div>
                <ContactForm />
            </section>
        </div>
    }
}
