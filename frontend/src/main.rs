use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod api;
mod carousel;
mod config;
mod data;
mod listing;
mod sanitize;
mod scroll;
mod validation;

mod components {
    pub mod action_button;
    pub mod cards;
    pub mod feature_carousel;
    pub mod form;
    pub mod inputs;
    pub mod project_carousel;
}
mod pages {
    pub mod book_a_demo;
    pub mod expert_opinion;
    pub mod expert_opinions;
    pub mod home;
}

use components::action_button::{ActionButton, ButtonWidth};
use pages::{
    book_a_demo::BookADemo,
    expert_opinion::ExpertOpinion,
    expert_opinions::ExpertOpinions,
    home::{PublicHome, SCROLL_CONTAINER_ID},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book-a-demo")]
    BookADemo,
    #[at("/insights/expert-opinions")]
    ExpertOpinions,
    #[at("/insights/expert-opinions/:id")]
    ExpertOpinion { id: i32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <PublicHome /> }
        },
        Route::BookADemo => {
            info!("Rendering Book a Demo page");
            html! { <BookADemo /> }
        },
        Route::ExpertOpinions => {
            info!("Rendering Expert Opinions page");
            html! { <ExpertOpinions /> }
        },
        Route::ExpertOpinion { id } => {
            info!("Rendering Expert Opinion page for {}", id);
            html! { <ExpertOpinion id={id} /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <p>{"The page you are looking for does not exist or has moved."}</p>
                    <ActionButton route={Route::Home} width={ButtonWidth::Fit}>{"Back to home"}</ActionButton>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/images/logo.svg" alt="ConstructAfrica" />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a class="nav-link" href="/projects">{"Projects"}</a>
                    <a class="nav-link" href="/news">{"News"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::ExpertOpinions} classes="nav-link">
                            {"Expert Opinions"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <ActionButton route={Route::BookADemo} small=true>
                            {"Book a Demo"}
                        </ActionButton>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div>
                    <h4>{"ConstructAfrica"}</h4>
                    <p>{"Trusted intelligence for construction in Africa."}</p>
                </div>
                <div>
                    <h4>{"Insights"}</h4>
                    <Link<Route> to={Route::ExpertOpinions}>{"Expert Opinions"}</Link<Route>>
                    <a href="/news">{"News"}</a>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <a href="/advisory-board">{"Advisory Board"}</a>
                    <a href="/get-listed">{"Get listed"}</a>
                    <Link<Route> to={Route::BookADemo}>{"Book a Demo"}</Link<Route>>
                </div>
            </div>
            <p class="site-footer__legal">{"© ConstructAfrica. All rights reserved."}</p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{GLOBAL_CSS}</style>
            <Nav />
            <main id={SCROLL_CONTAINER_ID} class="scrollable-section">
                <Switch<Route> render={switch} />
                <Footer />
            </main>
        </BrowserRouter>
    }
}

const GLOBAL_CSS: &str = r#"
body { margin: 0; font-family: 'Inter', sans-serif; color: #181D27; background: #ffffff; }
.scrollable-section { height: calc(100vh - 72px); overflow-y: auto; }
.top-nav { position: sticky; top: 0; z-index: 10; height: 72px; background: #ffffff; border-bottom: 1px solid #E9EAEB; }
.nav-content { max-width: 1280px; margin: 0 auto; height: 100%; display: flex; align-items: center; justify-content: space-between; padding: 0 2rem; }
.nav-right { display: flex; gap: 1.5rem; align-items: center; }
.nav-link { color: #414651; text-decoration: none; font-weight: 500; }
.burger-menu { display: none; background: none; border: 0; }
.burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #414651; }
@media (max-width: 767px) {
    .burger-menu { display: block; }
    .nav-right { display: none; }
    .nav-right.mobile-menu-open { display: flex; flex-direction: column; position: absolute; top: 72px; left: 0; right: 0; background: #ffffff; padding: 1rem; }
}
.action-button { display: inline-flex; align-items: center; justify-content: center; padding: 0.75rem 1.25rem; font-weight: 600; cursor: pointer; text-decoration: none; }
.action-button--small { padding: 0.5rem 0.875rem; font-size: 0.875rem; }
.action-button.rounded { border-radius: 8px; }
.action-button.rounded-full { border-radius: 9999px; }
.action-button.loading { opacity: 0.7; pointer-events: none; }
.action-button__spinner, .loading-spinner { display: inline-block; width: 1em; height: 1em; margin-left: 0.5rem; border: 2px solid rgba(0,0,0,0.1); border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.home-section { max-width: 1280px; margin: 0 auto; padding: 4rem 2rem; }
.home-section__heading { text-align: center; margin-bottom: 2rem; }
.hero { position: relative; height: 640px; overflow: hidden; }
.hero__video { width: 100%; height: 100%; object-fit: cover; }
.hero__shade { position: absolute; inset: 0; background: rgba(0,0,0,0.45); }
.hero__content { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: center; padding: 0 4rem; color: #ffffff; }
.marquee { overflow: hidden; }
.marquee__track { display: flex; gap: 3rem; width: max-content; animation: marquee 30s linear infinite; }
@keyframes marquee { to { transform: translateX(-50%); } }
.opinions-grid, .team-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.expert-card { display: block; padding: 1.5rem; border: 1px solid #E9EAEB; border-radius: 12px; color: inherit; text-decoration: none; }
.expert-card__photo { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }
.feature-carousel { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.feature-row { cursor: pointer; padding: 1rem 0; border-top: 1px solid #E9EAEB; }
.feature-row__progress { height: 2px; background: #E0891E; transition: width 50ms linear; }
.feature-row__body { max-height: 0; overflow: hidden; transition: max-height 300ms ease; }
.feature-row.active .feature-row__body { max-height: 240px; }
.feature-carousel__image img { width: 100%; transition: opacity 200ms ease; }
@media (max-width: 767px) {
    .feature-carousel { grid-template-columns: 1fr; }
    .feature-row__progress { display: none; }
    .feature-carousel__image { display: none; }
}
@media (min-width: 768px) { .feature-row__mobile-image { display: none; } }
.form-field { display: flex; flex-direction: column; gap: 0.375rem; margin-bottom: 1rem; }
.form-field input, .form-field select { padding: 0.625rem 0.875rem; border: 1px solid #D5D7DA; border-radius: 8px; }
.form-field.has-error input, .form-field.has-error select { border-color: #F04438; }
.field-error { color: #F04438; font-size: 0.875rem; margin: 0; }
.lead-form__row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.site-footer { background: #0A0D12; color: #ffffff; padding: 3rem 2rem; }
.site-footer a { display: block; color: #D5D7DA; text-decoration: none; margin: 0.25rem 0; }
"#;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_carousel_classes_are_styled() {
        for class in [
            ".feature-row__progress",
            ".feature-row__body",
            ".feature-row.active .feature-row__body",
            ".feature-row__mobile-image",
            ".feature-carousel__image img",
        ] {
            assert!(GLOBAL_CSS.contains(class), "no rule for {}", class);
        }
    }

    #[test]
    fn image_fade_transition_sits_on_the_img() {
        let rule = GLOBAL_CSS
            .lines()
            .find(|line| line.starts_with(".feature-carousel__image img"))
            .expect("image rule");
        assert!(rule.contains("transition: opacity 200ms"));
    }

    #[test]
    fn mobile_image_hidden_on_desktop() {
        assert!(GLOBAL_CSS.contains(
            "@media (min-width: 768px) { .feature-row__mobile-image { display: none; } }"
        ));
    }
}
