use yew::prelude::*;

use crate::components::cards::ProjectCard;
use crate::data::ProjectSummary;

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub projects: Vec<ProjectSummary>,
    #[prop_or_default]
    pub loading: bool,
}

/// Horizontally scrolling strip of project cards with arrow buttons.
#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let track = use_node_ref();

    let scroll = |direction: f64| {
        let track = track.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(element) = track.cast::<web_sys::Element>() {
                let step = f64::from(element.client_width()) * 0.8;
                element.scroll_by_with_x_and_y(direction * step, 0.0);
            }
        })
    };

    if props.loading {
        return html! {
            <div class="carousel-loading"><span class="loading-spinner"></span></div>
        };
    }

    html! {
        <div class="project-carousel">
            <button class="carousel-arrow carousel-arrow--prev" aria-label="Previous" onclick={scroll(-1.0)}>{"‹"}</button>
            <div class="project-carousel__track" ref={track.clone()}>
                { for props.projects.iter().map(|project| html! {
                    <ProjectCard key={project.id} project={project.clone()} />
                }) }
            </div>
            <button class="carousel-arrow carousel-arrow--next" aria-label="Next" onclick={scroll(1.0)}>{"›"}</button>
        </div>
    }
}
