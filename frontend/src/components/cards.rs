use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::ProjectSummary;
use crate::listing::OpinionRecord;
use crate::sanitize::excerpt;
use crate::Route;

const OPINION_EXCERPT_CHARS: usize = 160;

#[derive(Properties, PartialEq)]
pub struct ExpertCardProps {
    pub expert: OpinionRecord,
}

#[function_component(ExpertCard)]
pub fn expert_card(props: &ExpertCardProps) -> Html {
    let expert = &props.expert;
    html! {
        <Link<Route> to={Route::ExpertOpinion { id: expert.id }} classes="expert-card">
            <div class="expert-card__header">
                <img class="expert-card__photo" src={expert.image.clone()} alt={expert.name.clone()} />
                <span class="expert-card__name">{&expert.name}</span>
            </div>
            <h3 class="expert-card__title">{&expert.title}</h3>
            <p class="expert-card__opinion">{excerpt(&expert.opinion, OPINION_EXCERPT_CHARS)}</p>
            <span class="expert-card__more">{"Read more →"}</span>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: ProjectSummary,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <a class="project-card" href={format!("/projects/{}", project.id)}>
            <img class="project-card__image" src={project.image.clone()} alt={project.title.clone()} />
            <div class="project-card__body">
                <span class="project-card__location">{&project.location}</span>
                <h3>{&project.title}</h3>
                <p>{&project.description}</p>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMemberCardProps {
    pub name: AttrValue,
    pub role: AttrValue,
    pub image: AttrValue,
}

#[function_component(TeamMemberCard)]
pub fn team_member_card(props: &TeamMemberCardProps) -> Html {
    html! {
        <div class="team-card">
            <img src={props.image.clone()} alt={props.name.clone()} />
            <h4>{&props.name}</h4>
            <p>{&props.role}</p>
        </div>
    }
}
