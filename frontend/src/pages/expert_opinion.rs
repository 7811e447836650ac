use yew::prelude::*;

use crate::components::action_button::{ActionButton, ButtonWidth};
use crate::data;
use crate::sanitize::clean_html_content;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ExpertOpinionProps {
    pub id: i32,
}

#[function_component(ExpertOpinion)]
pub fn expert_opinion(props: &ExpertOpinionProps) -> Html {
    let Some(expert) = data::find_opinion(props.id) else {
        return html! {
            <div class="opinion-detail opinion-detail--missing">
                <h1>{"Opinion not found"}</h1>
                <p>{"This expert opinion may have been moved or removed."}</p>
                <ActionButton route={Route::ExpertOpinions} outline=true width={ButtonWidth::Fit}>
                    {"Back to all opinions"}
                </ActionButton>
            </div>
        };
    };

    let paragraphs = clean_html_content(&expert.opinion);

    html! {
        <article class="opinion-detail">
            <ActionButton route={Route::ExpertOpinions} borderless=true width={ButtonWidth::Fit}>
                {"← All Expert Opinions"}
            </ActionButton>
            <header class="opinion-detail__header">
                <img src={expert.image.clone()} alt={expert.name.clone()} />
                <div>
                    <h1>{&expert.title}</h1>
                    <span class="opinion-detail__author">{&expert.name}</span>
                </div>
            </header>
            { for paragraphs.lines().map(|line| html! { <p>{line}</p> }) }
        </article>
    }
}
