use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{CarouselController, ImageFade, WindowClassifier};
use crate::config::{IMAGE_SWAP_DELAY_MS, TICK_MS};
use crate::data::{FeatureItem, DEFAULT_FEATURE_IMAGE};

#[derive(Properties, PartialEq)]
struct FeatureRowProps {
    feature: FeatureItem,
    index: usize,
    is_active: bool,
    progress: f64,
    on_select: Callback<usize>,
}

#[function_component(FeatureRow)]
fn feature_row(props: &FeatureRowProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_select.emit(index))
    };
    let feature = &props.feature;

    html! {
        <div class={classes!("feature-row", props.is_active.then_some("active"))}>
            <div class="feature-row__head" onclick={onclick}>
                <h3>{feature.title}</h3>
                <div class="feature-row__body">
                    <p>{feature.description}</p>
                </div>
            </div>
            if props.is_active {
                <div class="feature-row__progress" style={format!("width: {:.2}%;", props.progress)}></div>
            }
            // below the breakpoint the image sits inside the row
            <div class="feature-row__mobile-image">
                <div class="feature-panel">
                    <div class="feature-panel__badge">{feature.badge()}</div>
                    <span class="feature-panel__header">{feature.header()}</span>
                    <img src={feature.image} alt={feature.title} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCarouselProps {
    pub features: Vec<FeatureItem>,
}

/// Feature list that highlights one item at a time, moving on every four
/// seconds on wide screens. Narrow screens only change on click.
#[function_component(FeatureCarousel)]
pub fn feature_carousel(props: &FeatureCarouselProps) -> Html {
    let len = props.features.len();
    let controller = use_state(|| CarouselController::with_classifier(len, &WindowClassifier));
    let fade = use_state(|| {
        ImageFade::new(props.features.first().map_or(DEFAULT_FEATURE_IMAGE, |f| f.image))
    });

    // One pending tick at a time. Any state change (tick, click, resize)
    // drops the old timeout and schedules the next one from the new state.
    {
        let handle = controller.clone();
        use_effect_with_deps(
            move |current: &CarouselController| {
                let timeout = current.is_running().then(|| {
                    let mut next = current.clone();
                    Timeout::new(TICK_MS, move || {
                        next.tick();
                        handle.set(next);
                    })
                });
                move || drop(timeout)
            },
            (*controller).clone(),
        );
    }

    {
        let controller = controller.clone();
        use_event_with_window("resize", move |_: Event| {
            let mut next = (*controller).clone();
            if next.refresh_viewport(&WindowClassifier) {
                log::info!("Feature carousel switched to {:?}", next.viewport());
                controller.set(next);
            }
        });
    }

    {
        let fade = fade.clone();
        let features = props.features.clone();
        use_effect_with_deps(
            move |index: &usize| {
                let image = features.get(*index).map_or(DEFAULT_FEATURE_IMAGE, |f| f.image);
                let mut fading = (*fade).clone();
                fading.begin(image);
                fade.set(fading.clone());
                let timeout = Timeout::new(IMAGE_SWAP_DELAY_MS, move || {
                    fading.complete();
                    fade.set(fading);
                });
                move || drop(timeout)
            },
            controller.active_index(),
        );
    }

    let on_select = {
        let controller = controller.clone();
        Callback::from(move |index: usize| {
            let mut next = (*controller).clone();
            next.select(index);
            controller.set(next);
        })
    };

    let active = controller.active_index();
    let progress = controller.progress();
    let Some(current) = props.features.get(active).copied() else {
        return html! {};
    };

    html! {
        <div class="feature-carousel">
            <div class="feature-carousel__list">
                { for props.features.iter().enumerate().map(|(index, feature)| html! {
                    <FeatureRow
                        key={feature.id}
                        feature={*feature}
                        index={index}
                        is_active={index == active}
                        progress={progress}
                        on_select={on_select.clone()}
                    />
                }) }
            </div>
            <div class={classes!("feature-carousel__image", "feature-panel", fade.is_fading().then_some("fading"))}>
                <div class="feature-panel__badge">{current.badge()}</div>
                <span class="feature-panel__header">{current.header()}</span>
                <img
                    src={fade.displayed().to_string()}
                    alt={current.title}
                    style={format!("opacity: {};", fade.opacity())}
                />
            </div>
        </div>
    }
}
