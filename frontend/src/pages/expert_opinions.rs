use yew::prelude::*;

use crate::components::action_button::{ActionButton, ButtonWidth};
use crate::components::cards::ExpertCard;
use crate::components::inputs::{options_same, Select};
use crate::data::{self, FILTER_COUNTRIES, REGIONS, SECTORS};
use crate::listing::{filtered_view, FilterSelection, SortKey};

#[function_component(ExpertOpinions)]
pub fn expert_opinions() -> Html {
    let source = use_memo(|_| data::expert_opinions(), ());
    let sort = use_state(SortKey::default);
    let filters = use_state(FilterSelection::default);
    let show_filters = use_state(|| false);

    let view = use_memo(
        |(source, filters, sort)| filtered_view(source, filters, *sort),
        ((*source).clone(), (*filters).clone(), *sort),
    );
    let active_filters = filters.active_count();

    let toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |value: String| sort.set(SortKey::parse(&value)))
    };

    let on_region = {
        let filters = filters.clone();
        Callback::from(move |value: String| filters.set((*filters).clone().with_region(&value)))
    };
    let on_country = {
        let filters = filters.clone();
        Callback::from(move |value: String| filters.set((*filters).clone().with_country(&value)))
    };
    let on_sector = {
        let filters = filters.clone();
        Callback::from(move |value: String| filters.set((*filters).clone().with_sector(&value)))
    };

    let clear_all = {
        let filters = filters.clone();
        Callback::from(move |_: MouseEvent| {
            let mut cleared = (*filters).clone();
            cleared.clear();
            filters.set(cleared);
        })
    };

    let sort_options: Vec<(AttrValue, AttrValue)> = SortKey::ALL
        .iter()
        .map(|key| (AttrValue::Static(key.as_str()), AttrValue::Static(key.label())))
        .collect();

    html! {
        <div class="opinions-page">
            <div class="opinions-page__bar">
                <div class="section-tab">{"All Expert Opinions"}</div>
                <div class="opinions-page__controls">
                    <div class="opinions-page__sort">
                        <Select
                            label="Sort by"
                            name="sort"
                            value={sort.as_str()}
                            options={sort_options}
                            onchange={on_sort}
                        />
                    </div>
                    <ActionButton outline=true width={ButtonWidth::Fit} onclick={toggle_filters}>
                        <span class="filter-icon">{"⇅"}</span>
                        <span>{"Filters"}</span>
                        if active_filters > 0 {
                            <span class="filter-badge">{active_filters}</span>
                        }
                    </ActionButton>
                </div>
            </div>

            if *show_filters {
                <div class="opinions-page__filters">
                    <Select
                        label="Region"
                        name="region"
                        placeholder="Select Region"
                        value={filters.region_value().to_string()}
                        options={options_same(&REGIONS)}
                        onchange={on_region}
                    />
                    <Select
                        label="Country"
                        name="country"
                        placeholder="Select Country"
                        value={filters.country_value().to_string()}
                        options={options_same(&FILTER_COUNTRIES)}
                        onchange={on_country}
                    />
                    <Select
                        label="Sector"
                        name="sector"
                        placeholder="Select Sector"
                        value={filters.sector_value().to_string()}
                        options={options_same(&SECTORS)}
                        onchange={on_sector}
                    />
                    <ActionButton outline=true width={ButtonWidth::Fit} onclick={clear_all}>
                        {"Clear All"}
                    </ActionButton>
                </div>
            }

            if view.is_empty() {
                <p class="opinions-page__empty">{"No expert opinions yet."}</p>
            } else {
                <div class="opinions-grid">
                    { for view.iter().map(|expert| html! {
                        <ExpertCard key={expert.id} expert={expert.clone()} />
                    }) }
                </div>
            }
        </div>
    }
}
