use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::action_button::{ActionButton, ButtonWidth};
use crate::components::form::{use_form, FormHandle, Submitted};
use crate::components::inputs::{options_from, Input, Select};
use crate::data::{COUNTRIES, PHONE_CODES};
use crate::validation::DEMO_SCHEMA;

struct Plan {
    value: &'static str,
    title: &'static str,
    blurb: &'static str,
    perks: &'static [&'static str],
}

static PLANS: [Plan; 2] = [
    Plan {
        value: "news",
        title: "News & Insights",
        blurb: "Stay informed on Africa's construction landscape.",
        perks: &["Daily industry news", "Expert opinions", "Market reports"],
    },
    Plan {
        value: "projects",
        title: "Projects Intelligence",
        blurb: "Track verified projects from planning to completion.",
        perks: &["Verified project database", "Tender alerts", "Company and contact details"],
    },
];

#[derive(Properties, PartialEq)]
struct PlanPickerProps {
    form: FormHandle,
}

#[function_component(PlanPicker)]
fn plan_picker(props: &PlanPickerProps) -> Html {
    let selected = props.form.value("plan").to_string();
    let on_pick = {
        let on_input = props.form.on_input("plan");
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <fieldset class="plan-picker">
            <legend>{"Select your plan"}</legend>
            { for PLANS.iter().map(|plan| html! {
                <label class={classes!("plan-card", (selected == plan.value).then_some("selected"))}>
                    <input
                        type="radio"
                        name="plan"
                        value={plan.value}
                        checked={selected == plan.value}
                        onchange={on_pick.clone()}
                    />
                    <h4>{plan.title}</h4>
                    <p>{plan.blurb}</p>
                    <ul>
                        { for plan.perks.iter().map(|perk| html! { <li>{"✓ "}{*perk}</li> }) }
                    </ul>
                </label>
            }) }
            if let Some(error) = props.form.error("plan") {
                <p class="field-error">{error}</p>
            }
        </fieldset>
    }
}

#[function_component(BookADemo)]
pub fn book_a_demo() -> Html {
    let form = use_form(&DEMO_SCHEMA);

    let on_valid = Callback::from(|values: Submitted| {
        match serde_json::to_string(&values) {
            Ok(json) => gloo_console::log!("Demo request:", json),
            Err(e) => log::warn!("Could not serialize demo request: {}", e),
        }
    });

    html! {
        <div class="demo-page">
            <div class="demo-page__intro">
                <h1>{"Let's ConstructAfrica Together"}</h1>
                <p>
                    {"Fill in your information and select your preferred plan, we will guide you through the next steps to either activate your account or book a demo."}
                </p>
            </div>

            <div class="demo-page__grid">
                <div class="demo-page__art">
                    <img src="/images/map-illustration.svg" alt="Let's Construct Africa Together" />
                </div>

                if form.is_submitted() {
                    <div class="demo-page__done">
                        <h2>{"Thank you!"}</h2>
                        <p>{"We received your details and will be in touch shortly."}</p>
                        <ActionButton outline=true width={ButtonWidth::Fit} onclick={form.on_reset()}>
                            {"Submit another request"}
                        </ActionButton>
                    </div>
                } else {
                    <form class="lead-form" onsubmit={form.on_submit(on_valid)} novalidate=true>
                        <div class="lead-form__row">
                            <Input label="First name" name="first_name" placeholder="First name" is_required=true
                                value={form.value("first_name")} error={form.error("first_name")}
                                oninput={form.on_input("first_name")} onblur={form.on_blur("first_name")} />
                            <Input label="Last name" name="last_name" placeholder="Last name" is_required=true
                                value={form.value("last_name")} error={form.error("last_name")}
                                oninput={form.on_input("last_name")} onblur={form.on_blur("last_name")} />
                        </div>
                        <div class="lead-form__row">
                            <Input label="Company" name="company" placeholder="Company name" is_required=true
                                value={form.value("company")} error={form.error("company")}
                                oninput={form.on_input("company")} onblur={form.on_blur("company")} />
                            <Input label="Job title" name="job_title" placeholder="Job title" is_required=true
                                value={form.value("job_title")} error={form.error("job_title")}
                                oninput={form.on_input("job_title")} onblur={form.on_blur("job_title")} />
                        </div>
                        <Select label="Country" name="country" placeholder="Select country" is_required=true
                            value={form.value("country")} options={options_from(COUNTRIES)} error={form.error("country")}
                            onchange={form.on_input("country")} onblur={form.on_blur("country")} />
                        <div class="lead-form__row lead-form__row--phone">
                            <Select label="Code" name="phone_code"
                                value={form.value("phone_code")} options={options_from(PHONE_CODES)} error={form.error("phone_code")}
                                onchange={form.on_input("phone_code")} onblur={form.on_blur("phone_code")} />
                            <Input label="Phone number" name="phone_number" input_type="tel" placeholder="(555) 000-0000"
                                value={form.value("phone_number")} error={form.error("phone_number")}
                                oninput={form.on_input("phone_number")} onblur={form.on_blur("phone_number")} />
                        </div>
                        <Input label="Work email" name="email" input_type="email" placeholder="you@company.com" is_required=true
                            value={form.value("email")} error={form.error("email")}
                            oninput={form.on_input("email")} onblur={form.on_blur("email")} />

                        <PlanPicker form={form.clone()} />

                        <ActionButton button_type="submit" width={ButtonWidth::Full}>
                            {"Continue"}
                        </ActionButton>
                    </form>
                }
            </div>
        </div>
    }
}
