use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub is_required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub onblur: Option<Callback<()>>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };
    let onblur = props.onblur.clone().map(|onblur| Callback::from(move |_: FocusEvent| onblur.emit(())));

    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <label for={props.name.clone()}>
                {&props.label}
                if props.is_required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={oninput}
                onblur={onblur}
            />
            if let Some(error) = &props.error {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    /// (value, label) pairs.
    pub options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub is_required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub onblur: Option<Callback<()>>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };
    let onblur = props.onblur.clone().map(|onblur| Callback::from(move |_: FocusEvent| onblur.emit(())));

    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <label for={props.name.clone()}>
                {&props.label}
                if props.is_required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            <select id={props.name.clone()} name={props.name.clone()} onchange={onchange} onblur={onblur}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" disabled=true selected={props.value.is_empty()}>{placeholder}</option>
                }
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label}</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}

/// Option list for a `Select` from static pairs.
pub fn options_from(pairs: &[(&'static str, &'static str)]) -> Vec<(AttrValue, AttrValue)> {
    pairs
        .iter()
        .map(|&(value, label)| (AttrValue::Static(value), AttrValue::Static(label)))
        .collect()
}

/// Option list where the label is the value.
pub fn options_same(values: &[&'static str]) -> Vec<(AttrValue, AttrValue)> {
    values
        .iter()
        .map(|&value| (AttrValue::Static(value), AttrValue::Static(value)))
        .collect()
}
