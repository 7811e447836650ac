use log::warn;
use stylist::Style;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const OUTLINE_TEXT: &str = "#414651";
const OUTLINE_BORDER: &str = "#D5D7DA";

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ButtonWidth {
    #[default]
    Auto,
    Full,
    Fit,
}

/// Color and sizing knobs that end up in the generated class.
#[derive(Clone, PartialEq, Debug)]
pub struct ButtonLook {
    pub outline: bool,
    pub borderless: bool,
    pub width: ButtonWidth,
    pub text_color: String,
    pub background_color: String,
    pub outline_bg_color: Option<String>,
    pub border_color: Option<String>,
}

impl Default for ButtonLook {
    fn default() -> Self {
        Self {
            outline: false,
            borderless: false,
            width: ButtonWidth::Auto,
            text_color: "#ffffff".to_string(),
            background_color: "#F89822".to_string(),
            outline_bg_color: None,
            border_color: None,
        }
    }
}

impl ButtonLook {
    fn is_flat(&self) -> bool {
        self.outline || self.borderless
    }

    pub fn width(&self) -> Option<&'static str> {
        match self.width {
            ButtonWidth::Auto => None,
            ButtonWidth::Full => Some("100%"),
            ButtonWidth::Fit => Some("fit-content"),
        }
    }

    pub fn background(&self) -> &str {
        if self.is_flat() {
            self.outline_bg_color.as_deref().unwrap_or("transparent")
        } else {
            &self.background_color
        }
    }

    /// Also used for the loading spinner.
    pub fn color(&self) -> &str {
        if self.is_flat() {
            OUTLINE_TEXT
        } else {
            &self.text_color
        }
    }

    pub fn border(&self) -> &str {
        match &self.border_color {
            Some(color) => color,
            None if self.outline && !self.borderless => OUTLINE_BORDER,
            None => "transparent",
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!(
            "background-color: {}; color: {}; border: {} solid {};",
            self.background(),
            self.color(),
            if self.borderless { "0" } else { "1px" },
            self.border(),
        );
        if let Some(width) = self.width() {
            css.push_str(&format!(" width: {};", width));
        }
        css
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub borderless: bool,
    #[prop_or_default]
    pub width: ButtonWidth,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub fully_rounded: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub small: bool,
    #[prop_or(AttrValue::Static("#ffffff"))]
    pub text_color: AttrValue,
    #[prop_or(AttrValue::Static("#F89822"))]
    pub background_color: AttrValue,
    #[prop_or_default]
    pub outline_bg_color: Option<AttrValue>,
    #[prop_or_default]
    pub border_color: Option<AttrValue>,
    /// In-app destination.
    #[prop_or_default]
    pub route: Option<Route>,
    /// Anything outside the router, including other sites.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(AttrValue::Static("_self"))]
    pub target: AttrValue,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

impl From<&ActionButtonProps> for ButtonLook {
    fn from(props: &ActionButtonProps) -> Self {
        Self {
            outline: props.outline,
            borderless: props.borderless,
            width: props.width,
            text_color: props.text_color.to_string(),
            background_color: props.background_color.to_string(),
            outline_bg_color: props.outline_bg_color.as_ref().map(ToString::to_string),
            border_color: props.border_color.as_ref().map(ToString::to_string),
        }
    }
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let look = ButtonLook::from(props);
    let style = match Style::new(look.to_css()) {
        Ok(style) => Some(style),
        Err(e) => {
            warn!("Invalid button style: {}", e);
            None
        }
    };

    let classes = classes!(
        "action-button",
        style,
        props.small.then_some("action-button--small"),
        if props.fully_rounded { "rounded-full" } else { "rounded" },
        props.loading.then_some("loading"),
    );

    let content = html! {
        <span class="action-button__content">
            { for props.children.iter() }
            if props.loading {
                <span
                    class="action-button__spinner"
                    style={format!("border-top-color: {};", look.color())}
                ></span>
            }
        </span>
    };

    if let Some(route) = props.route.clone() {
        html! {
            <Link<Route> to={route} classes={classes}>
                { content }
            </Link<Route>>
        }
    } else if let Some(href) = props.href.clone() {
        html! {
            <a href={href} target={props.target.clone()} class={classes}>
                { content }
            </a>
        }
    } else {
        html! {
            <button
                type={props.button_type.clone()}
                class={classes}
                disabled={props.disabled || props.loading}
                onclick={props.onclick.clone()}
            >
                { content }
            </button>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_button_uses_brand_colors() {
        let look = ButtonLook::default();
        assert_eq!(look.background(), "#F89822");
        assert_eq!(look.color(), "#ffffff");
        assert_eq!(look.border(), "transparent");
        assert_eq!(look.width(), None);
    }

    #[test]
    fn outline_button_is_transparent_with_grey_border() {
        let look = ButtonLook {
            outline: true,
            width: ButtonWidth::Fit,
            ..ButtonLook::default()
        };
        assert_eq!(look.background(), "transparent");
        assert_eq!(look.color(), OUTLINE_TEXT);
        assert_eq!(look.border(), OUTLINE_BORDER);
        assert!(look.to_css().ends_with("width: fit-content;"));
    }

    #[test]
    fn borderless_wins_over_outline_border() {
        let look = ButtonLook {
            outline: true,
            borderless: true,
            outline_bg_color: Some("#ffffff".to_string()),
            ..ButtonLook::default()
        };
        assert_eq!(look.background(), "#ffffff");
        assert_eq!(look.border(), "transparent");
        assert!(look.to_css().contains("border: 0 solid transparent;"));
    }

    #[test]
    fn explicit_border_color_is_kept() {
        let look = ButtonLook {
            border_color: Some("#D5D7DA".to_string()),
            width: ButtonWidth::Full,
            ..ButtonLook::default()
        };
        assert_eq!(look.border(), "#D5D7DA");
        assert_eq!(look.width(), Some("100%"));
    }
}
