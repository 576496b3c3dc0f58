use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Crossed-out box mark for missing pages and empty lookups.
#[function_component(IconNotFound)]
pub(crate) fn icon_not_found(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M4 4h16v16H4z" />
            <path d="M8 8l8 8M16 8l-8 8" />
        </> },
    )
}

/// Globe brand mark for the shell header.
#[function_component(IconGlobe)]
pub(crate) fn icon_globe(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M21.54 15H17a2 2 0 0 0-2 2v4.54M7 3.34V5a3 3 0 0 0 3 3a2 2 0 0 1 2 2c0 1.1.9 2 2 2a2 2 0 0 0 2-2c0-1.1.9-2 2-2h3.17M11 21.95V18a2 2 0 0 0-2-2a2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05" />
            <circle cx="12" cy="12" r="10" />
        </> },
    )
}

/// Download arrow shown next to mirror links.
#[function_component(IconDownload)]
pub(crate) fn icon_download(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M12 15V3m9 12v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <path d="m7 10l5 5l5-5" />
        </> },
    )
}
