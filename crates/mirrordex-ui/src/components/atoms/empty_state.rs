//! Empty state panel shown when a category/distro lookup matches nothing.

use super::icons::IconNotFound;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: AttrValue,
    /// Show the decorative icon; set when a concrete distro was requested.
    #[prop_or_default]
    pub show_icon: bool,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            {if props.show_icon {
                html! { <IconNotFound class="logo" /> }
            } else {
                html! {}
            }}
            <p class="muted">{props.message.clone()}</p>
        </div>
    }
}
