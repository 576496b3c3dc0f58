use crate::components::atoms::icons::IconGlobe;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub locale_selector: Html,
    pub title: String,
    pub tagline: String,
}

/// Top bar with brand and locale selector, wrapping the routed content.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    html! {
        <div class="app-shell">
            <header class="topbar">
                <div class="brand">
                    <IconGlobe class="brand-mark" />
                    <strong>{&props.title}</strong>
                    <span class="muted">{&props.tagline}</span>
                </div>
                <div class="locale-toggle">{props.locale_selector.clone()}</div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}
