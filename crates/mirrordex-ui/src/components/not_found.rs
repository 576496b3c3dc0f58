use crate::app::Route;
use crate::components::atoms::icons::IconNotFound;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Full-page fallback for an unknown category or an unmatched deep route.
#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="placeholder not-found">
            <IconNotFound class="logo" />
            <h2>{bundle.text("not_found.title", "Page not found")}</h2>
            <p class="muted">{bundle.text("not_found.body", "That category is not part of this directory.")}</p>
            <Link<Route> to={Route::Home} classes={classes!("home-link")}>
                {bundle.text("not_found.home", "Back to the directory")}
            </Link<Route>>
        </div>
    }
}
