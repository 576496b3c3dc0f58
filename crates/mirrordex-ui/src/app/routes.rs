//! Routing definitions for the Mirrordex UI.
use yew_router::prelude::*;

/// Navigable locations. Category/distro segments are emitted
/// whitespace-stripped by the views that build links.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/:category")]
    Category { category: String },
    #[at("/:category/:distro")]
    Distro { category: String, distro: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
