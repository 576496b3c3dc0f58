//! View controller for the category/distro/URL browsing page.

use crate::app::Route;
use crate::components::not_found::NotFoundPage;
use crate::components::urls::UrlList;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::logic::{IndexCache, resolve_route, strip_ws};
use crate::models::IsoInfo;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct BrowserProps {
    pub isoinfo: Rc<IsoInfo>,
    #[prop_or_default]
    pub category: Option<AttrValue>,
    #[prop_or_default]
    pub distro: Option<AttrValue>,
}

#[function_component(MirrorBrowser)]
pub(crate) fn mirror_browser(props: &BrowserProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let cache = use_mut_ref(IndexCache::default);
    let index = cache.borrow_mut().get_or_build(&props.isoinfo);

    let (category, distro) = resolve_route(props.category.as_deref(), props.distro.as_deref());
    let category_key = strip_ws(&category);
    let distro_key = strip_ws(&distro);

    if !index.contains_category(&category_key) {
        // An empty dataset renders nothing; the listing may still be on its
        // way. With data present an unknown category is a real miss.
        return if index.is_empty() {
            html! {}
        } else {
            html! { <NotFoundPage /> }
        };
    }

    let category_nav = index
        .categories()
        .iter()
        .map(|c| {
            let key = strip_ws(c);
            let classes = classes!(if key == category_key {
                Some("active")
            } else {
                None
            });
            let label = if c == "os" {
                // Curated markup label; see TranslationBundle::markup for the
                // trust contract.
                Html::from_html_unchecked(bundle.markup(&format!("iso.{c}"), c).into())
            } else {
                html! { {bundle.text(&format!("iso.{c}"), c)} }
            };
            html! {
                <Link<Route> to={Route::Category { category: key }} classes={classes}>
                    <h2>{label}</h2>
                </Link<Route>>
            }
        })
        .collect::<Html>();

    let distro_nav = index
        .distros_in(&category_key)
        .into_iter()
        .map(|(d, _)| {
            let key = strip_ws(d);
            let classes = classes!(if key == distro_key {
                Some("active")
            } else {
                None
            });
            html! {
                <Link<Route>
                    to={Route::Distro { category: category_key.clone(), distro: key }}
                    classes={classes}
                >
                    <h3>{d}</h3>
                </Link<Route>>
            }
        })
        .collect::<Html>();

    html! {
        <div class="iso">
            <div class="category">{category_nav}</div>
            <div class="distro-urls-container">
                <div class="distro">{distro_nav}</div>
                <div class="urls">
                    <UrlList
                        isoinfo={Rc::clone(&props.isoinfo)}
                        category={category}
                        distro={distro}
                    />
                </div>
            </div>
        </div>
    }
}
