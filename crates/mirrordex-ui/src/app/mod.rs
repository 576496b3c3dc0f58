use crate::components::browser::MirrorBrowser;
use crate::components::not_found::NotFoundPage;
use crate::components::shell::AppShell;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::models::{self, IsoInfo};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use preferences::{LOCALE_KEY, load_locale};
pub(crate) use routes::Route;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;
mod routes;

#[function_component(MirrordexApp)]
pub(crate) fn mirrordex_app() -> Html {
    let locale = use_state(load_locale);
    let isoinfo: Rc<IsoInfo> = use_memo(|_| load_listing(), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let locale = locale.clone();
        use_effect_with_deps(
            move |locale| {
                LocalStorage::set(LOCALE_KEY, locale.code()).ok();
                apply_direction(TranslationBundle::new(**locale).rtl());
                || ()
            },
            locale.clone(),
        );
    }

    let locale_selector = {
        let locale = locale.clone();
        html! {
            <select value={locale.code().to_string()} onchange={{
                let locale = locale.clone();
                Callback::from(move |e: Event| {
                    let select = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok());
                    if let Some(select) = select {
                        if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                            locale.set(next);
                        }
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                })}
            </select>
        }
    };

    let title = bundle.text("app.title", "Mirrordex");
    let tagline = bundle.text("app.tagline", "Mirror site directory");

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter>
                <AppShell locale_selector={locale_selector} title={title} tagline={tagline}>
                    <Switch<Route> render={{
                        let isoinfo = isoinfo.clone();
                        move |route| match route {
                            Route::Home => html! {
                                <MirrorBrowser isoinfo={Rc::clone(&isoinfo)} />
                            },
                            Route::Category { category } => html! {
                                <MirrorBrowser isoinfo={Rc::clone(&isoinfo)} category={category} />
                            },
                            Route::Distro { category, distro } => html! {
                                <MirrorBrowser
                                    isoinfo={Rc::clone(&isoinfo)}
                                    category={category}
                                    distro={distro}
                                />
                            },
                            Route::NotFound => html! { <NotFoundPage /> },
                        }
                    }} />
                </AppShell>
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

fn apply_direction(is_rtl: bool) {
    if let Some(body) = gloo::utils::document().body() {
        let _ = body.set_attribute("dir", if is_rtl { "rtl" } else { "ltr" });
    }
}

fn load_listing() -> IsoInfo {
    match models::bundled_listing() {
        Ok(listing) => listing,
        Err(err) => {
            console::error!("bundled mirror listing failed to parse:", err.to_string());
            Vec::new()
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MirrordexApp>::with_root(root).render();
    } else {
        yew::Renderer::<MirrordexApp>::new().render();
    }
}
