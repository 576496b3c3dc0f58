//! Grouped download-link list for a resolved category/distro pair.

use crate::components::atoms::EmptyState;
use crate::components::atoms::icons::IconDownload;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::logic::matching_groups;
use crate::models::IsoInfo;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct UrlListProps {
    pub isoinfo: Rc<IsoInfo>,
    pub category: AttrValue,
    pub distro: AttrValue,
}

#[function_component(UrlList)]
pub(crate) fn url_list(props: &UrlListProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let groups = matching_groups(&props.isoinfo, &props.category, &props.distro);

    if groups.is_empty() {
        let category = props.category.as_str();
        let phrase = if category == "os" {
            bundle.text("iso.os_norm", "operating system")
        } else {
            bundle.text(&format!("iso.{category}"), category)
        };
        let message = bundle.text_with(
            "iso.prompt",
            "No {category} downloads match this selection yet.",
            &[("category", &phrase)],
        );
        // The icon only accompanies a concrete distro request, not a bare
        // category listing.
        return html! {
            <EmptyState message={message} show_icon={!props.distro.is_empty()} />
        };
    }

    groups
        .into_iter()
        .map(|group| {
            html! {
                <div class="site" key={group.site.abbr.clone()}>
                    <h3>{&group.site.abbr}</h3>
                    { for group.entries.iter().map(|info| html! {
                        <ul>
                            { for info.urls.iter().map(|entry| html! {
                                <li>
                                    <a href={entry.url.clone()}>
                                        <IconDownload class="link-mark" />
                                        {&entry.name}
                                    </a>
                                </li>
                            })}
                        </ul>
                    })}
                </div>
            }
        })
        .collect::<Html>()
}
