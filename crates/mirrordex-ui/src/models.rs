//! Mirror directory data model, supplied fully formed by the listing loader.

use serde::Deserialize;

/// A mirror host, identified by its abbreviation.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Site {
    /// Short identifier used as the grouping label in the URL list.
    pub abbr: String,
}

/// One downloadable link offered by a site.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct UrlEntry {
    /// Display label for the link.
    pub name: String,
    /// Target address.
    pub url: String,
}

/// One category+distro grouping of links offered by a site.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Info {
    /// Top-level grouping such as operating systems, applications, fonts.
    pub category: String,
    /// Distribution or package name within the category.
    pub distro: String,
    /// Download links, in listing order.
    pub urls: Vec<UrlEntry>,
}

/// A site together with everything it mirrors.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct SiteListing {
    /// The mirror host.
    pub site: Site,
    /// Its category+distro groupings, in listing order.
    pub info: Vec<Info>,
}

/// The full dataset, in loader order.
pub type IsoInfo = Vec<SiteListing>;

/// Parse the listing bundled with the app.
///
/// # Errors
/// Returns the underlying `serde_json` error when the embedded JSON is
/// malformed.
pub fn bundled_listing() -> Result<IsoInfo, serde_json::Error> {
    serde_json::from_str(include_str!("../data/mirrors.json"))
}
