//! Pure derivation logic for the directory views, testable off-wasm.
//!
//! Category and distro strings are compared with all whitespace removed;
//! the raw strings are kept for display.

use crate::models::{Info, IsoInfo, Site};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Remove every whitespace character from a category or distro string.
#[must_use]
pub fn strip_ws(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Resolve the effective category/distro from optional route parameters.
///
/// The `"ubuntu"` default applies only at the bare root path; a category-only
/// path resolves to an empty distro.
#[must_use]
pub fn resolve_route(category: Option<&str>, distro: Option<&str>) -> (String, String) {
    let had_category = category.is_some();
    let category = category.unwrap_or("os").to_string();
    let distro = distro.map_or_else(
        || {
            if had_category {
                String::new()
            } else {
                "ubuntu".to_string()
            }
        },
        str::to_string,
    );
    (category, distro)
}

/// Derived category and distro lookups for one dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    categories: Vec<String>,
    distro_categories: Vec<(String, String)>,
}

impl CatalogIndex {
    /// Walk the dataset once in site-then-info order and collect the distinct
    /// categories plus a category per distro.
    ///
    /// A distro listed under two categories keeps the earliest mapping.
    /// Consistency across categories is a property of the data, not something
    /// enforced here.
    #[must_use]
    pub fn build(isoinfo: &IsoInfo) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut distro_categories: Vec<(String, String)> = Vec::new();
        for listing in isoinfo {
            for info in &listing.info {
                if !categories.contains(&info.category) {
                    categories.push(info.category.clone());
                }
                if !distro_categories.iter().any(|(d, _)| d == &info.distro) {
                    distro_categories.push((info.distro.clone(), info.category.clone()));
                }
            }
        }
        Self {
            categories,
            distro_categories,
        }
    }

    /// Distinct raw category strings, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether the dataset carried no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Membership test against a whitespace-stripped category key.
    #[must_use]
    pub fn contains_category(&self, stripped: &str) -> bool {
        self.categories.iter().any(|c| strip_ws(c) == stripped)
    }

    /// The category a distro was first listed under, if any.
    #[cfg(test)]
    #[must_use]
    pub fn category_of(&self, distro: &str) -> Option<&str> {
        self.distro_categories
            .iter()
            .find(|(d, _)| d == distro)
            .map(|(_, c)| c.as_str())
    }

    /// Raw `(distro, category)` pairs whose stripped category matches the
    /// given key, ordered case-insensitively by distro.
    #[must_use]
    pub fn distros_in(&self, stripped_category: &str) -> Vec<(&str, &str)> {
        let mut matches: Vec<(&str, &str)> = self
            .distro_categories
            .iter()
            .filter(|(_, c)| strip_ws(c) == stripped_category)
            .map(|(d, c)| (d.as_str(), c.as_str()))
            .collect();
        // Case-insensitive ordering stands in for full locale collation.
        matches.sort_by_key(|(d, _)| d.to_lowercase());
        matches
    }
}

/// Single-entry memo for [`CatalogIndex`], keyed by a hash of the dataset.
#[derive(Debug, Default)]
pub struct IndexCache {
    entry: Option<(u64, Rc<CatalogIndex>)>,
}

impl IndexCache {
    /// Return the cached index when the dataset token is unchanged, otherwise
    /// rebuild and replace it.
    pub fn get_or_build(&mut self, isoinfo: &IsoInfo) -> Rc<CatalogIndex> {
        let token = dataset_token(isoinfo);
        if let Some((cached, index)) = &self.entry {
            if *cached == token {
                return Rc::clone(index);
            }
        }
        let index = Rc::new(CatalogIndex::build(isoinfo));
        self.entry = Some((token, Rc::clone(&index)));
        index
    }
}

fn dataset_token(isoinfo: &IsoInfo) -> u64 {
    let mut hasher = DefaultHasher::new();
    isoinfo.hash(&mut hasher);
    hasher.finish()
}

/// One site's surviving entries for a category/distro request.
#[derive(Debug, PartialEq, Eq)]
pub struct SiteGroup<'a> {
    /// The mirror host the entries belong to.
    pub site: &'a Site,
    /// Entries whose stripped category and distro both matched.
    pub entries: Vec<&'a Info>,
}

/// Filter the dataset down to per-site groups matching the request; sites
/// with no surviving entries are omitted.
#[must_use]
pub fn matching_groups<'a>(
    isoinfo: &'a IsoInfo,
    category: &str,
    distro: &str,
) -> Vec<SiteGroup<'a>> {
    let category = strip_ws(category);
    let distro = strip_ws(distro);
    isoinfo
        .iter()
        .filter_map(|listing| {
            let entries: Vec<&Info> = listing
                .info
                .iter()
                .filter(|info| {
                    strip_ws(&info.category) == category && strip_ws(&info.distro) == distro
                })
                .collect();
            if entries.is_empty() {
                None
            } else {
                Some(SiteGroup {
                    site: &listing.site,
                    entries,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SiteListing, UrlEntry};
    use std::collections::BTreeSet;

    fn url(name: &str, target: &str) -> UrlEntry {
        UrlEntry {
            name: name.to_string(),
            url: target.to_string(),
        }
    }

    fn info(category: &str, distro: &str) -> Info {
        Info {
            category: category.to_string(),
            distro: distro.to_string(),
            urls: vec![url("http", "http://x")],
        }
    }

    fn site(abbr: &str, info: Vec<Info>) -> SiteListing {
        SiteListing {
            site: Site {
                abbr: abbr.to_string(),
            },
            info,
        }
    }

    #[test]
    fn categories_are_distinct_regardless_of_order() {
        let forward = vec![
            site("a", vec![info("os", "ubuntu"), info("app", "blender")]),
            site("b", vec![info("os", "debian")]),
        ];
        let reversed = vec![
            site("b", vec![info("os", "debian")]),
            site("a", vec![info("app", "blender"), info("os", "ubuntu")]),
        ];
        let collect = |listing: &IsoInfo| -> BTreeSet<String> {
            CatalogIndex::build(listing)
                .categories()
                .iter()
                .cloned()
                .collect()
        };
        assert_eq!(collect(&forward), collect(&reversed));
        assert_eq!(collect(&forward).len(), 2);
    }

    #[test]
    fn duplicate_distro_keeps_earliest_category() {
        let listing = vec![
            site("a", vec![info("os", "ubuntu")]),
            site("b", vec![info("app", "ubuntu")]),
        ];
        let index = CatalogIndex::build(&listing);
        assert_eq!(index.category_of("ubuntu"), Some("os"));
        assert!(index.distros_in("os").iter().any(|(d, _)| *d == "ubuntu"));
        assert!(index.distros_in("app").is_empty());
    }

    #[test]
    fn whitespace_is_stripped_for_comparisons() {
        assert_eq!(strip_ws("Arch Linux"), "ArchLinux");
        assert_eq!(strip_ws(" os \t"), "os");
        let listing = vec![site("a", vec![info("Arch Linux", "arch")])];
        let index = CatalogIndex::build(&listing);
        assert!(index.contains_category("ArchLinux"));
        assert!(!index.contains_category("Arch Linux"));
    }

    #[test]
    fn root_defaults_to_os_ubuntu() {
        assert_eq!(
            resolve_route(None, None),
            ("os".to_string(), "ubuntu".to_string())
        );
    }

    #[test]
    fn category_only_resolves_to_empty_distro() {
        assert_eq!(
            resolve_route(Some("app"), None),
            ("app".to_string(), String::new())
        );
    }

    #[test]
    fn explicit_params_pass_through() {
        assert_eq!(
            resolve_route(Some("os"), Some("debian")),
            ("os".to_string(), "debian".to_string())
        );
    }

    #[test]
    fn matching_groups_renders_single_site_link() {
        let listing = vec![site("bfsu", vec![info("os", "ubuntu")])];
        let groups = matching_groups(&listing, "os", "ubuntu");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].site.abbr, "bfsu");
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].entries[0].urls[0].name, "http");
        assert_eq!(groups[0].entries[0].urls[0].url, "http://x");
    }

    #[test]
    fn matching_groups_is_whitespace_insensitive() {
        let listing = vec![site("bfsu", vec![info("os", "Arch Linux")])];
        let groups = matching_groups(&listing, " os", "Arch  Linux");
        assert_eq!(groups.len(), 1);
        // Stripping removes whitespace only; case still has to match.
        assert!(matching_groups(&listing, "os", "archlinux").is_empty());
    }

    #[test]
    fn unmatched_distro_yields_no_groups() {
        let listing = vec![site("bfsu", vec![info("os", "ubuntu")])];
        assert!(matching_groups(&listing, "os", "debian").is_empty());
    }

    #[test]
    fn empty_dataset_has_empty_index() {
        let index = CatalogIndex::build(&IsoInfo::new());
        assert!(index.is_empty());
        assert!(!index.contains_category("os"));
    }

    #[test]
    fn unknown_category_with_data_is_a_miss() {
        let listing = vec![site("a", vec![info("os", "ubuntu"), info("app", "blender")])];
        let index = CatalogIndex::build(&listing);
        assert!(!index.is_empty());
        assert!(!index.contains_category("font"));
    }

    #[test]
    fn distros_sort_case_insensitively() {
        let listing = vec![site(
            "a",
            vec![
                info("os", "ubuntu"),
                info("os", "Arch Linux"),
                info("os", "debian"),
            ],
        )];
        let index = CatalogIndex::build(&listing);
        let order: Vec<&str> = index.distros_in("os").iter().map(|(d, _)| *d).collect();
        assert_eq!(order, vec!["Arch Linux", "debian", "ubuntu"]);
    }

    #[test]
    fn cache_reuses_index_until_data_changes() {
        let mut listing = vec![site("a", vec![info("os", "ubuntu")])];
        let mut cache = IndexCache::default();
        let first = cache.get_or_build(&listing);
        let second = cache.get_or_build(&listing);
        assert!(Rc::ptr_eq(&first, &second));

        listing.push(site("b", vec![info("app", "blender")]));
        let third = cache.get_or_build(&listing);
        assert!(!Rc::ptr_eq(&second, &third));
        assert!(third.contains_category("app"));
    }
}
