//! Sorting and filtering for the expert opinion listing.
//!
//! The view handed to the grid is always a permutation of the loaded records:
//! sorting reorders, and the region/country/sector filters are collected for
//! the badge but do not narrow anything yet (records carry no location or
//! sector data to match against).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sentinel value shown in every filter select.
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionRecord {
    pub id: i32,
    pub name: String,
    pub title: String,
    /// May contain markup; run it through `sanitize::clean_html_content` before display.
    pub opinion: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    RecentlyAdded,
    Oldest,
    Alphabetical,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::RecentlyAdded,
        SortKey::Oldest,
        SortKey::Alphabetical,
        SortKey::Name,
    ];

    /// Lenient parse of a select value. Anything unrecognised keeps source order.
    pub fn parse(value: &str) -> SortKey {
        match value.trim() {
            "recently-added" => SortKey::RecentlyAdded,
            "oldest" => SortKey::Oldest,
            "alphabetical" => SortKey::Alphabetical,
            "name" => SortKey::Name,
            _ => SortKey::RecentlyAdded,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::RecentlyAdded => "recently-added",
            SortKey::Oldest => "oldest",
            SortKey::Alphabetical => "alphabetical",
            SortKey::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::RecentlyAdded => "Recently added",
            SortKey::Oldest => "Oldest",
            SortKey::Alphabetical => "Alphabetical",
            SortKey::Name => "Name",
        }
    }
}

/// Region, country and sector picks. `None` means "All".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub region: Option<String>,
    pub country: Option<String>,
    pub sector: Option<String>,
}

fn from_select(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

impl FilterSelection {
    pub fn with_region(mut self, value: &str) -> Self {
        self.region = from_select(value);
        self
    }

    pub fn with_country(mut self, value: &str) -> Self {
        self.country = from_select(value);
        self
    }

    pub fn with_sector(mut self, value: &str) -> Self {
        self.sector = from_select(value);
        self
    }

    /// Number of fields set to something other than "All". Drives the badge.
    pub fn active_count(&self) -> usize {
        [&self.region, &self.country, &self.sector]
            .iter()
            .filter(|value| value.is_some())
            .count()
    }

    /// Resets every field to "All". Clearing twice is a no-op.
    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    pub fn region_value(&self) -> &str {
        self.region.as_deref().unwrap_or(ALL)
    }

    pub fn country_value(&self) -> &str {
        self.country.as_deref().unwrap_or(ALL)
    }

    pub fn sector_value(&self) -> &str {
        self.sector.as_deref().unwrap_or(ALL)
    }

    // Opinion records have no region, country or sector yet, so every
    // selection lets every record through.
    fn admits(&self, _record: &OpinionRecord) -> bool {
        true
    }
}

/// Orders `source` by `sort` without touching the source slice.
pub fn compute_view(source: &[OpinionRecord], sort: SortKey) -> Vec<OpinionRecord> {
    let mut view = source.to_vec();
    match sort {
        SortKey::RecentlyAdded => {}
        SortKey::Oldest => view.reverse(),
        // sort_by is stable, equal keys keep their source order
        SortKey::Alphabetical => view.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortKey::Name => view.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
    }
    view
}

/// Full pipeline used by the listing page: filters, then sort.
pub fn filtered_view(
    source: &[OpinionRecord],
    filters: &FilterSelection,
    sort: SortKey,
) -> Vec<OpinionRecord> {
    let admitted: Vec<OpinionRecord> = source
        .iter()
        .filter(|record| filters.admits(record))
        .cloned()
        .collect();
    compute_view(&admitted, sort)
}

/// Case- and accent-insensitive comparison, falling back to a case-aware
/// and finally a raw comparison so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = fold(a).cmp(&fold(b));
    if primary != Ordering::Equal {
        return primary;
    }
    let secondary = a.to_lowercase().cmp(&b.to_lowercase());
    if secondary != Ordering::Equal {
        return secondary;
    }
    // lowercase before uppercase, like most UI collations
    b.cmp(a)
}

fn fold(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, name: &str, title: &str) -> OpinionRecord {
        OpinionRecord {
            id,
            name: name.to_string(),
            title: title.to_string(),
            opinion: String::new(),
            image: String::new(),
        }
    }

    fn ids(view: &[OpinionRecord]) -> Vec<i32> {
        view.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<OpinionRecord> {
        vec![
            record(1, "Kwame Mensah", "Sustainable Infrastructure"),
            record(2, "aisha Diallo", "Urban Planning"),
            record(3, "Fatima Hassan", "digital Transformation"),
            record(4, "John Mwangi", "Public-Private Partnerships"),
            record(5, "Élodie Okafor", "Digital Transformation"),
        ]
    }

    #[test]
    fn recently_added_keeps_source_order() {
        let source = sample();
        assert_eq!(compute_view(&source, SortKey::RecentlyAdded), source);
    }

    #[test]
    fn oldest_reverses_source() {
        let source = sample();
        assert_eq!(ids(&compute_view(&source, SortKey::Oldest)), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn alphabetical_sorts_titles_ignoring_case() {
        let source = vec![record(1, "A", "Zeta"), record(2, "B", "Alpha")];
        assert_eq!(ids(&compute_view(&source, SortKey::Alphabetical)), vec![2, 1]);

        let view = compute_view(&sample(), SortKey::Alphabetical);
        assert_eq!(ids(&view), vec![3, 5, 4, 1, 2]);
        for pair in view.windows(2) {
            assert_ne!(locale_cmp(&pair[0].title, &pair[1].title), Ordering::Greater);
        }
    }

    #[test]
    fn alphabetical_is_idempotent() {
        let once = compute_view(&sample(), SortKey::Alphabetical);
        let twice = compute_view(&once, SortKey::Alphabetical);
        assert_eq!(once, twice);
    }

    #[test]
    fn name_sort_folds_accents() {
        let view = compute_view(&sample(), SortKey::Name);
        assert_eq!(ids(&view), vec![2, 5, 3, 4, 1]);
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let source = vec![
            record(7, "Same", "x"),
            record(3, "Same", "y"),
            record(9, "Same", "z"),
        ];
        assert_eq!(ids(&compute_view(&source, SortKey::Name)), vec![7, 3, 9]);
    }

    #[test]
    fn every_sort_is_a_permutation() {
        let source = sample();
        for sort in SortKey::ALL {
            let mut got = ids(&compute_view(&source, sort));
            got.sort();
            assert_eq!(got, vec![1, 2, 3, 4, 5], "{:?}", sort);
        }
    }

    #[test]
    fn empty_source_gives_empty_view() {
        for sort in SortKey::ALL {
            assert!(compute_view(&[], sort).is_empty());
        }
    }

    #[test]
    fn unknown_sort_value_falls_back_to_source_order() {
        assert_eq!(SortKey::parse("most-popular"), SortKey::RecentlyAdded);
        assert_eq!(SortKey::parse(""), SortKey::RecentlyAdded);
        for sort in SortKey::ALL {
            assert_eq!(SortKey::parse(sort.as_str()), sort);
        }
    }

    #[test]
    fn filters_do_not_narrow_the_view() {
        let filters = FilterSelection::default()
            .with_region("West Africa")
            .with_country("Nigeria")
            .with_sector("Energy");
        let source = sample();
        assert_eq!(filtered_view(&source, &filters, SortKey::RecentlyAdded), source);
    }

    #[test]
    fn active_count_tracks_non_all_fields() {
        let mut filters = FilterSelection::default();
        assert_eq!(filters.active_count(), 0);

        filters = filters.with_region("East Africa");
        assert_eq!(filters.active_count(), 1);
        filters = filters.with_sector("Housing");
        assert_eq!(filters.active_count(), 2);
        filters = filters.with_country(ALL);
        assert_eq!(filters.active_count(), 2);
        filters = filters.with_country("Kenya");
        assert_eq!(filters.active_count(), 3);
        assert_eq!(filters.country_value(), "Kenya");
    }

    #[test]
    fn clear_resets_and_is_idempotent() {
        let mut filters = FilterSelection::default()
            .with_region("North Africa")
            .with_country("Egypt");
        filters.clear();
        assert_eq!(filters, FilterSelection::default());
        assert_eq!(filters.region_value(), ALL);
        filters.clear();
        assert_eq!(filters.active_count(), 0);
    }
}
