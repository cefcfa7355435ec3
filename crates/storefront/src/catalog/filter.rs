//! Pure filtering and ordering for product listings.
//!
//! [`filter_and_sort`] narrows a product collection by category, free-text
//! query, and price range (all three predicates AND-ed), then orders the
//! result by the requested sort key. The function is pure: it never
//! mutates its input and the same parameters always produce the same
//! output. Callers coalescing rapid input changes (debouncing) do so at
//! the presentation layer; it does not affect the result here.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Product;

/// Sentinel category meaning "no category filtering".
pub const ALL_CATEGORIES: &str = "All";

/// Ordering applied after filtering.
///
/// The price keys are true stable sorts. `Featured`, `Newest`, and
/// `Bestselling` are stable partitions: products with the matching flag
/// move to the front, both groups keeping their original relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Newest,
    Bestselling,
}

impl SortOption {
    /// All options, in the order the sort menu lists them.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Newest,
        Self::Bestselling,
    ];

    /// The kebab-case name used in menus and query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
            Self::Bestselling => "bestselling",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a sort option name.
#[derive(Debug, Error)]
#[error("unknown sort option: {0} (expected one of featured, price-low, price-high, newest, bestselling)")]
pub struct ParseSortOptionError(String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSortOptionError(s.to_string()))
    }
}

/// Filter and sort parameters for a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Exact case-insensitive category match, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Case-insensitive substring matched against name, description,
    /// artisan name, and tags. Empty matches everything.
    pub search_query: String,
    /// Inclusive `[min, max]` price bounds.
    pub price_range: (Decimal, Decimal),
    pub sort: SortOption,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
            price_range: (Decimal::ZERO, Decimal::MAX),
            sort: SortOption::default(),
        }
    }
}

impl FilterParams {
    fn matches_category(&self, product: &Product) -> bool {
        self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
            || product.category.eq_ignore_ascii_case(&self.category)
    }

    fn matches_query(&self, product: &Product) -> bool {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
            || product.artisan.name.to_lowercase().contains(&query)
            || product
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    fn matches_price(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        let price = product.price.amount();
        min <= price && price <= max
    }

    fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_query(product) && self.matches_price(product)
    }
}

/// Narrow and order a product collection for display.
///
/// Returns references into `products` in display order; the source slice
/// is never mutated.
#[must_use]
pub fn filter_and_sort<'a>(products: &'a [Product], params: &FilterParams) -> Vec<&'a Product> {
    let mut matched: Vec<&Product> = products.iter().filter(|p| params.matches(p)).collect();

    match params.sort {
        // Vec::sort_by is stable, so price ties keep catalog order
        SortOption::PriceLow => {
            matched.sort_by(|a, b| a.price.amount().cmp(&b.price.amount()));
        }
        SortOption::PriceHigh => {
            matched.sort_by(|a, b| b.price.amount().cmp(&a.price.amount()));
        }
        SortOption::Featured => matched = stable_partition(matched, |p| p.featured),
        SortOption::Newest => matched = stable_partition(matched, |p| p.new_arrival),
        SortOption::Bestselling => matched = stable_partition(matched, |p| p.bestseller),
    }

    matched
}

/// Move products matching `flag` to the front, preserving the relative
/// order inside both groups.
fn stable_partition<'a, F>(products: Vec<&'a Product>, flag: F) -> Vec<&'a Product>
where
    F: Fn(&Product) -> bool,
{
    let (mut front, back): (Vec<&Product>, Vec<&Product>) =
        products.into_iter().partition(|p| flag(p));
    front.extend(back);
    front
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cratify_core::{ArtisanId, Price, ProductId};

    use super::super::Artisan;
    use super::*;

    fn product(id: &str, name: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            artisan: Artisan {
                id: ArtisanId::new("artisan1"),
                name: "Clayworks Studio".to_string(),
                bio: None,
                image: None,
            },
            category: category.to_string(),
            tags: Vec::new(),
            featured: false,
            new_arrival: false,
            bestseller: false,
            stock: 10,
            rating: None,
            num_reviews: None,
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_all_sentinel_matches_every_category() {
        let products = vec![
            product("1", "Mug", 2800, "Home Decor"),
            product("2", "Earrings", 4200, "Jewelry"),
        ];
        let params = FilterParams::default();
        assert_eq!(filter_and_sort(&products, &params).len(), 2);
    }

    #[test]
    fn test_category_match_is_exact_and_case_insensitive() {
        let products = vec![
            product("1", "Mug", 2800, "Home Decor"),
            product("2", "Earrings", 4200, "Jewelry"),
        ];
        let params = FilterParams {
            category: "jewelry".to_string(),
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["2"]);

        // Substring of a category is not a match
        let params = FilterParams {
            category: "Jewel".to_string(),
            ..FilterParams::default()
        };
        assert!(filter_and_sort(&products, &params).is_empty());
    }

    #[test]
    fn test_query_matches_any_of_four_fields() {
        let mut by_name = product("1", "Ceramic Mug", 2800, "Home Decor");
        by_name.description = "for coffee".to_string();

        let mut by_description = product("2", "Wall Hanging", 6500, "Home Decor");
        by_description.description = "hand-knotted ceramic accents".to_string();

        let by_artisan = product("3", "Earrings", 4200, "Jewelry");
        // artisan name "Clayworks Studio" from the fixture

        let mut by_tag = product("4", "Candle", 2400, "Home Decor");
        by_tag.tags = vec!["ceramic".to_string()];

        let no_match = product("5", "Scarf", 4800, "Apparel");

        let products = vec![by_name, by_description, by_artisan, by_tag, no_match];

        let params = FilterParams {
            search_query: "CERAMIC".to_string(),
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["1", "2", "4"]);

        let params = FilterParams {
            search_query: "clayworks".to_string(),
            ..FilterParams::default()
        };
        // Every fixture shares the artisan, so all five match
        assert_eq!(filter_and_sort(&products, &params).len(), 5);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let products = vec![product("1", "Mug", 2800, "Home Decor")];
        let params = FilterParams {
            search_query: "   ".to_string(),
            ..FilterParams::default()
        };
        assert_eq!(filter_and_sort(&products, &params).len(), 1);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let products = vec![
            product("1", "Cards", 1850, "Stationery"),
            product("2", "Mug", 2800, "Home Decor"),
            product("3", "Hanging", 6500, "Home Decor"),
        ];
        let params = FilterParams {
            price_range: (Decimal::new(1850, 2), Decimal::new(2800, 2)),
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["1", "2"]);
    }

    #[test]
    fn test_predicates_are_a_conjunction() {
        let products = vec![
            product("1", "Silver Mug", 2800, "Home Decor"),
            product("2", "Silver Earrings", 4200, "Jewelry"),
            product("3", "Silver Ring", 9000, "Jewelry"),
        ];
        let params = FilterParams {
            category: "Jewelry".to_string(),
            search_query: "silver".to_string(),
            price_range: (Decimal::ZERO, Decimal::from(50)),
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["2"]);
    }

    #[test]
    fn test_price_low_sorts_ascending() {
        // Input order 65, 28, 42 -> 28, 42, 65
        let products = vec![
            product("a", "Hanging", 6500, "Home Decor"),
            product("b", "Mug", 2800, "Home Decor"),
            product("c", "Earrings", 4200, "Jewelry"),
        ];
        let params = FilterParams {
            sort: SortOption::PriceLow,
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["b", "c", "a"]);
    }

    #[test]
    fn test_price_sort_ties_keep_input_order() {
        let products = vec![
            product("a", "Mug", 2800, "Home Decor"),
            product("b", "Candle", 2400, "Home Decor"),
            product("c", "Second Mug", 2800, "Home Decor"),
        ];
        let params = FilterParams {
            sort: SortOption::PriceLow,
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["b", "a", "c"]);

        let params = FilterParams {
            sort: SortOption::PriceHigh,
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["a", "c", "b"]);
    }

    #[test]
    fn test_featured_is_a_stable_partition_not_a_sort() {
        let mut a = product("a", "Mug", 2800, "Home Decor");
        let mut b = product("b", "Hanging", 6500, "Home Decor");
        let c = product("c", "Candle", 2400, "Home Decor");
        let mut d = product("d", "Earrings", 4200, "Jewelry");
        a.featured = false;
        b.featured = true;
        d.featured = true;

        let products = vec![a, b, c, d];
        let params = FilterParams {
            sort: SortOption::Featured,
            ..FilterParams::default()
        };
        // Flagged products first in original order, then the rest in
        // original order
        assert_eq!(
            ids(&filter_and_sort(&products, &params)),
            ["b", "d", "a", "c"]
        );
    }

    #[test]
    fn test_newest_and_bestselling_partition_on_their_flags() {
        let mut a = product("a", "Cards", 1850, "Stationery");
        let mut b = product("b", "Journal", 3200, "Stationery");
        a.new_arrival = true;
        b.bestseller = true;
        let products = vec![product("z", "Mug", 2800, "Home Decor"), a, b];

        let params = FilterParams {
            sort: SortOption::Newest,
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["a", "z", "b"]);

        let params = FilterParams {
            sort: SortOption::Bestselling,
            ..FilterParams::default()
        };
        assert_eq!(ids(&filter_and_sort(&products, &params)), ["b", "z", "a"]);
    }

    #[test]
    fn test_source_slice_is_untouched() {
        let products = vec![
            product("a", "Hanging", 6500, "Home Decor"),
            product("b", "Mug", 2800, "Home Decor"),
        ];
        let before = products.clone();
        let params = FilterParams {
            sort: SortOption::PriceLow,
            ..FilterParams::default()
        };
        let _ = filter_and_sort(&products, &params);
        assert_eq!(products, before);
    }

    #[test]
    fn test_sort_option_parse_and_display() {
        assert_eq!("price-low".parse::<SortOption>().unwrap(), SortOption::PriceLow);
        assert_eq!("FEATURED".parse::<SortOption>().unwrap(), SortOption::Featured);
        assert!("price".parse::<SortOption>().is_err());
        assert_eq!(SortOption::Bestselling.to_string(), "bestselling");
    }
}
