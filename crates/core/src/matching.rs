//! Lexical matching between spoken item names and catalog titles.
//!
//! Both sides are reduced to sets of lower-cased `[a-z0-9]+` runs with simple
//! English plurals folded, and scored by the size of the intersection.

use std::collections::BTreeSet;

use crate::domain::product::Product;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

pub fn token_set(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|character: char| !(character.is_ascii_lowercase() || character.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .map(fold_plural)
        .collect()
}

pub fn token_overlap_score(left: &str, right: &str) -> usize {
    let left = token_set(left);
    let right = token_set(right);
    left.intersection(&right).count()
}

/// Highest-scoring product in catalog order. Ties keep the earlier product and
/// a zero score is never a match.
pub fn best_match<'a>(products: &'a [Product], query: &str) -> Option<&'a Product> {
    let query_tokens = token_set(query);
    let mut best: Option<(&Product, usize)> = None;

    for product in products {
        let score = token_set(&product.title).intersection(&query_tokens).count();
        let best_score = best.map(|(_, score)| score).unwrap_or(0);
        if score > best_score {
            best = Some((product, score));
        }
    }

    best.map(|(product, _)| product)
}

/// Titles containing `item` as a case-insensitive substring, or the first
/// `limit` titles of the catalog when nothing contains it.
pub fn suggest_titles(products: &[Product], item: &str, limit: usize) -> Vec<String> {
    let needle = item.to_lowercase();
    let suggestions = products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .map(|product| product.title.clone())
        .collect::<Vec<_>>();

    if !suggestions.is_empty() {
        return suggestions;
    }

    products.iter().take(limit).map(|product| product.title.clone()).collect()
}

fn fold_plural(token: &str) -> String {
    let length = token.len();
    if length <= 3 || token.ends_with("ss") || !token.ends_with('s') {
        return token.to_string();
    }

    if length > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..length - 3]);
    }

    let sibilant = ["ches", "shes", "xes", "zes", "sses"];
    if sibilant.iter().any(|suffix| token.ends_with(suffix)) {
        return token[..length - 2].to_string();
    }

    if length > 5 && token.ends_with("oes") {
        return token[..length - 2].to_string();
    }

    token[..length - 1].to_string()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{Product, ProductId};

    use super::{best_match, fold_plural, suggest_titles, token_overlap_score, token_set};

    fn product(id: i64, title: &str) -> Product {
        Product { id: ProductId::Numeric(id), title: title.to_string(), price: Decimal::ONE }
    }

    #[test]
    fn tokens_are_lowercased_alphanumeric_runs() {
        let tokens = token_set("Organic MILK, 2L (Full-Cream)");
        let expected = ["organic", "milk", "2l", "full", "cream"];
        assert_eq!(tokens.len(), expected.len());
        for token in expected {
            assert!(tokens.contains(token), "missing token {token}");
        }
    }

    #[test]
    fn plurals_fold_to_their_singular() {
        assert_eq!(fold_plural("apples"), "apple");
        assert_eq!(fold_plural("berries"), "berry");
        assert_eq!(fold_plural("boxes"), "box");
        assert_eq!(fold_plural("peaches"), "peach");
        assert_eq!(fold_plural("tomatoes"), "tomato");
        assert_eq!(fold_plural("shoes"), "shoe");
        assert_eq!(fold_plural("glass"), "glass");
        assert_eq!(fold_plural("bus"), "bus");
        assert_eq!(fold_plural("rice"), "rice");
    }

    #[test]
    fn overlap_counts_shared_tokens_once() {
        assert_eq!(token_overlap_score("Red Apple", "apple apple red"), 2);
        assert_eq!(token_overlap_score("Red Apple", "apples"), 1);
        assert_eq!(token_overlap_score("Red Apple", "banana"), 0);
        assert_eq!(token_overlap_score("", ""), 0);
    }

    #[test]
    fn best_match_prefers_highest_score() {
        let products = vec![product(1, "Green Apple"), product(2, "Red Apple Juice")];
        let matched = best_match(&products, "red apple juice").expect("match");
        assert_eq!(matched.id, ProductId::Numeric(2));
    }

    #[test]
    fn best_match_ties_keep_earliest_product() {
        let products = vec![product(1, "Red Apple"), product(2, "Green Apple")];
        let matched = best_match(&products, "apple").expect("match");
        assert_eq!(matched.id, ProductId::Numeric(1));
    }

    #[test]
    fn zero_overlap_is_no_match() {
        let products = vec![product(1, "Red Apple"), product(2, "Milk")];
        assert!(best_match(&products, "bread").is_none());
        assert!(best_match(&[], "milk").is_none());
    }

    #[test]
    fn suggestions_filter_by_substring() {
        let products =
            vec![product(1, "Red Apple"), product(2, "Apple Juice"), product(3, "Whole Milk")];
        assert_eq!(
            suggest_titles(&products, "APPLE", 10),
            vec!["Red Apple".to_string(), "Apple Juice".to_string()]
        );
    }

    #[test]
    fn suggestions_fall_back_to_leading_catalog_titles() {
        let products = (1..=12).map(|id| product(id, &format!("Item {id}"))).collect::<Vec<_>>();
        let suggestions = suggest_titles(&products, "spaceship", 10);
        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0], "Item 1");
        assert_eq!(suggestions[9], "Item 10");
    }
}
