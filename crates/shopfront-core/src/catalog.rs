//! # Catalog
//!
//! The product catalog store, plus the read-only search projection the
//! storefront renders.
//!
//! Admin edits go through [`crate::validation`]; the catalog never holds an
//! unvalidated product. Cart lines keep their own product snapshots, so
//! editing or deleting a product here does not rewrite existing lines.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::DiscountRate;
use crate::stock::{is_sold_out, remaining_stock};
use crate::types::{Product, ProductDraft, ProductPatch};
use crate::validation::validate_product;

// =============================================================================
// Search Term Source
// =============================================================================

/// Supplies the storefront's current search term (usually a URL parameter).
pub trait SearchTermSource {
    fn current_search_term(&self) -> String;
}

impl SearchTermSource for str {
    fn current_search_term(&self) -> String {
        self.to_string()
    }
}

impl SearchTermSource for String {
    fn current_search_term(&self) -> String {
        self.clone()
    }
}

/// Case-insensitive substring match on name or description.
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&term)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&term))
}

// =============================================================================
// Listing
// =============================================================================

/// A product as shown in the storefront grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub product: Product,
    /// Units still addable given the current cart.
    #[ts(type = "number")]
    pub remaining_stock: i64,
    pub sold_out: bool,
    /// Best tier rate ("up to N% off"), zero without tiers.
    #[ts(type = "number")]
    pub best_rate: DiscountRate,
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered product collection. Serializes as a bare array of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`] but reports a missing product as an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Validates and appends a new product under a generated id.
    pub fn add_product(&mut self, draft: ProductDraft) -> CoreResult<Product> {
        let product = validate_product(generate_product_id(), draft)?;
        self.products.push(product.clone());
        Ok(product)
    }

    /// Applies a partial edit. The patched product is re-validated before it
    /// replaces the stored one.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> CoreResult<Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let draft = patch.apply_to(ProductDraft::from(&*slot));
        let updated = validate_product(id, draft)?;
        *slot = updated.clone();
        Ok(updated)
    }

    /// Re-validates every product and drops the ones that fail, returning
    /// their ids with the reason. Used on data read back from storage.
    pub fn retain_valid(&mut self) -> Vec<(String, ValidationError)> {
        let mut dropped = Vec::new();
        self.products = std::mem::take(&mut self.products)
            .into_iter()
            .filter_map(|product| {
                match validate_product(product.id.clone(), ProductDraft::from(&product)) {
                    Ok(valid) => Some(valid),
                    Err(err) => {
                        dropped.push((product.id, err));
                        None
                    }
                }
            })
            .collect();
        dropped
    }

    /// Deletes a product and returns it.
    pub fn remove_product(&mut self, id: &str) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    /// Products matching the source's current search term.
    pub fn filter<S>(&self, source: &S) -> Vec<&Product>
    where
        S: SearchTermSource + ?Sized,
    {
        let term = source.current_search_term();
        self.products
            .iter()
            .filter(|p| matches_search(p, &term))
            .collect()
    }

    /// Storefront listings for the current search, with stock derived from
    /// `cart`.
    pub fn listings<S>(&self, cart: &Cart, source: &S) -> Vec<ProductListing>
    where
        S: SearchTermSource + ?Sized,
    {
        self.filter(source)
            .into_iter()
            .map(|product| {
                ProductListing {
                    product: product.clone(),
                    remaining_stock: remaining_stock(product, cart),
                    sold_out: is_sold_out(product, cart),
                    best_rate: product.best_tier_rate(),
                }
            })
            .collect()
    }
}

/// New product ids: `p` followed by a v4 UUID without hyphens.
pub fn generate_product_id() -> String {
    format!("p{}", Uuid::new_v4().simple())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartAction;
    use crate::error::ValidationError;
    use crate::money::Money;
    use crate::types::DiscountTierDraft;

    fn draft(name: &str, description: Option<&str>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: 10_000,
            stock: 5,
            description: description.map(str::to_string),
            is_recommended: false,
            discounts: vec![DiscountTierDraft {
                quantity: 10,
                rate: 0.1,
            }],
        }
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog
            .add_product(draft("Blue Notebook", Some("A5 dotted pages")))
            .unwrap();
        catalog
            .add_product(draft("Fountain Pen", Some("Pairs well with a NOTEBOOK")))
            .unwrap();
        catalog.add_product(draft("Desk Lamp", None)).unwrap();
        catalog
    }

    #[test]
    fn test_add_product_generates_id() {
        let mut catalog = Catalog::default();
        let product = catalog.add_product(draft("Pen", None)).unwrap();
        assert!(product.id.starts_with('p'));
        assert_eq!(catalog.get(&product.id), Some(&product));
    }

    #[test]
    fn test_add_product_rejects_invalid_draft() {
        let mut catalog = Catalog::default();
        let result = catalog.add_product(draft("", None));
        assert_eq!(
            result,
            Err(CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            }))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_update_product_applies_patch() {
        let mut catalog = sample_catalog();
        let id = catalog.products()[0].id.clone();

        let updated = catalog
            .update_product(
                &id,
                ProductPatch {
                    price: Some(12_000),
                    stock: Some(30),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, Money::new(12_000));
        assert_eq!(updated.stock, 30);
        assert_eq!(updated.name, "Blue Notebook");
        assert_eq!(catalog.require(&id).unwrap(), &updated);
    }

    #[test]
    fn test_update_product_keeps_old_value_on_invalid_patch() {
        let mut catalog = sample_catalog();
        let id = catalog.products()[0].id.clone();
        let before = catalog.require(&id).unwrap().clone();

        let result = catalog.update_product(
            &id,
            ProductPatch {
                stock: Some(-1),
                ..ProductPatch::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(catalog.require(&id).unwrap(), &before);
    }

    #[test]
    fn test_remove_product() {
        let mut catalog = sample_catalog();
        let id = catalog.products()[1].id.clone();
        let removed = catalog.remove_product(&id).unwrap();
        assert_eq!(removed.name, "Fountain Pen");
        assert_eq!(catalog.len(), 2);
        assert!(matches!(
            catalog.remove_product(&id),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_filter_matches_name_or_description_case_insensitive() {
        let catalog = sample_catalog();

        let names: Vec<&str> = catalog
            .filter("notebook")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blue Notebook", "Fountain Pen"]);

        assert_eq!(catalog.filter("LAMP").len(), 1);
        assert_eq!(catalog.filter("").len(), 3);
        assert!(catalog.filter("stapler").is_empty());
    }

    #[test]
    fn test_filter_uses_term_as_typed() {
        let catalog = sample_catalog();
        // Whitespace is part of the term, it is not trimmed away
        assert_eq!(catalog.filter(" lamp").len(), 1);
        assert!(catalog.filter("lamp ").is_empty());
        assert!(catalog.filter("   ").is_empty());
    }

    #[test]
    fn test_listings_reflect_cart() {
        let catalog = sample_catalog();
        let lamp = catalog.products()[2].clone();
        let cart = Cart::new().apply(CartAction::add(&lamp, 5)).unwrap();

        let listings = catalog.listings(&cart, "lamp");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].remaining_stock, 0);
        assert!(listings[0].sold_out);
        assert_eq!(listings[0].best_rate.bps(), 1_000);
    }

    #[test]
    fn test_retain_valid_drops_bad_products() {
        let mut products = sample_catalog().products().to_vec();
        products[0].price = Money::new(0);
        products[2].stock = -4;
        let kept_id = products[1].id.clone();
        let mut catalog = Catalog::new(products);

        let dropped = catalog.retain_valid();
        assert_eq!(dropped.len(), 2);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(&kept_id).is_some());
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let catalog = sample_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
