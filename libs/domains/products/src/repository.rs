use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct, LIST_LIMIT};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product; the store assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List up to [`LIST_LIMIT`] products, ordered by name descending
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Apply a partial update to an existing product
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by id, returning whether a record was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Default)]
struct Store {
    products: HashMap<i32, Product>,
    // Monotonic; ids are never reused, even after a delete
    next_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let product = Product::new(store.next_id, input);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut result: Vec<Product> = store.products.values().cloned().collect();
        result.sort_by(|a, b| b.name.cmp(&a.name));
        result.truncate(LIST_LIMIT as usize);

        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);
        let updated = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: None,
            price,
            stock: 0,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Widget", 9.99)).await.unwrap();
        assert_eq!(product.name, "Widget");

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("Widget", 9.99)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(input("Gadget", 5.0)).await.unwrap();
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo.update(999, UpdateProduct::default()).await;
        assert!(matches!(result, Err(ProductError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_update_never_creates_a_record() {
        let repo = InMemoryProductRepository::new();

        let _ = repo
            .update(
                1,
                UpdateProduct {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(repo.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_false() {
        let repo = InMemoryProductRepository::new();
        assert!(!repo.delete(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_is_capped_and_ordered_by_name_desc() {
        let repo = InMemoryProductRepository::new();

        for i in 0..25 {
            repo.create(input(&format!("product-{:02}", i), 1.0))
                .await
                .unwrap();
        }

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), LIST_LIMIT as usize);
        assert_eq!(products[0].name, "product-24");
        assert!(products.windows(2).all(|w| w[0].name >= w[1].name));
    }
}
