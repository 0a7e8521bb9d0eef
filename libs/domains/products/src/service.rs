use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List up to the fixed page size of products, ordered by name descending
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product with validation
    ///
    /// Validation failures never reach the repository.
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Apply a partial update to a product
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a product by id
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_repository() {
        // No expectations set: any repository call would panic
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let input = CreateProduct {
            name: "Widget".to_string(),
            description: None,
            price: -1.0,
            stock: 0,
        };

        let result = service.create_product(input).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_input_before_repository() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let input = UpdateProduct {
            price: Some(0.0),
            ..Default::default()
        };

        let result = service.update_product(1, input).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);

        let err = service.get_product(999).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(999)));
        assert!(err.to_string().contains("999"));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(999))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);

        let err = service.delete_product(999).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_delete_existing_product_succeeds() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(1)).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(1).await.is_ok());
    }
}
