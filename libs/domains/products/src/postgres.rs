use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, UpdateProduct, LIST_LIMIT},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_error(e: sea_orm::DbErr) -> ProductError {
    ProductError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await.map_err(db_error)?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Name)
            .limit(LIST_LIMIT)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(ProductError::NotFound(id))?;

        let mut product: Product = model.into();
        product.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            stock: Set(product.stock),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        };

        let updated_model = self.base.update(active_model).await.map_err(db_error)?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        // Fetch first so the not-found check fires before removal
        let model = self.base.find_by_id(id).await.map_err(db_error)?;

        if model.is_none() {
            return Ok(false);
        }

        let rows_affected = self.base.delete_by_id(id).await.map_err(db_error)?;

        if rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(rows_affected > 0)
    }
}
