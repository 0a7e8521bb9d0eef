use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Fixed page size for product listings
pub const LIST_LIMIT: u64 = 20;

/// Product entity - domain representation of a stored product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier, assigned by the store on creation
    pub id: i32,
    /// Product name
    pub name: String,
    /// Optional product description
    pub description: Option<String>,
    /// Product price, strictly positive
    pub price: f64,
    /// Stock quantity, never negative
    pub stock: i32,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// Unknown fields are rejected rather than dropped, so clients cannot
/// smuggle attributes like `id` or `createdAt` into a write.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
}

/// DTO for updating an existing product.
///
/// Every field is optional; absence means "leave unchanged". A present
/// field still has to satisfy the same constraints as on create.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
}

/// Response contract - the externally visible projection of a product.
///
/// One-way transform from the stored record; never written back. Keeps
/// the wire shape stable if the stored model grows internal-only fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl Product {
    /// Create a new product from a CreateProduct DTO and a store-assigned id.
    ///
    /// Both timestamps are set to the same instant.
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update from an UpdateProduct DTO.
    ///
    /// Only fields present in the input change; `updated_at` is refreshed.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        self.updated_at = Utc::now();
    }
}
