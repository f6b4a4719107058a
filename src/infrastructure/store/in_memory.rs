//! In-memory entity store

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{
    DomainError, Order, OrderId, OrderRepository, Product, ProductId, ProductQuery,
    ProductRepository, User, UserId, UserQuery, UserRepository, UserRole,
};

#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

/// Single source of truth for all entity state.
///
/// One store-wide lock serializes mutating operations; readers take the
/// shared side and never observe a partially applied write. Collections are
/// plain `Vec`s so listings preserve insertion order, and lookups are
/// linear scans over collections that stay small for the lifetime of the
/// process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the sample fixtures
    pub fn with_sample_data() -> Self {
        let store = Self::new();

        {
            let mut inner = store.inner.write().unwrap_or_else(|e| e.into_inner());

            inner.users = vec![
                User::new("alice_w", "alice@example.com", UserRole::Admin)
                    .with_id(UserId::new("user_001")),
                User::new("bob_smith", "bob@example.com", UserRole::User)
                    .with_id(UserId::new("user_002")),
                User::new("charlie_b", "charlie@example.com", UserRole::Guest)
                    .with_id(UserId::new("user_003")),
            ];

            inner.products = vec![
                Product::new("Wireless Headphones", 199.99, "Electronics", 50)
                    .with_id(ProductId::new("prod_001"))
                    .with_description("Noise-cancelling wireless headphones")
                    .with_tags(vec![
                        "audio".to_string(),
                        "wireless".to_string(),
                        "tech".to_string(),
                    ]),
                Product::new("Coffee Maker", 89.99, "Home & Kitchen", 25)
                    .with_id(ProductId::new("prod_002"))
                    .with_description("Programmable drip coffee maker")
                    .with_tags(vec![
                        "kitchen".to_string(),
                        "appliance".to_string(),
                        "coffee".to_string(),
                    ]),
                Product::new("Yoga Mat", 29.99, "Fitness", 100)
                    .with_id(ProductId::new("prod_003"))
                    .with_description("Eco-friendly non-slip yoga mat")
                    .with_tags(vec![
                        "fitness".to_string(),
                        "yoga".to_string(),
                        "exercise".to_string(),
                    ]),
            ];
        }

        store
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreInner>, DomainError> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire store lock"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreInner>, DomainError> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire store lock"))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let inner = self.read()?;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut inner = self.write()?;

        if inner.users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email
            )));
        }

        inner.users.push(user.clone());
        Ok(user)
    }

    async fn list(&self, query: &UserQuery) -> Result<Vec<User>, DomainError> {
        let inner = self.read()?;
        Ok(inner
            .users
            .iter()
            .filter(|u| query.matches(u))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let inner = self.read()?;
        Ok(inner.products.iter().find(|p| &p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> Result<Product, DomainError> {
        let mut inner = self.write()?;

        if inner.products.iter().any(|p| p.id == product.id) {
            return Err(DomainError::conflict(format!(
                "Product '{}' already exists",
                product.id
            )));
        }

        inner.products.push(product.clone());
        Ok(product)
    }

    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, DomainError> {
        let inner = self.read()?;
        Ok(inner
            .products
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect())
    }

    async fn decrement_stock(
        &self,
        id: &ProductId,
        quantity: u32,
    ) -> Result<Product, DomainError> {
        let mut inner = self.write()?;

        let product = inner
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("Product '{}' not found", id)))?;

        if product.stock_quantity < quantity {
            return Err(DomainError::insufficient_stock(product.name.clone()));
        }

        product.stock_quantity -= quantity;
        product.recompute_in_stock();
        Ok(product.clone())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn find(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let inner = self.read()?;
        Ok(inner.orders.iter().find(|o| &o.id == id).cloned())
    }

    async fn append(&self, order: Order) -> Result<Order, DomainError> {
        let mut inner = self.write()?;
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        let inner = self.read()?;
        Ok(inner.orders.clone())
    }
}
