//! Synthetic data generation from fixed vocabularies

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Product, User, UserRole};

/// Inclusive bounds for the record count
const MIN_COUNT: u32 = 1;
const MAX_COUNT: u32 = 20;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Emily", "Chris", "Sarah", "Mike", "Lisa",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Davis", "Miller",
];
const EMAIL_DOMAINS: &[&str] = &["example.com", "test.org", "demo.net"];

const CATEGORIES: &[&str] = &["Electronics", "Books", "Clothing", "Home", "Sports", "Toys"];
const ADJECTIVES: &[&str] = &[
    "Premium", "Standard", "Deluxe", "Basic", "Advanced", "Professional",
];
const NOUNS: &[&str] = &["Widget", "Gadget", "Device", "Tool", "Equipment", "Accessory"];
const TAGS: &[&str] = &["new", "sale", "featured", "bestseller"];

const ROLES: &[UserRole] = &[UserRole::Admin, UserRole::User, UserRole::Guest];

/// Kind of records to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Users,
    Products,
    Orders,
}

/// Request for synthetic records
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub data_type: DataType,
    pub count: u32,
}

/// Generated records; never persisted by the generator itself
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GeneratedData {
    Users(Vec<User>),
    Products(Vec<Product>),
}

impl GeneratedData {
    pub fn len(&self) -> usize {
        match self {
            Self::Users(users) => users.len(),
            Self::Products(products) => products.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generator of pseudo-random User and Product records.
///
/// The random source is owned by the service and seedable, so tests can
/// pin the sequence while production use seeds from entropy. The generator
/// holds no reference to the entity store.
#[derive(Debug)]
pub struct GeneratorService {
    rng: Mutex<StdRng>,
}

impl GeneratorService {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Generator with a fixed seed, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produce `count` records of the requested kind
    pub fn generate(&self, request: &GenerateRequest) -> Result<GeneratedData, DomainError> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&request.count) {
            return Err(DomainError::invalid_argument(format!(
                "count must be between {MIN_COUNT} and {MAX_COUNT}, got {}",
                request.count
            )));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| DomainError::internal("Failed to acquire generator lock"))?;

        match request.data_type {
            DataType::Users => {
                let users = (0..request.count).map(|_| random_user(&mut rng)).collect();
                Ok(GeneratedData::Users(users))
            }
            DataType::Products => {
                let products = (0..request.count)
                    .map(|_| random_product(&mut rng))
                    .collect();
                Ok(GeneratedData::Products(products))
            }
            DataType::Orders => Err(DomainError::invalid_argument(
                "Synthetic orders are not supported",
            )),
        }
    }
}

impl Default for GeneratorService {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<'a, T>(rng: &mut StdRng, values: &'a [T]) -> &'a T {
    // Vocabularies are non-empty constants, so choose cannot fail
    values.choose(rng).unwrap_or(&values[0])
}

fn random_user(rng: &mut StdRng) -> User {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let username = format!("{}_{}", first.to_lowercase(), last.to_lowercase());
    let email = format!("{}@{}", username, pick(rng, EMAIL_DOMAINS));
    let role = *pick(rng, ROLES);
    let is_active = rng.gen_bool(0.5);

    User::new(username, email, role).with_active(is_active)
}

fn random_product(rng: &mut StdRng) -> Product {
    let adjective = pick(rng, ADJECTIVES);
    let noun = pick(rng, NOUNS);
    let name = format!("{adjective} {noun}");
    let description = format!("Description for {} product", adjective.to_lowercase());
    let price = (rng.gen_range(10.0..500.0_f64) * 100.0).round() / 100.0;
    let stock_quantity = rng.gen_range(0..=200);
    let tag = pick(rng, TAGS).to_string();

    Product::new(name, price, *pick(rng, CATEGORIES), stock_quantity)
        .with_description(description)
        .with_tags(vec![tag])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bounds() {
        let service = GeneratorService::with_seed(7);

        for count in [0, 21] {
            let result = service.generate(&GenerateRequest {
                data_type: DataType::Users,
                count,
            });
            assert!(matches!(result, Err(DomainError::InvalidArgument { .. })));
        }

        for count in [1, 20] {
            let data = service
                .generate(&GenerateRequest {
                    data_type: DataType::Users,
                    count,
                })
                .unwrap();
            assert_eq!(data.len(), count as usize);
        }
    }

    #[test]
    fn test_generates_exact_count() {
        let service = GeneratorService::with_seed(7);

        let data = service
            .generate(&GenerateRequest {
                data_type: DataType::Products,
                count: 5,
            })
            .unwrap();

        assert_eq!(data.len(), 5);
    }

    #[test]
    fn test_generated_users_satisfy_field_constraints() {
        let service = GeneratorService::with_seed(42);

        let data = service
            .generate(&GenerateRequest {
                data_type: DataType::Users,
                count: 20,
            })
            .unwrap();

        let GeneratedData::Users(users) = data else {
            panic!("expected users");
        };

        for user in &users {
            assert!(!user.id.as_str().is_empty());
            assert!(user.username.contains('_'));
            assert!(user.email.contains('@'));
        }
    }

    #[test]
    fn test_generated_products_satisfy_field_constraints() {
        let service = GeneratorService::with_seed(42);

        let data = service
            .generate(&GenerateRequest {
                data_type: DataType::Products,
                count: 20,
            })
            .unwrap();

        let GeneratedData::Products(products) = data else {
            panic!("expected products");
        };

        for product in &products {
            assert!(product.price >= 10.0 && product.price < 500.0);
            assert!(product.stock_quantity <= 200);
            assert_eq!(product.in_stock, product.stock_quantity > 0);
            assert_eq!(product.tags.len(), 1);
            assert!(product.description.is_some());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let request = GenerateRequest {
            data_type: DataType::Users,
            count: 10,
        };

        let a = GeneratorService::with_seed(123).generate(&request).unwrap();
        let b = GeneratorService::with_seed(123).generate(&request).unwrap();

        let usernames = |data: &GeneratedData| match data {
            GeneratedData::Users(users) => {
                users.iter().map(|u| u.username.clone()).collect::<Vec<_>>()
            }
            GeneratedData::Products(_) => panic!("expected users"),
        };

        assert_eq!(usernames(&a), usernames(&b));
    }

    #[test]
    fn test_orders_are_rejected() {
        let service = GeneratorService::with_seed(7);

        let result = service.generate(&GenerateRequest {
            data_type: DataType::Orders,
            count: 5,
        });

        assert!(matches!(result, Err(DomainError::InvalidArgument { .. })));
    }
}
