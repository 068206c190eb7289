use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Argon2PasswordEncoder;
use auth::Authenticator;
use auth::FixedClock;
use auth::TokenCodec;
use chrono::SubsecRound;
use chrono::Utc;
use serde_json::json;
use shop_service::domain::product::models::NewProduct;
use shop_service::domain::product::models::Product;
use shop_service::domain::product::models::ProductNumber;
use shop_service::domain::product::ports::ProductRepository;
use shop_service::domain::product::service::ProductService;
use shop_service::domain::user::models::NewUser;
use shop_service::domain::user::models::Uid;
use shop_service::domain::user::models::User;
use shop_service::domain::user::models::UserId;
use shop_service::domain::user::ports::UserRepository;
use shop_service::domain::user::service::IdentityLoader;
use shop_service::domain::user::service::SignService;
use shop_service::inbound::http::router::create_router;
use shop_service::product::errors::ProductError;
use shop_service::user::errors::UserError;
use tokio::sync::Mutex;

pub const TEST_SECRET: &str = "springboot-security-jwt-test-secret";
pub const AUTH_TOKEN_HEADER: &str = "X-AUTH-TOKEN";

/// Identity store backed by a map; enforces uid uniqueness like the table does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().await;
        if users.contains_key(user.uid.as_str()) {
            return Err(UserError::UidAlreadyExists(user.uid.to_string()));
        }

        let stored = User {
            id: UserId(users.len() as i64 + 1),
            uid: user.uid,
            password_hash: user.password_hash,
            name: user.name,
            roles: user.roles,
        };
        users.insert(stored.uid.as_str().to_string(), stored.clone());
        Ok(stored)
    }

    async fn find_by_uid(&self, uid: &Uid) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().await.get(uid.as_str()).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<HashMap<i64, Product>>,
    sequence: Mutex<i64>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductError> {
        let mut sequence = self.sequence.lock().await;
        *sequence += 1;

        let stored = Product {
            number: ProductNumber(*sequence),
            name: product.name,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.created_at,
        };
        self.products
            .lock()
            .await
            .insert(stored.number.0, stored.clone());
        Ok(stored)
    }

    async fn find_by_number(&self, number: ProductNumber) -> Result<Option<Product>, ProductError> {
        Ok(self.products.lock().await.get(&number.0).cloned())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.lock().await;
        match products.get_mut(&product.number.0) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.number.0)),
        }
    }

    async fn delete(&self, number: ProductNumber) -> Result<(), ProductError> {
        self.products
            .lock()
            .await
            .remove(&number.0)
            .map(|_| ())
            .ok_or(ProductError::NotFound(number.0))
    }
}

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Whole seconds, so the expiry boundary lands exactly on `exp`
        let clock = Arc::new(FixedClock::new(Utc::now().trunc_subsecs(0)));
        let token_codec = Arc::new(
            TokenCodec::new(TEST_SECRET)
                .expect("Test secret must be strong enough")
                .with_clock(clock.clone()),
        );
        let authenticator = Arc::new(Authenticator::new(
            Arc::new(Argon2PasswordEncoder::new()),
            Arc::clone(&token_codec),
        ));

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let product_repository = Arc::new(InMemoryProductRepository::default());

        let router = create_router(
            Arc::new(SignService::new(
                Arc::clone(&user_repository),
                authenticator,
            )),
            Arc::new(ProductService::new(product_repository)),
            Arc::new(IdentityLoader::new(user_repository)),
            token_codec,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            clock,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Attach the token header to a request
    pub fn with_token(request: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
        request.header(AUTH_TOKEN_HEADER, token)
    }

    pub async fn sign_up(&self, id: &str, password: &str, role: Option<&str>) -> reqwest::Response {
        self.post("/sign-api/sign-up")
            .json(&json!({
                "id": id,
                "password": password,
                "name": format!("{id} name"),
                "role": role,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn sign_in(&self, id: &str, password: &str) -> reqwest::Response {
        self.post("/sign-api/sign-in")
            .json(&json!({ "id": id, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign up and sign in, returning the issued token
    pub async fn token_for(&self, id: &str, role: Option<&str>) -> String {
        self.sign_up(id, "pass_word!", role).await;
        let body: serde_json::Value = self
            .sign_in(id, "pass_word!")
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Sign-in response carries a token")
            .to_string()
    }

    /// Register a product as a fresh admin, returning its number
    pub async fn seed_product(&self, name: &str) -> i64 {
        let token = self.token_for(&format!("seeder-{name}"), Some("admin")).await;
        let body: serde_json::Value = Self::with_token(self.post("/product"), &token)
            .json(&json!({ "name": name, "price": 1000, "stock": 10 }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");
        body["number"].as_i64().expect("Product has a number")
    }
}
