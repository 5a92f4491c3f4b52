use actix_web::{web, App};
use namevault::{
    config::EnvConfig,
    crypto::CryptoContext,
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
};
use std::sync::Arc;

/// App factory plus seed helpers. The crypto context is built once and
/// shared with every app instance this client creates, so tokens stored
/// through one request stay decryptable in the next.
pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub crypto: web::Data<CryptoContext>,
    pub config: web::Data<EnvConfig>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        let config = super::get_test_config();
        let crypto = web::Data::new(CryptoContext::new(&config));
        TestClient {
            db,
            crypto,
            config: web::Data::new(config),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(self.crypto.clone())
            .app_data(self.config.clone())
            .configure(namevault::routes::configure_routes)
    }

    /// Inserts a record directly, bypassing the HTTP surface.
    #[allow(dead_code)]
    pub async fn seed_user(&self, name: &str, password: &str) -> i32 {
        let name_encrypted = self.crypto.codec.encrypt(name);
        let password_hash = self
            .crypto
            .hasher
            .hash(password)
            .expect("Failed to hash password");

        self.db
            .create_user(DBUserCreate {
                name_encrypted,
                password_hash,
            })
            .await
            .expect("Failed to seed user")
    }
}
