use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub signing_secret: String,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            signing_secret: Self::get_env("SIGNING_SECRET"),
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                endpoint: env::var("MAIL_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                from: env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "noreply@namevault.dev".to_string()),
            },
        }
    }
}
