use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL. When set, the individual fields below are ignored.
    pub url: Option<String>,
    pub dialect: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();

        let dialect = env::var("DB_DIALECT").unwrap_or_else(|_| "mysql".to_string());
        if !matches!(dialect.as_str(), "mysql" | "sqlite") {
            anyhow::bail!("Unsupported DB_DIALECT: {}", dialect);
        }

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "your-secret-key-change-this".to_string()),
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()
                    .unwrap_or(24),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok(),
                dialect,
                host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("DB_PORT")
                    .unwrap_or_else(|_| "3306".to_string())
                    .parse()
                    .unwrap_or(3306),
                user: env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
                password: env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string()),
                name: env::var("DB_NAME").unwrap_or_else(|_| "rede_social".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
        })
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database.url {
            return url.clone();
        }

        match self.database.dialect.as_str() {
            // For sqlite, DB_NAME is the database file path
            "sqlite" => format!("sqlite://{}?mode=rwc", self.database.name),
            _ => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.database.user,
                self.database.password,
                self.database.host,
                self.database.port,
                self.database.name
            ),
        }
    }
}
