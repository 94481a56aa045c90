use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref JWT_SECRET: Secret<String> = set_token();
    pub static ref STORAGE_BACKEND: String =
        load_or_default(env::STORAGE_BACKEND_ENV_VAR, DEFAULT_STORAGE_BACKEND);
    pub static ref STORAGE_FILE_PATH: String = load_or_default(
        env::STORAGE_FILE_PATH_ENV_VAR,
        DEFAULT_STORAGE_FILE_PATH
    );
    pub static ref REDIS_HOST_NAME: String =
        load_or_default(env::REDIS_HOST_NAME_ENV_VAR, DEFAULT_REDIS_HOSTNAME);
}

fn load_env() {
    dotenv().ok();
}

fn set_token() -> Secret<String> {
    load_env();
    let secret =
        std_env::var(env::JWT_SECRET_ENV_VAR).expect("JWT_SECRET must be set.");
    if secret.is_empty() {
        panic!("JWT_SECRET must not be empty.");
    }
    Secret::new(secret)
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.is_empty() => value,
        _ => String::from(default_value),
    }
}

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const STORAGE_BACKEND_ENV_VAR: &str = "STORAGE_BACKEND";
    pub const STORAGE_FILE_PATH_ENV_VAR: &str = "STORAGE_FILE_PATH";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
}

pub const SESSION_COOKIE_NAME: &str = "session";
pub const DEFAULT_STORAGE_BACKEND: &str = "file";
pub const DEFAULT_STORAGE_FILE_PATH: &str = "data/purainiya-store.json";
pub const DEFAULT_REDIS_HOSTNAME: &str = "127.0.0.1";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
