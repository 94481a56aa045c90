use std::sync::Arc;
use tokio::sync::RwLock;

use library_ledger::{
    app_state::{AppState, KeyValueStoreType},
    get_redis_client,
    services::data_stores::{FileKeyValueStore, RedisKeyValueStore},
    utils::{
        constants::{prod, REDIS_HOST_NAME, STORAGE_BACKEND, STORAGE_FILE_PATH},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let key_value_store = configure_key_value_store().await?;
    let app_state = AppState::new(key_value_store);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}

async fn configure_key_value_store() -> color_eyre::Result<KeyValueStoreType> {
    match STORAGE_BACKEND.as_str() {
        "redis" => {
            tracing::info!("using redis storage at {}", REDIS_HOST_NAME.as_str());
            let connection = get_redis_client(REDIS_HOST_NAME.to_owned())?
                .get_connection()?;
            Ok(Arc::new(RwLock::new(RedisKeyValueStore::new(Arc::new(
                RwLock::new(connection),
            )))))
        }
        "file" => {
            tracing::info!("using file storage at {}", STORAGE_FILE_PATH.as_str());
            let store = FileKeyValueStore::open(STORAGE_FILE_PATH.as_str()).await?;
            Ok(Arc::new(RwLock::new(store)))
        }
        other => Err(color_eyre::eyre::eyre!(
            "Unknown STORAGE_BACKEND {other:?}, expected \"file\" or \"redis\""
        )),
    }
}
