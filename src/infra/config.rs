use std::{env, sync::OnceLock};

use tracing::info;

pub(crate) struct Config {
    address: String,
    db_conn_string: String,
    log_level: String,
}

pub(crate) fn get() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();

    CELL.get_or_init(|| {
        let config = Config {
            address: env::var("ADDRESS").unwrap(),
            db_conn_string: env::var("DATABASE_URL").unwrap(),
            log_level: env::var("RUST_LOG").unwrap(),
        };

        info!(
            address = config.address,
            log_level = config.log_level,
            "initialized config"
        );

        config
    })
}

impl Config {
    pub(crate) fn get_address(&'static self) -> &'_ str {
        &self.address
    }

    pub(crate) fn get_db_conn_string(&'static self) -> &'_ str {
        &self.db_conn_string
    }
}
