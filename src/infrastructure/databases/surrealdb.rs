use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::any::{self, Any},
    opt::auth::Root,
};

pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Any>, Error> {
    let db = any::connect(db_config.endpoint.as_str()).await?;

    // Embedded engines run without authentication.
    if !db_config.username.is_empty() {
        db.signin(Root {
            username: db_config.username.as_str(),
            password: db_config.password.as_str(),
        })
        .await?;
    }

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    Ok(db)
}
