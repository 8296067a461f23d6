//! Table creation.
//!
//! Tables are derived from the entities and created when missing. Existing
//! tables are left untouched: there is no migration history.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};

use crate::{ResultEngine, accounts, budgets, transactions};

/// Creates the `accounts`, `transactions` and `budgets` tables if they do not
/// exist yet.
pub async fn bootstrap(db: &DatabaseConnection) -> ResultEngine<()> {
    create_table(db, accounts::Entity).await?;
    create_table(db, transactions::Entity).await?;
    create_table(db, budgets::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> ResultEngine<()> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}
