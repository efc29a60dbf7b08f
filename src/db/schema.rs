use super::DbPool;
use crate::entities::{comentario, publicacao, seguidor, usuario};
use sea_orm::{ConnectionTrait, Schema};

/// Creates the tables that do not exist yet, straight from the entity
/// definitions. Order matters: referenced tables come first.
pub async fn create_schema(db: &DbPool) -> Result<(), anyhow::Error> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = vec![
        schema.create_table_from_entity(usuario::Entity),
        schema.create_table_from_entity(publicacao::Entity),
        schema.create_table_from_entity(comentario::Entity),
        schema.create_table_from_entity(seguidor::Entity),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    log::debug!("Database schema is up to date");

    Ok(())
}
