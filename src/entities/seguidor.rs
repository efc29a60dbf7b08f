use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Follower link: `seguidor_id` follows `usuario_id`.
///
/// Both columns point at `usuarios`, so there is no `Related` impl; callers
/// pick the side they need and load the users by id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "seguidores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub seguidor_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UsuarioId",
        to = "super::usuario::Column::Id",
        on_delete = "Cascade"
    )]
    Usuario,
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::SeguidorId",
        to = "super::usuario::Column::Id",
        on_delete = "Cascade"
    )]
    Seguidor,
}

impl ActiveModelBehavior for ActiveModel {}
