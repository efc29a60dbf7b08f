use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "publicacoes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub usuario_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub publicacao: String,
    #[sea_orm(default_value = 0)]
    pub qtd_likes: i32,
    pub criado_em: DateTimeUtc,
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
    #[sea_orm(has_many = "super::comentario::Entity")]
    Comentarios,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<super::comentario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comentarios.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
