use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash, never the plain password.
    #[serde(skip_serializing)]
    pub senha: String,
    #[sea_orm(unique)]
    pub nick: String,
    pub nascimento: Date,
    pub imagem: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::publicacao::Entity")]
    Publicacoes,
    #[sea_orm(has_many = "super::comentario::Entity")]
    Comentarios,
}

impl Related<super::publicacao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publicacoes.def()
    }
}

impl Related<super::comentario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comentarios.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
