//! Like counters. Each adjustment is one `UPDATE` evaluated by the database,
//! so concurrent likes never lose updates and the count never drops below 0.

use super::comentarios::COMENTARIO_NAO_ENCONTRADO;
use super::publicacoes::PUBLICACAO_NAO_ENCONTRADA;
use crate::db::DbPool;
use crate::entities::{comentario, publicacao};
use crate::error::{ApiError, ApiResult};
use crate::validation::required;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ajuste {
    Curtir,
    Descurtir,
}

impl Ajuste {
    fn expr<C: ColumnTrait>(self, qtd_likes: C) -> SimpleExpr {
        match self {
            Ajuste::Curtir => Expr::col(qtd_likes).add(1),
            Ajuste::Descurtir => Expr::col(qtd_likes).sub(1),
        }
    }
}

/// Applies `ajuste` to the post and returns its like count as read right
/// after the update, which may already include other concurrent adjustments.
pub async fn ajustar_publicacao(
    db: &DbPool,
    publicacao_id: Option<Uuid>,
    ajuste: Ajuste,
) -> ApiResult<i32> {
    let id = required(publicacao_id)?;

    let column = publicacao::Column::QtdLikes;
    let mut update = publicacao::Entity::update_many()
        .col_expr(column, ajuste.expr(column))
        .filter(publicacao::Column::Id.eq(id));
    if ajuste == Ajuste::Descurtir {
        update = update.filter(column.gt(0));
    }
    update.exec(db).await?;

    let publicacao = publicacao::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::bad_request(PUBLICACAO_NAO_ENCONTRADA))?;

    log::debug!(
        "{:?} publicacao {}: qtd_likes = {}",
        ajuste,
        id,
        publicacao.qtd_likes
    );

    Ok(publicacao.qtd_likes)
}

/// Applies `ajuste` to the comment and returns its current like count, read
/// right after the update.
pub async fn ajustar_comentario(
    db: &DbPool,
    comentario_id: Option<Uuid>,
    ajuste: Ajuste,
) -> ApiResult<i32> {
    let id = required(comentario_id)?;

    let column = comentario::Column::QtdLikes;
    let mut update = comentario::Entity::update_many()
        .col_expr(column, ajuste.expr(column))
        .filter(comentario::Column::Id.eq(id));
    if ajuste == Ajuste::Descurtir {
        update = update.filter(column.gt(0));
    }
    update.exec(db).await?;

    let comentario = comentario::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::bad_request(COMENTARIO_NAO_ENCONTRADO))?;

    log::debug!(
        "{:?} comentario {}: qtd_likes = {}",
        ajuste,
        id,
        comentario.qtd_likes
    );

    Ok(comentario.qtd_likes)
}
