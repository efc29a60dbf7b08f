use super::usuarios::{find_referenced_usuario, get_usuario};
use crate::db::DbPool;
use crate::entities::{seguidor, usuario};
use crate::error::{ApiError, ApiResult};
use crate::models::{SeguidorRequest, SeguidorResponse};
use crate::validation::required;
use sea_orm::{ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

async fn find_link(
    db: &DbPool,
    usuario_id: Uuid,
    seguidor_id: Uuid,
) -> ApiResult<Option<seguidor::Model>> {
    let link = seguidor::Entity::find()
        .filter(
            Condition::all()
                .add(seguidor::Column::UsuarioId.eq(usuario_id))
                .add(seguidor::Column::SeguidorId.eq(seguidor_id)),
        )
        .one(db)
        .await?;
    Ok(link)
}

pub async fn seguir(db: &DbPool, req: &SeguidorRequest) -> ApiResult<seguidor::Model> {
    let usuario_id = required(req.usuario_id)?;
    let seguidor_id = required(req.seguidor_id)?;

    if usuario_id == seguidor_id {
        return Err(ApiError::bad_request(
            "Um usuário não pode seguir a si mesmo",
        ));
    }

    find_referenced_usuario(db, usuario_id).await?;
    find_referenced_usuario(db, seguidor_id).await?;

    if find_link(db, usuario_id, seguidor_id).await?.is_some() {
        return Err(ApiError::bad_request("Usuário já é seguido"));
    }

    let link = seguidor::ActiveModel {
        id: Set(Uuid::new_v4()),
        usuario_id: Set(usuario_id),
        seguidor_id: Set(seguidor_id),
    };

    let link = seguidor::Entity::insert(link).exec_with_returning(db).await?;
    log::info!("Usuario {} now follows {}", seguidor_id, usuario_id);

    Ok(link)
}

pub async fn deixar_de_seguir(db: &DbPool, req: &SeguidorRequest) -> ApiResult<()> {
    let usuario_id = required(req.usuario_id)?;
    let seguidor_id = required(req.seguidor_id)?;

    let link = find_link(db, usuario_id, seguidor_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Relação de seguidor não encontrada"))?;

    link.delete(db).await?;
    log::info!("Usuario {} stopped following {}", seguidor_id, usuario_id);

    Ok(())
}

/// Users following `usuario_id`.
pub async fn list_seguidores(db: &DbPool, usuario_id: Uuid) -> ApiResult<Vec<SeguidorResponse>> {
    get_usuario(db, usuario_id).await?;

    let ids = seguidor::Entity::find()
        .filter(seguidor::Column::UsuarioId.eq(usuario_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.seguidor_id)
        .collect::<Vec<_>>();

    load_usuarios(db, ids).await
}

/// Users that `usuario_id` follows.
pub async fn list_seguindo(db: &DbPool, usuario_id: Uuid) -> ApiResult<Vec<SeguidorResponse>> {
    get_usuario(db, usuario_id).await?;

    let ids = seguidor::Entity::find()
        .filter(seguidor::Column::SeguidorId.eq(usuario_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.usuario_id)
        .collect::<Vec<_>>();

    load_usuarios(db, ids).await
}

async fn load_usuarios(db: &DbPool, ids: Vec<Uuid>) -> ApiResult<Vec<SeguidorResponse>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let usuarios = usuario::Entity::find()
        .filter(usuario::Column::Id.is_in(ids))
        .order_by_asc(usuario::Column::Nick)
        .all(db)
        .await?;

    Ok(usuarios
        .into_iter()
        .map(|usuario| SeguidorResponse {
            usuario_id: usuario.id,
            nick: usuario.nick,
            imagem: usuario.imagem,
        })
        .collect())
}
