use super::publicacoes::PUBLICACAO_NAO_ENCONTRADA;
use super::usuarios::{find_referenced_usuario, USUARIO_NAO_ENCONTRADO};
use crate::db::DbPool;
use crate::entities::{comentario, publicacao, usuario};
use crate::error::{ApiError, ApiResult};
use crate::models::{ComentarioResponse, CreateComentarioRequest};
use crate::validation::{ensure_autor, present, required};
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub const COMENTARIO_NAO_ENCONTRADO: &str = "Comentário não encontrado";

pub async fn create_comentario(
    db: &DbPool,
    req: &CreateComentarioRequest,
) -> ApiResult<comentario::Model> {
    let publicacao_id = required(req.publicacao_id)?;
    let usuario_id = required(req.usuario_id)?;
    let texto = required(present(&req.comentario))?;

    find_referenced_usuario(db, usuario_id).await?;
    publicacao::Entity::find_by_id(publicacao_id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::bad_request(PUBLICACAO_NAO_ENCONTRADA))?;

    let novo_comentario = comentario::ActiveModel {
        id: Set(Uuid::new_v4()),
        usuario_id: Set(usuario_id),
        publicacao_id: Set(publicacao_id),
        comentario: Set(texto.to_string()),
        qtd_likes: Set(0),
        criado_em: Set(Utc::now()),
    };

    let comentario = comentario::Entity::insert(novo_comentario)
        .exec_with_returning(db)
        .await?;

    log::info!(
        "Created comentario {} on publicacao {}",
        comentario.id,
        comentario.publicacao_id
    );

    Ok(comentario)
}

/// Comments of a post with the commenter's nick and avatar, oldest first.
pub async fn list_comentarios(
    db: &DbPool,
    publicacao_id: Uuid,
) -> ApiResult<Vec<ComentarioResponse>> {
    let rows = comentario::Entity::find()
        .filter(comentario::Column::PublicacaoId.eq(publicacao_id))
        .find_also_related(usuario::Entity)
        .order_by_asc(comentario::Column::CriadoEm)
        .all(db)
        .await?;

    let data = rows
        .into_iter()
        .filter_map(|(comentario, autor)| {
            let autor = autor?;
            Some(ComentarioResponse {
                comentario_id: comentario.id,
                comentario: comentario.comentario,
                usuario_id: comentario.usuario_id,
                nick: autor.nick,
                imagem: autor.imagem,
                qtd_likes: comentario.qtd_likes,
                criado_em: comentario.criado_em,
            })
        })
        .collect();

    Ok(data)
}

pub async fn delete_comentario(
    db: &DbPool,
    comentario_id: Option<Uuid>,
    usuario_id: Option<Uuid>,
) -> ApiResult<()> {
    let usuario = match usuario_id {
        Some(id) => usuario::Entity::find_by_id(id).one(db).await?,
        None => None,
    }
    .ok_or_else(|| ApiError::bad_request(USUARIO_NAO_ENCONTRADO))?;

    let comentario = match comentario_id {
        Some(id) => comentario::Entity::find_by_id(id).one(db).await?,
        None => None,
    }
    .ok_or_else(|| ApiError::bad_request(COMENTARIO_NAO_ENCONTRADO))?;

    ensure_autor(comentario.usuario_id, usuario.id)?;

    let id = comentario.id;
    comentario.delete(db).await?;
    log::info!("Deleted comentario {} by usuario {}", id, usuario.id);

    Ok(())
}
