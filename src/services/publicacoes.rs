use super::comentarios::list_comentarios;
use super::usuarios::{find_referenced_usuario, get_usuario};
use crate::db::DbPool;
use crate::entities::{comentario, publicacao, usuario};
use crate::error::{ApiError, ApiResult};
use crate::models::{CreatePublicacaoRequest, PublicacaoDetalheResponse, PublicacaoResponse};
use crate::validation::{ensure_autor, present, required};
use chrono::Utc;
use sea_orm::{
    ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

pub const PUBLICACAO_NAO_ENCONTRADA: &str = "Publicação não encontrada";

fn to_response(publicacao: publicacao::Model, autor: &usuario::Model) -> PublicacaoResponse {
    PublicacaoResponse {
        publicacao_id: publicacao.id,
        publicacao: publicacao.publicacao,
        usuario_id: publicacao.usuario_id,
        nick: autor.nick.clone(),
        imagem: autor.imagem.clone(),
        qtd_likes: publicacao.qtd_likes,
        qtd_comentarios: None,
        criado_em: publicacao.criado_em,
    }
}

pub async fn create_publicacao(
    db: &DbPool,
    req: &CreatePublicacaoRequest,
) -> ApiResult<publicacao::Model> {
    let usuario_id = required(req.usuario_id)?;
    let texto = required(present(&req.publicacao))?;

    find_referenced_usuario(db, usuario_id).await?;

    let nova_publicacao = publicacao::ActiveModel {
        id: Set(Uuid::new_v4()),
        usuario_id: Set(usuario_id),
        publicacao: Set(texto.to_string()),
        qtd_likes: Set(0),
        criado_em: Set(Utc::now()),
    };

    let publicacao = publicacao::Entity::insert(nova_publicacao)
        .exec_with_returning(db)
        .await?;

    log::info!(
        "Created publicacao {} by usuario {}",
        publicacao.id,
        publicacao.usuario_id
    );

    Ok(publicacao)
}

pub async fn list_publicacoes(db: &DbPool) -> ApiResult<Vec<PublicacaoResponse>> {
    let rows = publicacao::Entity::find()
        .find_also_related(usuario::Entity)
        .order_by_asc(publicacao::Column::CriadoEm)
        .all(db)
        .await?;

    let data = rows
        .into_iter()
        .filter_map(|(publicacao, autor)| match autor {
            Some(autor) => Some(to_response(publicacao, &autor)),
            None => {
                log::warn!("Publicacao {} has no author row", publicacao.id);
                None
            }
        })
        .collect();

    Ok(data)
}

pub async fn list_publicacoes_de_usuario(
    db: &DbPool,
    usuario_id: Uuid,
) -> ApiResult<Vec<PublicacaoResponse>> {
    let autor = get_usuario(db, usuario_id).await?;

    let publicacoes = publicacao::Entity::find()
        .filter(publicacao::Column::UsuarioId.eq(usuario_id))
        .order_by_asc(publicacao::Column::CriadoEm)
        .all(db)
        .await?;

    let mut data = Vec::with_capacity(publicacoes.len());
    for publicacao in publicacoes {
        let qtd_comentarios = publicacao
            .find_related(comentario::Entity)
            .count(db)
            .await?;

        let mut item = to_response(publicacao, &autor);
        item.qtd_comentarios = Some(qtd_comentarios);
        data.push(item);
    }

    Ok(data)
}

pub async fn get_publicacao(
    db: &DbPool,
    publicacao_id: Uuid,
) -> ApiResult<PublicacaoDetalheResponse> {
    let (publicacao, autor) = publicacao::Entity::find_by_id(publicacao_id)
        .find_also_related(usuario::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(PUBLICACAO_NAO_ENCONTRADA))?;
    let autor = autor.ok_or_else(|| ApiError::not_found(PUBLICACAO_NAO_ENCONTRADA))?;

    let comentarios = list_comentarios(db, publicacao.id).await?;

    Ok(PublicacaoDetalheResponse {
        publicacao_id: publicacao.id,
        publicacao: publicacao.publicacao,
        usuario_id: publicacao.usuario_id,
        nick: autor.nick,
        imagem: autor.imagem,
        qtd_likes: publicacao.qtd_likes,
        criado_em: publicacao.criado_em,
        comentarios,
    })
}

/// Deletes the post and its comments. Only the author may do it.
pub async fn delete_publicacao(
    db: &DbPool,
    publicacao_id: Option<Uuid>,
    usuario_id: Option<Uuid>,
) -> ApiResult<()> {
    let publicacao = match publicacao_id {
        Some(id) => publicacao::Entity::find_by_id(id).one(db).await?,
        None => None,
    }
    .ok_or_else(|| ApiError::bad_request(PUBLICACAO_NAO_ENCONTRADA))?;

    let usuario_id = usuario_id.ok_or_else(|| ApiError::bad_request("Usuário não informado"))?;
    ensure_autor(publicacao.usuario_id, usuario_id)?;

    let txn = db.begin().await?;
    comentario::Entity::delete_many()
        .filter(comentario::Column::PublicacaoId.eq(publicacao.id))
        .exec(&txn)
        .await?;
    let id = publicacao.id;
    publicacao.delete(&txn).await?;
    txn.commit().await?;

    log::info!("Deleted publicacao {} by usuario {}", id, usuario_id);

    Ok(())
}
