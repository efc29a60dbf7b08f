use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::ApiResult;
use crate::models::{
    CreatePublicacaoRequest, CreatePublicacaoResponse, DeletePublicacaoRequest,
    MensagemResponse, PublicacaoListResponse,
};
use crate::services::publicacoes;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/publicacoes",
    request_body = CreatePublicacaoRequest,
    responses(
        (status = 201, description = "Publicação criada", body = CreatePublicacaoResponse),
        (status = 400, description = "Campo ausente ou usuário não encontrado")
    ),
    tag = "publicacoes"
)]
pub async fn create_publicacao(
    req: web::Json<CreatePublicacaoRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let publicacao = publicacoes::create_publicacao(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(CreatePublicacaoResponse {
        publicacao_id: publicacao.id,
    }))
}

#[utoipa::path(
    get,
    path = "/publicacoes",
    responses(
        (status = 200, description = "Todas as publicações", body = PublicacaoListResponse)
    ),
    tag = "publicacoes"
)]
pub async fn list_publicacoes(pool: web::Data<DbPool>) -> ApiResult<HttpResponse> {
    let data = publicacoes::list_publicacoes(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(PublicacaoListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/publicacoes/de/{usuario_id}",
    params(("usuario_id" = Uuid, Path, description = "ID do autor")),
    responses(
        (status = 200, description = "Publicações do usuário", body = PublicacaoListResponse),
        (status = 404, description = "Usuário não encontrado")
    ),
    tag = "publicacoes"
)]
pub async fn list_publicacoes_de_usuario(
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let data = publicacoes::list_publicacoes_de_usuario(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PublicacaoListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/publicacoes/{publicacao_id}",
    params(("publicacao_id" = Uuid, Path, description = "ID da publicação")),
    responses(
        (status = 200, description = "Publicação com comentários", body = PublicacaoDetalheResponse),
        (status = 404, description = "Publicação não encontrada")
    ),
    tag = "publicacoes"
)]
pub async fn get_publicacao(
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let detalhe = publicacoes::get_publicacao(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detalhe))
}

#[utoipa::path(
    delete,
    path = "/publicacoes",
    request_body = DeletePublicacaoRequest,
    responses(
        (status = 200, description = "Publicação deletada", body = MensagemResponse),
        (status = 400, description = "Publicação não encontrada ou usuário não informado"),
        (status = 403, description = "Usuário não é o autor")
    ),
    security((), ("bearer_auth" = [])),
    tag = "publicacoes"
)]
pub async fn delete_publicacao(
    req: web::Json<DeletePublicacaoRequest>,
    user: Option<AuthenticatedUser>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let usuario_id = req.usuario_id.or(user.map(|u| u.usuario_id));
    publicacoes::delete_publicacao(pool.get_ref(), req.publicacao_id, usuario_id).await?;

    Ok(HttpResponse::Ok().json(MensagemResponse {
        mensagem: "Publicação deletada com sucesso".to_string(),
    }))
}
