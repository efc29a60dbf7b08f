use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ComentarioListResponse, CreateComentarioRequest, CreateComentarioResponse,
    DeleteComentarioRequest,
};
use crate::services::comentarios;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ComentarioQuery {
    /// Publicação cujos comentários serão listados
    pub publicacao_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/comentarios",
    request_body = CreateComentarioRequest,
    responses(
        (status = 201, description = "Comentário criado", body = CreateComentarioResponse),
        (status = 400, description = "Campo ausente, usuário ou publicação não encontrados")
    ),
    tag = "comentarios"
)]
pub async fn create_comentario(
    req: web::Json<CreateComentarioRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let comentario = comentarios::create_comentario(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(CreateComentarioResponse {
        comentario_id: comentario.id,
    }))
}

#[utoipa::path(
    get,
    path = "/comentarios",
    params(ComentarioQuery),
    responses(
        (status = 200, description = "Comentários da publicação", body = ComentarioListResponse),
        (status = 400, description = "Publicação não informada")
    ),
    tag = "comentarios"
)]
pub async fn list_comentarios(
    query: web::Query<ComentarioQuery>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let publicacao_id = query
        .publicacao_id
        .ok_or_else(|| ApiError::bad_request("Publicação não informada"))?;

    let data = comentarios::list_comentarios(pool.get_ref(), publicacao_id).await?;
    Ok(HttpResponse::Ok().json(ComentarioListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/comentarios",
    request_body = DeleteComentarioRequest,
    responses(
        (status = 204, description = "Comentário deletado"),
        (status = 400, description = "Usuário ou comentário não encontrados"),
        (status = 403, description = "Usuário não é o autor")
    ),
    security((), ("bearer_auth" = [])),
    tag = "comentarios"
)]
pub async fn delete_comentario(
    req: web::Json<DeleteComentarioRequest>,
    user: Option<AuthenticatedUser>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let usuario_id = req.usuario_id.or(user.map(|u| u.usuario_id));
    comentarios::delete_comentario(pool.get_ref(), req.comentario_id, usuario_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
