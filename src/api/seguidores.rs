use crate::db::DbPool;
use crate::error::ApiResult;
use crate::models::{CreateSeguidorResponse, SeguidorListResponse, SeguidorRequest};
use crate::services::seguidores;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/seguidores",
    request_body = SeguidorRequest,
    responses(
        (status = 201, description = "Passou a seguir", body = CreateSeguidorResponse),
        (status = 400, description = "Campo ausente, usuário não encontrado ou já seguido")
    ),
    tag = "seguidores"
)]
pub async fn seguir(
    req: web::Json<SeguidorRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let link = seguidores::seguir(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(CreateSeguidorResponse {
        seguidor_link_id: link.id,
    }))
}

#[utoipa::path(
    delete,
    path = "/seguidores",
    request_body = SeguidorRequest,
    responses(
        (status = 204, description = "Deixou de seguir"),
        (status = 400, description = "Relação não encontrada")
    ),
    tag = "seguidores"
)]
pub async fn deixar_de_seguir(
    req: web::Json<SeguidorRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    seguidores::deixar_de_seguir(pool.get_ref(), &req).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/usuarios/{usuario_id}/seguidores",
    params(("usuario_id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Quem segue o usuário", body = SeguidorListResponse),
        (status = 404, description = "Usuário não encontrado")
    ),
    tag = "seguidores"
)]
pub async fn list_seguidores(
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let data = seguidores::list_seguidores(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SeguidorListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/usuarios/{usuario_id}/seguindo",
    params(("usuario_id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Quem o usuário segue", body = SeguidorListResponse),
        (status = 404, description = "Usuário não encontrado")
    ),
    tag = "seguidores"
)]
pub async fn list_seguindo(
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let data = seguidores::list_seguindo(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SeguidorListResponse {
        total: data.len(),
        data,
    }))
}
