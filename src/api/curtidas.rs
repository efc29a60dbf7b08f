use crate::db::DbPool;
use crate::error::ApiResult;
use crate::models::{CurtidaComentarioRequest, CurtidaPublicacaoRequest, CurtidasResponse};
use crate::services::curtidas::{ajustar_comentario, ajustar_publicacao, Ajuste};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/curtidas/publicacao",
    request_body = CurtidaPublicacaoRequest,
    responses(
        (status = 200, description = "Nova quantidade de curtidas", body = CurtidasResponse),
        (status = 400, description = "Campo ausente ou publicação não encontrada")
    ),
    tag = "curtidas"
)]
pub async fn curtir_publicacao(
    req: web::Json<CurtidaPublicacaoRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let qtd_likes = ajustar_publicacao(pool.get_ref(), req.publicacao_id, Ajuste::Curtir).await?;
    Ok(HttpResponse::Ok().json(CurtidasResponse { qtd_likes }))
}

#[utoipa::path(
    delete,
    path = "/curtidas/publicacao",
    request_body = CurtidaPublicacaoRequest,
    responses(
        (status = 200, description = "Nova quantidade de curtidas", body = CurtidasResponse),
        (status = 400, description = "Campo ausente ou publicação não encontrada")
    ),
    tag = "curtidas"
)]
pub async fn descurtir_publicacao(
    req: web::Json<CurtidaPublicacaoRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let qtd_likes =
        ajustar_publicacao(pool.get_ref(), req.publicacao_id, Ajuste::Descurtir).await?;
    Ok(HttpResponse::Ok().json(CurtidasResponse { qtd_likes }))
}

#[utoipa::path(
    post,
    path = "/curtidas/comentario",
    request_body = CurtidaComentarioRequest,
    responses(
        (status = 200, description = "Nova quantidade de curtidas", body = CurtidasResponse),
        (status = 400, description = "Campo ausente ou comentário não encontrado")
    ),
    tag = "curtidas"
)]
pub async fn curtir_comentario(
    req: web::Json<CurtidaComentarioRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let qtd_likes = ajustar_comentario(pool.get_ref(), req.comentario_id, Ajuste::Curtir).await?;
    Ok(HttpResponse::Ok().json(CurtidasResponse { qtd_likes }))
}

#[utoipa::path(
    delete,
    path = "/curtidas/comentario",
    request_body = CurtidaComentarioRequest,
    responses(
        (status = 200, description = "Nova quantidade de curtidas", body = CurtidasResponse),
        (status = 400, description = "Campo ausente ou comentário não encontrado")
    ),
    tag = "curtidas"
)]
pub async fn descurtir_comentario(
    req: web::Json<CurtidaComentarioRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let qtd_likes =
        ajustar_comentario(pool.get_ref(), req.comentario_id, Ajuste::Descurtir).await?;
    Ok(HttpResponse::Ok().json(CurtidasResponse { qtd_likes }))
}
