use crate::db::DbPool;
use crate::error::ApiResult;
use crate::models::{CreateUsuarioRequest, UpdateUsuarioRequest, UsuarioResponse};
use crate::services::usuarios;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUsuarioRequest,
    responses(
        (status = 201, description = "Usuário criado", body = UsuarioResponse),
        (status = 400, description = "Campo ausente, idade mínima, email ou nick em uso")
    ),
    tag = "usuarios"
)]
pub async fn create_usuario(
    req: web::Json<CreateUsuarioRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let usuario = usuarios::create_usuario(pool.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(UsuarioResponse::from(usuario)))
}

#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "Todos os usuários", body = Vec<UsuarioResponse>)
    ),
    tag = "usuarios"
)]
pub async fn list_usuarios(pool: web::Data<DbPool>) -> ApiResult<HttpResponse> {
    let usuarios = usuarios::list_usuarios(pool.get_ref()).await?;
    let data: Vec<UsuarioResponse> = usuarios.into_iter().map(UsuarioResponse::from).collect();
    Ok(HttpResponse::Ok().json(data))
}

#[utoipa::path(
    get,
    path = "/usuarios/{usuario_id}",
    params(("usuario_id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário", body = UsuarioResponse),
        (status = 404, description = "Usuário não encontrado")
    ),
    tag = "usuarios"
)]
pub async fn get_usuario(
    path: web::Path<Uuid>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let usuario = usuarios::get_usuario(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UsuarioResponse::from(usuario)))
}

#[utoipa::path(
    patch,
    path = "/usuarios/{usuario_id}",
    params(("usuario_id" = Uuid, Path, description = "ID do usuário")),
    request_body = UpdateUsuarioRequest,
    responses(
        (status = 200, description = "Usuário atualizado", body = UsuarioResponse),
        (status = 400, description = "Nenhum campo, email ou nick em uso"),
        (status = 404, description = "Usuário não encontrado")
    ),
    tag = "usuarios"
)]
pub async fn update_usuario(
    path: web::Path<Uuid>,
    req: web::Json<UpdateUsuarioRequest>,
    pool: web::Data<DbPool>,
) -> ApiResult<HttpResponse> {
    let usuario = usuarios::update_usuario(pool.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(UsuarioResponse::from(usuario)))
}
