use crate::auth::{create_token, Claims};
use crate::config::Config;
use crate::db::DbPool;
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse, UsuarioResponse};
use crate::services::usuarios;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login realizado", body = LoginResponse),
        (status = 400, description = "Campo ausente"),
        (status = 401, description = "Credenciais inválidas")
    ),
    tag = "auth"
)]
pub async fn login(
    req: web::Json<LoginRequest>,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
) -> ApiResult<HttpResponse> {
    let usuario = usuarios::authenticate(pool.get_ref(), &req).await?;

    let claims = Claims::new(usuario.id, usuario.email.clone(), config.jwt.expiration_hours);
    let token = create_token(&claims, &config.jwt.secret)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        usuario: UsuarioResponse::from(usuario),
    }))
}
