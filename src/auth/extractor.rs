use crate::auth::verify_token;
use crate::config::Config;
use actix_web::{web, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Bearer-token identity. Handlers take it as `Option<AuthenticatedUser>`,
/// so a missing or invalid token simply yields `None`.
pub struct AuthenticatedUser {
    pub usuario_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let auth_header = req.headers().get("Authorization");

        if let Some(header_value) = auth_header {
            if let Ok(header_str) = header_value.to_str() {
                if let Some(token) = header_str.strip_prefix("Bearer ") {
                    let config = req.app_data::<web::Data<Config>>();
                    if let Some(config) = config {
                        match verify_token(token, &config.jwt.secret) {
                            Ok(claims) => {
                                if let Some(usuario_id) = claims.usuario_id() {
                                    return ready(Ok(AuthenticatedUser { usuario_id }));
                                }
                            }
                            Err(e) => {
                                log::debug!("Rejected bearer token: {:?}", e);
                                return ready(Err(actix_web::error::ErrorUnauthorized(
                                    "Token inválido",
                                )));
                            }
                        }
                    }
                }
            }
        }

        ready(Err(actix_web::error::ErrorUnauthorized(
            "Cabeçalho de autorização ausente ou inválido",
        )))
    }
}
