use crate::entities::usuario;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUsuarioRequest {
    #[schema(example = "Ana Souza")]
    pub nome: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    pub senha: Option<String>,
    /// AAAA-MM-DD
    #[schema(example = "2000-05-20")]
    pub nascimento: Option<String>,
    #[schema(example = "aninha")]
    pub nick: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUsuarioRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub nick: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsuarioResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub nick: String,
    pub imagem: String,
    pub nascimento: NaiveDate,
}

impl From<usuario::Model> for UsuarioResponse {
    fn from(usuario: usuario::Model) -> Self {
        UsuarioResponse {
            id: usuario.id,
            nome: usuario.nome,
            email: usuario.email,
            nick: usuario.nick,
            imagem: usuario.imagem,
            nascimento: usuario.nascimento,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UsuarioResponse,
}
