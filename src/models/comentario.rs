use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateComentarioRequest {
    pub publicacao_id: Option<Uuid>,
    pub usuario_id: Option<Uuid>,
    #[schema(example = "Que legal!")]
    pub comentario: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateComentarioResponse {
    pub comentario_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComentarioResponse {
    pub comentario_id: Uuid,
    pub comentario: String,
    pub usuario_id: Uuid,
    pub nick: String,
    pub imagem: String,
    pub qtd_likes: i32,
    pub criado_em: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComentarioListResponse {
    pub data: Vec<ComentarioResponse>,
    pub total: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteComentarioRequest {
    pub comentario_id: Option<Uuid>,
    /// Falls back to the bearer token's user when omitted.
    pub usuario_id: Option<Uuid>,
}
