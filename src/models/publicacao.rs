use super::ComentarioResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublicacaoRequest {
    pub usuario_id: Option<Uuid>,
    #[schema(example = "Bom dia!")]
    pub publicacao: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePublicacaoResponse {
    pub publicacao_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicacaoResponse {
    pub publicacao_id: Uuid,
    pub publicacao: String,
    pub usuario_id: Uuid,
    pub nick: String,
    pub imagem: String,
    pub qtd_likes: i32,
    /// Only present when listing the posts of one author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qtd_comentarios: Option<u64>,
    pub criado_em: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicacaoListResponse {
    pub data: Vec<PublicacaoResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicacaoDetalheResponse {
    pub publicacao_id: Uuid,
    pub publicacao: String,
    pub usuario_id: Uuid,
    pub nick: String,
    pub imagem: String,
    pub qtd_likes: i32,
    pub criado_em: chrono::DateTime<chrono::Utc>,
    pub comentarios: Vec<ComentarioResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeletePublicacaoRequest {
    pub publicacao_id: Option<Uuid>,
    /// Falls back to the bearer token's user when omitted.
    pub usuario_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MensagemResponse {
    pub mensagem: String,
}
