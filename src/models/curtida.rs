use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CurtidaPublicacaoRequest {
    pub publicacao_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CurtidaComentarioRequest {
    pub comentario_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurtidasResponse {
    pub qtd_likes: i32,
}
