use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// `seguidor_id` follows (or stops following) `usuario_id`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SeguidorRequest {
    pub usuario_id: Option<Uuid>,
    pub seguidor_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSeguidorResponse {
    pub seguidor_link_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeguidorResponse {
    pub usuario_id: Uuid,
    pub nick: String,
    pub imagem: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeguidorListResponse {
    pub data: Vec<SeguidorResponse>,
    pub total: usize,
}
