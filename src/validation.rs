//! Request checks shared by the services. Each one is pure and returns the
//! `ApiError` the client should see.

use crate::error::{ApiError, ApiResult};
use chrono::NaiveDate;
use uuid::Uuid;

pub const CAMPOS_OBRIGATORIOS: &str = "Todos os campos são obrigatórios";
pub const IDADE_MINIMA: u32 = 16;

/// Trimmed value of an optional text field, `None` when absent or blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub fn required<T>(value: Option<T>) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::bad_request(CAMPOS_OBRIGATORIOS))
}

pub fn parse_nascimento(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request("Data de nascimento inválida, use AAAA-MM-DD"))
}

/// Full years between `nascimento` and `hoje` must reach `IDADE_MINIMA`.
pub fn check_idade_minima(nascimento: NaiveDate, hoje: NaiveDate) -> ApiResult<()> {
    match hoje.years_since(nascimento) {
        Some(anos) if anos >= IDADE_MINIMA => Ok(()),
        _ => Err(ApiError::bad_request(format!(
            "A idade deve ser maior que {} anos",
            IDADE_MINIMA
        ))),
    }
}

pub fn ensure_autor(autor_id: Uuid, requisitante_id: Uuid) -> ApiResult<()> {
    if autor_id != requisitante_id {
        return Err(ApiError::forbidden("Usuário não autorizado"));
    }
    Ok(())
}
