use crate::auth::{hash_password, verify_password};
use crate::db::DbPool;
use crate::entities::usuario;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateUsuarioRequest, LoginRequest, UpdateUsuarioRequest};
use crate::validation::{check_idade_minima, parse_nascimento, present, CAMPOS_OBRIGATORIOS};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

pub const USUARIO_NAO_ENCONTRADO: &str = "Usuário não encontrado";
pub const IMAGEM_PADRAO: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS7mMNz8YCBvYmnr3BQUPX__YsC_WtDuAevwg&s";

const EMAIL_EM_USO: &str = "Email já está em uso";
const NICK_EM_USO: &str = "Nick já está em uso";
const CREDENCIAIS_INVALIDAS: &str = "Credenciais inválidas";

pub async fn create_usuario(db: &DbPool, req: &CreateUsuarioRequest) -> ApiResult<usuario::Model> {
    let (Some(nome), Some(email), Some(senha), Some(nascimento), Some(nick)) = (
        present(&req.nome),
        present(&req.email),
        present(&req.senha),
        present(&req.nascimento),
        present(&req.nick),
    ) else {
        return Err(ApiError::bad_request(CAMPOS_OBRIGATORIOS));
    };

    let nascimento = parse_nascimento(nascimento)?;
    check_idade_minima(nascimento, Utc::now().date_naive())?;

    if email_em_uso(db, email).await? {
        return Err(ApiError::bad_request(EMAIL_EM_USO));
    }
    if nick_em_uso(db, nick).await? {
        return Err(ApiError::bad_request(NICK_EM_USO));
    }

    let senha = hash_password(senha)?;

    let novo_usuario = usuario::ActiveModel {
        id: Set(Uuid::new_v4()),
        nome: Set(nome.to_string()),
        email: Set(email.to_string()),
        senha: Set(senha),
        nick: Set(nick.to_string()),
        nascimento: Set(nascimento),
        imagem: Set(IMAGEM_PADRAO.to_string()),
    };

    let usuario = match usuario::Entity::insert(novo_usuario)
        .exec_with_returning(db)
        .await
    {
        Ok(usuario) => usuario,
        Err(err) => return Err(conflito_unico(db, err, Some(email), Some(nick)).await),
    };

    log::info!("Created usuario {} ({})", usuario.id, usuario.nick);

    Ok(usuario)
}

pub async fn list_usuarios(db: &DbPool) -> ApiResult<Vec<usuario::Model>> {
    let usuarios = usuario::Entity::find()
        .order_by_asc(usuario::Column::Nick)
        .all(db)
        .await?;
    Ok(usuarios)
}

/// Looks the user up by primary key, 404 when absent.
pub async fn get_usuario(db: &DbPool, usuario_id: Uuid) -> ApiResult<usuario::Model> {
    usuario::Entity::find_by_id(usuario_id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(USUARIO_NAO_ENCONTRADO))
}

/// Same lookup for handlers that report a missing referenced user as 400.
pub async fn find_referenced_usuario(
    db: &DbPool,
    usuario_id: Uuid,
) -> ApiResult<usuario::Model> {
    usuario::Entity::find_by_id(usuario_id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::bad_request(USUARIO_NAO_ENCONTRADO))
}

pub async fn update_usuario(
    db: &DbPool,
    usuario_id: Uuid,
    req: &UpdateUsuarioRequest,
) -> ApiResult<usuario::Model> {
    let usuario = get_usuario(db, usuario_id).await?;

    let nome = present(&req.nome);
    let email = present(&req.email);
    let nick = present(&req.nick);

    if nome.is_none() && email.is_none() && nick.is_none() {
        return Err(ApiError::bad_request(
            "Pelo menos um campo deve ser fornecido para atualização",
        ));
    }

    let novo_email = email.filter(|email| *email != usuario.email);
    let novo_nick = nick.filter(|nick| *nick != usuario.nick);

    if let Some(email) = novo_email {
        if email_em_uso(db, email).await? {
            return Err(ApiError::bad_request(EMAIL_EM_USO));
        }
    }
    if let Some(nick) = novo_nick {
        if nick_em_uso(db, nick).await? {
            return Err(ApiError::bad_request(NICK_EM_USO));
        }
    }

    let mut active: usuario::ActiveModel = usuario.into();
    if let Some(nome) = nome {
        active.nome = Set(nome.to_string());
    }
    if let Some(email) = email {
        active.email = Set(email.to_string());
    }
    if let Some(nick) = nick {
        active.nick = Set(nick.to_string());
    }

    let usuario = match active.update(db).await {
        Ok(usuario) => usuario,
        Err(err) => return Err(conflito_unico(db, err, novo_email, novo_nick).await),
    };
    log::info!("Updated usuario {}", usuario.id);

    Ok(usuario)
}

/// Checks email and password, returning the matching user.
pub async fn authenticate(db: &DbPool, req: &LoginRequest) -> ApiResult<usuario::Model> {
    let (Some(email), Some(senha)) = (present(&req.email), present(&req.senha)) else {
        return Err(ApiError::bad_request(CAMPOS_OBRIGATORIOS));
    };

    let usuario = usuario::Entity::find()
        .filter(usuario::Column::Email.eq(email))
        .one(db)
        .await?
        .ok_or_else(|| ApiError::unauthorized(CREDENCIAIS_INVALIDAS))?;

    if !verify_password(senha, &usuario.senha)? {
        log::debug!("Wrong password for usuario {}", usuario.id);
        return Err(ApiError::unauthorized(CREDENCIAIS_INVALIDAS));
    }

    Ok(usuario)
}

async fn email_em_uso(db: &DbPool, email: &str) -> ApiResult<bool> {
    let existing = usuario::Entity::find()
        .filter(usuario::Column::Email.eq(email))
        .one(db)
        .await?;
    Ok(existing.is_some())
}

async fn nick_em_uso(db: &DbPool, nick: &str) -> ApiResult<bool> {
    let existing = usuario::Entity::find()
        .filter(usuario::Column::Nick.eq(nick))
        .one(db)
        .await?;
    Ok(existing.is_some())
}

/// Maps a unique-index violation from a write that raced past the checks
/// above back to the matching 400. Other errors pass through unchanged.
async fn conflito_unico(
    db: &DbPool,
    err: DbErr,
    email: Option<&str>,
    nick: Option<&str>,
) -> ApiError {
    if !matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return err.into();
    }
    log::debug!("Unique constraint violated on usuarios: {}", err);

    if let Some(email) = email {
        match email_em_uso(db, email).await {
            Ok(true) => return ApiError::bad_request(EMAIL_EM_USO),
            Ok(false) => {}
            Err(e) => return e,
        }
    }
    if let Some(nick) = nick {
        match nick_em_uso(db, nick).await {
            Ok(true) => return ApiError::bad_request(NICK_EM_USO),
            Ok(false) => {}
            Err(e) => return e,
        }
    }

    err.into()
}
