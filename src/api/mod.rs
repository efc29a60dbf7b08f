pub mod auth;
pub mod comentarios;
pub mod curtidas;
pub mod publicacoes;
pub mod seguidores;
pub mod usuarios;

use crate::error::ApiError;
use crate::models::{
    ComentarioListResponse, ComentarioResponse, CreateComentarioRequest,
    CreateComentarioResponse, CreatePublicacaoRequest, CreatePublicacaoResponse,
    CreateSeguidorResponse, CreateUsuarioRequest, CurtidaComentarioRequest,
    CurtidaPublicacaoRequest, CurtidasResponse, DeleteComentarioRequest,
    DeletePublicacaoRequest, LoginRequest, LoginResponse, MensagemResponse,
    PublicacaoDetalheResponse, PublicacaoListResponse, PublicacaoResponse,
    SeguidorListResponse, SeguidorRequest, SeguidorResponse, UpdateUsuarioRequest,
    UsuarioResponse,
};
use actix_web::web;
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Usuários
        usuarios::create_usuario,
        usuarios::list_usuarios,
        usuarios::get_usuario,
        usuarios::update_usuario,
        auth::login,
        // Publicações
        publicacoes::create_publicacao,
        publicacoes::list_publicacoes,
        publicacoes::list_publicacoes_de_usuario,
        publicacoes::get_publicacao,
        publicacoes::delete_publicacao,
        // Comentários
        comentarios::create_comentario,
        comentarios::list_comentarios,
        comentarios::delete_comentario,
        // Curtidas
        curtidas::curtir_publicacao,
        curtidas::descurtir_publicacao,
        curtidas::curtir_comentario,
        curtidas::descurtir_comentario,
        // Seguidores
        seguidores::seguir,
        seguidores::deixar_de_seguir,
        seguidores::list_seguidores,
        seguidores::list_seguindo,
    ),
    components(schemas(
        CreateUsuarioRequest,
        UpdateUsuarioRequest,
        UsuarioResponse,
        LoginRequest,
        LoginResponse,
        CreatePublicacaoRequest,
        CreatePublicacaoResponse,
        PublicacaoResponse,
        PublicacaoListResponse,
        PublicacaoDetalheResponse,
        DeletePublicacaoRequest,
        MensagemResponse,
        CreateComentarioRequest,
        CreateComentarioResponse,
        ComentarioResponse,
        ComentarioListResponse,
        DeleteComentarioRequest,
        CurtidaPublicacaoRequest,
        CurtidaComentarioRequest,
        CurtidasResponse,
        SeguidorRequest,
        CreateSeguidorResponse,
        SeguidorResponse,
        SeguidorListResponse,
    )),
    tags(
        (name = "usuarios", description = "Cadastro e consulta de usuários"),
        (name = "auth", description = "Login"),
        (name = "publicacoes", description = "Publicações"),
        (name = "comentarios", description = "Comentários em publicações"),
        (name = "curtidas", description = "Curtidas em publicações e comentários"),
        (name = "seguidores", description = "Relações de seguidores"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

/// Registers every route plus the extractor configs that turn malformed
/// bodies, queries and path ids into `{"erro": ...}` responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        ApiError::bad_request("Corpo da requisição inválido").into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {}", err);
        ApiError::bad_request("Parâmetros da consulta inválidos").into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected path parameter: {}", err);
        ApiError::not_found("Recurso não encontrado").into()
    }))
    .route("/login", web::post().to(auth::login))
    .service(
        web::scope("/usuarios")
            .route("", web::post().to(usuarios::create_usuario))
            .route("", web::get().to(usuarios::list_usuarios))
            .route("/{usuario_id}", web::get().to(usuarios::get_usuario))
            .route("/{usuario_id}", web::patch().to(usuarios::update_usuario))
            .route(
                "/{usuario_id}/seguidores",
                web::get().to(seguidores::list_seguidores),
            )
            .route(
                "/{usuario_id}/seguindo",
                web::get().to(seguidores::list_seguindo),
            ),
    )
    .service(
        web::scope("/publicacoes")
            .route("", web::post().to(publicacoes::create_publicacao))
            .route("", web::get().to(publicacoes::list_publicacoes))
            .route("", web::delete().to(publicacoes::delete_publicacao))
            .route(
                "/de/{usuario_id}",
                web::get().to(publicacoes::list_publicacoes_de_usuario),
            )
            .route("/{publicacao_id}", web::get().to(publicacoes::get_publicacao)),
    )
    .service(
        web::scope("/comentarios")
            .route("", web::post().to(comentarios::create_comentario))
            .route("", web::get().to(comentarios::list_comentarios))
            .route("", web::delete().to(comentarios::delete_comentario)),
    )
    .service(
        web::scope("/curtidas")
            .route("/publicacao", web::post().to(curtidas::curtir_publicacao))
            .route("/publicacao", web::delete().to(curtidas::descurtir_publicacao))
            .route("/comentario", web::post().to(curtidas::curtir_comentario))
            .route("/comentario", web::delete().to(curtidas::descurtir_comentario)),
    )
    .service(
        web::scope("/seguidores")
            .route("", web::post().to(seguidores::seguir))
            .route("", web::delete().to(seguidores::deixar_de_seguir)),
    );
}
