// Integration tests for the REST API.
// Each test gets its own in-memory SQLite database, so no server is needed.
// Run with: cargo test --test api_test

use actix_web::{http::StatusCode, test, web, App};
use chrono::{Duration, Utc};
use futures::future::join_all;
use rede_social_api::{
    api,
    config::{Config, DatabaseConfig, JwtConfig, ServerConfig},
    db,
    models::{
        ComentarioListResponse, CreateComentarioResponse, CreatePublicacaoResponse,
        CreateSeguidorResponse, CurtidasResponse, LoginResponse, MensagemResponse,
        PublicacaoDetalheResponse, PublicacaoListResponse, SeguidorListResponse,
        UsuarioResponse,
    },
    services::usuarios::IMAGEM_PADRAO,
};
use serde_json::{json, Value};
use uuid::Uuid;

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
        },
        database: DatabaseConfig {
            url: Some("sqlite::memory:".to_string()),
            dialect: "sqlite".to_string(),
            host: String::new(),
            port: 0,
            user: String::new(),
            password: String::new(),
            name: String::new(),
            // One connection keeps every query on the same in-memory database
            max_connections: 1,
        },
    }
}

/// Helper function to create a test app backed by a fresh database
async fn create_test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = test_config();
    let pool = db::create_pool(&config)
        .await
        .expect("Failed to create database pool");

    App::new()
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(pool))
        .configure(api::configure)
}

fn usuario_json(nick: &str) -> Value {
    json!({
        "nome": format!("Usuário {}", nick),
        "email": format!("{}@example.com", nick),
        "senha": "senha123",
        "nascimento": "1995-03-10",
        "nick": nick
    })
}

macro_rules! create_usuario {
    ($app:expr, $nick:expr) => {{
        let req = test::TestRequest::post()
            .uri("/usuarios")
            .set_json(usuario_json($nick))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let usuario: UsuarioResponse = test::read_body_json(resp).await;
        usuario
    }};
}

macro_rules! create_publicacao {
    ($app:expr, $usuario_id:expr, $texto:expr) => {{
        let req = test::TestRequest::post()
            .uri("/publicacoes")
            .set_json(json!({ "usuario_id": $usuario_id, "publicacao": $texto }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: CreatePublicacaoResponse = test::read_body_json(resp).await;
        body.publicacao_id
    }};
}

macro_rules! create_comentario {
    ($app:expr, $publicacao_id:expr, $usuario_id:expr, $texto:expr) => {{
        let req = test::TestRequest::post()
            .uri("/comentarios")
            .set_json(json!({
                "publicacao_id": $publicacao_id,
                "usuario_id": $usuario_id,
                "comentario": $texto
            }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: CreateComentarioResponse = test::read_body_json(resp).await;
        body.comentario_id
    }};
}

#[actix_web::test]
async fn test_create_usuario() {
    let app = test::init_service(create_test_app().await).await;

    let usuario = create_usuario!(&app, "ana");
    assert_eq!(usuario.nick, "ana");
    assert_eq!(usuario.email, "ana@example.com");
    assert_eq!(usuario.nome, "Usuário ana");
    assert_eq!(usuario.imagem, IMAGEM_PADRAO);
    assert_eq!(usuario.nascimento.to_string(), "1995-03-10");
}

#[actix_web::test]
async fn test_create_usuario_missing_field() {
    let app = test::init_service(create_test_app().await).await;

    for field in ["nome", "email", "senha", "nascimento", "nick"] {
        let mut body = usuario_json("bia");
        body.as_object_mut().unwrap().remove(field);

        let req = test::TestRequest::post()
            .uri("/usuarios")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "Missing {} should return 400",
            field
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["erro"], "Todos os campos são obrigatórios");
    }
}

#[actix_web::test]
async fn test_create_usuario_underage() {
    let app = test::init_service(create_test_app().await).await;

    let nascimento = (Utc::now().date_naive() - Duration::days(365 * 10))
        .format("%Y-%m-%d")
        .to_string();
    let mut body = usuario_json("kid");
    body["nascimento"] = json!(nascimento);

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "A idade deve ser maior que 16 anos");
}

#[actix_web::test]
async fn test_create_usuario_duplicate_email_and_nick() {
    let app = test::init_service(create_test_app().await).await;

    create_usuario!(&app, "caio");

    // Same email, different nick
    let mut body = usuario_json("caio2");
    body["email"] = json!("caio@example.com");
    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Email já está em uso");

    // Same nick, different email
    let mut body = usuario_json("caio");
    body["email"] = json!("outro@example.com");
    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Nick já está em uso");
}

#[actix_web::test]
async fn test_list_and_get_usuarios() {
    let app = test::init_service(create_test_app().await).await;

    let dani = create_usuario!(&app, "dani");
    create_usuario!(&app, "edu");

    let req = test::TestRequest::get().uri("/usuarios").to_request();
    let usuarios: Vec<UsuarioResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(usuarios.len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/usuarios/{}", dani.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: UsuarioResponse = test::read_body_json(resp).await;
    assert_eq!(found.id, dani.id);
    assert_eq!(found.nick, "dani");

    let req = test::TestRequest::get()
        .uri(&format!("/usuarios/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/usuarios/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_usuario() {
    let app = test::init_service(create_test_app().await).await;

    let fabi = create_usuario!(&app, "fabi");
    create_usuario!(&app, "gabi");

    // No fields
    let req = test::TestRequest::patch()
        .uri(&format!("/usuarios/{}", fabi.id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nick taken by someone else
    let req = test::TestRequest::patch()
        .uri(&format!("/usuarios/{}", fabi.id))
        .set_json(json!({ "nick": "gabi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Nick já está em uso");

    // Keeping the own email is not a conflict
    let req = test::TestRequest::patch()
        .uri(&format!("/usuarios/{}", fabi.id))
        .set_json(json!({
            "nome": "Fabiana",
            "email": "fabi@example.com",
            "nick": "fabiana"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: UsuarioResponse = test::read_body_json(resp).await;
    assert_eq!(updated.nome, "Fabiana");
    assert_eq!(updated.nick, "fabiana");
    assert_eq!(updated.email, "fabi@example.com");

    let req = test::TestRequest::patch()
        .uri(&format!("/usuarios/{}", Uuid::new_v4()))
        .set_json(json!({ "nome": "Ninguém" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_login() {
    let app = test::init_service(create_test_app().await).await;

    let hugo = create_usuario!(&app, "hugo");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "hugo@example.com", "senha": "senha123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: LoginResponse = test::read_body_json(resp).await;
    assert!(!body.token.is_empty(), "Token should not be empty");
    assert_eq!(body.usuario.id, hugo.id);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "hugo@example.com", "senha": "errada" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "ninguem@example.com", "senha": "senha123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_publicacao_validation() {
    let app = test::init_service(create_test_app().await).await;

    let ines = create_usuario!(&app, "ines");

    let req = test::TestRequest::post()
        .uri("/publicacoes")
        .set_json(json!({ "usuario_id": ines.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/publicacoes")
        .set_json(json!({ "usuario_id": Uuid::new_v4(), "publicacao": "Olá" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Usuário não encontrado");

    let req = test::TestRequest::post()
        .uri("/publicacoes")
        .set_json(json!({ "usuario_id": "not-a-uuid", "publicacao": "Olá" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_publicacoes() {
    let app = test::init_service(create_test_app().await).await;

    let joao = create_usuario!(&app, "joao");
    let kate = create_usuario!(&app, "kate");
    let primeira = create_publicacao!(&app, joao.id, "Primeira");
    create_publicacao!(&app, joao.id, "Segunda");
    create_publicacao!(&app, kate.id, "Da Kate");
    create_comentario!(&app, primeira, kate.id, "Legal");

    let req = test::TestRequest::get().uri("/publicacoes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: PublicacaoListResponse = test::read_body_json(resp).await;
    assert_eq!(body.total, 3);
    assert_eq!(body.data.len(), 3);
    assert!(body
        .data
        .iter()
        .all(|p| p.imagem == IMAGEM_PADRAO && (p.nick == "joao" || p.nick == "kate")));

    let req = test::TestRequest::get()
        .uri(&format!("/publicacoes/de/{}", joao.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: PublicacaoListResponse = test::read_body_json(resp).await;
    assert_eq!(body.total, 2);
    assert!(body.data.iter().all(|p| p.usuario_id == joao.id));
    let com_comentario = body
        .data
        .iter()
        .find(|p| p.publicacao_id == primeira)
        .expect("first post should be listed");
    assert_eq!(com_comentario.qtd_comentarios, Some(1));

    let req = test::TestRequest::get()
        .uri(&format!("/publicacoes/de/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_get_publicacao_with_comentarios() {
    let app = test::init_service(create_test_app().await).await;

    let leo = create_usuario!(&app, "leo");
    let mia = create_usuario!(&app, "mia");
    let publicacao_id = create_publicacao!(&app, leo.id, "Post do Leo");

    create_comentario!(&app, publicacao_id, mia.id, "Um");
    create_comentario!(&app, publicacao_id, leo.id, "Dois");
    create_comentario!(&app, publicacao_id, mia.id, "Três");

    let req = test::TestRequest::get()
        .uri(&format!("/comentarios?publicacao_id={}", publicacao_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ComentarioListResponse = test::read_body_json(resp).await;
    assert_eq!(body.total, 3);
    assert_eq!(body.data.len(), 3);
    for comentario in &body.data {
        let expected = if comentario.usuario_id == mia.id { "mia" } else { "leo" };
        assert_eq!(comentario.nick, expected);
        assert_eq!(comentario.imagem, IMAGEM_PADRAO);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/publicacoes/{}", publicacao_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let detalhe: PublicacaoDetalheResponse = test::read_body_json(resp).await;
    assert_eq!(detalhe.publicacao, "Post do Leo");
    assert_eq!(detalhe.nick, "leo");
    assert_eq!(detalhe.qtd_likes, 0);
    assert_eq!(detalhe.comentarios.len(), 3);

    let req = test::TestRequest::get()
        .uri(&format!("/publicacoes/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_comentarios_requires_publicacao() {
    let app = test::init_service(create_test_app().await).await;

    let req = test::TestRequest::get().uri("/comentarios").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Publicação não informada");
}

#[actix_web::test]
async fn test_create_comentario_validation() {
    let app = test::init_service(create_test_app().await).await;

    let nina = create_usuario!(&app, "nina");
    let publicacao_id = create_publicacao!(&app, nina.id, "Post");

    let req = test::TestRequest::post()
        .uri("/comentarios")
        .set_json(json!({ "publicacao_id": publicacao_id, "usuario_id": nina.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/comentarios")
        .set_json(json!({
            "publicacao_id": Uuid::new_v4(),
            "usuario_id": nina.id,
            "comentario": "Oi"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Publicação não encontrada");
}

#[actix_web::test]
async fn test_curtir_publicacao() {
    let app = test::init_service(create_test_app().await).await;

    let otto = create_usuario!(&app, "otto");
    let publicacao_id = create_publicacao!(&app, otto.id, "Curta isto");

    for expected in 1..=5 {
        let req = test::TestRequest::post()
            .uri("/curtidas/publicacao")
            .set_json(json!({ "publicacao_id": publicacao_id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: CurtidasResponse = test::read_body_json(resp).await;
        assert_eq!(body.qtd_likes, expected);
    }

    // Unliking more often than liked stops at zero
    let mut last = -1;
    for _ in 0..7 {
        let req = test::TestRequest::delete()
            .uri("/curtidas/publicacao")
            .set_json(json!({ "publicacao_id": publicacao_id }))
            .to_request();
        let body: CurtidasResponse = test::call_and_read_body_json(&app, req).await;
        last = body.qtd_likes;
        assert!(body.qtd_likes >= 0);
    }
    assert_eq!(last, 0);
}

#[actix_web::test]
async fn test_curtida_validation() {
    let app = test::init_service(create_test_app().await).await;

    let req = test::TestRequest::post()
        .uri("/curtidas/publicacao")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Todos os campos são obrigatórios");

    let req = test::TestRequest::post()
        .uri("/curtidas/comentario")
        .set_json(json!({ "comentario_id": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Comentário não encontrado");

    let req = test::TestRequest::delete()
        .uri("/curtidas/publicacao")
        .set_json(json!({ "publicacao_id": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_concurrent_curtidas_comentario() {
    let app = test::init_service(create_test_app().await).await;

    let paulo = create_usuario!(&app, "paulo");
    let publicacao_id = create_publicacao!(&app, paulo.id, "Post");
    let comentario_id = create_comentario!(&app, publicacao_id, paulo.id, "Comentário");

    let responses = join_all((0..10).map(|_| {
        let req = test::TestRequest::post()
            .uri("/curtidas/comentario")
            .set_json(json!({ "comentario_id": comentario_id }))
            .to_request();
        test::call_service(&app, req)
    }))
    .await;
    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));

    let req = test::TestRequest::get()
        .uri(&format!("/comentarios?publicacao_id={}", publicacao_id))
        .to_request();
    let body: ComentarioListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data[0].qtd_likes, 10);

    let req = test::TestRequest::delete()
        .uri("/curtidas/comentario")
        .set_json(json!({ "comentario_id": comentario_id }))
        .to_request();
    let body: CurtidasResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.qtd_likes, 9);
}

#[actix_web::test]
async fn test_concurrent_create_usuario_same_email() {
    let app = test::init_service(create_test_app().await).await;

    let responses = join_all(["vera", "vera2", "vera3", "vera4"].into_iter().map(|nick| {
        let mut body = usuario_json(nick);
        body["email"] = json!("vera@example.com");
        let req = test::TestRequest::post()
            .uri("/usuarios")
            .set_json(body)
            .to_request();
        test::call_service(&app, req)
    }))
    .await;

    let mut created = 0;
    for resp in responses {
        if resp.status() == StatusCode::CREATED {
            created += 1;
            continue;
        }
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["erro"], "Email já está em uso");
    }
    assert_eq!(created, 1);

    let req = test::TestRequest::get().uri("/usuarios").to_request();
    let usuarios: Vec<UsuarioResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(usuarios.len(), 1);
}

#[actix_web::test]
async fn test_delete_publicacao() {
    let app = test::init_service(create_test_app().await).await;

    let rita = create_usuario!(&app, "rita");
    let saulo = create_usuario!(&app, "saulo");
    let publicacao_id = create_publicacao!(&app, rita.id, "Da Rita");
    create_comentario!(&app, publicacao_id, saulo.id, "Oi Rita");

    // Not the author
    let req = test::TestRequest::delete()
        .uri("/publicacoes")
        .set_json(json!({ "publicacao_id": publicacao_id, "usuario_id": saulo.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri(&format!("/publicacoes/{}", publicacao_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Row must survive a 403");

    // No user at all
    let req = test::TestRequest::delete()
        .uri("/publicacoes")
        .set_json(json!({ "publicacao_id": publicacao_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Usuário não informado");

    // Author
    let req = test::TestRequest::delete()
        .uri("/publicacoes")
        .set_json(json!({ "publicacao_id": publicacao_id, "usuario_id": rita.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MensagemResponse = test::read_body_json(resp).await;
    assert_eq!(body.mensagem, "Publicação deletada com sucesso");

    let req = test::TestRequest::get()
        .uri(&format!("/publicacoes/{}", publicacao_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/comentarios?publicacao_id={}", publicacao_id))
        .to_request();
    let body: ComentarioListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 0, "Comments go away with their post");

    let req = test::TestRequest::delete()
        .uri("/publicacoes")
        .set_json(json!({ "publicacao_id": publicacao_id, "usuario_id": rita.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_publicacao_with_token() {
    let app = test::init_service(create_test_app().await).await;

    let tina = create_usuario!(&app, "tina");
    let publicacao_id = create_publicacao!(&app, tina.id, "Com token");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "tina@example.com", "senha": "senha123" }))
        .to_request();
    let login: LoginResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri("/publicacoes")
        .insert_header(("Authorization", format!("Bearer {}", login.token)))
        .set_json(json!({ "publicacao_id": publicacao_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_comentario() {
    let app = test::init_service(create_test_app().await).await;

    let ugo = create_usuario!(&app, "ugo");
    let vera = create_usuario!(&app, "vera");
    let publicacao_id = create_publicacao!(&app, ugo.id, "Post");
    let comentario_id = create_comentario!(&app, publicacao_id, vera.id, "Da Vera");

    let req = test::TestRequest::delete()
        .uri("/comentarios")
        .set_json(json!({ "comentario_id": comentario_id, "usuario_id": ugo.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri("/comentarios")
        .set_json(json!({ "comentario_id": comentario_id, "usuario_id": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Usuário não encontrado");

    let req = test::TestRequest::delete()
        .uri("/comentarios")
        .set_json(json!({ "comentario_id": comentario_id, "usuario_id": vera.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri("/comentarios")
        .set_json(json!({ "comentario_id": comentario_id, "usuario_id": vera.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["erro"], "Comentário não encontrado");
}

#[actix_web::test]
async fn test_seguidores() {
    let app = test::init_service(create_test_app().await).await;

    let will = create_usuario!(&app, "will");
    let xena = create_usuario!(&app, "xena");
    let yuri = create_usuario!(&app, "yuri");

    for seguidor in [&xena, &yuri] {
        let req = test::TestRequest::post()
            .uri("/seguidores")
            .set_json(json!({ "usuario_id": will.id, "seguidor_id": seguidor.id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let _link: CreateSeguidorResponse = test::read_body_json(resp).await;
    }

    // Following twice
    let req = test::TestRequest::post()
        .uri("/seguidores")
        .set_json(json!({ "usuario_id": will.id, "seguidor_id": xena.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Following oneself
    let req = test::TestRequest::post()
        .uri("/seguidores")
        .set_json(json!({ "usuario_id": will.id, "seguidor_id": will.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/usuarios/{}/seguidores", will.id))
        .to_request();
    let body: SeguidorListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 2);
    let nicks: Vec<&str> = body.data.iter().map(|s| s.nick.as_str()).collect();
    assert_eq!(nicks, vec!["xena", "yuri"]);

    let req = test::TestRequest::get()
        .uri(&format!("/usuarios/{}/seguindo", xena.id))
        .to_request();
    let body: SeguidorListResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.total, 1);
    assert_eq!(body.data[0].usuario_id, will.id);

    let req = test::TestRequest::delete()
        .uri("/seguidores")
        .set_json(json!({ "usuario_id": will.id, "seguidor_id": xena.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri("/seguidores")
        .set_json(json!({ "usuario_id": will.id, "seguidor_id": xena.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/usuarios/{}/seguidores", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
