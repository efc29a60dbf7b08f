pub mod comentarios;
pub mod curtidas;
pub mod publicacoes;
pub mod seguidores;
pub mod usuarios;
