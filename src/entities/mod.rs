pub mod comentario;
pub mod publicacao;
pub mod seguidor;
pub mod usuario;
