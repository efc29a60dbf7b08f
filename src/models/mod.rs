pub mod comentario;
pub mod curtida;
pub mod publicacao;
pub mod seguidor;
pub mod usuario;

pub use comentario::*;
pub use curtida::*;
pub use publicacao::*;
pub use seguidor::*;
pub use usuario::*;
