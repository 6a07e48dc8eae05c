pub mod configuraciones;
pub mod numeros;
pub mod organizadores;
pub mod premios;
pub mod sorteos;
pub mod sorteos_organizadores;
pub mod usuarios;

pub use configuraciones as configuracion_entity;
pub use numeros as numero_entity;
pub use organizadores as organizador_entity;
pub use premios as premio_entity;
pub use sorteos as sorteo_entity;
pub use sorteos_organizadores as sorteo_organizador_entity;
pub use usuarios as usuario_entity;

pub use numeros::EstadoNumero;
