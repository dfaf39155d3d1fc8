pub mod asistencia;
pub mod usuarios;
