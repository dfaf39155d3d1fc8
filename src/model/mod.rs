pub mod asistencia;
pub mod usuario;
