//! Contratos (DTOs) entre o frontend e o backend REST do Obreiro Digital.
//!
//! Tudo aqui espelha o formato JSON do backend (snake_case). Nenhuma regra de
//! negócio vive neste crate além de helpers de leitura.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
