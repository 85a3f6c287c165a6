//! Módulo de comandos do tplnorm

pub mod check;
pub mod env;
pub mod transform;
