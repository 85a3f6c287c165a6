//! Módulo core - Lógica central do tplnorm

pub mod config;
pub mod document;
pub mod element;
pub mod options;
pub mod pass;
pub mod pattern;
pub mod tpl;
pub mod utils;
