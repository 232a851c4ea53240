//! Типы, общие для панели партнёра и API сервера заказов.

pub mod domain;
pub mod system;
