//! # ミドルウェア
//!
//! - `request_id`: 受信した Request ID を Prompt Service への呼び出しに伝播する

pub mod request_id;

pub use request_id::{current_request_id, inject_request_id, store_request_id};
