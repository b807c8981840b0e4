// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod text;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// テキスト操作関連
pub use text::{CountingTextOps, EchoTextOps, counting_registry};
