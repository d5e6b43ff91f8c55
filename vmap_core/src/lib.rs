//! # vmap_core
//!
//! VMAP/VAST 广告编排文档的核心类型：文档模型、两种嵌入式标量
//! （[`Duration`] 和 [`TimeOffset`]）的编解码器、错误类型和读写选项。
//!
//! ```rust
//! use vmap_core::{Duration, ScalarCodec, TimeOffset};
//!
//! let offset = TimeOffset::decode("00:01:30.500").unwrap();
//! assert_eq!(offset, TimeOffset::Duration(Duration::from_millis(90_500)));
//! assert_eq!(offset.encode(), "00:01:30.500");
//!
//! assert_eq!(TimeOffset::decode("50%").unwrap(), TimeOffset::Percent(0.5));
//! assert!(Duration::decode("90").is_err());
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod io;
pub mod model;

pub use codec::{Anchor, Duration, OFFSET_END, OFFSET_START, ScalarCodec, TimeOffset};
pub use config::*;
pub use error::*;
pub use io::*;
pub use model::*;
