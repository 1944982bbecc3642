//! 文档层
//!
//! - `node` - 不可变文档树（元素 / 文本）
//! - `parser` - XML → 文档树
//! - `selector` - 类型化查询选择器
//! - `index` - 只读查询能力

pub mod index;
pub mod node;
pub mod parser;
pub mod selector;

pub use index::DocumentIndex;
pub use node::{Document, Element, Node};
pub use parser::MAX_DEPTH;
pub use selector::{AttrFilter, Selector, Step};
