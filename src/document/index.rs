//! 文档索引
//!
//! 在解析后的文档树上提供只读查询能力

use std::ops::ControlFlow;

use super::node::{Document, Element, Node};
use super::selector::Selector;

/// 文档索引
///
/// 职责：
/// - 持有文档树的只读引用
/// - 按文档顺序返回选择器命中的元素
/// - 不认识任何抽取策略
#[derive(Debug, Clone, Copy)]
pub struct DocumentIndex<'d> {
    document: &'d Document,
}

impl<'d> DocumentIndex<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self { document }
    }

    /// 整个文档中所有命中的元素（文档顺序）
    pub fn find_all(&self, selector: &Selector) -> Vec<&'d Element> {
        let root = self.document.root();
        let mut out = Vec::new();
        if selector.matches(root, &[]) {
            out.push(root);
        }
        walk(root, selector, |element| {
            out.push(element);
            ControlFlow::Continue(())
        });
        out
    }

    /// 整个文档中第一个命中的元素，命中即停止遍历
    pub fn find_first(&self, selector: &Selector) -> Option<&'d Element> {
        let root = self.document.root();
        if selector.matches(root, &[]) {
            return Some(root);
        }
        first_in(root, selector)
    }

    /// `scope` 的后代中所有命中的元素，祖先匹配最多追溯到 `scope` 本身
    pub fn find_all_in(&self, scope: &'d Element, selector: &Selector) -> Vec<&'d Element> {
        let mut out = Vec::new();
        walk(scope, selector, |element| {
            out.push(element);
            ControlFlow::Continue(())
        });
        out
    }

    /// `scope` 的后代中第一个命中的元素
    pub fn find_first_in(&self, scope: &'d Element, selector: &Selector) -> Option<&'d Element> {
        first_in(scope, selector)
    }

    /// 元素的原始文本内容（不重新转义）
    pub fn text_of(&self, element: &Element) -> String {
        element.text()
    }

    /// 元素的属性值
    pub fn attr<'e>(&self, element: &'e Element, name: &str) -> Option<&'e str> {
        element.attr(name)
    }
}

fn first_in<'d>(scope: &'d Element, selector: &Selector) -> Option<&'d Element> {
    let mut found = None;
    walk(scope, selector, |element| {
        found = Some(element);
        ControlFlow::Break(())
    });
    found
}

/// 先序遍历 `scope` 的后代，对每个命中的元素调用 `visit`
///
/// 使用显式栈遍历，`ancestors` 始终以当前元素的父元素结尾
fn walk<'d, F>(scope: &'d Element, selector: &Selector, mut visit: F)
where
    F: FnMut(&'d Element) -> ControlFlow<()>,
{
    let mut ancestors: Vec<&'d Element> = vec![scope];
    let mut cursors: Vec<std::slice::Iter<'d, Node>> = vec![scope.children.iter()];

    while let Some(cursor) = cursors.last_mut() {
        match cursor.next() {
            Some(Node::Element(element)) => {
                if selector.matches(element, &ancestors) && visit(element).is_break() {
                    return;
                }
                ancestors.push(element);
                cursors.push(element.children.iter());
            }
            Some(Node::Text(_)) => {}
            None => {
                cursors.pop();
                ancestors.pop();
            }
        }
    }
}
