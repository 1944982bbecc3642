//! 类型化的查询选择器
//!
//! 只支持后代组合：`textModule text` 表示所有祖先中有 `textModule` 的 `text` 元素

use super::node::Element;

/// 属性过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrFilter {
    /// 属性值等于给定值
    Equals(String, String),
    /// 属性值属于给定集合
    OneOf(String, Vec<String>),
}

impl AttrFilter {
    fn matches(&self, element: &Element) -> bool {
        match self {
            AttrFilter::Equals(name, value) => element.attr(name) == Some(value.as_str()),
            AttrFilter::OneOf(name, values) => element
                .attr(name)
                .map(|actual| values.iter().any(|v| v == actual))
                .unwrap_or(false),
        }
    }
}

/// 选择器中的一步：标签名 + 属性过滤
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    tag: String,
    filters: Vec<AttrFilter>,
}

impl Step {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            filters: Vec::new(),
        }
    }

    /// 要求属性等于给定值
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters
            .push(AttrFilter::Equals(name.into(), value.into()));
        self
    }

    /// 要求属性属于给定集合
    pub fn with_attr_in<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.push(AttrFilter::OneOf(
            name.into(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.name == self.tag && self.filters.iter().all(|f| f.matches(element))
    }
}

impl From<&str> for Step {
    fn from(tag: &str) -> Self {
        Step::new(tag)
    }
}

/// 后代组合选择器
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由标签路径构建，不带属性过滤
    pub fn path<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        Self {
            steps: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// 追加一个后代步骤
    pub fn then(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// 判断元素在给定祖先链下是否命中
    ///
    /// `ancestors` 从外到内排列，最后一个是 `element` 的父元素
    pub(crate) fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((last, rest)) = self.steps.split_last() else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }

        // 纯后代组合下，自内向外贪心匹配即可
        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match remaining.peek() {
                Some(step) if step.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }
}
