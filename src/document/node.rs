//! 文档树节点
//!
//! 解析后的文档是一棵不可变的节点树：元素节点或文本节点

/// 文档树节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// 元素节点
    Element(Element),
    /// 文本节点（CDATA 原样保留，实体引用已解析）
    Text(String),
}

impl Node {
    /// 如果是元素节点，返回元素引用
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

/// 元素节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// 标签名
    pub name: String,
    /// 按文档顺序排列的属性
    pub attributes: Vec<(String, String)>,
    /// 按文档顺序排列的子节点
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// 获取属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 子元素迭代器（跳过文本节点）
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// 元素的全部文本内容：按文档顺序拼接所有后代文本节点
    pub fn text(&self) -> String {
        let mut buf = String::new();
        let mut cursors = vec![self.children.iter()];
        while let Some(cursor) = cursors.last_mut() {
            match cursor.next() {
                Some(Node::Text(text)) => buf.push_str(text),
                Some(Node::Element(element)) => cursors.push(element.children.iter()),
                None => {
                    cursors.pop();
                }
            }
        }
        buf
    }
}

/// 解析后的文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// 根元素
    pub fn root(&self) -> &Element {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_concatenates_descendants_in_order() {
        let mut inner = Element::new("b");
        inner.children.push(Node::Text("Answer".to_string()));
        let mut outer = Element::new("text");
        outer.children.push(Node::Text("<p>".to_string()));
        outer.children.push(Node::Element(inner));
        outer.children.push(Node::Text(" Key".to_string()));

        assert_eq!(outer.text(), "<p>Answer Key");
    }

    #[test]
    fn test_attr_lookup() {
        let mut element = Element::new("addonModule");
        element
            .attributes
            .push(("addonId".to_string(), "TrueFalse".to_string()));

        assert_eq!(element.attr("addonId"), Some("TrueFalse"));
        assert_eq!(element.attr("id"), None);
    }
}
