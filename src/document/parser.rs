//! XML 文档解析
//!
//! 基于 quick-xml 的事件流构建不可变文档树，只做定位内容所需的格式检查

use std::borrow::Cow;

use phf::phf_map;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::node::{Document, Element, Node};
use crate::error::ParseError;

/// 元素最大嵌套层数（根元素为第 1 层）
pub const MAX_DEPTH: usize = 512;

/// XML 预定义实体
static PREDEFINED_ENTITIES: phf::Map<&'static str, char> = phf_map! {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
};

impl Document {
    /// 从字节流解析文档（忽略 UTF-8 BOM）
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let content =
            std::str::from_utf8(strip_bom(bytes)).map_err(|e| ParseError::InvalidUtf8(e.to_string()))?;
        Self::parse(content)
    }

    /// 从字符串解析文档
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
        reader.config_mut().trim_text(false);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| ParseError::Syntax {
                position: reader.error_position() as u64,
                message: e.to_string(),
            })?;

            match event {
                Event::Start(e) => {
                    check_depth(&stack)?;
                    stack.push(element_from_start(&e)?);
                }
                Event::Empty(e) => {
                    check_depth(&stack)?;
                    let element = element_from_start(&e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let element = stack.pop().ok_or_else(|| ParseError::Syntax {
                        position: reader.buffer_position() as u64,
                        message: format!("多余的结束标签 </{}>", name),
                    })?;
                    if element.name != name {
                        return Err(ParseError::MismatchedTag {
                            expected: element.name,
                            found: name,
                        });
                    }
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(e) => {
                    let raw = String::from_utf8_lossy(&e);
                    let text = unescape_text(&raw)?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(e) => {
                    let raw = String::from_utf8_lossy(&e);
                    push_text(&mut stack, &raw)?;
                }
                Event::GeneralRef(e) => {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    let resolved = resolve_entity(&entity)
                        .ok_or_else(|| ParseError::UnknownEntity(entity.to_string()))?;
                    push_text(&mut stack, resolved.encode_utf8(&mut [0u8; 4]))?;
                }
                Event::Eof => break,
                // 声明、注释、处理指令、DOCTYPE 与内容定位无关
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(ParseError::UnclosedElement(open.name));
        }

        root.map(Document::new).ok_or(ParseError::MissingRoot)
    }
}

/// 新元素将位于第 `stack.len() + 1` 层
fn check_depth(stack: &[Element]) -> Result<(), ParseError> {
    if stack.len() >= MAX_DEPTH {
        return Err(ParseError::TooDeep(MAX_DEPTH));
    }
    Ok(())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, ParseError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::Syntax {
            position: 0,
            message: format!("属性格式错误 <{}>: {}", element.name, e),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        let value = unescape_text(&raw)?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

/// 将闭合的元素挂到父元素下，没有父元素时成为根元素
fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_some() => return Err(ParseError::MultipleRoots(element.name)),
        None => *root = Some(element),
    }
    Ok(())
}

/// 追加文本，与前一个文本节点合并
fn push_text(stack: &mut [Element], text: &str) -> Result<(), ParseError> {
    let Some(parent) = stack.last_mut() else {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(ParseError::TextOutsideRoot);
    };

    if text.is_empty() {
        return Ok(());
    }

    match parent.children.last_mut() {
        Some(Node::Text(existing)) => existing.push_str(text),
        _ => parent.children.push(Node::Text(text.to_string())),
    }
    Ok(())
}

fn unescape_text(raw: &str) -> Result<Cow<'_, str>, ParseError> {
    if !raw.contains('&') {
        return Ok(Cow::Borrowed(raw));
    }
    quick_xml::escape::unescape(raw).map_err(|e| ParseError::Syntax {
        position: 0,
        message: e.to_string(),
    })
}

fn resolve_entity(entity: &str) -> Option<char> {
    if let Some(c) = PREDEFINED_ENTITIES.get(entity) {
        return Some(*c);
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes)
}
