//! 策略 2：通过切换按钮的 `id.show()` 脚本找到被显示的答案模块

use tracing::{debug, info};

use super::patterns::show_target;
use super::strategy::AnswerStrategy;
use crate::document::{DocumentIndex, Element, Selector, Step};
use crate::models::StrategyKind;

/// 切换按钮的 addonId
pub const TOGGLE_BUTTON_ADDON: &str = "Double_State_Button";

/// 交互答案查找
///
/// 职责：
/// - 遍历所有 Double_State_Button
/// - 解析 onSelected 脚本，得到被显示的模块 ID
/// - 第一个能解析到文本模块的按钮决定结果：文本为空时视为没有找到
#[derive(Debug)]
pub struct InteractionKeyFinder {
    buttons: Selector,
    on_selected: Selector,
}

impl InteractionKeyFinder {
    pub fn new() -> Self {
        Self {
            buttons: Selector::new()
                .then(Step::new("addonModule").with_attr("addonId", TOGGLE_BUTTON_ADDON)),
            on_selected: Selector::new()
                .then(Step::new("property").with_attr("name", "onSelected")),
        }
    }

    /// 按钮的 onSelected 脚本（只看第一个 onSelected 属性）
    fn script_of<'d>(&self, index: &DocumentIndex<'d>, button: &'d Element) -> Option<&'d str> {
        let property = index.find_first_in(button, &self.on_selected)?;
        index.attr(property, "value")
    }

    /// 按 ID 查找文本模块的文本
    fn module_text(&self, index: &DocumentIndex<'_>, module_id: &str) -> Option<String> {
        let selector = Selector::new()
            .then(Step::new("textModule").with_attr("id", module_id))
            .then("text");
        index.find_first(&selector).map(|node| index.text_of(node))
    }
}

impl Default for InteractionKeyFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerStrategy for InteractionKeyFinder {
    fn kind(&self) -> StrategyKind {
        StrategyKind::InteractionKey
    }

    fn find(&self, index: &DocumentIndex<'_>) -> Option<String> {
        for button in index.find_all(&self.buttons) {
            let button_id = button.attr("id").unwrap_or("?");

            let Some(script) = self.script_of(index, button) else {
                debug!("按钮 {} 没有 onSelected 脚本，跳过", button_id);
                continue;
            };
            let Some(module_id) = show_target(script) else {
                debug!("按钮 {} 的脚本不是 <id>.show(): {:?}", button_id, script);
                continue;
            };

            match self.module_text(index, module_id) {
                Some(text) if text.is_empty() => {
                    debug!("按钮 {} 指向的模块 {} 没有文本", button_id, module_id);
                    return None;
                }
                Some(text) => {
                    info!("✓ 按钮 {} 指向答案模块 {}", button_id, module_id);
                    return Some(text);
                }
                None => debug!("按钮 {} 指向的模块 {} 不存在，跳过", button_id, module_id),
            }
        }
        None
    }
}
