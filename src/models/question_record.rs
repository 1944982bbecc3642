/// 选择题记录（仅启发式抽取使用的临时结构）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionRecord {
    /// 题干文本（已去除行内标签并 trim）
    pub question: String,
    /// 候选项，按文档顺序
    pub choices: Vec<String>,
    /// 选中的候选项序号（源文档中从 1 开始）
    pub selected: Option<i64>,
}

impl QuestionRecord {
    /// 选中的候选项
    ///
    /// 序号缺失、越界（含 0 和负数）或候选项为空时返回 `None`
    pub fn answer(&self) -> Option<&str> {
        let index = usize::try_from(self.selected?).ok()?.checked_sub(1)?;
        self.choices
            .get(index)
            .map(String::as_str)
            .filter(|choice| !choice.is_empty())
    }

    /// 题干预览：前 `max_chars` 个字符，后接 `...`
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.question.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(selected: Option<i64>) -> QuestionRecord {
        QuestionRecord {
            question: "Pick one".to_string(),
            choices: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            selected,
        }
    }

    #[test]
    fn test_answer_is_one_based() {
        assert_eq!(record(Some(1)).answer(), Some("A"));
        assert_eq!(record(Some(2)).answer(), Some("B"));
        assert_eq!(record(Some(3)).answer(), Some("C"));
    }

    #[test]
    fn test_answer_out_of_range_is_none() {
        assert_eq!(record(Some(0)).answer(), None);
        assert_eq!(record(Some(-1)).answer(), None);
        assert_eq!(record(Some(5)).answer(), None);
        assert_eq!(record(None).answer(), None);
    }

    #[test]
    fn test_empty_choice_is_none() {
        let mut r = record(Some(2));
        r.choices[1].clear();
        assert_eq!(r.answer(), None);
    }

    #[test]
    fn test_preview_always_appends_ellipsis() {
        let short = QuestionRecord {
            question: "Short".to_string(),
            ..Default::default()
        };
        assert_eq!(short.preview(20), "Short...");

        let long = QuestionRecord {
            question: "Paris is the capital of France".to_string(),
            ..Default::default()
        };
        assert_eq!(long.preview(20), "Paris is the capital...");
    }
}
