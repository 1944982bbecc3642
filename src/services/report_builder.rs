//! 启发式报告的 HTML 组装
//!
//! 只负责拼接标记，不做任何转义

use crate::config::ReportLabels;

/// 启发式报告构建器
///
/// 各小节按追加顺序输出，没有任何条目时 `finish` 返回 `None`
#[derive(Debug)]
pub struct ReportBuilder<'a> {
    labels: &'a ReportLabels,
    body: String,
    items: usize,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(labels: &'a ReportLabels) -> Self {
        Self {
            labels,
            body: String::new(),
            items: 0,
        }
    }

    /// 追加一个填空题小节，答案按 1 开始编号
    pub fn gap_fill_section<S: AsRef<str>>(&mut self, answers: &[S]) {
        if answers.is_empty() {
            return;
        }
        self.body
            .push_str(&format!("<h4>{}</h4><ul>", self.labels.gap_fill_heading));
        for (i, answer) in answers.iter().enumerate() {
            self.body.push_str(&format!(
                "<li><b>{} {}:</b> {}</li>",
                self.labels.question_label,
                i + 1,
                answer.as_ref()
            ));
        }
        self.body.push_str("</ul>");
        self.items += answers.len();
    }

    /// 追加一个选择题小节，每项为 (题干预览, 答案)
    pub fn choice_section(&mut self, module_id: &str, entries: &[(String, String)]) {
        if entries.is_empty() {
            return;
        }
        self.body.push_str(&format!(
            "<h4>{} (ID: {}):</h4><ul>",
            self.labels.choice_heading, module_id
        ));
        for (i, (preview, answer)) in entries.iter().enumerate() {
            self.body.push_str(&format!(
                "<li><b>{} {} ({}):</b> {}</li>",
                self.labels.question_label,
                i + 1,
                preview,
                answer
            ));
        }
        self.body.push_str("</ul>");
        self.items += entries.len();
    }

    /// 已追加的条目数
    pub fn item_count(&self) -> usize {
        self.items
    }

    pub fn finish(self) -> Option<String> {
        if self.items == 0 {
            return None;
        }
        Some(format!("<h3>{}</h3>{}", self.labels.heading, self.body))
    }
}
