//! 策略 3：没有权威答案时，逐题重建可能的答案
//!
//! 两个独立的子扫描结果汇总到同一份报告：
//! 1. 填空题：文本模块中的 `\gap{...}` 标记
//! 2. 选择题：TrueFalse / MultipleChoice 插件的题目与选项

use phf::phf_set;
use tracing::{debug, info};

use super::patterns::{gap_answers, has_answer_key_label, strip_inline_tags};
use super::report_builder::ReportBuilder;
use super::strategy::AnswerStrategy;
use crate::config::{Config, ReportLabels};
use crate::document::{DocumentIndex, Element, Selector, Step};
use crate::models::{QuestionRecord, StrategyKind};

/// 会被当作选择题处理的 addonId
pub static CHOICE_ADDONS: phf::Set<&'static str> = phf_set! {
    "TrueFalse",
    "MultipleChoice",
};

/// 启发式答案抽取
pub struct HeuristicAnswerExtractor {
    labels: ReportLabels,
    preview_len: usize,
    text_nodes: Selector,
    choice_modules: Selector,
    questions: Selector,
    choices: Selector,
    question_text: Selector,
    answer: Selector,
}

impl HeuristicAnswerExtractor {
    pub fn new(config: &Config) -> Self {
        let mut addon_ids: Vec<&str> = CHOICE_ADDONS.iter().copied().collect();
        addon_ids.sort_unstable();

        Self {
            labels: config.labels.clone(),
            preview_len: config.question_preview_len,
            text_nodes: Selector::path(["textModule", "text"]),
            choice_modules: Selector::new()
                .then(Step::new("addonModule").with_attr_in("addonId", addon_ids)),
            questions: Selector::new()
                .then(display_name("Questions"))
                .then("item"),
            choices: Selector::new()
                .then(display_name("Choices"))
                .then("item")
                .then(display_name("Choice")),
            question_text: Selector::new().then(display_name("Question")),
            answer: Selector::new().then(display_name("Answer")),
        }
    }

    /// 子扫描 A：填空题，每个文本节点一个小节，编号在节点内从 1 开始
    fn scan_gap_fills(&self, index: &DocumentIndex<'_>, report: &mut ReportBuilder<'_>) {
        for node in index.find_all(&self.text_nodes) {
            let text = index.text_of(node);
            let answers = gap_answers(&text);
            if answers.is_empty() {
                continue;
            }
            if has_answer_key_label(&text) {
                debug!("文本节点带有 Answer Key 标注，不作为填空来源");
                continue;
            }
            debug!("填空题节点: {} 个空", answers.len());
            report.gap_fill_section(&answers);
        }
    }

    /// 子扫描 B：选择题，每个插件模块一个小节
    fn scan_choice_modules(&self, index: &DocumentIndex<'_>, report: &mut ReportBuilder<'_>) {
        for module in index.find_all(&self.choice_modules) {
            let module_id = module.attr("id").unwrap_or_default();
            let records = self.question_records(index, module);
            if records.is_empty() {
                debug!("选择题模块 {} 没有题目，跳过", module_id);
                continue;
            }

            let entries: Vec<(String, String)> = records
                .iter()
                .map(|record| {
                    let answer = record
                        .answer()
                        .unwrap_or(self.labels.unknown_marker.as_str())
                        .to_string();
                    (record.preview(self.preview_len), answer)
                })
                .collect();
            debug!("选择题模块 {}: {} 道题", module_id, entries.len());
            report.choice_section(module_id, &entries);
        }
    }

    /// 读取模块内的全部题目；缺失或格式不对的字段记为未知，不中断扫描
    fn question_records(&self, index: &DocumentIndex<'_>, module: &Element) -> Vec<QuestionRecord> {
        let choices: Vec<String> = index
            .find_all_in(module, &self.choices)
            .into_iter()
            .map(|choice| index.text_of(choice).trim().to_string())
            .collect();

        index
            .find_all_in(module, &self.questions)
            .into_iter()
            .map(|item| {
                let question = index
                    .find_first_in(item, &self.question_text)
                    .map(|q| strip_inline_tags(&index.text_of(q)))
                    .unwrap_or_default();
                let selected = index
                    .find_first_in(item, &self.answer)
                    .and_then(|a| index.attr(a, "value"))
                    .and_then(parse_leading_int);
                if selected.is_none() {
                    debug!("题目答案序号缺失或不是数字: {:?}", question);
                }

                QuestionRecord {
                    question,
                    choices: choices.clone(),
                    selected,
                }
            })
            .collect()
    }
}

impl AnswerStrategy for HeuristicAnswerExtractor {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }

    fn find(&self, index: &DocumentIndex<'_>) -> Option<String> {
        let mut report = ReportBuilder::new(&self.labels);
        self.scan_gap_fills(index, &mut report);
        self.scan_choice_modules(index, &mut report);

        info!("启发式抽取完成，共 {} 项", report.item_count());
        report.finish()
    }
}

fn display_name(name: &str) -> Step {
    Step::new("property").with_attr("displayName", name)
}

/// 按整数前缀解析：允许前导空白和正负号，忽略后续字符（"2abc" → 2）
fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn run(xml: &str) -> Option<String> {
        let doc = Document::parse(xml).unwrap();
        HeuristicAnswerExtractor::new(&Config::default()).find(&DocumentIndex::new(&doc))
    }

    fn choice_module(id: &str, choices: &[&str], answers: &[Option<&str>]) -> String {
        let choices: String = choices
            .iter()
            .map(|c| {
                format!(
                    r#"<item><property displayName="Choice">{}</property></item>"#,
                    c
                )
            })
            .collect();
        let questions: String = answers
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let answer = match a {
                    Some(v) => format!(r#"<property displayName="Answer" value="{}"/>"#, v),
                    None => String::new(),
                };
                format!(
                    r#"<item><property displayName="Question">&lt;div&gt;Statement number {}&lt;/div&gt;</property>{}</item>"#,
                    i + 1,
                    answer
                )
            })
            .collect();
        format!(
            r#"<addonModule addonId="MultipleChoice" id="{}"><property displayName="Choices"><items>{}</items></property><property displayName="Questions"><items>{}</items></property></addonModule>"#,
            id, choices, questions
        )
    }

    #[test]
    fn test_gap_numbering_restarts_per_text_node() {
        let html = run(r#"<page>
            <textModule><text>\gap{one|1} and \gap{two}</text></textModule>
            <textModule><text>\gap{three}</text></textModule>
        </page>"#)
        .unwrap();

        assert!(html.contains(
            "<ul><li><b>Question 1:</b> one</li><li><b>Question 2:</b> two</li></ul>"
        ));
        assert!(html.contains("<ul><li><b>Question 1:</b> three</li></ul>"));
        assert!(!html.contains("Question 3"));
        assert_eq!(html.matches("<h4>Gap-fill:</h4>").count(), 2);
    }

    #[test]
    fn test_answer_key_node_is_not_a_gap_source() {
        let html = run(r#"<page>
            <textModule><text>&lt;b&gt;Answer Key&lt;/b&gt; \gap{hidden}</text></textModule>
            <textModule><text>\gap{shown}</text></textModule>
        </page>"#)
        .unwrap();

        assert!(!html.contains("hidden"));
        assert!(html.contains("shown"));
    }

    #[test]
    fn test_choice_answers_resolve_one_based_index() {
        let xml = format!(
            "<page>{}</page>",
            choice_module(
                "mc1",
                &[" A ", "B", "C"],
                &[Some("2"), Some("5"), None, Some("x"), Some("0"), Some("-1"), Some("1")]
            )
        );
        let html = run(&xml).unwrap();

        assert!(html.contains("<h4>Multiple Choice (ID: mc1):</h4>"));
        assert!(html.contains("<li><b>Question 1 (Statement number 1...):</b> B</li>"));
        assert!(html.contains("<li><b>Question 2 (Statement number 2...):</b> unknown</li>"));
        assert!(html.contains("<li><b>Question 3 (Statement number 3...):</b> unknown</li>"));
        assert!(html.contains("<li><b>Question 4 (Statement number 4...):</b> unknown</li>"));
        assert!(html.contains("<li><b>Question 5 (Statement number 5...):</b> unknown</li>"));
        assert!(html.contains("<li><b>Question 6 (Statement number 6...):</b> unknown</li>"));
        assert!(html.contains("<li><b>Question 7 (Statement number 7...):</b> A</li>"));
    }

    #[test]
    fn test_gap_sections_precede_choice_sections() {
        let xml = format!(
            r#"<page>{}<textModule><text>\gap{{Paris|paris}}</text></textModule></page>"#,
            choice_module("tf1", &["True", "False"], &[Some("1")])
        );
        let html = run(&xml).unwrap();

        let gap_at = html.find("Gap-fill").unwrap();
        let choice_at = html.find("(ID: tf1)").unwrap();
        assert!(gap_at < choice_at);
        assert!(html.starts_with("<h3>"));
    }

    #[test]
    fn test_true_false_module_and_long_question_preview() {
        let xml = r#"<page><addonModule addonId="TrueFalse" id="tf9">
            <property displayName="Choices"><items>
                <item><property displayName="Choice">True</property></item>
                <item><property displayName="Choice">False</property></item>
            </items></property>
            <property displayName="Questions"><items>
                <item>
                    <property displayName="Question"><![CDATA[<div><b>Paris</b> is the capital of France</div>]]></property>
                    <property displayName="Answer" value="1"/>
                </item>
            </items></property>
        </addonModule></page>"#;
        let html = run(xml).unwrap();
        assert!(html.contains("<li><b>Question 1 (Paris is the capital...):</b> True</li>"));
    }

    #[test]
    fn test_module_without_questions_produces_nothing() {
        let xml = format!("<page>{}</page>", choice_module("mc1", &["A"], &[]));
        assert_eq!(run(&xml), None);
    }

    #[test]
    fn test_unrelated_document_produces_nothing() {
        assert_eq!(
            run(r#"<page><textModule><text>Hello</text></textModule><addonModule addonId="Image"/></page>"#),
            None
        );
    }

    #[test]
    fn test_missing_question_text_is_recovered() {
        let xml = r#"<page><addonModule addonId="MultipleChoice" id="m">
            <property displayName="Choices"><items><item><property displayName="Choice">Yes</property></item></items></property>
            <property displayName="Questions"><items><item><property displayName="Answer" value="1"/></item></items></property>
        </addonModule></page>"#;
        let html = run(xml).unwrap();
        assert!(html.contains("<li><b>Question 1 (...):</b> Yes</li>"));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int(" 3 "), Some(3));
        assert_eq!(parse_leading_int("2abc"), Some(2));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
