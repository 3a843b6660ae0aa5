use crate::analysis::Analysis;
use crate::core::types::{DataType, SortingType, Token};

pub const SORTED_DATA_HEADER: &str = "Sorted data:";

/// "Total words: 6."
pub fn total_line(analysis: &Analysis) -> String {
    format!(
        "Total {}s: {}.",
        analysis.data_type().type_name(),
        analysis.size()
    )
}

/// Result lines for `sorted`, which must come from `analysis.sort(mode)`.
/// Empty when nothing was ingested.
pub fn render(analysis: &Analysis, mode: SortingType, sorted: &[Token]) -> Vec<String> {
    if analysis.is_empty() {
        return Vec::new();
    }
    match mode {
        SortingType::Natural => render_natural(analysis.data_type(), sorted),
        SortingType::ByCount => sorted
            .iter()
            .map(|token| count_line(token, analysis.count(token), analysis.size()))
            .collect(),
    }
}

fn render_natural(data_type: DataType, sorted: &[Token]) -> Vec<String> {
    match data_type {
        DataType::Line => std::iter::once(SORTED_DATA_HEADER.to_string())
            .chain(sorted.iter().map(Token::to_string))
            .collect(),
        DataType::Long | DataType::Word => {
            let joined = sorted
                .iter()
                .map(Token::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            vec![format!("{SORTED_DATA_HEADER} {joined}")]
        }
    }
}

/// Percentage is floored.
pub fn count_line(token: &Token, count: usize, total: usize) -> String {
    let percentage = if total == 0 { 0 } else { count * 100 / total };
    format!("{token}: {count} time(s) {percentage}%")
}
