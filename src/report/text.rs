use crate::report::{ScoreLine, format_f64_3};

pub fn render_score_line(line: &ScoreLine) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\n",
        format_f64_3(line.normalized_score),
        line.coex_source,
        line.direction_label,
        line.coex_threshold,
        line.test_gene_count
    )
}
