use crate::server::model::churn::DateSpan;

/// Merges day spans into the minimal sorted set of continuous presence periods.
///
/// Spans that overlap or touch (the next starts on or before the day after the current one
/// ends) are joined, so back-to-back campaigns count as one uninterrupted presence. Every
/// gap in the output is at least one full day.
pub fn merge_spans(mut spans: Vec<DateSpan>) -> Vec<DateSpan> {
    spans.sort();

    let mut merged: Vec<DateSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(current)
                if current
                    .end
                    .succ_opt()
                    .is_none_or(|next_day| span.start <= next_day) =>
            {
                current.end = current.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }

    merged
}
