use api::models::Segment;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn PriceDistribution(segments: Vec<Segment>) -> Element {
    let total: u64 = segments.iter().map(|s| s.count).sum();
    let bars = bar_entries(&segments);

    rsx! {
        section { class: "glass-card dashboard-card",
            div { class: "section-header",
                span { class: "section-header__icon section-header__icon--blue", aria_hidden: "true" }
                {t!("section-price-distribution")}
                span { class: "badge", {t!("badge-total", count = total.to_string())} }
            }
            div { class: "segment-list",
                for bar in bars.into_iter() {
                    div { class: "segment-row", key: "{bar.label}",
                        div { class: "segment-row__meta",
                            span { class: "segment-row__label", "{bar.label}" }
                            span { class: "segment-row__count", "{bar.count} ({bar.share_pct}%)" }
                        }
                        div { class: "bar-track",
                            div {
                                class: "bar-fill bar-fill--{bar.accent}",
                                style: "{bar.fill_style()}",
                            }
                        }
                    }
                }
            }
        }
    }
}

struct SegmentBar {
    label: String,
    count: u64,
    share_pct: u64,
    width_pct: f64,
    accent: usize,
    delay_s: f64,
}

impl SegmentBar {
    fn fill_style(&self) -> String {
        format!(
            "width: {:.1}%; animation-delay: {:.2}s",
            self.width_pct, self.delay_s
        )
    }
}

/// Bar geometry: widths are relative to the largest segment (the tallest
/// bar always marks the maximum), shares are relative to the dataset total.
fn bar_entries(segments: &[Segment]) -> Vec<SegmentBar> {
    let max_count = segments.iter().map(|s| s.count).max().unwrap_or(0).max(1);
    let total: u64 = segments.iter().map(|s| s.count).sum();

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| SegmentBar {
            label: segment.segment.clone(),
            count: segment.count,
            share_pct: if total > 0 {
                (segment.count as f64 / total as f64 * 100.0).round() as u64
            } else {
                0
            },
            width_pct: segment.count as f64 / max_count as f64 * 100.0,
            accent: i % 5,
            delay_s: i as f64 * 0.15,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(label: &str, count: u64) -> Segment {
        Segment {
            segment: label.to_string(),
            count,
        }
    }

    #[test]
    fn the_tallest_bar_is_the_maximum_segment() {
        let bars = bar_entries(&[
            segment("<200 Juta", 40),
            segment("200-300 Juta", 160),
            segment("300-500 Juta", 80),
        ]);

        let widths: Vec<f64> = bars.iter().map(|b| b.width_pct).collect();
        assert_eq!(widths, [25.0, 100.0, 50.0]);
        let tallest = bars
            .iter()
            .max_by(|a, b| a.width_pct.total_cmp(&b.width_pct))
            .unwrap();
        assert_eq!(tallest.count, 160);
    }

    #[test]
    fn shares_are_relative_to_the_total() {
        let bars = bar_entries(&[segment("a", 25), segment("b", 75)]);
        assert_eq!(bars[0].share_pct, 25);
        assert_eq!(bars[1].share_pct, 75);
    }

    #[test]
    fn empty_distributions_do_not_divide_by_zero() {
        assert!(bar_entries(&[]).is_empty());
        let bars = bar_entries(&[segment("empty", 0)]);
        assert_eq!(bars[0].width_pct, 0.0);
        assert_eq!(bars[0].share_pct, 0);
    }
}
