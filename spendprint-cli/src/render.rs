//! Plain-text rendering of a dashboard for the terminal

use spendprint_core::{get_personality_info, Dashboard, PersonalityType};

const BAR_WIDTH: usize = 30;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}

fn personality_card(s: &mut String, personality: PersonalityType) {
    let info = get_personality_info(personality);
    s.push_str(&format!("{}  {}\n", personality.emoji(), personality.label()));
    s.push_str("Your Spending Profile\n\n");
    s.push_str(&format!("{}\n\n", info.description));
    s.push_str("Tips for Better Financial Health:\n");
    for tip in info.tips {
        s.push_str(&format!("- {}\n", tip));
    }
}

pub fn render_dashboard(d: &Dashboard) -> String {
    let mut s = String::new();
    s.push_str("# Financial Analytics\n\n");

    personality_card(&mut s, d.personality);

    let m = &d.metrics;
    s.push_str("\n## Metrics\n\n");
    s.push_str(&format!("True expendable income (TEI)   ${:.2}\n", m.tei));
    s.push_str(&format!("Discretionary spending (TDS)   ${:.2}\n", m.tds));
    s.push_str(&format!("Discretionary overspend (DO)   ${:.2}\n", m.overspend));
    s.push_str(&format!("Luxury ratio (LR)              {:.1}%\n", m.luxury_ratio * 100.0));
    s.push_str(&format!("Payday splurge ratio (PSR)     {:.1}%\n", m.payday_splurge_ratio * 100.0));
    s.push_str(&format!("Monthly savings required       ${:.2}\n", m.goal_savings_required));
    s.push_str(&format!("Total spending                 ${:.2}\n", m.total_spending));
    s.push_str(&format!("Actual savings                 ${:.2}\n", m.actual_savings));

    let g = &d.goal_vs_actual;
    s.push_str("\n## Goal vs actual savings\n\n");
    s.push_str(&format!(
        "goal=${:.2} saved=${:.2} [{:<width$}] {:.1}%\n",
        g.goal_amount,
        g.saved_amount,
        bar(g.percentage, 100.0),
        g.percentage,
        width = BAR_WIDTH
    ));

    s.push_str("\n## Spending breakdown\n\n");
    let total: f64 = d.spending_breakdown.iter().map(|b| b.value).sum();
    for b in &d.spending_breakdown {
        s.push_str(&format!(
            "{:<24} ${:>12.2}  {}\n",
            b.name,
            b.value,
            bar(b.value, total)
        ));
    }

    s.push_str("\n## Discretionary budget\n\n");
    for c in &d.discretionary_comparison {
        s.push_str(&format!(
            "{}: planned=${:.2} actual=${:.2}\n",
            c.category, c.planned, c.actual
        ));
    }

    s.push_str("\n## Top categories\n\n");
    if d.top_categories.is_empty() {
        s.push_str("(no transactions)\n");
    }
    let top = d.top_categories.first().map(|c| c.amount).unwrap_or(0.0);
    for c in &d.top_categories {
        s.push_str(&format!(
            "{:<20} ${:>10.2}  count={:<4} {}\n",
            c.category,
            c.amount,
            c.count,
            bar(c.amount, top)
        ));
    }

    s.push_str("\n## Spending velocity\n\n");
    if d.spending_velocity.is_empty() {
        s.push_str("(no transactions)\n");
    }
    let last = d
        .spending_velocity
        .last()
        .map(|v| v.cumulative_amount)
        .unwrap_or(0.0);
    for v in &d.spending_velocity {
        s.push_str(&format!(
            "day {:>3}  ${:>10.2}  txns={:<3} {}\n",
            v.day,
            v.cumulative_amount,
            v.transaction_count,
            bar(v.cumulative_amount, last)
        ));
    }

    s
}

/// Every archetype with its description and tips
pub fn render_personalities() -> String {
    let mut s = String::new();
    for (i, p) in PersonalityType::ALL.iter().enumerate() {
        if i > 0 {
            s.push_str("\n---\n\n");
        }
        personality_card(&mut s, *p);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spendprint_core::{MetricsInput, Transaction};

    fn sample_dashboard() -> Dashboard {
        let d = |day| NaiveDate::from_ymd_opt(2025, 11, day).unwrap();
        let input = MetricsInput {
            total_income: 50000.0,
            total_essentials: 30000.0,
            total_secondary: 2000.0,
            total_luxury: 5500.0,
            goal_amount: 5000.0,
            months_remaining: 12.0,
            transactions: vec![
                Transaction::new(d(1), 1500.0, "Groceries"),
                Transaction::new(d(5), 3000.0, "Shopping"),
                Transaction::new(d(3), 800.0, "Secondary"),
            ],
            ..Default::default()
        };
        Dashboard::build(&input, 10000.0)
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(50.0, 100.0).len(), 15);
        assert_eq!(bar(500.0, 100.0).len(), BAR_WIDTH);
        assert!(bar(-5.0, 100.0).is_empty());
        assert!(bar(5.0, 0.0).is_empty());
    }

    #[test]
    fn test_render_dashboard_sections() {
        let out = render_dashboard(&sample_dashboard());
        assert!(out.contains("🏆  The Goal-Oriented Saver"));
        assert!(out.contains("Keep up the great work!"));
        assert!(out.contains("## Top categories"));
        assert!(out.contains("Shopping"));
        assert!(out.contains("planned=$10000.00 actual=$7500.00"));
        assert!(out.contains("day   5"));
    }

    #[test]
    fn test_render_personalities_lists_all() {
        let out = render_personalities();
        for p in PersonalityType::ALL {
            assert!(out.contains(p.label()), "missing {}", p.label());
        }
        assert_eq!(out.matches("---").count(), 4);
    }
}
