//! Sample flows for the stepflow binary.
//!
//! The default checkout flow exercises every navigation path (four steps, so
//! skip has room to jump); `numbered_flow` builds a generically named flow of
//! any size for trying out edge cases like zero or one step.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::flow::StepDefinition;

fn paragraph_step(name: &str, body: &[&str]) -> StepDefinition {
    let lines: Vec<Line<'static>> = body
        .iter()
        .map(|text| Line::from((*text).to_string()))
        .collect();
    StepDefinition::new(name, move |frame: &mut Frame, area: Rect| {
        let paragraph = Paragraph::new(lines.clone()).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    })
}

/// The default four-step checkout flow.
pub fn checkout_flow() -> Vec<StepDefinition> {
    vec![
        paragraph_step(
            "Shipping",
            &[
                "Where should the order go?",
                "",
                "Name, street, city, and postal code would be collected here.",
            ],
        ),
        paragraph_step(
            "Payment",
            &[
                "How would you like to pay?",
                "",
                "Card number, expiry, and billing address would be collected here.",
            ],
        ),
        paragraph_step(
            "Review",
            &[
                "Check the order before placing it.",
                "",
                "Items, shipping choice, and totals would be summarized here.",
            ],
        ),
        paragraph_step(
            "Confirm",
            &["Everything looks good?", "", "Complete places the order."],
        ),
    ]
}

/// A flow of `count` generically named steps.
pub fn numbered_flow(count: usize) -> Vec<StepDefinition> {
    (1..=count)
        .map(|i| {
            paragraph_step(
                &format!("Step {i}"),
                &[&format!("This is the content area for step {i}.")],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_flow_has_four_named_steps() {
        let steps = checkout_flow();
        let names: Vec<&str> = steps.iter().map(StepDefinition::name).collect();
        assert_eq!(names, ["Shipping", "Payment", "Review", "Confirm"]);
        assert!(steps.iter().all(|s| s.content().is_some()));
    }

    #[test]
    fn test_numbered_flow_sizes() {
        assert!(numbered_flow(0).is_empty());
        assert_eq!(numbered_flow(1).len(), 1);
        assert_eq!(numbered_flow(7).len(), 7);
        assert_eq!(numbered_flow(3)[2].name(), "Step 3");
    }
}
