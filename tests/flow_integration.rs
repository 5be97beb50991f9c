//! Flow Integration Tests
//!
//! End-to-end checks of the step state machine and view through the public
//! library surface: progress monotonicity, navigation clamping, skip
//! semantics, completion, and the empty/single-step edge cases.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::{backend::TestBackend, Terminal};
use stepflow::config::ThemeConfig;
use stepflow::{FlowController, FlowView, StepDefinition, VisualState};

fn steps(names: &[&str]) -> Vec<StepDefinition> {
    names.iter().map(|name| StepDefinition::named(*name)).collect()
}

fn draw(controller: &mut FlowController) -> String {
    let backend = TestBackend::new(72, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    let view = FlowView::new(&ThemeConfig::default());
    terminal
        .draw(|f| view.render(f, f.area(), controller))
        .unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn progress_is_monotonic_and_spans_the_flow() {
    for n in 2..=8 {
        let names: Vec<String> = (1..=n).map(|i| format!("S{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut flow = FlowController::new(steps(&refs));

        assert!((flow.progress_percent() - 0.0).abs() < f64::EPSILON);
        let mut previous = 0.0;
        for _ in 1..n {
            flow.advance();
            assert!(flow.progress_percent() >= previous);
            previous = flow.progress_percent();
        }
        assert!((flow.progress_percent() - 100.0).abs() < f64::EPSILON);
    }
}

#[test]
fn retreat_is_clamped_at_the_first_step() {
    let mut flow = FlowController::new(steps(&["A", "B", "C"]));
    for _ in 0..10 {
        flow.retreat();
    }
    assert_eq!(flow.current_step(), 1);
}

#[test]
fn advancing_past_the_end_completes_and_stays_put() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let mut flow = FlowController::new(steps(&["A", "B", "C"])).on_complete(move || {
        counter.set(counter.get() + 1);
    });

    flow.advance();
    flow.advance();
    assert_eq!(fired.get(), 0);

    flow.advance();
    assert_eq!(flow.current_step(), 3);
    assert!(flow.is_complete());
    assert_eq!(fired.get(), 1);
}

#[test]
fn skip_jumps_two_ahead_until_fewer_than_two_remain() {
    let mut flow = FlowController::new(steps(&["A", "B", "C", "D", "E"]));
    flow.skip();
    assert_eq!(flow.current_step(), 3);

    // Lands on the final step without completing the flow
    flow.skip();
    assert_eq!(flow.current_step(), 5);
    assert!(!flow.is_complete());

    // From the second-to-last step skip is a no-op
    flow.retreat();
    flow.skip();
    assert_eq!(flow.current_step(), 4);
}

#[test]
fn checkout_scenario_skip_then_advance_to_completion() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    let mut flow = FlowController::new(steps(&["A", "B", "C", "D"])).on_complete(move || {
        counter.set(counter.get() + 1);
    });

    flow.skip();
    assert_eq!(flow.current_step(), 3);
    flow.advance();
    assert_eq!(flow.current_step(), 4);
    flow.advance();
    assert!(flow.is_complete());
    assert_eq!(flow.current_step(), 4);
    assert_eq!(fired.get(), 1);
}

#[test]
fn empty_flow_renders_nothing_and_never_panics() {
    let mut flow = FlowController::new(Vec::new());
    flow.advance();
    flow.skip();
    flow.retreat();

    let text = draw(&mut flow);
    assert!(text.chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn single_step_flow_starts_at_the_end() {
    let mut flow = FlowController::new(steps(&["Only"]));
    assert!(!flow.back_enabled());
    assert!(!flow.skip_enabled());
    assert_eq!(flow.next_label(), "Complete");
    assert!((flow.progress_percent() - 100.0).abs() < f64::EPSILON);

    let text = draw(&mut flow);
    assert!(text.contains("Complete"));
}

#[test]
fn visual_states_partition_every_marker() {
    let mut flow = FlowController::new(steps(&["A", "B", "C", "D"]));
    for _ in 0..4 {
        let states: Vec<VisualState> = (0..4).map(|i| flow.visual_state(i)).collect();
        let complete = states
            .iter()
            .filter(|s| **s == VisualState::Complete)
            .count();
        let active = states.iter().filter(|s| **s == VisualState::Active).count();
        assert_eq!(complete, flow.current_step() - 1);
        assert_eq!(active, 1);
        flow.advance();
    }
}

#[test]
fn retreating_from_completion_reopens_the_flow() {
    let mut flow = FlowController::new(steps(&["A", "B"]));
    flow.advance();
    flow.advance();
    assert!(flow.is_complete());
    assert!(flow.active_step().is_none());

    flow.retreat();
    assert!(!flow.is_complete());
    assert_eq!(flow.active_step().map(StepDefinition::name), Some("A"));
    assert!(flow.next_enabled());
}

#[test]
fn rendering_then_recomputing_derives_edge_margins() {
    let mut flow = FlowController::new(steps(&["A", "B", "C"]));
    assert_eq!(flow.edge_margins(), stepflow::EdgeMargins::default());

    draw(&mut flow);
    flow.recompute_edge_margins();
    let margins = flow.edge_margins();
    assert!(margins.left > 0);
    assert!(margins.right > 0);
}
