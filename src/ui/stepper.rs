//! Flow view: stepper strip, progress bar, active step content, nav bar.
//!
//! Rendering is a pure function of the controller state plus theme settings.
//! The one side channel is layout measurement: marker chunk widths are only
//! known here, after layout, so the view records them back into the
//! controller's width table for the next edge-margin recompute.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::config::ThemeConfig;
use crate::flow::{FlowController, VisualState};
use crate::ui::keybindings::{shortcut_for, NavAction};

/// Renders a `FlowController` into a frame.
pub struct FlowView {
    check_glyph: String,
    show_step_names: bool,
}

impl FlowView {
    pub fn new(theme: &ThemeConfig) -> Self {
        Self {
            check_glyph: theme.check_glyph.clone(),
            show_step_names: theme.show_step_names,
        }
    }

    /// Render the full flow into `area`.
    ///
    /// An empty flow renders nothing.
    pub fn render(&self, frame: &mut Frame, area: Rect, controller: &mut FlowController) {
        if controller.is_empty() {
            return;
        }

        let marker_height = if self.show_step_names { 2 } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(marker_height), // Step markers
                Constraint::Length(1),             // Progress bar
                Constraint::Length(1),             // Spacer
                Constraint::Min(3),                // Active step content
                Constraint::Length(2),             // Nav bar
            ])
            .split(area);

        self.render_markers(frame, chunks[0], controller);
        self.render_progress(frame, chunks[1], controller);
        self.render_content(frame, chunks[3], controller);
        self.render_nav(frame, chunks[4], controller);
    }

    /// One marker per step in equal horizontal chunks, widths recorded for
    /// the edge-margin recompute.
    fn render_markers(&self, frame: &mut Frame, area: Rect, controller: &mut FlowController) {
        let count = controller.len() as u32;
        let constraints: Vec<Constraint> =
            (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (index, chunk) in chunks.iter().enumerate() {
            controller.record_marker_width(index, chunk.width);

            let state = controller.visual_state(index);
            let label = controller.marker_label_with(index, &self.check_glyph);
            let mut lines = vec![Line::from(Span::styled(
                format!("({label})"),
                marker_style(state),
            ))];
            if self.show_step_names {
                let name = controller
                    .steps()
                    .get(index)
                    .map_or_else(String::new, |s| s.name().to_string());
                lines.push(Line::from(Span::styled(name, name_style(state))));
            }
            let marker = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(marker, *chunk);
        }
    }

    /// Progress gauge inset by the edge margins so the track spans between
    /// the centers of the first and last markers.
    fn render_progress(&self, frame: &mut Frame, area: Rect, controller: &FlowController) {
        let margins = controller.edge_margins();
        let inset = margins.left + margins.right;
        let track = Rect {
            x: area.x.saturating_add(margins.left),
            y: area.y,
            width: area.width.saturating_sub(inset),
            height: area.height,
        };
        if track.width == 0 {
            return;
        }

        let percent = controller.progress_percent();
        let gauge = Gauge::default()
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{percent:.0}%"))
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray));
        frame.render_widget(gauge, track);
    }

    /// Active step content, or the completion notice once the flow is done.
    fn render_content(&self, frame: &mut Frame, area: Rect, controller: &FlowController) {
        if controller.is_complete() {
            let notice = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("{} All steps complete", self.check_glyph),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "press q to exit",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(notice, area);
            return;
        }

        if let Some(step) = controller.active_step() {
            let block = Block::default()
                .title(format!(" {} ", step.name()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if let Some(content) = step.content() {
                content.render(frame, inner);
            }
        }
    }

    /// Back / Next-or-Complete / Skip hints, dimmed when disabled.
    fn render_nav(&self, frame: &mut Frame, area: Rect, controller: &FlowController) {
        let mut spans = Vec::new();
        spans.extend(button_spans(
            "Back",
            NavAction::Back,
            controller.back_enabled(),
        ));
        spans.push(Span::raw("   "));
        spans.extend(button_spans(
            controller.next_label(),
            NavAction::Next,
            controller.next_enabled(),
        ));
        spans.push(Span::raw("   "));
        spans.extend(button_spans(
            "Skip",
            NavAction::Skip,
            controller.skip_enabled(),
        ));
        spans.push(Span::raw("   "));
        spans.extend(button_spans("Quit", NavAction::Quit, true));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, area);
    }
}

fn marker_style(state: VisualState) -> Style {
    match state {
        VisualState::Complete => Style::default().fg(Color::Green),
        VisualState::Active => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        VisualState::Inactive => Style::default().fg(Color::DarkGray),
    }
}

fn name_style(state: VisualState) -> Style {
    match state {
        VisualState::Complete => Style::default().fg(Color::Green),
        VisualState::Active => Style::default().fg(Color::White),
        VisualState::Inactive => Style::default().fg(Color::DarkGray),
    }
}

fn button_spans(label: &str, action: NavAction, enabled: bool) -> Vec<Span<'static>> {
    let keys = shortcut_for(action).key_display();
    if enabled {
        vec![
            Span::styled(format!("[{keys}]"), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {label}")),
        ]
    } else {
        vec![Span::styled(
            format!("[{keys}] {label}"),
            Style::default().fg(Color::DarkGray),
        )]
    }
}
