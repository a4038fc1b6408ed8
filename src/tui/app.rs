use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::AppConfig;
use crate::data::Source;
use crate::engine::dashboard::{build_dashboard, Dashboard, DashboardPlan};
use crate::engine::projector::project;
use crate::models::{ChartMode, Dataset, DateRange, MetricKind, Profile, Session};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{
    achievements, activity, calories, goals, header, leaderboard, login, statusbar, steps, trends,
    wellness,
};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login,
    Dashboard,
    Trends,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    SignUp,
}

pub struct App {
    view: View,
    pub session: Session,
    pub config: AppConfig,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,
    pub trend_mode: ChartMode,

    dataset: Dataset,
    source: Source,
    plan: DashboardPlan,
    pub window: DateRange,

    // Derived from the dataset on every refresh
    pub dashboard: Option<Dashboard>,
    pub error: Option<String>,
}

impl App {
    pub fn new(
        config: AppConfig,
        session: Session,
        dataset: Dataset,
        source: Source,
        plan: DashboardPlan,
        window: DateRange,
    ) -> Self {
        let mut app = App {
            view: View::Dashboard,
            session,
            config,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            trend_mode: ChartMode::Bar,
            dataset,
            source,
            plan,
            window,
            dashboard: None,
            error: None,
        };
        app.refresh();
        app
    }

    /// The view on screen; nobody signed in always means the login card.
    pub fn current_view(&self) -> View {
        if self.session.is_signed_in() {
            self.view.clone()
        } else {
            View::Login
        }
    }

    pub fn refresh(&mut self) {
        match build_dashboard(&self.dataset, &self.plan, self.window) {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.error = None;
            }
            Err(err) => {
                log::warn!("Dashboard refresh failed: {}", err);
                self.dashboard = None;
                self.error = Some(err.to_string());
            }
        }
    }

    fn shift_window(&mut self, days: i64) {
        match self.window.shifted(days) {
            Ok(window) => {
                self.window = window;
                self.refresh();
            }
            Err(err) => log::warn!("Window not moved: {}", err),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report release and repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::SignUp => self.handle_signup_input(key),
            InputMode::Normal => match self.current_view() {
                View::Login => self.handle_login_key(key),
                View::Dashboard => self.handle_dashboard_key(key),
                View::Trends => self.handle_trends_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.sign_in(self.config.profile.to_profile()),
            KeyCode::Char('n') => {
                self.input_mode = InputMode::SignUp;
                self.input_buffer.clear();
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('t') => self.view = View::Trends,
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Char('[') | KeyCode::Left => self.shift_window(-1),
            KeyCode::Char(']') | KeyCode::Right => self.shift_window(1),
            _ => {}
        }
    }

    fn handle_trends_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('t') => self.view = View::Dashboard,
            KeyCode::Char('m') => {
                self.trend_mode = match self.trend_mode {
                    ChartMode::Bar => ChartMode::Line,
                    ChartMode::Line | ChartMode::Pie => ChartMode::Bar,
                };
            }
            KeyCode::Char('[') | KeyCode::Left => self.shift_window(-1),
            KeyCode::Char(']') | KeyCode::Right => self.shift_window(1),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if let KeyCode::Esc | KeyCode::Char('?') = key.code {
            self.view = View::Dashboard;
        }
    }

    fn handle_signup_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => {
                let name = self.input_buffer.trim().to_string();
                if name.is_empty() {
                    self.input_error = Some("Enter a name first".to_string());
                    return;
                }
                let profile = Profile {
                    name,
                    email: String::new(),
                    joined: Local::now().format("%B %Y").to_string(),
                };
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
                self.sign_in(profile);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if !c.is_control() && self.input_buffer.chars().count() < 32 => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn sign_in(&mut self, profile: Profile) {
        log::info!("Signed in as {}", profile.name);
        self.session = Session::signed_in(profile);
        self.view = View::Dashboard;
    }

    fn sign_out(&mut self) {
        self.session = Session::signed_out();
        self.view = View::Dashboard;
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let view = self.current_view();
        header::render(
            frame,
            outer_chunks[0],
            self.session.user(),
            &self.window,
            &self.source.describe(),
        );
        statusbar::render(frame, outer_chunks[2], &view);

        match view {
            View::Login => {
                login::render(frame, outer_chunks[1], &self.config.profile.name);
                if self.input_mode == InputMode::SignUp {
                    self.draw_signup_input(frame);
                }
            }
            View::Dashboard => self.draw_dashboard(frame, outer_chunks[1]),
            View::Trends => self.draw_trends(frame, outer_chunks[1]),
            View::Help => {
                self.draw_dashboard(frame, outer_chunks[1]);
                self.draw_help_overlay(frame);
            }
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame, body: Rect) {
        let Some(dash) = &self.dashboard else {
            self.draw_error(frame, body);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(body);

        // Left column: Steps + Goals + Calories
        let goals_height = (dash.goals.len() as u16).max(1) * 2 + 2;
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(12),          // steps
                Constraint::Length(goals_height), // goals
                Constraint::Min(0),              // calories
            ])
            .split(columns[0]);

        let step_goal = dash
            .goals
            .iter()
            .zip(&self.plan.goals)
            .find(|(_, goal)| goal.metric == MetricKind::Steps)
            .map(|(progress, _)| progress.target);
        steps::render(
            frame,
            left_chunks[0],
            dash.chart(MetricKind::Steps),
            step_goal,
        );
        goals::render(frame, left_chunks[1], &dash.goals);
        calories::render(frame, left_chunks[2], dash.calorie_breakdown.as_ref());

        // Right column: Achievements + Leaderboard + Sleep & Nutrition + Activity
        let achievements_height = (dash.achievements.len() as u16) * 2 + 2;
        let leaderboard_height = (dash.leaderboard.len() as u16).min(8) + 2;
        let w = &dash.wellness;
        let wellness_height = 3 * u16::from(w.sleep.is_some())
            + 3 * u16::from(w.nutrition.is_some())
            + u16::from(w.water.is_some())
            + 2;
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(achievements_height),
                Constraint::Length(leaderboard_height),
                Constraint::Length(wellness_height.max(3)),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        achievements::render(frame, right_chunks[0], &dash.achievements);
        leaderboard::render(
            frame,
            right_chunks[1],
            &dash.leaderboard,
            &self.config.dashboard.participant_id,
        );
        wellness::render(frame, right_chunks[2], &dash.wellness);
        activity::render(frame, right_chunks[3], &dash.workouts);
    }

    fn draw_trends(&self, frame: &mut Frame, body: Rect) {
        let Some(dash) = &self.dashboard else {
            self.draw_error(frame, body);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(body);
        let cells: Vec<Rect> = rows
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        for (kind, cell) in MetricKind::all().into_iter().zip(cells) {
            if let Some(series) = dash.snapshot.get(kind) {
                let chart = project(series, self.trend_mode);
                trends::render(frame, cell, &chart, kind.unit());
            }
        }
    }

    fn draw_error(&self, frame: &mut Frame, body: Rect) {
        let message = self
            .error
            .as_deref()
            .unwrap_or("Nothing to show for this window");
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  ✗ {}", message), theme::coral())),
            Line::from(""),
            Line::from(Span::styled(
                "  Fix the dataset or config and restart; [ ] moves the window",
                theme::dim(),
            )),
        ];
        let block = Block::default()
            .title(Span::styled(" Error ", theme::coral()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::coral())
            .style(theme::surface());
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, body);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(10),
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[ / ]", "Move the window a day back / forward"),
            ("[t]", "Trends for every metric"),
            ("[m]", "Bar / line trends"),
            ("[o]", "Log out"),
            ("[?]", "Toggle help"),
            ("[Esc]", "Quit"),
        ];
        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::teal().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(bindings.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("  {:<8}", key), theme::teal()),
                Span::styled(*what, theme::dim()),
            ])
        }));

        let block = Block::default()
            .title(Span::styled(" Help ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::teal())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_signup_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let height = if self.input_error.is_some() { 7 } else { 5 };

        let popup_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(3),
            width: area.width / 2,
            height,
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Your name: ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::teal().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()), // block cursor
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Type a name, then [Enter]  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::coral())));
        }

        let border_style = if self.input_error.is_some() {
            theme::coral()
        } else {
            theme::amber()
        };

        let block = Block::default()
            .title(Span::styled(" Create Account ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(app: &mut App) -> Result<()> {
    let mut terminal = ratatui::init();
    let events = EventHandler::new(250);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        break;
                    }
                }
                Event::Resize | Event::Tick => {}
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}
