use std::mem;

use anyhow::{anyhow, Result};
use crossterm::event::KeyCode;
use log::{info, warn};
use open::that as open_path;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Settings;
use crate::db::open_store_in;
use crate::models::{Asset, Element, Family};
use crate::quiz::{Quiz, Verdict};
use crate::units::{convert, TemperatureUnit};

use super::helpers::{badge, build_tile_lines, centered_rect, surface_error};
use super::palette::{tint_color, Palette};
use super::screens::{
    option_index, option_letter, DetailScreen, QuizScreen, TableScreen, TABLE_COLUMNS, TABLE_ROWS,
};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Entries on the home menu, in display order.
const HOME_MENU: [&str; 2] = ["Periodic Table", "Elements Test"];
const HOME_BLURB: &str =
    "Learn about the 118 elements of the periodic table, or take a quiz to see how much you know.";
const NO_DATA: &str = "No element data available.";

/// High-level navigation states.
enum Screen {
    Home,
    Table(TableScreen),
    /// The table is kept so Esc returns to the same cursor position.
    Detail {
        table: TableScreen,
        detail: DetailScreen,
    },
    Quiz(QuizScreen),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    settings: Settings,
    palette: Palette,
    screen: Screen,
    home_selected: usize,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(settings: Settings, palette: Palette) -> Self {
        Self {
            settings,
            palette,
            screen: Screen::Home,
            home_selected: 0,
            status: None,
        }
    }

    /// Route a key press to the active screen. Returns `true` when the app
    /// should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let screen = mem::replace(&mut self.screen, Screen::Home);

        self.screen = match screen {
            Screen::Home => self.handle_home_key(code, &mut exit)?,
            Screen::Table(table) => self.handle_table_key(code, table, &mut exit)?,
            Screen::Detail { table, detail } => {
                self.handle_detail_key(code, table, detail, &mut exit)?
            }
            Screen::Quiz(quiz) => self.handle_quiz_key(code, quiz, &mut exit)?,
        };

        Ok(exit)
    }

    fn handle_home_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Screen> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Up => self.home_selected = self.home_selected.saturating_sub(1),
            KeyCode::Down => {
                self.home_selected = (self.home_selected + 1).min(HOME_MENU.len() - 1)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => return Ok(self.open_table()),
            KeyCode::Char('e') | KeyCode::Char('E') => return Ok(self.open_quiz()),
            KeyCode::Enter => {
                return Ok(match self.home_selected {
                    0 => self.open_table(),
                    _ => self.open_quiz(),
                });
            }
            _ => {}
        }
        Ok(Screen::Home)
    }

    fn handle_table_key(
        &mut self,
        code: KeyCode,
        mut table: TableScreen,
        exit: &mut bool,
    ) -> Result<Screen> {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                self.clear_status();
                return Ok(Screen::Home);
            }
            KeyCode::Left => table.move_selection(0, -1),
            KeyCode::Right => table.move_selection(0, 1),
            KeyCode::Up => table.move_selection(-1, 0),
            KeyCode::Down => table.move_selection(1, 0),
            KeyCode::Char(ch) if ch.is_ascii_digit() => table.push_jump_digit(ch),
            KeyCode::Backspace => {
                table.jump.pop();
            }
            KeyCode::Enter if !table.jump.is_empty() => match table.take_jump() {
                Some(Err(id)) => {
                    self.set_status(format!("No element #{id} on the table."), StatusKind::Error)
                }
                _ => self.clear_status(),
            },
            KeyCode::Enter => {
                if let Some(element) = table.current().cloned() {
                    self.clear_status();
                    let detail = DetailScreen::new(element, self.settings.default_unit);
                    return Ok(Screen::Detail { table, detail });
                }
                self.set_status(NO_DATA, StatusKind::Error);
            }
            _ => {}
        }
        Ok(Screen::Table(table))
    }

    fn handle_detail_key(
        &mut self,
        code: KeyCode,
        table: TableScreen,
        mut detail: DetailScreen,
        exit: &mut bool,
    ) -> Result<Screen> {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.clear_status();
                return Ok(Screen::Table(table));
            }
            KeyCode::Tab => detail.cycle_unit(),
            KeyCode::Char('c') | KeyCode::Char('C') => detail.unit = TemperatureUnit::Celsius,
            KeyCode::Char('f') | KeyCode::Char('F') => detail.unit = TemperatureUnit::Fahrenheit,
            KeyCode::Char('k') | KeyCode::Char('K') => detail.unit = TemperatureUnit::Kelvin,
            KeyCode::Char('o') | KeyCode::Char('O') => match self.open_asset(&detail.element) {
                Ok(message) => self.set_status(message, StatusKind::Info),
                Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
            },
            _ => {}
        }
        Ok(Screen::Detail { table, detail })
    }

    fn handle_quiz_key(
        &mut self,
        code: KeyCode,
        mut screen: QuizScreen,
        exit: &mut bool,
    ) -> Result<Screen> {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                self.clear_status();
                return Ok(Screen::Home);
            }
            KeyCode::Up => screen.move_cursor(-1),
            KeyCode::Down => screen.move_cursor(1),
            KeyCode::Enter => {
                let cursor = screen.cursor;
                self.record_answer(&mut screen, cursor);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                if screen.quiz.is_answered() {
                    return Ok(self.open_quiz_or(Screen::Quiz(screen)));
                }
                self.set_status("Answer this one first.", StatusKind::Info);
            }
            KeyCode::Char(ch) => {
                if let Some(index) = option_index(ch) {
                    if index < screen.quiz.choices().len() {
                        screen.cursor = index;
                        self.record_answer(&mut screen, index);
                    }
                }
            }
            _ => {}
        }
        Ok(Screen::Quiz(screen))
    }

    fn record_answer(&mut self, screen: &mut QuizScreen, index: usize) {
        if screen.quiz.is_answered() {
            return;
        }
        match screen.quiz.choose(index) {
            Some(Verdict::Correct) => self.set_status("You're correct!", StatusKind::Info),
            Some(Verdict::Incorrect { answer }) => self.set_status(
                format!("You're incorrect... The correct answer was {answer}."),
                StatusKind::Error,
            ),
            None => {}
        }
    }

    /// Build the table from a fresh read-only connection. An unusable store
    /// yields an empty table and an error in the footer.
    fn open_table(&mut self) -> Screen {
        self.clear_status();
        let Some(conn) = open_store_in(&self.settings.data_dir, &self.settings.store_name) else {
            self.set_status(NO_DATA, StatusKind::Error);
            return Screen::Table(TableScreen::empty());
        };

        match TableScreen::load(&conn) {
            Ok(table) => {
                if table.is_empty() {
                    self.set_status(NO_DATA, StatusKind::Error);
                }
                Screen::Table(table)
            }
            Err(err) => {
                warn!("periodic table failed to load: {err:#}");
                self.set_status(surface_error(&err), StatusKind::Error);
                Screen::Table(TableScreen::empty())
            }
        }
    }

    fn open_quiz(&mut self) -> Screen {
        self.open_quiz_or(Screen::Home)
    }

    /// Start a new question, falling back to `fallback` if the store cannot
    /// provide one.
    fn open_quiz_or(&mut self, fallback: Screen) -> Screen {
        self.clear_status();
        let Some(conn) = open_store_in(&self.settings.data_dir, &self.settings.store_name) else {
            self.set_status(NO_DATA, StatusKind::Error);
            return fallback;
        };

        match Quiz::from_store(&conn, &mut rand::thread_rng()) {
            Ok(quiz) => {
                info!("new quiz question about element {}", quiz.answer().id);
                Screen::Quiz(QuizScreen::new(quiz))
            }
            Err(err) => {
                warn!("could not build a quiz question: {err}");
                self.set_status(err.to_string(), StatusKind::Error);
                fallback
            }
        }
    }

    /// Hand the element's picture or model to the system viewer.
    fn open_asset(&self, element: &Element) -> Result<String> {
        let asset = element
            .image
            .as_ref()
            .ok_or_else(|| anyhow!("{} has no picture or model.", element.name))?;
        let path = self.settings.asset_dir.join(asset.file_name());
        if !path.is_file() {
            return Err(anyhow!("Asset {} not found.", path.display()));
        }
        open_path(&path).map_err(|err| anyhow!("Failed to open {}: {err}", path.display()))?;
        Ok(format!("Opened {}.", asset.file_name()))
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Home => self.draw_home(frame, content_area),
            Screen::Table(table) => self.draw_table(frame, content_area, table),
            Screen::Detail { detail, .. } => self.draw_detail(frame, content_area, detail),
            Screen::Quiz(quiz) => self.draw_quiz(frame, content_area, quiz),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to ChemistryLab",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(HOME_BLURB),
            Line::from(""),
        ];
        for (idx, entry) in HOME_MENU.iter().enumerate() {
            let style = if idx == self.home_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let pointer = if idx == self.home_selected { "▶ " } else { "  " };
            lines.push(Line::from(Span::styled(format!("{pointer}{entry}"), style)));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("ChemistryLab"));
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect, table: &TableScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let selected = table
            .current()
            .map(|element| format!("{} ({})", element.name, element.family))
            .unwrap_or_default();
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Periodic Table of Elements",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(if table.jump.is_empty() {
                format!("Select an element   {selected}")
            } else {
                format!("Go to #{}_", table.jump)
            }),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        if table.is_empty() {
            let message = Paragraph::new(NO_DATA)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let grid = chunks[1];
        let cell_width = (grid.width / TABLE_COLUMNS as u16).max(1);
        let cell_height = (grid.height / TABLE_ROWS as u16).max(1);

        for (idx, tile) in table.tiles.iter().enumerate() {
            let x = grid.x + tile.col as u16 * cell_width;
            let y = grid.y + tile.row as u16 * cell_height;
            if x >= grid.right() || y >= grid.bottom() {
                continue;
            }
            let cell = Rect {
                x,
                y,
                width: cell_width.min(grid.right() - x),
                height: cell_height.min(grid.bottom() - y),
            };
            // Leave a one-column gutter between tiles when there is room.
            let inner_width = if cell.width > 3 { cell.width - 1 } else { cell.width };
            let lines = build_tile_lines(
                &tile.element,
                &self.palette,
                inner_width,
                cell.height,
                idx == table.selected,
            );
            frame.render_widget(Paragraph::new(lines), cell);
        }
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, detail: &DetailScreen) {
        let element = &detail.element;
        let family_color = self.palette.family(element.family);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let mut summary = vec![
            Line::from(Span::styled(
                element.name.clone(),
                Style::default()
                    .fg(family_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Element #{}", element.id)),
            Line::from(Span::styled(
                element.symbol.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Atomic Mass: {}", element.mass_label())),
            Line::from(format!("State: {}", element.state.label())),
            Line::from(""),
        ];

        let mut badges = vec![badge(
            element.family.label(),
            family_color,
            self.palette.text_on(element.family),
        )];
        if element.is_halogen() {
            badges.push(Span::raw(" "));
            badges.push(badge("Halogen", self.palette.halogen(), Color::Black));
        } else if element.is_radioactive_badge() {
            badges.push(Span::raw(" "));
            badges.push(badge(
                "Radioactive",
                self.palette.family(Family::Radioactive),
                Color::White,
            ));
        }
        summary.push(Line::from(badges));
        summary.push(Line::from(""));
        summary.push(self.asset_line(element));

        let card = Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Element"));
        frame.render_widget(card, columns[0]);

        frame.render_widget(self.temperature_panel(detail), columns[1]);

        let description = Paragraph::new(element.desc.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("About"));
        frame.render_widget(description, chunks[1]);
    }

    fn asset_line(&self, element: &Element) -> Line<'static> {
        match &element.image {
            Some(Asset::Model(name)) => Line::from(vec![
                Span::raw("3D model: "),
                Span::styled(name.clone(), Style::default().add_modifier(Modifier::ITALIC)),
            ]),
            Some(Asset::Picture(name)) => {
                let mut spans = vec![Span::raw("Picture: "), Span::raw(name.clone())];
                if let Some(tint) = element.tint() {
                    spans.push(Span::raw("  tint "));
                    spans.push(Span::styled(
                        format!(" {} ", element.symbol),
                        Style::default()
                            .bg(tint_color(tint))
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                Line::from(spans)
            }
            None => Line::from(Span::styled(
                "No artwork for this element.",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }

    fn temperature_panel(&self, detail: &DetailScreen) -> Paragraph<'static> {
        let element = &detail.element;
        let block = Block::default().borders(Borders::ALL).title("Temperature");
        if !element.has_temperatures() {
            return Paragraph::new(Line::from(Span::styled(
                "No melting or boiling data.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
        }

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut picker = Vec::new();
        for unit in TemperatureUnit::ALL {
            let style = if unit == detail.unit {
                key_style.add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            picker.push(Span::styled(format!(" {} ", unit.label()), style));
        }

        let mut lines = vec![Line::from(picker), Line::from("")];
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if let Some(melting) = element.melting {
            lines.push(Line::from(vec![
                Span::styled("Melting point: ", bold),
                Span::raw(convert(detail.unit, melting)),
            ]));
        }
        if let Some(boiling) = element.boiling {
            lines.push(Line::from(vec![
                Span::styled("Boiling point: ", bold),
                Span::raw(convert(detail.unit, boiling)),
            ]));
        }
        Paragraph::new(lines).block(block)
    }

    fn draw_quiz(&self, frame: &mut Frame, area: Rect, screen: &QuizScreen) {
        let quiz = &screen.quiz;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(6),
                Constraint::Min(quiz.choices().len() as u16 + 2),
            ])
            .split(area);

        let title = Paragraph::new(Span::styled(
            "What element does this describe?",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let prompt = Paragraph::new(quiz.prompt().to_string())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(prompt, chunks[1]);

        let answer_id = quiz.answer().id;
        let mut options = Vec::with_capacity(quiz.choices().len());
        for (idx, element) in quiz.choices().iter().enumerate() {
            let pointer = if idx == screen.cursor { "▶ " } else { "  " };
            let mut style = Style::default();
            if quiz.picked() == Some(idx) {
                style = style.bg(Color::Rgb(128, 171, 245)).fg(Color::Black);
            }
            if quiz.is_answered() && element.id == answer_id {
                style = style.add_modifier(Modifier::BOLD);
            }
            options.push(Line::from(vec![
                Span::raw(pointer),
                Span::styled(format!("({}) {}", option_letter(idx), element.name), style),
            ]));
        }
        let list = Paragraph::new(options).block(Block::default().borders(Borders::ALL).title("Choices"));
        frame.render_widget(list, chunks[2]);

        if let Some(verdict) = quiz.verdict() {
            self.draw_verdict(frame, area, &verdict);
        }
    }

    fn draw_verdict(&self, frame: &mut Frame, area: Rect, verdict: &Verdict) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let (color, lines) = match verdict {
            Verdict::Correct => (
                Color::Rgb(51, 204, 51),
                vec![Line::from(Span::styled(
                    "You're correct!",
                    Style::default().add_modifier(Modifier::BOLD),
                ))],
            ),
            Verdict::Incorrect { answer } => (
                Color::Rgb(204, 51, 51),
                vec![
                    Line::from(Span::styled(
                        "You're incorrect...",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("The correct answer was {answer}.")),
                ],
            ),
        };

        let mut lines = lines;
        lines.push(Line::from(""));
        lines.push(Line::from("Press N for a new question."));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(color).fg(Color::White))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&str, &str)] = match &self.screen {
            Screen::Home => &[
                ("[↑↓]", " Navigate   "),
                ("[Enter]", " Open   "),
                ("[P]", " Periodic Table   "),
                ("[E]", " Elements Test   "),
                ("[Q]", " Quit"),
            ],
            Screen::Table(_) => &[
                ("[←↑↓→]", " Move   "),
                ("[Enter]", " Details   "),
                ("[0-9]", " Go to number   "),
                ("[Esc]", " Home   "),
                ("[Q]", " Quit"),
            ],
            Screen::Detail { .. } => &[
                ("[Tab]", " Units   "),
                ("[C/F/K]", " Pick unit   "),
                ("[O]", " Open artwork   "),
                ("[Esc]", " Back   "),
                ("[Q]", " Quit"),
            ],
            Screen::Quiz(screen) if screen.quiz.is_answered() => &[
                ("[N]", " New question   "),
                ("[Esc]", " Home   "),
                ("[Q]", " Quit"),
            ],
            Screen::Quiz(_) => &[
                ("[A-D]", " Answer   "),
                ("[↑↓]", " Navigate   "),
                ("[Enter]", " Choose   "),
                ("[Esc]", " Home"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(key.to_string(), key_style));
            spans.push(Span::raw(label.to_string()));
        }
        Line::from(spans)
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn screen_name(&self) -> &'static str {
        match self.screen {
            Screen::Home => "home",
            Screen::Table(_) => "table",
            Screen::Detail { .. } => "detail",
            Screen::Quiz(_) => "quiz",
        }
    }

    #[cfg(test)]
    fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::db::install_store;

    fn seeded_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_data_dir(dir.path().to_path_buf());
        install_store(&settings.data_dir, &settings.store_name).unwrap();
        (dir, App::new(settings, Palette::default()))
    }

    fn render(app: &App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    fn current_detail(app: &App) -> &DetailScreen {
        match &app.screen {
            Screen::Detail { detail, .. } => detail,
            _ => panic!("not on the detail screen"),
        }
    }

    #[test]
    fn table_to_detail_and_back() {
        let (_dir, mut app) = seeded_app();
        app.handle_key(KeyCode::Char('p')).unwrap();
        assert_eq!(app.screen_name(), "table");
        render(&app);

        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.screen_name(), "detail");
        assert_eq!(current_detail(&app).element.name, "Lithium");
        render(&app);

        app.handle_key(KeyCode::Char('f')).unwrap();
        assert_eq!(current_detail(&app).unit, TemperatureUnit::Fahrenheit);
        app.handle_key(KeyCode::Tab).unwrap();
        assert_eq!(current_detail(&app).unit, TemperatureUnit::Kelvin);
        render(&app);

        app.handle_key(KeyCode::Esc).unwrap();
        match &app.screen {
            Screen::Table(table) => assert_eq!(table.current().unwrap().name, "Lithium"),
            _ => panic!("expected the table"),
        }
    }

    #[test]
    fn typing_a_number_jumps_on_the_table() {
        let (_dir, mut app) = seeded_app();
        app.handle_key(KeyCode::Char('p')).unwrap();
        app.handle_key(KeyCode::Char('2')).unwrap();
        app.handle_key(KeyCode::Char('6')).unwrap();
        render(&app);
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.screen_name(), "table");

        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(current_detail(&app).element.symbol, "Fe");

        app.handle_key(KeyCode::Esc).unwrap();
        app.handle_key(KeyCode::Char('0')).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.status_text(), Some("No element #0 on the table."));
    }

    #[test]
    fn missing_store_renders_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_data_dir(dir.path().to_path_buf());
        let mut app = App::new(settings, Palette::default());

        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.screen_name(), "table");
        assert_eq!(app.status_text(), Some(NO_DATA));
        render(&app);

        // Nothing to open.
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.screen_name(), "table");
    }

    #[test]
    fn missing_store_keeps_quiz_on_home() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::with_data_dir(dir.path().to_path_buf());
        let mut app = App::new(settings, Palette::default());

        app.handle_key(KeyCode::Char('e')).unwrap();
        assert_eq!(app.screen_name(), "home");
        assert_eq!(app.status_text(), Some(NO_DATA));
    }

    #[test]
    fn quiz_locks_first_answer() {
        let (_dir, mut app) = seeded_app();
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.screen_name(), "quiz");
        render(&app);

        // New question is refused until the current one is answered.
        app.handle_key(KeyCode::Char('n')).unwrap();
        assert_eq!(app.status_text(), Some("Answer this one first."));

        app.handle_key(KeyCode::Char('b')).unwrap();
        let first = match &app.screen {
            Screen::Quiz(screen) => screen.quiz.verdict().unwrap(),
            _ => panic!("expected the quiz"),
        };
        app.handle_key(KeyCode::Char('a')).unwrap();
        match &app.screen {
            Screen::Quiz(screen) => {
                assert_eq!(screen.quiz.picked(), Some(1));
                assert_eq!(screen.quiz.verdict().unwrap(), first);
            }
            _ => panic!("expected the quiz"),
        }
        render(&app);

        app.handle_key(KeyCode::Char('n')).unwrap();
        match &app.screen {
            Screen::Quiz(screen) => assert!(!screen.quiz.is_answered()),
            _ => panic!("expected a fresh question"),
        }
    }

    #[test]
    fn missing_asset_is_reported() {
        let (_dir, mut app) = seeded_app();
        app.handle_key(KeyCode::Char('p')).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        app.handle_key(KeyCode::Char('o')).unwrap();
        assert_eq!(app.screen_name(), "detail");
        assert!(app.status_text().unwrap().contains("not found"));
    }

    #[test]
    fn quit_from_every_screen() {
        let (_dir, mut app) = seeded_app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());

        app.handle_key(KeyCode::Char('p')).unwrap();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }
}
