use std::mem;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use log::{info, warn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};
use ratatui::Frame;

use crate::db::Catalog;
use crate::models::MIN_YEAR;

use super::forms::{BookField, BookForm, ConfirmBookDelete, PathPrompt};
use super::helpers::{centered_rect, cursor_column, found_message, surface_error};
use super::screens::{BooksScreen, ExportScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the search box above the book table.
const SEARCH_HEIGHT: u16 = 3;
/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(5);
/// Rows skipped by PageUp/PageDown.
const PAGE_SIZE: isize = 10;

/// Top-level tabs.
enum Screen {
    Books,
    Export,
}

impl Screen {
    fn index(&self) -> usize {
        match self {
            Screen::Books => 0,
            Screen::Export => 1,
        }
    }
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    Searching(SearchState),
    AddingBook(BookForm),
    EditingBook { id: i64, form: BookForm },
    ConfirmDelete(ConfirmBookDelete),
    ExportingCsv(PathPrompt),
}

/// State for an active inline search.
struct SearchState {
    query: String,
}

/// Footer message text, its severity and when it stops being shown.
struct StatusMessage {
    text: String,
    kind: StatusKind,
    expires_at: Instant,
}

impl StatusMessage {
    fn is_visible(&self) -> bool {
        Instant::now() < self.expires_at
    }
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

/// Central application state. Owns the catalog for the whole session.
pub struct App {
    catalog: Catalog,
    books: BooksScreen,
    export: ExportScreen,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
    default_csv_path: PathBuf,
}

impl App {
    pub fn new(catalog: Catalog, default_csv_path: PathBuf) -> Result<Self> {
        let books = catalog.list_all().context("failed to load books")?;
        Ok(Self {
            catalog,
            books: BooksScreen::new(books),
            export: ExportScreen::new(String::new()),
            screen: Screen::Books,
            mode: Mode::Normal,
            status: None,
            default_csv_path,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Route a key press to the active mode. Returns `true` when the user
    /// asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching(state) => self.handle_search(code, state)?,
            Mode::AddingBook(form) => self.handle_add_book(code, form)?,
            Mode::EditingBook { id, form } => self.handle_edit_book(code, id, form)?,
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm)?,
            Mode::ExportingCsv(prompt) => self.handle_export_csv(code, prompt)?,
        };

        Ok(exit)
    }

    /// Jump straight into the search box from anywhere outside a dialog.
    pub(crate) fn handle_ctrl_f(&mut self) -> Result<()> {
        if matches!(self.mode, Mode::Normal) {
            self.screen = Screen::Books;
            self.mode = self.start_search();
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Books => match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc => {
                    if self.books.is_filtered() {
                        self.apply_search("");
                        self.set_status("Displaying all books", StatusKind::Info);
                    } else {
                        *exit = true;
                    }
                }
                KeyCode::Up => self.books.move_selection(-1),
                KeyCode::Down => self.books.move_selection(1),
                KeyCode::PageUp => self.books.move_selection(-PAGE_SIZE),
                KeyCode::PageDown => self.books.move_selection(PAGE_SIZE),
                KeyCode::Home => self.books.select_first(),
                KeyCode::End => self.books.select_last(),
                KeyCode::Char('f') | KeyCode::Char('/') => return Ok(self.start_search()),
                KeyCode::Char('+') | KeyCode::Char('a') => {
                    self.clear_status();
                    return Ok(Mode::AddingBook(BookForm::default()));
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    if let Some(book) = self.books.current_book() {
                        let mode = Mode::EditingBook {
                            id: book.id,
                            form: BookForm::from_book(book),
                        };
                        self.clear_status();
                        return Ok(mode);
                    }
                    self.set_status("Please select a book to update!", StatusKind::Error);
                }
                KeyCode::Char('-') | KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(book) = self.books.current_book().cloned() {
                        self.clear_status();
                        return Ok(Mode::ConfirmDelete(ConfirmBookDelete { book }));
                    }
                    self.set_status("Please select a book to delete!", StatusKind::Error);
                }
                KeyCode::Tab | KeyCode::BackTab => self.open_export_view(),
                _ => {}
            },
            Screen::Export => match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                    self.screen = Screen::Books;
                }
                KeyCode::Up => self.export.scroll_by(-1),
                KeyCode::Down => self.export.scroll_by(1),
                KeyCode::PageUp => self.export.scroll_by(-(PAGE_SIZE as i32)),
                KeyCode::PageDown => self.export.scroll_by(PAGE_SIZE as i32),
                KeyCode::Home => self.export.scroll = 0,
                KeyCode::End => self.export.scroll_to_end(),
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    if self.refresh_export_text() {
                        self.set_status("Books exported to text!", StatusKind::Info);
                    }
                }
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    self.clear_status();
                    let default_path = self.default_csv_path.display().to_string();
                    return Ok(Mode::ExportingCsv(PathPrompt::new(&default_path)));
                }
                _ => {}
            },
        }
        Ok(Mode::Normal)
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.apply_search("");
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                if self.books.is_filtered() {
                    self.set_status(found_message(self.books.books.len()), StatusKind::Info);
                } else {
                    self.set_status("Displaying all books", StatusKind::Info);
                }
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                self.books.move_selection(-1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Down => {
                self.books.move_selection(1);
                return Ok(Mode::Searching(state));
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => state.query.push(ch),
            _ => return Ok(Mode::Searching(state)),
        }

        self.apply_search(&state.query);
        Ok(Mode::Searching(state))
    }

    fn handle_add_book(&mut self, code: KeyCode, mut form: BookForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add book cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Enter => match self.save_new_book(&form) {
                Ok(_) => keep_open = false,
                Err(err) => self.show_form_error(&mut form, &err),
            },
            _ => self.edit_form(code, &mut form),
        }

        if keep_open {
            Ok(Mode::AddingBook(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_book(&mut self, code: KeyCode, id: i64, mut form: BookForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Enter => match self.save_existing_book(id, &form) {
                Ok(_) => keep_open = false,
                Err(err) => self.show_form_error(&mut form, &err),
            },
            _ => self.edit_form(code, &mut form),
        }

        if keep_open {
            Ok(Mode::EditingBook { id, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Keys shared by the add and edit forms.
    fn edit_form(&self, code: KeyCode, form: &mut BookForm) {
        let current_year = self.catalog.current_year();
        match code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.previous_field(),
            KeyCode::Up if form.active == BookField::Year => form.step_year(1, current_year),
            KeyCode::Down if form.active == BookField::Year => form.step_year(-1, current_year),
            KeyCode::Up => form.previous_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmBookDelete) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Err(err) = self.perform_delete(&confirm) {
                    self.set_status(surface_error(&err), StatusKind::Error);
                    // A missing row means the list is stale; resync it.
                    if let Err(err) = self.reload_books(None) {
                        self.set_status(surface_error(&err), StatusKind::Error);
                    }
                }
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmDelete(confirm)),
        }
    }

    fn handle_export_csv(&mut self, code: KeyCode, mut prompt: PathPrompt) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("CSV export cancelled.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                let Some(destination) = prompt.destination().map(str::to_string) else {
                    prompt.error = Some("Enter a file name for the export.".to_string());
                    return Ok(Mode::ExportingCsv(prompt));
                };
                match self.catalog.export_csv(&destination) {
                    Ok(_) => {
                        self.set_status(
                            format!("Books exported to CSV at {destination}!"),
                            StatusKind::Info,
                        );
                        return Ok(Mode::Normal);
                    }
                    Err(err) => {
                        let message = err.to_string();
                        prompt.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(ch) => prompt.push_char(ch),
            _ => {}
        }
        Ok(Mode::ExportingCsv(prompt))
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_tabs(frame, chunks[0]);
        match self.screen {
            Screen::Books => self.draw_books(frame, chunks[1]),
            Screen::Export => self.draw_export(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::AddingBook(form) => self.draw_book_form(frame, area, "Add Book", form),
            Mode::EditingBook { form, .. } => {
                self.draw_book_form(frame, area, "Update Book", form)
            }
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::ExportingCsv(prompt) => self.draw_csv_prompt(frame, area, prompt),
            Mode::Searching(_) | Mode::Normal => {}
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(vec!["Books", "Export"])
            .select(self.screen.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_books(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(1)])
            .split(area);

        self.draw_search_box(frame, chunks[0]);

        let title = format!("Books ({})", self.books.books.len());
        if self.books.books.is_empty() {
            let text = if self.books.is_filtered() {
                "No books match the current search."
            } else {
                "No books yet. Press '+' to add one."
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let rows = self.books.books.iter().map(|book| {
            Row::new(vec![
                Cell::from(book.title.clone()),
                Cell::from(book.author.clone()),
                Cell::from(book.year.to_string()),
            ])
        });
        let header = Row::new(["Title", "Author", "Year"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(55),
                Constraint::Percentage(35),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.books.selected));
        frame.render_stateful_widget(table, chunks[1], &mut state);
    }

    fn draw_search_box(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Search");

        if let Mode::Searching(state) = &self.mode {
            let block = block.border_style(Style::default().fg(Color::Yellow));
            let inner = block.inner(area);
            let paragraph = Paragraph::new(format!("Search: {}", state.query)).block(block);
            frame.render_widget(paragraph, area);

            let cursor_x = cursor_column(inner, "Search: ", state.query.chars().count());
            frame.set_cursor_position((cursor_x, inner.y));
            return;
        }

        let line = if self.books.is_filtered() {
            Line::from(vec![
                Span::raw(format!("Search: {}", self.books.filter)),
                Span::styled("  (Esc to clear)", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(Span::styled(
                "Search by title or author (press f)",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_export(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Text Export");
        let paragraph = if self.export.text.is_empty() {
            Paragraph::new("Press [t] to export to text.")
                .alignment(Alignment::Center)
                .block(block)
        } else {
            Paragraph::new(self.export.text.as_str())
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((self.export.scroll, 0))
        };
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = match &self.status {
            Some(status) if status.is_visible() => {
                Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
            }
            _ => Line::from(""),
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::AddingBook(_) | Mode::EditingBook { .. }) => &[
                ("[Tab]", "Next Field"),
                ("[↑↓]", "Pick Year"),
                ("[Enter]", "Save"),
                ("[Esc]", "Cancel"),
            ],
            (_, Mode::ConfirmDelete(_)) => &[("[y]", "Delete"), ("[n]", "Keep")],
            (_, Mode::ExportingCsv(_)) => &[("[Enter]", "Export"), ("[Esc]", "Cancel")],
            (_, Mode::Searching(_)) => &[
                ("[↑↓]", "Select"),
                ("[Enter]", "Done"),
                ("[Esc]", "Clear"),
            ],
            (Screen::Export, _) => &[
                ("[t]", "Export to Text"),
                ("[c]", "Export to CSV"),
                ("[↑↓]", "Scroll"),
                ("[Tab]", "Books"),
                ("[q]", "Quit"),
            ],
            (Screen::Books, _) => &[
                ("[↑↓]", "Select"),
                ("[f]", "Search"),
                ("[+]", "Add"),
                ("[e]", "Update"),
                ("[-]", "Delete"),
                ("[Tab]", "Export"),
                ("[q]", "Quit"),
            ],
        };
        key_hints(hints)
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &BookForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line("Title", BookField::Title),
            form.build_line("Author", BookField::Author),
            form.build_line("Year", BookField::Year),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!(
                    "Year {MIN_YEAR}-{} • Enter to save • Tab to switch • Esc to cancel",
                    self.catalog.current_year()
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (prefix, row) = match form.active {
            BookField::Title => ("Title: ", 0),
            BookField::Author => ("Author: ", 1),
            BookField::Year => ("Year: ", 2),
        };
        let cursor_x = cursor_column(inner, prefix, form.value_len(form.active));
        frame.set_cursor_position((cursor_x, inner.y.saturating_add(row)));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmBookDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Book").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Delete '{}' permanently?", confirm.book)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_csv_prompt(&self, frame: &mut Frame, area: Rect, prompt: &PathPrompt) {
        let popup_area = centered_rect(70, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Export to CSV").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let footer = match &prompt.error {
            Some(error) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
            None => Span::styled(
                "Enter to export • Esc to cancel",
                Style::default().fg(Color::Gray),
            ),
        };
        let lines = vec![
            Line::from(vec![
                Span::raw("Save as: "),
                Span::styled(prompt.path.clone(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(footer),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let cursor_x = cursor_column(inner, "Save as: ", prompt.path.chars().count());
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        let text = text.into();
        if matches!(kind, StatusKind::Error) {
            warn!("{text}");
        }
        self.status = Some(StatusMessage {
            text,
            kind,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn show_form_error(&mut self, form: &mut BookForm, err: &anyhow::Error) {
        let message = surface_error(err);
        form.error = Some(message.clone());
        self.set_status(message, StatusKind::Error);
    }

    fn start_search(&self) -> Mode {
        Mode::Searching(SearchState {
            query: self.books.filter.clone(),
        })
    }

    /// Re-run the catalog search for `term` and show the result. Failures are
    /// reported in the footer and leave the current rows untouched.
    fn apply_search(&mut self, term: &str) {
        match self.catalog.search(term) {
            Ok(books) => {
                self.books.filter = term.trim().to_string();
                self.books.set_books(books, None);
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn save_new_book(&mut self, form: &BookForm) -> Result<()> {
        let input = form.parse_inputs()?;
        let book = self.catalog.insert(&input)?;
        info!("Added book {}: {}", book.id, book);
        self.show_all_books(Some(book.id))?;
        self.set_status("Book added successfully!", StatusKind::Info);
        Ok(())
    }

    fn save_existing_book(&mut self, id: i64, form: &BookForm) -> Result<()> {
        let input = form.parse_inputs()?;
        let book = self.catalog.replace(id, &input)?;
        info!("Updated book {}: {}", book.id, book);
        self.show_all_books(Some(book.id))?;
        self.set_status("Book updated successfully!", StatusKind::Info);
        Ok(())
    }

    fn perform_delete(&mut self, confirm: &ConfirmBookDelete) -> Result<()> {
        self.catalog.delete(confirm.book.id)?;
        info!("Deleted book {}: {}", confirm.book.id, confirm.book);
        self.show_all_books(None)?;
        self.set_status("Book deleted successfully!", StatusKind::Info);
        Ok(())
    }

    /// Drop any active search and reload the full list, as every mutation
    /// does.
    fn show_all_books(&mut self, focus_id: Option<i64>) -> Result<()> {
        self.books.filter.clear();
        self.reload_books(focus_id)
    }

    fn reload_books(&mut self, focus_id: Option<i64>) -> Result<()> {
        let books = self
            .catalog
            .search(&self.books.filter)
            .context("failed to reload books")?;
        self.books.set_books(books, focus_id);
        Ok(())
    }

    /// Switch to the Export tab with a fresh rendering. Stays on Books when
    /// the catalog cannot be read.
    fn open_export_view(&mut self) {
        if self.refresh_export_text() {
            self.screen = Screen::Export;
        }
    }

    /// Re-render the text export. Failures land in the footer and the
    /// previous text is kept; returns whether the refresh succeeded.
    fn refresh_export_text(&mut self) -> bool {
        match self
            .catalog
            .export_text()
            .context("failed to render text export")
        {
            Ok(text) => {
                self.export.set_text(text);
                true
            }
            Err(err) => {
                self.set_status(surface_error(&err), StatusKind::Error);
                false
            }
        }
    }
}

/// Lay out `[key] Label` pairs the way every footer shows them.
fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(key.to_string(), key_style));
        let separator = if idx + 1 < hints.len() { "   " } else { "" };
        spans.push(Span::raw(format!(" {label}{separator}")));
    }
    Line::from(spans)
}
