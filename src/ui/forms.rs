use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::error::Result;
use crate::models::{Book, BookInput, MIN_YEAR};

/// Internal representation of the add/edit book form.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields available within the book form, in focus order.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub(crate) enum BookField {
    #[default]
    Title,
    Author,
    Year,
}

impl BookForm {
    /// Populate the form from the selected row when editing.
    pub(crate) fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            active: BookField::Title,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Year,
            BookField::Year => BookField::Title,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Year,
            BookField::Author => BookField::Title,
            BookField::Year => BookField::Author,
        };
    }

    /// Append a character to the active field. The year only takes digits.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            BookField::Year => {
                if ch.is_ascii_digit() {
                    self.year.push(ch);
                    true
                } else {
                    false
                }
            }
            BookField::Title | BookField::Author => {
                if ch.is_control() {
                    return false;
                }
                self.field_mut(self.active).push(ch);
                true
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.field_mut(self.active).pop();
    }

    /// Step the year like a picker: an empty or unreadable year jumps to
    /// `current_year`, anything else moves by `delta` and stays within
    /// `MIN_YEAR..=current_year`.
    pub(crate) fn step_year(&mut self, delta: i64, current_year: i64) {
        let next = match self.year.trim().parse::<i64>() {
            Ok(year) if (MIN_YEAR..=current_year).contains(&year) => year + delta,
            _ => current_year,
        };
        self.year = next.clamp(MIN_YEAR, current_year).to_string();
    }

    /// Turn the raw text into a `BookInput`. Range and emptiness checks are
    /// left to the catalog so create and update share one gate.
    pub(crate) fn parse_inputs(&self) -> Result<BookInput> {
        BookInput::parse(&self.title, &self.author, &self.year)
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: BookField) -> Line<'static> {
        let value = self.field(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.field(field).chars().count()
    }

    fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
        }
    }

    fn field_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Year => &mut self.year,
        }
    }
}

#[derive(Clone)]
pub(crate) struct ConfirmBookDelete {
    pub(crate) book: Book,
}

/// Single-line prompt for the CSV export destination.
#[derive(Clone)]
pub(crate) struct PathPrompt {
    pub(crate) path: String,
    pub(crate) error: Option<String>,
}

impl PathPrompt {
    pub(crate) fn new(default_path: &str) -> Self {
        Self {
            path: default_path.to_string(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.path.push(ch);
            self.error = None;
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.path.pop();
    }

    /// The trimmed destination, or `None` while the prompt is blank.
    pub(crate) fn destination(&self) -> Option<&str> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut BookForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn year_field_only_accepts_digits() {
        let mut form = BookForm::default();
        form.active = BookField::Year;
        type_str(&mut form, "19a6-5");
        assert_eq!(form.year, "1965");
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = BookForm::default();
        form.next_field();
        assert_eq!(form.active, BookField::Author);
        form.next_field();
        form.next_field();
        assert_eq!(form.active, BookField::Title);
        form.previous_field();
        assert_eq!(form.active, BookField::Year);
    }

    #[test]
    fn step_year_starts_at_current_year_and_clamps() {
        let mut form = BookForm::default();
        form.step_year(-1, 2024);
        assert_eq!(form.year, "2024");

        form.step_year(1, 2024);
        assert_eq!(form.year, "2024");

        form.step_year(-1, 2024);
        assert_eq!(form.year, "2023");

        form.year = "1900".into();
        form.step_year(-1, 2024);
        assert_eq!(form.year, "1900");

        form.year = "42".into();
        form.step_year(1, 2024);
        assert_eq!(form.year, "2024");
    }

    #[test]
    fn parse_inputs_trims_text_fields() {
        let mut form = BookForm::default();
        type_str(&mut form, " Dune ");
        form.next_field();
        type_str(&mut form, "Herbert");
        form.next_field();
        type_str(&mut form, "1965");

        let input = form.parse_inputs().unwrap();
        assert_eq!(input, BookInput::new("Dune", "Herbert", 1965));
    }

    #[test]
    fn blank_prompt_has_no_destination() {
        let mut prompt = PathPrompt::new("books.csv");
        assert_eq!(prompt.destination(), Some("books.csv"));
        for _ in 0.."books.csv".len() {
            prompt.backspace();
        }
        prompt.push_char(' ');
        assert_eq!(prompt.destination(), None);
    }
}
