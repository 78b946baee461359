use crate::models::Book;

/// Rows shown on the Books tab together with the filter that produced them.
pub(crate) struct BooksScreen {
    pub(crate) books: Vec<Book>,
    /// Search term the current rows were loaded with. Empty means all books.
    pub(crate) filter: String,
    pub(crate) selected: usize,
}

impl BooksScreen {
    pub(crate) fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            filter: String::new(),
            selected: 0,
        }
    }

    /// Swap in freshly loaded rows. When `focus_id` is present and among the
    /// rows, the selection follows it; otherwise the index is clamped.
    pub(crate) fn set_books(&mut self, books: Vec<Book>, focus_id: Option<i64>) {
        self.books = books;
        if let Some(idx) = focus_id.and_then(|id| self.books.iter().position(|b| b.id == id)) {
            self.selected = idx;
        }
        self.ensure_in_bounds();
    }

    pub(crate) fn is_filtered(&self) -> bool {
        !self.filter.trim().is_empty()
    }

    pub(crate) fn current_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.books.is_empty() {
            return;
        }
        let last = self.books.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.books.len().saturating_sub(1);
    }

    fn ensure_in_bounds(&mut self) {
        if self.selected >= self.books.len() {
            self.selected = self.books.len().saturating_sub(1);
        }
    }
}

/// Plain-text export shown on the Export tab.
pub(crate) struct ExportScreen {
    pub(crate) text: String,
    pub(crate) scroll: u16,
}

impl ExportScreen {
    pub(crate) fn new(text: String) -> Self {
        Self { text, scroll: 0 }
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }

    pub(crate) fn scroll_to_end(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.text.lines().count().saturating_sub(1);
        lines.min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Someone".to_string(),
            year: 2000,
        }
    }

    #[test]
    fn selection_is_clamped_to_rows() {
        let mut screen = BooksScreen::new(vec![book(1, "A"), book(2, "B"), book(3, "C")]);
        screen.move_selection(10);
        assert_eq!(screen.current_book().map(|b| b.id), Some(3));
        screen.move_selection(-10);
        assert_eq!(screen.current_book().map(|b| b.id), Some(1));

        screen.select_last();
        screen.set_books(vec![book(1, "A")], None);
        assert_eq!(screen.selected, 0);

        screen.set_books(Vec::new(), None);
        assert!(screen.current_book().is_none());
    }

    #[test]
    fn set_books_follows_focus_id() {
        let mut screen = BooksScreen::new(vec![book(1, "A")]);
        screen.set_books(vec![book(1, "A"), book(7, "B"), book(9, "C")], Some(9));
        assert_eq!(screen.selected, 2);

        screen.set_books(vec![book(1, "A"), book(7, "B")], Some(42));
        assert_eq!(screen.selected, 1);
    }

    #[test]
    fn export_scroll_stays_within_text() {
        let mut screen = ExportScreen::new("a\nb\nc".to_string());
        screen.scroll_by(10);
        assert_eq!(screen.scroll, 2);
        screen.scroll_by(-5);
        assert_eq!(screen.scroll, 0);

        screen.scroll_to_end();
        screen.set_text("only".to_string());
        assert_eq!(screen.scroll, 0);
    }
}
