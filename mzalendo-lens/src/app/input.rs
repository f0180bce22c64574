//! Keyboard and paste handling per screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{App, BrowserPick};
use crate::session::{ScreenKind, SessionError};

const DETAILED_PAGE: i32 = 10;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global bindings
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return;
            }
            _ => {}
        }

        if self.file_browser.visible {
            self.handle_file_browser_key(key);
            return;
        }

        if self.show_detailed {
            self.handle_detailed_key(key);
            return;
        }

        let result = match self.session.kind() {
            ScreenKind::Intake => self.handle_intake_key(key, ctrl),
            ScreenKind::Breakdown => self.handle_breakdown_key(key),
            ScreenKind::Quiz => self.handle_quiz_key(key),
            ScreenKind::Summary => self.handle_summary_key(key),
        };

        if let Err(err) = result {
            debug!(error = %err, "key ignored");
        }
    }

    /// Bracketed paste lands in the bill text
    pub fn handle_paste(&mut self, text: &str) {
        if self.file_browser.visible {
            text.chars().filter(|c| !c.is_control()).for_each(|c| self.file_browser.push_search(c));
        } else if let Some(draft) = self.session.draft_mut() {
            draft.push_str(text);
        }
    }

    fn handle_intake_key(&mut self, key: KeyEvent, ctrl: bool) -> Result<(), SessionError> {
        match key.code {
            KeyCode::Esc => self.session.dismiss_error(),
            KeyCode::Char('o') if ctrl => self.open_file_browser(),
            KeyCode::Char('x') if ctrl => self.detach_file(),
            KeyCode::Tab => self.open_file_browser(),
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(draft) = self.session.draft_mut() {
                    draft.push_char('\n');
                }
            }
            KeyCode::Enter => match self.submit() {
                Err(SessionError::EmptyDraft) => {
                    self.notifications.warning(
                        "Nothing to decode",
                        "Paste bill text or attach a document first.",
                    );
                }
                other => other?,
            },
            KeyCode::Backspace => {
                if let Some(draft) = self.session.draft_mut() {
                    draft.backspace();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(draft) = self.session.draft_mut() {
                    draft.push_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_breakdown_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.enter_quiz(),
            KeyCode::Esc => {
                self.reset();
                Ok(())
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.advance().map(|_| ()),
            KeyCode::Char(c) => match option_for_key(c) {
                Some(option) => self.select_answer(option),
                None => Ok(()),
            },
            // Abandon the quiz, back to intake
            KeyCode::Esc => {
                self.reset();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        match key.code {
            KeyCode::Char('d') | KeyCode::Char('D') => self.toggle_detailed(),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Esc => self.reset(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_detailed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.show_detailed = false;
                self.detailed_scroll = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detailed(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detailed(1),
            KeyCode::PageUp => self.scroll_detailed(-DETAILED_PAGE),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_detailed(DETAILED_PAGE),
            KeyCode::Home => self.detailed_scroll = 0,
            KeyCode::End => self.scroll_detailed(i32::from(u16::MAX)),
            _ => {}
        }
    }

    fn open_file_browser(&mut self) {
        if self.session.draft_mut().is_some() {
            self.file_browser.open();
        }
    }

    fn handle_file_browser_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.file_browser.close(),
            KeyCode::Up => self.file_browser.previous(),
            KeyCode::Down => self.file_browser.next(),
            KeyCode::Backspace => self.file_browser.pop_search(),
            KeyCode::Enter => match self.file_browser.select() {
                Some(BrowserPick::File(path)) => {
                    self.attach_file(&path);
                }
                Some(BrowserPick::EnteredDir(dir)) => debug!(dir = %dir.display(), "browsing"),
                None => {}
            },
            KeyCode::Char(c) => self.file_browser.push_search(c),
            _ => {}
        }
    }
}

/// A-D / a-d / 1-9 to an option index
pub fn option_for_key(c: char) -> Option<usize> {
    match c {
        'a'..='h' => Some(c as usize - 'a' as usize),
        'A'..='H' => Some(c as usize - 'A' as usize),
        '1'..='9' => Some(c as usize - '1' as usize),
        _ => None,
    }
}
