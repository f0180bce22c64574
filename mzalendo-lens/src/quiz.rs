//! Quiz engine: scoring and reveal sequencing over the analysis quiz

use std::fmt;

use mzalendo_lens_sdk::QuizQuestion;
use uuid::Uuid;

/// Minimum fraction of correct answers that counts as a pass
pub const PASS_THRESHOLD: f64 = 0.6;

/// Final tally carried into the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    /// An empty quiz is never a pass
    pub fn is_pass(&self) -> bool {
        self.total > 0 && self.ratio() >= PASS_THRESHOLD
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Ties a delayed explanation reveal to the question that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    quiz_id: Uuid,
    question: usize,
}

/// Outcome of a successful [`QuizEngine::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved on to the question at this index
    Next(usize),
    /// Last question done
    Completed(QuizScore),
}

/// Per-quiz progress. Created fresh when the quiz screen is entered and
/// dropped when it is left.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    id: Uuid,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    selected: Option<usize>,
    score: usize,
    explanation_visible: bool,
    completed: bool,
}

impl QuizEngine {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            current_index: 0,
            selected: None,
            score: 0,
            explanation_visible: false,
            completed: false,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn explanation_visible(&self) -> bool {
        self.explanation_visible
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// `Some(true)` once the current question was answered correctly
    pub fn answered_correctly(&self) -> Option<bool> {
        let question = self.current_question()?;
        self.selected.map(|idx| question.is_correct(idx))
    }

    /// Record an answer for the current question.
    ///
    /// Only the first answer per question counts; later calls and
    /// out-of-range options are ignored and return `None`. On success the
    /// caller gets a ticket to reveal the explanation after its delay.
    pub fn select_answer(&mut self, option: usize) -> Option<RevealTicket> {
        if self.completed || self.selected.is_some() {
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        if option >= question.options.len() {
            return None;
        }

        self.selected = Some(option);
        if question.is_correct(option) {
            self.score += 1;
        }

        Some(RevealTicket {
            quiz_id: self.id,
            question: self.current_index,
        })
    }

    /// Show the explanation if the ticket still belongs to the current
    /// question. Returns whether it was applied.
    pub fn reveal_explanation(&mut self, ticket: RevealTicket) -> bool {
        if ticket.quiz_id != self.id
            || ticket.question != self.current_index
            || self.selected.is_none()
            || self.completed
        {
            return false;
        }
        self.explanation_visible = true;
        true
    }

    /// Move past the current question. No-op until an answer is selected.
    pub fn advance(&mut self) -> Option<QuizStep> {
        if self.completed || self.selected.is_none() {
            return None;
        }

        if self.is_last_question() {
            self.completed = true;
            return Some(QuizStep::Completed(self.final_score()));
        }

        self.current_index += 1;
        self.selected = None;
        self.explanation_visible = false;
        Some(QuizStep::Next(self.current_index))
    }

    pub fn final_score(&self) -> QuizScore {
        QuizScore::new(self.score, self.questions.len())
    }

    /// Fraction of questions answered or in progress, for the progress bar
    pub fn progress(&self) -> f64 {
        let total = self.questions.len();
        if total == 0 {
            return 1.0;
        }
        let answered = self.current_index + usize::from(self.selected.is_some());
        answered.min(total) as f64 / total as f64
    }
}

/// Heading shown above each question
pub fn stage_title(index: usize) -> String {
    let rank = match index {
        0 => "ROOKIE",
        1 => "VETERAN",
        2 => "ELITE",
        _ => "BONUS",
    };
    format!("STAGE {:02}: {}", index + 1, rank)
}

/// Verdict heading on the explanation panel
pub fn verdict(correct: bool) -> &'static str {
    if correct {
        "Safi Sana!"
    } else {
        "Check Vizuri!"
    }
}

/// Label of the button that moves past an answered question
pub fn next_label(is_last_question: bool) -> &'static str {
    if is_last_question {
        "FINISH JOURNEY"
    } else {
        "NEXT STAGE"
    }
}

/// Badge, headline and message for the summary screen
pub fn outcome_copy(score: &QuizScore) -> (&'static str, &'static str, &'static str) {
    if score.is_pass() {
        (
            "🎓",
            "YOU ARE UNSTOPPABLE!",
            "You decoded the fine print. You're officially harder to manipulate.",
        )
    } else {
        (
            "📚",
            "THE GRIND CONTINUES!",
            "Democracy is a muscle. You just need a few more reps to get sharp.",
        )
    }
}

/// A, B, C, ... for option indices
pub fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
