//! Common test utilities for session tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use mzalendo_lens::app::App;
use mzalendo_lens::config::{Args, LensConfig};
use mzalendo_lens::session::{IntakeDraft, Session};
use mzalendo_lens_sdk::{
    async_trait, AnalysisError, AnalysisRequest, Analyzer, BillAnalysis, ImpactCard,
    ImpactCategory, QuizQuestion,
};

/// Analyzer that answers every request with the same canned outcome
pub struct StubAnalyzer {
    outcome: Result<BillAnalysis, AnalysisError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubAnalyzer {
    pub fn ok(analysis: BillAnalysis) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(analysis),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: AnalysisError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(analysis: BillAnalysis, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(analysis),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for StubAnalyzer {
    fn name(&self) -> &str {
        "stub"
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<BillAnalysis, AnalysisError> {
        assert!(!request.is_empty(), "empty request reached the analyzer");
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

pub fn question(text: &str, correct_index: usize) -> QuizQuestion {
    QuizQuestion {
        question: text.to_string(),
        options: vec![
            "It lowers VAT".to_string(),
            "It raises VAT on fuel".to_string(),
            "It abolishes VAT".to_string(),
            "Nothing changes".to_string(),
        ],
        correct_index,
        explanation: format!("{} is covered in section 12.", text),
    }
}

/// Finance Bill analysis with three questions whose answers are 1, 0, 2
pub fn finance_bill_analysis() -> BillAnalysis {
    BillAnalysis {
        summary: "Fuel gets pricier as VAT rises to 16%.".to_string(),
        detailed_summary: "- Main Objective: raise revenue\n- Key Provisions: VAT on fuel\n- Red Flags: transport costs".to_string(),
        impact_cards: vec![
            ImpactCard {
                title: "Pump prices".to_string(),
                description: "Expect to pay more per litre.".to_string(),
                icon: "⛽".to_string(),
                category: ImpactCategory::Fuel,
            },
            ImpactCard {
                title: "Matatu fares".to_string(),
                description: "Operators pass fuel costs on.".to_string(),
                icon: "🚐".to_string(),
                category: ImpactCategory::Other,
            },
            ImpactCard {
                title: "Unga".to_string(),
                description: "Transport costs push food prices up.".to_string(),
                icon: "🌽".to_string(),
                category: ImpactCategory::Food,
            },
        ],
        quiz: vec![
            question("What does the bill do to fuel?", 1),
            question("Which tax is changed?", 0),
            question("Who feels it first?", 2),
        ],
    }
}

pub fn analysis_with_quiz(quiz: Vec<QuizQuestion>) -> BillAnalysis {
    BillAnalysis {
        quiz,
        ..finance_bill_analysis()
    }
}

/// Correct option index for each question of `analysis`
pub fn answer_key(analysis: &BillAnalysis) -> Vec<usize> {
    analysis.quiz.iter().map(|q| q.correct_index).collect()
}

/// Configuration with no reveal delay
pub fn test_config() -> LensConfig {
    let args = Args::try_parse_from([
        "mzalendo-lens",
        "--reveal-delay-ms",
        "0",
        "--log-level",
        "off",
    ])
    .unwrap();
    LensConfig::from_args(args, None)
}

pub fn app_with(analyzer: Arc<dyn Analyzer>) -> App {
    App::new(test_config(), analyzer, tokio::runtime::Handle::current())
}

pub fn session_with_text(text: &str) -> Session {
    Session::with_draft(IntakeDraft {
        text: text.to_string(),
        document: None,
    })
}

/// Take a session from Intake straight to the quiz screen
pub fn session_in_quiz(analysis: BillAnalysis) -> Session {
    let mut session = session_with_text("Finance Bill 2025 raises VAT on fuel");
    let (ticket, _) = session.begin_submit().unwrap();
    assert!(session.finish_submit(ticket, Ok(analysis)));
    session.acknowledge().unwrap();
    session
}
