use super::{Outcome, Question, QuizBank, QuizResult};
use std::io::{self, BufRead, Write};

/// Step-by-step progress through a quiz, one question at a time.
///
/// An answer is first selected and then committed with [`QuizSession::next`];
/// committing without a selection does nothing.
#[derive(Debug, Clone)]
pub struct QuizSession<'a, O> {
    bank: &'a QuizBank<O>,
    current: usize,
    answers: Vec<usize>,
    selected: Option<usize>,
    complete: bool,
}

impl<'a, O: Outcome> QuizSession<'a, O> {
    pub fn new(bank: &'a QuizBank<O>) -> Self {
        Self {
            bank,
            current: 0,
            answers: Vec::new(),
            selected: None,
            complete: bank.questions.is_empty(),
        }
    }

    /// The question awaiting an answer, or `None` once the quiz is finished.
    pub fn current_question(&self) -> Option<&'a Question> {
        if self.complete {
            return None;
        }
        self.bank.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Highlights an option of the current question. Returns `false` if the
    /// option does not exist.
    pub fn select(&mut self, option: usize) -> bool {
        match self.current_question() {
            Some(question) if option < question.options.len() => {
                self.selected = Some(option);
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Commits the selected option and advances. Returns `false` when nothing
    /// was selected.
    pub fn next(&mut self) -> bool {
        let Some(option) = self.selected.take() else {
            return false;
        };
        self.answers.push(option);
        if self.current + 1 < self.bank.questions.len() {
            self.current += 1;
        } else {
            self.complete = true;
        }
        true
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// How far along the quiz is, counting the question being shown.
    pub fn progress_percent(&self) -> f64 {
        if self.bank.questions.is_empty() {
            return 100.0;
        }
        (self.current + 1) as f64 / self.bank.questions.len() as f64 * 100.0
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.selected = None;
        self.complete = self.bank.questions.is_empty();
    }

    /// The ranking, available only once every question has been answered.
    pub fn result(&self) -> Option<QuizResult<'a, O>> {
        self.complete.then(|| self.bank.score(&self.answers))
    }

    /// Answers the remaining questions from a line-based terminal.
    ///
    /// Each question and its numbered options are written to `output`, and
    /// one 1-based choice is read per line of `input`. A line that is not a
    /// valid choice asks the same question again. Input that ends before the
    /// last question fails with [`io::ErrorKind::UnexpectedEof`], leaving the
    /// answers given so far in the session.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<QuizResult<'a, O>> {
        let mut line = String::new();
        while let Some(question) = self.current_question() {
            writeln!(output, "\n{}", question.prompt)?;
            for (i, option) in question.options.iter().enumerate() {
                writeln!(output, "  {}: {}", i + 1, option.text)?;
            }
            write!(output, "> Enter choice: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before the quiz was finished",
                ));
            }
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1));
            if picked.is_some_and(|i| self.select(i)) {
                self.next();
            } else {
                writeln!(
                    output,
                    "Invalid choice. Please enter 1 to {}.",
                    question.options.len()
                )?;
            }
        }
        self.result()
            .ok_or_else(|| io::Error::other("quiz finished without a result"))
    }
}
