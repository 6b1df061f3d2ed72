use quiz_core::model::QuizSummary;

use super::markup::sanitize_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub number: usize,
    pub question_html: String,
    pub answer_html: String,
    pub correct_answer_html: String,
    pub correct: bool,
    pub class_name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub headline: String,
    pub percent_label: String,
    pub rows: Vec<ResultRowVm>,
}

#[must_use]
pub fn map_results(summary: &QuizSummary) -> ResultsVm {
    let headline = if summary.is_perfect() {
        format!("Perfect! {} / {}", summary.score(), summary.total())
    } else {
        format!("You scored {} / {}", summary.score(), summary.total())
    };

    let rows = summary
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| ResultRowVm {
            number: idx + 1,
            question_html: sanitize_html(&record.question),
            answer_html: sanitize_html(&record.answer),
            correct_answer_html: sanitize_html(&record.correct_answer),
            correct: record.correct,
            class_name: if record.correct {
                "result result--correct"
            } else {
                "result result--wrong"
            },
        })
        .collect();

    ResultsVm {
        headline,
        percent_label: format!("{}% correct", summary.percent()),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::model::AnswerRecord;

    use super::*;

    fn record(question: &str, answer: &str, correct_answer: &str) -> AnswerRecord {
        AnswerRecord {
            question: question.into(),
            answer: answer.into(),
            correct: answer == correct_answer,
            correct_answer: correct_answer.into(),
        }
    }

    #[test]
    fn maps_rows_in_question_order() {
        let summary = QuizSummary::from_records(
            2,
            vec![record("Q0", "Rome", "Paris"), record("Q1", "4", "4")],
        )
        .unwrap();

        let vm = map_results(&summary);
        assert_eq!(vm.headline, "You scored 1 / 2");
        assert_eq!(vm.percent_label, "50% correct");
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].number, 1);
        assert_eq!(vm.rows[0].answer_html, "Rome");
        assert_eq!(vm.rows[0].correct_answer_html, "Paris");
        assert_eq!(vm.rows[0].class_name, "result result--wrong");
        assert_eq!(vm.rows[1].class_name, "result result--correct");
    }

    #[test]
    fn perfect_score_headline() {
        let summary = QuizSummary::from_records(1, vec![record("Q", "A", "A")]).unwrap();
        assert_eq!(map_results(&summary).headline, "Perfect! 1 / 1");
    }
}
