use serde::Serialize;

/// Fixed course-content quiz: a linear walk over four two-answer questions,
/// one point per correct answer. No per-client state lives server-side; the
/// page tracks its position and score and this module answers pure queries.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizAnswer {
    pub text: &'static str,
    pub letter: &'static str,
}

#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub answers: [QuizAnswer; 2],
    pub correct: usize,
    pub explanations: [&'static str; 2],
}

static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "Твій пристрій має працювати автономно в лісі 3 місяці. Яку технологію зв'язку обереш?",
        answers: [
            QuizAnswer { text: "Стандартний Wi-Fi", letter: "A" },
            QuizAnswer { text: "LoRa-модуль", letter: "B" },
        ],
        correct: 1,
        explanations: [
            "Занадто «прожорливий» для батарейки і малий радіус дії.",
            "Правильно! Працює на великих відстанях при мінімальному споживанні енергії.",
        ],
    },
    QuizQuestion {
        question: "Що краще підійде для створення захищеного месенджера, який шифрує дані «на льоту»?",
        answers: [
            QuizAnswer { text: "Arduino Uno", letter: "A" },
            QuizAnswer { text: "ESP32", letter: "B" },
        ],
        correct: 1,
        explanations: [
            "Слабкий процесор, немає вбудованого Wi-Fi/Bluetooth.",
            "Правильно! Має два ядра, вбудовану криптографію та бездротові інтерфейси.",
        ],
    },
    QuizQuestion {
        question: "Як виявити дрон або радіостанцію, якщо вони не підключені до твоєї мережі?",
        answers: [
            QuizAnswer { text: "Сканувати порти в браузері", letter: "A" },
            QuizAnswer { text: "Використати SDR-сканер ефіру", letter: "B" },
        ],
        correct: 1,
        explanations: [
            "Це працює тільки для підключених девайсів.",
            "Правильно! Він дозволяє «бачити» будь-яке радіовипромінювання навколо.",
        ],
    },
    QuizQuestion {
        question: "Щоб твій девайс не розрядився за добу, в коді обов'язково треба прописати...",
        answers: [
            QuizAnswer { text: "Функцію delay(1000)", letter: "A" },
            QuizAnswer { text: "Режим Deep Sleep", letter: "B" },
        ],
        correct: 1,
        explanations: [
            "Процесор продовжує працювати і споживати струм.",
            "Правильно! Це «засинання» мікроконтролера до потрібної події або таймера.",
        ],
    },
];

pub fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}

pub fn question_count() -> usize {
    QUESTIONS.len()
}

/// Progress of the bar when question `index` is shown: answered share so far.
pub fn progress_percent(index: usize) -> u32 {
    ((index as f64 / QUESTIONS.len() as f64) * 100.0) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Explanation for the answer picked when wrong, for the correct one
    /// when right.
    pub explanation: &'static str,
    pub correct_index: usize,
    pub last: bool,
}

/// Checks one picked answer. None when either index is out of range.
pub fn check_answer(question: usize, answer: usize) -> Option<AnswerOutcome> {
    let q = QUESTIONS.get(question)?;
    if answer >= q.answers.len() {
        return None;
    }
    let correct = answer == q.correct;
    let explanation = if correct {
        q.explanations[q.correct]
    } else {
        q.explanations[answer]
    };
    Some(AnswerOutcome {
        correct,
        explanation,
        correct_index: q.correct,
        last: question == QUESTIONS.len() - 1,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultTier {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Grades a final score: perfect, half-or-better, below half.
pub fn grade(score: usize) -> ResultTier {
    let total = QUESTIONS.len();
    if score >= total {
        ResultTier {
            icon: "🏆",
            title: "Бездоганно!",
            text: "Ти вже маєш серйозну базу. На курсі зможеш прокачати навички до професійного рівня.",
        }
    } else if score * 2 >= total {
        ResultTier {
            icon: "💪",
            title: "Непогано!",
            text: "Є хороший фундамент. Курс допоможе заповнити прогалини і вийти на новий рівень.",
        }
    } else {
        ResultTier {
            icon: "🚀",
            title: "Є куди рости!",
            text: "Не хвилюйся — саме для цього існує наш курс. Ми навчимо тебе всьому з нуля.",
        }
    }
}
