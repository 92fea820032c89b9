//! End-to-end game scenarios through the public API

use wordle_game::commands::{GameContext, GameSettings, run_simple, score_guess};
use wordle_game::core::{LetterOutcome, ScoringRule, WORD_LENGTH, Word, evaluate};
use wordle_game::game::{
    GameSession, GameStatus, KeyboardState, SessionError, Statistics, TargetPool, WordList,
};
use wordle_game::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};

fn embedded_lists() -> (WordList, TargetPool) {
    let answers = words_from_slice(ANSWERS);
    let mut dictionary = WordList::from_words(&words_from_slice(ALLOWED));
    dictionary.extend(&answers);
    (dictionary, TargetPool::new(answers))
}

#[test]
fn seeded_games_are_reproducible() {
    let (dictionary, targets) = embedded_lists();
    let settings = GameSettings {
        seed: Some(42),
        ..GameSettings::default()
    };

    let mut first = GameContext::new(&dictionary, &targets, settings);
    let mut second = GameContext::new(&dictionary, &targets, settings);
    for _ in 0..5 {
        let a = first.new_session().unwrap();
        let b = second.new_session().unwrap();
        assert_eq!(a.target(), b.target());
    }
}

#[test]
fn every_drawn_target_can_be_guessed() {
    let (dictionary, targets) = embedded_lists();
    let settings = GameSettings {
        seed: Some(7),
        ..GameSettings::default()
    };
    let mut ctx = GameContext::new(&dictionary, &targets, settings);

    for _ in 0..20 {
        let mut session = ctx.new_session().unwrap();
        let target = session.target().text().to_string();
        assert!(session.submit(&target).unwrap().is_win());
        assert_eq!(session.status().status, GameStatus::Won);
    }
}

#[test]
fn common_guesses_are_in_the_default_dictionary() {
    let (dictionary, targets) = embedded_lists();
    let settings = GameSettings {
        seed: Some(11),
        max_attempts: 10,
        ..GameSettings::default()
    };
    let mut ctx = GameContext::new(&dictionary, &targets, settings);
    let mut session = ctx.new_session().unwrap();

    for guess in [
        "slate", "stare", "pizza", "ghost", "crane", "audio", "raise", "house",
    ] {
        if session.is_over() {
            break;
        }
        assert!(session.submit(guess).is_ok(), "'{guess}' was rejected");
    }
}

#[test]
fn losing_game_exhausts_attempts() {
    let dictionary: &[&str] = &["crane", "slate", "audio", "floor"];
    let mut session =
        GameSession::new(Word::new("crane").unwrap(), dictionary).with_max_attempts(3);

    session.submit("slate").unwrap();
    session.submit("audio").unwrap();
    assert_eq!(session.status().remaining_attempts, 1);
    session.submit("floor").unwrap();

    let report = session.status();
    assert_eq!(report.status, GameStatus::Lost);
    assert_eq!(report.attempts_used, 3);
    assert_eq!(report.remaining_attempts, 0);
    assert_eq!(
        session.submit("crane").unwrap_err(),
        SessionError::GameOver(GameStatus::Lost)
    );
}

#[test]
fn rejected_guesses_do_not_use_attempts() {
    let dictionary: &[&str] = &["crane", "slate"];
    let mut session = GameSession::new(Word::new("crane").unwrap(), dictionary);

    assert_eq!(
        session.submit("cra").unwrap_err().to_string(),
        "Not enough letters"
    );
    assert_eq!(
        session.submit("zzzzz").unwrap_err().to_string(),
        "Not in the word list"
    );
    assert!(matches!(
        session.submit("cr4ne"),
        Err(SessionError::InvalidInput(_))
    ));

    let report = session.status();
    assert_eq!(report.attempts_used, 0);
    assert_eq!(report.remaining_attempts, 6);
    assert_eq!(report.status, GameStatus::InProgress);
}

#[test]
fn outcomes_never_overcount_target_letters() {
    let pairs = [
        ("crane", "crate"),
        ("eight", "geese"),
        ("floor", "robot"),
        ("erase", "speed"),
        ("creep", "geese"),
        ("abbey", "babes"),
    ];

    for (target, guess) in pairs {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        let result = evaluate(&target, &guess);
        let counts = target.letter_counts();

        for letter in guess.letter_counts().keys() {
            let marked = result
                .letters()
                .filter(|(l, o)| l == letter && *o != LetterOutcome::Absent)
                .count();
            let in_target = usize::from(counts.get(letter).copied().unwrap_or(0));
            assert!(
                marked <= in_target,
                "{guess} vs {target}: {} marked {marked} times",
                char::from(*letter)
            );
        }

        for i in 0..WORD_LENGTH {
            let green = result.outcomes()[i] == LetterOutcome::Correct;
            assert_eq!(green, target.char_at(i) == guess.char_at(i));
        }
    }
}

#[test]
fn keyboard_tracks_best_outcome_over_a_game() {
    let dictionary: &[&str] = &["crane", "trace", "react"];
    let mut session = GameSession::new(Word::new("react").unwrap(), dictionary);
    let mut keyboard = KeyboardState::new();

    keyboard.record(session.submit("crane").unwrap());
    assert_eq!(keyboard.get(b'r'), Some(LetterOutcome::Present));
    assert_eq!(keyboard.get(b'n'), Some(LetterOutcome::Absent));

    keyboard.record(session.submit("trace").unwrap());
    keyboard.record(session.submit("react").unwrap());
    assert_eq!(keyboard.get(b'r'), Some(LetterOutcome::Correct));
    assert_eq!(keyboard.get(b't'), Some(LetterOutcome::Correct));
    assert_eq!(keyboard.get(b'n'), Some(LetterOutcome::Absent));
    assert_eq!(keyboard.get(b'z'), None);
}

#[test]
fn statistics_accumulate_finished_games() {
    let dictionary: &[&str] = &["crane", "slate"];
    let mut stats = Statistics::default();

    let mut won = GameSession::new(Word::new("crane").unwrap(), dictionary);
    won.submit("slate").unwrap();
    won.submit("crane").unwrap();
    stats.record(&won.status());

    let mut lost = GameSession::new(Word::new("crane").unwrap(), dictionary).with_max_attempts(1);
    lost.submit("slate").unwrap();
    stats.record(&lost.status());

    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.games_won, 1);
    assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    assert_eq!(stats.guess_distribution.get(2), Some(&1));
}

#[test]
fn simple_mode_plays_a_full_game() {
    let words = words_from_slice(&["crane", "slate"]);
    let dictionary = WordList::from_words(&words);
    let targets = TargetPool::new(words_from_slice(&["crane"]));
    let mut ctx = GameContext::new(&dictionary, &targets, GameSettings::default());

    let mut out = Vec::new();
    let stats = run_simple(&mut ctx, "slate\ncrane\nno\n".as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(stats.total_games, 1);
    assert_eq!(stats.games_won, 1);
    assert!(text.contains("Guess 2/6"));
    assert!(text.contains("You won"));
    assert!(text.contains("Thanks for playing"));
}

#[test]
fn score_command_reports_feedback() {
    let standard = score_guess("eight", "geese", ScoringRule::Standard).unwrap();
    assert_eq!(standard.result.to_emoji(), "⬜🟨⬜⬜⬜");

    let legacy = score_guess("eight", "geese", ScoringRule::Legacy).unwrap();
    assert_eq!(legacy.result.to_emoji(), "⬜🟨🟨⬜🟨");

    assert!(score_guess("eight", "gee", ScoringRule::Standard).is_err());
}
