//! End-to-end games driven through the public `Session` API

use four::config::GameConfig;
use four::core::LetterStatus;
use four::game::{GameStatus, GuessRejection, MessageStyle, Session};
use four::wordlists::Lexicon;
use rand::SeedableRng;
use rand::rngs::StdRng;

const WORDS: [&str; 9] = [
    "NOTE", "TONE", "DATA", "CODE", "GAME", "PLAY", "WORD", "TREE", "JAZZ",
];

fn session(seed: u64) -> Session {
    let lexicon = Lexicon::new(WORDS).unwrap();
    Session::new(lexicon, GameConfig::default(), StdRng::seed_from_u64(seed))
}

fn solution(session: &Session) -> String {
    session.game().solution().text().to_string()
}

fn wrong_words(session: &Session) -> Vec<&'static str> {
    let solution = solution(session);
    WORDS.into_iter().filter(|w| *w != solution).collect()
}

fn guess(session: &mut Session, word: &str) -> Result<(), GuessRejection> {
    for c in word.chars() {
        session.append_letter(c);
    }
    session.submit_guess().map(|_| ())
}

#[test]
fn win_on_second_guess() {
    let mut session = session(1);
    let answer = solution(&session);
    let miss = wrong_words(&session)[0];

    guess(&mut session, miss).unwrap();
    guess(&mut session, &answer.to_lowercase()).unwrap();

    // Win is decided but not applied until the reveal has finished
    assert_eq!(session.status(), GameStatus::Playing);
    session.advance(2099);
    assert_eq!(session.status(), GameStatus::Playing);
    session.advance(1);
    assert_eq!(session.status(), GameStatus::Won);

    assert_eq!(
        session.outcome_message().as_deref(),
        Some("Nice! You found the word in 2 tries.")
    );
    let latest = session.notifications().last().unwrap();
    assert_eq!(latest.text, "Excellent! Found in 2 tries!");
    assert_eq!(latest.style, MessageStyle::Success);

    let stats = session.statistics();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.guess_distribution[1], 1);
}

#[test]
fn loss_after_six_misses() {
    let mut session = session(2);
    let answer = solution(&session);

    for word in wrong_words(&session).into_iter().take(6) {
        guess(&mut session, word).unwrap();
        session.advance(600);
    }
    assert_eq!(session.game().attempts(), 6);
    session.settle();

    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(
        session.outcome_message(),
        Some(format!("The word was {answer}."))
    );
    assert!(
        session
            .notifications()
            .iter()
            .any(|n| n.text == format!("Game over! The word was {answer}"))
    );

    let rows = session.rows();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.evaluation.is_some()));

    // Finished games take no more input
    assert!(!session.append_letter('A'));
    assert_eq!(session.statistics().games_won, 0);
}

#[test]
fn new_game_suppresses_pending_outcome() {
    let mut session = session(3);
    let answer = solution(&session);
    let first = session.game().id();

    guess(&mut session, &answer).unwrap();
    session.advance(1000);
    session.start_new_game();
    assert_ne!(session.game().id(), first);

    session.settle();
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.game().attempts(), 0);
    assert_eq!(session.statistics().games_played, 0);
    assert!(session.notifications().is_empty());
}

#[test]
fn rejections_come_in_order_and_leave_history_alone() {
    let mut session = session(4);
    let miss = wrong_words(&session)[0];

    assert_eq!(guess(&mut session, "NOT"), Err(GuessRejection::Incomplete));
    while session.backspace() {}

    assert_eq!(guess(&mut session, "ZZZZ"), Err(GuessRejection::NotAWord));
    while session.backspace() {}

    guess(&mut session, miss).unwrap();
    assert_eq!(
        guess(&mut session, &miss.to_lowercase()),
        Err(GuessRejection::Duplicate)
    );

    assert_eq!(session.game().attempts(), 1);
    assert!(session.is_shaking());
    assert_eq!(
        session.notifications().last().map(|n| n.text.as_str()),
        Some("Already tried that word")
    );

    session.advance(400);
    assert!(!session.is_shaking());
}

#[test]
fn keyboard_marks_solution_letters_correct() {
    let mut session = session(5);
    let answer = solution(&session);

    guess(&mut session, &answer).unwrap();
    let keyboard = session.keyboard_status();
    for c in answer.chars() {
        assert_eq!(keyboard.get(c), Some(LetterStatus::Correct));
    }
    assert_eq!(keyboard.get('Q'), None);
}

#[test]
fn seeded_sessions_pick_the_same_words() {
    let mut a = session(42);
    let mut b = session(42);
    for _ in 0..5 {
        assert_eq!(solution(&a), solution(&b));
        a.start_new_game();
        b.start_new_game();
    }
}
