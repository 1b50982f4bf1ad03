use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{timeout, Duration};

use glossbot::app::{Application, Dispatcher};
use glossbot::glossary::Glossary;
use glossbot::menu::Keyboard;
use glossbot::transport::{InboundEvent, MemoryTransport, OutboundAction};

const TIMEOUT_MS: u64 = 500;

const LETTER_A_TERMS: [(&str, &str); 11] = [
    ("Айсберг", "ледяная гора"),
    ("Алгоритм", "последовательность шагов"),
    ("Абстракция", "выделение существенного"),
    ("Агент", "программа, действующая от имени пользователя"),
    ("Адаптер", "преобразователь интерфейса"),
    ("Адрес", "место в памяти или сети"),
    ("Аккаунт", "учётная запись"),
    ("Актив", "ресурс, имеющий ценность"),
    ("Алиас", "псевдоним"),
    ("Аналитика", "изучение данных"),
    ("Анимация", "движущееся изображение"),
];

fn glossary() -> Arc<Glossary> {
    let pairs = LETTER_A_TERMS
        .iter()
        .copied()
        .chain([
            ("Большие данные", "очень много данных"),
            ("Бот", "программа-собеседник"),
        ]);
    Arc::new(Glossary::from_entries(pairs).expect("valid glossary"))
}

fn callback(token: &str) -> InboundEvent {
    InboundEvent::Callback {
        token: token.to_string(),
    }
}

fn edited_keyboard(actions: &[OutboundAction]) -> &Keyboard {
    match actions {
        [OutboundAction::EditMessage { keyboard, .. }, OutboundAction::AnswerCallback { toast: None }] => {
            keyboard
        }
        other => panic!("expected an edited page, got {other:?}"),
    }
}

fn token_for<'k>(keyboard: &'k Keyboard, label: &str) -> &'k str {
    keyboard
        .buttons()
        .find(|button| button.label == label)
        .map(|button| button.token.as_str())
        .unwrap_or_else(|| panic!("no button labelled {label}"))
}

fn labels(keyboard: &Keyboard) -> Vec<&str> {
    keyboard.buttons().map(|b| b.label.as_str()).collect()
}

#[test]
fn letter_pages_follow_next_and_back_tokens() {
    let dispatcher = Dispatcher::new(glossary());

    let first = dispatcher.dispatch(&callback("А"));
    let first_keyboard = edited_keyboard(&first);
    let first_labels = labels(first_keyboard);
    let expected: Vec<&str> = LETTER_A_TERMS[..9].iter().map(|(term, _)| *term).collect();
    assert_eq!(&first_labels[..9], expected.as_slice());
    assert_eq!(&first_labels[9..], &["Назад", "Далее"]);

    let next_token = token_for(first_keyboard, "Далее");
    let second = dispatcher.dispatch(&callback(next_token));
    let second_keyboard = edited_keyboard(&second);
    assert_eq!(labels(second_keyboard), vec!["Аналитика", "Анимация", "Назад"]);

    let back_token = token_for(second_keyboard, "Назад");
    let again = dispatcher.dispatch(&callback(back_token));
    assert_eq!(edited_keyboard(&again), first_keyboard);

    // "Назад" on the first page leads to the alphabet
    let to_alphabet = dispatcher.dispatch(&callback(token_for(first_keyboard, "Назад")));
    match &to_alphabet[0] {
        OutboundAction::ReplyText {
            text,
            keyboard: Some(keyboard),
        } => {
            assert_eq!(text, "Выберите букву:");
            assert_eq!(keyboard.button_count(), 32);
        }
        other => panic!("expected the alphabet menu, got {other:?}"),
    }
}

#[test]
fn term_buttons_open_their_descriptions() {
    let dispatcher = Dispatcher::new(glossary());
    let page = dispatcher.dispatch(&callback("Б"));
    let keyboard = edited_keyboard(&page);

    let token = token_for(keyboard, "Большие данные");
    assert_eq!(token, "Большие_данные");

    let detail = dispatcher.dispatch(&callback(token));
    assert_eq!(
        detail,
        vec![
            OutboundAction::ReplyText {
                text: "Большие данные:\nочень много данных\n___________________________"
                    .to_string(),
                keyboard: None,
            },
            OutboundAction::AnswerCallback { toast: None },
        ]
    );
}

#[test]
fn stale_prev_token_from_page_zero_is_clamped() {
    let dispatcher = Dispatcher::new(glossary());
    let actions = dispatcher.dispatch(&callback("А_prev_-1"));
    let keyboard = edited_keyboard(&actions);
    assert_eq!(keyboard.buttons().next().unwrap().label, "Айсберг");
}

#[test]
fn page_past_the_end_is_empty_but_navigable() {
    let dispatcher = Dispatcher::new(glossary());
    let actions = dispatcher.dispatch(&callback("Б_next_4"));
    let keyboard = edited_keyboard(&actions);
    assert_eq!(labels(keyboard), vec!["Назад"]);
    assert_eq!(token_for(keyboard, "Назад"), "Б_prev_3");
}

#[test]
fn inline_search_boundaries() {
    let dispatcher = Dispatcher::new(glossary());

    let short = dispatcher.dispatch(&InboundEvent::InlineQuery {
        text: "абв".to_string(),
    });
    assert!(short.is_empty());

    let none = dispatcher.dispatch(&InboundEvent::InlineQuery {
        text: "абвг".to_string(),
    });
    assert_eq!(
        none,
        vec![OutboundAction::AnswerInlineQuery {
            results: Vec::new()
        }]
    );

    let many = dispatcher.dispatch(&InboundEvent::InlineQuery {
        text: "ДАННЫ".to_string(),
    });
    match many.as_slice() {
        [OutboundAction::AnswerInlineQuery { results }] => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].title, "Большие данные");
            assert_eq!(results[0].id, "11");
        }
        other => panic!("unexpected inline answer {other:?}"),
    }
}

#[tokio::test]
async fn application_answers_each_event_independently() {
    let transport = Arc::new(MemoryTransport::new());
    let app = Application::new(Dispatcher::new(glossary()), transport.clone());
    let (tx, rx) = mpsc::channel(16);

    let events = vec![
        InboundEvent::Command {
            name: "start".to_string(),
        },
        callback("not a real token!"),
        callback("Щ"),
        InboundEvent::InlineQuery {
            text: "бот".to_string(),
        },
        callback("back"),
    ];
    for (id, event) in events.into_iter().enumerate() {
        tx.send((id as u64 + 1, event)).await.unwrap();
    }
    drop(tx);

    let handled = timeout(Duration::from_millis(TIMEOUT_MS), app.run(rx))
        .await
        .expect("application did not finish");
    assert_eq!(handled, 5);

    assert_eq!(transport.actions_for(1).len(), 2);
    match &transport.actions_for(2)[0] {
        OutboundAction::ReplyText { text, .. } => assert!(text.contains("Описание не найдено.")),
        other => panic!("unexpected action {other:?}"),
    }
    assert_eq!(
        transport.actions_for(3),
        vec![OutboundAction::AnswerCallback {
            toast: Some("Нет терминов на эту букву.".to_string())
        }]
    );
    assert!(transport.actions_for(4).is_empty());
    assert_eq!(transport.actions_for(5).len(), 2);
}
