use super::*;

use crate::test_support::user;

#[test]
fn renders_loading_screen() {
    assert_eq!(render_view(&DirectoryView::Loading), "Loading users...\n");
}

#[test]
fn renders_error_message_with_retry_hint() {
    let text = render_view(&DirectoryView::Error {
        message: "Network Error".to_string(),
    });
    assert_eq!(text, "Network Error\n[r] Try Again   [q] Quit\n");
}

#[test]
fn blank_error_message_falls_back_to_generic_text() {
    let text = render_view(&DirectoryView::Error {
        message: String::new(),
    });
    assert!(text.starts_with("Sorry, some error occurred...\n"));
}

#[test]
fn renders_empty_screen_with_retry_hint() {
    assert_eq!(
        render_view(&DirectoryView::Empty),
        "No user data found\n[r] Retry   [q] Quit\n"
    );
}

#[test]
fn renders_user_card_with_counter_and_all_fields() {
    let text = render_view(&DirectoryView::Ready {
        user: user(42, "Ada"),
        position: 2,
        total: 80,
        can_navigate: true,
    });

    let expected = "\
User Directory
User 2 of 80

Avatar: https://robohash.org/42.png?size=300x300
Ada Smith
@ada.smith
----------------------------------------
ID          42
UID         uid-42
Password    pa55word
First Name  Ada
Last Name   Smith
Username    ada.smith
Email       ada.smith@email.com

[p] Previous   [n] Next   [q] Quit
";
    assert_eq!(text, expected);
}

#[test]
fn hides_navigation_hint_for_single_user() {
    let text = render_view(&DirectoryView::Ready {
        user: user(1, "Solo"),
        position: 1,
        total: 1,
        can_navigate: false,
    });
    assert!(text.contains("User 1 of 1\n"));
    assert!(!text.contains("[n] Next"));
    assert!(text.ends_with("[q] Quit\n"));
}

#[test]
fn writes_rejections_and_info_lines() {
    let mut out = Vec::new();
    write_event(
        &mut out,
        &UiEvent::Rejected {
            command: "next",
            reason: "users are still loading",
        },
    )
    .expect("write");
    write_event(&mut out, &UiEvent::Info("hello".to_string())).expect("write");

    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "(next unavailable: users are still loading)\nhello\n"
    );
}

#[test]
fn separates_views_with_a_blank_line() {
    let mut out = Vec::new();
    write_event(&mut out, &UiEvent::View(DirectoryView::Loading)).expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), "\nLoading users...\n");
}
