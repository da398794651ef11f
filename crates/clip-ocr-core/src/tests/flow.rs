use crate::{
    CoreError, CredentialSources, DEFAULT_DWELL, FlowOutcome, InvocationGate, ShortcutFlow,
    StatusState,
    tests::fakes::{
        FakeClipboard, FakeOcr, FakeReply, MarkerEvent, RecordingIndicator, sample_image,
    },
};

use std::{sync::atomic::Ordering, time::Duration};

/// WHAT: Image on clipboard and text from OCR ends with the text copied
/// WHY: The core promise of the shortcut
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_image_and_ocr_text_when_running_then_clipboard_holds_text() {
    // Given: Credential in env, an image on the clipboard, OCR answering "Hello World"
    let sources = CredentialSources {
        api_key: Some("abc123".to_string()),
        ..CredentialSources::default()
    };
    assert_eq!(sources.resolve().unwrap().expose(), "abc123");

    let indicator = RecordingIndicator::default();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::with_image(sample_image()),
        FakeOcr::text("Hello World"),
        indicator.clone(),
    );

    // When: The shortcut runs
    let outcome = flow.run().await;

    // Then: Text copied, Processing then Success shown, marker cleared after dwell
    assert_eq!(outcome, FlowOutcome::Copied { text_len: 11 });
    assert_eq!(flow.clipboard().text.as_deref(), Some("Hello World"));
    assert_eq!(flow.clipboard().image, None);
    assert_eq!(
        indicator.shown(),
        vec![StatusState::Processing, StatusState::Success]
    );
    assert_eq!(indicator.events().last(), Some(&MarkerEvent::Clear));
    assert_eq!(indicator.visible(), None);
    assert_eq!(flow.status().current(), StatusState::Idle);
}

/// WHAT: Copied text is exactly what OCR returned
/// WHY: No trimming or reformatting of the user's text
#[tokio::test(start_paused = true)]
async fn given_ocr_text_with_whitespace_when_running_then_copied_verbatim() {
    // Given: OCR text with leading spaces and trailing newline
    let text = "  Line one\n\tLine two\n";
    let mut flow = ShortcutFlow::new(
        FakeClipboard::with_image(sample_image()),
        FakeOcr::text(text),
        RecordingIndicator::default(),
    );

    // When: The shortcut runs
    flow.run().await;

    // Then: Clipboard text is byte-for-byte the OCR text
    assert_eq!(flow.clipboard().text.as_deref(), Some(text));
}

/// WHAT: Clipboard without an image ends in Failure and is left alone
/// WHY: The user's existing clipboard content must survive a mis-press
#[tokio::test(start_paused = true)]
async fn given_text_only_clipboard_when_running_then_failure_and_unchanged() {
    // Given: Text (no image) on the clipboard
    let indicator = RecordingIndicator::default();
    let ocr = FakeOcr::text("never used");
    let calls = ocr.calls();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::with_text("keep me"),
        ocr,
        indicator.clone(),
    );

    // When: The shortcut runs
    let outcome = flow.run().await;

    // Then: Failure, OCR never called, clipboard untouched
    assert_eq!(outcome, FlowOutcome::NoClipboardImage);
    assert_eq!(
        indicator.shown(),
        vec![StatusState::Processing, StatusState::Failure]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(flow.clipboard().text.as_deref(), Some("keep me"));
}

/// WHAT: Empty clipboard ends in Failure
/// WHY: Same user-visible result as a non-image clipboard
#[tokio::test(start_paused = true)]
async fn given_empty_clipboard_when_running_then_processing_then_failure() {
    // Given: Nothing on the clipboard
    let indicator = RecordingIndicator::default();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::default(),
        FakeOcr::text("never used"),
        indicator.clone(),
    );

    // When: The shortcut runs
    flow.run().await;

    // Then: [Processing, Failure], clipboard still empty
    assert_eq!(
        indicator.shown(),
        vec![StatusState::Processing, StatusState::Failure]
    );
    assert_eq!(flow.clipboard().text, None);
    assert_eq!(flow.clipboard().image, None);
}

/// WHAT: OCR returning no text ends in Failure with the image still on the clipboard
/// WHY: The clipboard goal was not achieved, so nothing is overwritten
#[tokio::test(start_paused = true)]
async fn given_ocr_without_text_when_running_then_failure_and_image_kept() {
    // Given: OCR answering with no text
    let indicator = RecordingIndicator::default();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::with_image(sample_image()),
        FakeOcr::new(FakeReply::Empty),
        indicator.clone(),
    );

    // When: The shortcut runs
    let outcome = flow.run().await;

    // Then: EmptyResult surfaced as Failure, image untouched
    assert_eq!(outcome, FlowOutcome::EmptyResult);
    assert_eq!(outcome.terminal_state(), StatusState::Failure);
    assert_eq!(indicator.shown().last(), Some(&StatusState::Failure));
    assert_eq!(flow.clipboard().image, Some(sample_image()));
    assert_eq!(flow.clipboard().text, None);
}

/// WHAT: OCR request failure ends in Failure without propagating
/// WHY: Network errors must never take the process down
#[tokio::test(start_paused = true)]
async fn given_failing_ocr_when_running_then_failure_outcome() {
    // Given: OCR that errors
    let indicator = RecordingIndicator::default();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::with_image(sample_image()),
        FakeOcr::new(FakeReply::Fail),
        indicator.clone(),
    );

    // When: The shortcut runs
    let outcome = flow.run().await;

    // Then: OcrFailed, Failure shown, image untouched
    assert_eq!(outcome, FlowOutcome::OcrFailed);
    assert_eq!(
        indicator.shown(),
        vec![StatusState::Processing, StatusState::Failure]
    );
    assert_eq!(flow.clipboard().image, Some(sample_image()));
}

/// WHAT: Unreadable clipboard ends in Failure without calling OCR
/// WHY: A broken pasteboard must be told apart from an empty one in logs
#[tokio::test(start_paused = true)]
async fn given_unreadable_clipboard_when_running_then_failure_outcome() {
    // Given: A clipboard whose reads fail
    let indicator = RecordingIndicator::default();
    let ocr = FakeOcr::text("unused");
    let calls = ocr.calls();
    let clipboard = FakeClipboard {
        fail_reads: true,
        ..FakeClipboard::with_image(sample_image())
    };
    let mut flow = ShortcutFlow::new(clipboard, ocr, indicator.clone());

    // When: The shortcut runs
    let outcome = flow.run().await;

    // Then: ClipboardReadFailed, Failure shown, OCR never called
    assert_eq!(outcome, FlowOutcome::ClipboardReadFailed);
    assert_eq!(outcome.terminal_state(), StatusState::Failure);
    assert_eq!(
        indicator.shown(),
        vec![StatusState::Processing, StatusState::Failure]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(flow.clipboard().image, Some(sample_image()));
}

/// WHAT: Failed clipboard write ends in Failure
/// WHY: Success must only be shown when the text actually landed
#[tokio::test(start_paused = true)]
async fn given_unwritable_clipboard_when_running_then_failure_outcome() {
    // Given: A clipboard that rejects writes
    let indicator = RecordingIndicator::default();
    let clipboard = FakeClipboard {
        fail_writes: true,
        ..FakeClipboard::with_image(sample_image())
    };
    let mut flow = ShortcutFlow::new(clipboard, FakeOcr::text("Hello"), indicator.clone());

    // When: The shortcut runs
    let outcome = flow.run().await;

    // Then: ClipboardWriteFailed, Failure shown
    assert_eq!(outcome, FlowOutcome::ClipboardWriteFailed);
    assert_eq!(indicator.shown().last(), Some(&StatusState::Failure));
}

/// WHAT: Terminal marker stays up for the dwell, then clears by itself
/// WHY: The user needs time to see the result without clicking anything
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_terminal_state_when_dwell_elapses_then_marker_cleared() {
    // Given: A running flow that will succeed
    let indicator = RecordingIndicator::default();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::with_image(sample_image()),
        FakeOcr::text("Hello"),
        indicator.clone(),
    );
    let handle = tokio::spawn(async move { flow.run().await });

    // When: Just short of the dwell interval
    tokio::time::sleep(DEFAULT_DWELL - Duration::from_millis(100)).await;

    // Then: Success still visible
    assert_eq!(indicator.visible(), Some(StatusState::Success));

    // When: The dwell has passed
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Then: Marker gone without any interaction
    assert_eq!(indicator.visible(), None);
    assert_eq!(handle.await.unwrap(), FlowOutcome::Copied { text_len: 5 });
}

/// WHAT: Custom dwell is honored
/// WHY: Dwell is configurable from settings
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_custom_dwell_when_running_then_cleared_after_custom_interval() {
    // Given: A one second dwell
    let indicator = RecordingIndicator::default();
    let mut flow = ShortcutFlow::new(
        FakeClipboard::default(),
        FakeOcr::text("unused"),
        indicator.clone(),
    )
    .with_dwell(Duration::from_secs(1));
    let handle = tokio::spawn(async move { flow.run().await });

    // When: 1.5 seconds pass
    tokio::time::sleep(Duration::from_millis(1500)).await;

    // Then: Already cleared
    assert_eq!(indicator.visible(), None);
    assert_eq!(handle.await.unwrap(), FlowOutcome::NoClipboardImage);
}

/// WHAT: A press during an in-flight invocation is rejected
/// WHY: Overlapping presses would race on the single marker
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_invocation_in_flight_when_second_press_then_rejected() {
    // Given: One invocation holding the gate
    let indicator = RecordingIndicator::default();
    let gate = InvocationGate::new(ShortcutFlow::new(
        FakeClipboard::with_image(sample_image()),
        FakeOcr::text("Hello"),
        indicator.clone(),
    ));
    let mut permit = gate.try_acquire().unwrap();
    let handle = tokio::spawn(async move {
        let outcome = permit.run().await;
        drop(permit);
        outcome
    });
    tokio::task::yield_now().await;

    // When: A second press arrives while the first is dwelling
    let second = gate.try_acquire();

    // Then: Rejected, and only one Processing marker was ever shown
    assert!(matches!(second, Err(CoreError::InvocationInFlight { .. })));
    assert!(gate.is_busy());

    handle.await.unwrap();
    assert_eq!(
        indicator.shown(),
        vec![StatusState::Processing, StatusState::Success]
    );
}

/// WHAT: The gate reopens once an invocation finishes
/// WHY: Dropping presses must not lock the shortcut forever
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_finished_invocation_when_pressing_again_then_accepted() {
    // Given: An invocation that ran to completion
    let gate = InvocationGate::new(ShortcutFlow::new(
        FakeClipboard::default(),
        FakeOcr::text("unused"),
        RecordingIndicator::default(),
    ));
    {
        let mut permit = gate.try_acquire().unwrap();
        permit.run().await;
    }

    // When: The shortcut is pressed again
    let next = gate.try_acquire();

    // Then: Accepted
    assert!(next.is_ok());
}
