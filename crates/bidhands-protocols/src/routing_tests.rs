use tokio::sync::mpsc;

use super::*;
use crate::error::ChannelError;

#[tokio::test]
async fn test_request_round_trip() {
    let (tx, mut rx) = mpsc::channel::<Envelope<u32, u32>>(4);
    tokio::spawn(async move {
        while let Some(env) = rx.recv().await {
            env.responder.respond(env.request * 2);
        }
    });

    assert_eq!(request(&tx, 21).await.unwrap(), 42);
}

#[tokio::test]
async fn test_deferred_response_arrives() {
    let (tx, mut rx) = mpsc::channel::<Envelope<&'static str, String>>(4);
    tokio::spawn(async move {
        while let Some(env) = rx.recv().await {
            // Handler signals deferred by moving the responder out.
            let responder = env.responder;
            tokio::spawn(async move {
                tokio::task::yield_now().await;
                responder.respond(format!("late: {}", env.request));
            });
        }
    });

    assert_eq!(request(&tx, "hi").await.unwrap(), "late: hi");
}

#[tokio::test]
async fn test_closed_mailbox_is_disconnected() {
    let (tx, rx) = mpsc::channel::<Envelope<u32, u32>>(1);
    drop(rx);
    assert_eq!(request(&tx, 1).await, Err(ChannelError::Disconnected));
}

#[tokio::test]
async fn test_dropped_responder_is_no_response() {
    // The silent-hang hazard: a handler that defers but never answers.
    // The one-shot channel closing turns it into an explicit error.
    let (tx, mut rx) = mpsc::channel::<Envelope<u32, u32>>(4);
    tokio::spawn(async move {
        while let Some(env) = rx.recv().await {
            drop(env.responder);
        }
    });

    assert_eq!(request(&tx, 1).await, Err(ChannelError::NoResponse));
}

#[tokio::test]
async fn test_responses_match_their_requests() {
    // Two overlapping requests each get their own answer back.
    let (tx, mut rx) = mpsc::channel::<Envelope<u32, u32>>(4);
    tokio::spawn(async move {
        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        // Answer in reverse arrival order.
        second.responder.respond(second.request + 1);
        first.responder.respond(first.request + 1);
    });

    let a = request(&tx, 10);
    let b = request(&tx, 20);
    let (ra, rb) = tokio::join!(a, b);
    assert_eq!(ra.unwrap(), 11);
    assert_eq!(rb.unwrap(), 21);
}

#[tokio::test]
async fn test_respond_to_gone_requester_does_not_panic() {
    let (responder, rx) = Responder::<u32>::new();
    drop(rx);
    responder.respond(7);
}
