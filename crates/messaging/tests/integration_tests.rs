//! Integration tests for thread read-state tracking and inbox ordering.

use std::sync::Arc;

use condoboard_messaging::{MessageRepository, ThreadService};
use condoboard_sessions::Role;

fn service() -> ThreadService {
    ThreadService::new(Arc::new(MessageRepository::new()))
}

#[tokio::test]
async fn sending_always_appends_unread() {
    let threads = service();

    threads.send("c1", "r1", "Bom dia!", Role::Resident).await.unwrap();
    threads.send("c1", "r1", "Olá Ana", Role::Manager).await.unwrap();

    let thread = threads.thread("c1", "r1").await.unwrap();
    assert_eq!(thread.len(), 2);
    assert!(thread.iter().all(|m| !m.read));
    assert_eq!(thread[0].content, "Bom dia!");
    assert!(!thread[0].sent_by_manager);
    assert!(thread[1].sent_by_manager);
}

#[tokio::test]
async fn empty_message_is_refused() {
    let threads = service();

    assert!(threads.send("c1", "r1", "   ", Role::Manager).await.is_err());
    assert!(threads.thread("c1", "r1").await.unwrap().is_empty());
}

#[tokio::test]
async fn manager_reading_marks_only_resident_messages() {
    let threads = service();

    threads.send("c1", "r1", "Poderia reservar o salão?", Role::Resident).await.unwrap();
    threads.send("c1", "r1", "Vou verificar.", Role::Manager).await.unwrap();
    threads.send("c1", "r1", "Obrigada!", Role::Resident).await.unwrap();

    assert_eq!(threads.unread_from_resident("c1", "r1").await.unwrap(), 2);

    let flipped = threads.mark_thread_read("c1", "r1", Role::Manager).await.unwrap();
    assert_eq!(flipped, 2);
    assert_eq!(threads.unread_from_resident("c1", "r1").await.unwrap(), 0);

    // The manager's own message stays unread for the resident
    assert_eq!(threads.unread_from_manager("c1", "r1").await.unwrap(), 1);
    let thread = threads.thread("c1", "r1").await.unwrap();
    assert!(!thread[1].read);
}

#[tokio::test]
async fn resident_reading_marks_only_manager_messages() {
    let threads = service();

    threads.send("c1", "r1", "Hello", Role::Manager).await.unwrap();
    assert_eq!(threads.unread_from_manager("c1", "r1").await.unwrap(), 1);

    threads.mark_thread_read("c1", "r1", Role::Resident).await.unwrap();
    assert_eq!(threads.unread_from_manager("c1", "r1").await.unwrap(), 0);

    // Marking an already-read thread flips nothing
    let flipped = threads.mark_thread_read("c1", "r1", Role::Resident).await.unwrap();
    assert_eq!(flipped, 0);
}

#[tokio::test]
async fn unread_totals_are_scoped_by_condominium() {
    let threads = service();

    threads.send("c1", "r1", "Mensagem 1", Role::Resident).await.unwrap();
    threads.send("c1", "r2", "Mensagem 2", Role::Resident).await.unwrap();
    threads.send("c2", "r3", "Outro condomínio", Role::Resident).await.unwrap();

    assert_eq!(threads.unread_from_residents_total("c1").await.unwrap(), 2);
    assert_eq!(threads.unread_from_residents_total("c2").await.unwrap(), 1);
}

#[tokio::test]
async fn inbox_orders_by_most_recent_message() {
    let threads = service();

    threads.send("c1", "r1", "Primeira conversa", Role::Resident).await.unwrap();
    threads.send("c1", "r2", "Conversa mais recente", Role::Resident).await.unwrap();

    let residents = vec!["r1".to_string(), "r2".to_string(), "r3".to_string()];
    let overview = threads.thread_overview("c1", &residents).await.unwrap();

    assert_eq!(overview.len(), 3);
    assert_eq!(overview[0].resident_id, "r2");
    assert_eq!(overview[1].resident_id, "r1");
    // A resident without any messages is kept, sorted last
    assert_eq!(overview[2].resident_id, "r3");
    assert!(overview[2].last_message_at.is_none());
    assert_eq!(overview[0].unread_from_resident, 1);
    assert_eq!(overview[2].unread_from_resident, 0);
}
