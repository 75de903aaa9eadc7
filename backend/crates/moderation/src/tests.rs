//! Cross-module scenarios for the moderation crate

use account::{AccountConfig, KvSessionStore, SessionManager};
use platform::storage::MemoryStore;

use crate::application::{ModerationConfig, ModerationGate};
use crate::domain::entities::fixtures;
use crate::error::ModerationError;
use crate::models::*;

type Store = KvSessionStore<MemoryStore>;

async fn setup() -> (SessionManager<Store>, ModerationGate<Store>) {
    let manager = SessionManager::with_kv(MemoryStore::new(), AccountConfig::development()).await;
    let gate = ModerationGate::new(manager.session(), ModerationConfig::default());
    (manager, gate)
}

mod post_tests {
    use super::*;

    #[tokio::test]
    async fn test_post_without_session_is_rejected() {
        let (_manager, gate) = setup().await;
        let err = gate.post_comment("biz-1", "hello").await.unwrap_err();
        assert!(matches!(err, ModerationError::NoActiveSession));
        assert!(gate.list_comments("biz-1").await.is_empty());
    }

    #[tokio::test]
    async fn test_post_prepends_active_comment() {
        let (manager, gate) = setup().await;
        let user = manager.login("amaka@example.com", "").await.unwrap();

        gate.post_comment("biz-1", "first").await.unwrap();
        let view = gate.post_comment("biz-1", "  second  ").await.unwrap();

        assert_eq!(view.status, CommentStatus::Active);
        assert_eq!(view.content, "second");
        assert_eq!(view.timestamp, "Just now");
        assert_eq!(view.author_name, user.name);
        assert_eq!(view.author_image, user.image);

        let thread = gate.list_comments("biz-1").await;
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0], view);
        assert_eq!(thread[1].content, "first");
    }

    #[tokio::test]
    async fn test_post_blank_content_is_rejected() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();

        let err = gate.post_comment("biz-1", "   ").await.unwrap_err();
        assert!(matches!(err, ModerationError::EmptyComment));
        assert!(gate.list_comments("biz-1").await.is_empty());
    }

    #[tokio::test]
    async fn test_post_after_logout_is_rejected() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();
        manager.logout().await.unwrap();

        let err = gate.post_comment("biz-1", "hello").await.unwrap_err();
        assert!(matches!(err, ModerationError::NoActiveSession));
    }

    #[tokio::test]
    async fn test_custom_timestamp_label() {
        let manager = SessionManager::with_kv(MemoryStore::new(), AccountConfig::development()).await;
        let config = ModerationConfig {
            fresh_timestamp_label: "now".to_string(),
            ..ModerationConfig::default()
        };
        let gate = ModerationGate::new(manager.session(), config);
        manager.login("amaka@example.com", "").await.unwrap();

        let view = gate.post_comment("biz-1", "hi").await.unwrap();
        assert_eq!(view.timestamp, "now");
    }
}

mod report_tests {
    use super::*;

    #[tokio::test]
    async fn test_report_twice_stays_flagged() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();
        let view = gate.post_comment("biz-1", "rude words").await.unwrap();

        let status = gate.report_comment("biz-1", view.id).await.unwrap();
        assert_eq!(status, CommentStatus::Flagged);
        let status = gate.report_comment("biz-1", view.id).await.unwrap();
        assert_eq!(status, CommentStatus::Flagged);
    }

    #[tokio::test]
    async fn test_flagged_comment_shows_placeholder_and_keeps_content() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();
        let view = gate.post_comment("biz-1", "rude words").await.unwrap();

        // Someone else reports it
        manager.login("bola@example.com", "").await.unwrap();
        gate.report_comment("biz-1", view.id).await.unwrap();

        let thread = gate.list_comments("biz-1").await;
        assert_eq!(thread[0].content, "This comment has been flagged for review.");
        assert_eq!(thread[0].status, CommentStatus::Flagged);

        let audited = gate.audit_comment("biz-1", view.id).await.unwrap();
        assert_eq!(audited.audit_content(), "rude words");
    }

    #[tokio::test]
    async fn test_report_without_session_is_rejected() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();
        let view = gate.post_comment("biz-1", "hello").await.unwrap();
        manager.logout().await.unwrap();

        let err = gate.report_comment("biz-1", view.id).await.unwrap_err();
        assert!(matches!(err, ModerationError::NoActiveSession));
        assert_eq!(
            gate.list_comments("biz-1").await[0].status,
            CommentStatus::Active
        );
    }

    #[tokio::test]
    async fn test_report_unknown_comment() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();
        let view = gate.post_comment("biz-1", "hello").await.unwrap();

        let err = gate.report_comment("biz-1", CommentId::new()).await.unwrap_err();
        assert!(matches!(err, ModerationError::CommentNotFound { .. }));

        // Right id, wrong thread
        let err = gate.report_comment("biz-2", view.id).await.unwrap_err();
        assert!(matches!(err, ModerationError::CommentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_author_may_report_own_comment() {
        let (manager, gate) = setup().await;
        manager.login("amaka@example.com", "").await.unwrap();
        let view = gate.post_comment("biz-1", "oops").await.unwrap();

        let status = gate.report_comment("biz-1", view.id).await.unwrap();
        assert_eq!(status, CommentStatus::Flagged);
    }
}

mod seeded_board_tests {
    use super::*;

    fn seeded_board() -> (CommentBoard, CommentId) {
        let parent = ParentId::new("biz-1");
        let newest = Comment::new(
            parent.clone(),
            fixtures::author("Chidi"),
            "Best jollof in town",
            "2 hours ago",
        );
        let older = Comment::new(
            parent.clone(),
            fixtures::author("Ngozi"),
            "Overpriced",
            "3 days ago",
        )
        .with_status(CommentStatus::Flagged);
        let newest_id = newest.id;

        let mut board = CommentBoard::new();
        board.seed(parent, vec![newest, older]);
        (board, newest_id)
    }

    #[tokio::test]
    async fn test_listing_seeded_thread_needs_no_session() {
        let manager = SessionManager::with_kv(MemoryStore::new(), AccountConfig::development()).await;
        let (board, newest_id) = seeded_board();
        let gate = ModerationGate::with_board(manager.session(), board, ModerationConfig::default());

        let thread = gate.list_comments("biz-1").await;
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].id, newest_id);
        assert_eq!(thread[0].timestamp, "2 hours ago");
        assert_eq!(thread[1].content, gate.config().placeholder);
    }

    #[tokio::test]
    async fn test_new_post_lands_above_seeded_comments() {
        let manager = SessionManager::with_kv(MemoryStore::new(), AccountConfig::development()).await;
        let (board, newest_id) = seeded_board();
        let gate = ModerationGate::with_board(manager.session(), board, ModerationConfig::default());
        manager.login("amaka@example.com", "").await.unwrap();

        let view = gate.post_comment("biz-1", "Agreed").await.unwrap();
        let thread = gate.list_comments("biz-1").await;
        assert_eq!(thread[0].id, view.id);
        assert_eq!(thread[1].id, newest_id);
    }
}
