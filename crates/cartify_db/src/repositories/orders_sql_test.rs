#[cfg(test)]
mod tests {
    use crate::client::DbClient;
    use crate::error::DbError;
    use crate::repositories::orders::{Order, OrderProduct, OrderRepository};
    use crate::repositories::orders_sql::SqlOrderRepository;
    use chrono::Duration;

    async fn test_repo() -> SqlOrderRepository {
        let client = DbClient::from_url("sqlite::memory:")
            .await
            .expect("in-memory database should connect");
        let repo = SqlOrderRepository::new(client);
        repo.init_schema().await.expect("schema init should succeed");
        repo
    }

    fn order(order_id: &str, email: &str, status: &str) -> Order {
        Order::new(
            order_id.to_string(),
            vec![
                OrderProduct {
                    product_id: "prod_a".to_string(),
                    quantity: 2,
                },
                OrderProduct {
                    product_id: "prod_b".to_string(),
                    quantity: 1,
                },
            ],
            29.97,
            email.to_string(),
            status.to_string(),
        )
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let repo = test_repo().await;
        repo.init_schema()
            .await
            .expect("second schema init should succeed");
    }

    #[tokio::test]
    async fn test_insert_and_find_round_trip() {
        let repo = test_repo().await;
        let inserted = repo
            .insert(order("pi_1", "a@example.com", "pending"))
            .await
            .expect("insert should succeed");

        let by_id = repo
            .find_by_id(inserted.id)
            .await
            .expect("find_by_id should succeed")
            .expect("order should exist");
        assert_eq!(by_id.order_id, "pi_1");
        assert_eq!(by_id.products.len(), 2);
        assert_eq!(by_id.products[0].product_id, "prod_a");
        assert_eq!(by_id.products[0].quantity, 2);
        assert_eq!(by_id.amount, 29.97);
        assert_eq!(by_id.email, "a@example.com");
        assert_eq!(by_id.status, "pending");

        let by_order_id = repo
            .find_by_order_id("pi_1")
            .await
            .expect("find_by_order_id should succeed")
            .expect("order should exist");
        assert_eq!(by_order_id.id, inserted.id);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_none_for_unknown_id() {
        let repo = test_repo().await;
        let missing = repo
            .find_by_id(uuid::Uuid::new_v4())
            .await
            .expect("find_by_id should succeed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_order() {
        let repo = test_repo().await;
        let mut bad = order("pi_bad", "a@example.com", "pending");
        bad.products[0].quantity = 0;

        let err = repo.insert(bad).await.expect_err("insert should fail");
        assert!(matches!(err, DbError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_upsert_inserts_when_absent() {
        let repo = test_repo().await;
        let stored = repo
            .upsert_by_order_id(order("pi_new", "a@example.com", "pending"))
            .await
            .expect("upsert should succeed");
        assert_eq!(stored.status, "pending");

        let all = repo
            .find_all_newest_first()
            .await
            .expect("find_all should succeed");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_conflict_updates_only_status_and_updated_at() {
        let repo = test_repo().await;
        let first = repo
            .upsert_by_order_id(order("pi_same", "a@example.com", "pending"))
            .await
            .expect("first upsert should succeed");

        // Second confirmation of the same payment intent carries a fresh
        // internal id and different details; only the status may win.
        let mut second = order("pi_same", "b@example.com", "failed");
        second.amount = 99.0;
        second.products = vec![OrderProduct {
            product_id: "prod_other".to_string(),
            quantity: 5,
        }];
        second.updated_at = second.updated_at + Duration::seconds(5);

        let stored = repo
            .upsert_by_order_id(second)
            .await
            .expect("second upsert should succeed");

        assert_eq!(stored.id, first.id, "original row must be kept");
        assert_eq!(stored.status, "failed");
        assert_eq!(stored.email, "a@example.com");
        assert_eq!(stored.amount, first.amount);
        assert_eq!(stored.products, first.products);
        assert_eq!(stored.created_at, first.created_at);
        assert!(stored.updated_at > first.updated_at);

        let all = repo
            .find_all_newest_first()
            .await
            .expect("find_all should succeed");
        assert_eq!(all.len(), 1, "conflicting upserts must not duplicate");
    }

    #[tokio::test]
    async fn test_find_by_email_filters() {
        let repo = test_repo().await;
        repo.insert(order("pi_a", "match@example.com", "pending"))
            .await
            .expect("insert should succeed");
        repo.insert(order("pi_b", "other@example.com", "pending"))
            .await
            .expect("insert should succeed");
        repo.insert(order("pi_c", "match@example.com", "failed"))
            .await
            .expect("insert should succeed");

        let matching = repo
            .find_by_email("match@example.com")
            .await
            .expect("find_by_email should succeed");
        assert_eq!(matching.len(), 2);
        assert!(matching.iter().all(|o| o.email == "match@example.com"));

        let none = repo
            .find_by_email("nobody@example.com")
            .await
            .expect("find_by_email should succeed");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_sorts_newest_first() {
        let repo = test_repo().await;

        // Spread creation times so the ordering is unambiguous.
        let mut oldest = order("pi_old", "a@example.com", "pending");
        oldest.created_at = oldest.created_at - Duration::hours(2);
        let mut middle = order("pi_mid", "a@example.com", "pending");
        middle.created_at = middle.created_at - Duration::hours(1);
        let newest = order("pi_newest", "a@example.com", "pending");

        repo.insert(middle).await.expect("insert should succeed");
        repo.insert(oldest).await.expect("insert should succeed");
        repo.insert(newest).await.expect("insert should succeed");

        let all = repo
            .find_all_newest_first()
            .await
            .expect("find_all should succeed");
        let order_ids: Vec<&str> = all.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(order_ids, vec!["pi_newest", "pi_mid", "pi_old"]);
    }

    #[tokio::test]
    async fn test_update_status_returns_none_for_unknown_id() {
        let repo = test_repo().await;
        repo.insert(order("pi_1", "a@example.com", "pending"))
            .await
            .expect("insert should succeed");

        let updated = repo
            .update_status(uuid::Uuid::new_v4(), "shipped")
            .await
            .expect("update_status should succeed");
        assert!(updated.is_none());

        // The existing order must be untouched.
        let unchanged = repo
            .find_by_order_id("pi_1")
            .await
            .expect("find should succeed")
            .expect("order should exist");
        assert_eq!(unchanged.status, "pending");
    }

    #[tokio::test]
    async fn test_update_status_sets_status_and_updated_at() {
        let repo = test_repo().await;
        let inserted = repo
            .insert(order("pi_1", "a@example.com", "pending"))
            .await
            .expect("insert should succeed");

        let updated = repo
            .update_status(inserted.id, "shipped")
            .await
            .expect("update_status should succeed")
            .expect("order should exist");
        assert_eq!(updated.status, "shipped");
        assert!(updated.updated_at >= inserted.updated_at);
        assert_eq!(updated.created_at, inserted.created_at);
    }

    #[tokio::test]
    async fn test_update_status_rejects_empty_status() {
        let repo = test_repo().await;
        let inserted = repo
            .insert(order("pi_1", "a@example.com", "pending"))
            .await
            .expect("insert should succeed");

        let err = repo
            .update_status(inserted.id, "")
            .await
            .expect_err("empty status should be rejected");
        assert!(matches!(err, DbError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_the_row_as_it_existed() {
        let repo = test_repo().await;
        let inserted = repo
            .insert(order("pi_1", "a@example.com", "pending"))
            .await
            .expect("insert should succeed");

        let deleted = repo
            .delete(inserted.id)
            .await
            .expect("delete should succeed")
            .expect("order should exist");
        assert_eq!(deleted.id, inserted.id);
        assert_eq!(deleted.order_id, "pi_1");
        assert_eq!(deleted.status, "pending");

        let gone = repo
            .find_by_id(inserted.id)
            .await
            .expect("find should succeed");
        assert!(gone.is_none());

        let again = repo
            .delete(inserted.id)
            .await
            .expect("second delete should succeed");
        assert!(again.is_none());
    }
}
