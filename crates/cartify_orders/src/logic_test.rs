#[cfg(test)]
mod tests {
    use crate::error::OrderError;
    use crate::logic::{
        build_line_items, order_from_session, parse_order_key, require_non_empty,
        status_for_payment_intent, to_minor_units, CheckoutProduct,
    };
    use cartify_common::models::{Order, OrderProduct};
    use cartify_common::services::{CheckoutSession, SessionLineItem};
    use cartify_db::DbError;
    use uuid::Uuid;

    fn order(order_id: &str) -> Order {
        Order::new(
            order_id.to_string(),
            vec![OrderProduct {
                product_id: "prod_a".to_string(),
                quantity: 1,
            }],
            9.99,
            "buyer@example.com".to_string(),
            "pending".to_string(),
        )
    }

    #[test]
    fn test_to_minor_units_rounds_to_nearest_cent() {
        assert_eq!(to_minor_units(9.99), 999);
        assert_eq!(to_minor_units(10.0), 1000);
        // 0.29 * 100 is 28.999999999999996 in floating point
        assert_eq!(to_minor_units(0.29), 29);
        assert_eq!(to_minor_units(0.0), 0);
    }

    #[test]
    fn test_build_line_items_converts_price_and_passes_quantity_through() {
        let products = vec![
            CheckoutProduct {
                name: "Mug".to_string(),
                image: "u".to_string(),
                price: 9.99,
                quantity: 2,
            },
            CheckoutProduct {
                name: "Poster".to_string(),
                image: "https://example.com/poster.png".to_string(),
                price: 24.5,
                quantity: 1,
            },
        ];

        let line_items = build_line_items(&products);

        assert_eq!(line_items.len(), 2);
        assert_eq!(line_items[0].name, "Mug");
        assert_eq!(line_items[0].image, "u");
        assert_eq!(line_items[0].unit_amount, 999);
        assert_eq!(line_items[0].quantity, 2);
        assert_eq!(line_items[1].unit_amount, 2450);
        assert_eq!(line_items[1].quantity, 1);
    }

    #[test]
    fn test_status_mapping_succeeded_is_pending_everything_else_failed() {
        assert_eq!(status_for_payment_intent("succeeded"), "pending");
        assert_eq!(status_for_payment_intent("processing"), "failed");
        assert_eq!(status_for_payment_intent("canceled"), "failed");
        assert_eq!(status_for_payment_intent(""), "failed");
    }

    #[test]
    fn test_order_from_session_builds_order_keyed_by_payment_intent() {
        let session = CheckoutSession {
            id: "cs_test_123".to_string(),
            payment_intent_id: "pi_test_456".to_string(),
            payment_intent_status: "succeeded".to_string(),
            amount_total: 4497,
            customer_email: "buyer@example.com".to_string(),
            line_items: vec![
                SessionLineItem {
                    product_id: "prod_mouse".to_string(),
                    quantity: 2,
                },
                SessionLineItem {
                    product_id: "prod_keyboard".to_string(),
                    quantity: 1,
                },
            ],
        };

        let order = order_from_session(session);

        assert_eq!(order.order_id, "pi_test_456");
        assert_eq!(order.status, "pending");
        assert_eq!(order.amount, 44.97);
        assert_eq!(order.email, "buyer@example.com");
        assert_eq!(order.products.len(), 2);
        assert_eq!(order.products[0].product_id, "prod_mouse");
        assert_eq!(order.products[0].quantity, 2);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_order_from_session_maps_unsettled_intent_to_failed() {
        let session = CheckoutSession {
            id: "cs_test_123".to_string(),
            payment_intent_id: "pi_test_456".to_string(),
            payment_intent_status: "requires_payment_method".to_string(),
            amount_total: 999,
            customer_email: "buyer@example.com".to_string(),
            line_items: vec![SessionLineItem {
                product_id: "prod_mouse".to_string(),
                quantity: 1,
            }],
        };

        let order = order_from_session(session);

        assert_eq!(order.status, "failed");
        assert_eq!(order.amount, 9.99);
    }

    #[test]
    fn test_require_non_empty_reports_zero_results_as_not_found() {
        let result = require_non_empty(Vec::new(), "No orders found");

        match result {
            Err(OrderError::NotFound(message)) => assert_eq!(message, "No orders found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_require_non_empty_passes_non_empty_lists_through() {
        let orders = vec![order("pi_1"), order("pi_2")];

        let result = require_non_empty(orders, "No orders found").unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].order_id, "pi_1");
    }

    #[test]
    fn test_parse_order_key_accepts_valid_uuid() {
        let id = Uuid::new_v4();

        let parsed = parse_order_key(&id.to_string()).unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_order_key_reports_malformed_id_as_repository_error() {
        let result = parse_order_key("not-a-uuid");

        assert!(matches!(
            result,
            Err(OrderError::Repository(DbError::MalformedId(ref raw))) if raw == "not-a-uuid"
        ));
    }
}
