#[cfg(test)]
mod tests {
    use crate::models::{Order, OrderProduct, ValidationError, STATUS_FAILED, STATUS_PENDING};

    fn sample_products() -> Vec<OrderProduct> {
        vec![
            OrderProduct {
                product_id: "prod_1".to_string(),
                quantity: 2,
            },
            OrderProduct {
                product_id: "prod_2".to_string(),
                quantity: 1,
            },
        ]
    }

    fn sample_order() -> Order {
        Order::new(
            "pi_123".to_string(),
            sample_products(),
            29.97,
            "customer@example.com".to_string(),
            STATUS_PENDING.to_string(),
        )
    }

    #[test]
    fn test_new_order_sets_ids_and_timestamps() {
        let order = sample_order();

        assert_eq!(order.order_id, "pi_123");
        assert_eq!(order.created_at, order.updated_at);

        // Internal ids are generated fresh for every order
        let other = sample_order();
        assert_ne!(order.id, other.id);
    }

    #[test]
    fn test_valid_order_passes_validation() {
        assert_eq!(sample_order().validate(), Ok(()));
    }

    #[test]
    fn test_empty_order_id_is_rejected() {
        let mut order = sample_order();
        order.order_id = String::new();
        assert_eq!(order.validate(), Err(ValidationError::EmptyOrderId));
    }

    #[test]
    fn test_empty_status_is_rejected() {
        let mut order = sample_order();
        order.status = String::new();
        assert_eq!(order.validate(), Err(ValidationError::EmptyStatus));
    }

    #[test]
    fn test_order_without_products_is_rejected() {
        let mut order = sample_order();
        order.products.clear();
        assert_eq!(order.validate(), Err(ValidationError::NoProducts));
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        let mut order = sample_order();
        order.products[1].quantity = 0;
        assert_eq!(
            order.validate(),
            Err(ValidationError::NonPositiveQuantity {
                product_id: "prod_2".to_string(),
                quantity: 0,
            })
        );

        order.products[1].quantity = -3;
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_failed_status_is_accepted() {
        let mut order = sample_order();
        order.status = STATUS_FAILED.to_string();
        assert_eq!(order.validate(), Ok(()));
    }
}
