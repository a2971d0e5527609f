//! Naming translation tests

use schema_toolkit_sdk::naming::{
    COMPOSITE_NAME_MAX_LENGTH, IdentifierTranslator, InitialismTable, NameField, NamingError,
    NamingStrategy, NoopInflector, PairReplacer,
};

fn default_translator(strategy: &NamingStrategy) -> IdentifierTranslator<'_> {
    IdentifierTranslator::new(strategy, InitialismTable::shared())
}

mod storage_name_tests {
    use super::*;

    #[test]
    fn test_initialisms_stay_together() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.storage_name("HTTPServer"), "http_server");
        assert_eq!(t.storage_name("UserID"), "user_id");
        assert_eq!(t.storage_name("JSONPayload"), "json_payload");
        assert_eq!(t.storage_name("ServerURL"), "server_url");
    }

    #[test]
    fn test_idempotent() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        for name in [
            "HTTPServer",
            "UserAccount",
            "UserID",
            "APIKey",
            "XMLHTTPRequest",
            "already_snake",
            "Address2Line",
        ] {
            let once = t.storage_name(name);
            assert_eq!(t.storage_name(&once), once, "not idempotent for {}", name);
        }
    }

    #[test]
    fn test_empty_input() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.storage_name(""), "");
        assert_eq!(t.schema_name(""), "");
    }

    #[test]
    fn test_underscores_never_doubled() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.storage_name("User_Account"), "user_account");
        assert_eq!(t.storage_name("HTTP_Server"), "http_server");
    }

    #[test]
    fn test_replacer_fallback_on_empty() {
        let strategy = NamingStrategy::builder()
            .name_replacer(|_: &str| String::new())
            .build();
        let t = default_translator(&strategy);
        assert_eq!(t.storage_name("OrderItem"), "order_item");
    }

    #[test]
    fn test_pair_replacer() {
        let strategy = NamingStrategy::builder()
            .name_replacer(PairReplacer::new([("Acct", "Account"), ("Qty", "Quantity")]))
            .build();
        let t = default_translator(&strategy);
        assert_eq!(t.storage_name("UserAcct"), "user_account");
        assert_eq!(t.storage_name("ItemQty"), "item_quantity");
        assert_eq!(t.column_name("items", "ItemQty"), "item_quantity");
    }
}

mod schema_name_tests {
    use super::*;

    #[test]
    fn test_restores_initialisms() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.schema_name("http_servers"), "HTTPServer");
        assert_eq!(t.schema_name("user_ids"), "UserID");
        assert_eq!(t.schema_name("api_keys"), "APIKey");
        assert_eq!(t.schema_name("order_items"), "OrderItem");
    }

    #[test]
    fn test_does_not_restore_inside_words() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.schema_name("identity"), "Identity");
        assert_eq!(t.schema_name("ideas"), "Idea");
    }

    #[test]
    fn test_custom_initialisms() {
        let strategy = NamingStrategy::default();
        let table = InitialismTable::new(["sku"]);
        let t = IdentifierTranslator::new(&strategy, &table);
        assert_eq!(t.storage_name("ProductSKU"), "product_sku");
        assert_eq!(t.schema_name("product_skus"), "ProductSKU");
        // Not in this table
        assert_eq!(t.schema_name("user_ids"), "UserId");
    }

    #[test]
    fn test_without_initialisms() {
        let strategy = NamingStrategy::default();
        let table = InitialismTable::empty();
        let t = IdentifierTranslator::new(&strategy, &table);
        assert_eq!(t.storage_name("UserID"), "user_id");
        assert_eq!(t.schema_name("user_ids"), "UserId");
    }
}

mod table_name_tests {
    use super::*;

    #[test]
    fn test_plural_and_singular() {
        let plural = NamingStrategy::default();
        let t = default_translator(&plural);
        assert_eq!(t.table_name("Person"), "people");
        assert_eq!(t.table_name("Address"), "addresses");
        assert_eq!(t.table_name("Company"), "companies");

        let singular = NamingStrategy::builder().singular_table(true).build();
        let t = default_translator(&singular);
        assert_eq!(t.table_name("Person"), "person");
    }

    #[test]
    fn test_prefixes() {
        let strategy = NamingStrategy::builder()
            .table_prefix("crm_")
            .column_prefix("f_")
            .build();
        let t = default_translator(&strategy);
        assert_eq!(t.table_name("Contact"), "crm_contacts");
        assert_eq!(t.schema_name("crm_contacts"), "Contact");
        assert_eq!(t.column_name("crm_contacts", "PhoneNumber"), "f_phone_number");
        assert_eq!(t.join_table_name("contact_tags"), "crm_contact_tags");
    }

    #[test]
    fn test_noop_inflector() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy).with_inflector(&NoopInflector);
        assert_eq!(t.table_name("Person"), "person");
        assert_eq!(t.schema_name("people"), "People");
    }

    #[test]
    fn test_preserve_case() {
        let strategy = NamingStrategy::builder().preserve_case(true).build();
        let t = default_translator(&strategy);
        assert_eq!(t.storage_name("HTTPServer"), "HTTP_Server");
        assert_eq!(t.storage_name("UserID"), "User_ID");
        assert_eq!(t.join_table_name("user_roles"), "user_roles");
    }
}

mod composite_name_tests {
    use super::*;

    #[test]
    fn test_short_names_unchanged() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.composite_name("fk", "orders", "user_id"), "fk_orders_user_id");
        assert_eq!(
            t.composite_name("idx", "sales.orders", "total"),
            "idx_sales_orders_total"
        );
    }

    #[test]
    fn test_bounded_and_deterministic() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        let table = "customer_subscription_billing_history_entries";
        let first = t.composite_name("uidx", table, "external_payment_provider_reference");
        let second = t.composite_name("uidx", table, "external_payment_provider_reference");
        assert!(first.len() <= COMPOSITE_NAME_MAX_LENGTH);
        assert_eq!(first, second);

        let other = t.composite_name("uidx", table, "external_payment_provider_reference_2");
        assert_eq!(&first[..56], &other[..56]);
        assert_ne!(first, other);
    }

    #[test]
    fn test_exactly_at_limit() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        let column = "c".repeat(COMPOSITE_NAME_MAX_LENGTH - "idx_t_".len());
        let name = t.composite_name("idx", "t", &column);
        assert_eq!(name, format!("idx_t_{}", column));
    }

    #[test]
    fn test_index_names_use_storage_column() {
        let strategy = NamingStrategy::default();
        let t = default_translator(&strategy);
        assert_eq!(t.index_name("orders", "CreatedAt"), "idx_orders_created_at");
        assert_eq!(t.unique_index_name("orders", "OrderID"), "uidx_orders_order_id");
        assert_eq!(t.checker_name("orders", "total"), "chk_orders_total");
    }
}

mod length_tests {
    use super::*;

    #[test]
    fn test_limits_per_field() {
        let strategy = NamingStrategy::builder()
            .schema_name_length(5)
            .table_name_length(10)
            .column_name_length(20)
            .build();
        let t = default_translator(&strategy);

        assert!(t.check_length(NameField::Schema, "sales").is_ok());
        assert!(t.check_length(NameField::Schema, "billing").is_err());
        assert!(t.check_length(NameField::Table, "order_items").is_err());
        assert!(t.check_length(NameField::Column, "order_items").is_ok());
    }

    #[test]
    fn test_error_details() {
        let strategy = NamingStrategy::builder().table_name_length(4).build();
        let t = default_translator(&strategy);
        let err = t.check_length(NameField::Table, "orders").unwrap_err();
        assert_eq!(
            err,
            NamingError::TooLong {
                field: NameField::Table,
                name: "orders".to_string(),
                max: 4,
                actual: 6,
            }
        );
        assert!(err.to_string().contains("table name"));
    }
}
