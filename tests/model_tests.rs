//! Schema model tests

use schema_toolkit_sdk::kind::{Kind, ScalarValue};
use schema_toolkit_sdk::models::{Column, ModelError, Schema, Table};
use schema_toolkit_sdk::naming::{NameField, NamingError, NamingStrategy};

fn shop_schema() -> Schema {
    let mut sku = Column::new(Kind::String, "ProductSKU".to_string(), "TEXT".to_string());
    sku.unique = true;
    let mut placed = Column::new(Kind::DateTime, "PlacedAt".to_string(), "TIMESTAMP".to_string());
    placed.index = true;

    let mut schema = Schema::new("Shop".to_string(), "Online shop".to_string());
    schema.create_table(Table::new(
        "OrderItem".to_string(),
        String::new(),
        vec![
            Column::new(Kind::Id, "OrderID".to_string(), "UUID".to_string()),
            sku,
            placed,
        ],
    ));
    schema.create_table(Table::new(
        "Person".to_string(),
        String::new(),
        vec![Column::new(Kind::String, "FullName".to_string(), "TEXT".to_string())],
    ));
    schema
}

mod layout_tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = shop_schema().storage_layout().unwrap();
        assert_eq!(layout.storage_name, "shop");
        assert_eq!(layout.tables.len(), 2);

        let items = &layout.tables[0];
        assert_eq!(items.storage_name, "order_items");
        assert_eq!(items.columns[0].storage_name, "order_id");
        assert_eq!(items.columns[0].kind, Kind::Id);
        assert_eq!(items.columns[1].storage_name, "product_sku");
        assert_eq!(items.indexes, vec!["idx_order_items_placed_at"]);
        assert_eq!(items.unique_indexes, vec!["uidx_order_items_product_sku"]);

        assert_eq!(layout.tables[1].storage_name, "people");
    }

    #[test]
    fn test_layout_with_strategy() {
        let strategy = NamingStrategy::builder()
            .table_prefix("shop_")
            .column_prefix("c_")
            .singular_table(true)
            .build();
        let layout = shop_schema()
            .with_naming_strategy(strategy)
            .storage_layout()
            .unwrap();

        let items = &layout.tables[0];
        assert_eq!(items.storage_name, "shop_order_item");
        assert_eq!(items.columns[2].storage_name, "c_placed_at");
        assert_eq!(items.indexes, vec!["idx_shop_order_item_placed_at"]);
    }

    #[test]
    fn test_column_limit_violation() {
        let strategy = NamingStrategy::builder().column_name_length(8).build();
        let err = shop_schema()
            .with_naming_strategy(strategy)
            .storage_layout()
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::Naming(NamingError::TooLong {
                field: NameField::Column,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_schema_name() {
        let schema = Schema::new(String::new(), String::new());
        assert!(matches!(
            schema.storage_layout(),
            Err(ModelError::Naming(NamingError::Empty(NameField::Schema)))
        ));
    }

    #[test]
    fn test_translator_uses_schema_strategy() {
        let schema = shop_schema()
            .with_naming_strategy(NamingStrategy::builder().table_prefix("x_").build());
        assert_eq!(schema.translator().table_name("Person"), "x_people");
        assert_eq!(schema.translator().schema_name("x_people"), "Person");
    }
}

mod serialization_tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let schema = shop_schema();
        let json = schema.to_json().unwrap();
        let parsed = Schema::from_json(&json).unwrap();

        assert_eq!(parsed.name, "Shop");
        assert_eq!(parsed.encoding, "UTF-8");
        assert_eq!(parsed.tables, schema.tables);
        assert_eq!(
            parsed.storage_layout().unwrap(),
            schema.storage_layout().unwrap()
        );
    }

    #[test]
    fn test_yaml_with_strategy() {
        let yaml = r#"
name: Crm
naming_strategy:
  table_prefix: crm_
  singular_table: true
tables:
  - id: 6ba7b812-9dad-11d1-80b4-00c04fd430c8
    name: Contact
    columns:
      - name: EmailAddress
        kind: string
        unique: true
      - name: Score
        kind: money
"#;
        let schema = Schema::from_yaml(yaml).unwrap();
        assert_eq!(schema.naming_strategy.table_prefix, "crm_");
        assert_eq!(schema.naming_strategy.table_name_length, 64);

        let contact = schema.table("Contact").unwrap();
        assert_eq!(contact.columns[0].kind, Kind::String);
        assert_eq!(contact.columns[1].kind, Kind::Invalid);

        let layout = schema.storage_layout().unwrap();
        assert_eq!(layout.tables[0].storage_name, "crm_contact");
        assert_eq!(
            layout.tables[0].unique_indexes,
            vec!["uidx_crm_contact_email_address"]
        );

        let yaml_out = schema.to_yaml().unwrap();
        assert!(yaml_out.contains("table_prefix: crm_"));
    }

    #[test]
    fn test_tables_without_ids() {
        let json = r#"{
            "name": "Shop",
            "tables": [
                {"name": "OrderItem", "columns": [{"name": "ProductID", "kind": "Id"}]},
                {"name": "Person"}
            ]
        }"#;
        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.tables.len(), 2);
        assert_eq!(schema.table("OrderItem").unwrap().id, Table::generate_id("OrderItem"));
        assert_eq!(schema.table("Person").unwrap().id, Table::generate_id("Person"));
        assert_eq!(schema.storage_layout().unwrap().tables[0].storage_name, "order_items");
    }

    #[test]
    fn test_storage_attributes_survive_round_trip() {
        let json = r#"{
            "name": "Shop",
            "deprecated": "use Shop2",
            "documentation": "https://docs.example.com/shop",
            "tables": [{
                "name": "OrderItem",
                "engine": "InnoDB",
                "charset": "latin1",
                "columns": [{
                    "name": "Id",
                    "kind": "Int64",
                    "auto_increment": true,
                    "primary": true,
                    "nullable": false
                }, {
                    "name": "Note",
                    "kind": "String",
                    "length": 255,
                    "default": "''",
                    "sensitive": true,
                    "replacement": "***",
                    "updatable": false
                }, {
                    "name": "Price",
                    "kind": "Float64",
                    "numeric_precision": 10,
                    "numeric_scale": 2
                }]
            }]
        }"#;
        let schema = Schema::from_json(json).unwrap();
        let parsed = Schema::from_json(&schema.to_json().unwrap()).unwrap();

        assert_eq!(parsed.deprecated, "use Shop2");
        assert_eq!(parsed.documentation, "https://docs.example.com/shop");
        assert_eq!(parsed.tables, schema.tables);

        let table = parsed.table("OrderItem").unwrap();
        assert_eq!(table.engine, "InnoDB");
        assert_eq!(table.charset, "latin1");

        let id = table.column("Id").unwrap();
        assert!(id.auto_increment && id.primary && !id.nullable);
        assert_eq!(id.charset, "UTF-8");

        let note = table.column("Note").unwrap();
        assert_eq!(note.length, 255);
        assert_eq!(note.default, "''");
        assert_eq!(note.replacement, "***");
        assert!(note.sensitive && note.creatable && note.readable && !note.updatable);

        let price = table.column("Price").unwrap();
        assert_eq!((price.numeric_precision, price.numeric_scale), (10, 2));
    }

    #[test]
    fn test_malformed_kind_values_decode_as_invalid() {
        let json = r#"{
            "name": "Crm",
            "tables": [{
                "name": "Contact",
                "columns": [
                    {"name": "Email", "kind": null},
                    {"name": "Score", "kind": 5},
                    {"name": "Tags", "kind": ["string"]},
                    {"name": "Phone", "kind": "String"}
                ]
            }]
        }"#;
        let schema = Schema::from_json(json).unwrap();
        let kinds: Vec<Kind> = schema.table("Contact").unwrap().columns.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![Kind::Invalid, Kind::Invalid, Kind::Invalid, Kind::String]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Schema::from_json("{ not json"),
            Err(ModelError::Json(_))
        ));
        assert!(matches!(
            Schema::from_yaml("name: [unclosed"),
            Err(ModelError::Yaml(_))
        ));
    }
}

mod inference_tests {
    use super::*;

    #[test]
    fn test_infer_undeclared_columns() {
        let mut schema = shop_schema();
        let table = schema.table_mut("Person").unwrap();
        table.create_column(Column::new(Kind::Invalid, "Age".to_string(), String::new()));

        let column = table.column_mut("Age").unwrap();
        let samples = ["34", "27", "130"];
        let kind = column.infer_kind(samples.iter().map(|s| ScalarValue::from(*s)), true);
        assert_eq!(kind, Kind::Int16);
        assert_eq!(schema.table("Person").unwrap().column("Age").unwrap().kind, Kind::Int16);
    }
}
