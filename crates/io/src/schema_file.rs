// JSON schema files
//
// The on-disk format is the serialized SchemaStore: a plain array of
// column rules. Nothing else is persisted — header labels are always
// recomputed from column indices.

use std::path::Path;

use tearsheet_engine::schema::SchemaStore;

pub fn load(path: &Path) -> Result<SchemaStore, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<SchemaStore, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

pub fn save(path: &Path, schema: &SchemaStore) -> Result<(), String> {
    let json = serde_json::to_string_pretty(schema).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use tearsheet_engine::schema::{ColumnSchema, ColumnType};

    #[test]
    fn test_parse_schema_file() {
        let schema = parse(
            r#"[
                { "index": 0, "name": "ID", "type": "Number", "required": true },
                { "index": 4, "name": "Join", "type": "Date", "required": false }
            ]"#,
        )
        .unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.columns()[0].name, "ID");
        assert_eq!(schema.columns()[0].column_type, ColumnType::Number);
        assert!(schema.columns()[0].required);
        assert_eq!(schema.columns()[1].index, 4);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse("not json").is_err());
        assert!(parse(r#"{ "index": 0 }"#).is_err()); // object, not array
        assert!(parse(r#"[{ "index": 0, "name": "X", "type": "Blob", "required": false }]"#).is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.json");

        let mut schema = SchemaStore::new();
        schema.add(ColumnSchema::new(0, "ID", ColumnType::Number).required());
        schema.add(ColumnSchema::new(1, "Name", ColumnType::Text).required());
        schema.add(ColumnSchema::new(3, "Active", ColumnType::Boolean));

        save(&path, &schema).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(schema, loaded);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).is_err());
    }
}
