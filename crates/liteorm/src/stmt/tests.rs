//! Cross-builder rendering properties.

use super::*;
use crate::value::Value;

fn placeholder_count(sql: &str) -> usize {
    let bytes = sql.as_bytes();
    let mut count = 0;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'?' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            count += 1;
        }
    }
    count
}

#[test]
fn placeholders_match_bound_values() {
    let cases: Vec<(String, Vec<Value>)> = vec![
        SelectStmt::new("users").build(),
        SelectStmt::new("users").eq("id", 5).is_null("deleted_at").build(),
        InsertStmt::new("users").set("name", "john").set("age", 44).build(),
        UpdateStmt::new("users")
            .set_now("updated_at")
            .set("age", 45)
            .eq("id", 5)
            .build(),
        DeleteStmt::new("users").eq("id", 5).eq("status", "x").build(),
    ];
    for (sql, values) in cases {
        assert_eq!(
            placeholder_count(&sql),
            values.len(),
            "placeholder/value count mismatch in: {sql}"
        );
    }
}

#[test]
fn placeholder_numbering_is_sequential() {
    let (sql, values) = UpdateStmt::new("users")
        .set("a", 1)
        .set_now("b")
        .set("c", 2)
        .eq("d", 3)
        .build();
    assert_eq!(sql, "UPDATE users SET a = ?1, b = CURRENT_TIMESTAMP, c = ?2 WHERE d = ?3");
    assert_eq!(
        values,
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}

#[test]
fn bound_values_follow_insertion_order() {
    let (_, values) = InsertStmt::new("t")
        .set("z", "last-column-first")
        .set("a", 1)
        .build();
    assert_eq!(
        values,
        vec![Value::Text("last-column-first".into()), Value::Integer(1)]
    );
}

#[test]
fn builders_are_reusable() {
    // Rendering twice yields identical output; builders hold no counter state.
    let stmt = SelectStmt::new("users").eq("id", 5);
    assert_eq!(stmt.build(), stmt.build());
}
