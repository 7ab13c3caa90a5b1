use super::*;
use crate::error::SqlError;
use crate::expr::col;
use crate::func::{Case, WindowFunc};
use crate::ident::TableRef;
use crate::predicate::Predicate;
use crate::value::Param;

// ==================== Select ====================

#[test]
fn test_simple_select() {
    let mut q = Select::new();
    q.select(["id", "name"])
        .from("users")
        .where_(col("age").gt(18));
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id", "name" FROM "users" WHERE "age" > 18"#
    );
}

#[test]
fn test_star_is_not_quoted() {
    let mut q = Select::new();
    q.select(["*", "u.*"]).from(TableRef::new("users").alias("u"));
    assert_eq!(q.to_sql(), r#"SELECT *, u.* FROM "users" u"#);
}

#[test]
fn test_distinct_and_schema() {
    let mut q = Select::new();
    q.distinct().column("dept").from_schema("hr", "staff");
    assert_eq!(q.to_sql(), r#"SELECT DISTINCT "dept" FROM hr."staff""#);
}

#[test]
fn test_mixed_select_items() {
    let mut q = Select::new();
    q.column(col("id"))
        .column(Case::new().when(col("age").lt(18), "minor").otherwise("adult").alias("grp"))
        .column(Param::new("now()"))
        .from("users");
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id", CASE WHEN "age" < 18 THEN 'minor' ELSE 'adult' END AS grp, now() FROM "users""#
    );
}

#[test]
fn test_select_subquery_item() {
    let mut sub = Select::new();
    sub.column(Param::new("count(*)"))
        .from("orders")
        .where_("orders.user_id = users.id");

    let mut q = Select::new();
    q.column("id").select_subquery(&sub, "n_orders").from("users");
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id", (SELECT count(*) FROM "orders" WHERE orders.user_id = users.id) AS n_orders FROM "users""#
    );
}

#[test]
fn test_joins_keep_their_on_clause() {
    let mut q = Select::new();
    q.select(["*"])
        .from(TableRef::new("users").alias("u"))
        .left_join(TableRef::new("roles").alias("r"), "u.role_id = r.id")
        .join(
            JoinKind::FullOuter,
            TableRef::new("teams").alias("t"),
            "t.id = u.team_id",
        )
        .cross_join("regions");
    assert_eq!(
        q.to_sql(),
        r#"SELECT * FROM "users" u LEFT JOIN "roles" r ON u.role_id = r.id FULL OUTER JOIN "teams" t ON t.id = u.team_id CROSS JOIN "regions""#
    );
}

#[test]
fn test_where_conditions_are_and_joined() {
    let mut q = Select::new();
    q.column("id")
        .from("users")
        .where_(col("status").eq("active"))
        .where_(col("role").eq("admin").or(col("role").eq("owner")));
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "users" WHERE "status" = 'active' AND (("role" = 'admin') OR ("role" = 'owner'))"#
    );
}

#[test]
fn test_collapsed_or_condition_is_still_wrapped() {
    let optional = Predicate::raw("").and(col("a").eq(1).or(col("b").eq(2)));

    let mut q = Select::new();
    q.column("id")
        .from("t")
        .where_(col("x").eq(0))
        .where_(optional.clone());
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "t" WHERE "x" = 0 AND (("a" = 1) OR ("b" = 2))"#
    );

    // Alone it needs no extra parentheses.
    let mut q = Select::new();
    q.column("id").from("t").where_(optional);
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "t" WHERE ("a" = 1) OR ("b" = 2)"#
    );
}

#[test]
fn test_nested_collapse_inside_where_and_having() {
    let nested = col("x")
        .eq(0)
        .and(Predicate::raw("").and(col("a").eq(1).or(col("b").eq(2))));

    let mut q = Select::new();
    q.column("dept")
        .from("t")
        .where_(nested)
        .where_("active")
        .group_by(["dept"])
        .having(Predicate::raw(" ").or(Predicate::raw("n > 1").or("n < 9")))
        .having("true");
    assert_eq!(
        q.to_sql(),
        concat!(
            r#"SELECT "dept" FROM "t" WHERE ("x" = 0) AND (("a" = 1) OR ("b" = 2)) AND active "#,
            r#"GROUP BY dept HAVING ((n > 1) OR (n < 9)) AND true"#,
        )
    );
}

#[test]
fn test_blank_conditions_are_skipped() {
    let mut q = Select::new();
    q.column("id").from("users").where_("").where_(" ");
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users""#);
}

#[test]
fn test_where_exists() {
    let mut a = Select::new();
    a.column(Param::new("1")).from("orders");
    let mut b = Select::new();
    b.column(Param::new("1")).from("invoices");

    let mut q = Select::new();
    q.column("id").from("users").where_exists([&a]);
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "users" WHERE EXISTS (SELECT 1 FROM "orders")"#
    );

    let mut q = Select::new();
    q.column("id")
        .from("users")
        .where_("active")
        .where_not_exists([&a, &b]);
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "users" WHERE active AND ((NOT EXISTS (SELECT 1 FROM "orders")) OR (NOT EXISTS (SELECT 1 FROM "invoices")))"#
    );
}

#[test]
fn test_where_exists_empty_adds_nothing() {
    let mut q = Select::new();
    q.column("id").from("users").where_exists(Vec::<&Select>::new());
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users""#);
}

#[test]
fn test_where_between() {
    let mut q = Select::new();
    q.column("id").from("users").where_between("age", 18, 65);
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "users" WHERE "age" BETWEEN 18 AND 65"#
    );
}

#[test]
fn test_group_by_having_order() {
    let mut q = Select::new();
    q.column("dept")
        .column(Param::new("count(*) AS n"))
        .from("staff")
        .group_by([col("dept")])
        .having("count(*) > 5")
        .order_by(col("dept"), true)
        .add_order_by("n", false);
    assert_eq!(
        q.to_sql(),
        r#"SELECT "dept", count(*) AS n FROM "staff" GROUP BY "dept" HAVING count(*) > 5 ORDER BY "dept" DESC, n"#
    );
}

#[test]
fn test_order_by_replaces() {
    let mut q = Select::new();
    q.column("id")
        .from("users")
        .order_by("a", false)
        .order_by("b", true);
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users" ORDER BY b DESC"#);
}

#[test]
fn test_clause_order_is_fixed() {
    let mut q = Select::new();
    // Deliberately called out of order.
    q.offset(40)
        .limit(20)
        .order_by("n", true)
        .having("count(*) > 1")
        .group_by(["dept"])
        .where_("active")
        .from("staff")
        .column("dept");
    assert_eq!(
        q.to_sql(),
        r#"SELECT "dept" FROM "staff" WHERE active GROUP BY dept HAVING count(*) > 1 ORDER BY n DESC LIMIT 20 OFFSET 40"#
    );
}

#[test]
fn test_pagination() {
    let mut q = Select::new();
    q.column("id").from("users").paginate(3, 25);
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users" LIMIT 25 OFFSET 50"#);

    q.paginate(0, 0);
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users" LIMIT 1 OFFSET 0"#);

    q.limit_offset(10, 5);
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "users" LIMIT 5 OFFSET 10"#);
}

#[test]
fn test_from_subquery_and_raw() {
    let mut inner = Select::new();
    inner.column("id").from("users");

    let mut q = Select::new();
    q.column("id").from_subquery(&inner, "u");
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM (SELECT "id" FROM "users") u"#
    );

    q.from_raw("generate_series(1, 3) AS g");
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM generate_series(1, 3) AS g"#);
}

#[test]
fn test_from_union() {
    let mut a = Select::new();
    a.column("id").from("a");
    let mut b = Select::new();
    b.column("id").from("b");

    let mut q = Select::new();
    q.column("id").from_union([&a, &b], "ab");
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM ((SELECT "id" FROM "a") UNION ALL (SELECT "id" FROM "b")) ab"#
    );
}

#[test]
fn test_from_union_empty_is_rejected() {
    let mut q = Select::new();
    q.column("id").from_union(Vec::<&Select>::new(), "x");
    let err = q.render().unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));
}

#[test]
fn test_valid_source_clears_empty_union_error() {
    let mut q = Select::new();
    q.column("id").from_union(Vec::<&Select>::new(), "u");
    assert!(q.render().is_err());

    q.from("users");
    assert_eq!(q.render().unwrap(), r#"SELECT "id" FROM "users""#);

    let mut inner = Select::new();
    inner.column("id").from("a");

    let mut q = Select::new();
    q.column("id").from_union(Vec::<&Select>::new(), "u");
    q.from_raw("generate_series(1, 3) g");
    assert!(q.render().is_ok());

    let mut q = Select::new();
    q.column("id").from_union(Vec::<&Select>::new(), "u");
    q.from_subquery(&inner, "s");
    assert!(q.render().is_ok());

    let mut q = Select::new();
    q.column("id").from_union(Vec::<&Select>::new(), "u");
    q.from_union([&inner], "s");
    assert_eq!(
        q.render().unwrap(),
        r#"SELECT "id" FROM ((SELECT "id" FROM "a")) s"#
    );
}

#[test]
fn test_window_function_column() {
    let mut q = Select::new();
    q.column("id")
        .column(WindowFunc::rank().order_by(col("score"), true).alias("pos"))
        .from("players");
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id", RANK() OVER (ORDER BY "score" DESC) AS pos FROM "players""#
    );
}

#[test]
fn test_select_render_validation() {
    let mut q = Select::new();
    q.from("users");
    let err = q.render().unwrap_err();
    assert_eq!(err, SqlError::missing(StatementKind::Select, "select list"));

    let mut q = Select::new();
    q.column("id");
    let err = q.render().unwrap_err();
    assert_eq!(err, SqlError::missing(StatementKind::Select, "FROM"));
    // The permissive path still produces text.
    assert_eq!(q.to_sql(), r#"SELECT "id""#);
}

#[test]
fn test_render_caches_last_sql() {
    let mut q = Select::new();
    q.column("id").from("users");
    assert_eq!(q.last_sql(), "");
    let sql = q.render().unwrap();
    assert_eq!(q.last_sql(), sql);
    assert_eq!(q.to_string(), sql);

    // A failed render leaves the cache alone.
    q.reset();
    assert!(q.render().is_err());
    assert_eq!(q.last_sql(), "");
}

#[test]
fn test_every_statement_caches_rendered_sql() {
    let mut s = Select::new();
    s.column("id").from("t");
    let mut i = Insert::new();
    i.insert("id", 1).table("t");
    let mut u = Update::new();
    u.update("t").set("id", 2);
    let mut d = Delete::new();
    d.from("t");

    assert_eq!(s.render().unwrap(), s.last_sql());
    assert_eq!(i.render().unwrap(), i.last_sql());
    assert_eq!(u.render().unwrap(), u.last_sql());
    assert_eq!(d.render().unwrap(), d.last_sql());
    assert_eq!(u.last_sql(), "UPDATE t SET id = 2");

    d.reset();
    assert_eq!(d.last_sql(), "");
}

#[test]
fn test_render_is_repeatable() {
    let mut q = Select::new();
    q.column("id").from("users").where_("id = 1");
    let first = q.render().unwrap();
    let second = q.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_select_reset_matches_fresh() {
    let mut q = Select::new();
    q.distinct()
        .column("id")
        .from("users")
        .left_join("roles", "true")
        .where_("a")
        .group_by(["b"])
        .having("c")
        .order_by("d", true)
        .limit(1)
        .offset(2);
    q.render().unwrap();
    q.reset();
    assert_eq!(q.to_sql(), Select::new().to_sql());
    assert_eq!(q.last_sql(), "");
}

// ==================== Insert ====================

#[test]
fn test_insert() {
    let mut q = Insert::new();
    q.insert("name", "Alice").insert("age", 30).table("users");
    assert_eq!(
        q.to_sql(),
        r#"INSERT INTO "users"("name", "age") VALUES('Alice', 30)"#
    );
}

#[test]
fn test_insert_null_bool_and_placeholder() {
    let mut q = Insert::new();
    q.insert("nick", None::<&str>)
        .insert("active", true)
        .insert_placeholder("avatar")
        .table_schema("app", "users");
    assert_eq!(
        q.to_sql(),
        r#"INSERT INTO app."users"("nick", "active", "avatar") VALUES(null, TRUE, ?)"#
    );
}

#[test]
fn test_insert_or_replace() {
    let mut q = Insert::new();
    q.insert("id", 1).table("kv").replace(true);
    assert_eq!(q.to_sql(), r#"INSERT OR REPLACE INTO "kv"("id") VALUES(1)"#);

    q.replace(false);
    assert_eq!(q.to_sql(), r#"INSERT INTO "kv"("id") VALUES(1)"#);
}

#[test]
fn test_insert_render_validation() {
    let mut q = Insert::new();
    q.insert("id", 1);
    assert_eq!(
        q.render().unwrap_err(),
        SqlError::missing(StatementKind::Insert, "INTO")
    );

    let mut q = Insert::new();
    q.table("users");
    assert_eq!(
        q.render().unwrap_err(),
        SqlError::missing(StatementKind::Insert, "column list")
    );
}

#[test]
fn test_insert_reset_clears_replace() {
    let mut q = Insert::new();
    q.insert("id", 1).table("kv").replace(true);
    q.reset();
    assert_eq!(q.to_sql(), Insert::new().to_sql());
    assert!(q.to_sql().starts_with("INSERT INTO"));
}

// ==================== Update ====================

#[test]
fn test_update() {
    let mut q = Update::new();
    q.update("users").set("age", 31).where_("id = 1");
    assert_eq!(q.to_sql(), "UPDATE users SET age = 31 WHERE id = 1");
}

#[test]
fn test_update_null_and_multiple_conditions() {
    let mut q = Update::new();
    q.update("users")
        .set("nick", None::<String>)
        .set("name", "Bob")
        .where_(col("id").eq(7))
        .where_(col("deleted_at").is_null());
    assert_eq!(
        q.to_sql(),
        r#"UPDATE users SET nick = null, name = 'Bob' WHERE "id" = 7 AND "deleted_at" IS NULL"#
    );
}

#[test]
fn test_update_render_validation() {
    let mut q = Update::new();
    q.set("a", 1);
    assert_eq!(
        q.render().unwrap_err(),
        SqlError::missing(StatementKind::Update, "table")
    );

    let mut q = Update::new();
    q.update("t");
    assert_eq!(
        q.render().unwrap_err(),
        SqlError::missing(StatementKind::Update, "SET")
    );
}

// ==================== Delete ====================

#[test]
fn test_delete() {
    let mut q = Delete::new();
    q.from("users").where_("id = 1");
    assert_eq!(q.to_sql(), r#"DELETE FROM "users" WHERE id = 1"#);
}

#[test]
fn test_delete_all_rows() {
    let mut q = Delete::new();
    q.from_schema("app", "sessions");
    assert_eq!(q.render().unwrap(), r#"DELETE FROM app."sessions""#);
}

#[test]
fn test_delete_render_validation() {
    let mut q = Delete::new();
    q.where_("id = 1");
    assert_eq!(
        q.render().unwrap_err(),
        SqlError::missing(StatementKind::Delete, "FROM")
    );
}

// ==================== Shared ====================

#[test]
fn test_statement_trait_object() {
    let mut s = Select::new();
    s.column("id").from("t");
    let mut d = Delete::new();
    d.from("t");

    let stmts: Vec<&dyn Statement> = vec![&s, &d];
    let kinds: Vec<StatementKind> = stmts.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, [StatementKind::Select, StatementKind::Delete]);
    assert!(stmts.iter().all(|s| s.validate().is_ok()));
    assert_eq!(stmts[1].build_sql(), r#"DELETE FROM "t""#);
}

#[test]
fn test_nested_statement_value_is_parenthesized() {
    let mut sub = Select::new();
    sub.column("id").from("admins");

    let mut q = Select::new();
    q.column("id").from("users").where_(col("id").eq(&sub));
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "users" WHERE "id" = (SELECT "id" FROM "admins")"#
    );
}
