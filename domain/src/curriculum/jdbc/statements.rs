//! Plain Statement objects and the three execute methods

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static STATEMENTS: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "statements",
        "Executing SQL with Statement",
        "executeQuery, executeUpdate and execute, and when to use each",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Create a table `books(id INT PRIMARY KEY, title VARCHAR(200))` and insert two rows using a Statement. Print the total number of affected rows.",
        "DDL goes through execute or executeUpdate; executeUpdate returns the row count for DML.",
        r#"try (Connection conn = DriverManager.getConnection("jdbc:h2:mem:books");
     Statement stmt = conn.createStatement()) {
    // create the table and insert rows
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Explain why building SQL with string concatenation of user input is dangerous, and show an input that breaks the query below.",
        "Think about what happens when the name contains a single quote.",
        r#"String sql = "SELECT * FROM users WHERE name = '" + name + "'";"#,
    ))
});

const CONTENT: &str = r#"# Executing SQL with Statement

A `Statement` sends a SQL string to the database as-is. Create one from a
connection with `conn.createStatement()`.

## Three ways to execute

| Method | Use for | Returns |
|--------|---------|---------|
| `executeQuery(sql)` | `SELECT` | `ResultSet` |
| `executeUpdate(sql)` | `INSERT`, `UPDATE`, `DELETE`, DDL | affected row count |
| `execute(sql)` | anything, when you don't know in advance | `true` if a `ResultSet` is available |

After `execute`, call `getResultSet()` or `getUpdateCount()` to read the
outcome.

## Limits of Statement

- The SQL is parsed and planned on every call.
- Values have to be spliced into the string, which invites **SQL injection**.

For anything that takes parameters, use `PreparedStatement` (next lesson).
Plain statements remain handy for fixed DDL and one-off administrative
queries.

## Tuning knobs

- `setQueryTimeout(seconds)` cancels a runaway query.
- `setMaxRows(n)` caps the number of rows returned.
- `setFetchSize(n)` hints how many rows to fetch per round trip."#;

const CODE: &str = r#"import java.sql.*;

public class StatementDemo {
    public static void main(String[] args) throws SQLException {
        try (Connection conn = DriverManager.getConnection("jdbc:h2:mem:demo");
             Statement stmt = conn.createStatement()) {

            stmt.execute("CREATE TABLE products (id INT PRIMARY KEY, name VARCHAR(100), price DECIMAL(10,2))");

            int inserted = stmt.executeUpdate(
                "INSERT INTO products VALUES (1, 'Keyboard', 49.90), (2, 'Mouse', 19.90)");
            System.out.println("Inserted " + inserted + " rows");

            stmt.setQueryTimeout(5);
            try (ResultSet rs = stmt.executeQuery("SELECT name, price FROM products ORDER BY price")) {
                while (rs.next()) {
                    System.out.println(rs.getString("name") + ": " + rs.getBigDecimal("price"));
                }
            }
        }
    }
}"#;
