//! Parameterised SQL with PreparedStatement

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static PREPARED_STATEMENTS: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "prepared-statements",
        "PreparedStatement",
        "Parameter binding, SQL injection prevention and statement reuse",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Write a method that finds a user by email using a PreparedStatement and returns the user's id, or -1 if there is no match.",
        "Parameter indexes start at 1, not 0.",
        r#"static long findUserId(Connection conn, String email) throws SQLException {
    String sql = "SELECT id FROM users WHERE email = ?";
    // prepare, bind, execute
    return -1;
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Update the price of a product and handle a NULL discount column correctly.",
        "setNull(index, Types.DECIMAL) writes SQL NULL; setBigDecimal with a null argument is driver dependent.",
        r#"static void updatePrice(Connection conn, int id, BigDecimal price, BigDecimal discount)
        throws SQLException {
    String sql = "UPDATE products SET price = ?, discount = ? WHERE id = ?";
    // your code here
}"#,
    ))
});

const CONTENT: &str = r#"# PreparedStatement

A `PreparedStatement` is a SQL template with `?` placeholders. The SQL is
sent once, and values are bound separately:

```java
PreparedStatement ps = conn.prepareStatement(
    "SELECT * FROM orders WHERE customer_id = ? AND status = ?");
ps.setLong(1, customerId);
ps.setString(2, "SHIPPED");
```

## Why prefer it

- **Safety**: values are never parsed as SQL, which shuts the door on SQL
  injection.
- **Performance**: the database can cache the execution plan and reuse it
  for every execution with new parameters.
- **Type handling**: the driver converts Java types (`LocalDate`,
  `BigDecimal`, `byte[]`) to the right SQL types.

## Binding values

| Setter | SQL type |
|--------|----------|
| `setInt`, `setLong` | `INTEGER`, `BIGINT` |
| `setString` | `VARCHAR`, `TEXT` |
| `setBigDecimal` | `DECIMAL`, `NUMERIC` |
| `setObject(i, LocalDate)` | `DATE` |
| `setNull(i, Types.X)` | `NULL` |

Parameters are numbered from **1**. Call `clearParameters()` to reset all
bindings before reusing the statement.

## What placeholders cannot do

Placeholders stand for *values* only. Table names, column names and
`ORDER BY` directions cannot be bound; validate them against an allow-list
instead."#;

const CODE: &str = r##"import java.math.BigDecimal;
import java.sql.*;
import java.time.LocalDate;

public class OrderQueries {
    private static final String FIND_RECENT =
        "SELECT id, total, placed_on FROM orders WHERE customer_id = ? AND placed_on >= ? ORDER BY placed_on DESC";

    public static void printRecentOrders(Connection conn, long customerId, LocalDate since)
            throws SQLException {
        try (PreparedStatement ps = conn.prepareStatement(FIND_RECENT)) {
            ps.setLong(1, customerId);
            ps.setObject(2, since);

            try (ResultSet rs = ps.executeQuery()) {
                while (rs.next()) {
                    long id = rs.getLong("id");
                    BigDecimal total = rs.getBigDecimal("total");
                    LocalDate placedOn = rs.getObject("placed_on", LocalDate.class);
                    System.out.printf("#%d %s on %s%n", id, total, placedOn);
                }
            }
        }
    }
}"##;
