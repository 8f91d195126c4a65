//! Reading rows, NULL handling and result set metadata

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static RESULT_SETS: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "result-sets",
        "Working with ResultSet",
        "Cursor navigation, column getters, NULL values and metadata",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Map every row of `SELECT id, name, email FROM customers` into a list of Customer records.",
        "Loop with while (rs.next()) and read columns by label.",
        r#"record Customer(long id, String name, String email) {}

static List<Customer> loadCustomers(Connection conn) throws SQLException {
    List<Customer> customers = new ArrayList<>();
    // your code here
    return customers;
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Print the column names and SQL type names of any query using ResultSetMetaData.",
        "Metadata columns are numbered from 1 to getColumnCount().",
        r#"static void describe(ResultSet rs) throws SQLException {
    ResultSetMetaData meta = rs.getMetaData();
    // your code here
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Read a nullable INTEGER column `manager_id` so that SQL NULL becomes a Java null instead of 0.",
        "Call wasNull() right after the getter, or use getObject with Integer.class.",
        "Integer managerId = ",
    ))
});

const CONTENT: &str = r#"# Working with ResultSet

A `ResultSet` is a cursor over the rows a query returned. It starts
*before* the first row; each call to `next()` advances one row and returns
`false` when the rows run out.

```java
while (rs.next()) {
    String name = rs.getString("name");
}
```

## Reading columns

Columns can be read by **label** (`rs.getString("name")`) or by **index**
(`rs.getString(1)`, starting at 1). Labels are clearer; indexes are slightly
faster and necessary when two columns share a name.

## NULL values

Primitive getters cannot return `null`: `getInt` returns `0` for SQL NULL.
Either check `rs.wasNull()` immediately after the getter, or use the boxed
form `rs.getObject("col", Integer.class)`.

## Scrollable and updatable result sets

By default a result set is `TYPE_FORWARD_ONLY` and `CONCUR_READ_ONLY`.
Requesting `TYPE_SCROLL_INSENSITIVE` enables `previous()`, `absolute(n)` and
`last()`, at the cost of the driver buffering rows.

## Metadata

`rs.getMetaData()` returns a `ResultSetMetaData` describing the columns:
count, names, SQL types, nullability. Generic tools such as CSV exporters
are built on it."#;

const CODE: &str = r#"import java.sql.*;

public class ResultSetDemo {
    public static void dump(Connection conn, String sql) throws SQLException {
        try (Statement stmt = conn.createStatement();
             ResultSet rs = stmt.executeQuery(sql)) {

            ResultSetMetaData meta = rs.getMetaData();
            int columns = meta.getColumnCount();

            for (int i = 1; i <= columns; i++) {
                System.out.print(meta.getColumnLabel(i) + (i < columns ? "\t" : "\n"));
            }

            while (rs.next()) {
                for (int i = 1; i <= columns; i++) {
                    Object value = rs.getObject(i);
                    System.out.print((rs.wasNull() ? "NULL" : value) + (i < columns ? "\t" : "\n"));
                }
            }
        }
    }
}"#;
