//! Sending many statements in one round trip

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static BATCH_UPDATES: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "batch-updates",
        "Batch Updates",
        "addBatch and executeBatch for bulk inserts and updates",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Import a list of 10,000 products using a PreparedStatement batch, flushing every 500 rows.",
        "Call executeBatch() when the counter is a multiple of 500, and once more after the loop.",
        r#"static void importProducts(Connection conn, List<Product> products) throws SQLException {
    String sql = "INSERT INTO products (sku, name, price) VALUES (?, ?, ?)";
    // your code here
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Catch a BatchUpdateException and report which statements in the batch failed.",
        "getUpdateCounts() returns an int[]; Statement.EXECUTE_FAILED marks failed entries.",
        r#"} catch (BatchUpdateException e) {
    int[] counts = e.getUpdateCounts();
    // your code here
}"#,
    ))
});

const CONTENT: &str = r#"# Batch Updates

Executing thousands of inserts one at a time means thousands of network
round trips. **Batching** queues statements on the client and sends them
together.

```java
for (Product p : products) {
    ps.setString(1, p.sku());
    ps.addBatch();
}
int[] counts = ps.executeBatch();
```

## Return value

`executeBatch()` returns one update count per queued statement.
`Statement.SUCCESS_NO_INFO` means the statement worked but the driver did
not report a count; `Statement.EXECUTE_FAILED` marks a failure.

## Failures

If a statement fails, the driver throws `BatchUpdateException`. Depending on
the driver it either stops at the first failure or keeps going;
`getUpdateCounts()` tells you how far it got.

## Tips

- Run batches inside a transaction (`setAutoCommit(false)`) so a failure can
  be rolled back as a whole, and so the database does not commit per row.
- Flush large batches in chunks (for example every 500 or 1000 rows) to
  bound client memory.
- Some drivers need a flag to rewrite batches into multi-row inserts, such as
  `reWriteBatchedInserts=true` for PostgreSQL and
  `rewriteBatchedStatements=true` for MySQL."#;

const CODE: &str = r#"import java.sql.*;
import java.util.List;

public class ProductImporter {
    private static final int BATCH_SIZE = 500;
    private static final String INSERT = "INSERT INTO products (sku, name, price) VALUES (?, ?, ?)";

    public record Product(String sku, String name, java.math.BigDecimal price) {}

    public int importAll(Connection conn, List<Product> products) throws SQLException {
        conn.setAutoCommit(false);
        int total = 0;
        try (PreparedStatement ps = conn.prepareStatement(INSERT)) {
            int pending = 0;
            for (Product product : products) {
                ps.setString(1, product.sku());
                ps.setString(2, product.name());
                ps.setBigDecimal(3, product.price());
                ps.addBatch();

                if (++pending == BATCH_SIZE) {
                    total += sum(ps.executeBatch());
                    pending = 0;
                }
            }
            if (pending > 0) {
                total += sum(ps.executeBatch());
            }
            conn.commit();
        } catch (SQLException e) {
            conn.rollback();
            throw e;
        }
        return total;
    }

    private static int sum(int[] counts) {
        int n = 0;
        for (int c : counts) {
            n += c == Statement.SUCCESS_NO_INFO ? 1 : c;
        }
        return n;
    }
}"#;
