//! Auto-commit, commit/rollback, savepoints and isolation levels

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static TRANSACTIONS: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "transactions",
        "Transactions",
        "Grouping statements atomically with commit, rollback and savepoints",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Implement a money transfer between two accounts that either applies both updates or neither.",
        "Turn off auto-commit, run both updates, commit, and roll back in the catch block.",
        r#"static void transfer(Connection conn, long from, long to, BigDecimal amount)
        throws SQLException {
    String debit = "UPDATE accounts SET balance = balance - ? WHERE id = ?";
    String credit = "UPDATE accounts SET balance = balance + ? WHERE id = ?";
    // your code here
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Insert an order and its lines; if a single line fails, keep the order but discard that line using a savepoint.",
        "Set a savepoint before each line and call rollback(savepoint) when its insert throws.",
        r#"Savepoint sp = conn.setSavepoint("line");"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Which isolation level prevents non-repeatable reads but still allows phantom reads?",
        "Compare READ_COMMITTED, REPEATABLE_READ and SERIALIZABLE.",
        "int level = Connection.",
    ))
});

const CONTENT: &str = r#"# Transactions

A **transaction** groups several statements so they succeed or fail as a
unit. JDBC connections start in **auto-commit** mode: every statement is
its own transaction and is committed immediately.

## Manual transactions

```java
conn.setAutoCommit(false);
try {
    // several statements
    conn.commit();
} catch (SQLException e) {
    conn.rollback();
    throw e;
} finally {
    conn.setAutoCommit(true);
}
```

Restoring auto-commit matters with pooled connections: the next borrower
should not inherit an open transaction.

## Savepoints

`conn.setSavepoint()` marks a point inside a transaction.
`conn.rollback(savepoint)` undoes the work done after it without abandoning
the whole transaction.

## Isolation levels

| Level | Dirty reads | Non-repeatable reads | Phantom reads |
|-------|-------------|----------------------|---------------|
| `TRANSACTION_READ_UNCOMMITTED` | possible | possible | possible |
| `TRANSACTION_READ_COMMITTED` | prevented | possible | possible |
| `TRANSACTION_REPEATABLE_READ` | prevented | prevented | possible |
| `TRANSACTION_SERIALIZABLE` | prevented | prevented | prevented |

Set it with `conn.setTransactionIsolation(...)` before the transaction
starts. Stricter levels cost concurrency; most applications run with
`READ_COMMITTED`, the default for PostgreSQL and Oracle."#;

const CODE: &str = r#"import java.math.BigDecimal;
import java.sql.*;

public class TransferService {
    private static final String DEBIT = "UPDATE accounts SET balance = balance - ? WHERE id = ? AND balance >= ?";
    private static final String CREDIT = "UPDATE accounts SET balance = balance + ? WHERE id = ?";

    public void transfer(Connection conn, long from, long to, BigDecimal amount) throws SQLException {
        boolean previous = conn.getAutoCommit();
        conn.setAutoCommit(false);
        try (PreparedStatement debit = conn.prepareStatement(DEBIT);
             PreparedStatement credit = conn.prepareStatement(CREDIT)) {

            debit.setBigDecimal(1, amount);
            debit.setLong(2, from);
            debit.setBigDecimal(3, amount);
            if (debit.executeUpdate() != 1) {
                throw new SQLException("Insufficient funds in account " + from);
            }

            credit.setBigDecimal(1, amount);
            credit.setLong(2, to);
            credit.executeUpdate();

            conn.commit();
        } catch (SQLException e) {
            conn.rollback();
            throw e;
        } finally {
            conn.setAutoCommit(previous);
        }
    }
}"#;
