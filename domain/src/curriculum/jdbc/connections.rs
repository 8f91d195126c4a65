//! Opening, pooling and closing connections

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static CONNECTIONS: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "connections",
        "Managing Connections",
        "DriverManager versus DataSource, connection pools and try-with-resources",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Write a helper that opens a connection from a DataSource, checks it with isValid(2), and returns it.",
        "isValid takes a timeout in seconds and returns false instead of throwing when the connection is dead.",
        r#"import java.sql.*;
import javax.sql.DataSource;

public class Connections {
    static Connection open(DataSource ds) throws SQLException {
        // your code here
        return null;
    }
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Rewrite the given method so the connection is always closed, even when the query throws.",
        "Declare the Connection inside the parentheses of a try statement.",
        r#"static int countUsers(DataSource ds) throws SQLException {
    Connection conn = ds.getConnection();
    Statement stmt = conn.createStatement();
    ResultSet rs = stmt.executeQuery("SELECT COUNT(*) FROM users");
    rs.next();
    return rs.getInt(1);
}"#,
    ))
});

const CONTENT: &str = r#"# Managing Connections

A `Connection` represents one session with the database. Opening one is
expensive: a TCP handshake, authentication, and session setup on the server.

## DriverManager

```java
Connection conn = DriverManager.getConnection(url, user, password);
```

Simple and fine for scripts and tests. Every call opens a brand new physical
connection.

## DataSource

`javax.sql.DataSource` is the preferred factory in applications. It is
configured once (URL, credentials, pool size) and injected where needed.
Most implementations are backed by a **connection pool** such as HikariCP,
which keeps a set of open connections and lends them out. Calling `close()`
on a pooled connection returns it to the pool instead of closing the socket.

## Always close

Use *try-with-resources* so connections are released on every path:

```java
try (Connection conn = dataSource.getConnection()) {
    // work with conn
}
```

Leaked connections exhaust the pool and the application stalls waiting for
one that never comes back.

## Useful connection settings

- `setAutoCommit(boolean)`: see the Transactions lesson.
- `setReadOnly(true)`: a hint that lets drivers route to replicas.
- `setNetworkTimeout(executor, millis)`: bound how long a call may block.
- `isValid(seconds)`: cheap liveness check."#;

const CODE: &str = r#"import com.zaxxer.hikari.HikariConfig;
import com.zaxxer.hikari.HikariDataSource;

import java.sql.Connection;
import java.sql.SQLException;

public class PooledConnections {
    private final HikariDataSource dataSource;

    public PooledConnections() {
        HikariConfig config = new HikariConfig();
        config.setJdbcUrl("jdbc:postgresql://localhost:5432/shop");
        config.setUsername("shop");
        config.setPassword("secret");
        config.setMaximumPoolSize(10);
        this.dataSource = new HikariDataSource(config);
    }

    public boolean ping() {
        try (Connection conn = dataSource.getConnection()) {
            return conn.isValid(2);
        } catch (SQLException e) {
            return false;
        }
    }

    public void shutdown() {
        dataSource.close();
    }
}"#;
