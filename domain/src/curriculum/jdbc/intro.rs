//! What JDBC is and where it sits between an application and a database

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static INTRO: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "intro",
        "Introduction to JDBC",
        "What JDBC is and how a Java program talks to a relational database",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Write a program that connects to an in-memory H2 database and prints the database product name.",
        "Connection#getMetaData() returns a DatabaseMetaData object with getDatabaseProductName().",
        r#"import java.sql.*;

public class HelloJdbc {
    public static void main(String[] args) throws SQLException {
        String url = "jdbc:h2:mem:lesson";
        // open a connection and print the product name
    }
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "List the four core JDBC interfaces you use to run a query and read its results, in the order you obtain them.",
        "Start from the class that hands out connections and end with the object you iterate over.",
        "// DriverManager -> ? -> ? -> ?",
    ))
});

const CONTENT: &str = r#"# Introduction to JDBC

**JDBC** (Java Database Connectivity) is the standard Java API for talking to
relational databases. It lives in the `java.sql` and `javax.sql` packages and
ships with every JDK.

JDBC defines *interfaces*; database vendors supply the *implementations* in a
driver jar. Your code is written against the interfaces, so switching from
PostgreSQL to MySQL is mostly a matter of changing the driver and the URL.

## The moving parts

| Piece | Role |
|-------|------|
| `DriverManager` / `DataSource` | Hands out connections |
| `Connection` | A session with the database |
| `Statement` / `PreparedStatement` | Sends SQL |
| `ResultSet` | A cursor over returned rows |
| `SQLException` | Everything that can go wrong |

## A typical round trip

1. Obtain a `Connection` from a URL such as `jdbc:postgresql://localhost/shop`.
2. Create a `Statement` or `PreparedStatement`.
3. Execute the SQL.
4. Walk the `ResultSet` row by row.
5. Close everything, ideally with *try-with-resources*.

Every JDBC resource holds something on the database side (a socket, a
cursor, server memory), so closing them promptly is not optional."#;

const CODE: &str = r#"import java.sql.Connection;
import java.sql.DriverManager;
import java.sql.ResultSet;
import java.sql.SQLException;
import java.sql.Statement;

public class FirstQuery {
    public static void main(String[] args) {
        String url = "jdbc:postgresql://localhost:5432/shop";

        try (Connection conn = DriverManager.getConnection(url, "shop", "secret");
             Statement stmt = conn.createStatement();
             ResultSet rs = stmt.executeQuery("SELECT id, name FROM customers")) {

            while (rs.next()) {
                System.out.println(rs.getInt("id") + " " + rs.getString("name"));
            }
        } catch (SQLException e) {
            System.err.println("Query failed: " + e.getMessage());
        }
    }
}"#;
