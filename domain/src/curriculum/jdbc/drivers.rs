//! Driver types and how drivers are discovered

use crate::topic::{PracticeQuestion, Topic};
use std::sync::LazyLock;

pub static DRIVERS: LazyLock<Topic> = LazyLock::new(|| {
    Topic::new(
        "drivers",
        "JDBC Drivers",
        "The four driver types, driver loading and JDBC URLs",
    )
    .with_content(CONTENT)
    .with_code(CODE)
    .with_practice_question(PracticeQuestion::new(
        "Print the class name and version of every driver registered with DriverManager.",
        "DriverManager.drivers() returns a Stream<Driver>; each Driver has getMajorVersion() and getMinorVersion().",
        r#"import java.sql.*;

public class ListDrivers {
    public static void main(String[] args) {
        // iterate over the registered drivers
    }
}"#,
    ))
    .with_practice_question(PracticeQuestion::new(
        "Write JDBC URLs for a MySQL database `school` on port 3306 and an H2 file database stored in ./data/school.",
        "The subprotocol comes right after `jdbc:` and differs per vendor.",
        r#"String mysqlUrl = "";
String h2Url = "";"#,
    ))
});

const CONTENT: &str = r#"# JDBC Drivers

A **driver** is the vendor code that turns JDBC calls into the database's
wire protocol.

## Driver types

1. **Type 1, JDBC-ODBC bridge**: translated calls to ODBC. Removed in Java 8.
2. **Type 2, native API**: Java wrapper over a native client library.
3. **Type 3, network protocol**: talks to a middleware server.
4. **Type 4, thin driver**: pure Java, speaks the database protocol directly.

Almost every modern driver is Type 4.

## Loading a driver

Since JDBC 4.0 drivers register themselves through the `ServiceLoader`
mechanism: any driver jar on the classpath with a
`META-INF/services/java.sql.Driver` entry is picked up automatically. The old
`Class.forName("org.postgresql.Driver")` call is no longer needed, though you
will still see it in legacy code.

## JDBC URLs

```
jdbc:<subprotocol>:<subname>
```

- `jdbc:postgresql://db.example.com:5432/shop`
- `jdbc:mysql://localhost:3306/shop?useSSL=true`
- `jdbc:h2:mem:test`
- `jdbc:sqlite:/var/data/app.db`

`DriverManager` asks each registered driver whether it `acceptsURL(url)` and
uses the first one that says yes."#;

const CODE: &str = r#"import java.sql.Driver;
import java.sql.DriverManager;
import java.sql.SQLException;

public class DriverCheck {
    public static void main(String[] args) throws SQLException {
        String url = "jdbc:postgresql://localhost:5432/shop";

        // Legacy style, only needed for pre-JDBC 4.0 drivers:
        // Class.forName("org.postgresql.Driver");

        Driver driver = DriverManager.getDriver(url);
        System.out.printf("%s %d.%d handles %s%n",
                driver.getClass().getName(),
                driver.getMajorVersion(),
                driver.getMinorVersion(),
                url);
    }
}"#;
