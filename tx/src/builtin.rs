//! Built-in SQL templates
//!
//! Compiled into the binary; user template files are layered on top.

use crate::store::{TemplateStore, TemplateStoreBuilder};

/// Width of the `--` comment banner rule
const BANNER_WIDTH: usize = 80;

/// Trigger key and body for every built-in template except the comment banner
pub const TEMPLATES: &[(&str, &str)] = &[
    // Blocks, transaction control
    ("br", "BEGIN TRAN\n\n\t|\n\nROLLBACK"),
    ("bc", "BEGIN TRAN\n\n\t|\n\nCOMMIT"),
    ("btr", "BEGIN TRAN\n\n\t|\n\nROLLBACK\n--COMMIT"),
    ("btc", "BEGIN TRAN\n\n\t|\n\nCOMMIT\n--ROLLBACK"),
    ("be", "BEGIN\n\n\t|\n\nEND"),
    ("bt", "BEGIN TRAN"),
    ("rt", "ROLLBACK"),
    ("ct", "COMMIT"),
    // Statements
    ("ssf", "SELECT * FROM |"),
    ("s", "SELECT |"),
    ("sfw", "SELECT *\nFROM |\nWHERE "),
    ("ufw", "UPDATE \n   SET \nFROM |\nWHERE "),
    ("iv", "INSERT INTO | ()\nVALUES ()"),
    ("is", "INSERT INTO | ()\n\tSELECT * FROM"),
    ("isw", "INSERT INTO | ()\n\tSELECT * FROM WHERE "),
    ("ft", "FROM |"),
    ("wh", "WHERE | = "),
    ("wi", "WHERE |ID = "),
    // Joins
    ("j", "JOIN |\n  ON "),
    ("lj", "LEFT JOIN |\n       ON "),
    ("rj", "RIGHT JOIN |\n        ON "),
    ("fj", "FULL JOIN |\n       ON "),
    ("cj", "CROSS JOIN |"),
    // Helpers
    ("ob", "ORDER BY |"),
    ("gb", "GROUP BY |"),
    ("hv", "HAVING |"),
    ("isn", "IS NULL"),
    ("isnn", "IS NOT NULL"),
    ("ex", "EXEC |"),
    ("exi", "EXISTS(|)"),
    ("nex", "NOT EXISTS(|)"),
    ("pr", "PRINT '|'"),
    ("d", "dbo.|"),
    // Declarations
    ("di", "DECLARE @| INT"),
    ("dv", "DECLARE @| VARCHAR(MAX)"),
    ("dn", "DECLARE @| NUMERIC(12,4)"),
    ("dm", "DECLARE @| MONEY"),
    ("ddt", "DECLARE @| DATETIME"),
    ("dt", "DECLARE @| TIME"),
    ("dd", "DECLARE @| DATE"),
    // Declarations with assignment
    ("die", "DECLARE @| INT = "),
    ("dve", "DECLARE @| VARCHAR(MAX) = ''"),
    ("dne", "DECLARE @| NUMERIC(12,4) = "),
    ("dme", "DECLARE @| MONEY = "),
    ("ddte", "DECLARE @| DATETIME = "),
    ("dte", "DECLARE @| TIME = "),
    ("dde", "DECLARE @| DATE = "),
    // Case
    ("ca", "CASE | WHEN END"),
    ("cw", "CASE WHEN | THEN  END"),
    ("cwe", "CASE WHEN | THEN  ELSE  END"),
    ("wt", "WHEN | THEN "),
    // If
    ("ib", "IF |\nBEGIN\n\n\t\n\nEND"),
    ("ibe", "IF |\nBEGIN\n\n\t\n\nEND\nELSE\nBEGIN\n\n\t\n\nEND"),
];

/// Comment banner: a dash rule, a comment line holding the caret, another rule
pub fn comment_banner() -> String {
    let rule = "-".repeat(BANNER_WIDTH);
    format!("{rule}\n-- |\n{rule}")
}

/// Builder preloaded with every built-in template
pub fn builder() -> TemplateStoreBuilder {
    let mut builder = TemplateStore::builder();
    builder.extend_overriding(TEMPLATES.iter().copied());
    builder.extend_overriding([("--", comment_banner())]);
    builder
}

/// Store holding only the built-in templates
pub fn store() -> TemplateStore {
    builder().build()
}
